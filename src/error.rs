//! Error types shared by the transport and client layers.

use std::error::Error as StdError;

use serde_json::{Map, Value};

use crate::domain::{ServiceCode, ValidationError};

/// Business failure raised when the gateway answered with a status code that
/// is not the endpoint family's success sentinel.
///
/// `code` is always a member of the family's closed table (the undefined
/// sentinel when the gateway sent nothing recognizable), and `fields` echoes
/// the remaining body fields (for example `jobid`).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("API error: status {status}, code {code}")]
pub struct ApiError {
    /// HTTP status, coerced to 406 when the transport reported 200 but the
    /// body signals failure.
    pub status: u16,
    /// Normalized status code, tagged with its endpoint family.
    pub code: ServiceCode,
    /// Human-readable description from the body, when present.
    pub description: Option<String>,
    /// The rest of the body, echoed verbatim.
    pub fields: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NetgsmClient`](crate::NetgsmClient).
///
/// Callers branch on `status` and `code` together: [`NetgsmError::Http`]
/// covers pure HTTP-level failures, while [`NetgsmError::Api`] covers
/// business failures signaled through HTTP 200/406 bodies.
pub enum NetgsmError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP status outside the body-driven range ({200, 406}).
    #[error("HTTP error: status {status}, code {code}")]
    Http {
        status: u16,
        /// Body code classified against the operation's family; the
        /// undefined sentinel when the body carried nothing recognizable.
        code: ServiceCode,
        description: String,
    },

    /// Response body could not be parsed in the endpoint's format.
    #[error("parse error: {description}")]
    Parse { status: u16, description: String },

    /// Parsed body is not the expected shape (null or not an object).
    #[error("invalid response: body is not an object (status {status})")]
    InvalidResponse { status: u16 },

    /// The gateway rejected the operation with a non-success status code.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Failure from a legacy-generation endpoint.
    ///
    /// Legacy endpoints predate the per-family code tables; the raw gateway
    /// code is preserved here without sentinel substitution. Use
    /// [`KnownLegacyCode::from_wire`](crate::domain::KnownLegacyCode::from_wire)
    /// to map it.
    #[error("legacy API error: status {status}, code {code}")]
    LegacyApi {
        status: u16,
        code: String,
        description: Option<String>,
        fields: Map<String, Value>,
    },

    /// The balance endpoint answered with a non-200 status; the full body is
    /// echoed. This endpoint does not participate in the code taxonomy.
    #[error("balance query rejected: status {status}")]
    BalanceRejected { status: u16, body: Value },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use crate::domain::{SendSmsCode, ServiceCode};

    use super::*;

    #[test]
    fn display_carries_status_and_code() {
        let err = NetgsmError::Api(ApiError {
            status: 406,
            code: ServiceCode::Send(SendSmsCode::InvalidHeader),
            description: Some("Check the msgheader parameter".to_owned()),
            fields: Map::new(),
        });
        assert_eq!(err.to_string(), "API error: status 406, code 40");

        let err = NetgsmError::Http {
            status: 503,
            code: ServiceCode::Send(SendSmsCode::Undefined),
            description: "HTTP Error".to_owned(),
        };
        assert_eq!(err.to_string(), "HTTP error: status 503, code 5000");
    }
}
