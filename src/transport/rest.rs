use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{ServiceCode, StatusCodeFamily};
use crate::error::{ApiError, NetgsmError};

/// HTTP statuses eligible for body-driven interpretation. Anything else is
/// an unconditional HTTP-level failure.
pub(crate) const HTTP_OK: u16 = 200;
pub(crate) const HTTP_BUSINESS_REJECT: u16 = 406;

/// Run the shared decision procedure for a REST v2 response.
///
/// Parses the body, checks status eligibility and body shape, classifies the
/// body's `code` against the family `C`, and either returns the success body
/// object or raises the matching [`NetgsmError`]. Business failures carry
/// status 406 even when the transport reported 200, plus every body field
/// other than `code`/`description` echoed verbatim.
pub(crate) fn decode_success_object<C>(
    tag: fn(C) -> ServiceCode,
    status: u16,
    body: &str,
) -> Result<Map<String, Value>, NetgsmError>
where
    C: StatusCodeFamily,
{
    let parsed: Value = serde_json::from_str(body).map_err(|err| NetgsmError::Parse {
        status,
        description: format!("failed to parse JSON response: {err}"),
    })?;

    if status != HTTP_OK && status != HTTP_BUSINESS_REJECT {
        let code = C::classify(parsed.get("code").and_then(Value::as_str));
        let description = parsed
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("HTTP Error")
            .to_owned();
        return Err(NetgsmError::Http {
            status,
            code: tag(code),
            description,
        });
    }

    let Value::Object(mut object) = parsed else {
        return Err(NetgsmError::InvalidResponse { status });
    };

    let code = C::classify(object.get("code").and_then(Value::as_str));
    if code.is_success() {
        return Ok(object);
    }

    object.remove("code");
    let description = match object.remove("description") {
        Some(Value::String(text)) => Some(text),
        Some(other) => {
            object.insert("description".to_owned(), other);
            None
        }
        None => None,
    };

    Err(ApiError {
        status: if status == HTTP_OK {
            HTTP_BUSINESS_REJECT
        } else {
            status
        },
        code: tag(code),
        description,
        fields: object,
    }
    .into())
}

/// Deserialize the validated success body into the operation's wire shape.
pub(crate) fn decode_success<C, T>(
    tag: fn(C) -> ServiceCode,
    status: u16,
    body: &str,
) -> Result<T, NetgsmError>
where
    C: StatusCodeFamily,
    T: DeserializeOwned,
{
    let object = decode_success_object(tag, status, body)?;
    serde_json::from_value(Value::Object(object)).map_err(|err| NetgsmError::Parse {
        status,
        description: format!("unexpected response shape: {err}"),
    })
}
