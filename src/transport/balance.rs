use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    Balance, BalanceQuery, BalanceResponse, PackageBalance, Password, Username,
};
use crate::error::NetgsmError;

#[derive(Debug, Clone, Deserialize)]
struct BalanceWire {
    #[serde(default)]
    code: Option<String>,
    balance: BalanceValueWire,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BalanceValueWire {
    Credit(String),
    Packages(Vec<PackageWire>),
}

#[derive(Debug, Clone, Deserialize)]
struct PackageWire {
    amount: f64,
    balance_name: String,
}

/// Build the JSON body for the balance endpoint.
///
/// This endpoint authenticates through the body instead of the auth header,
/// so the raw credentials are duplicated here.
pub fn encode_balance_body(
    request: &BalanceQuery,
    username: &Username,
    password: &Password,
) -> Value {
    let mut body = Map::new();
    body.insert(
        Username::FIELD.to_owned(),
        Value::String(username.as_str().to_owned()),
    );
    body.insert(
        Password::FIELD.to_owned(),
        Value::String(password.as_str().to_owned()),
    );
    body.insert("stip".to_owned(), Value::from(request.kind().as_stip()));
    if let Some(appkey) = request.appkey() {
        body.insert("appkey".to_owned(), Value::String(appkey.to_owned()));
    }
    Value::Object(body)
}

/// Decode a balance response.
///
/// The endpoint predates the shared code taxonomy: any non-200 status is a
/// failure echoing the full body, and a package-array body carrying no
/// `code` is a success.
pub fn decode_balance_response(status: u16, body: &str) -> Result<BalanceResponse, NetgsmError> {
    let parsed: Value = serde_json::from_str(body).map_err(|err| NetgsmError::Parse {
        status,
        description: format!("failed to parse JSON response: {err}"),
    })?;

    if status != super::rest::HTTP_OK {
        return Err(NetgsmError::BalanceRejected {
            status,
            body: parsed,
        });
    }

    let wire: BalanceWire = serde_json::from_value(parsed)
        .map_err(|_| NetgsmError::InvalidResponse { status })?;

    Ok(BalanceResponse {
        code: wire.code,
        balance: match wire.balance {
            BalanceValueWire::Credit(credit) => Balance::Credit(credit),
            BalanceValueWire::Packages(packages) => Balance::Packages(
                packages
                    .into_iter()
                    .map(|package| PackageBalance {
                        amount: package.amount,
                        balance_name: package.balance_name,
                    })
                    .collect(),
            ),
        },
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::BalanceKind;

    use super::*;

    #[test]
    fn encode_duplicates_credentials_in_the_body() {
        let username = Username::new("test-user").unwrap();
        let password = Password::new("test-pass").unwrap();
        let request = BalanceQuery::new(BalanceKind::Package, Some("my-key".to_owned()));

        let body = encode_balance_body(&request, &username, &password);
        assert_eq!(body.get("usercode").and_then(Value::as_str), Some("test-user"));
        assert_eq!(body.get("password").and_then(Value::as_str), Some("test-pass"));
        assert_eq!(body.get("stip").and_then(Value::as_u64), Some(1));
        assert_eq!(body.get("appkey").and_then(Value::as_str), Some("my-key"));

        let request = BalanceQuery::new(BalanceKind::Credit, None);
        let body = encode_balance_body(&request, &username, &password);
        assert_eq!(body.get("stip").and_then(Value::as_u64), Some(2));
        assert!(!body.as_object().unwrap().contains_key("appkey"));
    }

    #[test]
    fn decode_accepts_package_arrays_without_a_code() {
        let body = r#"
        {
          "balance": [
            {"amount": 399, "balance_name": "SMS Count"},
            {"amount": 11, "balance_name": "Voice Message"}
          ]
        }
        "#;

        let response = decode_balance_response(200, body).unwrap();
        assert_eq!(response.code, None);
        match response.balance {
            Balance::Packages(packages) => {
                assert_eq!(packages.len(), 2);
                assert_eq!(packages[0].amount, 399.0);
                assert_eq!(packages[0].balance_name, "SMS Count");
            }
            other => panic!("unexpected balance: {other:?}"),
        }
    }

    #[test]
    fn decode_accepts_credit_strings() {
        let body = r#"{"code":"00","balance":"57,860"}"#;
        let response = decode_balance_response(200, body).unwrap();
        assert_eq!(response.code.as_deref(), Some("00"));
        assert_eq!(response.balance, Balance::Credit("57,860".to_owned()));
    }

    #[test]
    fn decode_echoes_the_full_body_on_non_200() {
        let body = r#"{"code":"30","description":"Invalid authentication"}"#;
        let err = decode_balance_response(406, body).unwrap_err();
        match err {
            NetgsmError::BalanceRejected { status, body } => {
                assert_eq!(status, 406);
                assert_eq!(body.get("code").and_then(Value::as_str), Some("30"));
                assert_eq!(
                    body.get("description").and_then(Value::as_str),
                    Some("Invalid authentication")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
