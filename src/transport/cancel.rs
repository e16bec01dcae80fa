use serde::Deserialize;
use serde_json::{Map, Value};

use super::rest;
use crate::domain::{AppName, CancelCode, CancelResponse, CancelSms, JobId, ServiceCode};
use crate::error::NetgsmError;

#[derive(Debug, Clone, Deserialize)]
struct CancelWire {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    jobid: Option<String>,
}

/// Build the JSON body for the REST v2 cancel endpoint.
pub fn encode_cancel_body(request: &CancelSms, default_appname: Option<&AppName>) -> Value {
    let mut body = Map::new();
    body.insert(
        JobId::FIELD.to_owned(),
        Value::String(request.jobid().as_str().to_owned()),
    );
    if let Some(appname) = request.appname().or(default_appname) {
        body.insert(
            AppName::FIELD.to_owned(),
            Value::String(appname.as_str().to_owned()),
        );
    }
    Value::Object(body)
}

pub fn decode_cancel_response(status: u16, body: &str) -> Result<CancelResponse, NetgsmError> {
    let wire: CancelWire = rest::decode_success(ServiceCode::Cancel, status, body)?;
    Ok(CancelResponse {
        code: CancelCode::Success,
        description: wire.description,
        jobid: wire.jobid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_carries_jobid_and_optional_appname() {
        let request = CancelSms::new(JobId::new("12345").unwrap(), None);
        let body = encode_cancel_body(&request, None);
        assert_eq!(body.get("jobid").and_then(Value::as_str), Some("12345"));
        assert!(!body.as_object().unwrap().contains_key("appname"));

        let default = AppName::new("myapp-sdk-rs").unwrap();
        let body = encode_cancel_body(&request, Some(&default));
        assert_eq!(
            body.get("appname").and_then(Value::as_str),
            Some("myapp-sdk-rs")
        );
    }

    #[test]
    fn decode_success_echoes_jobid() {
        let body = r#"{"code":"00","jobid":"12345","description":"Success"}"#;
        let response = decode_cancel_response(200, body).unwrap();
        assert_eq!(response.code, CancelCode::Success);
        assert_eq!(response.jobid.as_deref(), Some("12345"));
    }

    #[test]
    fn decode_maps_job_not_found() {
        let body = r#"{"code":"60","jobid":"12345","description":"Error occurred"}"#;
        let err = decode_cancel_response(200, body).unwrap_err();
        match err {
            NetgsmError::Api(api) => {
                assert_eq!(api.status, 406);
                assert_eq!(api.code, ServiceCode::Cancel(CancelCode::JobNotFound));
                assert_eq!(
                    api.fields.get("jobid").and_then(Value::as_str),
                    Some("12345")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
