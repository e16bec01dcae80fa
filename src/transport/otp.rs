use serde::Deserialize;
use serde_json::{Map, Value};

use super::rest;
use crate::domain::{
    AppName, MessageHeader, MessageText, OtpCode, OtpResponse, OtpSms, Recipient, ServiceCode,
};
use crate::error::NetgsmError;

#[derive(Debug, Clone, Deserialize)]
struct OtpWire {
    #[serde(default)]
    description: Option<String>,
    // This endpoint alone answers with a camelCase job id key.
    #[serde(default, rename = "jobId")]
    jobid: Option<String>,
}

/// Build the JSON body for the REST v2 OTP endpoint.
pub fn encode_otp_body(request: &OtpSms, default_appname: Option<&AppName>) -> Value {
    let mut body = Map::new();
    body.insert(
        MessageHeader::FIELD.to_owned(),
        Value::String(request.msgheader().as_str().to_owned()),
    );
    if let Some(appname) = request.appname().or(default_appname) {
        body.insert(
            AppName::FIELD.to_owned(),
            Value::String(appname.as_str().to_owned()),
        );
    }
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(request.msg().as_str().to_owned()),
    );
    body.insert(
        Recipient::FIELD.to_owned(),
        Value::String(request.recipient().raw().to_owned()),
    );
    Value::Object(body)
}

pub fn decode_otp_response(status: u16, body: &str) -> Result<OtpResponse, NetgsmError> {
    let wire: OtpWire = rest::decode_success(ServiceCode::Otp, status, body)?;
    Ok(OtpResponse {
        code: OtpCode::Success,
        description: wire.description,
        jobid: wire.jobid,
    })
}
