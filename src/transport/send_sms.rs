use serde::Deserialize;
use serde_json::{Map, Value};

use super::rest;
use crate::domain::{
    AppName, MessageHeader, MessageText, Recipient, SendSms, SendSmsCode, SendSmsResponse,
    ServiceCode,
};
use crate::error::NetgsmError;

#[derive(Debug, Clone, Deserialize)]
struct SendSmsWire {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    jobid: Option<String>,
}

/// Build the JSON body for the REST v2 bulk send endpoint.
///
/// Optional fields are omitted entirely when absent; the client's default
/// application tag is substituted when the request carries none.
pub fn encode_send_sms_body(request: &SendSms, default_appname: Option<&AppName>) -> Value {
    let mut body = Map::new();
    body.insert(
        MessageHeader::FIELD.to_owned(),
        Value::String(request.msgheader().as_str().to_owned()),
    );

    let options = request.options();
    if let Some(appname) = options.appname.as_ref().or(default_appname) {
        body.insert(
            AppName::FIELD.to_owned(),
            Value::String(appname.as_str().to_owned()),
        );
    }
    if let Some(iysfilter) = options.iysfilter {
        body.insert(
            "iysfilter".to_owned(),
            Value::String(iysfilter.as_wire().to_owned()),
        );
    }
    if let Some(partnercode) = options.partnercode.as_deref() {
        body.insert(
            "partnercode".to_owned(),
            Value::String(partnercode.to_owned()),
        );
    }
    if let Some(encoding) = options.encoding {
        body.insert(
            "encoding".to_owned(),
            Value::String(encoding.as_wire().to_owned()),
        );
    }

    let messages = request
        .messages()
        .iter()
        .map(|message| {
            let mut entry = Map::new();
            entry.insert(
                MessageText::FIELD.to_owned(),
                Value::String(message.msg().as_str().to_owned()),
            );
            entry.insert(
                Recipient::FIELD.to_owned(),
                Value::String(message.recipient().raw().to_owned()),
            );
            Value::Object(entry)
        })
        .collect();
    body.insert("messages".to_owned(), Value::Array(messages));

    if let Some(start_date) = options.start_date.as_deref() {
        body.insert("startdate".to_owned(), Value::String(start_date.to_owned()));
    }
    if let Some(stop_date) = options.stop_date.as_deref() {
        body.insert("stopdate".to_owned(), Value::String(stop_date.to_owned()));
    }

    Value::Object(body)
}

pub fn decode_send_sms_response(status: u16, body: &str) -> Result<SendSmsResponse, NetgsmError> {
    let wire: SendSmsWire = rest::decode_success(ServiceCode::Send, status, body)?;
    Ok(SendSmsResponse {
        code: SendSmsCode::Success,
        description: wire.description,
        jobid: wire.jobid,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{Encoding, IysFilter, SendSmsOptions, SmsMessage};

    use super::*;

    fn request_with(options: SendSmsOptions) -> SendSms {
        let header = MessageHeader::new("BRAND").unwrap();
        let message = SmsMessage::new(
            MessageText::new("Test message").unwrap(),
            Recipient::new("5551234567").unwrap(),
        );
        SendSms::new(header, vec![message], options).unwrap()
    }

    #[test]
    fn encode_includes_required_fields_and_omits_absent_options() {
        let body = encode_send_sms_body(&request_with(SendSmsOptions::default()), None);
        let object = body.as_object().unwrap();

        assert_eq!(
            object.get("msgheader").and_then(Value::as_str),
            Some("BRAND")
        );
        let messages = object.get("messages").and_then(Value::as_array).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].get("msg").and_then(Value::as_str),
            Some("Test message")
        );
        assert_eq!(
            messages[0].get("no").and_then(Value::as_str),
            Some("5551234567")
        );

        for absent in ["appname", "iysfilter", "partnercode", "encoding", "startdate", "stopdate"] {
            assert!(!object.contains_key(absent), "unexpected field {absent}");
        }
    }

    #[test]
    fn encode_serializes_options_with_wire_names() {
        let options = SendSmsOptions {
            iysfilter: Some(IysFilter::CommercialIndividual),
            partnercode: Some("P1".to_owned()),
            encoding: Some(Encoding::Turkish),
            start_date: Some("070820261200".to_owned()),
            stop_date: Some("080820261200".to_owned()),
            ..Default::default()
        };
        let body = encode_send_sms_body(&request_with(options), None);
        let object = body.as_object().unwrap();

        assert_eq!(object.get("iysfilter").and_then(Value::as_str), Some("11"));
        assert_eq!(object.get("partnercode").and_then(Value::as_str), Some("P1"));
        assert_eq!(object.get("encoding").and_then(Value::as_str), Some("TR"));
        assert_eq!(
            object.get("startdate").and_then(Value::as_str),
            Some("070820261200")
        );
        assert_eq!(
            object.get("stopdate").and_then(Value::as_str),
            Some("080820261200")
        );
    }

    #[test]
    fn encode_substitutes_default_appname_only_when_absent() {
        let default = AppName::new("myapp-sdk-rs").unwrap();

        let body = encode_send_sms_body(&request_with(SendSmsOptions::default()), Some(&default));
        assert_eq!(
            body.get("appname").and_then(Value::as_str),
            Some("myapp-sdk-rs")
        );

        let explicit = SendSmsOptions {
            appname: Some(AppName::new("explicit").unwrap()),
            ..Default::default()
        };
        let body = encode_send_sms_body(&request_with(explicit), Some(&default));
        assert_eq!(body.get("appname").and_then(Value::as_str), Some("explicit"));
    }

    #[test]
    fn encode_is_deterministic() {
        let request = request_with(SendSmsOptions {
            iysfilter: Some(IysFilter::Informational),
            ..Default::default()
        });
        let default = AppName::new("myapp-sdk-rs").unwrap();

        let first = encode_send_sms_body(&request, Some(&default)).to_string();
        let second = encode_send_sms_body(&request, Some(&default)).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn decode_success_maps_body_fields() {
        let body = r#"{"code":"00","jobid":"12345","description":"Success"}"#;
        let response = decode_send_sms_response(200, body).unwrap();
        assert_eq!(response.code, SendSmsCode::Success);
        assert_eq!(response.jobid.as_deref(), Some("12345"));
        assert_eq!(response.description.as_deref(), Some("Success"));
    }

    #[test]
    fn decode_multi_message_jobids_are_preserved() {
        let body = r#"{"code":"00","jobid":"12345,12346","description":"Success"}"#;
        let response = decode_send_sms_response(200, body).unwrap();
        assert_eq!(response.jobid.as_deref(), Some("12345,12346"));
    }
}
