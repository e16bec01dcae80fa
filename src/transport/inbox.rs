use serde::Deserialize;

use super::rest;
use crate::domain::{AppName, InboxCode, InboxMessage, InboxQuery, InboxResponse, ServiceCode};
use crate::error::NetgsmError;

#[derive(Debug, Clone, Deserialize)]
struct InboxWire {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    messages: Vec<InboxMessageWire>,
}

#[derive(Debug, Clone, Deserialize)]
struct InboxMessageWire {
    message: String,
    sender: String,
    receiver: String,
    datetime: String,
}

/// Build the query string for the inbox endpoint.
pub fn encode_inbox_query(
    request: &InboxQuery,
    default_appname: Option<&AppName>,
) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(appname) = request.appname.as_ref().or(default_appname) {
        params.push((AppName::FIELD.to_owned(), appname.as_str().to_owned()));
    }
    if let Some(start_date) = request.start_date.as_deref() {
        params.push(("startdate".to_owned(), start_date.to_owned()));
    }
    if let Some(stop_date) = request.stop_date.as_deref() {
        params.push(("stopdate".to_owned(), stop_date.to_owned()));
    }
    params
}

pub fn decode_inbox_response(status: u16, body: &str) -> Result<InboxResponse, NetgsmError> {
    let wire: InboxWire = rest::decode_success(ServiceCode::Inbox, status, body)?;
    Ok(InboxResponse {
        code: InboxCode::Success,
        description: wire.description,
        messages: wire
            .messages
            .into_iter()
            .map(|message| InboxMessage {
                message: message.message,
                sender: message.sender,
                receiver: message.receiver,
                datetime: message.datetime,
            })
            .collect(),
    })
}
