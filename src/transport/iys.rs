use serde::Deserialize;
use serde_json::{Map, Value};

use super::rest;
use crate::domain::{
    BrandCode, IysAdd, IysAddResponse, IysCode, IysConsentRecord, IysSearch, IysSearchResponse,
    ServiceCode,
};
use crate::error::NetgsmError;

#[derive(Debug, Clone, Deserialize)]
struct IysAddWire {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    uid: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct IysSearchWire {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    query: Option<IysQueryWire>,
}

#[derive(Debug, Clone, Deserialize)]
struct IysQueryWire {
    #[serde(rename = "consentDate")]
    consent_date: String,
    source: String,
    recipient: String,
    #[serde(rename = "recipientType")]
    recipient_type: String,
    #[serde(rename = "type")]
    kind: String,
    status: String,
    #[serde(rename = "creationDate")]
    creation_date: String,
    #[serde(rename = "retailerAccessCount")]
    retailer_access_count: u32,
    #[serde(default, rename = "querystatus")]
    query_status: Option<String>,
}

/// Build the JSON body for the IYS consent add endpoint.
pub fn encode_iys_add_body(request: &IysAdd) -> Value {
    let mut body = Map::new();
    body.insert(
        BrandCode::FIELD.to_owned(),
        Value::String(request.brand_code().as_str().to_owned()),
    );
    if let Some(refid) = request.refid() {
        body.insert("refid".to_owned(), Value::String(refid.to_owned()));
    }

    let data = request
        .data()
        .iter()
        .map(|consent| {
            let mut entry = Map::new();
            entry.insert(
                "type".to_owned(),
                Value::String(consent.kind.as_wire().to_owned()),
            );
            entry.insert(
                "source".to_owned(),
                Value::String(consent.source.as_wire().to_owned()),
            );
            entry.insert(
                "recipient".to_owned(),
                Value::String(consent.recipient.clone()),
            );
            entry.insert(
                "status".to_owned(),
                Value::String(consent.status.as_wire().to_owned()),
            );
            entry.insert(
                "consentDate".to_owned(),
                Value::String(consent.consent_date.clone()),
            );
            entry.insert(
                "recipientType".to_owned(),
                Value::String(consent.recipient_type.as_wire().to_owned()),
            );
            Value::Object(entry)
        })
        .collect();
    body.insert("data".to_owned(), Value::Array(data));

    Value::Object(body)
}

/// Build the JSON body for the IYS consent search endpoint.
pub fn encode_iys_search_body(request: &IysSearch) -> Value {
    let mut body = Map::new();
    body.insert(
        BrandCode::FIELD.to_owned(),
        Value::String(request.brand_code().as_str().to_owned()),
    );

    let data = request
        .data()
        .iter()
        .map(|item| {
            let mut entry = Map::new();
            entry.insert(
                "type".to_owned(),
                Value::String(item.kind.as_wire().to_owned()),
            );
            entry.insert("recipient".to_owned(), Value::String(item.recipient.clone()));
            entry.insert(
                "recipientType".to_owned(),
                Value::String(item.recipient_type.as_wire().to_owned()),
            );
            if let Some(refid) = item.refid.as_deref() {
                entry.insert("refid".to_owned(), Value::String(refid.to_owned()));
            }
            Value::Object(entry)
        })
        .collect();
    body.insert("data".to_owned(), Value::Array(data));

    Value::Object(body)
}

pub fn decode_iys_add_response(status: u16, body: &str) -> Result<IysAddResponse, NetgsmError> {
    let wire: IysAddWire = rest::decode_success(ServiceCode::Iys, status, body)?;
    Ok(IysAddResponse {
        code: IysCode::Success,
        error: wire.error.unwrap_or_else(|| "false".to_owned()),
        uid: wire.uid,
    })
}

pub fn decode_iys_search_response(
    status: u16,
    body: &str,
) -> Result<IysSearchResponse, NetgsmError> {
    let wire: IysSearchWire = rest::decode_success(ServiceCode::Iys, status, body)?;
    Ok(IysSearchResponse {
        code: IysCode::Success,
        error: wire.error.unwrap_or_else(|| "false".to_owned()),
        query: wire.query.map(|query| IysConsentRecord {
            consent_date: query.consent_date,
            source: query.source,
            recipient: query.recipient,
            recipient_type: query.recipient_type,
            kind: query.kind,
            status: query.status,
            creation_date: query.creation_date,
            retailer_access_count: query.retailer_access_count,
            query_status: query.query_status,
        }),
    })
}
