use serde::Deserialize;

use super::rest;
use crate::domain::{AppName, HeaderCode, HeaderQuery, HeadersResponse, ServiceCode};
use crate::error::NetgsmError;

#[derive(Debug, Clone, Deserialize)]
struct HeadersWire {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    msgheaders: Vec<String>,
}

/// Build the query string for the sender-id query endpoint.
pub fn encode_header_query(
    request: &HeaderQuery,
    default_appname: Option<&AppName>,
) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(appname) = request.appname.as_ref().or(default_appname) {
        params.push((AppName::FIELD.to_owned(), appname.as_str().to_owned()));
    }
    params
}

pub fn decode_headers_response(status: u16, body: &str) -> Result<HeadersResponse, NetgsmError> {
    let wire: HeadersWire = rest::decode_success(ServiceCode::Header, status, body)?;
    Ok(HeadersResponse {
        code: HeaderCode::Success,
        description: wire.description,
        msgheaders: wire.msgheaders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_omits_appname_when_absent() {
        assert!(encode_header_query(&HeaderQuery::default(), None).is_empty());

        let default = AppName::new("myapp-sdk-rs").unwrap();
        let params = encode_header_query(&HeaderQuery::default(), Some(&default));
        assert_eq!(
            params,
            vec![("appname".to_owned(), "myapp-sdk-rs".to_owned())]
        );
    }

    #[test]
    fn decode_collects_registered_headers() {
        let body = r#"{"code":"00","description":"Success","msgheaders":["HEADER1","HEADER2"]}"#;
        let response = decode_headers_response(200, body).unwrap();
        assert_eq!(response.code, HeaderCode::Success);
        assert_eq!(response.msgheaders, vec!["HEADER1", "HEADER2"]);
    }

    #[test]
    fn decode_maps_auth_errors() {
        let body = r#"{"code":"30","description":"Invalid authentication"}"#;
        let err = decode_headers_response(406, body).unwrap_err();
        match err {
            NetgsmError::Api(api) => {
                assert_eq!(api.code, ServiceCode::Header(HeaderCode::InvalidAuth));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
