//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use crate::domain::{
    AppName, BalanceQuery, BalanceResponse, CancelResponse, CancelSms, HeaderQuery,
    HeadersResponse, InboxQuery, InboxResponse, IysAdd, IysAddResponse, IysSearch,
    IysSearchResponse, JobId, LegacyCancelResponse, LegacyReportQuery, LegacyReportResponse,
    LegacySendResponse, LegacySendSms, OtpResponse, OtpSms, OtpXmlResponse, Password, ReportQuery,
    ReportResponse, SendSms, SendSmsResponse, Username, ValidationError,
};
use crate::error::NetgsmError;
use crate::transport;

const DEFAULT_BASE_URL: &str = "https://api.netgsm.com.tr";

const SEND_SMS_PATH: &str = "/sms/rest/v2/send";
const OTP_PATH: &str = "/sms/rest/v2/otp";
const CANCEL_PATH: &str = "/sms/rest/v2/cancel";
const REPORT_PATH: &str = "/sms/rest/v2/report";
const MSGHEADER_PATH: &str = "/sms/rest/v2/msgheader";
const INBOX_PATH: &str = "/sms/rest/v2/inbox";
const BALANCE_PATH: &str = "/balance";
const IYS_ADD_PATH: &str = "/iys/add";
const IYS_SEARCH_PATH: &str = "/iys/search";
const OTP_XML_PATH: &str = "/sms/send/otp";
const LEGACY_SEND_PATH: &str = "/sms/send/xml";
const LEGACY_CANCEL_PATH: &str = "/sms/cancel";
const LEGACY_REPORT_PATH: &str = "/sms/report";

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_XML: &str = "application/xml";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(&'static str, String)],
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(&'static str, String)],
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(&'static str, String)],
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in headers {
                request = request.header(*name, value.as_str());
            }
            let response = request.body(body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(&'static str, String)],
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.get(url);
            for (name, value) in headers {
                request = request.header(*name, value.as_str());
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Netgsm account credentials.
///
/// Both parts are validated at construction; this is the only check that
/// happens before any network interaction.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create validated credentials.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// The validated user code.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// The validated password.
    pub fn password(&self) -> &Password {
        &self.password
    }

    fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!(
            "{}:{}",
            self.username.as_str(),
            self.password.as_str()
        ));
        format!("Basic {token}")
    }
}

#[derive(Debug, Clone)]
/// Builder for [`NetgsmClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or
/// the default application tag.
pub struct NetgsmClientBuilder {
    credentials: Credentials,
    base_url: String,
    app_name: Option<AppName>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NetgsmClientBuilder {
    /// Create a builder with the default base URL and no overrides.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            app_name: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Netgsm base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an application name; the derived `{name}-sdk-rs` tag becomes the
    /// default `appname` for every operation that accepts one.
    pub fn app_name(mut self, app_name: AppName) -> Self {
        self.app_name = Some(app_name);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NetgsmClient`].
    pub fn build(self) -> Result<NetgsmClient, NetgsmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NetgsmError::Transport(Box::new(err)))?;

        let sdk_app_name = match self.app_name {
            Some(name) => Some(AppName::new(format!("{}-sdk-rs", name.as_str()))?),
            None => None,
        };

        Ok(NetgsmClient {
            auth_header: self.credentials.basic_auth_header(),
            credentials: self.credentials,
            base_url: self.base_url,
            sdk_app_name,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Netgsm client.
///
/// One method per gateway operation; each issues exactly one network
/// round-trip and normalizes the response into a typed result or a
/// [`NetgsmError`]. The only state shared across calls is the immutable
/// credentials, derived auth header, and default application tag, so a
/// single client can serve concurrent calls.
pub struct NetgsmClient {
    credentials: Credentials,
    auth_header: String,
    base_url: String,
    sdk_app_name: Option<AppName>,
    http: Arc<dyn HttpTransport>,
}

impl NetgsmClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`NetgsmClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            auth_header: credentials.basic_auth_header(),
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            sdk_app_name: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> NetgsmClientBuilder {
        NetgsmClientBuilder::new(credentials)
    }

    fn default_appname(&self) -> Option<&AppName> {
        self.sdk_app_name.as_ref()
    }

    fn query_url(&self, path: &str, params: &[(String, String)]) -> Result<String, NetgsmError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|err| NetgsmError::Transport(Box::new(err)))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url.into())
    }

    async fn post(
        &self,
        path: &str,
        content_type: &'static str,
        body: String,
        authenticated: bool,
    ) -> Result<HttpResponse, NetgsmError> {
        let url = format!("{}{}", self.base_url, path);
        let mut headers = vec![("Content-Type", content_type.to_owned())];
        if authenticated {
            headers.push(("Authorization", self.auth_header.clone()));
        }

        tracing::debug!(%url, "dispatching POST request");
        let response = self
            .http
            .post(&url, &headers, body)
            .await
            .map_err(NetgsmError::Transport)?;
        tracing::debug!(status = response.status, "response received");
        Ok(response)
    }

    async fn get(
        &self,
        path: &str,
        params: &[(String, String)],
        authenticated: bool,
    ) -> Result<HttpResponse, NetgsmError> {
        let url = self.query_url(path, params)?;
        let mut headers = Vec::new();
        if authenticated {
            headers.push(("Authorization", self.auth_header.clone()));
        }

        tracing::debug!(%url, "dispatching GET request");
        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(NetgsmError::Transport)?;
        tracing::debug!(status = response.status, "response received");
        Ok(response)
    }

    /// Send a bulk SMS through the REST v2 endpoint.
    ///
    /// Errors:
    /// - [`NetgsmError::Http`] for statuses outside {200, 406},
    /// - [`NetgsmError::Api`] when the gateway rejects the task,
    /// - [`NetgsmError::Parse`] / [`NetgsmError::InvalidResponse`] for
    ///   malformed bodies.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, NetgsmError> {
        let body = transport::encode_send_sms_body(&request, self.default_appname()).to_string();
        let response = self.post(SEND_SMS_PATH, CONTENT_TYPE_JSON, body, true).await?;
        transport::decode_send_sms_response(response.status, &response.body)
    }

    /// Send a one-time password through the REST v2 endpoint.
    pub async fn send_otp(&self, request: OtpSms) -> Result<OtpResponse, NetgsmError> {
        let body = transport::encode_otp_body(&request, self.default_appname()).to_string();
        let response = self.post(OTP_PATH, CONTENT_TYPE_JSON, body, true).await?;
        transport::decode_otp_response(response.status, &response.body)
    }

    /// Send a one-time password through the legacy XML endpoint.
    ///
    /// Success is inferred from the presence of a `jobID` element at HTTP
    /// 200; failures surface as [`NetgsmError::LegacyApi`] with the raw
    /// gateway code.
    pub async fn send_otp_xml(&self, request: OtpSms) -> Result<OtpXmlResponse, NetgsmError> {
        let body = transport::encode_otp_xml_body(
            &request,
            self.credentials.username(),
            self.credentials.password(),
        );
        let response = self.post(OTP_XML_PATH, CONTENT_TYPE_XML, body, true).await?;
        transport::decode_otp_xml_response(response.status, &response.body)
    }

    /// Cancel a scheduled task through the REST v2 endpoint.
    pub async fn cancel_sms(&self, request: CancelSms) -> Result<CancelResponse, NetgsmError> {
        let body = transport::encode_cancel_body(&request, self.default_appname()).to_string();
        let response = self.post(CANCEL_PATH, CONTENT_TYPE_JSON, body, true).await?;
        transport::decode_cancel_response(response.status, &response.body)
    }

    /// Fetch a delivery report through the REST v2 endpoint.
    pub async fn report(&self, request: ReportQuery) -> Result<ReportResponse, NetgsmError> {
        let body = transport::encode_report_body(&request, self.default_appname()).to_string();
        let response = self.post(REPORT_PATH, CONTENT_TYPE_JSON, body, true).await?;
        transport::decode_report_response(response.status, &response.body)
    }

    /// List the sender ids registered for the account.
    pub async fn headers(&self, request: HeaderQuery) -> Result<HeadersResponse, NetgsmError> {
        let params = transport::encode_header_query(&request, self.default_appname());
        let response = self.get(MSGHEADER_PATH, &params, true).await?;
        transport::decode_headers_response(response.status, &response.body)
    }

    /// Fetch received messages from the inbox.
    ///
    /// An empty inbox is signaled by the gateway as code 40, surfacing as
    /// [`NetgsmError::Api`] with
    /// [`InboxCode::NoMessages`](crate::domain::InboxCode::NoMessages).
    pub async fn inbox(&self, request: InboxQuery) -> Result<InboxResponse, NetgsmError> {
        let params = transport::encode_inbox_query(&request, self.default_appname());
        let response = self.get(INBOX_PATH, &params, true).await?;
        transport::decode_inbox_response(response.status, &response.body)
    }

    /// Query the account balance or package list.
    ///
    /// This endpoint authenticates through the body instead of the auth
    /// header and sits outside the shared code taxonomy; non-200 answers
    /// surface as [`NetgsmError::BalanceRejected`] echoing the full body.
    pub async fn balance(&self, request: BalanceQuery) -> Result<BalanceResponse, NetgsmError> {
        let body = transport::encode_balance_body(
            &request,
            self.credentials.username(),
            self.credentials.password(),
        )
        .to_string();
        let response = self.post(BALANCE_PATH, CONTENT_TYPE_JSON, body, false).await?;
        transport::decode_balance_response(response.status, &response.body)
    }

    /// Add consent records to the IYS list.
    pub async fn iys_add(&self, request: IysAdd) -> Result<IysAddResponse, NetgsmError> {
        let body = transport::encode_iys_add_body(&request).to_string();
        let response = self.post(IYS_ADD_PATH, CONTENT_TYPE_JSON, body, true).await?;
        transport::decode_iys_add_response(response.status, &response.body)
    }

    /// Search consent records on the IYS list.
    pub async fn iys_search(&self, request: IysSearch) -> Result<IysSearchResponse, NetgsmError> {
        let body = transport::encode_iys_search_body(&request).to_string();
        let response = self
            .post(IYS_SEARCH_PATH, CONTENT_TYPE_JSON, body, true)
            .await?;
        transport::decode_iys_search_response(response.status, &response.body)
    }

    /// Send a bulk SMS through the legacy XML endpoint.
    ///
    /// Success is direct equality of the answer's code against the shared
    /// legacy `"00"` sentinel; failures keep the raw gateway code.
    pub async fn send_sms_xml(
        &self,
        request: LegacySendSms,
    ) -> Result<LegacySendResponse, NetgsmError> {
        let body = transport::encode_legacy_send_body(
            &request,
            self.credentials.username(),
            self.credentials.password(),
        );
        let response = self
            .post(LEGACY_SEND_PATH, CONTENT_TYPE_XML, body, true)
            .await?;
        transport::decode_legacy_send_response(response.status, &response.body)
    }

    /// Cancel a scheduled task through the credential-free legacy endpoint.
    ///
    /// Credentials travel in the query string; no auth header is sent.
    pub async fn cancel_sms_legacy(
        &self,
        jobid: JobId,
    ) -> Result<LegacyCancelResponse, NetgsmError> {
        let params = transport::encode_legacy_cancel_query(
            &jobid,
            self.credentials.username(),
            self.credentials.password(),
        );
        let response = self.get(LEGACY_CANCEL_PATH, &params, false).await?;
        transport::decode_legacy_cancel_response(response.status, &response.body)
    }

    /// Fetch a per-job delivery report through the legacy endpoint.
    ///
    /// Success is inferred from the presence of the `jobs` list.
    pub async fn report_by_job(
        &self,
        request: LegacyReportQuery,
    ) -> Result<LegacyReportResponse, NetgsmError> {
        let params = transport::encode_legacy_report_query(
            &request,
            self.credentials.username(),
            self.credentials.password(),
        );
        let response = self.get(LEGACY_REPORT_PATH, &params, false).await?;
        transport::decode_legacy_report_response(response.status, &response.body)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::Value;

    use crate::domain::{
        BalanceKind, InboxCode, MessageHeader, MessageText, Recipient, SendSmsCode,
        SendSmsOptions, ServiceCode, SmsMessage,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_method: Option<&'static str>,
        last_url: Option<String>,
        last_headers: Vec<(&'static str, String)>,
        last_body: Option<String>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_method: None,
                    last_url: None,
                    last_headers: Vec::new(),
                    last_body: None,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_url(&self) -> Option<String> {
            self.state.lock().unwrap().last_url.clone()
        }

        fn last_body_json(&self) -> Value {
            let body = self.state.lock().unwrap().last_body.clone().unwrap();
            serde_json::from_str(&body).unwrap()
        }

        fn last_body(&self) -> String {
            self.state.lock().unwrap().last_body.clone().unwrap()
        }

        fn last_header(&self, name: &str) -> Option<String> {
            self.state
                .lock()
                .unwrap()
                .last_headers
                .iter()
                .find(|(header, _)| *header == name)
                .map(|(_, value)| value.clone())
        }

        fn last_method(&self) -> Option<&'static str> {
            self.state.lock().unwrap().last_method
        }

        fn record(
            &self,
            method: &'static str,
            url: &str,
            headers: &[(&'static str, String)],
            body: Option<String>,
        ) -> (u16, String) {
            let mut state = self.state.lock().unwrap();
            state.last_method = Some(method);
            state.last_url = Some(url.to_owned());
            state.last_headers = headers.to_vec();
            state.last_body = body;
            (state.response_status, state.response_body.clone())
        }
    }

    impl HttpTransport for FakeTransport {
        fn post<'a>(
            &'a self,
            url: &'a str,
            headers: &'a [(&'static str, String)],
            body: String,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body_out) = self.record("POST", url, headers, Some(body));
                Ok(HttpResponse {
                    status,
                    body: body_out,
                })
            })
        }

        fn get<'a>(
            &'a self,
            url: &'a str,
            headers: &'a [(&'static str, String)],
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body_out) = self.record("GET", url, headers, None);
                Ok(HttpResponse {
                    status,
                    body: body_out,
                })
            })
        }
    }

    fn make_client(transport: FakeTransport, app_name: Option<AppName>) -> NetgsmClient {
        let credentials = Credentials::new("test-user", "test-pass").unwrap();
        let sdk_app_name =
            app_name.map(|name| AppName::new(format!("{}-sdk-rs", name.as_str())).unwrap());
        NetgsmClient {
            auth_header: credentials.basic_auth_header(),
            credentials,
            base_url: "https://example.invalid".to_owned(),
            sdk_app_name,
            http: Arc::new(transport),
        }
    }

    fn send_request() -> SendSms {
        SendSms::new(
            MessageHeader::new("TEST").unwrap(),
            vec![SmsMessage::new(
                MessageText::new("Test message").unwrap(),
                Recipient::new("5551234567").unwrap(),
            )],
            SendSmsOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn auth_header_is_derived_once_from_credentials() {
        let client = make_client(FakeTransport::new(200, "{}"), None);
        assert_eq!(client.auth_header, "Basic dGVzdC11c2VyOnRlc3QtcGFzcw==");
    }

    #[test]
    fn credentials_validate_at_construction() {
        assert!(Credentials::new("", "pass").is_err());
        assert!(Credentials::new("user", "").is_err());
        assert!(Credentials::new("user", "pass").is_ok());
    }

    #[tokio::test]
    async fn send_sms_resolves_on_success_code() {
        let transport = FakeTransport::new(
            200,
            r#"{"code":"00","jobid":"12345","description":"Success"}"#,
        );
        let client = make_client(transport.clone(), None);

        let response = client.send_sms(send_request()).await.unwrap();
        assert_eq!(response.code, SendSmsCode::Success);
        assert_eq!(response.jobid.as_deref(), Some("12345"));
        assert_eq!(response.description.as_deref(), Some("Success"));

        assert_eq!(
            transport.last_url().as_deref(),
            Some("https://example.invalid/sms/rest/v2/send")
        );
        assert_eq!(
            transport.last_header("Authorization").as_deref(),
            Some("Basic dGVzdC11c2VyOnRlc3QtcGFzcw==")
        );
        let body = transport.last_body_json();
        assert_eq!(body.get("msgheader").and_then(Value::as_str), Some("TEST"));
    }

    #[tokio::test]
    async fn send_sms_rejects_on_business_error() {
        let transport = FakeTransport::new(
            406,
            r#"{"code":"40","jobid":null,"description":"Check the msgheader parameter"}"#,
        );
        let client = make_client(transport, None);

        let err = client.send_sms(send_request()).await.unwrap_err();
        match err {
            NetgsmError::Api(api) => {
                assert_eq!(api.status, 406);
                assert_eq!(api.code, ServiceCode::Send(SendSmsCode::InvalidHeader));
                assert_eq!(
                    api.description.as_deref(),
                    Some("Check the msgheader parameter")
                );
                assert_eq!(api.fields.get("jobid"), Some(&Value::Null));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_sms_normalizes_unknown_codes_to_the_sentinel() {
        let transport = FakeTransport::new(
            406,
            r#"{"code":"999","jobid":null,"description":"Unknown error"}"#,
        );
        let client = make_client(transport, None);

        let err = client.send_sms(send_request()).await.unwrap_err();
        match err {
            NetgsmError::Api(api) => {
                assert_eq!(api.code, ServiceCode::Send(SendSmsCode::Undefined));
                assert_eq!(api.code.as_wire(), "5000");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn inbox_signals_no_messages_as_a_designated_code() {
        let transport =
            FakeTransport::new(200, r#"{"code":"40","description":"No messages to display"}"#);
        let client = make_client(transport, None);

        let err = client.inbox(InboxQuery::default()).await.unwrap_err();
        match err {
            NetgsmError::Api(api) => {
                assert_eq!(api.status, 406);
                assert_eq!(api.code, ServiceCode::Inbox(InboxCode::NoMessages));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_sms_maps_non_eligible_http_status() {
        let transport = FakeTransport::new(500, "{}");
        let client = make_client(transport, None);

        let err = client.send_sms(send_request()).await.unwrap_err();
        match err {
            NetgsmError::Http {
                status,
                code,
                description,
            } => {
                assert_eq!(status, 500);
                assert_eq!(code, ServiceCode::Send(SendSmsCode::Undefined));
                assert_eq!(description, "HTTP Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_sms_maps_invalid_json_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport, None);

        let err = client.send_sms(send_request()).await.unwrap_err();
        assert!(matches!(err, NetgsmError::Parse { status: 200, .. }));
    }

    #[tokio::test]
    async fn default_app_tag_is_substituted_into_bodies() {
        let transport = FakeTransport::new(
            200,
            r#"{"code":"00","jobid":"1","description":"Success"}"#,
        );
        let client = make_client(transport.clone(), Some(AppName::new("myapp").unwrap()));

        client.send_sms(send_request()).await.unwrap();
        let body = transport.last_body_json();
        assert_eq!(
            body.get("appname").and_then(Value::as_str),
            Some("myapp-sdk-rs")
        );
    }

    #[tokio::test]
    async fn headers_query_uses_get_with_appname() {
        let transport = FakeTransport::new(
            200,
            r#"{"code":"00","description":"Success","msgheaders":["HEADER1"]}"#,
        );
        let client = make_client(transport.clone(), Some(AppName::new("myapp").unwrap()));

        let response = client.headers(HeaderQuery::default()).await.unwrap();
        assert_eq!(response.msgheaders, vec!["HEADER1"]);
        assert_eq!(transport.last_method(), Some("GET"));
        assert_eq!(
            transport.last_url().as_deref(),
            Some("https://example.invalid/sms/rest/v2/msgheader?appname=myapp-sdk-rs")
        );
    }

    #[tokio::test]
    async fn balance_authenticates_through_the_body() {
        let transport = FakeTransport::new(200, r#"{"code":"00","balance":"57,860"}"#);
        let client = make_client(transport.clone(), None);

        let response = client
            .balance(BalanceQuery::new(BalanceKind::Credit, None))
            .await
            .unwrap();
        assert_eq!(response.code.as_deref(), Some("00"));

        assert_eq!(transport.last_header("Authorization"), None);
        let body = transport.last_body_json();
        assert_eq!(body.get("usercode").and_then(Value::as_str), Some("test-user"));
        assert_eq!(body.get("password").and_then(Value::as_str), Some("test-pass"));
        assert_eq!(body.get("stip").and_then(Value::as_u64), Some(2));
    }

    #[tokio::test]
    async fn otp_xml_posts_cdata_body_and_detects_job_id() {
        let transport =
            FakeTransport::new(200, "<xml><main><code>0</code><jobID>2120</jobID></main></xml>");
        let client = make_client(transport.clone(), None);

        let request = OtpSms::new(
            MessageHeader::new("BRAND").unwrap(),
            MessageText::new("Your code is 123456").unwrap(),
            Recipient::new("5551234567").unwrap(),
            None,
        );
        let response = client.send_otp_xml(request).await.unwrap();
        assert_eq!(response.jobid, "2120");

        assert_eq!(
            transport.last_header("Content-Type").as_deref(),
            Some("application/xml")
        );
        let body = transport.last_body();
        assert!(body.contains("<msg><![CDATA[Your code is 123456]]></msg>"));
        assert!(body.contains("<usercode>test-user</usercode>"));
    }

    #[tokio::test]
    async fn legacy_cancel_is_credential_free() {
        let transport = FakeTransport::new(200, r#"{"code":"00","jobid":"12345"}"#);
        let client = make_client(transport.clone(), None);

        let response = client
            .cancel_sms_legacy(JobId::new("12345").unwrap())
            .await
            .unwrap();
        assert_eq!(response.code, "00");

        assert_eq!(transport.last_method(), Some("GET"));
        assert_eq!(transport.last_header("Authorization"), None);
        let url = transport.last_url().unwrap();
        assert!(url.contains("usercode=test-user"));
        assert!(url.contains("password=test-pass"));
        assert!(url.contains("jobid=12345"));
    }

    #[test]
    fn builder_base_url_override_is_applied() {
        let credentials = Credentials::new("user", "pass").unwrap();
        let client = NetgsmClient::builder(credentials)
            .base_url("https://example.invalid")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://example.invalid");
        assert!(client.sdk_app_name.is_none());

        let credentials = Credentials::new("user", "pass").unwrap();
        let client = NetgsmClient::builder(credentials)
            .app_name(AppName::new("myapp").unwrap())
            .build()
            .unwrap();
        assert_eq!(
            client.sdk_app_name.as_ref().map(AppName::as_str),
            Some("myapp-sdk-rs")
        );
    }
}
