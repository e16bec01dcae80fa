use crate::domain::codes::{
    CancelCode, DeliveryStatus, HeaderCode, InboxCode, IysCode, Operator, OtpCode, ReportCode,
    SendSmsCode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub code: SendSmsCode,
    pub description: Option<String>,
    pub jobid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpResponse {
    pub code: OtpCode,
    pub description: Option<String>,
    pub jobid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelResponse {
    pub code: CancelCode,
    pub description: Option<String>,
    pub jobid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    pub code: ReportCode,
    pub description: Option<String>,
    pub jobs: Vec<JobReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One delivery entry in a report.
pub struct JobReport {
    pub jobid: String,
    pub number: String,
    pub status: DeliveryStatus,
    pub operator: Operator,
    pub msglen: u32,
    pub delivered_date: Option<String>,
    pub error_code: Option<i32>,
    pub referans_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadersResponse {
    pub code: HeaderCode,
    pub description: Option<String>,
    pub msgheaders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxResponse {
    pub code: InboxCode,
    pub description: Option<String>,
    pub messages: Vec<InboxMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One received message from the inbox.
pub struct InboxMessage {
    pub message: String,
    pub sender: String,
    pub receiver: String,
    pub datetime: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of a balance query.
///
/// This endpoint predates the shared code taxonomy: package-array responses
/// carry no `code` at all, so its absence is not an error here.
pub struct BalanceResponse {
    pub code: Option<String>,
    pub balance: Balance,
}

#[derive(Debug, Clone, PartialEq)]
/// Balance payload: a credit amount string or a list of packages, depending
/// on the queried `stip`.
pub enum Balance {
    Credit(String),
    Packages(Vec<PackageBalance>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageBalance {
    pub amount: f64,
    pub balance_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IysAddResponse {
    pub code: IysCode,
    pub error: String,
    pub uid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IysSearchResponse {
    pub code: IysCode,
    pub error: String,
    pub query: Option<IysConsentRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One consent record returned by an IYS search.
pub struct IysConsentRecord {
    pub consent_date: String,
    pub source: String,
    pub recipient: String,
    pub recipient_type: String,
    pub kind: String,
    pub status: String,
    pub creation_date: String,
    pub retailer_access_count: u32,
    pub query_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful legacy XML OTP send.
///
/// Success is inferred structurally (HTTP 200 with a `jobID` element), so the
/// gateway's `code` element is carried raw when present.
pub struct OtpXmlResponse {
    pub jobid: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful legacy XML bulk send. The raw code is always the shared
/// legacy success sentinel.
pub struct LegacySendResponse {
    pub code: String,
    pub jobid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful legacy cancel. The raw code is always the shared legacy
/// success sentinel.
pub struct LegacyCancelResponse {
    pub code: String,
    pub jobid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-job legacy report; success is the presence of the `jobs` list.
pub struct LegacyReportResponse {
    pub jobs: Vec<JobReport>,
}
