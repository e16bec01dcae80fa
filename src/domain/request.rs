use crate::domain::validation::ValidationError;
use crate::domain::value::{AppName, BrandCode, JobId, MessageHeader, MessageText, Recipient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// IYS filter applied to a bulk send (`iysfilter`).
pub enum IysFilter {
    /// Informational content, no IYS consent check (`0`).
    Informational,
    /// Commercial content to individuals, IYS-checked (`11`).
    CommercialIndividual,
    /// Commercial content to traders, IYS-checked (`12`).
    CommercialTrader,
}

impl IysFilter {
    /// The wire representation of this filter.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Informational => "0",
            Self::CommercialIndividual => "11",
            Self::CommercialTrader => "12",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message encoding hint (`encoding`).
pub enum Encoding {
    /// Turkish character set (`TR`).
    Turkish,
}

impl Encoding {
    /// The wire representation of this encoding.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Turkish => "TR",
        }
    }
}

/// One message/recipient pair inside a bulk send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    msg: MessageText,
    recipient: Recipient,
}

impl SmsMessage {
    pub fn new(msg: MessageText, recipient: Recipient) -> Self {
        Self { msg, recipient }
    }

    pub fn msg(&self) -> &MessageText {
        &self.msg
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }
}

#[derive(Debug, Clone, Default)]
/// Optional knobs for a bulk send.
///
/// Date values are caller-formatted `ddMMyyyyHHmm` strings and are passed
/// through verbatim.
pub struct SendSmsOptions {
    pub appname: Option<AppName>,
    pub iysfilter: Option<IysFilter>,
    pub partnercode: Option<String>,
    pub encoding: Option<Encoding>,
    pub start_date: Option<String>,
    pub stop_date: Option<String>,
}

#[derive(Debug, Clone)]
/// Bulk SMS send via the REST v2 endpoint.
pub struct SendSms {
    msgheader: MessageHeader,
    messages: Vec<SmsMessage>,
    options: SendSmsOptions,
}

impl SendSms {
    pub fn new(
        msgheader: MessageHeader,
        messages: Vec<SmsMessage>,
        options: SendSmsOptions,
    ) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::Empty {
                field: MessageText::FIELD,
            });
        }
        Ok(Self {
            msgheader,
            messages,
            options,
        })
    }

    pub fn msgheader(&self) -> &MessageHeader {
        &self.msgheader
    }

    pub fn messages(&self) -> &[SmsMessage] {
        &self.messages
    }

    pub fn options(&self) -> &SendSmsOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// One-time-password send via the REST v2 endpoint.
pub struct OtpSms {
    msgheader: MessageHeader,
    msg: MessageText,
    recipient: Recipient,
    appname: Option<AppName>,
}

impl OtpSms {
    pub fn new(
        msgheader: MessageHeader,
        msg: MessageText,
        recipient: Recipient,
        appname: Option<AppName>,
    ) -> Self {
        Self {
            msgheader,
            msg,
            recipient,
            appname,
        }
    }

    pub fn msgheader(&self) -> &MessageHeader {
        &self.msgheader
    }

    pub fn msg(&self) -> &MessageText {
        &self.msg
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn appname(&self) -> Option<&AppName> {
        self.appname.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Cancel a scheduled bulk task.
pub struct CancelSms {
    jobid: JobId,
    appname: Option<AppName>,
}

impl CancelSms {
    pub fn new(jobid: JobId, appname: Option<AppName>) -> Self {
        Self { jobid, appname }
    }

    pub fn jobid(&self) -> &JobId {
        &self.jobid
    }

    pub fn appname(&self) -> Option<&AppName> {
        self.appname.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
/// Optional knobs for a delivery report query.
pub struct ReportOptions {
    pub appname: Option<AppName>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone)]
/// Delivery report query via the REST v2 endpoint.
///
/// `start_date`/`stop_date` are caller-formatted `dd.MM.yyyy HH:mm:ss`
/// strings and are passed through verbatim.
pub struct ReportQuery {
    jobids: Vec<JobId>,
    start_date: String,
    stop_date: String,
    options: ReportOptions,
}

impl ReportQuery {
    pub fn new(
        jobids: Vec<JobId>,
        start_date: impl Into<String>,
        stop_date: impl Into<String>,
        options: ReportOptions,
    ) -> Result<Self, ValidationError> {
        if jobids.is_empty() {
            return Err(ValidationError::Empty { field: "jobids" });
        }
        Ok(Self {
            jobids,
            start_date: start_date.into(),
            stop_date: stop_date.into(),
            options,
        })
    }

    pub fn jobids(&self) -> &[JobId] {
        &self.jobids
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn stop_date(&self) -> &str {
        &self.stop_date
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
/// Registered sender-id query.
pub struct HeaderQuery {
    pub appname: Option<AppName>,
}

#[derive(Debug, Clone, Default)]
/// Inbox query.
///
/// Date values are caller-formatted `ddMMyyyyHHmmss` strings and are passed
/// through verbatim.
pub struct InboxQuery {
    pub appname: Option<AppName>,
    pub start_date: Option<String>,
    pub stop_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Balance query kind (`stip`).
pub enum BalanceKind {
    /// Package/campaign information (`1`).
    Package,
    /// Credit information (`2`).
    Credit,
}

impl BalanceKind {
    /// The wire representation of this query kind.
    pub fn as_stip(self) -> u8 {
        match self {
            Self::Package => 1,
            Self::Credit => 2,
        }
    }
}

#[derive(Debug, Clone)]
/// Balance/package query.
pub struct BalanceQuery {
    kind: BalanceKind,
    appkey: Option<String>,
}

impl BalanceQuery {
    pub fn new(kind: BalanceKind, appkey: Option<String>) -> Self {
        Self { kind, appkey }
    }

    pub fn kind(&self) -> BalanceKind {
        self.kind
    }

    pub fn appkey(&self) -> Option<&str> {
        self.appkey.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// IYS consent channel (`type`).
pub enum IysConsentType {
    Message,
    Call,
    Email,
}

impl IysConsentType {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Message => "MESAJ",
            Self::Call => "ARAMA",
            Self::Email => "EPOSTA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How an IYS consent was collected (`source`).
pub enum IysSource {
    Web,
    Physical,
    WetSignature,
    CallCenter,
    SocialMedia,
    Email,
    Message,
    Existing2015,
    Atm,
    Decision,
}

impl IysSource {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Web => "HS_WEB",
            Self::Physical => "HS_FIZIKSEL",
            Self::WetSignature => "HS_ISLAK_IMZA",
            Self::CallCenter => "HS_CAGRI_MERKEZI",
            Self::SocialMedia => "HS_SOSYAL_MEDYA",
            Self::Email => "HS_EPOSTA",
            Self::Message => "HS_MESAJ",
            Self::Existing2015 => "HS_2015",
            Self::Atm => "HS_ATM",
            Self::Decision => "HS_KARAR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// IYS consent status (`status`).
pub enum IysStatus {
    Approve,
    Reject,
}

impl IysStatus {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Approve => "ONAY",
            Self::Reject => "RET",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kind of recipient a consent belongs to (`recipientType`).
pub enum IysRecipientType {
    Individual,
    Trader,
}

impl IysRecipientType {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Individual => "BIREYSEL",
            Self::Trader => "TACIR",
        }
    }
}

#[derive(Debug, Clone)]
/// One consent record for an IYS add operation.
///
/// `recipient` is a `+905XXXXXXXXX` number or an e-mail address;
/// `consent_date` is a caller-formatted `YYYY-MM-dd HH:mm:ss` string, passed
/// through verbatim.
pub struct IysConsent {
    pub kind: IysConsentType,
    pub source: IysSource,
    pub recipient: String,
    pub status: IysStatus,
    pub consent_date: String,
    pub recipient_type: IysRecipientType,
}

#[derive(Debug, Clone)]
/// Add consent records to the IYS list.
pub struct IysAdd {
    brand_code: BrandCode,
    refid: Option<String>,
    data: Vec<IysConsent>,
}

impl IysAdd {
    pub fn new(
        brand_code: BrandCode,
        refid: Option<String>,
        data: Vec<IysConsent>,
    ) -> Result<Self, ValidationError> {
        if data.is_empty() {
            return Err(ValidationError::Empty { field: "data" });
        }
        Ok(Self {
            brand_code,
            refid,
            data,
        })
    }

    pub fn brand_code(&self) -> &BrandCode {
        &self.brand_code
    }

    pub fn refid(&self) -> Option<&str> {
        self.refid.as_deref()
    }

    pub fn data(&self) -> &[IysConsent] {
        &self.data
    }
}

#[derive(Debug, Clone)]
/// One lookup item for an IYS search operation.
pub struct IysSearchItem {
    pub kind: IysConsentType,
    pub recipient: String,
    pub recipient_type: IysRecipientType,
    pub refid: Option<String>,
}

#[derive(Debug, Clone)]
/// Search consent records on the IYS list.
pub struct IysSearch {
    brand_code: BrandCode,
    data: Vec<IysSearchItem>,
}

impl IysSearch {
    pub fn new(brand_code: BrandCode, data: Vec<IysSearchItem>) -> Result<Self, ValidationError> {
        if data.is_empty() {
            return Err(ValidationError::Empty { field: "data" });
        }
        Ok(Self { brand_code, data })
    }

    pub fn brand_code(&self) -> &BrandCode {
        &self.brand_code
    }

    pub fn data(&self) -> &[IysSearchItem] {
        &self.data
    }
}

#[derive(Debug, Clone)]
/// Bulk SMS send via the legacy XML endpoint (one text, many recipients).
pub struct LegacySendSms {
    msgheader: MessageHeader,
    msg: MessageText,
    recipients: Vec<Recipient>,
    start_date: Option<String>,
    stop_date: Option<String>,
}

impl LegacySendSms {
    pub fn new(
        msgheader: MessageHeader,
        msg: MessageText,
        recipients: Vec<Recipient>,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        Ok(Self {
            msgheader,
            msg,
            recipients,
            start_date: None,
            stop_date: None,
        })
    }

    /// Schedule the send; dates are `dd.MM.yyyy HH:mm:ss` strings passed
    /// through verbatim.
    pub fn scheduled(mut self, start_date: impl Into<String>, stop_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self.stop_date = Some(stop_date.into());
        self
    }

    pub fn msgheader(&self) -> &MessageHeader {
        &self.msgheader
    }

    pub fn msg(&self) -> &MessageText {
        &self.msg
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    pub fn stop_date(&self) -> Option<&str> {
        self.stop_date.as_deref()
    }
}

#[derive(Debug, Clone)]
/// Per-job delivery report via the legacy endpoint.
///
/// Date bounds are `dd.MM.yyyy HH:mm:ss` strings passed through verbatim.
pub struct LegacyReportQuery {
    jobid: JobId,
    start_date: Option<String>,
    stop_date: Option<String>,
}

impl LegacyReportQuery {
    pub fn new(jobid: JobId, start_date: Option<String>, stop_date: Option<String>) -> Self {
        Self {
            jobid,
            start_date,
            stop_date,
        }
    }

    pub fn jobid(&self) -> &JobId {
        &self.jobid
    }

    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    pub fn stop_date(&self) -> Option<&str> {
        self.stop_date.as_deref()
    }
}
