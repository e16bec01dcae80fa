//! Domain layer: strong types with validation and invariants (no I/O).

mod codes;
mod request;
mod response;
mod validation;
mod value;

pub use codes::{
    CancelCode, DeliveryStatus, HeaderCode, InboxCode, IysCode, KnownDeliveryStatus,
    KnownLegacyCode, KnownOperator, Operator, OtpCode, ReportCode, SendSmsCode, ServiceCode,
    StatusCodeFamily, UNDEFINED_WIRE_CODE,
};
pub use request::{
    BalanceKind, BalanceQuery, CancelSms, Encoding, HeaderQuery, InboxQuery, IysAdd, IysConsent,
    IysConsentType, IysFilter, IysRecipientType, IysSearch, IysSearchItem, IysSource, IysStatus,
    LegacyReportQuery, LegacySendSms, OtpSms, ReportOptions, ReportQuery, SendSms, SendSmsOptions,
    SmsMessage,
};
pub use response::{
    Balance, BalanceResponse, CancelResponse, HeadersResponse, InboxMessage, InboxResponse,
    IysAddResponse, IysConsentRecord, IysSearchResponse, JobReport, LegacyCancelResponse,
    LegacyReportResponse, LegacySendResponse, OtpResponse, OtpXmlResponse, PackageBalance,
    ReportResponse, SendSmsResponse,
};
pub use validation::ValidationError;
pub use value::{
    AppName, BrandCode, JobId, MessageHeader, MessageText, Password, PhoneNumber, Recipient,
    Username,
};
