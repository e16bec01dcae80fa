//! Typed Rust client for the Netgsm SMS gateway HTTP API.
//!
//! The design splits into a domain layer of strong types, a transport layer
//! for wire-format quirks (Netgsm's REST v2 JSON endpoints, the legacy XML
//! generation, and the out-of-taxonomy balance endpoint), and a small client
//! layer orchestrating requests. Every gateway status code is normalized
//! against the closed table of its endpoint family, so failure handling is
//! exhaustive pattern matching rather than string probing.
//!
//! ```rust,no_run
//! use netgsm::{
//!     Credentials, MessageHeader, MessageText, NetgsmClient, Recipient, SendSms,
//!     SendSmsOptions, SmsMessage,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), netgsm::NetgsmError> {
//!     let client = NetgsmClient::new(Credentials::new("usercode", "password")?);
//!     let message = SmsMessage::new(
//!         MessageText::new("hello")?,
//!         Recipient::new("5551234567")?,
//!     );
//!     let request = SendSms::new(
//!         MessageHeader::new("BRAND")?,
//!         vec![message],
//!         SendSmsOptions::default(),
//!     )?;
//!     let response = client.send_sms(request).await?;
//!     println!("jobid: {:?}", response.jobid);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod error;
mod transport;

pub use client::{Credentials, NetgsmClient, NetgsmClientBuilder};
pub use domain::{
    AppName, Balance, BalanceKind, BalanceQuery, BalanceResponse, BrandCode, CancelCode,
    CancelResponse, CancelSms, DeliveryStatus, Encoding, HeaderCode, HeaderQuery, HeadersResponse,
    InboxCode, InboxMessage, InboxQuery, InboxResponse, IysAdd, IysAddResponse, IysCode,
    IysConsent, IysConsentRecord, IysConsentType, IysFilter, IysRecipientType, IysSearch,
    IysSearchItem, IysSearchResponse, IysSource, IysStatus, JobId, JobReport, KnownDeliveryStatus,
    KnownLegacyCode, KnownOperator, LegacyCancelResponse, LegacyReportQuery, LegacyReportResponse,
    LegacySendResponse, LegacySendSms, MessageHeader, MessageText, Operator, OtpCode, OtpResponse,
    OtpSms, OtpXmlResponse, PackageBalance, Password, PhoneNumber, Recipient, ReportCode,
    ReportOptions, ReportQuery, ReportResponse, SendSms, SendSmsCode, SendSmsOptions,
    SendSmsResponse, ServiceCode, SmsMessage, StatusCodeFamily, UNDEFINED_WIRE_CODE, Username,
    ValidationError,
};
pub use error::{ApiError, NetgsmError};
