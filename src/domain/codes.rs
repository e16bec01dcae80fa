use std::fmt;

/// Reserved wire value substituted whenever the gateway's code is missing or
/// not a declared member of the endpoint family's table.
///
/// The gateway never legitimately sends this value; it exists purely as the
/// classifier's fallback.
pub const UNDEFINED_WIRE_CODE: &str = "5000";

/// A closed status-code table for one endpoint family.
///
/// Every family declares exactly one success member and one reserved
/// undefined member. [`StatusCodeFamily::classify`] guarantees that whatever
/// the gateway sent, the result is a member of the table — callers can match
/// exhaustively without a catch-all arm swallowing unknown codes.
pub trait StatusCodeFamily: Copy + Eq {
    /// The member denoting success for this family.
    const SUCCESS: Self;
    /// The reserved fallback member for absent/unrecognized codes.
    const UNDEFINED: Self;

    /// Map a raw wire code to a declared member.
    ///
    /// Returns `None` for unrecognized codes and for the undefined sentinel
    /// itself: the sentinel is never accepted from the wire.
    fn from_wire(code: &str) -> Option<Self>;

    /// The wire representation of this member.
    fn as_wire(self) -> &'static str;

    /// Normalize a possibly-absent wire code into a member of this family.
    fn classify(code: Option<&str>) -> Self {
        code.and_then(Self::from_wire).unwrap_or(Self::UNDEFINED)
    }

    /// Whether this member is the family's success sentinel.
    fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes for the REST v2 bulk send endpoint.
pub enum SendSmsCode {
    /// Task accepted (`00`).
    Success,
    /// Problem in the message text or length (`20`).
    InvalidMessageText,
    /// Invalid user code, password, or no API access (`30`).
    InvalidAuth,
    /// The `msgheader` value is not registered for this account (`40`).
    InvalidHeader,
    /// Subscriber accounts cannot perform IYS-controlled sends (`50`).
    IysControlledSendNotAllowed,
    /// No IYS brand information found for the account (`51`).
    IysBrandNotFound,
    /// Invalid or missing parameter (`70`).
    ParameterError,
    /// Sending limit exceeded (`80`).
    SendingLimitExceeded,
    /// Duplicate-sending limit to the same number exceeded (`85`).
    DuplicateLimitExceeded,
    /// Reserved fallback for absent/unrecognized codes (`5000`).
    Undefined,
}

impl StatusCodeFamily for SendSmsCode {
    const SUCCESS: Self = Self::Success;
    const UNDEFINED: Self = Self::Undefined;

    fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Success,
            "20" => Self::InvalidMessageText,
            "30" => Self::InvalidAuth,
            "40" => Self::InvalidHeader,
            "50" => Self::IysControlledSendNotAllowed,
            "51" => Self::IysBrandNotFound,
            "70" => Self::ParameterError,
            "80" => Self::SendingLimitExceeded,
            "85" => Self::DuplicateLimitExceeded,
            _ => return None,
        })
    }

    fn as_wire(self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::InvalidMessageText => "20",
            Self::InvalidAuth => "30",
            Self::InvalidHeader => "40",
            Self::IysControlledSendNotAllowed => "50",
            Self::IysBrandNotFound => "51",
            Self::ParameterError => "70",
            Self::SendingLimitExceeded => "80",
            Self::DuplicateLimitExceeded => "85",
            Self::Undefined => UNDEFINED_WIRE_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes for the REST v2 OTP endpoint.
pub enum OtpCode {
    /// Task accepted (`00`).
    Success,
    /// Problem in the message text or length (`20`).
    MessageError,
    /// Invalid user code, password, or no API access (`30`).
    InvalidAuth,
    /// The `msgheader` value is not registered for this account (`40`).
    InvalidHeader,
    /// Recipient number is invalid for OTP delivery (`50`).
    InvalidNumber,
    /// No OTP package is defined on the account (`60`).
    NoOtpPackage,
    /// Query limit exceeded (`70`).
    RateLimit,
    /// Reserved fallback for absent/unrecognized codes (`5000`).
    Undefined,
}

impl StatusCodeFamily for OtpCode {
    const SUCCESS: Self = Self::Success;
    const UNDEFINED: Self = Self::Undefined;

    fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Success,
            "20" => Self::MessageError,
            "30" => Self::InvalidAuth,
            "40" => Self::InvalidHeader,
            "50" => Self::InvalidNumber,
            "60" => Self::NoOtpPackage,
            "70" => Self::RateLimit,
            _ => return None,
        })
    }

    fn as_wire(self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::MessageError => "20",
            Self::InvalidAuth => "30",
            Self::InvalidHeader => "40",
            Self::InvalidNumber => "50",
            Self::NoOtpPackage => "60",
            Self::RateLimit => "70",
            Self::Undefined => UNDEFINED_WIRE_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes for the REST v2 cancel endpoint.
pub enum CancelCode {
    /// Cancellation accepted (`00`).
    Success,
    /// Invalid user code, password, or no API access (`30`).
    InvalidAuth,
    /// No cancellable task exists for the given job id (`60`).
    JobNotFound,
    /// Invalid or missing parameter (`70`).
    ParameterError,
    /// Reserved fallback for absent/unrecognized codes (`5000`).
    Undefined,
}

impl StatusCodeFamily for CancelCode {
    const SUCCESS: Self = Self::Success;
    const UNDEFINED: Self = Self::Undefined;

    fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Success,
            "30" => Self::InvalidAuth,
            "60" => Self::JobNotFound,
            "70" => Self::ParameterError,
            _ => return None,
        })
    }

    fn as_wire(self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::InvalidAuth => "30",
            Self::JobNotFound => "60",
            Self::ParameterError => "70",
            Self::Undefined => UNDEFINED_WIRE_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes for the REST v2 delivery report endpoint.
pub enum ReportCode {
    /// Query accepted (`00`).
    Success,
    /// Invalid user code, password, or no API access (`30`).
    InvalidAuth,
    /// No records matched the query (`60`).
    NoRecords,
    /// Invalid or missing parameter (`70`).
    ParameterError,
    /// Reserved fallback for absent/unrecognized codes (`5000`).
    Undefined,
}

impl StatusCodeFamily for ReportCode {
    const SUCCESS: Self = Self::Success;
    const UNDEFINED: Self = Self::Undefined;

    fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Success,
            "30" => Self::InvalidAuth,
            "60" => Self::NoRecords,
            "70" => Self::ParameterError,
            _ => return None,
        })
    }

    fn as_wire(self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::InvalidAuth => "30",
            Self::NoRecords => "60",
            Self::ParameterError => "70",
            Self::Undefined => UNDEFINED_WIRE_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes for the REST v2 sender-id (msgheader) query endpoint.
pub enum HeaderCode {
    /// Query accepted (`00`).
    Success,
    /// Invalid user code, password, or no API access (`30`).
    InvalidAuth,
    /// Invalid or missing parameter, or no header found (`70`).
    ParameterError,
    /// Reserved fallback for absent/unrecognized codes (`5000`).
    Undefined,
}

impl StatusCodeFamily for HeaderCode {
    const SUCCESS: Self = Self::Success;
    const UNDEFINED: Self = Self::Undefined;

    fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Success,
            "30" => Self::InvalidAuth,
            "70" => Self::ParameterError,
            _ => return None,
        })
    }

    fn as_wire(self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::InvalidAuth => "30",
            Self::ParameterError => "70",
            Self::Undefined => UNDEFINED_WIRE_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes for the REST v2 inbox query endpoint.
pub enum InboxCode {
    /// Query accepted (`00`).
    Success,
    /// Invalid user code, password, or no API access (`30`).
    InvalidAuth,
    /// No inbox messages in the queried range (`40`).
    ///
    /// The gateway signals an empty inbox through this code rather than an
    /// empty list, so it is a declared member distinct from generic failure.
    NoMessages,
    /// Invalid or missing parameter (`70`).
    ParameterError,
    /// Reserved fallback for absent/unrecognized codes (`5000`).
    Undefined,
}

impl StatusCodeFamily for InboxCode {
    const SUCCESS: Self = Self::Success;
    const UNDEFINED: Self = Self::Undefined;

    fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Success,
            "30" => Self::InvalidAuth,
            "40" => Self::NoMessages,
            "70" => Self::ParameterError,
            _ => return None,
        })
    }

    fn as_wire(self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::InvalidAuth => "30",
            Self::NoMessages => "40",
            Self::ParameterError => "70",
            Self::Undefined => UNDEFINED_WIRE_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes for the IYS consent add/search endpoints.
pub enum IysCode {
    /// Operation accepted (`00`).
    Success,
    /// Invalid user code, password, or no API access (`30`).
    InvalidAuth,
    /// No IYS brand information found for the account (`51`).
    BrandNotFound,
    /// Invalid or missing parameter (`70`).
    ParameterError,
    /// Reserved fallback for absent/unrecognized codes (`5000`).
    Undefined,
}

impl StatusCodeFamily for IysCode {
    const SUCCESS: Self = Self::Success;
    const UNDEFINED: Self = Self::Undefined;

    fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Success,
            "30" => Self::InvalidAuth,
            "51" => Self::BrandNotFound,
            "70" => Self::ParameterError,
            _ => return None,
        })
    }

    fn as_wire(self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::InvalidAuth => "30",
            Self::BrandNotFound => "51",
            Self::ParameterError => "70",
            Self::Undefined => UNDEFINED_WIRE_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Normalized status code tagged with the endpoint family it came from.
///
/// Every member is a value from one family's closed table, so callers can
/// branch exhaustively on failure reasons without handling arbitrary
/// gateway strings.
pub enum ServiceCode {
    Send(SendSmsCode),
    Otp(OtpCode),
    Cancel(CancelCode),
    Report(ReportCode),
    Header(HeaderCode),
    Inbox(InboxCode),
    Iys(IysCode),
}

impl ServiceCode {
    /// The wire representation of the tagged member.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Send(code) => code.as_wire(),
            Self::Otp(code) => code.as_wire(),
            Self::Cancel(code) => code.as_wire(),
            Self::Report(code) => code.as_wire(),
            Self::Header(code) => code.as_wire(),
            Self::Inbox(code) => code.as_wire(),
            Self::Iys(code) => code.as_wire(),
        }
    }

    /// Whether the tagged member is its family's success sentinel.
    pub fn is_success(self) -> bool {
        match self {
            Self::Send(code) => code.is_success(),
            Self::Otp(code) => code.is_success(),
            Self::Cancel(code) => code.is_success(),
            Self::Report(code) => code.is_success(),
            Self::Header(code) => code.is_success(),
            Self::Inbox(code) => code.is_success(),
            Self::Iys(code) => code.is_success(),
        }
    }

    /// Whether the tagged member is its family's undefined sentinel.
    pub fn is_undefined(self) -> bool {
        self.as_wire() == UNDEFINED_WIRE_CODE
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known members of the shared status-code table used by the legacy
/// endpoints, which predate the per-family split.
///
/// Legacy operations preserve the raw wire code; this mapping is opt-in via
/// [`KnownLegacyCode::from_wire`].
pub enum KnownLegacyCode {
    Success,
    InvalidAuth,
    InvalidHeader,
    InsufficientBalance,
    SystemError,
    CancelError,
    ParameterError,
    InvalidDate,
    TimeError,
}

impl KnownLegacyCode {
    /// The wire value of the shared table's success sentinel (`00`).
    pub const SUCCESS_WIRE: &'static str = "00";

    /// Map a raw legacy wire code to a known member, if one exists.
    pub fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Success,
            "30" => Self::InvalidAuth,
            "40" => Self::InvalidHeader,
            "50" => Self::InsufficientBalance,
            "51" => Self::SystemError,
            "60" => Self::CancelError,
            "70" => Self::ParameterError,
            "80" => Self::InvalidDate,
            "85" => Self::TimeError,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-message delivery status from report entries.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct DeliveryStatus(i32);

impl DeliveryStatus {
    /// Construct a delivery status from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Netgsm.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known delivery status variant, if one exists.
    pub fn known_kind(self) -> Option<KnownDeliveryStatus> {
        KnownDeliveryStatus::from_code(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known delivery status codes reported by Netgsm.
pub enum KnownDeliveryStatus {
    Pending,
    Sent,
    Expired,
    InvalidNumber,
    NotSent,
    Rejected,
    DeliveryError,
    Duplicate,
    Blacklisted,
    IysRejected,
    IysError,
    All,
}

impl KnownDeliveryStatus {
    /// Convert a raw integer delivery status into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Pending,
            1 => Self::Sent,
            2 => Self::Expired,
            3 => Self::InvalidNumber,
            4 => Self::NotSent,
            11 => Self::Rejected,
            12 => Self::DeliveryError,
            13 => Self::Duplicate,
            14 => Self::Blacklisted,
            16 => Self::IysRejected,
            17 => Self::IysError,
            100 => Self::All,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Mobile operator code from report entries.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct Operator(i32);

impl Operator {
    /// Construct an operator code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Netgsm.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known operator variant, if one exists.
    pub fn known_kind(self) -> Option<KnownOperator> {
        KnownOperator::from_code(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known operator codes reported by Netgsm.
pub enum KnownOperator {
    Vodafone,
    TurkTelekom,
    Turkcell,
    NetgsmSth,
    NetgsmMobil,
    TurkTelekomFixed,
    Unassigned,
    KktcVodafone,
    Abroad,
    KktcTurkcell,
}

impl KnownOperator {
    /// Convert a raw integer operator code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            10 => Self::Vodafone,
            20 => Self::TurkTelekom,
            30 => Self::Turkcell,
            40 => Self::NetgsmSth,
            41 => Self::NetgsmMobil,
            60 => Self::TurkTelekomFixed,
            70 => Self::Unassigned,
            160 => Self::KktcVodafone,
            212 | 213 | 214 | 215 => Self::Abroad,
            880 => Self::KktcTurkcell,
            _ => return None,
        })
    }
}
