//! Transport layer: wire-format details (serialization/deserialization).

mod balance;
mod cancel;
mod inbox;
mod iys;
mod legacy;
mod msgheader;
mod otp;
mod report;
mod rest;
mod send_sms;

pub use balance::{decode_balance_response, encode_balance_body};
pub use cancel::{decode_cancel_response, encode_cancel_body};
pub use inbox::{decode_inbox_response, encode_inbox_query};
pub use iys::{
    decode_iys_add_response, decode_iys_search_response, encode_iys_add_body,
    encode_iys_search_body,
};
pub use legacy::{
    decode_legacy_cancel_response, decode_legacy_report_response, decode_legacy_send_response,
    decode_otp_xml_response, encode_legacy_cancel_query, encode_legacy_report_query,
    encode_legacy_send_body, encode_otp_xml_body,
};
pub use msgheader::{decode_headers_response, encode_header_query};
pub use otp::{decode_otp_response, encode_otp_body};
pub use report::{decode_report_response, encode_report_body};
pub use send_sms::{decode_send_sms_response, encode_send_sms_body};
