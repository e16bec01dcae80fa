//! Wire codecs for the legacy endpoint generation.
//!
//! These endpoints predate the per-family status-code tables. Success is
//! detected either structurally (XML OTP, report-by-job) or by direct
//! equality against the shared legacy `"00"` sentinel (XML bulk send,
//! credential-free cancel); failures keep the raw gateway code.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    DeliveryStatus, JobId, JobReport, KnownLegacyCode, LegacyCancelResponse, LegacyReportQuery,
    LegacyReportResponse, LegacySendResponse, LegacySendSms, Operator, OtpSms, OtpXmlResponse,
    Password, Username,
};
use crate::error::NetgsmError;

/// Build the XML body for the legacy OTP endpoint.
///
/// User-supplied message text goes inside a CDATA section; structural fields
/// are plain elements.
pub fn encode_otp_xml_body(request: &OtpSms, username: &Username, password: &Password) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <mainbody>\n\
         <header>\n\
         <usercode>{usercode}</usercode>\n\
         <password>{password}</password>\n\
         <msgheader>{msgheader}</msgheader>\n\
         </header>\n\
         <body>\n\
         <msg><![CDATA[{msg}]]></msg>\n\
         <no>{no}</no>\n\
         </body>\n\
         </mainbody>",
        usercode = username.as_str(),
        password = password.as_str(),
        msgheader = request.msgheader().as_str(),
        msg = request.msg().as_str(),
        no = request.recipient().raw(),
    )
}

/// Build the XML body for the legacy 1:n bulk send endpoint.
pub fn encode_legacy_send_body(
    request: &LegacySendSms,
    username: &Username,
    password: &Password,
) -> String {
    let mut header = format!(
        "<usercode>{usercode}</usercode>\n\
         <password>{password}</password>\n\
         <type>1:n</type>\n\
         <msgheader>{msgheader}</msgheader>\n",
        usercode = username.as_str(),
        password = password.as_str(),
        msgheader = request.msgheader().as_str(),
    );
    if let Some(start_date) = request.start_date() {
        header.push_str(&format!("<startdate>{start_date}</startdate>\n"));
    }
    if let Some(stop_date) = request.stop_date() {
        header.push_str(&format!("<stopdate>{stop_date}</stopdate>\n"));
    }

    let mut recipients = String::new();
    for recipient in request.recipients() {
        recipients.push_str(&format!("<no>{}</no>\n", recipient.raw()));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <mainbody>\n\
         <header>\n\
         {header}\
         </header>\n\
         <body>\n\
         <msg><![CDATA[{msg}]]></msg>\n\
         {recipients}\
         </body>\n\
         </mainbody>",
        msg = request.msg().as_str(),
    )
}

/// Build the query string for the credential-free legacy cancel endpoint.
pub fn encode_legacy_cancel_query(
    jobid: &JobId,
    username: &Username,
    password: &Password,
) -> Vec<(String, String)> {
    vec![
        (Username::FIELD.to_owned(), username.as_str().to_owned()),
        (Password::FIELD.to_owned(), password.as_str().to_owned()),
        (JobId::FIELD.to_owned(), jobid.as_str().to_owned()),
    ]
}

/// Build the query string for the legacy per-job report endpoint.
///
/// The legacy wire names for the date bounds are `bastar`/`bittar`
/// (punctuated `dd.MM.yyyy HH:mm:ss` values); this is the only place that
/// naming appears.
pub fn encode_legacy_report_query(
    request: &LegacyReportQuery,
    username: &Username,
    password: &Password,
) -> Vec<(String, String)> {
    let mut params = vec![
        (Username::FIELD.to_owned(), username.as_str().to_owned()),
        (Password::FIELD.to_owned(), password.as_str().to_owned()),
        (JobId::FIELD.to_owned(), request.jobid().as_str().to_owned()),
    ];
    if let Some(start_date) = request.start_date() {
        params.push(("bastar".to_owned(), start_date.to_owned()));
    }
    if let Some(stop_date) = request.stop_date() {
        params.push(("bittar".to_owned(), stop_date.to_owned()));
    }
    params
}

#[derive(Debug, Default)]
struct XmlFields {
    code: Option<String>,
    jobid: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum XmlField {
    Code,
    JobId,
    Error,
}

fn scan_xml_fields(status: u16, body: &str) -> Result<XmlFields, NetgsmError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut fields = XmlFields::default();
    let mut current = None;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                current = match e.name().as_ref() {
                    b"code" => Some(XmlField::Code),
                    b"jobID" => Some(XmlField::JobId),
                    b"error" => Some(XmlField::Error),
                    _ => None,
                };
            }
            Ok(Event::Text(ref e)) => {
                if let Some(field) = current {
                    let text = e.unescape().map_err(|err| NetgsmError::Parse {
                        status,
                        description: format!("failed to parse XML response: {err}"),
                    })?;
                    let slot = match field {
                        XmlField::Code => &mut fields.code,
                        XmlField::JobId => &mut fields.jobid,
                        XmlField::Error => &mut fields.error,
                    };
                    slot.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Ok(Event::End(_)) => current = None,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(NetgsmError::Parse {
                    status,
                    description: format!("failed to parse XML response: {err}"),
                });
            }
        }
        buf.clear();
    }

    Ok(fields)
}

/// Decode a legacy OTP XML response.
///
/// Success is inferred structurally: HTTP 200 with a `jobID` element. The
/// gateway's raw code is carried through either way.
pub fn decode_otp_xml_response(status: u16, body: &str) -> Result<OtpXmlResponse, NetgsmError> {
    let mut fields = scan_xml_fields(status, body)?;

    if status == super::rest::HTTP_OK {
        if let Some(jobid) = fields.jobid.take() {
            return Ok(OtpXmlResponse {
                jobid,
                code: fields.code,
            });
        }
    }

    Err(NetgsmError::LegacyApi {
        status,
        code: fields.code.unwrap_or_default(),
        description: fields.error,
        fields: Map::new(),
    })
}

/// Decode a legacy XML bulk send response.
///
/// Success is direct equality of the `code` element against the shared
/// legacy sentinel `"00"`; no sentinel substitution happens on failure.
pub fn decode_legacy_send_response(
    status: u16,
    body: &str,
) -> Result<LegacySendResponse, NetgsmError> {
    let fields = scan_xml_fields(status, body)?;
    let code = fields.code.unwrap_or_default();

    if code == KnownLegacyCode::SUCCESS_WIRE {
        return Ok(LegacySendResponse {
            code,
            jobid: fields.jobid,
        });
    }

    Err(NetgsmError::LegacyApi {
        status,
        code,
        description: fields.error,
        fields: Map::new(),
    })
}

#[derive(Debug, Clone, Deserialize)]
struct LegacyCancelWire {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    jobid: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Decode a legacy cancel response: direct equality against `"00"`.
pub fn decode_legacy_cancel_response(
    status: u16,
    body: &str,
) -> Result<LegacyCancelResponse, NetgsmError> {
    let wire: LegacyCancelWire = serde_json::from_str(body).map_err(|err| NetgsmError::Parse {
        status,
        description: format!("failed to parse JSON response: {err}"),
    })?;

    let code = wire.code.unwrap_or_default();
    if code == KnownLegacyCode::SUCCESS_WIRE {
        return Ok(LegacyCancelResponse {
            code,
            jobid: wire.jobid,
        });
    }

    let mut fields = Map::new();
    if let Some(jobid) = wire.jobid {
        fields.insert(JobId::FIELD.to_owned(), Value::String(jobid));
    }
    Err(NetgsmError::LegacyApi {
        status,
        code,
        description: wire.description,
        fields,
    })
}

#[derive(Debug, Clone, Deserialize)]
struct LegacyReportWire {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    jobs: Option<Vec<LegacyJobWire>>,
}

#[derive(Debug, Clone, Deserialize)]
struct LegacyJobWire {
    jobid: String,
    number: String,
    status: i32,
    operator: i32,
    #[serde(default)]
    msglen: u32,
    #[serde(default, rename = "deliveredDate")]
    delivered_date: Option<String>,
    #[serde(default, rename = "errorCode")]
    error_code: Option<i32>,
    #[serde(default, rename = "referansID")]
    referans_id: Option<String>,
}

/// Decode a legacy per-job report response.
///
/// The legacy gateway signals success inconsistently, so it is inferred from
/// the presence of the `jobs` list rather than from the code field.
pub fn decode_legacy_report_response(
    status: u16,
    body: &str,
) -> Result<LegacyReportResponse, NetgsmError> {
    let wire: LegacyReportWire = serde_json::from_str(body).map_err(|err| NetgsmError::Parse {
        status,
        description: format!("failed to parse JSON response: {err}"),
    })?;

    if let Some(jobs) = wire.jobs {
        return Ok(LegacyReportResponse {
            jobs: jobs
                .into_iter()
                .map(|job| JobReport {
                    jobid: job.jobid,
                    number: job.number,
                    status: DeliveryStatus::new(job.status),
                    operator: Operator::new(job.operator),
                    msglen: job.msglen,
                    delivered_date: job.delivered_date,
                    error_code: job.error_code,
                    referans_id: job.referans_id,
                })
                .collect(),
        });
    }

    Err(NetgsmError::LegacyApi {
        status,
        code: wire.code.unwrap_or_default(),
        description: wire.description,
        fields: Map::new(),
    })
}
