use serde::Deserialize;
use serde_json::{Map, Value};

use super::rest;
use crate::domain::{
    AppName, DeliveryStatus, JobReport, Operator, ReportCode, ReportQuery, ReportResponse,
    ServiceCode,
};
use crate::error::NetgsmError;

#[derive(Debug, Clone, Deserialize)]
struct ReportWire {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    jobs: Vec<JobWire>,
}

#[derive(Debug, Clone, Deserialize)]
struct JobWire {
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

impl From<JobWire> for JobReport {
    fn from(wire: JobWire) -> Self {
        Self {
            jobid: wire.jobid,
            number: wire.number,
            status: DeliveryStatus::new(wire.status),
            operator: Operator::new(wire.operator),
            msglen: wire.msglen,
            delivered_date: wire.delivered_date,
            error_code: wire.error_code,
            referans_id: wire.referans_id,
        }
    }
}

/// Build the JSON body for the REST v2 report endpoint.
pub fn encode_report_body(request: &ReportQuery, default_appname: Option<&AppName>) -> Value {
    let mut body = Map::new();
    body.insert(
        "jobids".to_owned(),
        Value::Array(
            request
                .jobids()
                .iter()
                .map(|jobid| Value::String(jobid.as_str().to_owned()))
                .collect(),
        ),
    );
    body.insert(
        "startdate".to_owned(),
        Value::String(request.start_date().to_owned()),
    );
    body.insert(
        "stopdate".to_owned(),
        Value::String(request.stop_date().to_owned()),
    );

    let options = request.options();
    if let Some(appname) = options.appname.as_ref().or(default_appname) {
        body.insert(
            AppName::FIELD.to_owned(),
            Value::String(appname.as_str().to_owned()),
        );
    }
    if let Some(page_number) = options.page_number {
        body.insert("pagenumber".to_owned(), Value::from(page_number));
    }
    if let Some(page_size) = options.page_size {
        body.insert("pagesize".to_owned(), Value::from(page_size));
    }

    Value::Object(body)
}

pub fn decode_report_response(status: u16, body: &str) -> Result<ReportResponse, NetgsmError> {
    let wire: ReportWire = rest::decode_success(ServiceCode::Report, status, body)?;
    Ok(ReportResponse {
        code: ReportCode::Success,
        description: wire.description,
        jobs: wire.jobs.into_iter().map(JobReport::from).collect(),
    })
}
