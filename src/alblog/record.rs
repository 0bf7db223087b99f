use std::borrow::Cow;
use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;

use super::tokenizer::split_fields;
use crate::error::MalformedRecord;

// Column positions (0-based):
// type time elb client:port target:port request_processing_time
// target_processing_time response_processing_time elb_status_code
// target_status_code received_bytes sent_bytes "request" ...
const TIMESTAMP_FIELD: usize = 1;
const REQUEST_TIME_FIELD: usize = 5;
const TARGET_TIME_FIELD: usize = 6;
const RESPONSE_TIME_FIELD: usize = 7;
const STATUS_FIELD: usize = 8;
const REQUEST_LINE_FIELD: usize = 12;
/// A line must reach the request-line column to be usable.
const MIN_FIELDS: usize = REQUEST_LINE_FIELD + 1;
const REQUEST_LINE_PARTS: usize = 3;

/// The three processing-time columns exactly as logged, in seconds.
///
/// `-1` is kept as-is: the load balancer writes it when no target was
/// contacted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessingTimes {
    pub request: f64,
    pub target: f64,
    pub response: f64,
}

impl ProcessingTimes {
    const fn components(self) -> [(&'static str, f64); 3] {
        [
            ("request_processing_time", self.request),
            ("target_processing_time", self.target),
            ("response_processing_time", self.response),
        ]
    }

    /// Total time spent, or `None` when any component is the negative
    /// no-target sentinel.
    fn total(self) -> Result<Option<Duration>, MalformedRecord> {
        if self
            .components()
            .iter()
            .any(|(_, seconds)| *seconds < 0.0_f64)
        {
            return Ok(None);
        }

        let mut total = Duration::ZERO;
        for (field, seconds) in self.components() {
            let component = Duration::try_from_secs_f64(seconds).map_err(|_err| {
                MalformedRecord::ProcessingTimeOutOfRange {
                    field,
                    value: seconds.to_string(),
                }
            })?;
            total = total
                .checked_add(component)
                .ok_or(MalformedRecord::DurationOverflow)?;
        }
        Ok(Some(total))
    }
}

/// One request observation taken from an access-log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub host: String,
    pub path: String,
    pub status: u16,
    pub processing: ProcessingTimes,
    /// Sum of the processing times; `None` when no target was contacted.
    pub duration: Option<Duration>,
}

impl LogRecord {
    /// Whether the edge status code is a 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.status, 500..=599)
    }
}

/// Parses one access-log line.
///
/// # Errors
///
/// Returns [`MalformedRecord`] when the line has too few fields or a field
/// the record needs is not well-formed. A processing time that is not a
/// valid float rejects the whole line.
pub fn parse_line(line: &str) -> Result<LogRecord, MalformedRecord> {
    let fields = split_fields(line)?;
    if fields.len() < MIN_FIELDS {
        return Err(MalformedRecord::TooFewFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let raw_timestamp = field(&fields, TIMESTAMP_FIELD)?;
    let timestamp = DateTime::parse_from_rfc3339(raw_timestamp)
        .map_err(|err| MalformedRecord::InvalidTimestamp {
            value: raw_timestamp.to_owned(),
            source: err,
        })?
        .with_timezone(&Utc);

    let processing = ProcessingTimes {
        request: parse_seconds(&fields, REQUEST_TIME_FIELD, "request_processing_time")?,
        target: parse_seconds(&fields, TARGET_TIME_FIELD, "target_processing_time")?,
        response: parse_seconds(&fields, RESPONSE_TIME_FIELD, "response_processing_time")?,
    };
    let duration = processing.total()?;

    let raw_status = field(&fields, STATUS_FIELD)?;
    let status = raw_status
        .parse::<u16>()
        .map_err(|err| MalformedRecord::InvalidStatus {
            value: raw_status.to_owned(),
            source: err,
        })?;

    let request_line = field(&fields, REQUEST_LINE_FIELD)?;
    let (method, url) = parse_request_line(request_line)?;
    let host = url
        .host_str()
        .ok_or_else(|| MalformedRecord::UrlMissingHost {
            url: url.as_str().to_owned(),
        })?
        .to_owned();

    Ok(LogRecord {
        timestamp,
        method: method.to_owned(),
        host,
        path: url.path().to_owned(),
        status,
        processing,
        duration,
    })
}

fn field<'fields>(
    fields: &'fields [Cow<'_, str>],
    index: usize,
) -> Result<&'fields str, MalformedRecord> {
    fields
        .get(index)
        .map(Cow::as_ref)
        .ok_or(MalformedRecord::TooFewFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        })
}

fn parse_seconds(
    fields: &[Cow<'_, str>],
    index: usize,
    name: &'static str,
) -> Result<f64, MalformedRecord> {
    let raw = field(fields, index)?;
    let seconds = raw
        .parse::<f64>()
        .map_err(|err| MalformedRecord::InvalidProcessingTime {
            field: name,
            value: raw.to_owned(),
            source: err,
        })?;
    if !seconds.is_finite() {
        return Err(MalformedRecord::ProcessingTimeOutOfRange {
            field: name,
            value: raw.to_owned(),
        });
    }
    Ok(seconds)
}

fn parse_request_line(request_line: &str) -> Result<(&str, Url), MalformedRecord> {
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let invalid = || MalformedRecord::InvalidRequestLine {
        value: request_line.to_owned(),
    };
    if parts.len() < REQUEST_LINE_PARTS {
        return Err(invalid());
    }
    let method = parts.first().copied().ok_or_else(invalid)?;
    let raw_url = parts.get(1).copied().ok_or_else(invalid)?;
    let url = Url::parse(raw_url).map_err(|err| MalformedRecord::InvalidUrl {
        url: raw_url.to_owned(),
        source: err,
    })?;
    Ok((method, url))
}
