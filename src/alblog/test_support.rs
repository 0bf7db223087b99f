use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use super::{LogRecord, ProcessingTimes};

pub(crate) fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, second)
        .single()
        .unwrap_or_default()
}

pub(crate) fn record(method: &str, host: &str, path: &str, status: u16) -> LogRecord {
    LogRecord {
        timestamp: at(10, 0, 0),
        method: method.to_owned(),
        host: host.to_owned(),
        path: path.to_owned(),
        status,
        processing: ProcessingTimes {
            request: 0.0,
            target: 0.0,
            response: 0.0,
        },
        duration: Some(Duration::ZERO),
    }
}

pub(crate) fn timed(
    method: &str,
    host: &str,
    path: &str,
    status: u16,
    duration: Option<Duration>,
    timestamp: DateTime<Utc>,
) -> LogRecord {
    LogRecord {
        timestamp,
        duration,
        ..record(method, host, path, status)
    }
}
