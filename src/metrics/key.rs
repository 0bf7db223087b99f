use chrono::{DateTime, Timelike, Utc};

use crate::alblog::LogRecord;
use crate::args::Bucketing;

/// Identity of one aggregate.
///
/// `bucket` is the start of the record's minute when aggregating per minute
/// and `None` when aggregating over the whole invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AggregateKey {
    pub method: String,
    pub host: String,
    pub route: String,
    pub bucket: Option<DateTime<Utc>>,
}

impl AggregateKey {
    #[must_use]
    pub fn new(record: &LogRecord, route: &str, bucketing: Bucketing) -> Self {
        let bucket = match bucketing {
            Bucketing::Minute => Some(truncate_to_minute(record.timestamp)),
            Bucketing::LastSeen => None,
        };
        Self {
            method: record.method.clone(),
            host: record.host.clone(),
            route: route.to_owned(),
            bucket,
        }
    }
}

/// Start of the UTC minute containing `timestamp`.
#[must_use]
pub fn truncate_to_minute(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .with_second(0)
        .and_then(|value| value.with_nanosecond(0))
        .unwrap_or(timestamp)
}
