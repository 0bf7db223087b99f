use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::alblog::LogRecord;

/// Distinct durations with their occurrence counts, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCounts {
    entries: Vec<(Duration, u64)>,
    positions: HashMap<Duration, usize>,
}

impl ValueCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: Duration) {
        if let Some(position) = self.positions.get(&value).copied()
            && let Some((_, count)) = self.entries.get_mut(position)
        {
            *count = count.saturating_add(1);
            return;
        }
        self.positions.insert(value, self.entries.len());
        self.entries.push((value, 1));
    }

    #[must_use]
    pub fn entries(&self) -> &[(Duration, u64)] {
        &self.entries
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0_u64, |acc, (_, count)| acc.saturating_add(*count))
    }
}

/// Running statistics for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    requests: u64,
    errors: u64,
    unmeasured: u64,
    latencies: ValueCounts,
    last_seen: DateTime<Utc>,
}

impl Aggregate {
    #[must_use]
    pub fn new(first_seen: DateTime<Utc>) -> Self {
        Self {
            requests: 0,
            errors: 0,
            unmeasured: 0,
            latencies: ValueCounts::new(),
            last_seen: first_seen,
        }
    }

    pub fn observe(&mut self, record: &LogRecord) {
        self.requests = self.requests.saturating_add(1);
        if record.is_server_error() {
            self.errors = self.errors.saturating_add(1);
        }
        match record.duration {
            Some(duration) => self.latencies.insert(duration),
            None => self.unmeasured = self.unmeasured.saturating_add(1),
        }
        self.last_seen = record.timestamp;
    }

    #[must_use]
    pub const fn requests(&self) -> u64 {
        self.requests
    }

    #[must_use]
    pub const fn errors(&self) -> u64 {
        self.errors
    }

    #[must_use]
    pub const fn successes(&self) -> u64 {
        self.requests.saturating_sub(self.errors)
    }

    /// Requests logged without a target, so without a latency sample.
    #[must_use]
    pub const fn unmeasured(&self) -> u64 {
        self.unmeasured
    }

    #[must_use]
    pub const fn latencies(&self) -> &ValueCounts {
        &self.latencies
    }

    #[must_use]
    pub const fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }
}
