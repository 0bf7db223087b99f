use std::collections::HashMap;

use tracing::trace;

use super::aggregate::Aggregate;
use super::key::AggregateKey;
use super::point::{
    DIMENSION_HOST, DIMENSION_METHOD, DIMENSION_PATH, Dimension, FAILED_REQUEST_COUNT,
    MetricPoint, REQUEST_COUNT, TARGET_RESPONSE_TIME,
};
use crate::alblog::LogRecord;
use crate::args::Bucketing;

/// Folds classified records into per-key aggregates for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    bucketing: Bucketing,
    aggregates: HashMap<AggregateKey, Aggregate>,
}

impl Aggregator {
    #[must_use]
    pub fn new(bucketing: Bucketing) -> Self {
        Self {
            bucketing,
            aggregates: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn bucketing(&self) -> Bucketing {
        self.bucketing
    }

    /// Adds one record under `route`. An empty route is ignored.
    pub fn record(&mut self, record: &LogRecord, route: &str) {
        if route.is_empty() {
            return;
        }
        let key = AggregateKey::new(record, route, self.bucketing);
        trace!(
            method = %key.method,
            host = %key.host,
            route = %key.route,
            "Recording request"
        );
        self.aggregates
            .entry(key)
            .or_insert_with(|| Aggregate::new(record.timestamp))
            .observe(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &AggregateKey) -> Option<&Aggregate> {
        self.aggregates.get(key)
    }

    /// Aggregates in key order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&AggregateKey, &Aggregate)> {
        let mut entries: Vec<_> = self.aggregates.iter().collect();
        entries.sort_by(|left, right| left.0.cmp(right.0));
        entries
    }

    /// Converts the current aggregates into metric points.
    ///
    /// Keys are emitted in sorted order, each as `TargetResponseTime` (only
    /// when at least one latency was measured), `RequestCount` and
    /// `FailedRequestCount`. Aggregates are left untouched.
    #[must_use]
    pub fn materialize(&self) -> Vec<MetricPoint> {
        let mut points = Vec::with_capacity(self.aggregates.len().saturating_mul(3));
        for (key, aggregate) in self.sorted() {
            let timestamp = key.bucket.unwrap_or_else(|| aggregate.last_seen());
            let dimensions = vec![
                Dimension::new(DIMENSION_METHOD, &key.method),
                Dimension::new(DIMENSION_HOST, &key.host),
                Dimension::new(DIMENSION_PATH, &key.route),
            ];

            let latencies = aggregate.latencies();
            if !latencies.is_empty() {
                let (values, counts) = latencies
                    .entries()
                    .iter()
                    .map(|(duration, count)| (duration.as_secs_f64(), *count))
                    .unzip();
                points.push(MetricPoint::distribution(
                    TARGET_RESPONSE_TIME,
                    dimensions.clone(),
                    timestamp,
                    values,
                    counts,
                ));
            }
            points.push(MetricPoint::scalar(
                REQUEST_COUNT,
                dimensions.clone(),
                timestamp,
                aggregate.requests(),
            ));
            points.push(MetricPoint::scalar(
                FAILED_REQUEST_COUNT,
                dimensions,
                timestamp,
                aggregate.errors(),
            ));
        }
        points
    }
}
