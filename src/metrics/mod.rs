//! Per-route aggregation and metric points.
mod aggregate;
mod aggregator;
mod key;
mod point;


pub use aggregate::{Aggregate, ValueCounts};
pub use aggregator::Aggregator;
pub use key::AggregateKey;
pub use point::{
    DIMENSION_HOST, DIMENSION_METHOD, DIMENSION_PATH, Dimension, FAILED_REQUEST_COUNT,
    MetricPoint, MetricValue, REQUEST_COUNT, TARGET_RESPONSE_TIME, Unit,
};
