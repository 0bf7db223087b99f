use chrono::{DateTime, Utc};
use serde::Serialize;

pub const TARGET_RESPONSE_TIME: &str = "TargetResponseTime";
pub const REQUEST_COUNT: &str = "RequestCount";
pub const FAILED_REQUEST_COUNT: &str = "FailedRequestCount";

pub const DIMENSION_METHOD: &str = "Method";
pub const DIMENSION_HOST: &str = "Host";
pub const DIMENSION_PATH: &str = "Path";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Count,
    Seconds,
}

impl Unit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "Count",
            Self::Seconds => "Seconds",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl Dimension {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Either a single value or a compressed distribution where `values[i]`
/// was observed `counts[i]` times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricValue {
    Scalar {
        value: f64,
        unit: Unit,
    },
    Distribution {
        values: Vec<f64>,
        counts: Vec<u64>,
        unit: Unit,
    },
}

impl MetricValue {
    #[must_use]
    pub const fn unit(&self) -> Unit {
        match self {
            Self::Scalar { unit, .. } | Self::Distribution { unit, .. } => *unit,
        }
    }

    /// Number of value/count pairs; a scalar counts as one.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar { .. } => 1,
            Self::Distribution { values, .. } => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A wire-ready metric record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPoint {
    pub name: String,
    pub dimensions: Vec<Dimension>,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub value: MetricValue,
}

impl MetricPoint {
    #[must_use]
    pub fn scalar(
        name: &str,
        dimensions: Vec<Dimension>,
        timestamp: DateTime<Utc>,
        value: u64,
    ) -> Self {
        Self {
            name: name.to_owned(),
            dimensions,
            timestamp,
            value: MetricValue::Scalar {
                value: count_as_value(value),
                unit: Unit::Count,
            },
        }
    }

    #[must_use]
    pub fn distribution(
        name: &str,
        dimensions: Vec<Dimension>,
        timestamp: DateTime<Utc>,
        values: Vec<f64>,
        counts: Vec<u64>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            dimensions,
            timestamp,
            value: MetricValue::Distribution {
                values,
                counts,
                unit: Unit::Seconds,
            },
        }
    }

    /// Looks up a dimension value by name.
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|dimension| dimension.name == name)
            .map(|dimension| dimension.value.as_str())
    }
}

const fn count_as_value(count: u64) -> f64 {
    count as f64
}
