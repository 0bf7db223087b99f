//! Splitting metric points into publishable batches.
//!
//! A publish call accepts a bounded number of records, and each record a
//! bounded number of value/count pairs. [`prepare`] enforces both.
use std::num::NonZeroUsize;

use crate::error::BatchError;
use crate::metrics::{MetricPoint, MetricValue};


pub const DEFAULT_MAX_BATCH_SIZE: usize = 20;
pub const DEFAULT_MAX_VALUES_PER_DATUM: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
    pub max_batch_size: usize,
    pub max_values_per_datum: usize,
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_values_per_datum: DEFAULT_MAX_VALUES_PER_DATUM,
        }
    }
}

/// Partitions `items` into consecutive batches of at most `max_batch_size`.
///
/// # Errors
///
/// Returns [`BatchError::InvalidBatchSize`] when `max_batch_size` is zero.
pub fn chunk<T>(items: Vec<T>, max_batch_size: usize) -> Result<Vec<Vec<T>>, BatchError> {
    let size = positive(max_batch_size, "max_batch_size")?;
    let mut batches = Vec::with_capacity(items.len().div_ceil(size.get()));
    let mut current = Vec::with_capacity(size.get().min(items.len()));
    for item in items {
        current.push(item);
        if current.len() == size.get() {
            batches.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        batches.push(current);
    }
    Ok(batches)
}

/// Splits distributions longer than `max_values` into consecutive
/// sub-points sharing name, dimensions, timestamp and unit.
///
/// # Errors
///
/// Returns [`BatchError::InvalidBatchSize`] when `max_values` is zero.
pub fn split_series(
    points: Vec<MetricPoint>,
    max_values: usize,
) -> Result<Vec<MetricPoint>, BatchError> {
    let limit = positive(max_values, "max_values_per_datum")?.get();
    let mut out = Vec::with_capacity(points.len());
    for point in points {
        if let MetricValue::Distribution {
            values,
            counts,
            unit,
        } = &point.value
            && values.len() > limit
        {
            for (values, counts) in values.chunks(limit).zip(counts.chunks(limit)) {
                out.push(MetricPoint {
                    name: point.name.clone(),
                    dimensions: point.dimensions.clone(),
                    timestamp: point.timestamp,
                    value: MetricValue::Distribution {
                        values: values.to_vec(),
                        counts: counts.to_vec(),
                        unit: *unit,
                    },
                });
            }
            continue;
        }
        out.push(point);
    }
    Ok(out)
}

/// Splits long series, then chunks the result into batches.
///
/// # Errors
///
/// Returns [`BatchError::InvalidBatchSize`] when either limit is zero.
pub fn prepare(
    points: Vec<MetricPoint>,
    limits: BatchLimits,
) -> Result<Vec<Vec<MetricPoint>>, BatchError> {
    let points = split_series(points, limits.max_values_per_datum)?;
    chunk(points, limits.max_batch_size)
}

fn positive(value: usize, limit: &'static str) -> Result<NonZeroUsize, BatchError> {
    NonZeroUsize::new(value).ok_or(BatchError::InvalidBatchSize { limit })
}
