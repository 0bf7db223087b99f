//! Delivering metric batches to CloudWatch.
mod cloudwatch;
mod dry_run;
mod form;
mod namespace;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use tracing::info;

use crate::error::PublishError;
use crate::metrics::MetricPoint;

pub use cloudwatch::{CloudWatchPublisher, default_endpoint};
pub use dry_run::DryRunPublisher;
pub use form::encode_put_metric_data;
pub use namespace::{DEFAULT_NAMESPACE, MAX_NAMESPACE_LEN, Namespace};

/// Sends one batch of metric points.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// `index` is the zero-based position of the batch within the run.
    async fn publish(
        &self,
        namespace: &Namespace,
        index: usize,
        batch: &[MetricPoint],
    ) -> Result<(), PublishError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    pub batches: usize,
    pub points: usize,
}

/// Publishes batches in order and stops at the first failure.
///
/// # Errors
///
/// Returns the first [`PublishError`]; later batches are not attempted.
pub async fn publish_all<P>(
    publisher: &P,
    namespace: &Namespace,
    batches: &[Vec<MetricPoint>],
) -> Result<PublishSummary, PublishError>
where
    P: Publisher + ?Sized,
{
    let mut summary = PublishSummary::default();
    for (index, batch) in batches.iter().enumerate() {
        publisher.publish(namespace, index, batch).await?;
        summary.batches = summary.batches.saturating_add(1);
        summary.points = summary.points.saturating_add(batch.len());
    }
    info!(
        namespace = %namespace,
        batches = summary.batches,
        points = summary.points,
        "Published metrics"
    );
    Ok(summary)
}
