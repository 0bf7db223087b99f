use async_trait::async_trait;
use tracing::{debug, info};

use super::namespace::Namespace;
use super::Publisher;
use crate::error::PublishError;
use crate::metrics::MetricPoint;

/// Logs what would be published without contacting CloudWatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunPublisher;

#[async_trait]
impl Publisher for DryRunPublisher {
    async fn publish(
        &self,
        namespace: &Namespace,
        index: usize,
        batch: &[MetricPoint],
    ) -> Result<(), PublishError> {
        info!(
            namespace = %namespace,
            batch = index,
            points = batch.len(),
            "Dry run: skipping PutMetricData"
        );
        for point in batch {
            debug!(batch = index, name = %point.name, timestamp = %point.timestamp, "Dry run point");
        }
        Ok(())
    }
}
