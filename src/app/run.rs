use tracing::{info, warn};

use super::processor::Processor;
use super::summary::ScanStats;
use crate::args::Bucketing;
use crate::aws::AwsCredentials;
use crate::batch::{BatchLimits, prepare};
use crate::error::{AppError, AppResult};
use crate::metrics::MetricPoint;
use crate::publish::{
    CloudWatchPublisher, DryRunPublisher, Namespace, PublishSummary, publish_all,
};
use crate::rules::RuleSet;
use crate::sinks::{export_json, export_jsonl};
use crate::source::{ObjectReader, ObjectRef, S3Reader};

/// Everything one invocation needs, resolved from CLI, environment and
/// config file.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub objects: Vec<ObjectRef>,
    pub rules: RuleSet,
    pub bucketing: Bucketing,
    pub namespace: Namespace,
    pub limits: BatchLimits,
    pub region: String,
    pub endpoint_url: Option<String>,
    pub s3_endpoint_url: Option<String>,
    pub dry_run: bool,
    pub debug: bool,
    pub export_json: Option<String>,
    pub export_jsonl: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub stats: ScanStats,
    pub aggregates: usize,
    pub points: usize,
    pub published: PublishSummary,
}

/// Runs one invocation end to end.
///
/// # Errors
///
/// Returns an error when an object cannot be read, an export cannot be
/// written, or a batch fails to publish. Malformed lines are not errors.
pub async fn run(settings: &RunSettings) -> AppResult<RunReport> {
    let mut processor = Processor::new(&settings.rules, settings.bucketing);

    if settings.rules.is_enabled() {
        let reader = object_reader(settings)?;
        for object in &settings.objects {
            let text = reader.read_text(object).await?;
            processor.process_text(&text);
        }
    } else {
        warn!(
            objects = settings.objects.len(),
            "No path rules configured; no request will be classified and no input is read"
        );
    }

    let points = processor.materialize();
    let stats = processor.stats();
    let aggregates = processor.aggregator().len();
    stats.log_summary(aggregates, points.len());

    if settings.debug {
        log_points(&points);
    }
    if let Some(path) = settings.export_json.as_deref() {
        export_json(path, &settings.namespace, &stats, &points).await?;
    }
    if let Some(path) = settings.export_jsonl.as_deref() {
        export_jsonl(path, &points).await?;
    }

    let point_count = points.len();
    let batches = prepare(points, settings.limits)?;
    let published = if batches.is_empty() {
        info!("No metric points to publish");
        PublishSummary::default()
    } else if settings.dry_run {
        publish_all(&DryRunPublisher, &settings.namespace, &batches).await?
    } else {
        let credentials = AwsCredentials::from_env().map_err(AppError::publish)?;
        let publisher = CloudWatchPublisher::new(
            &credentials,
            &settings.region,
            settings.endpoint_url.as_deref(),
        )?;
        publish_all(&publisher, &settings.namespace, &batches).await?
    };

    Ok(RunReport {
        stats,
        aggregates,
        points: point_count,
        published,
    })
}

fn object_reader(settings: &RunSettings) -> AppResult<ObjectReader> {
    if !settings.objects.iter().any(ObjectRef::is_s3) {
        return Ok(ObjectReader::local_only());
    }
    let credentials = AwsCredentials::from_env().map_err(AppError::source)?;
    let s3 = S3Reader::new(
        &credentials,
        &settings.region,
        settings.s3_endpoint_url.as_deref(),
    )?;
    Ok(ObjectReader::with_s3(s3))
}

fn log_points(points: &[MetricPoint]) {
    for point in points {
        info!(
            name = %point.name,
            dimensions = ?point.dimensions,
            timestamp = %point.timestamp,
            value = ?point.value,
            "Metric point"
        );
    }
}
