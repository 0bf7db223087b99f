use clap::Parser;
use std::path::PathBuf;

use crate::aws::{DEFAULT_REGION, REGION_VAR};
use crate::batch::{DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_VALUES_PER_DATUM};
use crate::publish::{DEFAULT_NAMESPACE, Namespace};
use crate::rules::RouteRuleConfig;

use super::defaults::{DEBUG_ENV_VAR, DRY_RUN_ENV_VAR, RULES_ENV_VAR};
use super::parsers::{parse_bool_env, parse_namespace, parse_positive_usize};
use super::types::{Bucketing, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Turn load-balancer access logs into per-route CloudWatch request, error, and latency metrics."
)]
pub struct CliArgs {
    /// Log objects to process: local files (plain or gzip) or s3://bucket/key
    #[arg(value_name = "LOG")]
    pub inputs: Vec<String>,

    /// S3 event notification JSON whose records name the objects to process (repeatable)
    #[arg(long = "s3-event", value_name = "FILE")]
    pub s3_events: Vec<PathBuf>,

    /// Path rules as a JSON array of {host, path, route, method?}
    #[arg(long = "rules", env = RULES_ENV_VAR, hide_env_values = true)]
    pub rules: Option<String>,

    /// Read path rules from a JSON file
    #[arg(long = "rules-file", conflicts_with = "rules")]
    pub rules_file: Option<PathBuf>,

    #[arg(skip)]
    pub config_rules: Option<Vec<RouteRuleConfig>>,

    /// CloudWatch namespace for published metrics
    #[arg(long = "namespace", default_value = DEFAULT_NAMESPACE, value_parser = parse_namespace)]
    pub namespace: Namespace,

    /// AWS region for CloudWatch and S3
    #[arg(long = "region", env = REGION_VAR, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Override the CloudWatch endpoint URL
    #[arg(long = "endpoint-url")]
    pub endpoint_url: Option<String>,

    /// Override the S3 endpoint URL (objects are addressed path style)
    #[arg(long = "s3-endpoint-url")]
    pub s3_endpoint_url: Option<String>,

    /// Maximum metric records per PutMetricData call
    #[arg(
        long = "max-batch-size",
        default_value_t = positive_default(DEFAULT_MAX_BATCH_SIZE),
        value_parser = parse_positive_usize
    )]
    pub max_batch_size: PositiveUsize,

    /// Maximum value/count pairs per metric record
    #[arg(
        long = "max-values-per-datum",
        default_value_t = positive_default(DEFAULT_MAX_VALUES_PER_DATUM),
        value_parser = parse_positive_usize
    )]
    pub max_values_per_datum: PositiveUsize,

    /// Time bucketing of aggregates
    #[arg(long = "bucketing", default_value = "minute", value_enum)]
    pub bucketing: Bucketing,

    /// Log the batches instead of publishing them
    #[arg(long = "dry-run", env = DRY_RUN_ENV_VAR, value_parser = parse_bool_env)]
    pub dry_run: bool,

    /// Log every metric point before publishing
    #[arg(long = "debug", env = DEBUG_ENV_VAR, value_parser = parse_bool_env)]
    pub debug: bool,

    /// Write the metric points to a JSON file
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Write the metric points to a JSON Lines file
    #[arg(long = "export-jsonl")]
    pub export_jsonl: Option<String>,

    /// Path to config file (TOML or JSON)
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}

fn positive_default(value: usize) -> PositiveUsize {
    PositiveUsize::try_from(value).unwrap_or(PositiveUsize::MIN)
}
