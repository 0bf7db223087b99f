use std::path::PathBuf;

use serde::Deserialize;

use crate::args::Bucketing;
use crate::rules::RouteRuleConfig;

/// Settings accepted from `alb-path-metrics.toml` / `.json`. Every field
/// mirrors a CLI option; `rules` takes the rule list inline.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub inputs: Option<Vec<String>>,
    pub s3_events: Option<Vec<PathBuf>>,
    pub rules: Option<Vec<RouteRuleConfig>>,
    pub rules_file: Option<PathBuf>,
    pub namespace: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub s3_endpoint_url: Option<String>,
    pub max_batch_size: Option<usize>,
    pub max_values_per_datum: Option<usize>,
    pub bucketing: Option<Bucketing>,
    pub dry_run: Option<bool>,
    pub debug: Option<bool>,
    pub export_json: Option<String>,
    pub export_jsonl: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
