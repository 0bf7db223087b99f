use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{CliArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};
use crate::publish::Namespace;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line or through an environment variable win over the file.
///
/// # Errors
///
/// Returns an error when config values are invalid or conflict.
pub fn apply_config(args: &mut CliArgs, matches: &ArgMatches, config: &ConfigFile) -> AppResult<()> {
    if config.rules.is_some() && config.rules_file.is_some() {
        return Err(AppError::config(ConfigError::Conflict {
            left: "rules",
            right: "rules_file",
        }));
    }

    if !is_set(matches, "inputs")
        && let Some(inputs) = config.inputs.as_ref()
    {
        args.inputs.clone_from(inputs);
    }

    if !is_set(matches, "s3_events")
        && let Some(events) = config.s3_events.as_ref()
    {
        args.s3_events.clone_from(events);
    }

    let rules_given = is_set(matches, "rules") || is_set(matches, "rules_file");
    if !rules_given {
        if let Some(rules) = config.rules.as_ref() {
            args.config_rules = Some(rules.clone());
        }
        if let Some(path) = config.rules_file.as_ref() {
            args.rules_file = Some(path.clone());
        }
    }

    if !is_set(matches, "namespace")
        && let Some(namespace) = config.namespace.as_deref()
    {
        args.namespace = Namespace::new(namespace).map_err(AppError::validation)?;
    }

    if !is_set(matches, "region")
        && let Some(region) = config.region.as_ref()
    {
        args.region.clone_from(region);
    }

    if !is_set(matches, "endpoint_url")
        && let Some(endpoint) = config.endpoint_url.as_ref()
    {
        args.endpoint_url = Some(endpoint.clone());
    }

    if !is_set(matches, "s3_endpoint_url")
        && let Some(endpoint) = config.s3_endpoint_url.as_ref()
    {
        args.s3_endpoint_url = Some(endpoint.clone());
    }

    if !is_set(matches, "max_batch_size")
        && let Some(size) = config.max_batch_size
    {
        args.max_batch_size = ensure_positive_usize(size, "max_batch_size")?;
    }

    if !is_set(matches, "max_values_per_datum")
        && let Some(size) = config.max_values_per_datum
    {
        args.max_values_per_datum = ensure_positive_usize(size, "max_values_per_datum")?;
    }

    if !is_set(matches, "bucketing")
        && let Some(bucketing) = config.bucketing
    {
        args.bucketing = bucketing;
    }

    if !is_set(matches, "dry_run")
        && let Some(dry_run) = config.dry_run
    {
        args.dry_run = dry_run;
    }

    if !is_set(matches, "debug")
        && let Some(debug) = config.debug
    {
        args.debug = debug;
    }

    if !is_set(matches, "export_json")
        && let Some(path) = config.export_json.as_ref()
    {
        args.export_json = Some(path.clone());
    }

    if !is_set(matches, "export_jsonl")
        && let Some(path) = config.export_jsonl.as_ref()
    {
        args.export_jsonl = Some(path.clone());
    }

    if !is_set(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_set(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_set(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive { field, source: err })
    })
}
