//! Entry points used by the `fuzz/` targets.
use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::alblog::{LogRecord, parse_line, split_fields};
use crate::args::{CliArgs, PositiveUsize};
use crate::batch::{BatchLimits, prepare};
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::error::{AppResult, MalformedRecord};
use crate::metrics::Aggregator;
use crate::rules::RuleSet;

thread_local! {
    static BASE_MATCHES: ArgMatches = CliArgs::command().get_matches_from(["alb-path-metrics"]);
}

/// Splits a raw log line into fields and returns the field count.
///
/// # Errors
///
/// Returns an error when a quoted field is unterminated.
pub fn split_line_input(line: &str) -> Result<usize, MalformedRecord> {
    split_fields(line).map(|fields| fields.len())
}

/// Parses one access-log line.
///
/// # Errors
///
/// Returns an error when the line is malformed.
pub fn parse_line_input(line: &str) -> Result<LogRecord, MalformedRecord> {
    parse_line(line)
}

/// Compiles a JSON rule list.
///
/// # Errors
///
/// Returns an error when the JSON or any rule is invalid.
pub fn rules_from_json_input(input: &str) -> AppResult<RuleSet> {
    Ok(RuleSet::from_json(input)?)
}

/// Classifies every parseable line with `rules` and batches the resulting
/// points. Returns the number of batches.
///
/// # Errors
///
/// Returns an error when either limit is zero.
pub fn aggregate_lines_input(
    rules: &RuleSet,
    text: &str,
    max_batch_size: usize,
    max_values_per_datum: usize,
) -> AppResult<usize> {
    let mut aggregator = Aggregator::default();
    for record in text.lines().filter_map(|line| parse_line(line).ok()) {
        if let Some(route) = rules.classify(&record) {
            aggregator.record(&record, route);
        }
    }
    let limits = BatchLimits {
        max_batch_size,
        max_values_per_datum,
    };
    let batches = prepare(aggregator.materialize(), limits)?;
    Ok(batches.len())
}

/// Parses a positive usize string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_usize_input(input: &str) -> AppResult<usize> {
    let value: PositiveUsize = input.parse()?;
    Ok(value.get())
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<()> {
    let config: ConfigFile = toml::from_str(input)?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<()> {
    let config: ConfigFile = serde_json::from_slice(input)?;
    apply_config_to_defaults(&config)
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<()> {
    BASE_MATCHES.with(|matches| {
        let mut args = CliArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)
    })
}
