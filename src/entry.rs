use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::info;

use crate::app::{self, RunSettings};
use crate::args::{CONFIG_FILE_STEM, CliArgs};
use crate::batch::BatchLimits;
use crate::error::{AppError, AppResult, ValidationError};
use crate::rules::RuleSet;
use crate::source::{ObjectRef, expand_s3_event};

/// Parses arguments, sets up logging and the runtime, and runs one
/// invocation.
///
/// # Errors
///
/// Returns any error raised while resolving settings or running.
pub fn run() -> AppResult<()> {
    let Some((args, matches)) = parse_args()? else {
        return Ok(());
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args() -> AppResult<Option<(CliArgs, ArgMatches)>> {
    let mut cmd = CliArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.try_get_matches_from(raw_args)?;
    let args = CliArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config() && std::env::var_os(crate::args::RULES_ENV_VAR).is_none()
}

fn has_default_config() -> bool {
    ["toml", "json"]
        .iter()
        .any(|ext| Path::new(&format!("{}.{}", CONFIG_FILE_STEM, ext)).exists())
}

async fn run_async(mut args: CliArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, matches, &config)?;
    }
    let settings = build_settings(args).await?;
    let report = app::run(&settings).await?;
    info!(
        recorded = report.stats.recorded,
        points = report.points,
        batches = report.published.batches,
        dry_run = settings.dry_run,
        "Done"
    );
    Ok(())
}

pub(crate) async fn build_settings(args: CliArgs) -> AppResult<RunSettings> {
    let rules = resolve_rules(&args)?;
    let objects = resolve_objects(&args).await?;

    Ok(RunSettings {
        objects,
        rules,
        bucketing: args.bucketing,
        namespace: args.namespace,
        limits: BatchLimits {
            max_batch_size: args.max_batch_size.get(),
            max_values_per_datum: args.max_values_per_datum.get(),
        },
        region: args.region,
        endpoint_url: args.endpoint_url,
        s3_endpoint_url: args.s3_endpoint_url,
        dry_run: args.dry_run,
        debug: args.debug,
        export_json: args.export_json,
        export_jsonl: args.export_jsonl,
    })
}

pub(crate) fn resolve_rules(args: &CliArgs) -> AppResult<RuleSet> {
    let rules = match (
        args.rules.as_deref(),
        args.rules_file.as_deref(),
        args.config_rules.as_deref(),
    ) {
        (Some(_), Some(_), _) => {
            return Err(AppError::validation(ValidationError::RulesConflict));
        }
        (Some(text), None, _) => RuleSet::from_json(text)?,
        (None, Some(path), _) => RuleSet::from_file(path)?,
        (None, None, Some(configs)) => RuleSet::from_configs(configs)?,
        (None, None, None) => RuleSet::disabled(),
    };
    info!(rules = rules.len(), "Loaded path rules");
    Ok(rules)
}

async fn resolve_objects(args: &CliArgs) -> AppResult<Vec<ObjectRef>> {
    let mut objects = args
        .inputs
        .iter()
        .map(String::as_str)
        .map(ObjectRef::parse)
        .collect::<Result<Vec<_>, _>>()?;
    for event in &args.s3_events {
        objects.extend(expand_s3_event(event).await?);
    }
    if objects.is_empty() {
        return Err(AppError::validation(ValidationError::MissingInput));
    }
    Ok(objects)
}
