pub const RULES_ENV_VAR: &str = "INCLUDE_PATH_RULES";
pub const DRY_RUN_ENV_VAR: &str = "DRY_RUN";
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// Default config files are `<stem>.toml` and `<stem>.json` in the working
/// directory.
pub const CONFIG_FILE_STEM: &str = "alb-path-metrics";
