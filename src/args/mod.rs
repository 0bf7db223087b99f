//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::CliArgs;
pub use defaults::{CONFIG_FILE_STEM, RULES_ENV_VAR};
pub use types::{Bucketing, PositiveUsize};
