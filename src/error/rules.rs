use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleConfigError {
    #[error("Failed to parse path rules JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to read path rules file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Path rule {index}: {field} is required.")]
    MissingField { index: usize, field: &'static str },
    #[error("Path rule {index}: {field} must not be only whitespace.")]
    BlankField { index: usize, field: &'static str },
    #[error("Path rule {index}: failed to compile pattern '{pattern}': {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
}
