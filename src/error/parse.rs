use thiserror::Error;

/// Why a single access-log line could not be turned into a record.
///
/// Callers skip the line and keep scanning.
#[derive(Debug, Error)]
pub enum MalformedRecord {
    #[error("Expected at least {expected} fields, found {found}.")]
    TooFewFields { expected: usize, found: usize },
    #[error("Unterminated quoted field starting at byte {offset}.")]
    UnterminatedQuote { offset: usize },
    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Invalid {field} '{value}': {source}")]
    InvalidProcessingTime {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Invalid {field} '{value}': not a finite number of seconds.")]
    ProcessingTimeOutOfRange { field: &'static str, value: String },
    #[error("Processing time sum overflowed.")]
    DurationOverflow,
    #[error("Invalid status code '{value}': {source}")]
    InvalidStatus {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid request line '{value}'. Expected 'METHOD URL PROTOCOL'.")]
    InvalidRequestLine { value: String },
    #[error("Invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Request URL '{url}' has no host.")]
    UrlMissingHost { url: String },
}
