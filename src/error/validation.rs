use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Namespace must not be empty.")]
    NamespaceEmpty,
    #[error("Namespace is {length} characters long; the limit is {max}.")]
    NamespaceTooLong { length: usize, max: usize },
    #[error("Namespace must contain printable ASCII characters only.")]
    NamespaceNotPrintable,
    #[error("Namespace must not start with the reserved prefix '{prefix}'.")]
    NamespaceReserved { prefix: &'static str },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Nothing to process (pass log files, s3:// URIs, or --s3-event).")]
    MissingInput,
    #[error("Cannot combine --rules with --rules-file.")]
    RulesConflict,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
