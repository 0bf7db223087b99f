use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Invalid batch size for {limit}: must be >= 1.")]
    InvalidBatchSize { limit: &'static str },
}
