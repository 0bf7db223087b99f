use thiserror::Error;

use super::SigningError;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Invalid CloudWatch endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to sign PutMetricData request: {0}")]
    Signing(#[from] SigningError),
    #[error("PutMetricData request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("PutMetricData rejected batch {batch} with status {status}: {body}")]
    Rejected {
        batch: usize,
        status: u16,
        body: String,
    },
}
