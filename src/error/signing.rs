use thiserror::Error;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("Missing AWS credentials: set {variable}.")]
    MissingCredentials { variable: &'static str },
    #[error("Failed to build sigv4 params: {source}")]
    Params {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to build sigv4 request: {source}")]
    Request {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to sign request: {source}")]
    Sign {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to build sign request: {source}")]
    BuildRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
