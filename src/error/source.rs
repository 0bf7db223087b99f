use std::path::PathBuf;

use thiserror::Error;

use super::SigningError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read log file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid S3 URI '{value}'. Expected 's3://bucket/key'.")]
    InvalidS3Uri { value: String },
    #[error("Invalid S3 object URL for s3://{bucket}/{key}: {source}")]
    InvalidObjectUrl {
        bucket: String,
        key: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid S3 endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build S3 client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to fetch s3://{bucket}/{key}: {source}")]
    Fetch {
        bucket: String,
        key: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Fetching s3://{bucket}/{key} returned status {status}: {body}")]
    FetchStatus {
        bucket: String,
        key: String,
        status: u16,
        body: String,
    },
    #[error("Failed to sign S3 request: {0}")]
    Signing(#[from] SigningError),
    #[error("Failed to decompress '{name}': {source}")]
    Decompress {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read S3 event '{path}': {source}")]
    ReadEvent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse S3 event '{path}': {source}")]
    ParseEvent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("S3 event record {index} is missing a bucket name.")]
    MissingBucket { index: usize },
    #[error("S3 event record {index} is missing an object key.")]
    MissingKey { index: usize },
    #[error("S3 event record {index} has an invalid escape in key '{key}'.")]
    InvalidEventKey { index: usize, key: String },
    #[error("Cannot read {object}: S3 access is not configured.")]
    S3NotConfigured { object: String },
}
