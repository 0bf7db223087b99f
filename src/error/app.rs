use thiserror::Error;

use super::{
    BatchError, ConfigError, PublishError, RuleConfigError, SinkError, SourceError,
    ValidationError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("TOML error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Rule configuration error: {0}")]
    Rules(#[from] RuleConfigError),
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn rules<E>(error: E) -> Self
    where
        E: Into<RuleConfigError>,
    {
        error.into().into()
    }

    pub fn batch<E>(error: E) -> Self
    where
        E: Into<BatchError>,
    {
        error.into().into()
    }

    pub fn source<E>(error: E) -> Self
    where
        E: Into<SourceError>,
    {
        error.into().into()
    }

    pub fn publish<E>(error: E) -> Self
    where
        E: Into<PublishError>,
    {
        error.into().into()
    }

    pub fn sink<E>(error: E) -> Self
    where
        E: Into<SinkError>,
    {
        error.into().into()
    }
}
