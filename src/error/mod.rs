mod app;
mod batch;
mod config;
mod parse;
mod publish;
mod rules;
mod signing;
mod sink;
mod source;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use batch::BatchError;
pub use config::ConfigError;
pub use parse::MalformedRecord;
pub use publish::PublishError;
pub use rules::RuleConfigError;
pub use signing::SigningError;
pub use sink::SinkError;
pub use source::SourceError;
pub use validation::ValidationError;
