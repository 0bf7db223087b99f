//! Load-balancer access-log parsing.
//!
//! A log line is a space-delimited list of fields where double-quoted fields
//! may contain spaces. Only the columns needed for route metrics are
//! interpreted; everything else is tokenized and ignored.
mod record;
mod tokenizer;

#[cfg(test)]
pub(crate) mod test_support;

pub use record::{LogRecord, ProcessingTimes, parse_line};
#[cfg(any(test, feature = "fuzzing"))]
pub(crate) use tokenizer::split_fields;
