//! Core library for the `alb-path-metrics` CLI.
//!
//! This crate turns load-balancer access logs into per-route request, error,
//! and latency metrics: log parsing, path rules, aggregation, batching, and
//! CloudWatch publishing. The primary user-facing interface is the
//! `alb-path-metrics` command-line application; library APIs may evolve as
//! the CLI grows.
pub mod alblog;
pub mod app;
pub mod args;
pub mod aws;
pub mod batch;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod publish;
pub mod rules;
pub mod sinks;
pub mod source;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod test_http;
