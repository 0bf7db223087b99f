//! File exports of materialized metric points.
mod writers;


pub use writers::{export_json, export_jsonl};
