//! One invocation: read objects, scan lines, aggregate, export, publish.
mod processor;
mod run;
mod summary;


pub use processor::{LineOutcome, Processor};
pub use run::{RunReport, RunSettings, run};
pub use summary::ScanStats;
