use serde::Serialize;
use tracing::info;

/// Line counters for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub objects: u64,
    pub lines: u64,
    pub blank: u64,
    pub malformed: u64,
    pub unmatched: u64,
    pub recorded: u64,
}

impl ScanStats {
    pub(crate) fn log_summary(&self, aggregates: usize, points: usize) {
        info!(
            objects = self.objects,
            lines = self.lines,
            malformed = self.malformed,
            unmatched = self.unmatched,
            recorded = self.recorded,
            aggregates,
            points,
            "Scan complete"
        );
    }
}
