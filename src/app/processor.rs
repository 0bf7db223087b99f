use tracing::debug;

use super::summary::ScanStats;
use crate::alblog::parse_line;
use crate::args::Bucketing;
use crate::metrics::{Aggregator, MetricPoint};
use crate::rules::RuleSet;

/// What happened to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Blank,
    Malformed,
    Unmatched,
    Recorded,
}

/// Owns the aggregator for one invocation and feeds it line by line.
#[derive(Debug)]
pub struct Processor<'rules> {
    rules: &'rules RuleSet,
    aggregator: Aggregator,
    stats: ScanStats,
}

impl<'rules> Processor<'rules> {
    #[must_use]
    pub fn new(rules: &'rules RuleSet, bucketing: Bucketing) -> Self {
        Self {
            rules,
            aggregator: Aggregator::new(bucketing),
            stats: ScanStats::default(),
        }
    }

    /// Parses, classifies and records one line. Malformed lines are counted
    /// and skipped.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        if line.trim().is_empty() {
            self.stats.blank = self.stats.blank.saturating_add(1);
            return LineOutcome::Blank;
        }
        self.stats.lines = self.stats.lines.saturating_add(1);

        let record = match parse_line(line) {
            Ok(record) => record,
            Err(err) => {
                debug!(error = %err, "Skipping malformed log line");
                self.stats.malformed = self.stats.malformed.saturating_add(1);
                return LineOutcome::Malformed;
            }
        };

        let Some(route) = self.rules.classify(&record) else {
            self.stats.unmatched = self.stats.unmatched.saturating_add(1);
            return LineOutcome::Unmatched;
        };

        self.aggregator.record(&record, route);
        self.stats.recorded = self.stats.recorded.saturating_add(1);
        LineOutcome::Recorded
    }

    /// Processes every line of one object's text.
    pub fn process_text(&mut self, text: &str) {
        self.stats.objects = self.stats.objects.saturating_add(1);
        for line in text.lines() {
            self.process_line(line);
        }
    }

    #[must_use]
    pub const fn stats(&self) -> ScanStats {
        self.stats
    }

    #[must_use]
    pub const fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    #[must_use]
    pub fn materialize(&self) -> Vec<MetricPoint> {
        self.aggregator.materialize()
    }
}
