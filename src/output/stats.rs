//! Run statistics
//!
//! Tallies probe outcomes so the operator gets a one-line summary at the end
//! of a run.

use crate::output::record::{ProbeOutcome, ProbeRecord};
use std::fmt;

/// Probe outcome counts for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeSummary {
    /// Paths that answered 200
    pub accessible: usize,

    /// Paths that answered with another status code
    pub restricted: usize,

    /// Paths whose request failed outright
    pub failed: usize,
}

impl ProbeSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one record
    pub fn record(&mut self, record: &ProbeRecord) {
        match record.outcome {
            ProbeOutcome::Accessible { .. } => self.accessible += 1,
            ProbeOutcome::Restricted { .. } => self.restricted += 1,
            ProbeOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Total number of paths probed
    pub fn total(&self) -> usize {
        self.accessible + self.restricted + self.failed
    }
}

impl fmt::Display for ProbeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Probed {} paths: {} accessible, {} restricted, {} failed",
            self.total(),
            self.accessible,
            self.restricted,
            self.failed
        )
    }
}
