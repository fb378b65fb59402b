//! Output handler traits and types
//!
//! This module defines the trait interface for report sinks and the error
//! type shared by output operations.

use crate::output::record::ProbeRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for probe record sinks
///
/// Records arrive one at a time, in probe order, and must be persisted before
/// the next path is fetched.
pub trait OutputHandler {
    /// Records the outcome of one probed path
    ///
    /// # Arguments
    ///
    /// * `record` - The probe record to persist
    fn record_probe(&mut self, record: &ProbeRecord) -> OutputResult<()>;

    /// Flushes anything still buffered
    ///
    /// Called exactly once when the run ends, whether or not the probe loop
    /// finished cleanly.
    fn finalize(&mut self) -> OutputResult<()>;
}
