//! Output module for probe reports and operator feedback
//!
//! This module handles:
//! - Rendering probe records as plain text blocks
//! - Writing the report file incrementally
//! - Tallying run statistics
//! - Printing `[INFO]` / `[ERROR]` console lines

pub mod console;
mod record;
mod report;
mod stats;
mod traits;

pub use record::{content_preview, ProbeOutcome, ProbeRecord};
pub use report::TextReport;
pub use stats::ProbeSummary;
pub use traits::{OutputError, OutputHandler, OutputResult};
