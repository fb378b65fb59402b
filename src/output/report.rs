//! Plain text report writer
//!
//! The report file is opened once, in truncate mode, and each record is
//! written and flushed as soon as it is produced.

use crate::output::record::ProbeRecord;
use crate::output::traits::{OutputError, OutputHandler, OutputResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes probe records as blank-line separated text blocks
pub struct TextReport<W: Write> {
    writer: BufWriter<W>,
    records_written: usize,
}

impl TextReport<File> {
    /// Creates (or truncates) the report file at `path`
    ///
    /// # Returns
    ///
    /// * `Ok(TextReport)` - The file is open and empty
    /// * `Err(OutputError::Create)` - The file could not be opened for writing
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Opened report file {}", path.display());
        Ok(Self::new(file))
    }
}

impl<W: Write> TextReport<W> {
    /// Wraps any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            records_written: 0,
        }
    }

    /// Number of records written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> OutputHandler for TextReport<W> {
    fn record_probe(&mut self, record: &ProbeRecord) -> OutputResult<()> {
        write!(self.writer, "{}", record)?;
        self.writer.flush()?;
        self.records_written += 1;
        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        tracing::debug!("Report finalized with {} records", self.records_written);
        Ok(())
    }
}
