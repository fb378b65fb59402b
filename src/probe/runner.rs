//! Probe runner
//!
//! Walks the disallowed paths in order, fetches each one and hands the
//! resulting record to an [`OutputHandler`] before moving on to the next.

use crate::output::{
    console, OutputHandler, OutputResult, ProbeOutcome, ProbeRecord, ProbeSummary,
};
use crate::probe::fetcher::{fetch_url, FetchResult};
use crate::url::TargetSite;
use reqwest::Client;
use std::io::{self, Write};

/// Sequential prober for one target site
pub struct ProbeRunner<'a> {
    client: &'a Client,
    target: &'a TargetSite,
    preview_length: usize,
}

impl<'a> ProbeRunner<'a> {
    /// Creates a runner
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client shared with the robots.txt fetch
    /// * `target` - The site paths are resolved against
    /// * `preview_length` - Characters kept from each 200 response body
    pub fn new(client: &'a Client, target: &'a TargetSite, preview_length: usize) -> Self {
        Self {
            client,
            target,
            preview_length,
        }
    }

    /// Resolves and fetches one path
    ///
    /// Never fails: an unresolvable path or a failed request becomes a
    /// [`ProbeOutcome::Failed`] record.
    pub async fn probe(&self, path: &str) -> ProbeRecord {
        let url = match self.target.resolve(path) {
            Ok(url) => url.to_string(),
            Err(e) => return ProbeRecord::failed(path, e),
        };

        match fetch_url(self.client, &url).await {
            FetchResult::Success { status_code, body } => {
                ProbeRecord::accessible(url, status_code, &body, self.preview_length)
            }
            FetchResult::HttpError { status_code } => ProbeRecord::restricted(url, status_code),
            FetchResult::NetworkError { error } => ProbeRecord::failed(url, error),
        }
    }

    /// Probes every path in order, writing each record as it completes
    ///
    /// A failed path is reported and recorded, then the next path is probed.
    /// Only a write failure on `output` stops the loop. The caller owns
    /// `output` and is responsible for finalizing it.
    ///
    /// # Returns
    ///
    /// * `Ok(ProbeSummary)` - Every path was probed and recorded
    /// * `Err(OutputError)` - A record could not be written
    pub async fn run<H>(&self, paths: &[String], output: &mut H) -> OutputResult<ProbeSummary>
    where
        H: OutputHandler + ?Sized,
    {
        self.run_reporting(paths, output, &mut io::stdout(), &mut io::stderr())
            .await
    }

    /// Same as [`run`](Self::run), with progress lines sent to `info_out`
    /// (`[INFO]`, one per answered path) and `error_out` (`[ERROR]`, one per
    /// failed path)
    pub async fn run_reporting<H, O, E>(
        &self,
        paths: &[String],
        output: &mut H,
        info_out: &mut O,
        error_out: &mut E,
    ) -> OutputResult<ProbeSummary>
    where
        H: OutputHandler + ?Sized,
        O: Write,
        E: Write,
    {
        let mut summary = ProbeSummary::new();

        for (index, path) in paths.iter().enumerate() {
            tracing::debug!("Probing path {}/{}: {}", index + 1, paths.len(), path);

            let record = self.probe(path).await;
            report_progress(&record, info_out, error_out)?;

            output.record_probe(&record)?;
            summary.record(&record);
        }

        Ok(summary)
    }
}

fn report_progress<O: Write, E: Write>(
    record: &ProbeRecord,
    info_out: &mut O,
    error_out: &mut E,
) -> io::Result<()> {
    match &record.outcome {
        ProbeOutcome::Accessible { status_code, .. }
        | ProbeOutcome::Restricted { status_code } => console::write_info(
            info_out,
            format!("Fetching {} - Status: {}", record.url, status_code),
        ),
        ProbeOutcome::Failed { error } => console::write_error(
            error_out,
            format!("Failed to fetch {}. Error: {}", record.url, error),
        ),
    }
}
