//! Probe module: fetching and the end-to-end reconnaissance pipeline
//!
//! This module contains:
//! - The HTTP fetcher used for robots.txt and every probe
//! - The sequential probe runner
//! - [`run_recon`], which chains fetch → parse → probe

mod fetcher;
mod runner;

pub use fetcher::{build_http_client, fetch_url, FetchError, FetchResult};
pub use runner::ProbeRunner;

use crate::config::Config;
use crate::output::{console, OutputHandler, ProbeSummary, TextReport};
use crate::robots::{fetch_robots, parse_disallowed_paths};
use crate::url::TargetSite;
use crate::ReconError;
use std::path::PathBuf;
use std::time::Instant;

/// How a reconnaissance run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconOutcome {
    /// robots.txt could not be fetched (non-200 or request failure)
    RobotsUnavailable,

    /// robots.txt was fetched but lists no disallowed paths
    NoDisallowedPaths,

    /// Dry run: the disallowed paths that would have been probed
    Listed(Vec<String>),

    /// No output file was given, so nothing was probed
    Aborted,

    /// Every path was probed and recorded
    Completed {
        /// Where the report was written
        output: PathBuf,
        /// Outcome counts
        summary: ProbeSummary,
    },
}

/// Runs a complete reconnaissance pass against `target`
///
/// 1. Fetches `<target>/robots.txt`
/// 2. Extracts the disallowed paths
/// 3. Asks `choose_output` for the report location (only if paths were found)
/// 4. Probes each path in order, writing one record per path
///
/// Network failures are reported on the console and end the run (robots.txt)
/// or are recorded and skipped (individual paths). The report file is
/// finalized on every exit path once it has been opened.
///
/// # Arguments
///
/// * `config` - Request and preview settings
/// * `target` - The validated site to inspect
/// * `dry_run` - Stop after listing the disallowed paths
/// * `choose_output` - Supplies the report path; `Ok(None)` aborts the run
///
/// # Returns
///
/// * `Ok(ReconOutcome)` - The run reached a terminal state
/// * `Err(ReconError)` - A local fault (HTTP client setup, report I/O)
pub async fn run_recon<F>(
    config: &Config,
    target: &TargetSite,
    dry_run: bool,
    choose_output: F,
) -> Result<ReconOutcome, ReconError>
where
    F: FnOnce() -> std::io::Result<Option<PathBuf>>,
{
    let started = Instant::now();
    let client = build_http_client(&config.probe)?;

    let robots = match fetch_robots(&client, target).await {
        FetchResult::Success { body, .. } => {
            console::info(format!("Successfully retrieved robots.txt from {}", target));
            body
        }
        FetchResult::HttpError { status_code } => {
            console::error(format!(
                "Failed to retrieve robots.txt. Status code: {}",
                status_code
            ));
            return Ok(ReconOutcome::RobotsUnavailable);
        }
        FetchResult::NetworkError { error } => {
            console::error(format!("Failed to retrieve robots.txt: {}", error));
            return Ok(ReconOutcome::RobotsUnavailable);
        }
    };

    let paths = parse_disallowed_paths(&robots);
    if paths.is_empty() {
        console::info("No disallowed paths found in robots.txt.");
        return Ok(ReconOutcome::NoDisallowedPaths);
    }

    console::info(format!("Disallowed paths found: {:?}", paths));

    if dry_run {
        return Ok(ReconOutcome::Listed(paths));
    }

    let output = match choose_output()? {
        Some(path) => path,
        None => {
            console::error("No output file name given; nothing was probed.");
            return Ok(ReconOutcome::Aborted);
        }
    };

    let mut report = TextReport::create(&output)?;
    let runner = ProbeRunner::new(&client, target, config.probe.preview_length);

    // Finalize before inspecting the loop result so the file is flushed either way
    let probed = runner.run(&paths, &mut report).await;
    let finalized = report.finalize();
    let summary = probed?;
    finalized?;

    console::info(format!("Results saved to {}", output.display()));
    tracing::info!(
        "Run against {} finished in {:.2?}",
        target,
        started.elapsed()
    );

    Ok(ReconOutcome::Completed { output, summary })
}
