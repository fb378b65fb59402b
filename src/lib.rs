//! Robots-Recon: robots.txt disallow-path reconnaissance
//!
//! This crate fetches a site's robots.txt, extracts the paths listed under
//! `Disallow` directives and probes each of them, recording the HTTP status
//! and a short content preview into a plain text report.

pub mod config;
pub mod output;
pub mod probe;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Robots-Recon operations
///
/// Network failures are not represented here: they are values of
/// [`probe::FetchResult`] so that one failed path never aborts a run.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Please provide a valid URL starting with http:// or https://")]
    MissingScheme(String),

    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Cannot resolve '{path}' against {base}: {source}")]
    Resolve {
        base: String,
        path: String,
        source: ::url::ParseError,
    },
}

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use probe::{run_recon, FetchResult, ReconOutcome};
pub use robots::parse_disallowed_paths;
pub use crate::url::TargetSite;
