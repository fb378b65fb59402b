//! Robots.txt handling module
//!
//! This module fetches a target's robots.txt and extracts the paths listed
//! under `Disallow` directives. Only `Disallow` is interpreted; `Allow`,
//! `Crawl-delay`, `Sitemap` and user-agent groups are ignored.

mod parser;

pub use parser::parse_disallowed_paths;

use crate::probe::{fetch_url, FetchError, FetchResult};
use crate::url::TargetSite;
use reqwest::Client;

/// Fetches robots.txt from the root of the target site
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `target` - The site whose robots.txt is requested
///
/// # Returns
///
/// The raw [`FetchResult`]; only `FetchResult::Success` carries a document.
pub async fn fetch_robots(client: &Client, target: &TargetSite) -> FetchResult {
    match target.robots_url() {
        Ok(url) => {
            tracing::debug!("Fetching robots.txt from {}", url);
            fetch_url(client, url.as_str()).await
        }
        Err(e) => FetchResult::NetworkError {
            error: FetchError::InvalidUrl(e.to_string()),
        },
    }
}
