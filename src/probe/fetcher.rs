//! HTTP fetcher implementation
//!
//! Every request the tool makes goes through [`fetch_url`]: a single GET with
//! the configured timeout, no retries. Network failures come back as
//! [`FetchResult::NetworkError`] values instead of errors so callers can keep
//! going after a failed path.

use crate::config::ProbeConfig;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered 200 OK
    Success {
        /// HTTP status code (always 200)
        status_code: u16,
        /// Response body decoded as text
        body: String,
    },

    /// The server answered with any other status code
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// The request failed before a status code was received
    NetworkError {
        /// What went wrong
        error: FetchError,
    },
}

impl FetchResult {
    /// Returns the status code, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Success { status_code, .. } | Self::HttpError { status_code } => {
                Some(*status_code)
            }
            Self::NetworkError { .. } => None,
        }
    }
}

/// Cause of a failed request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Too many redirects: {0}")]
    Redirect(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let message = e.to_string();
        if e.is_timeout() {
            Self::Timeout(message)
        } else if e.is_connect() {
            Self::Connect(message)
        } else if e.is_builder() {
            Self::InvalidUrl(message)
        } else if e.is_redirect() {
            Self::Redirect(message)
        } else if e.is_body() || e.is_decode() {
            Self::Body(message)
        } else {
            Self::Request(message)
        }
    }
}

/// Builds the HTTP client shared by every request of a run
///
/// # Arguments
///
/// * `config` - The probe configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use robots_recon::config::ProbeConfig;
/// use robots_recon::probe::build_http_client;
///
/// let client = build_http_client(&ProbeConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ProbeConfig) -> Result<Client, reqwest::Error> {
    // Zero hops means a 3xx is reported as-is rather than treated as an error
    let redirect = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    tracing::debug!(
        "Building HTTP client (user agent: {}, timeout: {}s, redirects: {})",
        config.user_agent,
        config.timeout_secs,
        config.max_redirects
    );

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs a single GET request
///
/// | Outcome | Result |
/// |---------|--------|
/// | HTTP 200 | `Success` with the body |
/// | Any other status | `HttpError` with the code |
/// | Timeout, DNS, refused connection, bad URL | `NetworkError` |
/// | 200 whose body cannot be read | `NetworkError` |
///
/// No retry is attempted; one failure is final for this call.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Request to {} failed: {}", url, e);
            return FetchResult::NetworkError { error: e.into() };
        }
    };

    let status = response.status();
    tracing::debug!("{} answered {}", url, status);

    if status != StatusCode::OK {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            status_code: status.as_u16(),
            body,
        },
        Err(e) => FetchResult::NetworkError {
            error: FetchError::Body(e.to_string()),
        },
    }
}
