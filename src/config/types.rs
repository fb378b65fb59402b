use serde::Deserialize;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default number of characters kept in a content preview
pub const DEFAULT_PREVIEW_LENGTH: usize = 200;

/// Default number of redirect hops followed per request
pub const DEFAULT_MAX_REDIRECTS: usize = 30;

/// Main configuration structure for Robots-Recon
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Request and record settings shared by the robots.txt fetch and every probe
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Timeout applied to each request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Number of characters of a 200 response body kept in the report
    #[serde(rename = "preview-length")]
    pub preview_length: usize,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Maximum redirect hops followed before the request fails
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            preview_length: DEFAULT_PREVIEW_LENGTH,
            user_agent: default_user_agent(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
