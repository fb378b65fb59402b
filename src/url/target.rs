use crate::url::resolve::resolve_path;
use crate::{UrlError, UrlResult};
use std::fmt;
use url::Url;

/// The validated absolute base URL a run is aimed at
///
/// Only `http://` and `https://` inputs are accepted. Once constructed the
/// target is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSite {
    url: Url,
}

impl TargetSite {
    /// Validates operator input and builds a target site
    ///
    /// Surrounding whitespace is ignored. The scheme check is performed on
    /// the literal prefix before any parsing.
    ///
    /// # Examples
    ///
    /// ```
    /// use robots_recon::url::TargetSite;
    ///
    /// let target = TargetSite::parse("https://example.com").unwrap();
    /// assert_eq!(target.robots_url().unwrap().as_str(), "https://example.com/robots.txt");
    ///
    /// assert!(TargetSite::parse("example.com").is_err());
    /// ```
    pub fn parse(input: &str) -> UrlResult<Self> {
        let input = input.trim();

        if !input.starts_with("http://") && !input.starts_with("https://") {
            return Err(UrlError::MissingScheme(input.to_string()));
        }

        let url = Url::parse(input).map_err(|source| UrlError::Parse {
            url: input.to_string(),
            source,
        })?;

        Ok(Self { url })
    }

    /// Returns the site's robots.txt location (always at the host root)
    pub fn robots_url(&self) -> UrlResult<Url> {
        resolve_path(&self.url, "/robots.txt")
    }

    /// Resolves a disallowed path to the absolute URL that will be probed
    pub fn resolve(&self, path: &str) -> UrlResult<Url> {
        resolve_path(&self.url, path)
    }
}

impl fmt::Display for TargetSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
