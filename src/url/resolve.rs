use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves a path from robots.txt against a base URL
///
/// Standard relative reference resolution applies: a path starting with `/`
/// replaces the base's path, a relative path is joined to the base's
/// directory, and a full URL replaces the base entirely.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use robots_recon::url::resolve_path;
///
/// let base = Url::parse("https://example.com/docs/index.html").unwrap();
/// assert_eq!(resolve_path(&base, "/admin").unwrap().as_str(), "https://example.com/admin");
/// assert_eq!(resolve_path(&base, "draft").unwrap().as_str(), "https://example.com/docs/draft");
/// ```
pub fn resolve_path(base: &Url, path: &str) -> UrlResult<Url> {
    base.join(path).map_err(|source| UrlError::Resolve {
        base: base.to_string(),
        path: path.to_string(),
        source,
    })
}
