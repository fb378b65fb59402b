//! Disallow directive extraction
//!
//! A deliberately narrow reading of robots.txt: every line of the form
//! `Disallow: <value>` contributes its trimmed value, in document order,
//! regardless of which user-agent group it sits in.

use regex::Regex;
use std::sync::OnceLock;

fn disallow_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*Disallow:\s*(.*)$").expect("disallow pattern is valid")
    })
}

/// Extracts disallowed paths from robots.txt content
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. Matching is case-insensitive
/// and tolerates leading whitespace. Empty
/// values (`Disallow:` on its own, which allows everything) are skipped.
/// Duplicates are kept.
///
/// # Arguments
///
/// * `content` - The raw robots.txt document
///
/// # Returns
///
/// The disallowed paths in the order they appear. An empty vector means the
/// document places no restrictions.
///
/// # Examples
///
/// ```
/// use robots_recon::robots::parse_disallowed_paths;
///
/// let paths = parse_disallowed_paths("Disallow: /admin\nDisallow:\nDISALLOW: /secret \n");
/// assert_eq!(paths, vec!["/admin", "/secret"]);
/// ```
pub fn parse_disallowed_paths(content: &str) -> Vec<String> {
    let pattern = disallow_pattern();

    content
        .split(&['\n', '\r'][..])
        .filter_map(|line| pattern.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|value| value.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
