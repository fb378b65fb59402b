//! Probe records and their plain text rendering

use std::fmt;

/// What happened when a disallowed path was probed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 200 OK, with the flattened start of the body
    Accessible { status_code: u16, preview: String },

    /// Any other status code
    Restricted { status_code: u16 },

    /// No status code was received
    Failed { error: String },
}

/// The result of probing one disallowed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRecord {
    /// The resolved URL (or the raw path when it could not be resolved)
    pub url: String,
    pub outcome: ProbeOutcome,
}

impl ProbeRecord {
    /// Creates a record for a 200 response, building the preview from `body`
    pub fn accessible(
        url: impl Into<String>,
        status_code: u16,
        body: &str,
        max_chars: usize,
    ) -> Self {
        Self {
            url: url.into(),
            outcome: ProbeOutcome::Accessible {
                status_code,
                preview: content_preview(body, max_chars),
            },
        }
    }

    /// Creates a record for a non-200 response
    pub fn restricted(url: impl Into<String>, status_code: u16) -> Self {
        Self {
            url: url.into(),
            outcome: ProbeOutcome::Restricted { status_code },
        }
    }

    /// Creates a record for a request that failed outright
    pub fn failed(url: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            url: url.into(),
            outcome: ProbeOutcome::Failed {
                error: error.to_string(),
            },
        }
    }

    /// Returns the status code, if the server answered
    pub fn status_code(&self) -> Option<u16> {
        match &self.outcome {
            ProbeOutcome::Accessible { status_code, .. }
            | ProbeOutcome::Restricted { status_code } => Some(*status_code),
            ProbeOutcome::Failed { .. } => None,
        }
    }
}

/// Renders the report block for this record, trailing blank line included
impl fmt::Display for ProbeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ProbeOutcome::Accessible {
                status_code,
                preview,
            } => write!(
                f,
                "URL: {}\nStatus Code: {}\nContent Preview: {}\n\n",
                self.url, status_code, preview
            ),
            ProbeOutcome::Restricted { status_code } => write!(
                f,
                "URL: {}\nStatus Code: {}\nContent not accessible or restricted.\n\n",
                self.url, status_code
            ),
            ProbeOutcome::Failed { error } => {
                write!(f, "Error fetching {}: {}\n\n", self.url, error)
            }
        }
    }
}

/// Builds a content preview: the first `max_chars` characters of `body`
/// with each `\n` replaced by a space
///
/// Counting is by `char`, so multi-byte text is never split.
///
/// # Examples
///
/// ```
/// use robots_recon::output::content_preview;
///
/// assert_eq!(content_preview("line one\nline two", 200), "line one line two");
/// assert_eq!(content_preview("abcdef", 3), "abc");
/// ```
pub fn content_preview(body: &str, max_chars: usize) -> String {
    body.chars()
        .take(max_chars)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}
