//! Link targets relayed to the host.

use std::fmt;

use url::Url;

/// A link the user activated in an [`HtmlTextView`](super::HtmlTextView).
///
/// `href` is the attribute value exactly as written. `url` is set when the
/// value is an absolute URL or joins onto the view's base URL; relative
/// references with no base are still delivered, unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    /// Raw `href` value (empty when the attribute is missing).
    pub href: String,
    /// Resolved absolute URL, if any.
    pub url: Option<Url>,
}

impl LinkTarget {
    /// Create a link target.
    pub fn new(href: impl Into<String>, url: Option<Url>) -> Self {
        Self {
            href: href.into(),
            url,
        }
    }

    /// Whether the target resolved to an absolute URL.
    pub fn is_resolved(&self) -> bool {
        self.url.is_some()
    }

    /// The resolved URL, or the raw `href` when unresolved.
    pub fn as_str(&self) -> &str {
        self.url.as_ref().map_or(&self.href, Url::as_str)
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
