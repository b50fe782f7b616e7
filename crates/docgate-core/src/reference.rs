//! The reference model: one link or image target found in a document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether `target` starts with a URI scheme (`https:`, `mailto:`, `tel:`...)
/// or is protocol-relative (`//cdn.example.com/x.js`).
///
/// A scheme is a letter followed by letters, digits, `+`, `-` or `.`, then
/// `:`. Anything else, including a `:` after a `/`, is a path.
pub fn has_url_scheme(target: &str) -> bool {
    if target.starts_with("//") {
        return true;
    }

    let Some((scheme, _)) = target.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// A single link or image occurrence.
///
/// Constructed once from the string as written in the source, then read-only.
/// `raw_target` and `fragment` partition that string at the first `#`.
///
/// ```
/// use docgate_core::Reference;
///
/// let reference = Reference::new("guide.md#install", "docs/index.mdx");
/// assert_eq!(reference.raw_target(), "guide.md");
/// assert_eq!(reference.fragment(), "#install");
/// assert!(!reference.is_external());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    raw_target: String,
    fragment: String,
    origin: String,
    is_external: bool,
}

impl Reference {
    /// Split `link` at its first `#` and remember the document it came from.
    pub fn new(link: impl AsRef<str>, origin: impl Into<String>) -> Self {
        let link = link.as_ref();
        let (raw_target, fragment) = match link.find('#') {
            Some(idx) => (&link[..idx], &link[idx..]),
            None => (link, ""),
        };
        let is_external = has_url_scheme(raw_target);

        Self {
            raw_target: raw_target.to_string(),
            fragment: fragment.to_string(),
            origin: origin.into(),
            is_external,
        }
    }

    /// Target before the fragment, as written.
    pub fn raw_target(&self) -> &str {
        &self.raw_target
    }

    /// Fragment including the leading `#`, or empty.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Path of the document containing this reference.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Whether the target is a URL rather than a path in the tree.
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// A bare fragment such as `#usage` points at the origin itself.
    pub fn is_same_document(&self) -> bool {
        self.raw_target.is_empty()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.raw_target, self.fragment)
    }
}
