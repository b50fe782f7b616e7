//! Link heuristics for literal text and raw HTML.
//!
//! Structural parsing misses two cases that matter in MDX corpora: URLs
//! written as plain text, and Markdown that CommonMark folds into an HTML
//! block because it sits inside a JSX element. Both are recovered here.

use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

/// Inline Markdown link or image syntax: `[text](dest "title")`, `![alt](<dest>)`.
/// Escaped brackets inside the text (`\]`) do not close it.
static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"!?\[(?:[^\[\]\\]|\\.)*\]\(\s*(?:<(?P<angle>[^>]*)>|(?P<url>[^()\s]+))(?:\s+"[^"]*")?\s*\)"#,
    )
    .unwrap()
});

/// HTML comment; an unterminated one runs to the end of the string
static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|\z)").unwrap());

/// Bare `http(s)://` URL
static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'`()\[\]{}]+"#).unwrap());

/// `href`/`src` attribute in HTML or JSX: `"..."`, `'...'` or `{"..."}`
static LINK_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\b(?:href|src)\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|\{\s*["'`](?P<jsx>[^"'`]*)["'`]\s*\})"#,
    )
    .unwrap()
});

/// Trailing characters that end a sentence rather than a URL.
const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

#[inline]
fn has_link_syntax(text: &str) -> bool {
    text.contains("](")
}

#[inline]
fn has_url(text: &str) -> bool {
    text.contains("://")
}

#[inline]
fn has_attribute(text: &str) -> bool {
    text.contains("href") || text.contains("src")
}

/// Links collected from one string; overlapping matches are claimed once.
#[derive(Default)]
struct Hits {
    claimed: Vec<Range<usize>>,
    links: Vec<String>,
}

impl Hits {
    fn claim(&mut self, span: Range<usize>, link: &str) {
        if link.is_empty() {
            return;
        }
        if self
            .claimed
            .iter()
            .any(|c| c.start < span.end && span.start < c.end)
        {
            return;
        }
        self.claimed.push(span);
        self.links.push(link.to_string());
    }

    fn markdown_links(&mut self, text: &str) {
        if !has_link_syntax(text) {
            return;
        }
        for caps in MARKDOWN_LINK.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if text[..whole.start()].ends_with('\\') {
                continue;
            }
            let dest = caps
                .name("angle")
                .or_else(|| caps.name("url"))
                .map(|m| m.as_str().trim())
                .unwrap_or("");
            self.claim(whole.range(), dest);
        }
    }

    fn bare_urls(&mut self, text: &str) {
        if !has_url(text) {
            return;
        }
        for m in BARE_URL.find_iter(text) {
            let url = m.as_str().trim_end_matches(URL_TRAILING_PUNCTUATION);
            self.claim(m.start()..m.start() + url.len(), url);
        }
    }

    fn attributes(&mut self, html: &str) {
        if !has_attribute(html) {
            return;
        }
        for caps in LINK_ATTRIBUTE.captures_iter(html) {
            let Some(whole) = caps.get(0) else { continue };
            let value = caps
                .name("dq")
                .or_else(|| caps.name("sq"))
                .or_else(|| caps.name("jsx"))
                .map(|m| m.as_str().trim())
                .unwrap_or("");
            self.claim(whole.range(), value);
        }
    }
}

/// Links found in literal text: Markdown link syntax first, then bare URLs.
///
/// ```
/// use docgate_parser::text_links::links_in_text;
///
/// let links = links_in_text("raw [setup](/start/setup) see https://example.com.");
/// assert_eq!(links, vec!["/start/setup", "https://example.com"]);
/// ```
pub fn links_in_text(text: &str) -> Vec<String> {
    let mut hits = Hits::default();
    hits.markdown_links(text);
    hits.bare_urls(text);
    hits.links
}

/// `html` with every comment blanked out.
fn strip_comments(html: &str) -> Cow<'_, str> {
    if html.contains("<!--") {
        HTML_COMMENT.replace_all(html, " ")
    } else {
        Cow::Borrowed(html)
    }
}

/// Links found in raw HTML/JSX: `href`/`src` attributes, then the text rules.
/// Comments are never scanned.
pub fn links_in_html(html: &str) -> Vec<String> {
    let html = strip_comments(html);
    let html = html.as_ref();
    let mut hits = Hits::default();
    hits.attributes(html);
    hits.markdown_links(html);
    hits.bare_urls(html);
    hits.links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_no_links() {
        assert!(links_in_text("Nothing to see here.").is_empty());
    }

    #[test]
    fn test_bare_url_trailing_punctuation() {
        assert_eq!(
            links_in_text("Visit https://qiskit.org/docs, or http://example.com/a?b=1."),
            vec!["https://qiskit.org/docs", "http://example.com/a?b=1"]
        );
    }

    #[test]
    fn test_markdown_syntax_in_text() {
        assert_eq!(
            links_in_text(r#"[a](/x "title") and ![b](<my file.png>)"#),
            vec!["/x", "my file.png"]
        );
    }

    #[test]
    fn test_url_inside_markdown_link_claimed_once() {
        assert_eq!(
            links_in_text("[site](https://example.com)"),
            vec!["https://example.com"]
        );
    }

    #[test]
    fn test_html_attributes() {
        let html = r#"<a href="/build/setup">x</a><img src='/images/a.png' /><Card href={"/run"} />"#;
        assert_eq!(
            links_in_html(html),
            vec!["/build/setup", "/images/a.png", "/run"]
        );
    }

    #[test]
    fn test_html_attribute_claims_its_url() {
        assert_eq!(
            links_in_html(r#"<a href="https://example.com">https://example.com</a>"#),
            vec!["https://example.com", "https://example.com"]
        );
        assert_eq!(
            links_in_html(r#"<a href="https://example.com">docs</a>"#),
            vec!["https://example.com"]
        );
    }

    #[test]
    fn test_markdown_inside_jsx_block() {
        let html = "<Admonition type=\"note\">\nSee [the guide](../guide).\n</Admonition>";
        assert_eq!(links_in_html(html), vec!["../guide"]);
    }

    #[test]
    fn test_escaped_link_syntax_is_text() {
        assert!(links_in_text(r"Write \[label\](target) to make a link.").is_empty());
        assert!(links_in_text(r"Write \[label](target).").is_empty());
        assert_eq!(links_in_text(r"[a \] b](/real)"), vec!["/real"]);
    }

    #[test]
    fn test_html_comments_skipped() {
        let html = "<!-- old: [legacy](/removed-page) <a href=\"/gone\">x</a> -->\n<a href=\"/kept\">y</a>";
        assert_eq!(links_in_html(html), vec!["/kept"]);
        assert!(links_in_html("<!-- unterminated [x](/x)").is_empty());
    }

    #[test]
    fn test_empty_attribute_ignored() {
        assert!(links_in_html(r#"<a href="">x</a>"#).is_empty());
    }
}
