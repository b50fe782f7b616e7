//! Markdown/MDX reference extraction over the [`Node`] tree.

use crate::node::Node;
use crate::text_links::{links_in_html, links_in_text};

/// Every link and image target in a Markdown or MDX document.
///
/// Targets come back as written; order follows the document but carries no
/// meaning beyond diagnostics.
///
/// ```
/// use docgate_parser::extract_markdown;
///
/// let refs = extract_markdown("[Install](/start/install) ![](/images/a.png)");
/// assert_eq!(refs, vec!["/start/install", "/images/a.png"]);
/// ```
pub fn extract_markdown(source: &str) -> Vec<String> {
    let tree = Node::parse(source);
    let mut references = Vec::new();
    visit(&tree, false, &mut references);
    log::trace!("Extracted {} references", references.len());
    references
}

/// `in_link` suppresses the text heuristic for link text and alt text, whose
/// URLs would only repeat the destination already recorded.
fn visit(node: &Node, in_link: bool, out: &mut Vec<String>) {
    match node {
        Node::Container(children) => {
            for child in children {
                visit(child, in_link, out);
            }
        }
        Node::Text(text) => {
            if !in_link {
                out.extend(links_in_text(text));
            }
        }
        Node::Link { url, children } | Node::Image { url, children } => {
            out.push(url.clone());
            for child in children {
                visit(child, true, out);
            }
        }
        Node::Html(html) => out.extend(links_in_html(html)),
        Node::Code(_) => {}
    }
}
