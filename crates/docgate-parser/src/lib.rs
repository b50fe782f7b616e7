//! # docgate parser
//!
//! Reference extraction for documentation sources, built on `pulldown-cmark`.
//!
//! ## Architecture
//!
//! - [`node`] folds the pulldown-cmark event stream into a closed [`Node`]
//!   tree (containers, text, links, images, raw HTML, code)
//! - [`markdown`] walks that tree and matches every node kind exhaustively
//! - [`text_links`] recovers links that structural parsing cannot see: bare
//!   URLs in text, and `href`/`src` attributes or Markdown inside MDX/HTML
//! - [`notebook`] pulls the Markdown cells out of a Jupyter notebook and
//!   delegates to the Markdown extractor
//!
//! ## Quick Start
//!
//! ```
//! use docgate_parser::extract_references;
//!
//! let refs = extract_references("docs/intro.mdx", "See [setup](./setup).").unwrap();
//! assert_eq!(refs, vec!["./setup"]);
//!
//! let notebook = r#"{"cells": [{"cell_type": "markdown", "source": "[a](/a)"}]}"#;
//! let refs = extract_references("docs/tour.ipynb", notebook).unwrap();
//! assert_eq!(refs, vec!["/a"]);
//! ```

pub mod markdown;
pub mod node;
pub mod notebook;
pub mod text_links;

pub use markdown::extract_markdown;
pub use node::Node;
pub use notebook::{extract_notebook, markdown_from_notebook};

use docgate_core::Result;
use std::path::Path;

/// Source format of a content document, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `.md`, `.mdx` and anything else not recognized
    Markdown,
    /// `.ipynb`
    Notebook,
}

impl ContentKind {
    /// Pick the extractor for a document path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("ipynb") => ContentKind::Notebook,
            _ => ContentKind::Markdown,
        }
    }
}

/// Raw reference strings in `source`, using the extractor for `path`.
///
/// Fails only when the source is malformed for its format.
pub fn extract_references(path: impl AsRef<Path>, source: &str) -> Result<Vec<String>> {
    match ContentKind::from_path(path) {
        ContentKind::Markdown => Ok(extract_markdown(source)),
        ContentKind::Notebook => extract_notebook(source),
    }
}

/// Convenient prelude for common imports.
pub mod prelude {
    pub use crate::{
        ContentKind, Node, extract_markdown, extract_notebook, extract_references,
        markdown_from_notebook,
    };
}
