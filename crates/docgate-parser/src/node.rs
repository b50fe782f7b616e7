//! Document tree built from the pulldown-cmark event stream.
//!
//! pulldown-cmark produces a flat stream of start/end events. Extraction wants
//! a tree with a small, closed set of node kinds, so the stream is folded into
//! [`Node`] here and everything the extractor does not care about collapses
//! into [`Node::Container`].

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag};
use std::ops::Range;

/// A node in a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Structural element (paragraph, list, heading, emphasis, table...)
    Container(Vec<Node>),
    /// Literal text; escaped punctuation keeps its backslash (`\[`)
    Text(String),
    /// Hyperlink with its destination and link text
    Link { url: String, children: Vec<Node> },
    /// Image with its source and alt text
    Image { url: String, children: Vec<Node> },
    /// Raw HTML or JSX; a whole HTML block is one node
    Html(String),
    /// Code blocks, inline code, math and frontmatter; never scanned
    Code(String),
}

impl Node {
    /// Parse Markdown/MDX source into a tree. Never fails.
    pub fn parse(source: &str) -> Node {
        TreeBuilder::new(source).build()
    }

    /// Children of structural nodes; leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(children)
            | Node::Link { children, .. }
            | Node::Image { children, .. } => children,
            Node::Text(_) | Node::Html(_) | Node::Code(_) => &[],
        }
    }
}

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_FOOTNOTES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    opts.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    opts.insert(Options::ENABLE_GFM);
    opts
}

enum FrameKind {
    Container,
    Link(String),
    Image(String),
    /// Content is kept as one opaque string
    Verbatim,
    /// HTML block lines, joined so multi-line comments and JSX stay whole
    HtmlBlock,
}

struct Frame {
    kind: FrameKind,
    children: Vec<Node>,
    verbatim: String,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            verbatim: String::new(),
        }
    }

    fn into_node(self) -> Node {
        match self.kind {
            FrameKind::Container => Node::Container(self.children),
            FrameKind::Link(url) => Node::Link {
                url,
                children: self.children,
            },
            FrameKind::Image(url) => Node::Image {
                url,
                children: self.children,
            },
            FrameKind::Verbatim => Node::Code(self.verbatim),
            FrameKind::HtmlBlock => Node::Html(self.verbatim),
        }
    }
}

struct TreeBuilder<'a> {
    source: &'a str,
    stack: Vec<Frame>,
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            stack: Vec::new(),
        }
    }

    fn build(mut self) -> Node {
        self.stack.push(Frame::new(FrameKind::Container));

        for (event, range) in Parser::new_ext(self.source, parser_options()).into_offset_iter() {
            self.handle(event, range);
        }

        // Events are balanced, but fold anything left open rather than lose it
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack
            .pop()
            .map(Frame::into_node)
            .unwrap_or(Node::Container(Vec::new()))
    }

    fn handle(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                let kind = match tag {
                    Tag::Link {
                        link_type,
                        dest_url,
                        ..
                    } => FrameKind::Link(link_destination(link_type, &dest_url)),
                    Tag::Image { dest_url, .. } => FrameKind::Image(dest_url.to_string()),
                    Tag::CodeBlock(_) | Tag::MetadataBlock(_) => FrameKind::Verbatim,
                    Tag::HtmlBlock => FrameKind::HtmlBlock,
                    _ => FrameKind::Container,
                };
                self.stack.push(Frame::new(kind));
            }
            Event::End(_) => self.close(),
            Event::Text(text) => {
                let in_verbatim = self
                    .stack
                    .last()
                    .is_some_and(|frame| matches!(frame.kind, FrameKind::Verbatim));
                if in_verbatim {
                    self.push_verbatim(&text);
                } else if self.is_escape(&text, &range) {
                    self.push_text(&format!("\\{}", text));
                } else {
                    self.push_text(&text);
                }
            }
            Event::Code(code) | Event::InlineMath(code) | Event::DisplayMath(code) => {
                self.push(Node::Code(code.to_string()))
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let in_block = self
                    .stack
                    .last()
                    .is_some_and(|frame| matches!(frame.kind, FrameKind::HtmlBlock));
                if in_block {
                    self.push_verbatim(&html);
                } else {
                    self.push(Node::Html(html.to_string()));
                }
            }
            Event::SoftBreak | Event::HardBreak => self.push_text("\n"),
            Event::FootnoteReference(_)
            | Event::Rule
            | Event::TaskListMarker(_) => {}
        }
    }

    /// pulldown-cmark drops the backslash of `\[` and starts a new text
    /// event at the escaped character.
    fn is_escape(&self, text: &str, range: &Range<usize>) -> bool {
        text.starts_with(|c: char| c.is_ascii_punctuation())
            && self
                .source
                .get(..range.start)
                .is_some_and(|before| before.ends_with('\\'))
    }

    /// Adjacent text events merge into one node; line breaks become `\n`.
    fn push_text(&mut self, text: &str) {
        if let Some(frame) = self.stack.last_mut() {
            if let Some(Node::Text(last)) = frame.children.last_mut() {
                last.push_str(text);
            } else {
                frame.children.push(Node::Text(text.to_string()));
            }
        }
    }

    fn push_verbatim(&mut self, text: &str) {
        if let Some(frame) = self.stack.last_mut() {
            frame.verbatim.push_str(text);
        }
    }

    fn push(&mut self, node: Node) {
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(node);
        }
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(frame) = self.stack.pop() {
            let node = frame.into_node();
            self.push(node);
        }
    }
}

/// Email autolinks (`<docs@example.com>`) come through without a scheme.
fn link_destination(link_type: LinkType, dest_url: &str) -> String {
    match link_type {
        LinkType::Email if !dest_url.starts_with("mailto:") => format!("mailto:{}", dest_url),
        _ => dest_url.to_string(),
    }
}
