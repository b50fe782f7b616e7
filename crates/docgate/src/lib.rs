//! # docgate
//!
//! Pre-publish link checker for Markdown, MDX and notebook documentation
//! trees. Every link and image target must resolve to a content document, a
//! static asset or an external URL.
//!
//! This crate re-exports the workspace crates and adds report rendering; the
//! `docgate` binary wires them to the command line.
//!
//! ```no_run
//! use docgate::prelude::*;
//! use docgate::{OutputFormat, ReportFormatter};
//!
//! # #[tokio::main]
//! # async fn main() -> docgate::Result<()> {
//! let config = CheckerConfig::load_or_default("docgate.yaml".as_ref())?;
//! let checker = LinkChecker::new(config, FsContentStore::new("."))?;
//! let report = checker.run().await?;
//! println!("{}", ReportFormatter::format(&report, OutputFormat::Human));
//! # Ok(())
//! # }
//! ```

pub mod output_formatter;

pub use docgate_core::*;
pub use docgate_engine::{ContentStore, FsContentStore, LinkChecker, MemoryContentStore};
pub use docgate_parser::{ContentKind, extract_references};
pub use output_formatter::{OutputFormat, ReportFormatter};

/// Convenient prelude for common imports.
pub mod prelude {
    pub use crate::output_formatter::{OutputFormat, ReportFormatter};
    pub use docgate_engine::prelude::*;
}
