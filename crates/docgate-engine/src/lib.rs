//! # docgate engine
//!
//! File-set providers and the link validation engine.
//!
//! - [`store`]: the [`ContentStore`] trait plus a filesystem store backed by
//!   `walkdir` and `tokio::fs`, and an in-memory store for tests and embedding
//! - [`engine`]: [`LinkChecker`], which checks every document concurrently and
//!   reduces the results to a [`RunReport`](docgate_core::RunReport)
//!
//! ## Quick Start
//!
//! ```
//! use docgate_engine::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> docgate_core::Result<()> {
//! let store = MemoryContentStore::new()
//!     .with_file("docs/index.mdx", "Start with the [guide](./guide).")
//!     .with_file("docs/guide/index.md", "# Guide");
//!
//! let checker = LinkChecker::new(CheckerConfig::default(), store)?;
//! let report = checker.run().await?;
//! assert!(report.passed);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod store;

pub use engine::LinkChecker;
pub use store::{ContentStore, FsContentStore, MemoryContentStore};

/// Convenient prelude for common imports.
pub mod prelude {
    pub use crate::engine::LinkChecker;
    pub use crate::store::{ContentStore, FsContentStore, MemoryContentStore};
    pub use docgate_core::prelude::*;
}
