//! # docgate core
//!
//! Reference model, routing configuration, path resolution and report types
//! shared by every other docgate crate.
//!
//! ## Core Modules
//!
//! - [`reference`] - One link or image target plus the document it came from
//! - [`resolve`] - Candidate path expansion and the validity check
//! - [`config`] - Routing conventions and checker policy lists
//! - [`existing`] - The set of paths that count as existing
//! - [`report`] - Per-document and whole-run results
//! - [`paths`] - Lexical `/`-separated path helpers
//! - [`error`] - Error type and Result alias
//!
//! ## Usage
//!
//! ```
//! use docgate_core::prelude::*;
//!
//! let routing = RoutingConfig::default();
//! let existing = ExistingPaths::from_iter(["docs/guide/index.mdx"]);
//!
//! let reference = Reference::new("../guide", "docs/api/intro.mdx");
//! assert!(check(&reference, &routing, &existing));
//!
//! let missing = Reference::new("/missing", "docs/a.mdx");
//! assert!(!check(&missing, &routing, &existing));
//! ```

pub mod config;
pub mod error;
pub mod existing;
pub mod paths;
pub mod reference;
pub mod report;
pub mod resolve;

pub use config::{CheckerConfig, CheckerConfigBuilder, DEFAULT_CONFIG_FILE, RoutingConfig};
pub use error::{Error, Result};
pub use existing::ExistingPaths;
pub use reference::Reference;
pub use report::{BrokenLink, DocumentReport, DocumentStatus, RunReport, RunSummary};
pub use resolve::{check, resolve};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{CheckerConfig, RoutingConfig};
    pub use crate::error::{Error, Result};
    pub use crate::existing::ExistingPaths;
    pub use crate::reference::Reference;
    pub use crate::report::{BrokenLink, DocumentReport, DocumentStatus, RunReport};
    pub use crate::resolve::{check, resolve};
}
