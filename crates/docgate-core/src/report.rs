//! Per-document results and their reduction to a run outcome.

use crate::reference::Reference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference none of whose candidates exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    /// Document containing the reference
    pub origin: String,
    /// Target as written, before resolution
    pub target: String,
    /// Fragment as written, may be empty
    pub fragment: String,
    /// First candidate that was tried
    pub primary_candidate: Option<String>,
}

impl BrokenLink {
    /// Record a failed reference and the first path it was resolved to.
    pub fn new(reference: &Reference, primary_candidate: Option<String>) -> Self {
        Self {
            origin: reference.origin().to_string(),
            target: reference.raw_target().to_string(),
            fragment: reference.fragment().to_string(),
            primary_candidate,
        }
    }
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Could not find link '{}'", self.origin, self.target)
    }
}

/// Outcome for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Every reference resolved
    Passed,
    /// Excluded by policy; not read
    Skipped,
    /// At least one reference is broken
    Failed { broken: Vec<BrokenLink> },
    /// Could not be read or parsed
    Error { message: String },
}

/// Result of checking a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub path: String,
    /// References extracted, external ones included
    pub references: usize,
    #[serde(flatten)]
    pub status: DocumentStatus,
}

impl DocumentReport {
    /// A document excluded from checking
    pub fn skipped(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            references: 0,
            status: DocumentStatus::Skipped,
        }
    }

    /// A document that could not be read or parsed
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            references: 0,
            status: DocumentStatus::Error {
                message: message.into(),
            },
        }
    }

    /// A checked document; passes iff `broken` is empty.
    pub fn checked(path: impl Into<String>, references: usize, broken: Vec<BrokenLink>) -> Self {
        let status = if broken.is_empty() {
            DocumentStatus::Passed
        } else {
            DocumentStatus::Failed { broken }
        };
        Self {
            path: path.into(),
            references,
            status,
        }
    }

    /// Skipped documents count as passing.
    pub fn passed(&self) -> bool {
        matches!(
            self.status,
            DocumentStatus::Passed | DocumentStatus::Skipped
        )
    }

    /// Broken links in this document, empty unless it failed.
    pub fn broken_links(&self) -> &[BrokenLink] {
        match &self.status {
            DocumentStatus::Failed { broken } => broken,
            _ => &[],
        }
    }
}

/// Summary counts over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub documents: usize,
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub errored: usize,
    pub references: usize,
    pub broken_links: usize,
}

/// Aggregate of every document in a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub passed: bool,
    pub summary: RunSummary,
    pub documents: Vec<DocumentReport>,
}

impl RunReport {
    /// Reduce document reports; passes iff every document passed.
    pub fn from_documents(mut documents: Vec<DocumentReport>) -> Self {
        documents.sort_by(|a, b| a.path.cmp(&b.path));

        let mut summary = RunSummary {
            documents: documents.len(),
            ..RunSummary::default()
        };

        for doc in &documents {
            summary.references += doc.references;
            match &doc.status {
                DocumentStatus::Passed => summary.passed += 1,
                DocumentStatus::Skipped => summary.skipped += 1,
                DocumentStatus::Failed { broken } => {
                    summary.failed += 1;
                    summary.broken_links += broken.len();
                }
                DocumentStatus::Error { .. } => summary.errored += 1,
            }
        }

        Self {
            passed: documents.iter().all(DocumentReport::passed),
            summary,
            documents,
        }
    }

    /// All broken links across documents, in path order
    pub fn broken_links(&self) -> impl Iterator<Item = &BrokenLink> {
        self.documents.iter().flat_map(|d| d.broken_links())
    }

    /// Documents that could not be read or parsed, with their error
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents.iter().filter_map(|d| match &d.status {
            DocumentStatus::Error { message } => Some((d.path.as_str(), message.as_str())),
            _ => None,
        })
    }

    /// Look up one document's report
    pub fn document(&self, path: &str) -> Option<&DocumentReport> {
        self.documents.iter().find(|d| d.path == path)
    }
}
