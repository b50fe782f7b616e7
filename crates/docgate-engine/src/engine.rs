//! The link validation engine.
//!
//! One run: enumerate documents and assets, build the existing-paths set,
//! then check every document concurrently and reduce to a [`RunReport`].
//! Document failures are captured in their report; only failing to enumerate
//! the file set aborts a run.

use crate::store::ContentStore;
use docgate_core::prelude::*;
use docgate_parser::extract_references;
use futures::future::join_all;
use tracing::instrument;

/// Checks every content document a store provides.
pub struct LinkChecker<S> {
    config: CheckerConfig,
    store: S,
}

impl<S: ContentStore> LinkChecker<S> {
    /// Create a checker; fails on invalid configuration.
    pub fn new(mut config: CheckerConfig, store: S) -> Result<Self> {
        config.validate()?;
        config.normalize_paths();
        Ok(Self { config, store })
    }

    /// Active configuration
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Content paths, asset paths and synthetic paths, unioned.
    pub async fn existing_paths(&self) -> Result<(Vec<String>, ExistingPaths)> {
        let content = self.store.content_paths(&self.config).await?;
        let assets = self.store.asset_paths(&self.config).await?;
        let existing =
            ExistingPaths::from_sources(&content, &assets, &self.config.synthetic_paths);
        Ok((content, existing))
    }

    /// Check every document. Always processes all of them before returning.
    #[instrument(skip(self), name = "link_check_run")]
    pub async fn run(&self) -> Result<RunReport> {
        let (documents, existing) = self.existing_paths().await?;
        log::info!(
            "Checking {} documents against {} known paths",
            documents.len(),
            existing.len()
        );

        let reports = join_all(
            documents
                .iter()
                .map(|path| self.check_document(path, &existing)),
        )
        .await;

        let report = RunReport::from_documents(reports);
        log::info!(
            "Checked {} documents: {} passed, {} skipped, {} failed, {} errored",
            report.summary.documents,
            report.summary.passed,
            report.summary.skipped,
            report.summary.failed,
            report.summary.errored
        );
        Ok(report)
    }

    /// Read and check a single document.
    #[instrument(skip(self, existing), name = "link_check_document")]
    pub async fn check_document(&self, path: &str, existing: &ExistingPaths) -> DocumentReport {
        if self.config.is_excluded(path) {
            log::debug!("Skipping excluded document {}", path);
            return DocumentReport::skipped(path);
        }

        match self.store.read_to_string(path).await {
            Ok(source) => self.check_source(path, &source, existing),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path, e);
                DocumentReport::error(path, e.to_string())
            }
        }
    }

    /// Extract, resolve and check the references in an already loaded source.
    pub fn check_source(&self, path: &str, source: &str, existing: &ExistingPaths) -> DocumentReport {
        let raw = match extract_references(path, source) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path, e);
                return DocumentReport::error(path, e.to_string());
            }
        };

        let routing = &self.config.routing;
        let references: Vec<Reference> = raw.iter().map(|r| Reference::new(r, path)).collect();
        let broken: Vec<BrokenLink> = references
            .iter()
            .filter(|reference| !check(reference, routing, existing))
            .map(|reference| {
                BrokenLink::new(reference, resolve(reference, routing).into_iter().next())
            })
            .collect();

        log::debug!(
            "{}: {} references, {} broken",
            path,
            references.len(),
            broken.len()
        );
        DocumentReport::checked(path, references.len(), broken)
    }
}
