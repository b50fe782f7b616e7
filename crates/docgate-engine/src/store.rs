//! Content stores: where document paths, asset paths and sources come from.
//!
//! Every path a store hands out is normalized, `/`-separated and relative to
//! the project base directory, which is the form the resolver produces.

use async_trait::async_trait;
use docgate_core::paths;
use docgate_core::{CheckerConfig, Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File-set provider and reader used by the engine.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Content documents under the content root with a content extension
    async fn content_paths(&self, config: &CheckerConfig) -> Result<Vec<String>>;

    /// Static assets under the asset directories with an asset extension
    async fn asset_paths(&self, config: &CheckerConfig) -> Result<Vec<String>>;

    /// Read a document's source as UTF-8
    async fn read_to_string(&self, path: &str) -> Result<String>;
}

/// Whether `path` lies inside directory `dir` (both normalized).
fn is_under(path: &str, dir: &str) -> bool {
    dir == "." || path.strip_prefix(dir).is_some_and(|rest| rest.starts_with('/'))
}

/// Store backed by the filesystem under a base directory.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    base_dir: PathBuf,
}

impl FsContentStore {
    /// Create a store rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Project base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Files below `dir` accepted by `keep`, as project-relative strings.
    fn walk(&self, dir: &str, keep: impl Fn(&str) -> bool) -> Result<Vec<String>> {
        let root = self.base_dir.join(dir);
        let mut files = Vec::new();

        for entry in WalkDir::new(&root).follow_links(true) {
            let entry = entry.map_err(|e| {
                Error::other(format!("Failed to walk {}: {}", root.display(), e))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.base_dir)
                .unwrap_or(entry.path());
            let path = paths::to_slash(relative);
            if keep(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn content_paths(&self, config: &CheckerConfig) -> Result<Vec<String>> {
        let root = config.routing.content_root();
        if !self.base_dir.join(&root).is_dir() {
            return Err(Error::file_not_found(self.base_dir.join(&root)));
        }

        let files = self.walk(&root, |path| config.routing.is_content_path(path))?;
        log::info!("Found {} content documents under {}", files.len(), root);
        Ok(files)
    }

    async fn asset_paths(&self, config: &CheckerConfig) -> Result<Vec<String>> {
        let mut files = Vec::new();

        for dir in &config.asset_dirs {
            let dir = paths::normalize(dir);
            if !self.base_dir.join(&dir).is_dir() {
                log::debug!("Asset directory {} does not exist, skipping", dir);
                continue;
            }
            files.extend(self.walk(&dir, |path| config.is_asset_path(path))?);
        }

        log::info!("Found {} static assets", files.len());
        Ok(files)
    }

    async fn read_to_string(&self, path: &str) -> Result<String> {
        let full = self.base_dir.join(path);
        tokio::fs::read_to_string(&full).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(full),
            _ => Error::io(e),
        })
    }
}

/// Store holding documents and assets in memory.
///
/// Applies the same root, directory and extension rules as the filesystem
/// store, so engine behavior can be exercised without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    files: HashMap<String, String>,
}

impl MemoryContentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with its content
    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add a file with its content
    pub fn insert(&mut self, path: &str, content: impl Into<String>) {
        self.files.insert(paths::normalize(path), content.into());
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn content_paths(&self, config: &CheckerConfig) -> Result<Vec<String>> {
        let root = config.routing.content_root();
        Ok(self
            .files
            .keys()
            .filter(|path| is_under(path, &root) && config.routing.is_content_path(path))
            .cloned()
            .collect())
    }

    async fn asset_paths(&self, config: &CheckerConfig) -> Result<Vec<String>> {
        let dirs: Vec<String> = config.asset_dirs.iter().map(|d| paths::normalize(d)).collect();
        Ok(self
            .files
            .keys()
            .filter(|path| config.is_asset_path(path))
            .filter(|path| dirs.iter().any(|dir| is_under(path, dir)))
            .cloned()
            .collect())
    }

    async fn read_to_string(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::file_not_found(path))
    }
}
