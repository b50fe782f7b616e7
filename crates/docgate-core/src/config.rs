//! Configuration types for the link checker.
//!
//! Configuration is an immutable value built once at startup and threaded
//! into the resolver and engine. It can be built in code with
//! [`CheckerConfig::builder`] or loaded from YAML with [`CheckerConfig::load`].

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default config file looked up in the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "docgate.yaml";

/// How reference strings map onto paths in the project tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Root directory of content documents; `/`-prefixed links start here
    pub content_root: String,
    /// URL prefix served from `asset_root` instead of `content_root`
    pub asset_prefix: String,
    /// Directory the asset prefix maps into
    pub asset_root: String,
    /// Extensions tried for extension-less links, in priority order
    pub content_extensions: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            content_root: "docs".to_string(),
            asset_prefix: "/images".to_string(),
            asset_root: "public".to_string(),
            content_extensions: [".md", ".mdx", ".ipynb"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RoutingConfig {
    /// Validate structure only; nothing here touches the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.content_root.trim().is_empty() {
            return Err(Error::config_error("content_root cannot be empty"));
        }

        if self.content_extensions.is_empty() {
            return Err(Error::config_error(
                "At least one content extension must be configured",
            ));
        }

        for ext in &self.content_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(Error::config_error(format!(
                    "Content extension must look like '.md', got '{}'",
                    ext
                )));
            }
        }

        if !self.asset_prefix.is_empty() {
            if !self.asset_prefix.starts_with('/') {
                return Err(Error::config_error(format!(
                    "asset_prefix must start with '/', got '{}'",
                    self.asset_prefix
                )));
            }
            if self.asset_root.trim().is_empty() {
                return Err(Error::config_error(
                    "asset_root is required when asset_prefix is set",
                ));
            }
        }

        Ok(())
    }

    /// Content root in normalized form.
    pub fn content_root(&self) -> String {
        paths::normalize(&self.content_root)
    }

    /// Whether `path` names a content document by extension.
    pub fn is_content_path(&self, path: &str) -> bool {
        self.content_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
    }
}

/// Full checker configuration: routing plus the policy lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    #[serde(flatten)]
    pub routing: RoutingConfig,

    /// Directories scanned for static assets
    pub asset_dirs: Vec<String>,
    /// Asset file extensions, without the dot
    pub asset_extensions: Vec<String>,

    /// Documents whose own outgoing references are never checked
    pub ignored_origins: HashSet<String>,
    /// Paths treated as existing even though absent on disk
    pub synthetic_paths: HashSet<String>,
    /// Documents under these prefixes are generated elsewhere and skipped
    pub skipped_prefixes: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            routing: RoutingConfig::default(),
            asset_dirs: vec!["public".to_string(), "docs".to_string()],
            asset_extensions: ["png", "jpg", "gif", "svg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ignored_origins: HashSet::new(),
            synthetic_paths: HashSet::new(),
            skipped_prefixes: vec![],
        }
    }
}

impl CheckerConfig {
    /// Create new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder from defaults
    pub fn builder() -> CheckerConfigBuilder {
        CheckerConfigBuilder::new()
    }

    /// Validate configuration structure
    pub fn validate(&self) -> Result<()> {
        self.routing.validate()?;

        for ext in &self.asset_extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(Error::config_error(format!(
                    "Asset extension must be given without a dot, got '{}'",
                    ext
                )));
            }
        }

        if self.skipped_prefixes.iter().any(|p| p.is_empty()) {
            return Err(Error::config_error(
                "Empty skipped prefix would skip every document",
            ));
        }

        Ok(())
    }

    /// Validate against a project directory: the content root must exist.
    pub fn validate_in(&self, base_dir: &Path) -> Result<()> {
        self.validate()?;

        let root = base_dir.join(&self.routing.content_root);
        if !root.exists() {
            return Err(Error::config_error(format!(
                "Content root does not exist: {}",
                root.display()
            )));
        }

        if !root.is_dir() {
            return Err(Error::config_error(format!(
                "Content root is not a directory: {}",
                root.display()
            )));
        }

        Ok(())
    }

    /// Bring the policy lists into the normalized form store paths use.
    ///
    /// A trailing `/` on a skipped prefix is kept so it still only matches
    /// whole directories.
    pub fn normalize_paths(&mut self) {
        self.ignored_origins = self.ignored_origins.iter().map(|p| paths::normalize(p)).collect();
        self.synthetic_paths = self.synthetic_paths.iter().map(|p| paths::normalize(p)).collect();
        for prefix in &mut self.skipped_prefixes {
            let mut normalized = paths::normalize(prefix);
            if prefix.ends_with('/') && !normalized.ends_with('/') {
                normalized.push('/');
            }
            *prefix = normalized;
        }
    }

    /// Whether the document's own references are exempt from checking.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.ignored_origins.contains(path)
            || self
                .skipped_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Whether `path` has one of the asset extensions.
    pub fn is_asset_path(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.asset_extensions.iter().any(|a| a == ext))
    }

    /// Parse configuration from YAML text; missing keys fall back to defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        config.normalize_paths();
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load configuration from {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

/// Builder for CheckerConfig
#[derive(Debug, Clone, Default)]
pub struct CheckerConfigBuilder {
    config: CheckerConfig,
}

impl CheckerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content root
    pub fn content_root(mut self, root: impl Into<String>) -> Self {
        self.config.routing.content_root = root.into();
        self
    }

    /// Set the asset prefix and the directory it maps to
    pub fn assets(mut self, prefix: impl Into<String>, root: impl Into<String>) -> Self {
        self.config.routing.asset_prefix = prefix.into();
        self.config.routing.asset_root = root.into();
        self
    }

    /// Replace the ordered content extensions
    pub fn content_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.routing.content_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the asset directories scanned for assets
    pub fn asset_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.asset_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Never check references inside this document
    pub fn ignore_origin(mut self, path: impl Into<String>) -> Self {
        self.config.ignored_origins.insert(path.into());
        self
    }

    /// Treat this path as existing
    pub fn synthetic_path(mut self, path: impl Into<String>) -> Self {
        self.config.synthetic_paths.insert(path.into());
        self
    }

    /// Skip every document under this prefix
    pub fn skip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.skipped_prefixes.push(prefix.into());
        self
    }

    /// Build and validate
    pub fn build(mut self) -> Result<CheckerConfig> {
        self.config.validate()?;
        self.config.normalize_paths();
        Ok(self.config)
    }
}
