//! The set of paths considered to exist during a run.

use crate::paths;
use std::collections::HashSet;

/// Union of content documents, static assets and synthetic paths.
///
/// Used purely for membership tests; insertion normalizes every path so that
/// `./docs/a.md` and `docs/a.md` are the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingPaths {
    paths: HashSet<String>,
}

impl ExistingPaths {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from its three sources.
    pub fn from_sources<'a>(
        content: impl IntoIterator<Item = &'a String>,
        assets: impl IntoIterator<Item = &'a String>,
        synthetic: impl IntoIterator<Item = &'a String>,
    ) -> Self {
        content
            .into_iter()
            .chain(assets)
            .chain(synthetic)
            .map(String::as_str)
            .collect()
    }

    /// Add a single path
    pub fn insert(&mut self, path: &str) -> bool {
        self.paths.insert(paths::normalize(path))
    }

    /// Membership test on an already normalized path
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of distinct paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path exists
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ExistingPaths {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_deduplicates() {
        let content = vec!["docs/a.md".to_string(), "docs/b.mdx".to_string()];
        let assets = vec!["public/images/x.png".to_string()];
        let synthetic = vec!["docs/a.md".to_string(), "docs/errors.mdx".to_string()];

        let set = ExistingPaths::from_sources(&content, &assets, &synthetic);
        assert_eq!(set.len(), 4);
        assert!(set.contains("docs/errors.mdx"));
        assert!(set.contains("public/images/x.png"));
    }

    #[test]
    fn test_insert_normalizes() {
        let mut set = ExistingPaths::new();
        assert!(set.insert("./docs//a.md"));
        assert!(!set.insert("docs/a.md"));
        assert!(set.contains("docs/a.md"));
    }
}
