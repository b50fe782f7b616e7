//! Reference resolution and the validity check.
//!
//! [`resolve`] maps a [`Reference`] to every path that would satisfy it under
//! the routing conventions; [`check`] tests those candidates against the
//! existing-paths set.

use crate::config::RoutingConfig;
use crate::existing::ExistingPaths;
use crate::paths;
use crate::reference::Reference;

/// Directory forms tried for each extension: the path itself, then its index.
const DIRECTORY_FORMS: [&str; 2] = ["", "/index"];

/// Ordered candidate paths for `reference`. Any one existing is enough.
///
/// ```
/// use docgate_core::{Reference, RoutingConfig, resolve};
///
/// let routing = RoutingConfig::default();
/// let reference = Reference::new("../guide", "docs/api/intro.mdx");
/// let candidates = resolve(&reference, &routing);
///
/// assert_eq!(candidates[0], "docs/guide.md");
/// assert!(candidates.contains(&"docs/guide/index.mdx".to_string()));
/// ```
pub fn resolve(reference: &Reference, routing: &RoutingConfig) -> Vec<String> {
    let target = reference.raw_target();

    if reference.is_external() {
        return vec![target.to_string()];
    }

    if reference.is_same_document() {
        return vec![reference.origin().to_string()];
    }

    if !routing.asset_prefix.is_empty() && target.starts_with(routing.asset_prefix.as_str()) {
        return vec![paths::join(&routing.asset_root, target)];
    }

    // join() normalizes, which also strips any trailing separator
    let base = if target.starts_with('/') {
        paths::join(&routing.content_root, target)
    } else {
        paths::join(paths::dirname(reference.origin()), target)
    };

    let mut candidates =
        Vec::with_capacity(DIRECTORY_FORMS.len() * routing.content_extensions.len());
    for form in DIRECTORY_FORMS {
        for extension in &routing.content_extensions {
            candidates.push(format!("{}{}{}", base, form, extension));
        }
    }
    candidates
}

/// Whether `reference` points at something that exists.
///
/// External references are always valid. Never mutates `existing`.
pub fn check(reference: &Reference, routing: &RoutingConfig, existing: &ExistingPaths) -> bool {
    if reference.is_external() {
        return true;
    }

    resolve(reference, routing)
        .iter()
        .any(|candidate| existing.contains(candidate))
}
