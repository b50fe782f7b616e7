//! `/`-separated path arithmetic on plain strings.
//!
//! Candidate paths are compared by string equality against the existing-paths
//! set, so every path in the system goes through [`normalize`] before it is
//! stored or compared. These helpers never touch the filesystem and never fail.

use std::path::Path;

/// Normalize a path lexically.
///
/// - repeated and trailing separators collapse
/// - `.` segments are dropped
/// - `..` removes the previous segment; leading `..` is kept for relative
///   paths and discarded at the root of absolute ones
/// - an empty relative result becomes `.`
///
/// ```
/// use docgate_core::paths::normalize;
///
/// assert_eq!(normalize("./docs//api/../guide/"), "docs/guide");
/// assert_eq!(normalize("/../x"), "/x");
/// assert_eq!(normalize("a/.."), ".");
/// ```
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Join two paths and normalize the result.
///
/// `rest` is appended even when it starts with `/`, so `join("docs", "/a")`
/// is `docs/a`. Root-relative references rely on this.
pub fn join(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => normalize(rest),
        (_, true) => normalize(base),
        _ => normalize(&format!("{}/{}", base, rest)),
    }
}

/// Directory portion of a path: `docs` for `docs/a.mdx`, `.` for `a.mdx`.
pub fn dirname(path: &str) -> &str {
    match path.trim_end_matches('/').rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Convert an OS path into the normalized `/`-separated string form.
pub fn to_slash(path: &Path) -> String {
    normalize(&path.to_string_lossy().replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize("docs/api/../guide"), "docs/guide");
        assert_eq!(normalize("./docs"), "docs");
        assert_eq!(normalize("docs/"), "docs");
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("../../x"), "../../x");
        assert_eq!(normalize("docs/../../x"), "../x");
    }

    #[test]
    fn test_normalize_absolute() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/a/b/../c"), "/a/c");
        assert_eq!(normalize("/.."), "/");
    }

    #[test]
    fn test_join_root_relative_target() {
        assert_eq!(join("docs", "/start/install"), "docs/start/install");
        assert_eq!(join("public/", "/images/x.png"), "public/images/x.png");
        assert_eq!(join("./docs", "/"), "docs");
    }

    #[test]
    fn test_join_collapses_to_current_dir() {
        assert_eq!(join("docs", ".."), ".");
        assert_eq!(join("", "a"), "a");
        assert_eq!(join("a", ""), "a");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("docs/api/intro.mdx"), "docs/api");
        assert_eq!(dirname("intro.mdx"), ".");
        assert_eq!(dirname("/intro.mdx"), "/");
    }

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("./docs/a.md")), "docs/a.md");
    }
}
