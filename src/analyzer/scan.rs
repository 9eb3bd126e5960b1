//! Project tree enumeration.
//!
//! Lists every path under the project root, relative to it, excluding the
//! conventional noise directories. The listing is sorted lexically so that
//! downstream selection (structure truncation, snippet candidates) is
//! deterministic for a given tree.

use std::path::Path;

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

/// Maximum number of paths retained for the structure listing.
pub const STRUCTURE_LIMIT: usize = 100;

/// Paths excluded from enumeration: dependency caches, build outputs, VCS
/// metadata, lockfiles and virtualenvs.
const EXCLUDE_GLOBS: &[&str] = &[
    "**/node_modules",
    "**/dist",
    "**/build",
    "**/.git",
    "**/venv",
    "**/.venv",
    "**/package-lock.json",
];

const MATCH_OPTS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// List all files and directories under `root`, relative to it, sorted
/// lexically. Unreadable entries are silently dropped.
pub fn list_project_files(root: &Path) -> Vec<String> {
    let exclude: Vec<Pattern> = EXCLUDE_GLOBS
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut paths: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|_| entry.path().to_string_lossy().to_string());
            !exclude
                .iter()
                .any(|p| p.matches_with(&relative, MATCH_OPTS))
        })
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|p| p.to_string_lossy().to_string())
        })
        .collect();

    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, path: &str) {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, "").unwrap();
    }

    #[test]
    fn test_excludes_conventional_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/index.js");
        touch(temp.path(), "node_modules/express/index.js");
        touch(temp.path(), "dist/bundle.js");
        touch(temp.path(), ".git/HEAD");
        touch(temp.path(), "package-lock.json");
        touch(temp.path(), "package.json");

        let files = list_project_files(temp.path());

        assert!(files.contains(&"src/index.js".to_string()));
        assert!(files.contains(&"package.json".to_string()));
        assert!(!files.iter().any(|f| f.contains("node_modules")));
        assert!(!files.iter().any(|f| f.contains("dist")));
        assert!(!files.iter().any(|f| f.contains(".git")));
        assert!(!files.contains(&"package-lock.json".to_string()));
    }

    #[test]
    fn test_listing_includes_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "assets/logo.png");

        let files = list_project_files(temp.path());
        assert!(files.contains(&"assets".to_string()));
        assert!(files.contains(&"assets/logo.png".to_string()));
    }

    #[test]
    fn test_listing_is_sorted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "zeta.js");
        touch(temp.path(), "alpha.js");
        touch(temp.path(), "midway.js");

        let files = list_project_files(temp.path());
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}
