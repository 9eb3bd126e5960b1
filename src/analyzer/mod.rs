//! Project analysis - the context collector.
//!
//! Walks the project tree, loads the manifest, applies the classification
//! heuristics and extracts bounded code snippets. One pass per invocation,
//! no caching between runs.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

pub mod classify;
pub mod manifest;
pub mod scan;
pub mod snippets;
pub mod types;

pub use classify::{classify, TemplateKind};
pub use manifest::{find_project_root, Manifest, MANIFEST_FILE};
pub use scan::{list_project_files, STRUCTURE_LIMIT};
pub use snippets::{
    extract_snippets, SnippetOutcome, SnippetReport, MAX_SNIPPET_CHARS, SNIPPET_LIMIT,
    TRUNCATION_MARKER,
};
pub use types::{AssetScan, BadgeLinks, DependencyNames, ProjectContext};

/// Description used when the manifest declares none.
pub const DEFAULT_DESCRIPTION: &str = "A technical project analyzed by README Genesis.";

/// Sentinel for projects without an example env file.
pub const NO_ENV_SENTINEL: &str = "None detected.";

/// Test command used when the manifest declares no test script.
pub const DEFAULT_TEST_COMMAND: &str = "npm test";

/// Maximum number of asset directories retained.
const ASSET_DIR_LIMIT: usize = 5;

static PRIMARY_ASSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(banner|hero|preview|logo|screenshot)\.(png|jpg|jpeg|svg|gif)").unwrap()
});

static ASSET_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(assets|docs|screenshots|images|public|img)$").unwrap());

/// Analyze the project containing `start`.
///
/// Resolves the root by searching upward for a manifest, then builds a
/// fresh [`ProjectContext`]. A missing manifest degrades to defaults; a
/// malformed one is an error.
pub fn analyze<P: AsRef<Path>>(start: P) -> Result<ProjectContext> {
    let root = find_project_root(start.as_ref());
    let manifest = Manifest::load_from_root(&root)?;
    let files = list_project_files(&root);

    let suggested_type = classify(&manifest, &files);
    tracing::debug!(%suggested_type, files = files.len(), "classified project");

    let env_context = read_env_context(&root, &files)?;
    let has_tests = files.iter().any(|f| f.contains("test") || f.contains("spec"));
    let test_command = manifest
        .scripts
        .get("test")
        .cloned()
        .unwrap_or_else(|| DEFAULT_TEST_COMMAND.to_string());

    let snippets = extract_snippets(&root, &files);
    if snippets.skipped_count() > 0 {
        tracing::debug!(skipped = snippets.skipped_count(), "snippet candidates were unreadable");
    }

    Ok(ProjectContext {
        name: manifest.display_name(&root),
        description: manifest
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        dependencies: DependencyNames {
            prod: manifest.dependencies.keys().cloned().collect(),
            dev: manifest.dev_dependencies.keys().cloned().collect(),
        },
        env_context,
        has_tests,
        test_command,
        structure: files.iter().take(STRUCTURE_LIMIT).cloned().collect(),
        deep_logic: snippets.text,
        suggested_type,
        badges: badge_links(&manifest),
        assets: detect_assets(&files),
        root,
    })
}

/// Build the three fixed badge URLs, with literal fallbacks for absent
/// manifest fields.
fn badge_links(manifest: &Manifest) -> BadgeLinks {
    BadgeLinks {
        node_version: format!(
            "https://img.shields.io/badge/node->={}-green",
            manifest.engines.node.as_deref().unwrap_or("18")
        ),
        license: format!(
            "https://img.shields.io/badge/license-{}-blue",
            manifest.license.as_deref().unwrap_or("MIT")
        ),
        version: format!(
            "https://img.shields.io/badge/version-{}-orange",
            manifest.version.as_deref().unwrap_or("1.0.0")
        ),
    }
}

/// Read the first example env file in full, or return the sentinel.
fn read_env_context(root: &Path, files: &[String]) -> Result<String> {
    let env_file = files
        .iter()
        .find(|f| f.contains(".env.example") || f.contains(".env.sample"));
    match env_file {
        Some(path) => Ok(std::fs::read_to_string(root.join(path))?),
        None => Ok(NO_ENV_SENTINEL.to_string()),
    }
}

/// Find the hero image and up to five asset directories.
fn detect_assets(files: &[String]) -> AssetScan {
    AssetScan {
        primary: files.iter().find(|f| PRIMARY_ASSET.is_match(f)).cloned(),
        directories: files
            .iter()
            .filter(|f| ASSET_DIR.is_match(f))
            .take(ASSET_DIR_LIMIT)
            .cloned()
            .collect(),
    }
}
