//! Analyzer value objects.

use std::path::PathBuf;

use serde::Serialize;

use super::classify::TemplateKind;

/// Declared package names, split by dependency table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyNames {
    pub prod: Vec<String>,
    pub dev: Vec<String>,
}

/// shields.io badge URLs embedded into the generation prompt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeLinks {
    pub node_version: String,
    pub license: String,
    pub version: String,
}

/// Hero image candidate and asset directory paths.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetScan {
    pub primary: Option<String>,
    pub directories: Vec<String>,
}

/// Everything the generator needs to know about a project.
///
/// Built once per invocation and never mutated afterwards; each run
/// produces a fresh context.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    /// Resolved project root.
    pub root: PathBuf,
    /// Project name from the manifest, or the root directory's name.
    pub name: String,
    /// Manifest description or a fixed default.
    pub description: String,
    pub dependencies: DependencyNames,
    /// Contents of the example env file, or a "none detected" sentinel.
    pub env_context: String,
    pub has_tests: bool,
    pub test_command: String,
    /// Up to 100 relative paths, lexically sorted.
    pub structure: Vec<String>,
    /// Concatenated entry-point snippets with per-file headers.
    pub deep_logic: String,
    pub suggested_type: TemplateKind,
    pub badges: BadgeLinks,
    pub assets: AssetScan,
}
