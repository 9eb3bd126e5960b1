//! Template classification heuristics.
//!
//! A priority-ordered rule ladder over the declared dependency set, with a
//! cross-ecosystem fallback driven by filename patterns. Best-effort: the
//! operator confirms or overrides the suggestion interactively.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::manifest::Manifest;

/// Documentation blueprint suggested for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Full,
    Enterprise,
    Minimal,
    Library,
}

impl TemplateKind {
    /// Label shown in the interactive blueprint picker.
    pub fn menu_label(&self) -> &'static str {
        match self {
            TemplateKind::Full => "🌐 Full Comprehensive",
            TemplateKind::Enterprise => "🏢 Enterprise",
            TemplateKind::Minimal => "⚡ Essential",
            TemplateKind::Library => "📦 Library/Package",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateKind::Full => "full",
            TemplateKind::Enterprise => "enterprise",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Library => "library",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(TemplateKind::Full),
            "enterprise" => Ok(TemplateKind::Enterprise),
            "minimal" => Ok(TemplateKind::Minimal),
            "library" => Ok(TemplateKind::Library),
            _ => Err(format!(
                "Unknown template: {}. Use full, enterprise, minimal or library",
                s
            )),
        }
    }
}

/// Marker packages per tier, evaluated first-match-wins. The library tier
/// additionally triggers on a declared executable entry point.
const TIERS: &[(TemplateKind, &[&str])] = &[
    (
        TemplateKind::Enterprise,
        &["express", "prisma", "mongodb", "docker", "kubernetes", "postgresql", "nest"],
    ),
    (
        TemplateKind::Full,
        &["react", "next", "vue", "tailwind", "svelte", "vite", "webpack"],
    ),
    (
        TemplateKind::Library,
        &["commander", "yargs", "chalk", "inquirer"],
    ),
];

static PYTHON_MANIFEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(requirements\.txt|pyproject\.toml|setup\.py)$").unwrap());

static PYTHON_WEB_FRAMEWORK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)django|flask|fastapi").unwrap());

static GO_MODULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)go\.mod$").unwrap());

static RUST_MANIFEST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)cargo\.toml$").unwrap());

/// Classify a project from its manifest and file listing.
///
/// Deterministic for a given manifest and listing. The cross-ecosystem
/// fallback only applies while the classification is still
/// [`TemplateKind::Minimal`].
pub fn classify(manifest: &Manifest, files: &[String]) -> TemplateKind {
    for (kind, markers) in TIERS {
        let matched = manifest.declares_any(markers)
            || (*kind == TemplateKind::Library && manifest.has_bin_entry());
        if matched {
            return *kind;
        }
    }

    // Cross-ecosystem fallback for projects without a usable manifest signal.
    if files.iter().any(|f| PYTHON_MANIFEST.is_match(f)) {
        if files.iter().any(|f| PYTHON_WEB_FRAMEWORK.is_match(f)) {
            return TemplateKind::Enterprise;
        }
        return TemplateKind::Minimal;
    }
    if files.iter().any(|f| GO_MODULE.is_match(f)) {
        return TemplateKind::Enterprise;
    }
    if files.iter().any(|f| RUST_MANIFEST.is_match(f)) {
        return TemplateKind::Library;
    }

    TemplateKind::Minimal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> Manifest {
        serde_json::from_str(json).unwrap()
    }

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_backend_marker_is_enterprise() {
        let m = manifest(r#"{"dependencies": {"express": "4.0.0"}}"#);
        let files = paths(&["server.js", "package.json"]);
        assert_eq!(classify(&m, &files), TemplateKind::Enterprise);
    }

    #[test]
    fn test_enterprise_wins_ties_over_frontend() {
        let m = manifest(r#"{"dependencies": {"express": "4.0.0", "react": "18.0.0"}}"#);
        assert_eq!(classify(&m, &[]), TemplateKind::Enterprise);
    }

    #[test]
    fn test_frontend_marker_is_full() {
        let m = manifest(r#"{"dependencies": {"react": "18.0.0"}}"#);
        let files = paths(&["src/App.js", "package.json"]);
        assert_eq!(classify(&m, &files), TemplateKind::Full);
    }

    #[test]
    fn test_dev_dependency_markers_count() {
        let m = manifest(r#"{"devDependencies": {"vite": "5.0.0"}}"#);
        assert_eq!(classify(&m, &[]), TemplateKind::Full);
    }

    #[test]
    fn test_bin_entry_is_library() {
        let m = manifest(r#"{"bin": {"x": "bin/x.js"}, "dependencies": {"commander": "1.0.0"}}"#);
        assert_eq!(classify(&m, &[]), TemplateKind::Library);
    }

    #[test]
    fn test_cli_toolkit_marker_is_library() {
        let m = manifest(r#"{"dependencies": {"inquirer": "9.0.0"}}"#);
        assert_eq!(classify(&m, &[]), TemplateKind::Library);
    }

    #[test]
    fn test_plain_python_project_is_minimal() {
        let m = Manifest::default();
        let files = paths(&["requirements.txt", "main.py"]);
        assert_eq!(classify(&m, &files), TemplateKind::Minimal);
    }

    #[test]
    fn test_python_web_framework_is_enterprise() {
        let m = Manifest::default();
        let files = paths(&["requirements.txt", "flask_app.py"]);
        assert_eq!(classify(&m, &files), TemplateKind::Enterprise);
    }

    #[test]
    fn test_go_module_is_enterprise() {
        let m = Manifest::default();
        let files = paths(&["go.mod", "main.go"]);
        assert_eq!(classify(&m, &files), TemplateKind::Enterprise);
    }

    #[test]
    fn test_rust_manifest_is_library() {
        let m = Manifest::default();
        let files = paths(&["Cargo.toml", "src/lib.rs"]);
        assert_eq!(classify(&m, &files), TemplateKind::Library);
    }

    #[test]
    fn test_python_fallback_checked_before_rust() {
        // A polyglot tree with a Python manifest never reaches the Rust rule.
        let m = Manifest::default();
        let files = paths(&["requirements.txt", "Cargo.toml"]);
        assert_eq!(classify(&m, &files), TemplateKind::Minimal);
    }

    #[test]
    fn test_fallback_gated_on_minimal() {
        // A frontend manifest hit is not overridden by a go.mod in the tree.
        let m = manifest(r#"{"dependencies": {"react": "18.0.0"}}"#);
        let files = paths(&["go.mod"]);
        assert_eq!(classify(&m, &files), TemplateKind::Full);
    }

    #[test]
    fn test_empty_project_is_minimal() {
        assert_eq!(classify(&Manifest::default(), &[]), TemplateKind::Minimal);
    }
}
