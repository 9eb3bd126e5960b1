//! Project manifest loading and root resolution.
//!
//! The manifest is the project's `package.json`. A missing manifest degrades
//! to empty defaults; a manifest that exists but cannot be parsed is fatal
//! for the run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GenesisError, Result};

/// Manifest filename searched for during root resolution.
pub const MANIFEST_FILE: &str = "package.json";

/// Parsed project manifest. Unknown fields are ignored; every field is
/// optional so that a minimal or absent manifest still analyzes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Manifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
    pub engines: Engines,
    pub bin: Option<BinEntry>,
}

/// Engine version constraints. Only the node constraint feeds the badges.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Engines {
    pub node: Option<String>,
}

/// npm allows `bin` as a bare path or a name-to-path map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BinEntry {
    Single(String),
    Named(BTreeMap<String, String>),
}

impl Manifest {
    /// Load the manifest from `<root>/package.json`.
    ///
    /// A missing file yields `Manifest::default()`; a file that fails to
    /// parse is an error.
    pub fn load_from_root(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(|source| GenesisError::ManifestParse { path, source })
    }

    /// Whether the manifest declares an executable entry point.
    pub fn has_bin_entry(&self) -> bool {
        self.bin.is_some()
    }

    /// Whether any of `names` appears in the runtime or development
    /// dependency tables.
    pub fn declares_any(&self, names: &[&str]) -> bool {
        names
            .iter()
            .any(|n| self.dependencies.contains_key(*n) || self.dev_dependencies.contains_key(*n))
    }

    /// Project name, falling back to the root directory's name.
    pub fn display_name(&self, root: &Path) -> String {
        self.name.clone().unwrap_or_else(|| {
            root.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "project".to_string())
        })
    }
}

/// Find the project root by looking for `package.json` upwards from
/// `start`. Falls back to `start` itself if no manifest is found before the
/// filesystem root.
pub fn find_project_root(start: &Path) -> PathBuf {
    let start = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());

    let mut current = start.clone();
    loop {
        if current.join(MANIFEST_FILE).is_file() {
            return current;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return start,
        }
    }
}
