//! Global configuration store.
//!
//! Persists the API key across runs as a JSON file under the platform
//! config directory. Always constructed in `main` and passed down - library
//! code never reads it as ambient state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("readme-genesis").join("config.json"))
        .unwrap_or_else(|| PathBuf::from(".readme-genesis.config.json"))
}

/// Persisted global configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,

    #[serde(skip)]
    path: PathBuf,
}

impl GlobalConfig {
    /// Load from the default store location, or start empty.
    pub fn load_or_default() -> Self {
        Self::load_from(default_store_path())
    }

    /// Load from `path`, or start empty. A corrupt store is treated as
    /// empty rather than fatal - the key can be re-entered.
    pub fn load_from(path: PathBuf) -> Self {
        let mut config = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<GlobalConfig>(&raw).ok())
            .unwrap_or_default();
        config.path = path;
        config
    }

    /// Save to the store location, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn clear_api_key(&mut self) {
        self.api_key = None;
    }
}
