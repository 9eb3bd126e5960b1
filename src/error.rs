//! Error types for the genesis library.
//!
//! Command handlers wrap these in `anyhow` for display; library code
//! returns [`Result`] so callers can match on the failure class.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by analysis and generation.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// No API key from the CLI, the environment, or the config store, and
    /// prompting was disabled.
    #[error("no Gemini API key available (set GEMINI_API_KEY or run interactively)")]
    MissingApiKey,

    /// A manifest file exists but is not valid JSON. Fatal for the run -
    /// classification cannot proceed on a corrupt project descriptor.
    #[error("failed to parse {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The generation request failed in transport or was rejected by the
    /// service. Surfaced unmodified; there is no retry.
    #[error("generation request failed: {0}")]
    Request(Box<ureq::Error>),

    /// The service answered but the response carried no completion text.
    #[error("model response contained no completion text")]
    EmptyCompletion,
}

impl From<ureq::Error> for GenesisError {
    fn from(err: ureq::Error) -> Self {
        GenesisError::Request(Box::new(err))
    }
}

/// Convenience result type for genesis operations.
pub type Result<T> = std::result::Result<T, GenesisError>;
