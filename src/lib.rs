#![forbid(unsafe_code)]

//! # README Genesis
//!
//! Context-aware README generation for local projects.
//!
//! Two stages, invoked sequentially:
//!
//! - **Analyzer**: walks the project tree, loads the manifest, classifies
//!   the project type and extracts bounded code snippets into a
//!   [`ProjectContext`].
//! - **Generator**: composes a prompt from the context, sends it to the
//!   Gemini API and post-processes the returned markdown.
//!
//! ## Example
//!
//! ```rust,no_run
//! use genesis::{analyze, generate_readme, GeminiClient, TemplateKind};
//!
//! fn main() -> anyhow::Result<()> {
//!     let context = analyze(".")?;
//!     let client = GeminiClient::new("my-api-key");
//!     let markdown = generate_readme(&client, &context, TemplateKind::Full)?;
//!     std::fs::write("README.md", markdown)?;
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;

// Re-exports
pub use analyzer::{
    analyze, classify, AssetScan, BadgeLinks, DependencyNames, Manifest, ProjectContext,
    SnippetOutcome, SnippetReport, TemplateKind,
};
pub use config::GlobalConfig;
pub use error::{GenesisError, Result};
pub use generator::{
    compose_prompt, ensure_centered_header, generate_readme, GeminiClient, MODEL_NAME,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
