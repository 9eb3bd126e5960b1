//! CLI command implementations.
//!
//! Each command is in its own submodule; handlers take an options struct
//! and the injected global configuration.

pub mod config;
pub mod generate;

pub use config::{execute_config, ConfigSubcommand};
pub use generate::{execute_generate, GenerateOptions, OUTPUT_FILE};
