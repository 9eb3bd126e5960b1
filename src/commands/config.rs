//! Config command - manage the global configuration store.

use anyhow::Result;
use console::style;

use crate::config::GlobalConfig;

/// Config subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSubcommand {
    /// Show where the config store lives
    Path,
    /// Remove the saved API key
    Reset,
}

/// Execute the config command
pub fn execute_config(subcommand: ConfigSubcommand, mut config: GlobalConfig) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Path => {
            println!(
                "{} Config stored at: {}",
                style("→").cyan(),
                config.path().display()
            );
        }
        ConfigSubcommand::Reset => {
            if config.api_key().is_none() {
                println!("{} No API key stored.", style("ℹ").yellow());
                return Ok(());
            }
            config.clear_api_key();
            config.save()?;
            println!("{} API key removed.", style("✓").green());
        }
    }

    Ok(())
}
