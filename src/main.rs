#![forbid(unsafe_code)]
//! README Genesis Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use genesis::commands::{execute_config, execute_generate, ConfigSubcommand, GenerateOptions};
use genesis::{GlobalConfig, TemplateKind};

#[derive(Parser)]
#[command(name = "gen-readme")]
#[command(about = "Context-aware README generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project directory to analyze (searches upward for package.json)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Blueprint to use, skipping the interactive picker
    #[arg(short, long, value_enum)]
    template: Option<TemplateArg>,

    /// Accept the suggested blueprint and skip all prompts
    #[arg(short = 'y', long)]
    yes: bool,

    /// Gemini API key (falls back to the saved key, then an interactive prompt)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage global configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show where the config store lives
    Path,

    /// Remove the saved API key
    Reset,
}

/// Blueprint selector for the --template flag
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum TemplateArg {
    Full,
    Enterprise,
    Minimal,
    Library,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "genesis=debug" } else { "genesis=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GlobalConfig::load_or_default();

    match cli.command {
        Some(Commands::Config { cmd }) => {
            let subcommand = match cmd {
                ConfigCommands::Path => ConfigSubcommand::Path,
                ConfigCommands::Reset => ConfigSubcommand::Reset,
            };
            execute_config(subcommand, config)?;
        }

        None => {
            // Map the CLI enum to the library type
            let template = cli.template.map(|t| match t {
                TemplateArg::Full => TemplateKind::Full,
                TemplateArg::Enterprise => TemplateKind::Enterprise,
                TemplateArg::Minimal => TemplateKind::Minimal,
                TemplateArg::Library => TemplateKind::Library,
            });

            let options = GenerateOptions {
                dir: cli.dir,
                template,
                yes: cli.yes,
                api_key: cli.api_key,
            };
            execute_generate(options, config)?;
        }
    }

    Ok(())
}
