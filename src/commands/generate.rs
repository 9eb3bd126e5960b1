//! Generate command - analyze the project and write README.md.
//!
//! The default action: analysis behind a spinner, interactive blueprint
//! selection with the suggestion preselected, one generation call, then
//! the file write and optional post actions.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Password, Select};
use indicatif::ProgressBar;

use crate::analyzer::{analyze, TemplateKind};
use crate::config::GlobalConfig;
use crate::error::GenesisError;
use crate::generator::{generate_readme, GeminiClient};

/// Filename written into the project root.
pub const OUTPUT_FILE: &str = "README.md";

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Directory to analyze (searches upward for a manifest)
    pub dir: Option<PathBuf>,
    /// Blueprint override, skipping the interactive picker
    pub template: Option<TemplateKind>,
    /// Accept the suggested blueprint and skip all prompts
    pub yes: bool,
    /// API key from the CLI or environment
    pub api_key: Option<String>,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, mut config: GlobalConfig) -> Result<()> {
    println!("\n{}", style("📦 README Genesis").bold().cyan());
    println!("{}\n", style("Smart context-aware documentation engine").dim());

    // Credential first: nothing is analyzed without a usable key.
    let api_key = ensure_api_key(options.api_key.clone(), options.yes, &mut config)?;

    let start_dir = options.dir.clone().unwrap_or_else(|| PathBuf::from("."));

    let analyze_spinner = spinner("🔍 Analyzing project DNA...");
    let analyzed = analyze(&start_dir);
    analyze_spinner.finish_and_clear();
    let context = analyzed.context("project analysis failed")?;

    println!("{} Analysis complete.", style("✓").green());
    println!(
        "  {} '{}' blueprint fits this stack",
        style("suggestion:").dim(),
        style(&context.suggested_type).cyan()
    );
    if let Some(asset) = &context.assets.primary {
        println!("  {} {}", style("asset:").dim(), asset);
    }
    println!();

    let template = match options.template {
        Some(t) => t,
        None if options.yes => context.suggested_type,
        None => select_template(context.suggested_type)?,
    };

    let spinner = spinner("✨ Synthesizing documentation...");
    let client = GeminiClient::new(api_key);
    let generated = generate_readme(&client, &context, template);
    spinner.finish_and_clear();
    let markdown = generated.context("README generation failed")?;

    let output_path = context.root.join(OUTPUT_FILE);
    let existed = output_path.exists();
    std::fs::write(&output_path, &markdown)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    if existed {
        println!("{} {} updated", style("✓").yellow(), output_path.display());
    } else {
        println!("{} {} created", style("✓").green(), output_path.display());
    }

    if !options.yes {
        run_post_action(&output_path, &context.root)?;
    }

    Ok(())
}

/// Resolve the API key: CLI/environment, then the config store, then an
/// interactive prompt (persisted on entry).
fn ensure_api_key(
    cli_key: Option<String>,
    assume_yes: bool,
    config: &mut GlobalConfig,
) -> Result<String> {
    if let Some(key) = cli_key {
        return Ok(key);
    }
    if let Some(key) = config.api_key() {
        return Ok(key.to_string());
    }
    if assume_yes {
        return Err(GenesisError::MissingApiKey.into());
    }

    println!("{} No API key found. Let's set one up.", style("ℹ").yellow());
    println!("  Get one for free at: https://aistudio.google.com/app/apikey\n");

    let key: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("🔑 Enter your Gemini API key")
        .validate_with(|input: &String| {
            if input.trim().len() > 10 {
                Ok(())
            } else {
                Err("please enter a valid API key")
            }
        })
        .interact()?;
    let key = key.trim().to_string();

    config.set_api_key(key.clone());
    config.save()?;
    println!("{} Key saved. You won't be asked again.\n", style("✓").green());

    Ok(key)
}

/// Interactive blueprint picker with the suggestion preselected.
fn select_template(suggested: TemplateKind) -> Result<TemplateKind> {
    let choices = [
        TemplateKind::Full,
        TemplateKind::Enterprise,
        TemplateKind::Minimal,
        TemplateKind::Library,
    ];
    let labels: Vec<String> = choices
        .iter()
        .map(|kind| {
            if *kind == suggested {
                format!("{} {}", kind.menu_label(), style("(recommended)").green())
            } else {
                kind.menu_label().to_string()
            }
        })
        .collect();
    let default_index = choices.iter().position(|k| *k == suggested).unwrap_or(0);

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select the documentation blueprint")
        .items(&labels)
        .default(default_index)
        .interact()?;

    Ok(choices[index])
}

/// Final action after the write: preview, stage to git, or exit.
fn run_post_action(output_path: &Path, root: &Path) -> Result<()> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Final action")
        .items(&["👁  Preview (open file)", "📦 Stage for git", "👋 Exit"])
        .default(2)
        .interact()?;

    match index {
        0 => open_file(output_path),
        1 => stage_for_git(root),
        _ => Ok(()),
    }
}

fn open_file(path: &Path) -> Result<()> {
    let status = match std::env::consts::OS {
        "macos" => Command::new("open").arg(path).status(),
        "windows" => Command::new("cmd").args(["/C", "start", ""]).arg(path).status(),
        _ => Command::new("xdg-open").arg(path).status(),
    };

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(_) | Err(_) => {
            eprintln!("{} Could not open {}", style("✗").red(), path.display());
            Ok(())
        }
    }
}

fn stage_for_git(root: &Path) -> Result<()> {
    let status = Command::new("git")
        .args(["add", OUTPUT_FILE])
        .current_dir(root)
        .status();

    match status {
        Ok(s) if s.success() => {
            println!("{} Staged to git.", style("✓").green());
        }
        Ok(_) | Err(_) => {
            eprintln!("{} git add failed - is this a repository?", style("✗").red());
        }
    }
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
