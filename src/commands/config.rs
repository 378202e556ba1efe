//! Config subcommands handler

use std::path::Path;

use anyhow::{Context, Result};

use heroline::theme::current_theme;
use heroline::Config;

use super::load_config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let toml_str = config.to_toml()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi'). Writes the
/// defaults first if the file does not exist yet.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    let theme = current_theme();

    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{} {} {}",
        theme.primary_text("Opening"),
        theme.accent_text(&path.display().to_string()),
        theme.primary_text(&format!("with {}", editor))
    );

    let status = std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;

    if !status.success() {
        eprintln!(
            "{}",
            theme.error_text(&format!("Editor '{}' exited with {}", editor, status))
        );
    }

    Ok(())
}

/// Write the default configuration.
///
/// Refuses to overwrite an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    let theme = current_theme();

    if path.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    println!("{}", path.display());
    Ok(())
}
