//! Subcommand handlers

pub mod ask;
pub mod completions;
pub mod config;
pub mod frames;
pub mod play;

use std::path::Path;

use anyhow::{Context, Result};

use heroline::Config;

/// Load the config from `--config` or the default location.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = Config::resolve_path(explicit)?;
    Config::load_from(&path).with_context(|| format!("Failed to load config {}", path.display()))
}
