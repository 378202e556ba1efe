//! Play command handler

use std::path::Path;

use anyhow::{bail, Context, Result};

use heroline::player::{play_banner, PlaybackResult, PlayerOptions};
use heroline::theme::{current_theme, resolve_theme, Theme};

use super::load_config;

/// Play the banner until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config_path: Option<&Path>,
    plain: bool,
    theme: Option<&str>,
    cycles: Option<usize>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let phrases = config.phrases().context("Invalid banner phrases")?;

    let mut options = PlayerOptions::from_config(&config);
    options.cycles = cycles;
    if let Some(name) = theme {
        options.theme = match resolve_theme(name) {
            Some(theme) => theme,
            None => bail!(
                "Unknown theme '{}' (expected one of: {})",
                name,
                Theme::NAMES.join(", ")
            ),
        };
    }

    let result = play_banner(phrases, config.timings(), &options, plain)?;
    if result == PlaybackResult::Interrupted {
        eprintln!("{}", current_theme().secondary_text("Interrupted"));
    }
    Ok(())
}
