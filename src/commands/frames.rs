//! Frames command handler

use std::path::Path;

use anyhow::{Context, Result};

use heroline::player::{format_frames, record_frames};

use super::load_config;

/// Print the first `count` frame changes on a simulated clock.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, count: usize, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let phrases = config.phrases().context("Invalid banner phrases")?;
    let frames = record_frames(phrases, config.timings(), count)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
    } else {
        print!("{}", format_frames(&frames));
    }
    Ok(())
}
