//! Banner player module
//!
//! Puts the animator on screen:
//!
//! - `native`: full-screen player (alternate screen, help overlay, reset)
//! - `plain`: single-line player with `\r` redraws, also used for pipes
//! - `headless`: frame recording on a simulated clock
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlayerState struct and shared types (InputResult)
//! - `input/`: Keyboard input handling
//! - `render/`: UI rendering (banner line, ANSI line, help overlay)
//!
//! # Usage
//!
//! ```no_run
//! use heroline::player::{play_banner, PlaybackResult, PlayerOptions};
//! use heroline::Config;
//!
//! let config = Config::default();
//! let options = PlayerOptions::from_config(&config);
//! let result = play_banner(config.phrases().unwrap(), config.timings(), &options, false).unwrap();
//! assert_eq!(result, PlaybackResult::Quit);
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::animator::{Phrase, Timings};
use crate::config::Config;
use crate::theme::Theme;

mod headless;
pub(crate) mod input;
mod native;
mod plain;
pub mod render;
pub mod state;

pub use headless::{format_frames, record_frames, TimedFrame};
pub use native::play_native;
pub use plain::{play_plain, run_plain, PlainTarget};
pub use state::{InputResult, PlayerState};

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The user quit (or the requested cycles were shown)
    Quit,
    /// Stopped by Ctrl-C
    Interrupted,
}

/// Presentation settings shared by the players.
#[derive(Debug, Clone, Default)]
pub struct PlayerOptions {
    pub title: String,
    pub tagline: String,
    pub theme: Theme,
    /// Caret blink half-period, zero for a solid caret
    pub caret_blink: Duration,
    /// Stop after this many full cycles (inline player only)
    pub cycles: Option<usize>,
}

impl PlayerOptions {
    /// Options from the config file, with the configured theme name.
    ///
    /// Unknown theme names fall back to the default theme.
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.banner.title.clone(),
            tagline: config.banner.tagline.clone(),
            theme: crate::theme::resolve_theme(&config.theme.name)
                .unwrap_or_else(crate::theme::current_theme),
            caret_blink: config.timing.caret_blink(),
            cycles: None,
        }
    }
}

/// Play full-screen, or inline when `plain` is set or stdout is not a
/// terminal.
#[cfg(not(tarpaulin_include))]
pub fn play_banner(
    phrases: Vec<Phrase>,
    timings: Timings,
    options: &PlayerOptions,
    plain: bool,
) -> Result<PlaybackResult> {
    if plain || !atty::is(atty::Stream::Stdout) {
        play_plain(phrases, timings, options)
    } else {
        play_native(phrases, timings, options)
    }
}
