//! Full-screen banner player.
//!
//! Runs the animator on wall-clock timers inside the alternate screen.
//! The loop sleeps in `crossterm::event::poll` until the next timer
//! deadline or caret toggle, whichever comes first.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use super::input::handle_key_event;
use super::render::{render_banner, render_help, BannerText};
use super::state::{next_wakeup, InputResult, PlayerState};
use super::{PlaybackResult, PlayerOptions};
use crate::animator::{Phrase, RealtimeController, Timings};
use crate::tui::{BannerTerminal, TerminalGuard};

/// Upper bound on a single poll so resizes and signals are noticed.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Play the banner full-screen until the user quits.
///
/// # Arguments
/// * `phrases` - Phrases to cycle through
/// * `timings` - Animation cadence
/// * `options` - Title, tagline, theme and caret blink
#[cfg(not(tarpaulin_include))]
pub fn play_native(
    phrases: Vec<Phrase>,
    timings: Timings,
    options: &PlayerOptions,
) -> Result<PlaybackResult> {
    let mut controller = RealtimeController::realtime(phrases, timings)?;
    let mut guard = TerminalGuard::enter().context("Failed to enter full-screen mode")?;
    let mut state = PlayerState::new(options.caret_blink, Instant::now());

    controller.start()?;
    info!(phrases = controller.phrases().len(), "banner started");
    let result = run_loop(&mut controller, &mut state, guard.terminal(), options);
    controller.dispose();
    result
}

#[cfg(not(tarpaulin_include))]
fn run_loop(
    controller: &mut RealtimeController,
    state: &mut PlayerState,
    terminal: &mut BannerTerminal,
    options: &PlayerOptions,
) -> Result<PlaybackResult> {
    let text = BannerText {
        title: &options.title,
        tagline: &options.tagline,
    };

    loop {
        if controller.pump() {
            state.wake_caret(Instant::now());
            state.needs_render = true;
        }
        state.tick_caret(Instant::now());

        if state.needs_render {
            let frame = controller.frame();
            terminal.draw(|f| {
                render_banner(f, &frame, &text, state.caret_visible, &options.theme);
                if state.show_help {
                    render_help(f, &options.theme);
                }
            })?;
            state.needs_render = false;
        }

        let timeout = next_wakeup(
            controller.time_until_next_timer(),
            state.time_until_blink(Instant::now()),
            MAX_POLL,
        );
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key_event(key, state) {
                    InputResult::Quit => return Ok(PlaybackResult::Quit),
                    InputResult::Reset => {
                        debug!("reset requested");
                        controller.reset()?;
                        state.wake_caret(Instant::now());
                    }
                    InputResult::Continue => {}
                }
            }
            Event::Resize(..) => state.needs_render = true,
            _ => {}
        }
    }
}
