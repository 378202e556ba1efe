//! Inline banner player.
//!
//! Redraws the banner on the current line with `\r` and ANSI colors. When
//! stdout is not a terminal, each frame change is printed on its own line
//! without colors or caret instead.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{cursor, queue};
use tracing::debug;

use super::render::redraw_line;
use super::state::{next_wakeup, PlayerState};
use super::{PlaybackResult, PlayerOptions};
use crate::animator::{BannerFrame, Phrase, RealtimeController, Timings};

/// Longest sleep between Ctrl-C checks.
const MAX_SLEEP: Duration = Duration::from_millis(100);

/// Where and how the inline player writes.
#[derive(Debug, Clone, Copy)]
pub struct PlainTarget {
    /// Redraw in place (terminal) or print one line per change (pipe)
    pub tty: bool,
    /// Terminal width for centering, if known
    pub width: Option<u16>,
}

impl PlainTarget {
    /// Detect the target from stdout.
    pub fn stdout() -> Self {
        let tty = atty::is(atty::Stream::Stdout);
        let width = if tty {
            crossterm::terminal::size().ok().map(|(w, _)| w)
        } else {
            None
        };
        Self { tty, width }
    }
}

/// Play the banner on stdout until Ctrl-C (or `options.cycles` full cycles).
#[cfg(not(tarpaulin_include))]
pub fn play_plain(
    phrases: Vec<Phrase>,
    timings: Timings,
    options: &PlayerOptions,
) -> Result<PlaybackResult> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = stop.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::Relaxed);
    })
    .context("Failed to install Ctrl-C handler")?;

    let mut controller = RealtimeController::realtime(phrases, timings)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_plain(
        &mut controller,
        &mut out,
        PlainTarget::stdout(),
        options,
        &stop,
    )
}

/// Drive `controller` and write frames to `out` until `stop` is set or the
/// requested number of cycles has been shown.
///
/// The controller is started here and disposed before returning.
pub fn run_plain<W: Write>(
    controller: &mut RealtimeController,
    out: &mut W,
    target: PlainTarget,
    options: &PlayerOptions,
    stop: &AtomicBool,
) -> Result<PlaybackResult> {
    controller.start()?;
    let result = plain_loop(controller, out, target, options, stop);
    controller.dispose();

    if target.tty {
        queue!(out, cursor::Show)?;
        writeln!(out)?;
    }
    out.flush()?;
    result
}

fn plain_loop<W: Write>(
    controller: &mut RealtimeController,
    out: &mut W,
    target: PlainTarget,
    options: &PlayerOptions,
    stop: &AtomicBool,
) -> Result<PlaybackResult> {
    let mut state = PlayerState::new(options.caret_blink, Instant::now());
    let mut last_frame: Option<BannerFrame> = None;

    if target.tty {
        queue!(out, cursor::Hide)?;
    }

    loop {
        if stop.load(Ordering::Relaxed) {
            debug!("interrupted");
            return Ok(PlaybackResult::Interrupted);
        }

        if controller.pump() {
            state.wake_caret(Instant::now());
        }

        let frame = controller.frame();
        let changed = last_frame
            .as_ref()
            .map_or(true, |f| !f.same_content(&frame));
        if target.tty {
            state.tick_caret(Instant::now());
            if changed || state.needs_render {
                write!(
                    out,
                    "{}",
                    redraw_line(&frame, state.caret_visible, &options.theme, target.width)
                )?;
                out.flush()?;
                state.needs_render = false;
            }
        } else if changed {
            writeln!(out, "{}", frame.text)?;
        }
        if changed {
            last_frame = Some(frame);
        }

        if options
            .cycles
            .is_some_and(|n| controller.cycles_completed() >= n)
        {
            debug!(cycles = controller.cycles_completed(), "cycle limit reached");
            return Ok(PlaybackResult::Quit);
        }

        let sleep = next_wakeup(
            controller.time_until_next_timer(),
            target.tty.then(|| state.time_until_blink(Instant::now())).flatten(),
            MAX_SLEEP,
        );
        if !sleep.is_zero() {
            thread::sleep(sleep);
        }
    }
}
