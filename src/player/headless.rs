//! Headless frame recording on a simulated clock.
//!
//! Used by `heroline frames` and by tests that need the exact frame
//! sequence without waiting on wall-clock timers.

use serde::Serialize;

use crate::animator::{AnimatorError, BannerFrame, Phrase, SimulatedController, Timings};

/// A frame together with the virtual time it appeared at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedFrame {
    /// Milliseconds since start on the simulated clock
    pub at_ms: u64,
    #[serde(flatten)]
    pub frame: BannerFrame,
}

/// Record the first `count` frame changes after start.
///
/// The initial empty frame is not included. Steps that change nothing
/// visible (hold expiry, phase handover on equal text) are skipped. Returns
/// fewer than `count` frames only when the cycle never shows anything, i.e.
/// every phrase is empty.
pub fn record_frames(
    phrases: Vec<Phrase>,
    timings: Timings,
    count: usize,
) -> Result<Vec<TimedFrame>, AnimatorError> {
    let mut controller = SimulatedController::simulated(phrases, timings)?;
    controller.start()?;

    let mut frames = Vec::with_capacity(count);
    if count == 0 {
        controller.dispose();
        return Ok(frames);
    }

    // A full cycle needs at most two silent steps per phrase between changes
    let silent_limit = 2 * controller.phrases().len() + 2;
    let mut silent_steps = 0;
    let mut last = controller.frame();

    while frames.len() < count {
        let Some(now) = controller.step() else {
            break;
        };
        let frame = controller.frame();
        if frame.same_content(&last) {
            silent_steps += 1;
            if silent_steps > silent_limit {
                break;
            }
            continue;
        }
        silent_steps = 0;
        last = frame.clone();
        frames.push(TimedFrame {
            at_ms: now.as_millis() as u64,
            frame,
        });
    }

    controller.dispose();
    Ok(frames)
}

/// Render frames as text lines: `<ms>ms <phase> "<text>"`, marking the
/// highlight with brackets.
pub fn format_frames(frames: &[TimedFrame]) -> String {
    let mut out = String::new();
    for timed in frames {
        let (before, highlighted, after) = timed.frame.segments();
        let text = if highlighted.is_empty() {
            format!("{}{}", before, after)
        } else {
            format!("{}[{}]{}", before, highlighted, after)
        };
        let at = format!("{}ms", timed.at_ms);
        let phase = timed.frame.phase.to_string();
        out.push_str(&format!("{:<7} {:<10} \"{}\"\n", at, phase, text));
    }
    out
}
