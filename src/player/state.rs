//! Player state management
//!
//! Contains the `PlayerState` struct that holds UI-side state of the banner
//! player (help overlay, caret blink, redraw flag) as well as shared types
//! used across player modules. Animation state lives in the controller.

use std::time::{Duration, Instant};

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Restart the cycle from the first phrase
    Reset,
    /// Exit the player
    Quit,
}

/// UI state of the banner player.
#[derive(Debug)]
pub struct PlayerState {
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Whether the caret is currently drawn
    pub caret_visible: bool,
    /// Caret blink half-period (zero disables blinking)
    pub blink_interval: Duration,
    /// When the caret last toggled
    pub last_blink: Instant,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Create a new PlayerState with the caret shown.
    pub fn new(blink_interval: Duration, now: Instant) -> Self {
        Self {
            show_help: false,
            caret_visible: true,
            blink_interval,
            last_blink: now,
            needs_render: true,
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Flip the caret if its half-period has elapsed.
    ///
    /// Returns true when the caret changed.
    pub fn tick_caret(&mut self, now: Instant) -> bool {
        if self.blink_interval.is_zero() {
            return false;
        }
        if now.duration_since(self.last_blink) < self.blink_interval {
            return false;
        }
        self.caret_visible = !self.caret_visible;
        self.last_blink = now;
        self.needs_render = true;
        true
    }

    /// Show the caret solid again (typing restarts the blink cycle).
    pub fn wake_caret(&mut self, now: Instant) {
        if !self.caret_visible {
            self.needs_render = true;
        }
        self.caret_visible = true;
        self.last_blink = now;
    }

    /// Time left until the caret toggles, or `None` when blinking is off.
    pub fn time_until_blink(&self, now: Instant) -> Option<Duration> {
        if self.blink_interval.is_zero() {
            return None;
        }
        let elapsed = now.duration_since(self.last_blink);
        Some(self.blink_interval.saturating_sub(elapsed))
    }
}

/// Shortest of two optional timeouts, capped at `cap`.
pub fn next_wakeup(a: Option<Duration>, b: Option<Duration>, cap: Duration) -> Duration {
    [a, b].into_iter().flatten().fold(cap, Duration::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = PlayerState::new(ms(500), Instant::now());
        assert!(!state.show_help);
        assert!(state.caret_visible);
        assert!(state.needs_render);
    }

    #[test]
    fn caret_toggles_after_interval() {
        let start = Instant::now();
        let mut state = PlayerState::new(ms(500), start);
        state.needs_render = false;

        assert!(!state.tick_caret(start + ms(499)));
        assert!(state.caret_visible);
        assert!(state.tick_caret(start + ms(500)));
        assert!(!state.caret_visible);
        assert!(state.needs_render);
        assert!(state.tick_caret(start + ms(1000)));
        assert!(state.caret_visible);
    }

    #[test]
    fn zero_interval_disables_blinking() {
        let start = Instant::now();
        let mut state = PlayerState::new(Duration::ZERO, start);
        assert!(!state.tick_caret(start + ms(10_000)));
        assert_eq!(state.time_until_blink(start), None);
    }

    #[test]
    fn wake_caret_shows_it_again() {
        let start = Instant::now();
        let mut state = PlayerState::new(ms(100), start);
        state.tick_caret(start + ms(100));
        state.needs_render = false;
        state.wake_caret(start + ms(150));
        assert!(state.caret_visible);
        assert!(state.needs_render);
        assert_eq!(state.time_until_blink(start + ms(150)), Some(ms(100)));
    }

    #[test]
    fn toggle_help_flips_overlay() {
        let mut state = PlayerState::new(ms(100), Instant::now());
        state.toggle_help();
        assert!(state.show_help);
        state.toggle_help();
        assert!(!state.show_help);
    }

    #[test]
    fn next_wakeup_picks_shortest() {
        assert_eq!(next_wakeup(Some(ms(30)), Some(ms(10)), ms(100)), ms(10));
        assert_eq!(next_wakeup(None, Some(ms(40)), ms(100)), ms(40));
        assert_eq!(next_wakeup(None, None, ms(100)), ms(100));
        assert_eq!(next_wakeup(Some(ms(300)), None, ms(100)), ms(100));
    }
}
