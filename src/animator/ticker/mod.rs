//! Typing and erasing tickers.
//!
//! A ticker drives one phase of the cycle with a single one-shot timer that
//! it re-arms after every tick, so at any moment it holds at most one live
//! [`TimerHandle`](super::scheduler::TimerHandle). Timer events are stamped
//! with the [`Generation`] the ticker was started under; events from any
//! other generation are ignored.
//!
//! Tickers report what happened through their return values instead of
//! registered callbacks. The controller turns those reports into state.

mod erasing;
mod typing;

pub use erasing::{ErasingEvent, ErasingTicker};
pub use typing::{TypingEvent, TypingTicker, TypingTiming};

/// Epoch counter used to invalidate timers scheduled before a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// The following generation.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// What a timer was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Reveal the next grapheme(s)
    Reveal,
    /// Post-typing pause elapsed
    Hold,
    /// Remove the last grapheme
    Erase,
}

/// Payload carried by every animator timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub generation: Generation,
    pub kind: TimerKind,
}

impl TimerEvent {
    pub fn new(generation: Generation, kind: TimerKind) -> Self {
        Self { generation, kind }
    }
}
