//! Reveal ticker.

use std::time::Duration;

use tracing::trace;

use super::{Generation, TimerEvent, TimerKind};
use crate::animator::phrase::Phrase;
use crate::animator::scheduler::{Scheduler, TimerHandle};

/// Cadence of one typing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Delay between reveals
    pub tick_interval: Duration,
    /// Pause after the last reveal before completion
    pub hold_delay: Duration,
    /// Graphemes revealed per tick (values below 1 are treated as 1)
    pub chars_per_tick: usize,
}

/// Report from a typing tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingEvent {
    /// Total number of graphemes now revealed
    Revealed(usize),
    /// Fully revealed and the hold delay has elapsed
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    Revealing,
    Holding,
}

/// Reveals a phrase one grapheme at a time, holds, then completes once.
#[derive(Debug, Default)]
pub struct TypingTicker {
    state: State,
    revealed: usize,
    target: usize,
    tick_interval: Duration,
    hold_delay: Duration,
    chars_per_tick: usize,
    generation: Generation,
    handle: Option<TimerHandle>,
}

impl TypingTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `phrase` from zero.
    ///
    /// A run that is still active is stopped first.
    pub fn start<S: Scheduler<TimerEvent>>(
        &mut self,
        phrase: &Phrase,
        timing: TypingTiming,
        generation: Generation,
        scheduler: &mut S,
    ) {
        self.stop(scheduler);
        self.revealed = 0;
        self.target = phrase.len();
        self.tick_interval = timing.tick_interval;
        self.hold_delay = timing.hold_delay;
        self.chars_per_tick = timing.chars_per_tick.max(1);
        self.generation = generation;

        if self.target == 0 {
            self.arm_hold(scheduler);
        } else {
            self.state = State::Revealing;
            self.arm(scheduler, self.tick_interval, TimerKind::Reveal);
        }
    }

    /// Cancel the live timer. Nothing is reported for this run afterwards.
    pub fn stop<S: Scheduler<TimerEvent>>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.handle.take() {
            scheduler.cancel_timer(handle);
        }
        self.state = State::Idle;
    }

    pub fn is_active(&self) -> bool {
        self.state != State::Idle
    }

    /// Whether the ticker is in its post-typing pause.
    pub fn is_holding(&self) -> bool {
        self.state == State::Holding
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Handle a fired timer.
    ///
    /// Returns `None` for events that belong to another run or another
    /// ticker, or arrive after `stop`.
    pub fn on_timer<S: Scheduler<TimerEvent>>(
        &mut self,
        event: TimerEvent,
        scheduler: &mut S,
    ) -> Option<TypingEvent> {
        if event.generation != self.generation {
            return None;
        }
        match (self.state, event.kind) {
            (State::Revealing, TimerKind::Reveal) => {
                self.handle = None;
                let step = self.chars_per_tick.min(self.target - self.revealed);
                self.revealed += step;
                trace!(revealed = self.revealed, target = self.target, "reveal tick");
                if self.revealed >= self.target {
                    self.arm_hold(scheduler);
                } else {
                    self.arm(scheduler, self.tick_interval, TimerKind::Reveal);
                }
                Some(TypingEvent::Revealed(self.revealed))
            }
            (State::Holding, TimerKind::Hold) => {
                self.handle = None;
                self.state = State::Idle;
                Some(TypingEvent::Complete)
            }
            _ => None,
        }
    }

    fn arm_hold<S: Scheduler<TimerEvent>>(&mut self, scheduler: &mut S) {
        self.state = State::Holding;
        self.arm(scheduler, self.hold_delay, TimerKind::Hold);
    }

    fn arm<S: Scheduler<TimerEvent>>(&mut self, scheduler: &mut S, delay: Duration, kind: TimerKind) {
        debug_assert!(self.handle.is_none(), "typing ticker re-armed while a timer is live");
        let handle = scheduler.set_timer(delay, TimerEvent::new(self.generation, kind));
        self.handle = Some(handle);
    }
}
