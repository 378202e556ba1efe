//! Erase ticker.

use std::time::Duration;

use tracing::trace;

use super::{Generation, TimerEvent, TimerKind};
use crate::animator::grapheme;
use crate::animator::scheduler::{Scheduler, TimerHandle};

/// Report from an erasing tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErasingEvent {
    /// One grapheme was removed; carries the text that remains
    Removed(String),
    /// The last grapheme was removed (or there was nothing to erase).
    /// The remaining text is empty.
    Complete,
}

/// Removes graphemes from the end of a text snapshot until it is empty.
#[derive(Debug, Default)]
pub struct ErasingTicker {
    active: bool,
    /// Text captured at start; never re-read while erasing
    snapshot: String,
    boundaries: Vec<usize>,
    remaining: usize,
    tick_interval: Duration,
    generation: Generation,
    handle: Option<TimerHandle>,
}

impl ErasingTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin erasing `current_text`.
    ///
    /// The text is split into graphemes once, here. A run that is still
    /// active is stopped first.
    pub fn start<S: Scheduler<TimerEvent>>(
        &mut self,
        current_text: &str,
        tick_interval: Duration,
        generation: Generation,
        scheduler: &mut S,
    ) {
        self.stop(scheduler);
        self.snapshot = current_text.to_string();
        self.boundaries = grapheme::boundaries(current_text);
        self.remaining = self.boundaries.len() - 1;
        self.tick_interval = tick_interval;
        self.generation = generation;
        self.active = true;
        self.arm(scheduler);
    }

    /// Cancel the live timer. Nothing is reported for this run afterwards.
    pub fn stop<S: Scheduler<TimerEvent>>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.handle.take() {
            scheduler.cancel_timer(handle);
        }
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Graphemes still on screen.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Handle a fired timer. See [`TypingTicker::on_timer`](super::TypingTicker::on_timer).
    pub fn on_timer<S: Scheduler<TimerEvent>>(
        &mut self,
        event: TimerEvent,
        scheduler: &mut S,
    ) -> Option<ErasingEvent> {
        if !self.active || event.generation != self.generation || event.kind != TimerKind::Erase {
            return None;
        }
        self.handle = None;
        self.remaining = self.remaining.saturating_sub(1);
        trace!(remaining = self.remaining, "erase tick");

        if self.remaining == 0 {
            self.active = false;
            return Some(ErasingEvent::Complete);
        }
        self.arm(scheduler);
        let rest = &self.snapshot[..self.boundaries[self.remaining]];
        Some(ErasingEvent::Removed(rest.to_string()))
    }

    fn arm<S: Scheduler<TimerEvent>>(&mut self, scheduler: &mut S) {
        debug_assert!(self.handle.is_none(), "erasing ticker re-armed while a timer is live");
        let event = TimerEvent::new(self.generation, TimerKind::Erase);
        self.handle = Some(scheduler.set_timer(self.tick_interval, event));
    }
}
