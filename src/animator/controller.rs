//! Animation controller.
//!
//! Owns the animation state and is the only thing allowed to change it.
//! It starts exactly one ticker per phase, stops the other one before doing
//! so, and stamps every timer with the current [`Generation`]. Any timer that
//! comes due under an older generation was cancelled logically and is
//! dropped on arrival.

use std::ops::Range;
use std::time::Duration;

use tracing::{debug, trace, warn};

use super::error::AnimatorError;
use super::frame::BannerFrame;
use super::phrase::Phrase;
use super::scheduler::{Clock, ManualClock, Scheduler, SystemClock, TimerQueue};
use super::sequencer::{Phase, PhaseSequencer};
use super::ticker::{
    ErasingEvent, ErasingTicker, Generation, TimerEvent, TypingEvent, TypingTicker, TypingTiming,
};

/// Static cadence of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between reveals (phrases may override)
    pub type_interval: Duration,
    /// Delay between removals
    pub erase_interval: Duration,
    /// Pause after a phrase is fully typed
    pub hold_delay: Duration,
    /// Graphemes revealed per typing tick
    pub chars_per_tick: usize,
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_millis(100, 50, 1500)
    }
}

impl Timings {
    pub fn from_millis(type_ms: u64, erase_ms: u64, hold_ms: u64) -> Self {
        Self {
            type_interval: Duration::from_millis(type_ms),
            erase_interval: Duration::from_millis(erase_ms),
            hold_delay: Duration::from_millis(hold_ms),
            chars_per_tick: 1,
        }
    }

    /// Tick intervals must be non-zero. A zero hold is fine.
    pub fn validate(&self) -> Result<(), AnimatorError> {
        if self.type_interval.is_zero() {
            return Err(AnimatorError::ZeroInterval { name: "typing" });
        }
        if self.erase_interval.is_zero() {
            return Err(AnimatorError::ZeroInterval { name: "erasing" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Constructed, not yet started
    Idle,
    Running,
    /// Terminal: all timers cancelled, restart refused
    Disposed,
}

/// Drives the type / hold / erase / advance cycle.
#[derive(Debug)]
pub struct AnimationController<S = TimerQueue<TimerEvent>> {
    sequencer: PhaseSequencer,
    timings: Timings,
    scheduler: S,
    typing: TypingTicker,
    erasing: ErasingTicker,
    displayed: String,
    displayed_count: usize,
    generation: Generation,
    lifecycle: Lifecycle,
    cycles: usize,
}

impl<S: Scheduler<TimerEvent>> AnimationController<S> {
    /// Validate the configuration and build an idle controller.
    ///
    /// Nothing is scheduled until [`start`](Self::start).
    pub fn new(
        phrases: Vec<Phrase>,
        timings: Timings,
        scheduler: S,
    ) -> Result<Self, AnimatorError> {
        timings.validate()?;
        if phrases
            .iter()
            .any(|p| p.type_interval().is_some_and(|d| d.is_zero()))
        {
            return Err(AnimatorError::ZeroInterval { name: "phrase typing" });
        }
        let sequencer = PhaseSequencer::new(phrases)?;
        Ok(Self {
            sequencer,
            timings,
            scheduler,
            typing: TypingTicker::new(),
            erasing: ErasingTicker::new(),
            displayed: String::new(),
            displayed_count: 0,
            generation: Generation::default(),
            lifecycle: Lifecycle::Idle,
            cycles: 0,
        })
    }

    /// Mount, or remount: hard reset to `Typing(0)` with empty text.
    ///
    /// Anything in flight from a previous run is cancelled and invalidated.
    pub fn start(&mut self) -> Result<(), AnimatorError> {
        if self.lifecycle == Lifecycle::Disposed {
            warn!("start called on a disposed animator");
            return Err(AnimatorError::Disposed);
        }
        self.cancel_timers();
        self.displayed.clear();
        self.displayed_count = 0;
        self.cycles = 0;
        self.lifecycle = Lifecycle::Running;
        let phase = self.sequencer.reset();
        debug!(phrases = self.sequencer.phrase_count(), "animator started");
        self.begin(phase);
        Ok(())
    }

    /// Explicit phase reset. Same semantics as a remount.
    pub fn reset(&mut self) -> Result<(), AnimatorError> {
        debug!(from = %self.sequencer.current(), "animator reset");
        self.start()
    }

    /// Cancel every timer. Idempotent; no event is applied afterwards.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            trace!("dispose called on an already disposed animator");
            return;
        }
        self.cancel_timers();
        self.generation = self.generation.next();
        self.lifecycle = Lifecycle::Disposed;
        debug!("animator disposed");
    }

    /// Apply a fired timer. Returns whether the frame changed.
    ///
    /// Events from an older generation, or delivered while not running,
    /// are dropped.
    pub fn handle_timer(&mut self, event: TimerEvent) -> bool {
        if self.lifecycle != Lifecycle::Running {
            trace!(?event, "timer delivered while not running, dropped");
            return false;
        }
        if event.generation != self.generation {
            trace!(
                stale = event.generation.value(),
                current = self.generation.value(),
                "stale timer dropped"
            );
            return false;
        }

        match self.sequencer.current() {
            Phase::Typing(_) => match self.typing.on_timer(event, &mut self.scheduler) {
                Some(TypingEvent::Revealed(count)) => {
                    let phrase = self.sequencer.current_phrase();
                    self.displayed_count = count;
                    self.displayed = phrase.prefix(count).to_string();
                    true
                }
                Some(TypingEvent::Complete) => self.advance(),
                None => false,
            },
            Phase::Erasing(_) => match self.erasing.on_timer(event, &mut self.scheduler) {
                Some(ErasingEvent::Removed(rest)) => {
                    self.displayed_count -= 1;
                    self.displayed = rest;
                    true
                }
                Some(ErasingEvent::Complete) => {
                    self.displayed.clear();
                    self.displayed_count = 0;
                    self.advance();
                    true
                }
                None => false,
            },
        }
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.current()
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    /// Configured highlight of the current phrase, clipped to what is shown.
    pub fn highlight_range(&self) -> Option<Range<usize>> {
        self.sequencer
            .current_phrase()
            .visible_highlight(self.displayed_count)
    }

    /// Snapshot for rendering.
    pub fn frame(&self) -> BannerFrame {
        BannerFrame {
            text: self.displayed.clone(),
            highlight: self.highlight_range(),
            phase: self.phase(),
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn is_disposed(&self) -> bool {
        self.lifecycle == Lifecycle::Disposed
    }

    pub fn phrases(&self) -> &[Phrase] {
        self.sequencer.phrases()
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Full passes over the phrase list since the last start.
    ///
    /// Counted when the last phrase finishes erasing and typing wraps back
    /// to the first phrase.
    pub fn cycles_completed(&self) -> usize {
        self.cycles
    }

    /// Move to the next phase after a ticker completed.
    ///
    /// Returns true when the displayed frame changed.
    fn advance(&mut self) -> bool {
        self.cancel_timers();
        let next = self.sequencer.advance();
        if next == Phase::Typing(0) {
            self.cycles += 1;
            debug!(cycles = self.cycles, "cycle complete");
        }
        debug!(phase = %next, "phase advanced");
        self.begin(next);
        true
    }

    /// Start the ticker for `phase` under a fresh generation.
    fn begin(&mut self, phase: Phase) {
        debug_assert!(!self.typing.is_active() && !self.erasing.is_active());
        self.generation = self.generation.next();
        match phase {
            Phase::Typing(_) => {
                self.displayed.clear();
                self.displayed_count = 0;
                let phrase = self.sequencer.current_phrase();
                let timing = TypingTiming {
                    tick_interval: phrase.type_interval().unwrap_or(self.timings.type_interval),
                    hold_delay: self.timings.hold_delay,
                    chars_per_tick: self.timings.chars_per_tick,
                };
                self.typing
                    .start(phrase, timing, self.generation, &mut self.scheduler);
            }
            Phase::Erasing(_) => {
                self.erasing.start(
                    &self.displayed,
                    self.timings.erase_interval,
                    self.generation,
                    &mut self.scheduler,
                );
            }
        }
    }

    fn cancel_timers(&mut self) {
        self.typing.stop(&mut self.scheduler);
        self.erasing.stop(&mut self.scheduler);
    }
}

impl<C: Clock> AnimationController<TimerQueue<TimerEvent, C>> {
    /// Deliver every timer that is due. Returns whether the frame changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(event) = self.scheduler.pop_due() {
            changed |= self.handle_timer(event);
        }
        changed
    }

    /// Time until the next armed timer, if any.
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.scheduler.time_until_next()
    }
}

impl AnimationController<TimerQueue<TimerEvent, SystemClock>> {
    /// Controller on wall-clock timers.
    pub fn realtime(phrases: Vec<Phrase>, timings: Timings) -> Result<Self, AnimatorError> {
        Self::new(phrases, timings, TimerQueue::new(SystemClock::default()))
    }
}

impl AnimationController<TimerQueue<TimerEvent, ManualClock>> {
    /// Controller on a simulated clock starting at zero.
    pub fn simulated(phrases: Vec<Phrase>, timings: Timings) -> Result<Self, AnimatorError> {
        Self::new(phrases, timings, TimerQueue::new(ManualClock::new()))
    }

    /// Jump the simulated clock to the next deadline and deliver what is due.
    ///
    /// Returns the new virtual time, or `None` when nothing is scheduled.
    pub fn step(&mut self) -> Option<Duration> {
        let now = self.scheduler.advance_to_next()?;
        self.pump();
        Some(now)
    }
}
