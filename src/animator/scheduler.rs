//! Injectable one-shot timers.
//!
//! The animator never touches wall-clock time directly. It schedules timers
//! through the [`Scheduler`] trait; each timer carries an event payload that
//! is handed back when the timer comes due. [`TimerQueue`] is the provided
//! implementation, generic over a [`Clock`]: [`SystemClock`] for the real
//! terminal, [`ManualClock`] for deterministic tests.
//!
//! Delivery is pull-based: the host asks the queue for due events
//! (`pop_due`) on its own thread, so callbacks never interleave.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Simulated clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Jump to `to`. Time never runs backwards, so earlier values are ignored.
    pub fn set(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Timer scheduling as seen by the animator.
pub trait Scheduler<E> {
    /// Arm a one-shot timer that yields `event` after `delay`.
    fn set_timer(&mut self, delay: Duration, event: E) -> TimerHandle;

    /// Disarm a timer. Returns false if it already fired or was cancelled.
    fn cancel_timer(&mut self, handle: TimerHandle) -> bool;

    /// Current time of the underlying clock.
    fn now(&self) -> Duration;

    /// Number of armed timers.
    fn live_timers(&self) -> usize;
}

/// Ordered queue of one-shot timers over a clock.
///
/// Timers due at the same instant are delivered in the order they were set.
#[derive(Debug)]
pub struct TimerQueue<E, C = SystemClock> {
    clock: C,
    next_id: u64,
    /// Keyed by (deadline, id) so iteration order is schedule order
    pending: BTreeMap<(Duration, u64), E>,
    deadlines: HashMap<u64, Duration>,
    /// Highest number of simultaneously armed timers ever observed
    peak_live: usize,
}

impl<E, C: Clock> TimerQueue<E, C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
            peak_live: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Deadline of the earliest armed timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// How long until the earliest timer is due (zero if already due).
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    /// Remove and return the earliest timer whose deadline has passed.
    pub fn pop_due(&mut self) -> Option<E> {
        let now = self.clock.now();
        let key = *self.pending.keys().next()?;
        if key.0 > now {
            return None;
        }
        self.deadlines.remove(&key.1);
        self.pending.remove(&key)
    }

    /// Drop every armed timer.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }

    /// Highest number of timers that were ever armed at once.
    pub fn peak_live_timers(&self) -> usize {
        self.peak_live
    }
}

impl<E> TimerQueue<E, ManualClock> {
    /// Move the simulated clock to the next deadline and return it.
    ///
    /// Returns `None` when no timer is armed.
    pub fn advance_to_next(&mut self) -> Option<Duration> {
        let deadline = self.next_deadline()?;
        self.clock.set(deadline);
        Some(self.clock.now())
    }
}

impl<E, C: Clock> Scheduler<E> for TimerQueue<E, C> {
    fn set_timer(&mut self, delay: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = self.clock.now() + delay;
        self.pending.insert((deadline, id), event);
        self.deadlines.insert(id, deadline);
        self.peak_live = self.peak_live.max(self.pending.len());
        TimerHandle(id)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.pending.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn live_timers(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_is_due_before_deadline() {
        let mut queue = TimerQueue::new(ManualClock::new());
        queue.set_timer(ms(10), "a");
        assert_eq!(queue.pop_due(), None);
        queue.clock_mut().advance(ms(9));
        assert_eq!(queue.pop_due(), None);
        queue.clock_mut().advance(ms(1));
        assert_eq!(queue.pop_due(), Some("a"));
        assert_eq!(queue.live_timers(), 0);
    }

    #[test]
    fn due_timers_pop_in_deadline_then_schedule_order() {
        let mut queue = TimerQueue::new(ManualClock::new());
        queue.set_timer(ms(20), "late");
        queue.set_timer(ms(10), "first");
        queue.set_timer(ms(10), "second");
        queue.clock_mut().advance(ms(30));
        assert_eq!(queue.pop_due(), Some("first"));
        assert_eq!(queue.pop_due(), Some("second"));
        assert_eq!(queue.pop_due(), Some("late"));
        assert_eq!(queue.pop_due(), None);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new(ManualClock::new());
        let handle = queue.set_timer(ms(5), "x");
        assert!(queue.cancel_timer(handle));
        assert!(!queue.cancel_timer(handle));
        queue.clock_mut().advance(ms(100));
        assert_eq!(queue.pop_due(), None);
    }

    #[test]
    fn cancel_after_fire_reports_false() {
        let mut queue = TimerQueue::new(ManualClock::new());
        let handle = queue.set_timer(ms(0), 1);
        assert_eq!(queue.pop_due(), Some(1));
        assert!(!queue.cancel_timer(handle));
    }

    #[test]
    fn advance_to_next_jumps_clock() {
        let mut queue = TimerQueue::new(ManualClock::new());
        assert_eq!(queue.advance_to_next(), None);
        queue.set_timer(ms(40), ());
        assert_eq!(queue.time_until_next(), Some(ms(40)));
        assert_eq!(queue.advance_to_next(), Some(ms(40)));
        assert_eq!(queue.time_until_next(), Some(Duration::ZERO));
    }

    #[test]
    fn peak_live_tracks_high_water_mark() {
        let mut queue = TimerQueue::new(ManualClock::new());
        let a = queue.set_timer(ms(1), ());
        queue.set_timer(ms(2), ());
        queue.cancel_timer(a);
        queue.set_timer(ms(3), ());
        assert_eq!(queue.live_timers(), 2);
        assert_eq!(queue.peak_live_timers(), 2);
        queue.clear();
        assert_eq!(queue.live_timers(), 0);
    }

    #[test]
    fn manual_clock_never_runs_backwards() {
        let mut clock = ManualClock::new();
        clock.advance(ms(50));
        clock.set(ms(10));
        assert_eq!(clock.now(), ms(50));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::default();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
