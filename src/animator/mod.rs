//! Typewriter banner animator
//!
//! Cycles through a fixed list of phrases: type one grapheme at a time,
//! hold, erase one grapheme at a time, advance to the next phrase, repeat.
//!
//! # Architecture
//!
//! - `grapheme`: grapheme-cluster splitting (the unit of reveal/erase)
//! - `phrase`: immutable phrase with optional highlight range
//! - `sequencer`: the circular Typing/Erasing state machine
//! - `scheduler`: injectable one-shot timers over a real or simulated clock
//! - `ticker/`: the typing and erasing tickers
//! - `controller`: owns the state, enforces one live ticker and the
//!   generation token
//! - `frame`: render snapshots
//!
//! # Usage
//!
//! ```
//! use heroline::animator::{AnimationController, Phrase, Timings};
//!
//! let phrases = vec![Phrase::new("AB"), Phrase::new("C")];
//! let mut banner = AnimationController::simulated(phrases, Timings::from_millis(10, 10, 0)).unwrap();
//! banner.start().unwrap();
//! banner.step();
//! assert_eq!(banner.displayed_text(), "A");
//! banner.dispose();
//! ```

mod controller;
mod error;
mod frame;
pub mod grapheme;
mod phrase;
pub mod scheduler;
mod sequencer;
pub mod ticker;

pub use controller::{AnimationController, Timings};
pub use error::AnimatorError;
pub use frame::BannerFrame;
pub use phrase::Phrase;
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TimerHandle, TimerQueue};
pub use sequencer::{Phase, PhaseSequencer};
pub use ticker::{Generation, TimerEvent, TimerKind};

/// Controller driven by wall-clock timers.
pub type RealtimeController = AnimationController<TimerQueue<TimerEvent, SystemClock>>;

/// Controller driven by a simulated clock.
pub type SimulatedController = AnimationController<TimerQueue<TimerEvent, ManualClock>>;
