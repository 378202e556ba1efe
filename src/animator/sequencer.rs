//! Phase sequencing over the circular phrase list.
//!
//! ```text
//! Typing(0) -> Erasing(0) -> Typing(1) -> Erasing(1) -> ... -> Erasing(n-1) -> Typing(0)
//! ```

use std::fmt;

use serde::Serialize;

use super::error::AnimatorError;
use super::phrase::Phrase;

/// The active step of the animation cycle, tagged with the phrase index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "phase", content = "phrase", rename_all = "snake_case")]
pub enum Phase {
    Typing(usize),
    Erasing(usize),
}

impl Phase {
    /// Index of the phrase this phase operates on.
    pub fn phrase_index(self) -> usize {
        match self {
            Phase::Typing(i) | Phase::Erasing(i) => i,
        }
    }

    pub fn is_typing(self) -> bool {
        matches!(self, Phase::Typing(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Typing(i) => write!(f, "typing #{}", i),
            Phase::Erasing(i) => write!(f, "erasing #{}", i),
        }
    }
}

/// State machine over a fixed, non-empty, circular list of phrases.
#[derive(Debug, Clone)]
pub struct PhaseSequencer {
    phrases: Vec<Phrase>,
    current: Phase,
}

impl PhaseSequencer {
    /// Build a sequencer positioned at `Typing(0)`.
    pub fn new(phrases: Vec<Phrase>) -> Result<Self, AnimatorError> {
        if phrases.is_empty() {
            return Err(AnimatorError::EmptyPhraseList);
        }
        Ok(Self {
            phrases,
            current: Phase::Typing(0),
        })
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    pub fn current_phrase(&self) -> &Phrase {
        &self.phrases[self.current.phrase_index()]
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// The phase that follows the current one, without moving.
    pub fn peek_next(&self) -> Phase {
        match self.current {
            Phase::Typing(i) => Phase::Erasing(i),
            Phase::Erasing(i) => Phase::Typing((i + 1) % self.phrases.len()),
        }
    }

    /// Move to the next phase and return it.
    pub fn advance(&mut self) -> Phase {
        self.current = self.peek_next();
        self.current
    }

    /// Hard reset back to `Typing(0)`.
    pub fn reset(&mut self) -> Phase {
        self.current = Phase::Typing(0);
        self.current
    }
}
