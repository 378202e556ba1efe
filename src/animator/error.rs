//! Animator errors.

/// Errors surfaced by the animator at construction or lifecycle time.
///
/// Stale timer deliveries are not errors; they are dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimatorError {
    #[error("No phrases configured. The banner needs at least one phrase.")]
    EmptyPhraseList,

    #[error("Highlight {needle:?} does not occur in phrase {phrase:?}")]
    HighlightNotFound { phrase: String, needle: String },

    #[error("Highlight range {start}..{end} is invalid for phrase {phrase:?} ({len} graphemes)")]
    InvalidHighlight {
        phrase: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("The {name} interval must be greater than zero")]
    ZeroInterval { name: &'static str },

    #[error("Animator has been disposed and cannot be restarted")]
    Disposed,
}
