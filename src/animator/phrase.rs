//! Banner phrases.

use std::ops::Range;
use std::time::Duration;

use super::error::AnimatorError;
use super::grapheme;

/// An immutable phrase of the banner cycle.
///
/// The text is split into graphemes once, at construction. An optional
/// highlight marks a grapheme range that the presentation layer colours
/// differently while it is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    /// Byte offset of every grapheme boundary (`len() + 1` entries)
    boundaries: Vec<usize>,
    highlight: Option<Range<usize>>,
    type_interval: Option<Duration>,
}

impl Phrase {
    /// Create a phrase without highlight or timing override.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = grapheme::boundaries(&text);
        Self {
            text,
            boundaries,
            highlight: None,
            type_interval: None,
        }
    }

    /// Highlight graphemes `range.start..range.end`.
    ///
    /// The range must be non-empty and lie within the phrase.
    pub fn with_highlight(mut self, range: Range<usize>) -> Result<Self, AnimatorError> {
        if range.start >= range.end || range.end > self.len() {
            return Err(AnimatorError::InvalidHighlight {
                phrase: self.text,
                start: range.start,
                end: range.end,
                len: self.boundaries.len() - 1,
            });
        }
        self.highlight = Some(range);
        Ok(self)
    }

    /// Highlight the first occurrence of `needle`.
    ///
    /// The match has to start and end on grapheme boundaries; a needle that
    /// would cut a cluster in half counts as not found.
    pub fn with_highlight_text(self, needle: &str) -> Result<Self, AnimatorError> {
        let not_found = || AnimatorError::HighlightNotFound {
            phrase: self.text.clone(),
            needle: needle.to_string(),
        };
        if needle.is_empty() {
            return Err(not_found());
        }
        let byte_start = self.text.find(needle).ok_or_else(not_found)?;
        let byte_end = byte_start + needle.len();
        let start = self
            .boundaries
            .binary_search(&byte_start)
            .map_err(|_| not_found())?;
        let end = self
            .boundaries
            .binary_search(&byte_end)
            .map_err(|_| not_found())?;
        self.with_highlight(start..end)
    }

    /// Override the typing cadence for this phrase only.
    pub fn with_type_interval(mut self, interval: Duration) -> Self {
        self.type_interval = Some(interval);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of graphemes.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first `count` graphemes (clamped to the phrase length).
    pub fn prefix(&self, count: usize) -> &str {
        let count = count.min(self.len());
        &self.text[..self.boundaries[count]]
    }

    /// The grapheme at `index`, if any.
    pub fn grapheme(&self, index: usize) -> Option<&str> {
        if index >= self.len() {
            return None;
        }
        Some(&self.text[self.boundaries[index]..self.boundaries[index + 1]])
    }

    /// The configured highlight range, unclipped.
    pub fn highlight(&self) -> Option<Range<usize>> {
        self.highlight.clone()
    }

    /// The highlight clipped to the first `revealed` graphemes.
    ///
    /// Returns `None` when nothing of the highlight has been revealed yet,
    /// so highlighting never runs ahead of the cursor.
    pub fn visible_highlight(&self, revealed: usize) -> Option<Range<usize>> {
        let range = self.highlight.as_ref()?;
        let end = range.end.min(revealed);
        (range.start < end).then(|| range.start..end)
    }

    pub fn type_interval(&self) -> Option<Duration> {
        self.type_interval
    }
}
