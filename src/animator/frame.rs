//! Render snapshots handed to the presentation layer.

use std::ops::Range;

use serde::Serialize;

use super::grapheme;
use super::sequencer::Phase;

/// What the banner shows right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerFrame {
    /// Displayed text (without caret)
    pub text: String,
    /// Highlighted grapheme range, always within the displayed text
    pub highlight: Option<Range<usize>>,
    /// Phase that produced this frame
    pub phase: Phase,
}

impl BannerFrame {
    /// Split the text into (before, highlighted, after).
    ///
    /// Without a highlight the whole text is `before`.
    pub fn segments(&self) -> (&str, &str, &str) {
        match &self.highlight {
            None => (self.text.as_str(), "", ""),
            Some(range) => {
                let offsets = grapheme::boundaries(&self.text);
                let last = offsets.len() - 1;
                let start = offsets[range.start.min(last)];
                let end = offsets[range.end.min(last)];
                (&self.text[..start], &self.text[start..end], &self.text[end..])
            }
        }
    }

    /// Whether the visible content (text and highlight) matches `other`.
    pub fn same_content(&self, other: &BannerFrame) -> bool {
        self.text == other.text && self.highlight == other.highlight
    }
}
