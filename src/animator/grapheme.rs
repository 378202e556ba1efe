//! Grapheme splitting.
//!
//! The animator reveals and erases text one user-perceived character at a
//! time. A "character" here is an extended grapheme cluster, so emoji with
//! skin-tone modifiers, ZWJ families, regional-indicator flags and letters
//! with combining marks always move as a single unit.

use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into its extended grapheme clusters, in order.
///
/// `join(&split(s)) == s` for every input. An empty string yields an
/// empty vector.
pub fn split(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Concatenate graphemes back into a string.
pub fn join<S: AsRef<str>>(graphemes: &[S]) -> String {
    graphemes.iter().map(AsRef::as_ref).collect()
}

/// Number of grapheme clusters in `text`.
pub fn count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offsets of every grapheme boundary in `text`.
///
/// The result always starts with `0` and ends with `text.len()`, so a text
/// with `n` graphemes has `n + 1` boundaries.
pub fn boundaries(text: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = text.grapheme_indices(true).map(|(idx, _)| idx).collect();
    offsets.push(text.len());
    offsets
}

/// The first `n` graphemes of `text`. Returns all of `text` if it is shorter.
pub fn prefix(text: &str, n: usize) -> &str {
    match text.grapheme_indices(true).nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Graphemes `start..end` of `text`, clamped to the text length.
pub fn slice(text: &str, start: usize, end: usize) -> &str {
    let offsets = boundaries(text);
    let last = offsets.len() - 1;
    let start = start.min(last);
    let end = end.clamp(start, last);
    &text[offsets[start]..offsets[end]]
}
