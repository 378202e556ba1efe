//! ANSI string rendering for the inline (non full-screen) banner.
//!
//! Produces a single line per frame that can be redrawn in place with a
//! carriage return.

use unicode_width::UnicodeWidthStr;

use super::banner::CARET;
use crate::animator::BannerFrame;
use crate::theme::Theme;

/// Carriage return plus "erase entire line".
pub const REDRAW_PREFIX: &str = "\r\x1b[2K";

/// Render a frame as an ANSI-colored string (no redraw prefix).
pub fn render_ansi_line(frame: &BannerFrame, caret_visible: bool, theme: &Theme) -> String {
    let (before, highlighted, after) = frame.segments();
    let mut out = String::with_capacity(frame.text.len() + 32);

    if !before.is_empty() {
        out.push_str(&theme.primary_text(before));
    }
    if !highlighted.is_empty() {
        out.push_str(&theme.highlight_text(highlighted));
    }
    if !after.is_empty() {
        out.push_str(&theme.primary_text(after));
    }
    out.push_str(&theme.caret_text(if caret_visible { CARET } else { " " }));
    out
}

/// Left padding that centers `text` plus the caret in `term_width` columns.
///
/// Returns 0 when the text does not fit.
pub fn center_padding(text: &str, term_width: u16) -> usize {
    let width = text.width() + CARET.width();
    (term_width as usize).saturating_sub(width) / 2
}

/// Full in-place redraw sequence for one frame.
pub fn redraw_line(
    frame: &BannerFrame,
    caret_visible: bool,
    theme: &Theme,
    term_width: Option<u16>,
) -> String {
    let pad = term_width.map_or(0, |w| center_padding(&frame.text, w));
    format!(
        "{}{}{}",
        REDRAW_PREFIX,
        " ".repeat(pad),
        render_ansi_line(frame, caret_visible, theme)
    )
}
