//! Full-screen banner rendering.
//!
//! Draws the title, the animated phrase with its caret, the tagline and the
//! keybinding footer, all centered in the terminal.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::animator::BannerFrame;
use crate::theme::Theme;
use crate::tui::footer::render_footer;

/// Caret glyph drawn after the displayed text.
pub const CARET: &str = "|";

/// Footer key hints for the banner player.
pub const FOOTER_KEYS: &[(&str, &str)] = &[("r", "restart"), ("?", "help"), ("q", "quit")];

/// Static text around the animated phrase.
#[derive(Debug, Clone, Default)]
pub struct BannerText<'a> {
    pub title: &'a str,
    pub tagline: &'a str,
}

/// Build the styled line for one animation frame.
///
/// The highlighted segment gets the highlight style, the rest the primary
/// text style. When `caret_visible` is false the caret slot is a space so the
/// line width stays stable.
pub fn build_banner_line(frame: &BannerFrame, caret_visible: bool, theme: &Theme) -> Line<'static> {
    let (before, highlighted, after) = frame.segments();
    let mut spans = Vec::with_capacity(4);

    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), theme.text_style()));
    }
    if !highlighted.is_empty() {
        spans.push(Span::styled(highlighted.to_string(), theme.highlight_style()));
    }
    if !after.is_empty() {
        spans.push(Span::styled(after.to_string(), theme.text_style()));
    }

    let caret = if caret_visible { CARET } else { " " };
    spans.push(Span::styled(caret.to_string(), theme.caret_style()));

    Line::from(spans)
}

/// Split `area` into (title, phrase, tagline, footer) rows.
///
/// The three banner rows sit in the vertical middle, the footer on the last
/// row.
pub fn banner_layout(area: Rect) -> [Rect; 4] {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let body = outer[0];
    let top_pad = body.height.saturating_sub(5) / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_pad),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(body);

    [rows[1], rows[3], rows[5], outer[1]]
}

/// Render the whole banner screen.
pub fn render_banner(
    f: &mut Frame,
    banner: &BannerFrame,
    text: &BannerText<'_>,
    caret_visible: bool,
    theme: &Theme,
) {
    let [title_area, phrase_area, tagline_area, footer_area] = banner_layout(f.area());

    let title = Paragraph::new(text.title.to_string())
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    f.render_widget(title, title_area);

    let phrase =
        Paragraph::new(build_banner_line(banner, caret_visible, theme)).alignment(Alignment::Center);
    f.render_widget(phrase, phrase_area);

    let tagline = Paragraph::new(text.tagline.to_string())
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    f.render_widget(tagline, tagline_area);

    render_footer(f, footer_area, FOOTER_KEYS, theme);
}
