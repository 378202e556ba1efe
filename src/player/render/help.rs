//! Help overlay rendering for the banner player.
//!
//! Displays a centered help box with all available keyboard shortcuts.

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Animation",
    "    r          Restart from first phrase",
    "",
    "  General",
    "    ?          Show this help",
    "    q / Esc    Quit",
    "    Ctrl+C     Quit",
    "",
    "       Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 44;

/// Calculate the centered rectangle for the help box.
///
/// # Arguments
/// * `area` - The full terminal area
///
/// # Returns
/// The box area, clipped to `area` on small terminals
pub fn help_area(area: Rect) -> Rect {
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let width = HELP_BOX_WIDTH.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the help overlay on top of whatever was drawn.
pub fn render_help(f: &mut Frame, theme: &Theme) {
    let area = help_area(f.area());
    let lines: Vec<Line<'static>> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();

    let block = Block::default()
        .title(" heroline help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme.accent_bold_style());
    let help = Paragraph::new(lines)
        .style(theme.text_style())
        .block(block);

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
