//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the full-screen banner) and ANSI escape
//! codes (for the plain single-line banner and CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (the animated phrase)
    pub text_primary: Color,
    /// Secondary/dimmed text color (title, tagline, footer)
    pub text_secondary: Color,
    /// Highlighted part of a phrase
    pub highlight: Color,
    /// Blinking caret
    pub caret: Color,
    /// Accent color for keys and other important elements
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::crimson()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`].
    pub const NAMES: [&'static str; 3] = ["crimson", "classic", "ocean"];

    /// Banner theme - white text with the name highlighted in crimson.
    pub fn crimson() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::Gray,
            highlight: Color::Rgb(0x9d, 0x02, 0x08),
            caret: Color::White,
            accent: Color::Red,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Classic terminal theme - standard ANSI colors only.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            highlight: Color::Yellow,
            caret: Color::Yellow,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            highlight: Color::LightBlue,
            caret: Color::LightCyan,
            accent: Color::LightCyan,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// No colors at all (used when `NO_COLOR` is set).
    pub fn monochrome() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            highlight: Color::Reset,
            caret: Color::Reset,
            accent: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
        }
    }

    /// Look up a theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "crimson" => Some(Self::crimson()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for the animated phrase.
    pub fn text_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the highlighted part of a phrase.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the caret.
    pub fn caret_style(&self) -> Style {
        Style::default().fg(self.caret)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the highlight color.
    pub fn highlight_text(&self, text: &str) -> String {
        paint(self.highlight, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the caret color.
    pub fn caret_text(&self, text: &str) -> String {
        paint(self.caret, text)
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Wrap `text` in the escape code for `color`, or leave it bare for
/// `Color::Reset`.
fn paint(color: Color, text: &str) -> String {
    let code = color_to_ansi(color);
    if code.is_empty() {
        text.to_string()
    } else {
        format!("{}{}{}", code, text, ANSI_RESET)
    }
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> String {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Rgb(r, g, b) => return format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => return format!("\x1b[38;5;{}m", i),
        // Reset means "terminal default": emit nothing
        _ => "",
    };
    code.to_string()
}

/// Whether the `NO_COLOR` convention asks us to skip colors.
pub fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Resolve the theme to use: `name` if given and known, monochrome under
/// `NO_COLOR`.
pub fn resolve_theme(name: &str) -> Option<Theme> {
    let theme = Theme::by_name(name)?;
    if no_color() {
        Some(Theme::monochrome())
    } else {
        Some(theme)
    }
}

/// Theme for plain CLI messages (no config lookup).
pub fn current_theme() -> Theme {
    if no_color() {
        Theme::monochrome()
    } else {
        Theme::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_crimson() {
        let theme = Theme::default();
        assert_eq!(theme.highlight, Color::Rgb(0x9d, 0x02, 0x08));
        assert_eq!(theme.text_primary, Color::White);
    }

    #[test]
    fn by_name_knows_every_listed_theme() {
        for name in Theme::NAMES {
            assert!(Theme::by_name(name).is_some(), "missing theme {}", name);
        }
        assert_eq!(Theme::by_name("OCEAN"), Some(Theme::ocean()));
        assert_eq!(Theme::by_name("neon"), None);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::classic();
        assert_eq!(theme.text_style().fg, Some(Color::White));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.highlight_style().fg, Some(Color::Yellow));
        assert_eq!(theme.caret_style().fg, Some(Color::Yellow));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::classic();

        let highlight = theme.highlight_text("Max");
        assert!(highlight.starts_with("\x1b[33m"));
        assert!(highlight.ends_with("\x1b[0m"));
        assert!(highlight.contains("Max"));

        let crimson = Theme::crimson().highlight_text("Aditya");
        assert!(crimson.starts_with("\x1b[38;2;157;2;8m"));
    }

    #[test]
    fn message_helpers_use_their_colors() {
        let theme = Theme::classic();
        assert_eq!(theme.accent_text("path"), "\x1b[33mpath\x1b[0m");
        assert_eq!(theme.error_text("failed"), "\x1b[31mfailed\x1b[0m");
        assert_eq!(theme.success_text("ok"), "\x1b[32mok\x1b[0m");
    }

    #[test]
    fn monochrome_emits_no_escapes() {
        let theme = Theme::monochrome();
        assert_eq!(theme.primary_text("plain"), "plain");
        assert_eq!(theme.highlight_text("plain"), "plain");
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::Gray), "\x1b[37m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Indexed(208)), "\x1b[38;5;208m");
        assert_eq!(color_to_ansi(Color::Reset), "");
    }
}
