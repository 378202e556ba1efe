//! Rendering components for the banner player.
//!
//! Full-screen rendering goes through ratatui (`banner`, `help`); the inline
//! fallback writes ANSI strings directly (`ansi`).

mod ansi;
mod banner;
mod help;

pub use ansi::{center_padding, redraw_line, render_ansi_line, REDRAW_PREFIX};
pub use banner::{banner_layout, build_banner_line, render_banner, BannerText, CARET, FOOTER_KEYS};
pub use help::{help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
