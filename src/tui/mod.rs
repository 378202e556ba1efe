//! TUI (Text User Interface) module for heroline
//!
//! Terminal-based UI pieces built on ratatui/crossterm: the color theme, the
//! footer widget and the raw-mode terminal guard used by the player.

pub mod footer;
pub mod theme;
pub mod ui;

pub use theme::Theme;
pub use ui::{BannerTerminal, TerminalGuard};
