//! heroline - typewriter hero banner
//!
//! A grapheme-aware typewriter animator (type, hold, erase, next phrase)
//! with a terminal player, a keyword FAQ responder and a TOML config.

pub mod animator;
pub mod cli;
pub mod config;
pub mod faq;
pub mod logging;
pub mod player;
pub mod tui;

pub use config::Config;
pub use tui::theme;
