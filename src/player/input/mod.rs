//! Input handling for the banner player.

mod keyboard;

pub use keyboard::handle_key_event;
