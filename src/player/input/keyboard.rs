//! Keyboard input handling for the banner player.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::state::{InputResult, PlayerState};

/// Handle a keyboard event.
///
/// Updates UI state in place and returns the control-flow decision for the
/// main loop. Animation changes (reset) are applied by the caller.
pub fn handle_key_event(key: KeyEvent, state: &mut PlayerState) -> InputResult {
    // If help is showing, any key except quit closes it
    if state.show_help {
        return match key.code {
            KeyCode::Char('q') => InputResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputResult::Quit
            }
            _ => {
                state.toggle_help();
                InputResult::Continue
            }
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char('?') | KeyCode::Char('h') => {
            state.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            state.needs_render = true;
            InputResult::Reset
        }
        _ => InputResult::Continue,
    }
}
