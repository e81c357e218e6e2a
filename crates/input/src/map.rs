//! Key mapping from terminal events to view actions.

use crate::types::ViewAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to view actions. Unlisted keys map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewAction> {
    if should_quit(key) {
        return Some(ViewAction::Quit);
    }

    match key.code {
        KeyCode::Char('h') => Some(ViewAction::MoveLeft),
        KeyCode::Char('l') => Some(ViewAction::MoveRight),
        KeyCode::Char('k') => Some(ViewAction::MoveUp),
        KeyCode::Char('j') => Some(ViewAction::MoveDown),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ViewAction::GrowCube),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(ViewAction::ShrinkCube),
        _ => None,
    }
}

/// Check if key should stop the loop.
///
/// Raw mode swallows SIGINT, so Ctrl-C is mapped here as well as `q`.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
