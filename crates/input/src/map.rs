//! Key mapping from terminal events to game actions.
//!
//! Letters are matched case-insensitively so caps lock does not break play.
//! Key releases and Ctrl chords never produce an action.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Help text for each action, in display order
pub const BINDINGS: [(GameAction, &str); 7] = [
    (GameAction::MoveLeft, "left  h  a"),
    (GameAction::MoveRight, "right l  d"),
    (GameAction::SoftDrop, "down  j  s"),
    (GameAction::Rotate, "up    k  w"),
    (GameAction::HardDrop, "space"),
    (GameAction::Pause, "p  esc"),
    (GameAction::Restart, "r"),
];

/// Action bound to a bare key code.
pub fn action_for(code: KeyCode) -> Option<GameAction> {
    let action = match code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,
        KeyCode::Up => GameAction::Rotate,
        KeyCode::Esc => GameAction::Pause,
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => GameAction::MoveLeft,
            'l' | 'd' => GameAction::MoveRight,
            'j' | 's' => GameAction::SoftDrop,
            'k' | 'w' => GameAction::Rotate,
            'p' => GameAction::Pause,
            'r' => GameAction::Restart,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    action_for(key.code)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}

/// One `keys  action` line per binding, for help panels
pub fn help_lines() -> impl Iterator<Item = String> {
    BINDINGS
        .iter()
        .map(|(action, keys)| format!("{:<11} {}", keys, action.as_str()))
}
