//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`GameAction`](types::GameAction)
//! intents. Each intent is applied to the game immediately by the caller;
//! there is no key-repeat or buffering layer.

pub mod map;

pub use neon_tetris_types as types;

pub use map::{action_for, handle_key_event, help_lines, should_quit, BINDINGS};
