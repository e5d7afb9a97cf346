//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game and nothing else.
//! It has no dependencies on terminals, clocks, files or networking:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Atomic**: every move, rotation, lock and line clear runs to completion
//!   on `&mut self`; a rejected move or rotation is a no-op, not an error
//! - **Zero-allocation** on the gameplay path (flat board, `ArrayVec` cells)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, occupancy test, commit and line clearing
//! - [`pieces`]: tetromino masks, clockwise rotation and wall kicks
//! - [`piece`]: the active piece and its collision test
//! - [`rng`]: seeded uniform next-kind slot
//! - [`scoring`]: points, levels and gravity speed
//! - [`game_state`]: one game session tying it all together
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use neon_tetris_core::GameState;
//! use neon_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) from a fixed-step
//! driver with the elapsed milliseconds. Gravity moves the piece at most one
//! row per call and locks it when the move is blocked.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use neon_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, PiecePhase};
pub use piece::{collides_at, ActivePiece};
pub use pieces::{try_rotate, Mask};
pub use rng::{NextKindQueue, SimpleRng};
pub use scoring::{calculate_score, get_drop_interval_ms, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
