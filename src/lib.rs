//! Neon Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benches can use `neon_tetris::{core, engine,
//! input, types}`.

pub use neon_tetris_core as core;
pub use neon_tetris_engine as engine;
pub use neon_tetris_input as input;
pub use neon_tetris_types as types;
