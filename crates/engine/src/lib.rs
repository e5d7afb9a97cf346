//! Engine crate - everything around the pure core that touches the outside
//! world: time, persistence and configuration.
//!
//! - [`clock`]: monotonic time sources (`SystemClock`, `ManualClock`)
//! - [`driver`]: fixed-step loop feeding gravity ticks to a [`GameState`](core::GameState)
//! - [`highscore`]: the single-integer high score port and its JSON file store
//! - [`config`]: environment-driven settings
//!
//! # Example
//!
//! ```
//! use neon_tetris_engine::clock::ManualClock;
//! use neon_tetris_engine::core::GameState;
//! use neon_tetris_engine::driver::Driver;
//!
//! let mut game = GameState::new(7);
//! game.start();
//!
//! let mut driver = Driver::new(ManualClock::new(0), 16);
//! driver.clock().advance(32);
//! assert_eq!(driver.pump(&mut game), 2);
//! ```

pub mod clock;
pub mod config;
pub mod driver;
pub mod highscore;

pub use neon_tetris_core as core;
pub use neon_tetris_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use driver::{Driver, Renderer};
pub use highscore::{record_final_score, HighScoreStore, JsonFileStore, MemoryStore};
