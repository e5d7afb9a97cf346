//! Runtime configuration read from the environment.
//!
//! - `NEON_TETRIS_SEED`: piece sequence seed (default: derived from the clock)
//! - `NEON_TETRIS_TICK_MS`: driver step in milliseconds (default 16)
//! - `NEON_TETRIS_HIGHSCORE_PATH`: high score file (default under the XDG
//!   data directory)

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub tick_ms: u32,
    pub high_score_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            high_score_path: PathBuf::from("highscore.json"),
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let seed = env::var("NEON_TETRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = env::var("NEON_TETRIS_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        let high_score_path = env::var_os("NEON_TETRIS_HIGHSCORE_PATH")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_high_score_path);

        Self {
            seed,
            tick_ms,
            high_score_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn default_high_score_path() -> PathBuf {
    let base = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".local");
                p.push("share");
                p
            })
        });

    match base {
        Some(mut path) => {
            path.push("neon-tetris");
            path.push("highscore.json");
            path
        }
        None => PathBuf::from("highscore.json"),
    }
}
