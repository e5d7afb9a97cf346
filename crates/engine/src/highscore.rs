//! High-score persistence port.
//!
//! The core only reports a final score; remembering the best one is the job
//! of a [`HighScoreStore`]. The file-backed store keeps a single integer in a
//! small JSON document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Storage for the single best score
pub trait HighScoreStore {
    /// Best score recorded so far (0 when nothing is stored)
    fn load(&self) -> Result<u32>;

    /// Replace the stored best score
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Compare `score` with the stored best and store it if it is higher.
///
/// Returns true when a new high score was written.
pub fn record_final_score<S: HighScoreStore + ?Sized>(store: &mut S, score: u32) -> Result<bool> {
    let best = store.load()?;
    if score <= best {
        return Ok(false);
    }
    store.save(score)?;
    info!("new high score {} (previous {})", score, best);
    Ok(true)
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
struct HighScoreFile {
    #[serde(default)]
    high_score: u32,
}

/// High score kept as `{"high_score": n}` in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("reading high score from {}", self.path.display()))
            }
        };

        match serde_json::from_slice::<HighScoreFile>(&bytes) {
            Ok(file) => Ok(file.high_score),
            Err(e) => {
                warn!(
                    "ignoring unreadable high score file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(0)
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}

/// In-memory store for tests and sessions without a writable home
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.best)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.best = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!("neon_tetris_{tag}_{nanos}/highscore.json"))
    }

    #[test]
    fn test_record_only_when_beaten() {
        let mut store = MemoryStore::new(500);
        assert!(!record_final_score(&mut store, 400).unwrap());
        assert!(!record_final_score(&mut store, 500).unwrap());
        assert!(record_final_score(&mut store, 501).unwrap());
        assert_eq!(store.load().unwrap(), 501);
    }

    #[test]
    fn test_missing_file_is_zero() {
        let store = JsonFileStore::new(unique_temp_path("missing"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_file_roundtrip_creates_dirs() {
        let path = unique_temp_path("roundtrip");
        let mut store = JsonFileStore::new(&path);
        store.save(1200).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load().unwrap(), 1200);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_is_zero() {
        let path = unique_temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), 0);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
