//! Engine tests: driver timing, high score persistence and configuration

use std::env;
use std::fs;
use std::path::PathBuf;

use neon_tetris::core::{GameSnapshot, GameState};
use neon_tetris::engine::driver::MAX_CATCH_UP_TICKS;
use neon_tetris::engine::{
    record_final_score, Config, Driver, HighScoreStore, JsonFileStore, ManualClock, MemoryStore,
    Renderer,
};
use neon_tetris::types::{CoreEvent, BASE_DROP_MS, TICK_MS};

fn temp_store_path(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    env::temp_dir().join(format!("neon_tetris_it_{tag}_{nanos}/best.json"))
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<GameSnapshot>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<()> {
        self.frames.push(*snapshot);
        Ok(())
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn draw(&mut self, _snapshot: &GameSnapshot) -> anyhow::Result<()> {
        anyhow::bail!("terminal went away")
    }
}

#[test]
fn test_driver_one_second_moves_one_row() {
    let mut game = GameState::new(12345);
    game.start();
    let row = game.active().unwrap().row;
    let mut driver = Driver::new(ManualClock::new(5_000), TICK_MS);

    // 63 ticks of 16ms is 1008ms, just past the level 1 interval
    let mut delivered = 0;
    for _ in 0..63 {
        driver.clock().advance(TICK_MS as u64);
        delivered += driver.pump(&mut game);
    }

    assert_eq!(delivered, 63);
    assert_eq!(game.active().unwrap().row, row + 1);
}

#[test]
fn test_driver_idle_before_start() {
    let mut game = GameState::new(1);
    let mut driver = Driver::new(ManualClock::new(0), TICK_MS);

    driver.clock().advance(BASE_DROP_MS as u64);
    assert_eq!(driver.pump(&mut game), 0);

    game.start();
    driver.clock().advance(TICK_MS as u64);
    assert_eq!(driver.pump(&mut game), 1);
}

#[test]
fn test_driver_stall_is_bounded() {
    let mut game = GameState::new(12345);
    game.start();
    let mut driver = Driver::new(ManualClock::new(0), TICK_MS);

    driver.clock().advance(60_000);
    assert_eq!(driver.pump(&mut game), MAX_CATCH_UP_TICKS);
    assert!(!game.game_over());
}

#[test]
fn test_resync_drops_pending_time() {
    let mut game = GameState::new(12345);
    game.start();
    let mut driver = Driver::new(ManualClock::new(0), TICK_MS);

    driver.clock().advance(100);
    driver.resync();
    assert_eq!(driver.pump(&mut game), 0);
    assert_eq!(driver.time_until_next_tick().as_millis(), TICK_MS as u128);
}

#[test]
fn test_frame_hands_renderer_current_state() {
    let mut game = GameState::new(12345);
    game.start();
    let mut driver = Driver::new(ManualClock::new(0), TICK_MS);
    let mut renderer = RecordingRenderer::default();

    let queued = game.next_kind();
    driver.frame(&mut game, &mut renderer).unwrap();
    game.hard_drop();
    driver.frame(&mut game, &mut renderer).unwrap();

    assert_eq!(renderer.frames.len(), 2);
    assert_eq!(renderer.frames[0].next, queued);
    assert!(renderer.frames[0].board.iter().flatten().all(|c| c.is_none()));
    assert_eq!(renderer.frames[1].active.map(|a| a.kind), Some(queued));
    assert_eq!(renderer.frames[1], game.snapshot());
}

#[test]
fn test_frame_propagates_renderer_error() {
    let mut game = GameState::new(12345);
    game.start();
    let mut driver = Driver::new(ManualClock::new(0), TICK_MS);

    let err = driver.frame(&mut game, &mut FailingRenderer).unwrap_err();
    assert!(err.to_string().contains("terminal"));
}

#[test]
fn test_game_over_score_reaches_store() {
    let mut game = GameState::new(12345);
    game.start();
    let mut store = MemoryStore::new(0);

    // stack pieces in the spawn column until the game ends
    let mut final_score = None;
    for _ in 0..200 {
        game.hard_drop();
        for event in game.take_events() {
            if let CoreEvent::GameOver { score } = event {
                final_score = Some(score);
            }
        }
        if game.game_over() {
            break;
        }
    }

    let score = final_score.expect("stacking in place ends the game");
    assert_eq!(score, game.score());
    let beaten = record_final_score(&mut store, score).unwrap();
    assert_eq!(beaten, score > 0);
}

#[test]
fn test_json_store_file_format() {
    let path = temp_store_path("format");
    let mut store = JsonFileStore::new(&path);
    assert_eq!(store.path(), path.as_path());

    assert!(record_final_score(&mut store, 300).unwrap());
    assert!(!record_final_score(&mut store, 200).unwrap());

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["high_score"], 300);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_json_store_missing_field_is_zero() {
    let path = temp_store_path("empty_object");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{}").unwrap();

    assert_eq!(JsonFileStore::new(&path).load().unwrap(), 0);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_config_from_env() {
    // all env access lives in this one test so parallel tests never race
    env::set_var("NEON_TETRIS_SEED", "4242");
    env::set_var("NEON_TETRIS_TICK_MS", "20");
    env::set_var("NEON_TETRIS_HIGHSCORE_PATH", "/tmp/nt/best.json");
    let config = Config::from_env();
    assert_eq!(config.seed, 4242);
    assert_eq!(config.tick_ms, 20);
    assert_eq!(config.high_score_path, PathBuf::from("/tmp/nt/best.json"));

    env::set_var("NEON_TETRIS_TICK_MS", "0");
    env::set_var("NEON_TETRIS_SEED", "not a number");
    env::remove_var("NEON_TETRIS_HIGHSCORE_PATH");
    let config = Config::from_env();
    assert_eq!(config.tick_ms, TICK_MS);
    assert!(config.high_score_path.ends_with("highscore.json"));

    env::remove_var("NEON_TETRIS_SEED");
    env::remove_var("NEON_TETRIS_TICK_MS");
}
