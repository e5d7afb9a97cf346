//! Integration tests for the game session

use neon_tetris::core::{ActivePiece, Board, GameState, Mask, PiecePhase};
use neon_tetris::types::{CoreEvent, GameAction, PieceKind, BASE_DROP_MS, TICK_MS};

/// First seed whose piece after the opening one is `kind`.
fn seed_with_next(kind: PieceKind) -> u32 {
    (1..10_000)
        .find(|&seed| {
            let mut game = GameState::new(seed);
            game.start();
            game.next_kind() == kind
        })
        .expect("some seed queues the requested kind")
}

fn park_o_bottom_left(game: &mut GameState) {
    let o = ActivePiece {
        kind: PieceKind::O,
        mask: Mask::spawn(PieceKind::O),
        row: 18,
        col: 0,
    };
    assert!(game.set_active(o));
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(12345);
    assert!(!game.started());
    assert_eq!(game.piece_phase(), PiecePhase::Gone);

    game.start();
    assert!(game.started());
    assert!(game.active().is_some());
    assert!(!game.game_over());
    assert!(!game.paused());
    assert_eq!(game.piece_phase(), PiecePhase::Falling);
}

#[test]
fn test_gravity_until_lock() {
    let mut game = GameState::new(12345);
    game.start();

    // enough gravity steps for any piece to reach the floor and lock
    for _ in 0..25 {
        game.tick(BASE_DROP_MS + 1);
    }

    let locks = game
        .take_events()
        .iter()
        .filter(|e| matches!(e, CoreEvent::Locked { .. }))
        .count();
    assert_eq!(locks, 1);
    assert!(game.active().is_some());
    assert_eq!(game.board().occupied_count() % 4, 0);
    assert!(game.board().occupied_count() >= 4);
}

#[test]
fn test_o_lock_then_full_row_scenario() {
    let mut game = GameState::new(12345);
    game.start();
    park_o_bottom_left(&mut game);
    game.hard_drop();

    assert_eq!(game.lines(), 0);
    assert_eq!(game.board().get(18, 0), Some(Some(PieceKind::O)));
    assert_eq!(game.board().get(19, 1), Some(Some(PieceKind::O)));

    // fill the rest of row 19 and clear
    let board = game.board_mut();
    for col in 2..10 {
        board.set(19, col, Some(PieceKind::ALL[col as usize % 7]));
    }
    assert_eq!(board.clear_full_lines(), 1);
    // the O's upper half dropped into row 19, nothing else is left
    assert_eq!(board.get(19, 0), Some(Some(PieceKind::O)));
    assert_eq!(board.get(19, 2), Some(None));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_blocked_spawn_is_game_over_once() {
    let mut game = GameState::new(seed_with_next(PieceKind::T));
    game.start();
    assert_eq!(game.next_kind(), PieceKind::T);
    park_o_bottom_left(&mut game);

    // occupy the T spawn cells
    let spawn = ActivePiece::spawn(PieceKind::T);
    let cells = spawn.cells();
    game.board_mut().commit(cells.iter().copied(), PieceKind::Z);
    assert!(spawn.collides(game.board()));

    game.hard_drop();

    assert!(game.game_over());
    assert!(game.active().is_none());
    let events = game.take_events();
    let overs = events
        .iter()
        .filter(|e| matches!(e, CoreEvent::GameOver { .. }))
        .count();
    assert_eq!(overs, 1);
    assert!(matches!(
        events.first(),
        Some(CoreEvent::Locked {
            kind: PieceKind::O,
            ..
        })
    ));

    // nothing else happens until restart
    for action in [GameAction::HardDrop, GameAction::SoftDrop, GameAction::Rotate] {
        assert!(!game.apply_action(action));
    }
    assert!(!game.tick(BASE_DROP_MS * 2));
    assert!(game.take_events().is_empty());

    assert!(game.apply_action(GameAction::Restart));
    assert!(!game.game_over());
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_respawned_piece_never_collides() {
    let mut game = GameState::new(2024);
    game.start();

    for _ in 0..40 {
        if game.game_over() {
            break;
        }
        game.hard_drop();
        if let Some(piece) = game.active() {
            assert!(!piece.collides(game.board()));
        }
    }
}

#[test]
fn test_line_clear_through_play() {
    let mut game = GameState::new(12345);
    game.start();
    *game.board_mut() = Board::from_rows(&["jjjjjjjj..", "llllllll.."]);
    let o = ActivePiece {
        kind: PieceKind::O,
        mask: Mask::spawn(PieceKind::O),
        row: 0,
        col: 8,
    };
    assert!(game.set_active(o));

    assert!(game.apply_action(GameAction::HardDrop));

    assert_eq!(game.lines(), 2);
    assert_eq!(game.score(), 200);
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_soft_drop_action_locks_on_floor() {
    let mut game = GameState::new(12345);
    game.start();
    park_o_bottom_left(&mut game);

    assert!(game.apply_action(GameAction::SoftDrop));
    assert_eq!(game.board().get(19, 0), Some(Some(PieceKind::O)));
    assert_eq!(game.piece_phase(), PiecePhase::Falling);
}

#[test]
fn test_gravity_waits_past_the_interval() {
    let mut game = GameState::new(12345);
    game.start();
    let row = game.active().unwrap().row;

    for _ in 0..(BASE_DROP_MS / TICK_MS) {
        assert!(!game.tick(TICK_MS));
    }
    // 62 x 16ms = 992ms, then 1000ms exactly, still no move
    assert!(!game.tick(BASE_DROP_MS - (BASE_DROP_MS / TICK_MS) * TICK_MS));
    assert_eq!(game.active().unwrap().row, row);

    assert!(game.tick(1));
    assert_eq!(game.active().unwrap().row, row + 1);
}

#[test]
fn test_pause_resume_keeps_state() {
    let mut game = GameState::new(12345);
    game.start();
    game.tick(BASE_DROP_MS / 2);
    let before = game.snapshot();

    game.apply_action(GameAction::Pause);
    for _ in 0..200 {
        game.tick(TICK_MS);
    }
    game.apply_action(GameAction::Pause);

    let after = game.snapshot();
    assert_eq!(after.active, before.active);
    assert_eq!(after.board, before.board);

    // the half interval accumulated before pausing still counts
    assert!(!game.tick(BASE_DROP_MS / 2));
    assert!(game.tick(1));
}

#[test]
fn test_snapshot_reflects_state() {
    let mut game = GameState::new(12345);
    game.start();
    game.hard_drop();

    let snap = game.snapshot();
    assert!(snap.playable());
    assert_eq!(snap.next, game.next_kind());
    assert_eq!(snap.active.map(|a| a.kind), game.active().map(|a| a.kind));
    assert_eq!(snap.ghost_row, game.ghost_row());
    assert_eq!(snap.level, 1);
    assert_eq!(snap.drop_interval_ms, 1000);
    let filled = snap.board.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(filled, 4);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Rotate,
        GameAction::HardDrop,
    ];

    let play = || {
        let mut game = GameState::new(777);
        game.start();
        for action in script {
            game.apply_action(action);
            game.tick(TICK_MS);
        }
        game.snapshot()
    };

    assert_eq!(play(), play());
}
