//! Game state module - one owned game session
//!
//! Ties together the board, the active piece, the next-kind slot and the
//! scoring policy. Every operation takes `&mut self` and runs to completion,
//! so input intents and gravity ticks can be interleaved freely by the
//! driver without ever exposing a half-applied state.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::{
    board::Board,
    piece::ActivePiece,
    rng::NextKindQueue,
    scoring::{calculate_score, get_drop_interval_ms},
    snapshot::{ActiveSnapshot, GameSnapshot},
};
use crate::types::*;

/// Capacity of the pending event buffer; older events are dropped first.
const EVENT_CAPACITY: usize = 8;

/// Lifecycle of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiecePhase {
    /// The piece can still move down
    Falling,
    /// Downward movement is blocked; the next gravity step commits it
    Locking,
    /// No active piece (not started, or game over)
    Gone,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    queue: NextKindQueue,
    /// Pending lock / game-over events (consumed by observers).
    events: ArrayVec<CoreEvent, EVENT_CAPACITY>,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            queue: NextKindQueue::new(seed),
            events: ArrayVec::new(),
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("game start (seed {})", self.queue.seed());
        self.spawn_piece();
    }

    /// Throw the current session away and start a fresh one.
    ///
    /// The piece sequence continues from the current RNG state, so a restart
    /// does not replay the previous game.
    pub fn restart(&mut self) {
        *self = Self::new(self.queue.rng_state());
        self.start();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_kind(&self) -> PieceKind {
        self.queue.peek()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups (tests, replays).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece, for scripted setups.
    ///
    /// Returns false (and changes nothing) when `piece` would overlap the
    /// board.
    pub fn set_active(&mut self, piece: ActivePiece) -> bool {
        if piece.collides(&self.board) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Where the active piece is in its lifecycle
    pub fn piece_phase(&self) -> PiecePhase {
        match self.active {
            None => PiecePhase::Gone,
            Some(piece) if piece.is_grounded(&self.board) => PiecePhase::Locking,
            Some(_) => PiecePhase::Falling,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_row = self.ghost_row();
        out.next = self.queue.peek();
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.started = self.started;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn push_event(&mut self, event: CoreEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Take and clear the pending lock / game-over events, oldest first.
    pub fn take_events(&mut self) -> ArrayVec<CoreEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    /// Spawn a new piece from the next-kind slot.
    ///
    /// Does nothing while a piece is still live. If the fresh piece overlaps
    /// the stack the game is over; this is a one-way transition and the piece
    /// is not placed.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        if self.game_over || self.active.is_some() {
            return false;
        }

        let kind = self.queue.draw();
        let piece = ActivePiece::spawn(kind);

        if piece.collides(&self.board) {
            self.active = None;
            self.game_over = true;
            info!("game over: {:?} blocked at spawn, score {}", kind, self.score);
            self.push_event(CoreEvent::GameOver { score: self.score });
            return false;
        }

        self.active = Some(piece);
        self.drop_timer_ms = 0;
        debug!("spawn {:?} (next {:?})", kind, self.queue.peek());

        true
    }

    /// Current gravity interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    /// Try to move the active piece by (d_col, d_row)
    pub fn try_move(&mut self, d_col: i8, d_row: i8) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.board, d_col, d_row),
            None => false,
        }
    }

    /// Try to rotate the active piece clockwise with wall kicks
    pub fn try_rotate(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.try_rotate(&self.board).is_some(),
            None => false,
        }
    }

    /// Move one row down; lock the piece if it cannot move.
    ///
    /// Returns true when the piece moved, false when it locked (or there was
    /// no piece).
    pub fn soft_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }

        let mut distance: u32 = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }

        self.lock_piece();
        distance
    }

    /// Commit the active piece into the board, clear lines and spawn the next
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.commit(active.cells(), active.kind);

        let cleared = self.board.clear_full_lines() as u32;
        let result = calculate_score(cleared, self.level, self.lines);

        self.score = self.score.saturating_add(result.points);
        self.lines = result.lines_total;
        self.level = result.level;

        if cleared > 0 {
            debug!(
                "lock {:?}: cleared {} line(s) for {} points",
                active.kind, cleared, result.points
            );
        }
        if result.leveled_up {
            info!("level {} (drop interval {}ms)", self.level, self.drop_interval_ms());
        }

        self.push_event(CoreEvent::Locked {
            kind: active.kind,
            lines_cleared: cleared,
            points: result.points,
        });

        self.spawn_piece();
    }

    /// Row the active piece would land on
    pub fn ghost_row(&self) -> Option<i8> {
        self.active.map(|piece| piece.ghost_row(&self.board))
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the timer exceeds the drop interval the piece makes one downward
    /// attempt and locks if it is blocked; the timer then restarts from zero.
    /// Returns true when the board or piece changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over || !self.started || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms() {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Flip between paused and running. No-op once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over || !self.started {
            return false;
        }
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "resumed" });
        true
    }

    /// Apply a game action
    ///
    /// Movement intents are ignored while paused or after game over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => return self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                return true;
            }
            _ => {}
        }

        if self.paused || self.game_over {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                let had_piece = self.active.is_some();
                self.soft_drop();
                had_piece
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                let had_piece = self.active.is_some();
                self.hard_drop();
                had_piece
            }
            GameAction::Pause | GameAction::Restart => false,
        }
    }

    /// Check if the active piece can move in the given direction
    pub fn can_move(&self, d_col: i8, d_row: i8) -> bool {
        self.active
            .map(|piece| piece.can_move(&self.board, d_col, d_row))
            .unwrap_or(false)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
