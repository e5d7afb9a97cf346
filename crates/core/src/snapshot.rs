//! Read-only view of a game for renderers and observers.

use crate::piece::ActivePiece;
use crate::pieces::Mask;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub mask: Mask,
    pub row: i8,
    pub col: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            mask: value.mask,
            row: value.row,
            col: value.col,
        }
    }
}

impl ActiveSnapshot {
    /// Whether the piece covers board cell (row, col)
    pub fn covers(&self, row: i8, col: i8) -> bool {
        let (r, c) = (row - self.row, col - self.col);
        r >= 0 && c >= 0 && self.mask.is_filled(r as usize, c as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_row: Option<i8>,
    pub next: PieceKind,
    pub paused: bool,
    pub game_over: bool,
    pub started: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }

    /// Whether the landing preview of the active piece covers (row, col)
    pub fn ghost_covers(&self, row: i8, col: i8) -> bool {
        match (self.active, self.ghost_row) {
            (Some(active), Some(ghost)) => ActiveSnapshot { row: ghost, ..active }.covers(row, col),
            _ => false,
        }
    }

    /// What a renderer should draw at (row, col): the active piece first,
    /// then the settled board.
    pub fn cell_at(&self, row: i8, col: i8) -> Cell {
        if let Some(active) = self.active {
            if active.covers(row, col) {
                return Some(active.kind);
            }
        }
        if row < 0 || col < 0 {
            return None;
        }
        self.board
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_row: None,
            next: PieceKind::I,
            paused: false,
            game_over: false,
            started: false,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_prefers_active() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = Some(PieceKind::Z);
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::O,
            mask: Mask::spawn(PieceKind::O),
            row: 0,
            col: 4,
        });

        assert_eq!(snap.cell_at(0, 4), Some(PieceKind::O));
        assert_eq!(snap.cell_at(1, 5), Some(PieceKind::O));
        assert_eq!(snap.cell_at(2, 4), None);
        assert_eq!(snap.cell_at(19, 0), Some(PieceKind::Z));
        assert_eq!(snap.cell_at(-1, 0), None);
    }

    #[test]
    fn test_ghost_covers_landing_cells() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::O,
            mask: Mask::spawn(PieceKind::O),
            row: 0,
            col: 0,
        });
        snap.ghost_row = Some(18);

        assert!(snap.ghost_covers(19, 1));
        assert!(!snap.ghost_covers(0, 0));
    }

    #[test]
    fn test_default_is_not_playable() {
        assert!(!GameSnapshot::default().playable());
    }
}
