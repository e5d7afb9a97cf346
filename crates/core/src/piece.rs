//! Active piece - the falling tetromino and its collision test
//!
//! Every change to an [`ActivePiece`] goes through a collision check against
//! the [`Board`] first; a rejected move or rotation leaves the piece exactly
//! as it was.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{spawn_position, try_rotate, Mask};
use crate::types::{PieceKind, BOARD_WIDTH};

/// Whether `mask` placed with its top-left corner at (row, col) hits a wall,
/// the floor or a settled cell. Cells above the top never collide.
pub fn collides_at(board: &Board, mask: &Mask, row: i8, col: i8) -> bool {
    mask.cells()
        .iter()
        .any(|&(dr, dc)| board.is_occupied(row.saturating_add(dr), col.saturating_add(dc)))
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub mask: Mask,
    /// Board row of the mask's top edge (negative while above the board)
    pub row: i8,
    /// Board column of the mask's left edge
    pub col: i8,
}

impl ActivePiece {
    /// Create a new piece at its spawn position and orientation
    pub fn spawn(kind: PieceKind) -> Self {
        let (row, col) = spawn_position(kind, BOARD_WIDTH);
        Self {
            kind,
            mask: Mask::spawn(kind),
            row,
            col,
        }
    }

    /// Board cells covered by the piece, as (row, col)
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.mask
            .cells()
            .iter()
            .map(|&(dr, dc)| (self.row + dr, self.col + dc))
            .collect()
    }

    /// Whether the piece overlaps anything at its current position
    pub fn collides(&self, board: &Board) -> bool {
        collides_at(board, &self.mask, self.row, self.col)
    }

    /// Position after shifting by (d_col, d_row), as (row, col); None on overflow
    fn shifted(&self, d_col: i8, d_row: i8) -> Option<(i8, i8)> {
        Some((self.row.checked_add(d_row)?, self.col.checked_add(d_col)?))
    }

    /// Whether moving by (d_col, d_row) would stay collision-free
    pub fn can_move(&self, board: &Board, d_col: i8, d_row: i8) -> bool {
        self.shifted(d_col, d_row)
            .is_some_and(|(row, col)| !collides_at(board, &self.mask, row, col))
    }

    /// Shift the piece by (d_col, d_row) if the target is clear.
    ///
    /// Either the whole delta is applied or nothing changes.
    pub fn try_move(&mut self, board: &Board, d_col: i8, d_row: i8) -> bool {
        match self.shifted(d_col, d_row) {
            Some((row, col)) if !collides_at(board, &self.mask, row, col) => {
                self.row = row;
                self.col = col;
                true
            }
            _ => false,
        }
    }

    /// Rotate clockwise, trying the wall kicks in order.
    ///
    /// Returns the column shift applied, or None (and no change) when no
    /// candidate fits.
    pub fn try_rotate(&mut self, board: &Board) -> Option<i8> {
        let (mask, kick) = try_rotate(&self.mask, self.row, self.col, |m, r, c| {
            !collides_at(board, m, r, c)
        })?;
        self.mask = mask;
        self.col = self.col.saturating_add(kick);
        Some(kick)
    }

    /// Whether the piece rests on the floor or the stack
    pub fn is_grounded(&self, board: &Board) -> bool {
        !self.can_move(board, 0, 1)
    }

    /// Row the piece would lock at after a hard drop
    pub fn ghost_row(&self, board: &Board) -> i8 {
        let mut distance: i8 = 0;
        while !collides_at(board, &self.mask, self.row.saturating_add(distance + 1), self.col) {
            distance += 1;
        }
        self.row.saturating_add(distance)
    }
}
