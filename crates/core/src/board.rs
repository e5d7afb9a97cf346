//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or hold the kind of
//! the piece that locked there. Uses a flat array for cache locality and
//! zero allocation.
//!
//! Coordinates are `(row, col)`: row 0 is the visible top, row 19 the floor
//! row; col 0 is the left wall side. Everything outside `[0, WIDTH)` columns
//! or at/below the floor acts as a wall. Negative rows are open sky.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col); None outside the visible grid
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col). Returns None if outside the visible grid.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if outside the visible grid.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (row, col) blocks a piece cell.
    ///
    /// Columns outside the board and rows at or below the floor are walls.
    /// Rows above the top are open so pieces can spawn partly hidden.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        if col < 0 || col >= BOARD_WIDTH as i8 || row >= BOARD_HEIGHT as i8 {
            return true;
        }
        if row < 0 {
            return false;
        }
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Cells of one row, left to right. None below the floor.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= HEIGHT {
            return None;
        }
        let start = row * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write each cell of a locked piece into the board.
    ///
    /// Cells above the visible top are dropped on purpose: they belong to a
    /// piece that locked while still partly hidden. Cells outside the grid
    /// horizontally or below the floor cannot come from a valid piece and
    /// are ignored as well.
    pub fn commit<I>(&mut self, cells: I, kind: PieceKind)
    where
        I: IntoIterator<Item = (i8, i8)>,
    {
        for (row, col) in cells {
            self.set(row, col, Some(kind));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are scanned bottom to top. When a row is removed everything above
    /// it shifts down one row and an empty row appears at the top, so the same
    /// index is examined again before moving up.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = HEIGHT;

        while row > 0 {
            let y = row - 1;
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
                // stay on `y`: the row above has just moved into it
                continue;
            }
            row -= 1;
        }

        cleared
    }

    /// Drop row `y`, shift rows above down by one, empty the top row.
    fn remove_row(&mut self, y: usize) {
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        for cell in &mut self.cells[..WIDTH] {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from row strings, top to bottom, for tests.
    ///
    /// `.` is empty; any piece letter fills the cell with that kind. Missing
    /// leading rows are empty, so only the bottom of the board needs listing.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, line) in rows.iter().take(HEIGHT).enumerate() {
            for (col, ch) in line.chars().take(WIDTH).enumerate() {
                let cell = PieceKind::from_str(&ch.to_string());
                board.set((offset + i) as i8, col as i8, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
