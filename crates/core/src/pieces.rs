//! Pieces module - tetromino masks and rotation with wall kicks
//!
//! Every kind is a square boolean mask (2x2 for O, 4x4 for I, 3x3 otherwise).
//! Rotation is computed on the mask itself (transpose + reverse rows), so a
//! piece carries its current orientation as data rather than as an index
//! into a per-kind table.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest mask edge (the I piece)
pub const MAX_MASK_SIZE: usize = 4;

/// Offset of a single mino relative to the mask origin, as (row, col)
pub type MinoOffset = (i8, i8);

/// Column shifts tried in order when a rotation collides: in place, one
/// right, one left.
pub const WALL_KICKS: [i8; 3] = [0, 1, -1];

/// Square occupancy mask for one orientation of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    size: u8,
    bits: [[bool; MAX_MASK_SIZE]; MAX_MASK_SIZE],
}

impl Mask {
    /// Build a mask from row strings, `#` marking occupied cells.
    ///
    /// Rows must form a square of edge 1..=4.
    pub const fn from_rows<const N: usize>(rows: [&[u8; N]; N]) -> Self {
        let mut bits = [[false; MAX_MASK_SIZE]; MAX_MASK_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                bits[r][c] = rows[r][c] == b'#';
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            bits,
        }
    }

    /// Spawn orientation for a piece kind
    pub fn spawn(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => I_SPAWN,
            PieceKind::J => J_SPAWN,
            PieceKind::L => L_SPAWN,
            PieceKind::O => O_SPAWN,
            PieceKind::S => S_SPAWN,
            PieceKind::T => T_SPAWN,
            PieceKind::Z => Z_SPAWN,
        }
    }

    /// Edge length of the bounding box
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the mask cell at (row, col) is occupied; false outside the box
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        let n = self.size as usize;
        row < n && col < n && self.bits[row][col]
    }

    /// Occupied cells as (row, col) offsets, row-major
    pub fn cells(&self) -> ArrayVec<MinoOffset, 4> {
        let n = self.size as usize;
        let mut out = ArrayVec::new();
        for r in 0..n {
            for c in 0..n {
                if self.bits[r][c] {
                    out.push((r as i8, c as i8));
                }
            }
        }
        out
    }

    /// Index of the first mask row holding a mino
    pub fn top_filled_row(&self) -> u8 {
        let n = self.size as usize;
        (0..n)
            .find(|&r| self.bits[r][..n].iter().any(|&b| b))
            .unwrap_or(0) as u8
    }

    /// The mask rotated 90° clockwise: `new[r][c] = old[N-1-c][r]`
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut bits = [[false; MAX_MASK_SIZE]; MAX_MASK_SIZE];
        for (r, row) in bits.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.bits[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            bits,
        }
    }
}

const I_SPAWN: Mask = Mask::from_rows([b"....", b"####", b"....", b"...."]);
const J_SPAWN: Mask = Mask::from_rows([b"#..", b"###", b"..."]);
const L_SPAWN: Mask = Mask::from_rows([b"..#", b"###", b"..."]);
const O_SPAWN: Mask = Mask::from_rows([b"##", b"##"]);
const S_SPAWN: Mask = Mask::from_rows([b".##", b"##.", b"..."]);
const T_SPAWN: Mask = Mask::from_rows([b".#.", b"###", b"..."]);
const Z_SPAWN: Mask = Mask::from_rows([b"##.", b".##", b"..."]);

/// Try to rotate a mask clockwise at (row, col) with the wall kicks.
///
/// `fits(mask, row, col)` reports whether the mask is collision-free at that
/// position. Returns the rotated mask and the column shift that made it fit,
/// or None when every candidate collides.
pub fn try_rotate(
    mask: &Mask,
    row: i8,
    col: i8,
    fits: impl Fn(&Mask, i8, i8) -> bool,
) -> Option<(Mask, i8)> {
    let rotated = mask.rotated_cw();

    WALL_KICKS
        .iter()
        .copied()
        .find(|&kick| fits(&rotated, row, col.saturating_add(kick)))
        .map(|kick| (rotated, kick))
}

/// Spawn position (row, col) for a kind on a board `board_width` wide.
///
/// The piece is centred horizontally and lifted so its top mino row sits on
/// board row 0; the I piece therefore starts at row -1.
pub fn spawn_position(kind: PieceKind, board_width: u8) -> (i8, i8) {
    let mask = Mask::spawn(kind);
    let col = (board_width / 2) as i8 - (mask.size() / 2) as i8;
    let row = -(mask.top_filled_row() as i8);
    (row, col)
}
