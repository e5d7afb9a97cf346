//! Shared vocabulary of the workspace: board geometry, timing and scoring
//! constants, piece kinds, player intents and the events the core emits.
//!
//! Nothing here depends on another crate, so the input mapping, the driver
//! and any renderer can agree on these types without pulling in the core.
//!
//! # Geometry
//!
//! The board is 10 columns by 20 rows, addressed as (row, col) with row 0 at
//! the top.
//!
//! Rows above the visible top (negative rows) are open space: pieces may
//! spawn there and nothing ever collides with them.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver step |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity |
//!
//! # Examples
//!
//! ```
//! use neon_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Columns on the board
pub const BOARD_WIDTH: u8 = 10;

/// Rows on the board
pub const BOARD_HEIGHT: u8 = 20;

/// Driver step in milliseconds
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the current level
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Level a new game starts at
pub const START_LEVEL: u32 = 1;


/// The seven tetromino piece kinds
///
/// Each kind doubles as the color identifier of the cells it leaves on the
/// board once locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in draw order (index = uniform draw result)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use neon_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    /// Single lowercase letter naming the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Neon display color for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use neon_tetris_types::{PieceKind, Rgb};
    ///
    /// assert_eq!(PieceKind::I.color(), Rgb::new(0x00, 0xf3, 0xff));
    /// assert_eq!(PieceKind::T.color().to_hex(), "#bc13fe");
    /// ```
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x00, 0xf3, 0xff),
            PieceKind::J => Rgb::new(0x00, 0x51, 0xff),
            PieceKind::L => Rgb::new(0xff, 0xaa, 0x00),
            PieceKind::O => Rgb::new(0xff, 0xff, 0x00),
            PieceKind::S => Rgb::new(0x0a, 0xff, 0x0a),
            PieceKind::T => Rgb::new(0xbc, 0x13, 0xfe),
            PieceKind::Z => Rgb::new(0xff, 0x00, 0x33),
        }
    }
}

/// 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Player intents delivered by the input layer
///
/// Each intent maps to exactly one atomic game operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise (with wall kicks)
    Rotate,
    /// Drop piece to its lowest valid position and lock it
    HardDrop,
    /// Freeze or resume gravity and input
    Pause,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    pub const ALL: [GameAction; 7] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Pause,
        GameAction::Restart,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use neon_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str().eq_ignore_ascii_case(s))
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Core-side event emitted by the game session, consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// A piece was committed into the board.
    Locked { kind: PieceKind, lines_cleared: u32, points: u32 },
    /// A freshly spawned piece collided; the session is over.
    GameOver { score: u32 },
}

/// One board cell: empty, or settled and remembering the kind that filled it
pub type Cell = Option<PieceKind>;
