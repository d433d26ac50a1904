//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: horizontally centred on row 0
//!
//! # Timing
//!
//! Gravity ticks fire every `1000 - (level - 1) * 100` milliseconds, clamped
//! to [`MIN_TICK_INTERVAL_MS`].
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let piece = PieceKind::from_index(2).unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.as_str(), "T");
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_TICK_INTERVAL_MS: u32 = 1000;

/// How much faster gravity gets per level
pub const TICK_INTERVAL_STEP_MS: u32 = 100;

/// Default floor for the gravity interval.
///
/// The linear formula reaches zero at level 11; anything below this floor is clamped.
pub const MIN_TICK_INTERVAL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row for a soft drop step
pub const SOFT_DROP_POINTS_PER_ROW: u32 = 1;

/// Points per row descended during a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Line clear scoring table
///
/// Base points for clearing N lines, multiplied by the current level:
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Number of distinct piece kinds
pub const PIECE_KIND_COUNT: usize = 7;


/// The seven piece kinds, in catalog order
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, indexed by catalog position (0-6)
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Look up a kind by catalog index (0-6)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog index of this kind
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Color identifier painted into the grid when this kind locks
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::new(0x00, 0xff, 0xff),
            PieceKind::O => Color::new(0xff, 0xff, 0x00),
            PieceKind::T => Color::new(0x80, 0x00, 0x80),
            PieceKind::L => Color::new(0xff, 0x80, 0x00),
            PieceKind::J => Color::new(0x00, 0x55, 0xff),
            PieceKind::S => Color::new(0x84, 0xff, 0x00),
            PieceKind::Z => Color::new(0xff, 0x40, 0x00),
        }
    }

    /// Single uppercase letter, as shown in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// 24-bit color identifier stored in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked block of the given color
pub type Cell = Option<Color>;

/// Commands a frontend can issue to a game session
///
/// Movement commands are only honoured while the session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (one point per row)
    SoftDrop,
    /// Drop piece to the lowest valid position (two points per row)
    HardDrop,
    /// Rotate piece 90° clockwise, in place
    Rotate,
    /// Begin or resume play
    Start,
    /// Toggle pause
    Pause,
    /// Discard the current game and prepare a new one
    Reset,
}

/// Session lifecycle
///
/// `Idle -> Running <-> Paused`, `Running -> GameOver`. Only a reset leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Running => "running",
            SessionStatus::Paused => "paused",
            SessionStatus::GameOver => "game_over",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, SessionStatus::Running)
    }
}

/// Result of a tentative piece move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Blocked,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// Final counters reported when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSummary {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

/// Notifications emitted by a session for its frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A piece was written into the grid.
    Locked { lines_cleared: u32, score_delta: u32 },
    /// Cumulative lines crossed a level boundary.
    LevelUp { level: u32 },
    /// The freshly spawned piece collided; the session is over.
    GameOver(GameSummary),
}
