//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, session state, and simulation logic.
//! It has no dependencies on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Any frontend can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven canonical piece matrices and clockwise rotation
//! - [`grid`]: 10x20 playfield with locking and line clearing
//! - [`collision`]: Placement validation against walls, floor, and locked cells
//! - [`piece`]: The falling piece and its tentative move/rotate/drop rules
//! - [`scoring`]: Line clear table, drop points, levels, gravity interval
//! - [`rng`]: Uniform random piece selection
//! - [`session`]: Idle/Running/Paused/GameOver state machine
//! - [`snapshot`]: Copyable view of a session for renderers
//!
//! # Game Rules
//!
//! - **Rotation**: clockwise only, in place, no wall kicks
//! - **Gravity**: one row per tick; a blocked tick locks the piece
//! - **Scoring**: 100/300/500/800 x level for 1-4 lines, 1 point per soft-drop
//!   row, 2 points per hard-drop row
//! - **Levels**: one level per 10 lines, starting at 1
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::{GameAction, SessionStatus};
//!
//! let mut game = GameSession::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! assert_eq!(game.status(), SessionStatus::Running);
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. Call [`GameSession::tick`] every
//! [`GameSession::tick_interval_ms`] milliseconds while the session is running.

pub mod collision;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::is_valid_placement;
pub use grid::{CellRows, Grid};
pub use piece::Piece;
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_line_score, get_tick_interval_ms, level_for_lines};
pub use session::{GameSession, TickOutcome};
pub use shapes::{catalog_entry, get_shape, Shape};
pub use snapshot::GameSnapshot;
