//! Plain-data view of a session for renderers.

use crate::grid::CellRows;
use crate::piece::Piece;
use crate::types::{PieceKind, SessionStatus, BASE_TICK_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: CellRows,
    pub current: Piece,
    pub next: Piece,
    /// Resting row of the current piece while a game is in progress.
    pub landing_y: Option<i8>,
    pub status: SessionStatus,
    pub episode_id: u32,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub tick_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status.is_running()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            current: Piece::spawn(PieceKind::I),
            next: Piece::spawn(PieceKind::I),
            landing_y: None,
            status: SessionStatus::Idle,
            episode_id: 0,
            score: 0,
            lines: 0,
            level: 1,
            tick_interval_ms: BASE_TICK_INTERVAL_MS,
        }
    }
}
