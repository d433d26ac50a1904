//! Piece module - the falling piece and its movement rules
//!
//! A [`Piece`] carries its own (possibly rotated) shape, its color, and the
//! grid position of the shape's top-left corner. All movement is tentative:
//! a move or rotation that would collide leaves the piece untouched.

use crate::collision::is_valid_placement;
use crate::grid::Grid;
use crate::shapes::{get_shape, spawn_x, Shape};
use crate::types::{Color, MoveOutcome, PieceKind};

/// A falling (or upcoming) piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in its canonical orientation at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            x: spawn_x(&shape),
            y: 0,
            shape,
            color: kind.color(),
        }
    }

    /// Absolute grid coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check the current placement against the grid
    pub fn is_valid(&self, grid: &Grid) -> bool {
        is_valid_placement(&self.shape, self.x, self.y, grid)
    }

    /// Row index of the lowest occupied cell
    pub fn bottom_row(&self) -> i8 {
        self.y + self.shape.bottom_row() as i8
    }

    /// Shift by (dx, dy) if the target placement is valid
    pub fn try_move(&mut self, dx: i8, dy: i8, grid: &Grid) -> MoveOutcome {
        if is_valid_placement(&self.shape, self.x + dx, self.y + dy, grid) {
            self.x += dx;
            self.y += dy;
            MoveOutcome::Moved
        } else {
            MoveOutcome::Blocked
        }
    }

    /// Rotate clockwise in place.
    ///
    /// There are no wall kicks: if the rotated shape does not fit at the
    /// current position the rotation is rejected and `false` is returned.
    pub fn try_rotate(&mut self, grid: &Grid) -> bool {
        let rotated = self.shape.rotate_cw();
        if is_valid_placement(&rotated, self.x, self.y, grid) {
            self.shape = rotated;
            true
        } else {
            false
        }
    }

    /// Move down until blocked; returns the number of rows descended
    pub fn drop_to_floor(&mut self, grid: &Grid) -> u32 {
        let mut rows = 0;
        while self.try_move(0, 1, grid).moved() {
            rows += 1;
        }
        rows
    }

    /// Row the piece would rest on if dropped now (for previews)
    pub fn landing_y(&self, grid: &Grid) -> i8 {
        let mut probe = *self;
        probe.drop_to_floor(grid);
        probe.y
    }

    /// Whether the piece cannot move down any further
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        !is_valid_placement(&self.shape, self.x, self.y + 1, grid)
    }
}
