//! Shapes module - piece matrices and the canonical shape catalog
//!
//! A [`Shape`] is an immutable occupancy matrix of at most 4x4 cells. Rotation
//! never touches the receiver: [`Shape::rotate_cw`] returns a fresh matrix, so
//! the catalog constants can be handed out by value without aliasing.

use crate::types::{Color, PieceKind, GRID_WIDTH};

/// Largest row/column count of any shape
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy matrix of a piece, `rows x cols`, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

/// Build a shape from a literal `0/1` matrix at compile time
const fn matrix<const R: usize, const C: usize>(m: [[u8; C]; R]) -> Shape {
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    let mut r = 0;
    while r < R {
        let mut c = 0;
        while c < C {
            cells[r][c] = m[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape {
        rows: R as u8,
        cols: C as u8,
        cells,
    }
}

const I_SHAPE: Shape = matrix([[1, 1, 1, 1]]);
const O_SHAPE: Shape = matrix([[1, 1], [1, 1]]);
const T_SHAPE: Shape = matrix([[0, 1, 0], [1, 1, 1]]);
const L_SHAPE: Shape = matrix([[0, 0, 1], [1, 1, 1]]);
const J_SHAPE: Shape = matrix([[1, 0, 0], [1, 1, 1]]);
const S_SHAPE: Shape = matrix([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = matrix([[1, 1, 0], [0, 1, 1]]);

impl Shape {
    /// Build a shape from rows of `0/1` values.
    ///
    /// Returns `None` for empty, ragged, or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let cols = rows.first()?.len();
        if rows.len() > MAX_SHAPE_DIM || cols == 0 || cols > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Some(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether cell (row, col) is occupied; out-of-range is empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as `(col, row)` offsets from the top-left corner
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Index of the lowest row that holds an occupied cell
    pub fn bottom_row(&self) -> u8 {
        (0..self.rows as usize)
            .rev()
            .find(|&r| self.cells[r][..self.cols as usize].iter().any(|&c| c))
            .map_or(0, |r| r as u8)
    }

    /// Rotate 90° clockwise into a new matrix.
    ///
    /// Dimensions swap: `new[j][rows - 1 - i] = old[i][j]`.
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in self.cells.iter().enumerate().take(rows) {
            for (j, &filled) in row.iter().enumerate().take(cols) {
                cells[j][rows - 1 - i] = filled;
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Render as rows of `#`/`.` (used in test failure messages)
    pub fn to_pattern(&self) -> String {
        let mut out = String::new();
        for r in 0..self.rows as usize {
            if r > 0 {
                out.push('\n');
            }
            for c in 0..self.cols as usize {
                out.push(if self.cells[r][c] { '#' } else { '.' });
            }
        }
        out
    }
}

/// Canonical spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Catalog lookup by piece-type index (0-6)
pub fn catalog_entry(index: usize) -> Option<(Shape, Color)> {
    PieceKind::from_index(index).map(|kind| (get_shape(kind), kind.color()))
}

/// Column at which a shape spawns: centred, rounding left
pub fn spawn_x(shape: &Shape) -> i8 {
    ((GRID_WIDTH - shape.cols()) / 2) as i8
}
