//! Grid module - the playfield of locked cells
//!
//! The grid is a 10x20 matrix where each cell is empty or holds a color.
//! Uses a flat array for cache locality and no allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::shapes::Shape;
use crate::types::{Cell, Color, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Row-major color matrix, as exported to renderers
pub type CellRows = [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize];

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// A full row of cells, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= GRID_HEIGHT as usize {
            return None;
        }
        let start = y * GRID_WIDTH as usize;
        Some(&self.cells[start..start + GRID_WIDTH as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Check if a row has no filled cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_none()))
    }

    /// Remove row `y` and shift all rows above it down by one.
    ///
    /// The top row becomes empty. Rows below `y` are untouched.
    pub fn remove_row(&mut self, y: usize) {
        if y >= GRID_HEIGHT as usize {
            return;
        }

        let width = GRID_WIDTH as usize;
        // copy_within handles the overlap
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Clear every full row, compacting the rows above, and return how many went.
    ///
    /// Scans from the bottom row upwards. After a removal the same index now
    /// holds the row that was above it, so it is checked again before moving
    /// on; adjacent full rows are therefore all caught in one pass.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = GRID_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
                // Re-examine `row`: it now holds what was above it.
                continue;
            }
            y -= 1;
        }

        cleared
    }

    /// Write `color` into every occupied shape cell that lies on the grid.
    ///
    /// Cells above the top edge (y < 0) are dropped. Returns the number of
    /// cells written.
    pub fn lock_shape(&mut self, shape: &Shape, x: i8, y: i8, color: Color) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.occupied() {
            let py = y + dy;
            if py < 0 {
                continue;
            }
            if self.set(x + dx, py, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major matrix without allocating
    pub fn write_rows(&self, out: &mut CellRows) {
        let width = GRID_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a grid from an ASCII picture, one string per row from the top.
    ///
    /// `.` is empty, any other character is a block of `color`. Missing rows
    /// at the top are empty; each given row must be exactly 10 wide.
    pub fn from_pattern(rows: &[&str], color: Color) -> Option<Self> {
        if rows.len() > GRID_HEIGHT as usize {
            return None;
        }
        let mut grid = Self::new();
        let offset = GRID_HEIGHT as usize - rows.len();
        for (i, line) in rows.iter().enumerate() {
            if line.chars().count() != GRID_WIDTH as usize {
                return None;
            }
            for (x, ch) in line.chars().enumerate() {
                if ch != '.' {
                    grid.set(x as i8, (offset + i) as i8, Some(color));
                }
            }
        }
        Some(grid)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
