//! Placement validation for a shape on the grid.

use crate::grid::Grid;
use crate::shapes::Shape;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Check whether `shape` fits with its top-left corner at (x, y).
///
/// Every occupied cell must land inside the side walls and above the floor,
/// and must not overlap a locked block. Cells above the top edge (y < 0) are
/// allowed so pieces can poke out of the playfield.
pub fn is_valid_placement(shape: &Shape, x: i8, y: i8, grid: &Grid) -> bool {
    shape.occupied().all(|(dx, dy)| {
        let px = x as i16 + dx as i16;
        let py = y as i16 + dy as i16;

        if px < 0 || px >= GRID_WIDTH as i16 || py >= GRID_HEIGHT as i16 {
            return false;
        }
        py < 0 || !grid.is_occupied(px as i8, py as i8)
    })
}
