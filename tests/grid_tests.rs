//! Grid tests - storage, locking, and line clearing through the public API

use blockfall::core::{get_shape, Grid};
use blockfall::types::{Color, PieceKind, GRID_HEIGHT, GRID_WIDTH};

const GRAY: Color = Color::new(128, 128, 128);

fn row_filled(grid: &Grid, y: usize) -> Vec<bool> {
    grid.row(y)
        .unwrap()
        .iter()
        .map(|cell| cell.is_some())
        .collect()
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    assert_eq!(grid.filled_count(), 0);

    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, GRID_HEIGHT as i8), None);

    assert!(!grid.set(-1, 0, Some(GRAY)));
    assert!(!grid.set(0, GRID_HEIGHT as i8, Some(GRAY)));
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_grid_set_get_clear_cell() {
    let mut grid = Grid::new();
    assert!(grid.set(5, 10, Some(PieceKind::T.color())));
    assert_eq!(grid.get(5, 10), Some(Some(PieceKind::T.color())));
    assert!(grid.is_occupied(5, 10));

    assert!(grid.set(5, 10, None));
    assert!(!grid.is_occupied(5, 10));
}

#[test]
fn test_clear_single_bottom_row() {
    let mut grid = Grid::from_pattern(
        &[
            "#.........",
            "##########",
        ],
        GRAY,
    )
    .unwrap();

    assert_eq!(grid.clear_lines(), 1);
    assert_eq!(grid.filled_count(), 1);
    assert!(grid.is_occupied(0, 19));
    assert!(grid.is_row_empty(18));
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut grid = Grid::from_pattern(
        &[
            "#.........",
            "##########",
            ".#........",
            "##########",
        ],
        GRAY,
    )
    .unwrap();

    assert_eq!(grid.clear_lines(), 2);
    // Surviving rows keep their relative order.
    let mut expect_18 = vec![false; GRID_WIDTH as usize];
    expect_18[0] = true;
    let mut expect_19 = vec![false; GRID_WIDTH as usize];
    expect_19[1] = true;
    assert_eq!(row_filled(&grid, 18), expect_18);
    assert_eq!(row_filled(&grid, 19), expect_19);
    assert_eq!(grid.filled_count(), 2);
}

#[test]
fn test_clear_four_adjacent_rows() {
    let mut grid = Grid::from_pattern(
        &[
            "..##......",
            "##########",
            "##########",
            "##########",
            "##########",
        ],
        GRAY,
    )
    .unwrap();

    assert_eq!(grid.clear_lines(), 4);
    assert!(grid.is_occupied(2, 19));
    assert!(grid.is_occupied(3, 19));
    assert_eq!(grid.filled_count(), 2);
}

#[test]
fn test_clear_with_no_full_rows_is_noop() {
    let mut grid = Grid::from_pattern(&["#########."], GRAY).unwrap();
    let before = grid.clone();
    assert_eq!(grid.clear_lines(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_lock_shape_skips_rows_above_top() {
    let mut grid = Grid::new();
    // T: .#. / ### placed so its top row sits at y = -1.
    let written = grid.lock_shape(&get_shape(PieceKind::T), 3, -1, GRAY);
    assert_eq!(written, 3);
    assert!(grid.is_occupied(3, 0));
    assert!(grid.is_occupied(4, 0));
    assert!(grid.is_occupied(5, 0));
}

#[test]
fn test_from_pattern_rejects_bad_width() {
    assert!(Grid::from_pattern(&["###"], GRAY).is_none());
}
