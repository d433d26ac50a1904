//! Shape catalog and rotation tests

use blockfall::core::{catalog_entry, get_shape, Shape};
use blockfall::types::{PieceKind, PIECE_KIND_COUNT};

#[test]
fn test_catalog_has_seven_shapes_of_four_cells() {
    for i in 0..PIECE_KIND_COUNT {
        let (shape, color) = catalog_entry(i).unwrap();
        let kind = PieceKind::from_index(i).unwrap();
        assert_eq!(shape.occupied().count(), 4, "{}", kind.as_str());
        assert_eq!(color, kind.color());
    }
    assert!(catalog_entry(PIECE_KIND_COUNT).is_none());
}

#[test]
fn test_canonical_patterns() {
    assert_eq!(get_shape(PieceKind::I).to_pattern(), "####");
    assert_eq!(get_shape(PieceKind::O).to_pattern(), "##\n##");
    assert_eq!(get_shape(PieceKind::T).to_pattern(), ".#.\n###");
    assert_eq!(get_shape(PieceKind::L).to_pattern(), "..#\n###");
    assert_eq!(get_shape(PieceKind::J).to_pattern(), "#..\n###");
    assert_eq!(get_shape(PieceKind::S).to_pattern(), ".##\n##.");
    assert_eq!(get_shape(PieceKind::Z).to_pattern(), "##.\n.##");
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        let start = get_shape(kind);
        let mut shape = start;
        for _ in 0..4 {
            shape = shape.rotate_cw();
        }
        assert_eq!(shape, start, "{}", kind.as_str());
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        let rotated = shape.rotate_cw();
        assert_eq!(rotated.rows(), shape.cols());
        assert_eq!(rotated.cols(), shape.rows());
    }
}

#[test]
fn test_t_rotates_clockwise() {
    let rotated = get_shape(PieceKind::T).rotate_cw();
    assert_eq!(rotated.to_pattern(), "#.\n##\n#.");
}

#[test]
fn test_rotation_leaves_catalog_untouched() {
    let _ = get_shape(PieceKind::L).rotate_cw();
    assert_eq!(get_shape(PieceKind::L).to_pattern(), "..#\n###");
}

#[test]
fn test_from_rows_validation() {
    let shape = Shape::from_rows(&[&[1, 1], &[0, 1]]).unwrap();
    assert_eq!(shape.to_pattern(), "##\n.#");
    assert!(Shape::from_rows(&[]).is_none());
    assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
}
