//! Board tests

use blockfall::core::{Board, Piece};
use blockfall::types::{PieceKind, Position, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {}) should be empty", x, y);
        }
    }
    assert!(board.is_empty());
    assert!(board.full_rows().is_empty());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(10, 0, Some(PieceKind::I)));
    assert!(!board.set(0, 20, Some(PieceKind::I)));
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::J, Some(5));
    assert!(!board.is_row_full(19));

    board.set(5, 19, Some(PieceKind::L));
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert!(!board.is_row_full(20));
    assert_eq!(board.full_rows().as_slice(), &[19]);
}

#[test]
fn test_compact_removes_rows_and_keeps_order() {
    let mut board = Board::new();
    board.fill_row(16, PieceKind::S, Some(0));
    board.fill_row(17, PieceKind::I, None);
    board.fill_row(18, PieceKind::Z, Some(9));
    board.fill_row(19, PieceKind::I, None);

    let compacted = board.compact(&[17, 19]);

    assert_eq!(compacted.height(), BOARD_HEIGHT);
    assert_eq!(compacted.rows().count(), BOARD_HEIGHT as usize);
    assert!(compacted.rows().all(|row| row.len() == BOARD_WIDTH as usize));

    // S row (hole at 0) now sits above the Z row (hole at 9) at the bottom.
    assert_eq!(compacted.get(1, 18), Some(Some(PieceKind::S)));
    assert_eq!(compacted.get(0, 18), Some(None));
    assert_eq!(compacted.get(0, 19), Some(Some(PieceKind::Z)));
    assert_eq!(compacted.get(9, 19), Some(None));
    for y in 0..18 {
        assert_eq!(compacted.row(y).unwrap(), &[None; 10]);
    }

    // The source board is untouched.
    assert!(board.is_row_full(17));
}

#[test]
fn test_compact_with_nothing_to_remove() {
    let mut board = Board::new();
    board.set(3, 12, Some(PieceKind::O));
    assert_eq!(board.compact(&[]), board);
}

#[test]
fn test_place_writes_piece_cells() {
    let board = Board::new();
    let piece = Piece::new(PieceKind::T);
    let placed = board.place(&piece, Position::new(4, 18));

    assert_eq!(placed.get(5, 18), Some(Some(PieceKind::T)));
    assert_eq!(placed.get(4, 19), Some(Some(PieceKind::T)));
    assert_eq!(placed.get(5, 19), Some(Some(PieceKind::T)));
    assert_eq!(placed.get(6, 19), Some(Some(PieceKind::T)));
    assert_eq!(placed.occupied_count(), 4);
    assert!(board.is_empty());
}

#[test]
fn test_place_drops_cells_above_board() {
    let board = Board::new();
    let piece = Piece {
        kind: PieceKind::I,
        rotation: Rotation::East,
    };
    let placed = board.place(&piece, Position::new(0, -2));

    assert_eq!(placed.occupied_count(), 2);
    assert!(placed.is_occupied(0, 0));
    assert!(placed.is_occupied(0, 1));
}

#[test]
fn test_to_grid_matches_cells() {
    let mut board = Board::new();
    board.set(2, 7, Some(PieceKind::L));
    let grid = board.to_grid();
    assert_eq!(grid[7][2], Some(PieceKind::L));
    assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 1);
}
