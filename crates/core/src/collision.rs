//! Collision and transform engine
//!
//! Pure functions over a board, a piece and a position: rotation, placement
//! validity, wall-kick resolution and drop targets. Nothing here mutates its
//! inputs.

use crate::board::Board;
use crate::pieces::{Piece, Shape};
use crate::types::{Position, Rotation, BOARD_HEIGHT, BOARD_WIDTH, WALL_KICKS};

/// Rotate `template` clockwise `rotation.index()` times.
///
/// Always starts from the rotation-0 template, so four turns give back the
/// template exactly.
pub fn rotated_shape(template: &Shape, rotation: Rotation) -> Shape {
    (0..rotation.index()).fold(*template, |shape, _| shape.rotated_cw())
}

/// Check that every occupied cell of `piece` at `position` lies inside the
/// side walls, above the floor, and on an empty board cell.
///
/// Cells above the visible board (y < 0) are allowed.
pub fn is_valid_position(board: &Board, piece: &Piece, position: Position) -> bool {
    piece.shape().cells().all(|(dx, dy)| {
        let x = position.x as i16 + dx as i16;
        let y = position.y as i16 + dy as i16;
        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return false;
        }
        y < 0 || !board.is_occupied(x as i8, y as i8)
    })
}

/// Rotate `piece` one step clockwise, kicking it if needed.
///
/// Tries the unmodified position first, then each offset of [`WALL_KICKS`]
/// in order. Returns None when every candidate collides.
pub fn try_rotate(board: &Board, piece: &Piece, position: Position) -> Option<(Piece, Position)> {
    let rotated = piece.rotated();

    std::iter::once((0, 0))
        .chain(WALL_KICKS)
        .map(|(dx, dy)| position.offset(dx, dy))
        .find(|&candidate| is_valid_position(board, &rotated, candidate))
        .map(|candidate| (rotated, candidate))
}

/// Lowest position straight below `position` where `piece` still fits.
///
/// Returns `position` unchanged if the piece cannot move down at all.
pub fn lowest_valid_position(board: &Board, piece: &Piece, position: Position) -> Position {
    let mut current = position;
    while current.y < BOARD_HEIGHT as i8 {
        let next = current.offset(0, 1);
        if !is_valid_position(board, piece, next) {
            break;
        }
        current = next;
    }
    current
}
