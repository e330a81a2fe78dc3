//! Pieces module - the seven tetromino templates
//!
//! Each kind has one immutable rotation-0 template, stored as a small
//! occupancy grid. Other rotations are derived from the template on demand
//! (see [`crate::collision::rotated_shape`]); a [`Piece`] only records its kind
//! and rotation, so no two pieces ever share shape storage.

use rand::RngCore;

use crate::collision::rotated_shape;
use crate::types::{PieceKind, Position, Rotation, BOARD_WIDTH};

/// Largest template side length
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Occupancy grid of a piece, anchored at its top-left corner.
///
/// Only the `height` x `width` top-left region of `grid` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    grid: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    pub const fn new(width: u8, height: u8, grid: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self {
            width,
            height,
            grid,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.grid[y][x] != 0
    }

    /// Occupied cells as offsets from the anchor, row by row
    pub fn cells(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.grid[y][x] != 0)
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// One 90° clockwise turn: cell (x, y) moves to (height - 1 - y, x).
    pub fn rotated_cw(&self) -> Shape {
        let mut grid = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let rows = self.height as usize;
        for y in 0..rows {
            for x in 0..self.width as usize {
                grid[x][rows - 1 - y] = self.grid[y][x];
            }
        }
        Shape::new(self.height, self.width, grid)
    }

    /// Rows as vectors of 0/1, for display and tests
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| self.grid[y][..self.width as usize].to_vec())
            .collect()
    }
}

const I_SHAPE: Shape = Shape::new(
    4,
    1,
    [[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SHAPE: Shape = Shape::new(
    2,
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: Shape = Shape::new(
    3,
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: Shape = Shape::new(
    3,
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: Shape = Shape::new(
    3,
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: Shape = Shape::new(
    3,
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: Shape = Shape::new(
    3,
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Rotation-0 template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// A piece: its kind and current rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
}

impl Piece {
    /// Create a piece in its spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
        }
    }

    /// Occupancy grid for the current rotation
    pub fn shape(&self) -> Shape {
        rotated_shape(&template(self.kind), self.rotation)
    }

    /// The same piece turned one step clockwise
    pub fn rotated(&self) -> Piece {
        Piece {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    pub fn color_hex(&self) -> &'static str {
        self.kind.color_hex()
    }

    /// Spawn anchor: horizontally centered, top row
    pub fn spawn_position(&self) -> Position {
        let width = self.shape().width() as i8;
        Position::new((BOARD_WIDTH as i8 - width) / 2, 0)
    }
}

/// Draw a piece uniformly from the seven kinds.
///
/// Any `RngCore` works as the entropy source, so callers can inject a seeded
/// or scripted generator.
pub fn random_piece<R: RngCore + ?Sized>(rng: &mut R) -> Piece {
    let idx = (rng.next_u32() % PieceKind::ALL.len() as u32) as usize;
    Piece::new(PieceKind::ALL[idx])
}
