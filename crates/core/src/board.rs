//! Board module - the fixed-size playing field
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that was locked there. Storage is a flat row-major array, so a board
//! is a plain value: `place` and `compact` return new boards and never alias
//! the one they were called on.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of columns as `usize`
pub const COLS: usize = BOARD_WIDTH as usize;

/// Number of rows as `usize`
pub const ROWS: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = COLS * ROWS;

/// Row indices reported by [`Board::full_rows`], top to bottom.
pub type FullRows = ArrayVec<usize, ROWS>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
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

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Slice of one row, or None if `y` is out of range
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= ROWS {
            return None;
        }
        let start = y * COLS;
        Some(&self.cells[start..start + COLS])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(COLS)
    }

    /// Indices of every full row, top to bottom
    pub fn full_rows(&self) -> FullRows {
        (0..ROWS).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove `rows_to_remove` and pad the top with as many empty rows.
    ///
    /// Surviving rows keep their relative order. Indices out of range and
    /// duplicates are ignored.
    pub fn compact(&self, rows_to_remove: &[usize]) -> Board {
        let mut out = Board::new();
        let mut write_y = ROWS;

        // Scan from bottom to top, copying survivors down to the write cursor.
        for read_y in (0..ROWS).rev() {
            if rows_to_remove.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            let src = read_y * COLS;
            let dst = write_y * COLS;
            out.cells[dst..dst + COLS].copy_from_slice(&self.cells[src..src + COLS]);
        }

        out
    }

    /// Write `piece` at `position` and return the resulting board.
    ///
    /// The caller validates placement first. Cells above the visible board
    /// (y < 0) are dropped.
    pub fn place(&self, piece: &Piece, position: Position) -> Board {
        let mut out = *self;
        for (dx, dy) in piece.shape().cells() {
            let x = position.x + dx;
            let y = position.y + dy;
            if y < 0 {
                continue;
            }
            let written = out.set(x, y, Some(piece.kind));
            debug_assert!(written, "placed cell ({x}, {y}) outside the board");
        }
        out
    }

    /// Fill row `y` with `kind`, leaving the column `hole` empty if given.
    ///
    /// Used to prepare boards for puzzles and tests.
    pub fn fill_row(&mut self, y: usize, kind: PieceKind, hole: Option<usize>) {
        if y >= ROWS {
            return;
        }
        let start = y * COLS;
        for (x, cell) in self.cells[start..start + COLS].iter_mut().enumerate() {
            *cell = if hole == Some(x) { None } else { Some(kind) };
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Copy into a 2D grid, row-major
    pub fn to_grid(&self) -> [[Cell; COLS]; ROWS] {
        let mut grid = [[None; COLS]; ROWS];
        for (dst, src) in grid.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
