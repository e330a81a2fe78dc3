use crate::board::{COLS, ROWS};
use crate::pieces::Piece;
use crate::types::{Cell, GameStatus, PieceKind, Position, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub position: Position,
}

impl ActiveSnapshot {
    pub fn new(piece: Piece, position: Position) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            position,
        }
    }

    pub fn piece(&self) -> Piece {
        Piece {
            kind: self.kind,
            rotation: self.rotation,
        }
    }
}

/// Read-only copy of a session, handed to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; COLS]; ROWS],
    pub active: Option<ActiveSnapshot>,
    pub ghost: Option<Position>,
    pub next: Option<PieceKind>,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces_locked: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; COLS]; ROWS],
            active: None,
            ghost: None,
            next: None,
            status: GameStatus::Idle,
            score: 0,
            level: 0,
            lines: 0,
            pieces_locked: 0,
        }
    }
}
