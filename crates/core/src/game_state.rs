//! Game state module - the authoritative session
//!
//! `GameState` owns the board, the falling piece and its position, the
//! lookahead piece, the counters and the lifecycle status. Every action is a
//! single method call that either commits a complete transition or leaves the
//! session untouched; the lock sequence (place, clear, score, respawn) runs
//! synchronously inside one call.
//!
//! Lifecycle: `Idle -> Playing <-> Paused`, `Playing -> GameOver` when a
//! freshly spawned piece does not fit, and back to `Idle` via [`GameState::reset`]
//! or to a fresh `Playing` session via [`GameState::restart`].

use arrayvec::ArrayVec;
use log::{debug, info, trace};
use rand::RngCore;

use crate::board::{Board, ROWS};
use crate::collision::{is_valid_position, lowest_valid_position, try_rotate};
use crate::config::GameConfig;
use crate::pieces::{random_piece, Piece};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameStatus, PieceKind, Position};

/// Outcome of a lock, kept until presentation takes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub position: Position,
    /// Every board row removed by this lock, top to bottom (pre-compaction indices).
    ///
    /// A placement completes at most 4 rows, but rows already full on a
    /// prepared board are removed by the same lock and listed here too.
    pub cleared_rows: ArrayVec<u8, ROWS>,
    /// Line clear points awarded (hard drop bonus excluded)
    pub points: u32,
    /// Rows descended by the hard drop that caused the lock, 0 otherwise
    pub hard_drop_rows: u32,
    pub level_up: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    position: Position,
    score: u32,
    lines: u32,
    level: u32,
    pieces_locked: u32,
    status: GameStatus,
    /// Timestamp of the last automatic descent; None until the next tick anchors it.
    fall_anchor_ms: Option<u64>,
    last_event: Option<LockEvent>,
    config: GameConfig,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create an idle session with default rules and a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RngCore> GameState<R> {
    /// Create an idle session drawing pieces from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            position: Position::default(),
            score: 0,
            lines: 0,
            level: 0,
            pieces_locked: 0,
            status: GameStatus::Idle,
            fall_anchor_ms: None,
            last_event: None,
            config,
            rng,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current automatic descent interval
    pub fn fall_interval_ms(&self) -> u32 {
        self.config.fall_interval_ms(self.level)
    }

    /// Start a new game on an empty board, from any state
    pub fn start(&mut self) {
        self.start_with_board(Board::new());
    }

    /// Start a new game on a prepared board.
    ///
    /// Goes straight to `GameOver` if the first piece cannot spawn.
    pub fn start_with_board(&mut self, board: Board) {
        self.board = board;
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.pieces_locked = 0;
        self.fall_anchor_ms = None;
        self.last_event = None;
        self.active = None;
        self.next = Some(random_piece(&mut self.rng));
        self.status = GameStatus::Playing;
        info!("game started");
        self.spawn_next();
    }

    /// Start a fresh game (the `Restart` action)
    pub fn restart(&mut self) {
        self.start();
    }

    /// Return to `Idle` with an empty board and zeroed counters
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.active = None;
        self.next = None;
        self.position = Position::default();
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.pieces_locked = 0;
        self.fall_anchor_ms = None;
        self.last_event = None;
        self.status = GameStatus::Idle;
    }

    /// Toggle `Playing` <-> `Paused`. Returns false in any other state.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                // Time spent paused never counts toward the next descent.
                self.fall_anchor_ms = None;
                true
            }
            GameStatus::Idle | GameStatus::GameOver => false,
        }
    }

    /// Move the active piece by (dx, dy).
    ///
    /// A blocked downward move locks the piece. Returns true only if the
    /// piece moved.
    pub fn move_by(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.shift(dx, dy);
        if moved && dy > 0 {
            self.fall_anchor_ms = None;
        }
        moved
    }

    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let candidate = self.position.offset(dx, dy);
        if is_valid_position(&self.board, &piece, candidate) {
            self.position = candidate;
            return true;
        }

        if dy > 0 {
            self.lock_active(0);
        }
        false
    }

    /// Rotate the active piece clockwise with wall kicks
    pub fn rotate(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match try_rotate(&self.board, &piece, self.position) {
            Some((rotated, position)) => {
                self.active = Some(rotated);
                self.position = position;
                true
            }
            None => false,
        }
    }

    /// Drop the active piece to its landing row and lock it.
    ///
    /// Awards the hard drop bonus for every row descended.
    pub fn hard_drop(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let target = lowest_valid_position(&self.board, &piece, self.position);
        let rows = (target.y - self.position.y).max(0) as u32;
        self.position = target;
        self.score = self.score.saturating_add(self.config.hard_drop_score(rows));
        self.lock_active(rows);
        true
    }

    /// Where the active piece would land if hard-dropped now
    pub fn ghost_position(&self) -> Option<Position> {
        let piece = self.active?;
        Some(lowest_valid_position(&self.board, &piece, self.position))
    }

    /// Drive automatic descent with a monotonic timestamp in milliseconds.
    ///
    /// Descends one row once more than the fall interval has passed since the
    /// last automatic descent. The first call after start, resume or a manual
    /// downward move only anchors the timer. Returns true if a descent step ran.
    pub fn advance_time(&mut self, now_ms: u64) -> bool {
        if self.status != GameStatus::Playing || self.active.is_none() {
            return false;
        }

        let Some(anchor) = self.fall_anchor_ms else {
            self.fall_anchor_ms = Some(now_ms);
            return false;
        };

        if now_ms.saturating_sub(anchor) <= self.fall_interval_ms() as u64 {
            return false;
        }

        trace!("automatic descent at {}ms", now_ms);
        self.shift(0, 1);
        self.fall_anchor_ms = Some(now_ms);
        true
    }

    /// Apply an input action. Returns whether it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1, 0),
            GameAction::MoveRight => self.move_by(1, 0),
            GameAction::MoveDown => self.move_by(0, 1),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_grid();
        out.active = self
            .active
            .map(|piece| ActiveSnapshot::new(piece, self.position));
        out.ghost = self.ghost_position();
        out.next = self.next.map(|piece| piece.kind);
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
    }

    /// Place the active piece, clear rows, score, then spawn the next piece.
    fn lock_active(&mut self, hard_drop_rows: u32) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let placed = self.board.place(&piece, self.position);
        let full = placed.full_rows();
        self.board = placed.compact(&full);
        self.pieces_locked = self.pieces_locked.saturating_add(1);

        // The score table stops at 4 rows; extra rows from a prepared board still count as lines.
        let cleared = full.len().min(4);
        let mut points = 0;
        let mut level_up = false;
        if cleared > 0 {
            self.lines = self.lines.saturating_add(full.len() as u32);
            let level = self.config.level_for_lines(self.lines).max(self.level);
            if level > self.level {
                info!("level up: {} -> {}", self.level, level);
                level_up = true;
            }
            self.level = level;
            points = self.config.score_for_clear(cleared, self.level);
            self.score = self.score.saturating_add(points);
        }

        debug!(
            "locked {:?} at ({}, {}): {} rows, {} points",
            piece.kind,
            self.position.x,
            self.position.y,
            full.len(),
            points
        );

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            position: self.position,
            cleared_rows: full.iter().map(|&y| y as u8).collect(),
            points,
            hard_drop_rows,
            level_up,
        });

        self.spawn_next();
    }

    /// Promote the lookahead piece and draw a new one.
    fn spawn_next(&mut self) {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => random_piece(&mut self.rng),
        };
        self.next = Some(random_piece(&mut self.rng));

        let position = piece.spawn_position();
        self.position = position;
        if is_valid_position(&self.board, &piece, position) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                "game over: score {}, lines {}, level {}",
                self.score, self.lines, self.level
            );
        }
    }
}
