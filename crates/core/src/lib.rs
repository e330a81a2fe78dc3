//! Core rules of the falling-block engine - pure, deterministic, and testable
//!
//! This crate holds the board, the piece catalog, collision and rotation,
//! scoring and the session state machine. It has no dependency on a
//! terminal, a clock or a thread; time enters only as the millisecond
//! timestamp passed to [`GameState::advance_time`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cells, row detection and compaction
//! - [`pieces`]: the seven templates and clockwise rotation
//! - [`collision`]: placement validity, wall kicks and landing position
//! - [`scoring`]: line clear points, levels and fall interval
//! - [`config`]: tunable rules loaded from JSON
//! - [`game_state`]: the session and its lifecycle
//! - [`rng`]: deterministic default entropy source
//! - [`snapshot`]: read-only copies for presentation
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use collision::{is_valid_position, lowest_valid_position, try_rotate};
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, LockEvent};
pub use pieces::{random_piece, template, Piece, Shape};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
