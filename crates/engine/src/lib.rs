//! Tick drivers for the falling-block engine.
//!
//! The core state machine never reads a clock. This crate supplies the time:
//!
//! - [`FrameDriver`] converts host `Instant`s into the millisecond timestamps
//!   `GameState::advance_time` expects. Call it from a render or input loop.
//! - [`TickDriver`] runs the same conversion on a background thread against a
//!   [`SharedGame`], the session behind its single mutex.

mod frame;
mod shared;
mod tick;

pub use frame::FrameDriver;
pub use shared::{lock_game, share, SharedGame};
pub use tick::TickDriver;
