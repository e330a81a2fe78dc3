//! Terminal presentation for the falling-block engine.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a
//! [`core::GameSnapshot`] into a [`FrameBuffer`] with no I/O, and
//! [`TerminalRenderer`] flushes frames to a crossterm terminal, rewriting
//! only the cells that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{clear_label, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
