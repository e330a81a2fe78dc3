//! Terminal input mapping.
//!
//! Maps `crossterm` key events onto the engine's action surface
//! ([`crate::types::GameAction`]). Nothing here touches game state; the
//! binary forwards the resulting actions to the session.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, translate_event, InputCommand};
