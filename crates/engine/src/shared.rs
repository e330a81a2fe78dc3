use std::sync::{Arc, Mutex, MutexGuard};

use blockfall_core::{GameState, SimpleRng};

/// A session shared between the tick thread and input handling.
///
/// Every action and every automatic descent runs with the mutex held, so a
/// lock sequence is never observed half-applied.
pub type SharedGame<R = SimpleRng> = Arc<Mutex<GameState<R>>>;

pub fn share<R>(game: GameState<R>) -> SharedGame<R> {
    Arc::new(Mutex::new(game))
}

/// Lock the session, recovering the guard if another holder panicked.
///
/// `GameState` methods commit whole transitions, so a poisoned session is
/// still consistent.
pub fn lock_game<R>(game: &Mutex<GameState<R>>) -> MutexGuard<'_, GameState<R>> {
    game.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
