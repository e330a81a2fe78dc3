use std::time::Instant;

use blockfall_core::GameState;
use rand::RngCore;

/// Host-side clock for `GameState::advance_time`.
///
/// Timestamps are milliseconds since the driver's epoch, so they start near 0
/// and only ever increase.
#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    epoch: Instant,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_epoch(Instant::now())
    }

    pub fn with_epoch(epoch: Instant) -> Self {
        Self { epoch }
    }

    /// Milliseconds from the epoch to `now`. Instants before the epoch map to 0.
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.epoch).as_millis() as u64
    }

    /// Advance `game` to `now`. Returns true if an automatic descent ran.
    pub fn tick_at<R: RngCore>(&self, game: &mut GameState<R>, now: Instant) -> bool {
        game.advance_time(self.elapsed_ms(now))
    }

    pub fn tick<R: RngCore>(&self, game: &mut GameState<R>) -> bool {
        self.tick_at(game, Instant::now())
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
