use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use blockfall_core::GameState;
use blockfall_types::TICK_MS;
use log::{debug, warn};
use rand::RngCore;

use crate::frame::FrameDriver;
use crate::shared::{lock_game, SharedGame};

/// Background thread calling `advance_time` on a shared session.
///
/// The thread only holds a `Weak` reference, so it exits by itself once the
/// last `SharedGame` handle is dropped. `stop` is idempotent and dropping
/// the driver stops and joins the thread.
#[derive(Debug)]
pub struct TickDriver {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    cadence: Duration,
}

impl TickDriver {
    /// Tick at the default cadence of `TICK_MS`.
    pub fn spawn_default<R>(game: &SharedGame<R>) -> io::Result<Self>
    where
        R: RngCore + Send + 'static,
    {
        Self::spawn(game, Duration::from_millis(TICK_MS as u64))
    }

    /// Spawn a driver ticking every `cadence`.
    ///
    /// A cadence coarser than the session's minimum fall interval would miss
    /// drop windows at high levels; it is clamped to that interval.
    pub fn spawn<R>(game: &SharedGame<R>, cadence: Duration) -> io::Result<Self>
    where
        R: RngCore + Send + 'static,
    {
        let floor = Duration::from_millis(lock_game(game).config().min_fall_interval_ms as u64);
        if cadence > floor {
            warn!(
                "tick cadence {:?} exceeds minimum fall interval {:?}, clamping",
                cadence, floor
            );
        }
        // Never below 1ms, even for an unvalidated zero floor.
        let cadence = cadence.min(floor).max(Duration::from_millis(1));

        let running = Arc::new(AtomicBool::new(true));
        let weak = Arc::downgrade(game);
        let flag = Arc::clone(&running);
        let handle = thread::Builder::new()
            .name("blockfall-tick".into())
            .spawn(move || run(weak, flag, cadence))?;

        debug!("tick driver started at {:?}", cadence);
        Ok(Self {
            running,
            handle: Some(handle),
            cadence,
        })
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// True while the thread has been neither stopped nor finished.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop ticking and wait for the thread to exit. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        let Some(handle) = self.handle.take() else {
            return;
        };
        handle.thread().unpark();
        if handle.join().is_err() {
            warn!("tick driver thread panicked");
        }
        debug!("tick driver stopped");
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run<R: RngCore>(game: Weak<Mutex<GameState<R>>>, running: Arc<AtomicBool>, cadence: Duration) {
    let clock = FrameDriver::new();
    while running.load(Ordering::Acquire) {
        let Some(game) = game.upgrade() else {
            debug!("session dropped, tick driver exiting");
            break;
        };
        {
            let mut state = lock_game(&game);
            // Status is read under the same lock that applies the step.
            if state.is_playing() {
                clock.tick(&mut *state);
            }
        }
        drop(game);
        thread::park_timeout(cadence);
    }
    running.store(false, Ordering::Release);
}
