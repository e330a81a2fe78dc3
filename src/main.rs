//! Terminal blockfall runner (default binary).
//!
//! Input and rendering run on the main thread; automatic descent runs on the
//! tick driver thread. Both go through the same session mutex.
//!
//! Logs go to stderr via `env_logger`; redirect it (`RUST_LOG=debug
//! blockfall 2>blockfall.log`) to keep them off the game screen.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use blockfall::core::{GameConfig, GameState};
use blockfall::engine::{lock_game, share, SharedGame, TickDriver};
use blockfall::input::{translate_event, InputCommand};
use blockfall::term::{clear_label, FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

/// How long a line clear banner stays on screen.
const BANNER_MS: u64 = 1200;

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Seed for the piece generator (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// JSON file overriding scoring and speed rules
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tick driver cadence in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,

    /// Hide the landing preview
    #[arg(long)]
    no_ghost: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting with seed {}", seed);

    let game = share(GameState::with_config(config, seed));
    let mut driver = TickDriver::spawn(&game, Duration::from_millis(args.tick_ms as u64))
        .context("spawning tick driver")?;

    let view = GameView::default().with_ghost(!args.no_ghost);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &game, view);

    driver.stop();
    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &SharedGame, view: GameView) -> Result<()> {
    let frame = Duration::from_millis(TICK_MS as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut banner: Option<(&'static str, Instant)> = None;

    lock_game(game).start();

    loop {
        let snap = {
            let mut state = lock_game(game);
            if let Some(event) = state.take_last_event() {
                if let Some(label) = clear_label(event.cleared_rows.len()) {
                    banner = Some((label, Instant::now()));
                }
            }
            state.snapshot()
        };
        if banner.is_some_and(|(_, shown)| shown.elapsed() > Duration::from_millis(BANNER_MS)) {
            banner = None;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, banner.map(|(text, _)| text), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(frame)? {
            continue;
        }
        let event = event::read()?;
        if let Event::Resize(..) = event {
            term.invalidate();
        }
        match translate_event(&event) {
            Some(InputCommand::Quit) => return Ok(()),
            Some(InputCommand::Action(action)) => {
                lock_game(game).apply_action(action);
            }
            None => {}
        }
    }
}
