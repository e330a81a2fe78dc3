//! Tick driver against a shared session

use std::thread;
use std::time::{Duration, Instant};

use blockfall::core::{GameConfig, GameState};
use blockfall::engine::{lock_game, share, FrameDriver, TickDriver};
use blockfall::types::{GameAction, GameStatus};

fn quick_config() -> GameConfig {
    GameConfig {
        base_fall_interval_ms: 20,
        fall_interval_step_ms: 0,
        min_fall_interval_ms: 20,
        ..GameConfig::default()
    }
}

fn wait_for(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if cond() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_driver_plays_a_game_to_the_end() {
    let mut state = GameState::with_config(quick_config(), 31);
    state.start();
    let game = share(state);
    let _driver = TickDriver::spawn(&game, Duration::from_millis(1)).unwrap();

    // With nobody steering, pieces pile up in the middle until a spawn fails.
    assert!(wait_for(Duration::from_secs(30), || {
        lock_game(&game).status() == GameStatus::GameOver
    }));
    let state = lock_game(&game);
    assert!(state.pieces_locked() > 0);
    assert!(state.active().is_none());
}

#[test]
fn test_pause_stops_descent_and_keeps_state() {
    let mut state = GameState::with_config(quick_config(), 5);
    state.start();
    let game = share(state);
    let driver = TickDriver::spawn(&game, Duration::from_millis(1)).unwrap();

    lock_game(&game).apply_action(GameAction::TogglePause);
    let paused = lock_game(&game).snapshot();
    thread::sleep(Duration::from_millis(100));

    assert!(driver.is_running());
    assert_eq!(lock_game(&game).snapshot(), paused);

    lock_game(&game).apply_action(GameAction::TogglePause);
    assert!(wait_for(Duration::from_secs(5), || {
        let state = lock_game(&game);
        state.snapshot() != paused
    }));
}

#[test]
fn test_input_and_driver_interleave_safely() {
    let mut state = GameState::with_config(quick_config(), 77);
    state.start();
    let game = share(state);
    let _driver = TickDriver::spawn(&game, Duration::from_millis(1)).unwrap();

    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::HardDrop,
    ];
    for i in 0..500 {
        let mut state = lock_game(&game);
        if state.status() == GameStatus::GameOver {
            state.restart();
        }
        state.apply_action(actions[i % actions.len()]);
        if let (Some(piece), position) = (state.active(), state.position()) {
            assert!(blockfall::core::is_valid_position(state.board(), &piece, position));
        }
    }
}

#[test]
fn test_restart_under_driver_keeps_fresh_piece_at_spawn() {
    let config = GameConfig {
        base_fall_interval_ms: 300,
        fall_interval_step_ms: 0,
        min_fall_interval_ms: 50,
        ..GameConfig::default()
    };
    let mut state = GameState::with_config(config, 12);
    state.start();
    let game = share(state);
    let _driver = TickDriver::spawn(&game, Duration::from_millis(1)).unwrap();

    // Let the driver anchor the first piece and most of an interval pass.
    thread::sleep(Duration::from_millis(250));
    lock_game(&game).restart();
    thread::sleep(Duration::from_millis(100));

    let state = lock_game(&game);
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.position().y, 0);
    assert_eq!(state.pieces_locked(), 0);
}

#[test]
fn test_drop_then_stop_is_clean() {
    let game = share(GameState::new(9));
    let mut driver = TickDriver::spawn_default(&game).unwrap();
    drop(game);
    assert!(wait_for(Duration::from_secs(5), || !driver.is_running()));
    driver.stop();
    driver.stop();
}

#[test]
fn test_frame_driver_with_explicit_instants() {
    let epoch = Instant::now();
    let clock = FrameDriver::with_epoch(epoch);
    let mut game = GameState::with_config(quick_config(), 1);
    game.start();

    let mut drops = 0;
    for frame in 0..100u64 {
        if clock.tick_at(&mut game, epoch + Duration::from_millis(frame * 7)) {
            drops += 1;
        }
    }
    // 693ms of frames at a 20ms interval, each drop waits for 21ms of frames.
    assert!(drops >= 20 && drops <= 34, "drops = {}", drops);
}
