//! State machine scenarios with scripted piece sequences

use blockfall::core::{Board, GameConfig, GameState};
use blockfall::types::{GameAction, GameStatus, PieceKind, Position, Rotation};
use rand::RngCore;

/// Replays a fixed list of piece kinds, cycling when exhausted.
struct ScriptedRng {
    kinds: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    fn new(kinds: &[PieceKind]) -> Self {
        let kinds = kinds
            .iter()
            .map(|k| PieceKind::ALL.iter().position(|a| a == k).unwrap() as u32)
            .collect();
        Self { kinds, cursor: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.kinds[self.cursor % self.kinds.len()];
        self.cursor += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn game_with(kinds: &[PieceKind]) -> GameState<ScriptedRng> {
    GameState::with_rng(GameConfig::default(), ScriptedRng::new(kinds))
}

#[test]
fn test_start_draws_two_pieces() {
    let mut game = game_with(&[PieceKind::S, PieceKind::Z]);
    game.start();

    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.active().unwrap().kind, PieceKind::S);
    assert_eq!(game.next_piece().unwrap().kind, PieceKind::Z);
    assert_eq!(game.position(), Position::new(3, 0));
}

#[test]
fn test_i_piece_locks_after_nineteen_rows() {
    let mut game = game_with(&[PieceKind::I, PieceKind::O]);
    game.start();
    assert_eq!(game.position(), Position::new(3, 0));

    for step in 1..=19 {
        assert!(game.move_by(0, 1), "step {} should descend", step);
        assert_eq!(game.position().y, step);
    }
    assert_eq!(game.pieces_locked(), 0);

    // The 20th downward move is blocked by the floor and locks.
    assert!(!game.move_by(0, 1));
    assert_eq!(game.pieces_locked(), 1);
    for x in 3..7 {
        assert_eq!(game.board().get(x, 19), Some(Some(PieceKind::I)));
    }
    assert_eq!(game.board().occupied_count(), 4);

    // Respawn: current <- next, next <- random.
    assert_eq!(game.active().unwrap().kind, PieceKind::O);
    assert_eq!(game.position(), Position::new(4, 0));
    assert_eq!(game.next_piece().unwrap().kind, PieceKind::I);
    assert_eq!(game.score(), 0);
}

fn board_with_hole_at_five() -> Board {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::J, Some(5));
    board
}

fn vertical_i_over_hole(game: &mut GameState<ScriptedRng>) {
    game.start_with_board(board_with_hole_at_five());
    assert!(game.rotate());
    assert_eq!(game.active().unwrap().rotation, Rotation::East);
    assert!(game.move_by(1, 0));
    assert!(game.move_by(1, 0));
    assert_eq!(game.position(), Position::new(5, 0));
}

#[test]
fn test_vertical_i_clears_bottom_row() {
    let mut game = game_with(&[PieceKind::I, PieceKind::T]);
    vertical_i_over_hole(&mut game);

    while game.move_by(0, 1) {}

    let event = game.take_last_event().unwrap();
    assert_eq!(event.kind, PieceKind::I);
    assert_eq!(event.position, Position::new(5, 16));
    assert_eq!(event.cleared_rows.as_slice(), &[19]);
    assert_eq!(event.points, 40);
    assert_eq!(event.hard_drop_rows, 0);

    assert_eq!(game.lines(), 1);
    assert_eq!(game.score(), 40);
    assert_eq!(game.level(), 0);

    // The three I cells above the cleared row shift down by one.
    assert_eq!(game.board().occupied_count(), 3);
    for y in 17..20 {
        assert_eq!(game.board().get(5, y), Some(Some(PieceKind::I)));
    }
}

#[test]
fn test_hard_drop_clear_adds_drop_bonus() {
    let mut game = game_with(&[PieceKind::I, PieceKind::T]);
    vertical_i_over_hole(&mut game);
    assert_eq!(game.ghost_position(), Some(Position::new(5, 16)));

    assert!(game.apply_action(GameAction::HardDrop));

    let event = game.take_last_event().unwrap();
    assert_eq!(event.hard_drop_rows, 16);
    assert_eq!(event.points, 40);
    assert_eq!(game.score(), 16 * 2 + 40);
    assert_eq!(game.active().unwrap().kind, PieceKind::T);
}

#[test]
fn test_tetris_at_level_boundary_uses_new_level() {
    let config = GameConfig {
        lines_per_level: 4,
        ..GameConfig::default()
    };
    let mut game = GameState::with_rng(config, ScriptedRng::new(&[PieceKind::I, PieceKind::O]));
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, PieceKind::L, Some(0));
    }
    game.start_with_board(board);
    assert!(game.rotate());
    while game.move_by(-1, 0) {}
    assert_eq!(game.position().x, 0);

    assert!(game.hard_drop());

    let event = game.take_last_event().unwrap();
    assert_eq!(event.cleared_rows.len(), 4);
    assert!(event.level_up);
    assert_eq!(game.level(), 1);
    assert_eq!(event.points, 1200 * 2);
    assert!(game.board().is_empty());
}

#[test]
fn test_prepared_board_with_five_full_rows_reports_all_of_them() {
    let mut game = game_with(&[PieceKind::O, PieceKind::T]);
    let mut board = Board::new();
    for y in 15..20 {
        board.fill_row(y, PieceKind::J, None);
    }
    game.start_with_board(board);
    assert_eq!(game.ghost_position(), Some(Position::new(4, 13)));

    assert!(game.hard_drop());

    let event = game.take_last_event().unwrap();
    assert_eq!(event.cleared_rows.as_slice(), &[15, 16, 17, 18, 19]);
    assert_eq!(event.hard_drop_rows, 13);
    assert_eq!(event.points, 1200);
    assert_eq!(game.lines(), 5);
    assert_eq!(game.score(), 13 * 2 + 1200);
    assert_eq!(game.board().occupied_count(), 4);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(game.board().get(x, y), Some(Some(PieceKind::O)));
    }
}

#[test]
fn test_rotation_against_left_wall_kicks_right() {
    let mut game = game_with(&[PieceKind::T, PieceKind::O]);
    game.start();
    assert!(game.rotate());
    for _ in 0..4 {
        assert!(game.move_by(-1, 0));
    }
    assert_eq!(game.position(), Position::new(-1, 0));
    assert!(!game.move_by(-1, 0));

    assert!(game.rotate());
    assert_eq!(game.active().unwrap().rotation, Rotation::South);
    assert_eq!(game.position(), Position::new(0, 0));
}

#[test]
fn test_rotation_blocked_by_stack_changes_nothing() {
    let mut game = game_with(&[PieceKind::T, PieceKind::O]);
    let mut board = Board::new();
    board.set(2, 11, Some(PieceKind::Z));
    game.start_with_board(board);

    assert!(game.rotate());
    for _ in 0..4 {
        assert!(game.move_by(-1, 0));
    }
    for _ in 0..10 {
        assert!(game.move_by(0, 1));
    }
    assert_eq!(game.position(), Position::new(-1, 10));
    let before = game.snapshot();

    assert!(!game.rotate());
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.pieces_locked(), 0);
}

#[test]
fn test_full_top_rows_end_game_on_start() {
    let mut game = game_with(&[PieceKind::O]);
    let mut board = Board::new();
    board.fill_row(0, PieceKind::Z, None);
    board.fill_row(1, PieceKind::Z, None);

    game.start_with_board(board);

    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(game.active().is_none());
    assert!(!game.move_by(0, 1));
    assert!(!game.hard_drop());
    assert!(game.ghost_position().is_none());
}

#[test]
fn test_stack_out_ends_game() {
    let mut game = game_with(&[PieceKind::O]);
    game.start();

    let mut drops = 0;
    while game.status() == GameStatus::Playing {
        assert!(game.hard_drop());
        drops += 1;
        assert!(drops <= 20, "O pieces stack to the top within 10 drops");
    }

    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(drops, 10);
    assert!(game.active().is_none());
    let score = game.score();
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(!game.apply_action(GameAction::TogglePause));
    assert_eq!(game.score(), score);

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.board().is_empty());
    assert_eq!(game.score(), 0);
}

#[test]
fn test_horizontal_and_rotation_failures_never_lock() {
    let mut game = game_with(&[PieceKind::I]);
    game.start();
    while game.move_by(1, 0) {}
    assert!(!game.move_by(1, 0));
    while game.move_by(0, 1) {}
    // Locked by the blocked downward move only.
    assert_eq!(game.pieces_locked(), 1);

    // Horizontal bar resting on the floor at the right wall.
    let mut game = game_with(&[PieceKind::I]);
    game.start();
    for _ in 0..19 {
        game.move_by(0, 1);
    }
    while game.move_by(1, 0) {}
    let _ = game.rotate();
    let _ = game.move_by(-1, 0);
    assert_eq!(game.pieces_locked(), 0);
}

#[test]
fn test_automatic_descent_follows_level_interval() {
    let mut game = game_with(&[PieceKind::T]);
    game.start();
    assert_eq!(game.fall_interval_ms(), 800);

    assert!(!game.advance_time(1_000));
    assert!(!game.advance_time(1_800));
    assert!(game.advance_time(1_801));
    assert_eq!(game.position().y, 1);

    // Paused: no descent, and resuming forgets the paused time.
    assert!(game.toggle_pause());
    assert!(!game.advance_time(10_000));
    assert!(game.toggle_pause());
    assert!(!game.advance_time(10_001));
    assert!(!game.advance_time(10_801));
    assert!(game.advance_time(10_802));
    assert_eq!(game.position().y, 2);
}

#[test]
fn test_automatic_descent_locks_at_floor() {
    let mut game = game_with(&[PieceKind::I, PieceKind::S]);
    game.start();
    for _ in 0..19 {
        game.move_by(0, 1);
    }
    game.advance_time(0);
    assert!(game.advance_time(801));
    assert_eq!(game.pieces_locked(), 1);
    assert_eq!(game.active().unwrap().kind, PieceKind::S);

    // The spawned piece does not inherit an accumulated drop.
    assert!(!game.advance_time(1_601));
    assert!(game.advance_time(1_602));
}

#[test]
fn test_restart_forgets_the_previous_fall_anchor() {
    let mut game = game_with(&[PieceKind::T]);
    game.start();
    assert!(!game.advance_time(0));
    assert!(!game.advance_time(700));

    game.restart();

    // The old anchor would expire here; the fresh piece only re-anchors.
    assert!(!game.advance_time(801));
    assert_eq!(game.position().y, 0);
    assert!(!game.advance_time(1_601));
    assert!(game.advance_time(1_602));
    assert_eq!(game.position().y, 1);
}

#[test]
fn test_reset_returns_to_idle_from_any_state() {
    let mut game = game_with(&[PieceKind::L]);
    game.start();
    game.toggle_pause();
    game.reset();

    assert_eq!(game.status(), GameStatus::Idle);
    assert!(game.active().is_none());
    assert!(game.next_piece().is_none());
    assert!(!game.toggle_pause());
}

#[test]
fn test_ghost_query_is_pure() {
    let mut game = game_with(&[PieceKind::Z, PieceKind::J]);
    game.start();
    let before = game.snapshot();

    let first = game.ghost_position();
    let second = game.ghost_position();

    assert_eq!(first, second);
    assert_eq!(first, Some(Position::new(3, 18)));
    assert_eq!(game.snapshot(), before);
}
