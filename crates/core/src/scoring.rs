//! Scoring module - line clear points, levels and fall speed
//!
//! Classic scoring: `LINE_SCORES[lines] * (level + 1)`. Levels advance every
//! ten cleared lines and each level shortens the automatic fall interval by
//! 50ms down to a 50ms floor.
//!
//! The free functions use the default constants from [`crate::types`];
//! [`crate::config::GameConfig`] exposes the same rules with configurable
//! values and is what the state machine consults.

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL,
    LINE_SCORES, MIN_FALL_INTERVAL_MS,
};

/// Points for clearing `lines` rows in one placement at `level`, using `table`.
///
/// `lines` above 4 cannot happen on a 10-wide board and scores nothing.
pub fn line_clear_points(table: &[u32; 5], lines: usize, level: u32) -> u32 {
    debug_assert!(lines <= 4, "at most 4 rows clear per placement, got {lines}");
    match table.get(lines) {
        Some(&base) => base.saturating_mul(level.saturating_add(1)),
        None => 0,
    }
}

/// Classic line clear score
pub fn score_for_clear(lines: usize, level: u32) -> u32 {
    line_clear_points(&LINE_SCORES, lines, level)
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Interval between automatic descents for `level`
pub fn fall_interval_for_level(level: u32) -> u32 {
    fall_interval(
        BASE_FALL_INTERVAL_MS,
        FALL_INTERVAL_STEP_MS,
        MIN_FALL_INTERVAL_MS,
        level,
    )
}

/// `max(min, base - level * step)` without underflow
pub fn fall_interval(base_ms: u32, step_ms: u32, min_ms: u32, level: u32) -> u32 {
    base_ms
        .saturating_sub(level.saturating_mul(step_ms))
        .max(min_ms)
}

/// Hard drop bonus for descending `rows`
pub fn hard_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}
