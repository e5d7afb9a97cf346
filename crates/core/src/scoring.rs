//! Scoring module - line-clear points, levels and gravity speed
//!
//! Rules:
//! - Each lock that clears lines awards `lines * 100 * level`.
//! - Level starts at 1 and rises by one every 10 cleared lines.
//! - Gravity starts at 1000ms per row and speeds up by 100ms per level,
//!   never faster than 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_POINTS,
    START_LEVEL,
};

/// Score calculation result for one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines_cleared: u32,
    pub points: u32,
    /// Total lines after this lock
    pub lines_total: u32,
    /// Level after this lock
    pub level: u32,
    /// Whether this lock moved the game to a new level
    pub leveled_up: bool,
}

/// Points for clearing `lines` rows at `level`
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Level reached after `lines_total` cleared lines
pub fn level_for_lines(lines_total: u32) -> u32 {
    lines_total / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval (ms per row) for a level
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(START_LEVEL);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}

/// Score a lock that cleared `lines` rows.
///
/// Points use the level in effect *before* the clear; the level is then
/// recomputed from the new line total.
pub fn calculate_score(lines: u32, level: u32, lines_total_before: u32) -> ScoreResult {
    let points = calculate_line_score(lines, level);
    let lines_total = lines_total_before.saturating_add(lines);
    let new_level = level_for_lines(lines_total);

    ScoreResult {
        lines_cleared: lines,
        points,
        lines_total,
        level: new_level,
        leveled_up: new_level > level,
    }
}
