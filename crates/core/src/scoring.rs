//! Scoring module - line clear points, drop points, level and gravity speed
//!
//! Classic fixed table: `[0, 100, 300, 500, 800][lines] * level`, with the
//! level taken before the clear is counted. Levels start at 1 and advance
//! every ten lines.

use crate::types::{
    BASE_TICK_INTERVAL_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES,
    SOFT_DROP_POINTS_PER_ROW, TICK_INTERVAL_STEP_MS,
};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Points for dropping `rows` rows (hard drop pays double)
pub fn calculate_drop_score(rows: u32, hard: bool) -> u32 {
    let per_row = if hard {
        HARD_DROP_POINTS_PER_ROW
    } else {
        SOFT_DROP_POINTS_PER_ROW
    };
    rows.saturating_mul(per_row)
}

/// Level reached after clearing `total_lines` lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, never below `floor_ms`
pub fn get_tick_interval_ms(level: u32, floor_ms: u32) -> u32 {
    let step = level.saturating_sub(1).saturating_mul(TICK_INTERVAL_STEP_MS);
    BASE_TICK_INTERVAL_MS.saturating_sub(step).max(floor_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MIN_TICK_INTERVAL_MS;

    #[test]
    fn test_line_score_table() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);
    }

    #[test]
    fn test_line_score_scales_with_level() {
        assert_eq!(calculate_line_score(1, 2), 200);
        assert_eq!(calculate_line_score(4, 3), 2400);
    }

    #[test]
    fn test_line_score_out_of_range() {
        assert_eq!(calculate_line_score(5, 1), 0);
    }

    #[test]
    fn test_drop_score() {
        assert_eq!(calculate_drop_score(1, false), 1);
        assert_eq!(calculate_drop_score(18, true), 36);
        assert_eq!(calculate_drop_score(0, true), 0);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(20), 3);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(get_tick_interval_ms(1, MIN_TICK_INTERVAL_MS), 1000);
        assert_eq!(get_tick_interval_ms(2, MIN_TICK_INTERVAL_MS), 900);
        assert_eq!(get_tick_interval_ms(10, MIN_TICK_INTERVAL_MS), 100);
    }

    #[test]
    fn test_tick_interval_is_clamped() {
        assert_eq!(get_tick_interval_ms(11, MIN_TICK_INTERVAL_MS), 100);
        assert_eq!(get_tick_interval_ms(50, MIN_TICK_INTERVAL_MS), 100);
        assert_eq!(get_tick_interval_ms(50, 40), 40);
        assert_eq!(get_tick_interval_ms(u32::MAX, MIN_TICK_INTERVAL_MS), 100);
    }
}
