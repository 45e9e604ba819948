//! Score derived from the camera's highest scroll line

use crate::consts::{SCORE_BASELINE, SCORE_DIVISOR};

/// Raw score for a scroll high-water mark (negative before the first climb)
#[inline]
pub fn score_for_scroll(max_scroll_y: f32) -> f32 {
    (max_scroll_y - SCORE_BASELINE) / SCORE_DIVISOR
}

/// Whole, non-negative score for display and high-score comparison
#[inline]
pub fn display_score(score: f32) -> u64 {
    score.max(0.0).floor() as u64
}
