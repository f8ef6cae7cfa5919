//! Score-driven scroll speed

use crate::consts::{BASE_SPEED, POINTS_PER_LEVEL, SPEED_STEP};

/// Difficulty level for a score (0 for the first `POINTS_PER_LEVEL` points)
#[inline]
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL
}

/// Obstacle scroll speed (pixels/tick) for a score
#[inline]
pub fn scroll_speed(score: u32) -> f32 {
    BASE_SPEED + level_for_score(score) as f32 * SPEED_STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_speed_steps_every_five_points() {
        for score in 0..=4 {
            assert_eq!(scroll_speed(score), BASE_SPEED);
        }
        for score in 5..=9 {
            assert_eq!(scroll_speed(score), BASE_SPEED + SPEED_STEP);
        }
        assert_eq!(scroll_speed(10), BASE_SPEED + 2.0 * SPEED_STEP);
    }

    proptest! {
        #[test]
        fn speed_is_non_decreasing(score in 0u32..100_000) {
            prop_assert!(scroll_speed(score + 1) >= scroll_speed(score));
        }

        #[test]
        fn speed_matches_step_formula(score in 0u32..100_000) {
            let expected = BASE_SPEED + (score / 5) as f32 * SPEED_STEP;
            prop_assert_eq!(scroll_speed(score), expected);
        }
    }
}
