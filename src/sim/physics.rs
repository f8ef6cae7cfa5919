//! Vertical point-mass integration for the craft

use super::state::Craft;
use crate::consts::*;

/// Tilt for a given velocity, clamped to ±`MAX_TILT`
#[inline]
pub fn orientation_for(velocity: f32) -> f32 {
    (velocity * ORIENTATION_GAIN).clamp(-MAX_TILT, MAX_TILT)
}

impl Craft {
    /// Advance one tick: gravity, then position, then tilt.
    ///
    /// Position is not clamped; leaving the screen is a collision concern.
    pub fn integrate(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
        self.rotation = orientation_for(self.velocity);
    }

    /// Instant upward thrust, replacing whatever velocity the craft had
    pub fn impulse(&mut self) {
        self.velocity = JUMP_STRENGTH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_only_ten_ticks() {
        let mut craft = Craft {
            y: 400.0,
            velocity: 0.0,
            rotation: 0.0,
        };
        for _ in 0..10 {
            craft.integrate();
        }
        // 0.3 * (1 + 2 + ... + 10) = 16.5
        assert!((craft.velocity - 3.0).abs() < 1e-4);
        assert!((craft.y - 416.5).abs() < 1e-3);
        assert!((craft.rotation - 0.24).abs() < 1e-4);
    }

    #[test]
    fn test_velocity_grows_by_gravity_each_tick() {
        let mut craft = Craft::default();
        let mut last = craft.velocity;
        for _ in 0..50 {
            craft.integrate();
            assert!(craft.velocity > last);
            assert!((craft.velocity - last - GRAVITY).abs() < 1e-4);
            last = craft.velocity;
        }
    }

    #[test]
    fn test_impulse_overrides_velocity() {
        let mut craft = Craft {
            y: 100.0,
            velocity: 12.5,
            rotation: MAX_TILT,
        };
        craft.impulse();
        assert_eq!(craft.velocity, JUMP_STRENGTH);

        // The next tick integrates from the jump velocity
        craft.integrate();
        assert!((craft.velocity - (JUMP_STRENGTH + GRAVITY)).abs() < 1e-6);
        assert!((craft.y - (100.0 + JUMP_STRENGTH + GRAVITY)).abs() < 1e-4);
        assert!(craft.rotation < 0.0);
    }

    proptest! {
        #[test]
        fn orientation_is_always_clamped(velocity in -1.0e6f32..1.0e6) {
            let tilt = orientation_for(velocity);
            prop_assert!((-MAX_TILT..=MAX_TILT).contains(&tilt));
        }
    }
}
