//! Procedural obstacle field
//!
//! Obstacles spawn at the right edge at a fixed spacing; only the vertical
//! gap offset is random. The queue stays sorted left to right because new
//! obstacles always enter at `x = width` and everything scrolls at one speed.

use rand::Rng;

use super::state::{GameState, Obstacle, Surface};
use crate::consts::*;

/// Random gap top within the margins. Surfaces too short for both margins
/// pin the gap at `GAP_MARGIN`.
pub fn random_gap_top<R: Rng>(rng: &mut R, surface_height: f32) -> f32 {
    let span = (surface_height - PIPE_GAP - GAP_MARGIN * 2.0).max(0.0);
    GAP_MARGIN + rng.random::<f32>() * span
}

/// True when the field needs a new obstacle this tick
pub fn needs_spawn(last: Option<&Obstacle>, surface: Surface) -> bool {
    match last {
        None => true,
        Some(last) => last.x < surface.width - PIPE_SPACING,
    }
}

/// Append at most one obstacle at the right edge
pub fn spawn(state: &mut GameState, surface: Surface) -> bool {
    if !needs_spawn(state.obstacles.back(), surface) {
        return false;
    }

    let gap_top = random_gap_top(&mut state.rng, surface.height);
    log::debug!("Spawn obstacle at x={} gap_top={:.1}", surface.width, gap_top);
    state.obstacles.push_back(Obstacle::new(surface.width, gap_top));
    true
}

/// Scroll every obstacle left by `speed`
pub fn advance(state: &mut GameState, speed: f32) {
    for obstacle in state.obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Drop the oldest obstacle once it is well behind the craft (at most one per tick)
pub fn despawn(state: &mut GameState) -> bool {
    let expired = state
        .obstacles
        .front()
        .is_some_and(|o| o.right() < CRAFT_X - DESPAWN_DISTANCE);
    if expired {
        state.obstacles.pop_front();
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn surface() -> Surface {
        Surface::new(400.0, 800.0)
    }

    #[test]
    fn test_spawn_on_empty_field() {
        let mut state = GameState::new(1, surface(), 0);
        assert!(spawn(&mut state, surface()));
        assert_eq!(state.obstacles.len(), 1);
        let o = state.obstacles[0];
        assert_eq!(o.x, 400.0);
        assert!(!o.passed);
        assert!(o.gap_top >= GAP_MARGIN);
        assert!(o.gap_bottom() <= 800.0 - GAP_MARGIN);
    }

    #[test]
    fn test_spawn_waits_for_spacing() {
        let mut state = GameState::new(1, surface(), 0);
        spawn(&mut state, surface());

        // 400 - 300 = 100; the last obstacle must be strictly left of it
        state.obstacles[0].x = 100.0;
        assert!(!spawn(&mut state, surface()));
        state.obstacles[0].x = 99.9;
        assert!(spawn(&mut state, surface()));
        assert_eq!(state.obstacles.len(), 2);
        assert!(!spawn(&mut state, surface()));
    }

    #[test]
    fn test_needs_spawn_spacing_line() {
        let last = Obstacle::new(150.0, 200.0);
        assert!(!needs_spawn(Some(&last), surface()));
        assert!(needs_spawn(Some(&last), Surface::new(460.0, 800.0)));
        assert!(needs_spawn(None, surface()));
    }

    #[test]
    fn test_short_surface_pins_gap() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(random_gap_top(&mut rng, 300.0), GAP_MARGIN);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = GameState::new(42, surface(), 0);
        let mut b = GameState::new(42, surface(), 0);
        for _ in 0..400 {
            for state in [&mut a, &mut b] {
                spawn(state, surface());
                advance(state, BASE_SPEED);
                despawn(state);
            }
        }
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_despawn_only_far_behind_craft() {
        let mut state = GameState::new(1, surface(), 0);
        // Right edge at -100 exactly: not yet
        state.obstacles.push_back(Obstacle::new(-160.0, 200.0));
        state.obstacles.push_back(Obstacle::new(-150.0, 200.0));
        assert!(!despawn(&mut state));
        state.obstacles[0].x = -160.5;
        state.obstacles[1].x = -160.5;
        // One per tick
        assert!(despawn(&mut state));
        assert_eq!(state.obstacles.len(), 1);
        assert!(despawn(&mut state));
        assert!(state.obstacles.is_empty());
        assert!(!despawn(&mut state));
    }

    proptest! {
        #[test]
        fn field_stays_sorted_with_constant_spacing(
            seed in any::<u64>(),
            ticks in 1usize..2000,
            speed_level in 0u32..6,
        ) {
            let s = surface();
            let speed = BASE_SPEED + speed_level as f32 * SPEED_STEP;
            let mut state = GameState::new(seed, s, 0);
            for _ in 0..ticks {
                spawn(&mut state, s);
                advance(&mut state, speed);
                despawn(&mut state);

                let xs: Vec<f32> = state.obstacles.iter().map(|o| o.x).collect();
                prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
                for o in &state.obstacles {
                    prop_assert!(o.gap_top >= GAP_MARGIN);
                    prop_assert!(o.gap_bottom() <= s.height - GAP_MARGIN + 1e-3);
                }
            }

            // Spawns happen on the first tick past the spacing line, so the
            // distance between neighbours is the same for every pair
            let xs: Vec<f32> = state.obstacles.iter().map(|o| o.x).collect();
            let gaps: Vec<f32> = xs.windows(2).map(|w| w[1] - w[0]).collect();
            for pair in gaps.windows(2) {
                prop_assert!((pair[0] - pair[1]).abs() < 1e-2);
            }
        }
    }
}
