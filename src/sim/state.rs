//! Game state and core simulation types
//!
//! Everything the frame driver mutates between frames lives here.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use crate::consts::*;

/// Run state supplied by the session container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Title screen, nothing moves
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, scene frozen
    Ended,
}

/// Pixel extent of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface with no area cannot be simulated against or drawn to
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The player's craft
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Craft {
    /// Top edge (pixels, y grows downward)
    pub y: f32,
    /// Vertical velocity (pixels/tick)
    pub velocity: f32,
    /// Tilt (radians), derived from velocity
    pub rotation: f32,
}

impl Craft {
    /// A craft at rest, vertically centred on a surface
    pub fn centered(surface: Surface) -> Self {
        Self {
            y: surface.height / 2.0,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    /// Centre of the craft body, used as the rotation pivot when drawing
    pub fn center(&self) -> Vec2 {
        Vec2::new(CRAFT_X + CRAFT_WIDTH / 2.0, self.y + CRAFT_HEIGHT / 2.0)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + CRAFT_HEIGHT
    }
}

/// A gated pillar pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top edge of the passable gap
    pub gap_top: f32,
    /// Craft has already been credited for clearing this obstacle
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + PIPE_GAP
    }
}

/// Background parallax star (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
}

/// Complete simulation state for one game instance
#[derive(Debug, Clone)]
pub struct GameState {
    /// Gap placement and star scatter
    pub rng: Pcg32,
    pub craft: Craft,
    /// Oldest (leftmost) first
    pub obstacles: VecDeque<Obstacle>,
    pub stars: Vec<Star>,
    pub score: u32,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed, stars scattered over `surface`
    pub fn new(seed: u64, surface: Surface, star_count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = super::starfield::generate(&mut rng, surface, star_count);
        Self {
            rng,
            craft: Craft::centered(surface),
            obstacles: VecDeque::new(),
            stars,
            score: 0,
            time_ticks: 0,
        }
    }

    /// Start a fresh run. Stars and the RNG stream carry over.
    pub fn reset(&mut self, surface: Surface) {
        self.craft = Craft::centered(surface);
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_surface() {
        assert!(Surface::default().is_empty());
        assert!(Surface::new(400.0, 0.0).is_empty());
        assert!(!Surface::new(400.0, 800.0).is_empty());
    }

    #[test]
    fn test_reset_centres_and_clears() {
        let surface = Surface::new(400.0, 800.0);
        let mut state = GameState::new(7, surface, 10);
        state.craft = Craft {
            y: 12.0,
            velocity: 4.0,
            rotation: 0.3,
        };
        state.obstacles.push_back(Obstacle::new(200.0, 300.0));
        state.score = 9;

        state.reset(Surface::new(400.0, 600.0));

        assert_eq!(state.craft, Craft::centered(Surface::new(400.0, 600.0)));
        assert_eq!(state.craft.y, 300.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.stars.len(), 10);
    }
}
