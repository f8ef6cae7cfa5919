//! Parallax starfield
//!
//! Purely cosmetic; stars never take part in collisions or scoring and scroll
//! at their own speeds regardless of difficulty.

use glam::Vec2;
use rand::Rng;

use super::state::{Star, Surface};

/// Scatter `count` stars over the surface
pub fn generate<R: Rng>(rng: &mut R, surface: Surface, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random::<f32>() * surface.width,
                rng.random::<f32>() * surface.height,
            ),
            size: rng.random::<f32>() * 2.5,
            speed: rng.random::<f32>() * 2.0 + 0.5,
            opacity: rng.random::<f32>() * 0.5 + 0.3,
        })
        .collect()
}

/// Scroll every star left; stars leaving the left edge re-enter on the right
/// at a fresh height
pub fn advance<R: Rng>(stars: &mut [Star], rng: &mut R, surface: Surface) {
    for star in stars.iter_mut() {
        star.pos.x -= star.speed;
        if star.pos.x < 0.0 {
            star.pos.x = surface.width;
            star.pos.y = rng.random::<f32>() * surface.height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generated_ranges() {
        let surface = Surface::new(640.0, 480.0);
        let mut rng = Pcg32::seed_from_u64(11);
        let stars = generate(&mut rng, surface, 150);
        assert_eq!(stars.len(), 150);
        for star in &stars {
            assert!((0.0..640.0).contains(&star.pos.x));
            assert!((0.0..480.0).contains(&star.pos.y));
            assert!((0.0..2.5).contains(&star.size));
            assert!((0.5..2.5).contains(&star.speed));
            assert!((0.3..0.8).contains(&star.opacity));
        }
    }

    #[test]
    fn test_wraps_to_right_edge() {
        let surface = Surface::new(640.0, 480.0);
        let mut rng = Pcg32::seed_from_u64(11);
        let mut stars = vec![
            Star {
                pos: Vec2::new(1.0, 50.0),
                size: 1.0,
                speed: 2.0,
                opacity: 0.5,
            },
            Star {
                pos: Vec2::new(300.0, 50.0),
                size: 1.0,
                speed: 2.0,
                opacity: 0.5,
            },
        ];

        advance(&mut stars, &mut rng, surface);

        assert_eq!(stars[0].pos.x, 640.0);
        assert!((0.0..480.0).contains(&stars[0].pos.y));
        assert_eq!(stars[1].pos, Vec2::new(298.0, 50.0));
    }
}
