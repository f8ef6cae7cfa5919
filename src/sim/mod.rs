//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per animation frame, no sub-stepping
//! - Seeded RNG only
//! - Obstacles kept in spawn (left to right) order
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod field;
pub mod physics;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::{Crash, Evaluation, evaluate, hits_obstacle, out_of_bounds};
pub use difficulty::{level_for_score, scroll_speed};
pub use physics::orientation_for;
pub use state::{Craft, GameState, Obstacle, RunState, Star, Surface};
pub use tick::{GameEvent, tick};
