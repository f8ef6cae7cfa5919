//! Collision detection and scoring
//!
//! Axis-aligned only: the craft hitbox is its bounding box shrunk by
//! `HITBOX_PADDING`, and an obstacle is solid everywhere in its column except
//! the gap.

use super::state::{Craft, Obstacle, Surface};
use crate::consts::*;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    /// Hit a pillar
    Obstacle,
    /// Flew too far above the surface
    OffTop,
    /// Fell too far below the surface
    OffBottom,
}

/// Does the padded craft hitbox overlap either solid part of the obstacle?
pub fn hits_obstacle(craft: &Craft, obstacle: &Obstacle) -> bool {
    let overlaps_column = CRAFT_X + CRAFT_WIDTH - HITBOX_PADDING > obstacle.x
        && CRAFT_X + HITBOX_PADDING < obstacle.right();
    if !overlaps_column {
        return false;
    }

    let above_gap = craft.y + HITBOX_PADDING < obstacle.gap_top;
    let below_gap = craft.y + CRAFT_HEIGHT - HITBOX_PADDING > obstacle.gap_bottom();
    above_gap || below_gap
}

/// Out-of-bounds check with `BOUNDARY_LENIENCY` slack past each edge
pub fn out_of_bounds(craft: &Craft, surface: Surface) -> Option<Crash> {
    if craft.y < -BOUNDARY_LENIENCY {
        Some(Crash::OffTop)
    } else if craft.bottom() > surface.height + BOUNDARY_LENIENCY {
        Some(Crash::OffBottom)
    } else {
        None
    }
}

/// Credit the craft for an obstacle whose right edge it has passed.
/// Returns true only the first time.
pub fn try_score(obstacle: &mut Obstacle) -> bool {
    if !obstacle.passed && obstacle.right() < CRAFT_X {
        obstacle.passed = true;
        true
    } else {
        false
    }
}

/// Outcome of one scoring/collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Score after each increment, in order
    pub scores: Vec<u32>,
    /// First crash found this pass
    pub crash: Option<Crash>,
}

/// Score and collide every obstacle, left to right.
///
/// Per obstacle the order is score, then collide. A crash does not stop
/// scoring of the remaining obstacles, so the reported final score includes
/// everything cleared this tick; only the first crash is kept.
pub fn evaluate<'a, I>(craft: &Craft, obstacles: I, surface: Surface, score: &mut u32) -> Evaluation
where
    I: IntoIterator<Item = &'a mut Obstacle>,
{
    let mut eval = Evaluation::default();

    for obstacle in obstacles {
        if try_score(obstacle) {
            *score += 1;
            eval.scores.push(*score);
        }

        if eval.crash.is_none() {
            if hits_obstacle(craft, obstacle) {
                eval.crash = Some(Crash::Obstacle);
            } else {
                eval.crash = out_of_bounds(craft, surface);
            }
        }
    }

    // An empty field still has edges
    if eval.crash.is_none() {
        eval.crash = out_of_bounds(craft, surface);
    }

    eval
}
