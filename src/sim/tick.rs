//! One simulation step
//!
//! Advances a running game by exactly one animation frame. The order is
//! fixed: stars, craft, spawn, scroll, score/collide, despawn.

use super::collision::{self, Crash};
use super::state::{GameState, Surface};
use super::{difficulty, field, starfield};

/// Something the container needs to hear about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score changed (increment or reset)
    ScoreChanged(u32),
    /// The run is over
    GameOver { score: u32, cause: Crash },
}

/// Advance the game state by one frame and collect the resulting events.
///
/// At most one `GameOver` is produced per call, always last. An empty
/// surface is a no-op.
pub fn tick(state: &mut GameState, surface: Surface) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if surface.is_empty() {
        return events;
    }

    state.time_ticks += 1;

    starfield::advance(&mut state.stars, &mut state.rng, surface);

    state.craft.integrate();

    field::spawn(state, surface);
    let speed = difficulty::scroll_speed(state.score);
    field::advance(state, speed);

    let eval = collision::evaluate(
        &state.craft,
        state.obstacles.iter_mut(),
        surface,
        &mut state.score,
    );
    events.extend(eval.scores.into_iter().map(GameEvent::ScoreChanged));

    field::despawn(state);

    if let Some(cause) = eval.crash {
        events.push(GameEvent::GameOver {
            score: state.score,
            cause,
        });
    }

    events
}
