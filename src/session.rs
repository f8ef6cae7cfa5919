//! Start / playing / game-over container
//!
//! Holds what the player sees around the core: which screen is up, the
//! current score and the best score. The frame driver reports into it through
//! [`GameListener`]; the binary pushes `status()` back into the driver.

use crate::best_score::BestScore;
use crate::driver::GameListener;
use crate::sim::RunState;

#[derive(Debug, Clone, Default)]
pub struct Session {
    status: RunState,
    score: u32,
    best: BestScore,
    /// Set when the last finished run beat the previous best
    new_best: bool,
}

impl Session {
    pub fn new(best: BestScore) -> Self {
        Self {
            best,
            ..Default::default()
        }
    }

    pub fn status(&self) -> RunState {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best.best
    }

    pub fn is_new_best(&self) -> bool {
        self.new_best
    }

    /// Launch (or relaunch) a run from the title or game-over screen
    pub fn start(&mut self) -> RunState {
        self.score = 0;
        self.new_best = false;
        self.status = RunState::Running;
        self.status
    }
}

impl GameListener for Session {
    fn score_changed(&mut self, score: u32) {
        self.score = score;
    }

    fn game_over(&mut self, final_score: u32) {
        // Duplicate reports for the same run are ignored
        if self.status != RunState::Running {
            return;
        }
        self.score = final_score;
        self.status = RunState::Ended;
        if self.best.record(final_score) {
            self.new_best = true;
            self.best.save();
            log::info!("New best score: {}", final_score);
        }
    }
}
