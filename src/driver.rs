//! Frame driver
//!
//! Owns the simulation state and runs one frame per scheduled callback:
//! simulate (only while running), then paint (always). The next frame is
//! requested through an injected [`FrameScheduler`], so tests can drive
//! frames by hand and the browser build can plug in `requestAnimationFrame`.

use crate::renderer::{Scene, build_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RunState, Surface, tick};

/// Opaque id of a pending frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Next-frame capability
pub trait FrameScheduler {
    /// Ask for one more frame callback. `None` if the platform refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Withdraw a pending callback
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Receiver of the notifications the core produces
pub trait GameListener {
    /// Fired on every increment and on reset to 0
    fn score_changed(&mut self, score: u32);
    /// Fired once per run when the craft crashes
    fn game_over(&mut self, final_score: u32);
}

/// Something that can present a finished scene
pub trait Painter {
    fn paint(&mut self, scene: &Scene);
}

/// Per-frame orchestration loop
pub struct FrameDriver<S: FrameScheduler, P: Painter> {
    state: GameState,
    run_state: RunState,
    surface: Surface,
    settings: Settings,
    scheduler: S,
    painter: Option<P>,
    pending: Option<FrameHandle>,
    torn_down: bool,
    /// Timestamp of the latest frame (ms), drives cosmetic pulses
    last_time: f64,
}

impl<S: FrameScheduler, P: Painter> FrameDriver<S, P> {
    pub fn new(seed: u64, surface: Surface, settings: Settings, scheduler: S) -> Self {
        let state = GameState::new(seed, surface, settings.star_count());
        log::info!(
            "Frame driver created (seed {}, {}x{}, {} stars)",
            seed,
            surface.width,
            surface.height,
            state.stars.len()
        );
        Self {
            state,
            run_state: RunState::Idle,
            surface,
            settings,
            scheduler,
            painter: None,
            pending: None,
            torn_down: false,
            last_time: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn painter_mut(&mut self) -> Option<&mut P> {
        self.painter.as_mut()
    }

    /// Install the painter once the drawing surface is ready
    pub fn attach_painter(&mut self, painter: P) {
        self.painter = Some(painter);
    }

    /// Frame callback currently scheduled, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Schedule the first frame. Calling again while a frame is pending does nothing.
    pub fn start(&mut self) {
        if self.torn_down || self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request_frame();
    }

    /// Apply the container's run state. Only the edge into `Running` resets.
    pub fn set_run_state<L: GameListener>(&mut self, next: RunState, listener: &mut L) {
        if next == self.run_state {
            return;
        }
        if next == RunState::Running {
            self.state.reset(self.surface);
            listener.score_changed(0);
            log::info!("Run started at y={:.1}", self.state.craft.y);
        }
        self.run_state = next;
    }

    /// Player thrust. Ignored unless running. Returns whether it took effect.
    pub fn impulse(&mut self) -> bool {
        if self.run_state != RunState::Running {
            return false;
        }
        self.state.craft.impulse();
        true
    }

    /// The surface changed size. The craft is only re-centred while idle.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        if self.run_state == RunState::Idle {
            self.state.craft.y = surface.height / 2.0;
        }
    }

    /// One animation frame: simulate, paint, reschedule
    pub fn on_frame<L: GameListener>(&mut self, time: f64, listener: &mut L) {
        // This callback is the pending one
        self.pending = None;
        if self.torn_down {
            return;
        }
        self.last_time = time;

        if !self.surface.is_empty() {
            if self.run_state == RunState::Running {
                self.step(listener);
            }
            self.paint();
        }

        self.pending = self.scheduler.request_frame();
    }

    /// Pause the loop without ending it; `start` picks it up again.
    /// Used while the page sits in the back/forward cache.
    pub fn suspend(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            log::info!("Frame driver suspended");
        }
    }

    /// Stop the loop: cancel the pending frame and ignore any late callback
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.torn_down = true;
        log::info!("Frame driver torn down");
    }

    fn step<L: GameListener>(&mut self, listener: &mut L) {
        for event in tick(&mut self.state, self.surface) {
            match event {
                GameEvent::ScoreChanged(score) => listener.score_changed(score),
                GameEvent::GameOver { score, cause } => {
                    log::info!(
                        "Game over: {:?} with score {} after {} ticks",
                        cause,
                        score,
                        self.state.time_ticks
                    );
                    // Freeze right away; the container confirms with Ended
                    self.run_state = RunState::Ended;
                    listener.game_over(score);
                }
            }
        }
    }

    fn paint(&mut self) {
        if let Some(painter) = self.painter.as_mut() {
            let scene = build_scene(
                &self.state,
                self.surface,
                self.run_state,
                &self.settings,
                self.last_time,
            );
            painter.paint(&scene);
        }
    }
}
