//! Galactic Dash - An endless side-scrolling space runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle field, collisions, scoring)
//! - `driver`: Per-frame orchestration and frame scheduling
//! - `renderer`: Scene building and WebGPU presentation
//! - `session`: Start/playing/game-over container around the core
//! - `best_score`: Persisted best score
//! - `settings`: Player preferences

pub mod best_score;
pub mod driver;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use best_score::BestScore;
pub use driver::{FrameDriver, FrameHandle, FrameScheduler, GameListener, Painter};
pub use session::Session;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// Units are pixels and ticks (one tick per animation frame).
pub mod consts {
    /// Downward acceleration applied every tick
    pub const GRAVITY: f32 = 0.3;
    /// Velocity set by an impulse (negative is up)
    pub const JUMP_STRENGTH: f32 = -6.0;
    /// Orientation radians per unit of velocity
    pub const ORIENTATION_GAIN: f32 = 0.08;
    /// Maximum nose-up / nose-down tilt
    pub const MAX_TILT: f32 = std::f32::consts::FRAC_PI_4;

    /// Craft geometry. The craft never moves horizontally.
    pub const CRAFT_X: f32 = 100.0;
    pub const CRAFT_WIDTH: f32 = 50.0;
    pub const CRAFT_HEIGHT: f32 = 35.0;
    /// Inward padding of the craft hitbox on every edge
    pub const HITBOX_PADDING: f32 = 8.0;
    /// How far past the top/bottom edge the craft may drift before crashing
    pub const BOUNDARY_LENIENCY: f32 = 50.0;

    /// Obstacle geometry
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 180.0;
    /// Horizontal distance between consecutive spawns
    pub const PIPE_SPACING: f32 = 300.0;
    /// Minimum distance between the gap and the top/bottom edges
    pub const GAP_MARGIN: f32 = 150.0;
    /// Obstacles are dropped once their right edge is this far behind the craft
    pub const DESPAWN_DISTANCE: f32 = 200.0;

    /// Scroll speed at score 0
    pub const BASE_SPEED: f32 = 3.6;
    /// Extra scroll speed per difficulty level
    pub const SPEED_STEP: f32 = 0.6;
    /// Points per difficulty level
    pub const POINTS_PER_LEVEL: u32 = 5;

    /// Background parallax stars
    pub const STAR_COUNT: usize = 150;
}
