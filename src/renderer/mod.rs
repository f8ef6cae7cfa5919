//! WebGPU rendering module
//!
//! Scenes are built on the CPU as pixel-space triangle lists and uploaded
//! once per frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Layer, Scene, build_scene};
pub use vertex::Vertex;
