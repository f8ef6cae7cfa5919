//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Deep space gradient, top (#020617) to bottom (#0f172a)
    pub const SPACE_TOP: [f32; 4] = [0.008, 0.024, 0.090, 1.0];
    pub const SPACE_BOTTOM: [f32; 4] = [0.059, 0.090, 0.165, 1.0];

    /// Pillar body: dark slate edges, blue core
    pub const PILLAR_EDGE: [f32; 4] = [0.118, 0.161, 0.231, 1.0];
    pub const PILLAR_CORE: [f32; 4] = [0.231, 0.510, 0.965, 1.0];
    pub const PILLAR_CAP: [f32; 4] = [0.376, 0.647, 0.980, 1.0];
    pub const PILLAR_DETAIL: [f32; 4] = [1.0, 1.0, 1.0, 0.1];

    /// Craft
    pub const HULL: [f32; 4] = [0.973, 0.980, 0.988, 1.0];
    pub const WING: [f32; 4] = PILLAR_CORE;
    pub const COCKPIT: [f32; 4] = SPACE_BOTTOM;
    pub const COCKPIT_SHINE: [f32; 4] = [1.0, 1.0, 1.0, 0.3];

    /// Engine glow: amber core fading out
    pub const GLOW_CORE: [f32; 4] = [0.984, 0.749, 0.141, 1.0];
    pub const GLOW_MID: [f32; 4] = [0.961, 0.620, 0.043, 1.0];
    pub const GLOW_EDGE: [f32; 4] = [0.961, 0.620, 0.043, 0.0];

    /// Star tint; alpha comes from the star's opacity
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// Same color with a different alpha
    pub const fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
        [color[0], color[1], color[2], alpha]
    }
}
