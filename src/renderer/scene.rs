//! Frame composition
//!
//! Turns the current simulation state into one triangle list in pixel space.
//! Read-only over the state; the GPU side only uploads and presents.

use std::ops::Range;

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Craft, GameState, Obstacle, RunState, Star, Surface};

/// Draw layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Stars,
    Obstacles,
    Craft,
}

/// One finished frame
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Surface size the vertices were laid out for
    pub size: (u32, u32),
    pub vertices: Vec<Vertex>,
    /// Vertex ranges per layer, in draw order
    pub layers: Vec<(Layer, Range<usize>)>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices belonging to one layer
    pub fn layer(&self, layer: Layer) -> &[Vertex] {
        self.layers
            .iter()
            .find(|(l, _)| *l == layer)
            .map(|(_, range)| &self.vertices[range.clone()])
            .unwrap_or(&[])
    }

    fn push_layer(&mut self, layer: Layer, vertices: Vec<Vertex>) {
        let start = self.vertices.len();
        self.vertices.extend(vertices);
        self.layers.push((layer, start..self.vertices.len()));
    }
}

/// Cap strip height and overhang at each gap edge
const CAP_HEIGHT: f32 = 12.0;
const CAP_OVERHANG: f32 = 4.0;

/// Base engine glow radius and pulse amplitude
const GLOW_RADIUS: f32 = 20.0;
const GLOW_PULSE: f32 = 10.0;

/// Build the frame for the current state. An empty surface gives an empty scene.
pub fn build_scene(
    state: &GameState,
    surface: Surface,
    run_state: RunState,
    settings: &Settings,
    time_ms: f64,
) -> Scene {
    if surface.is_empty() {
        return Scene::default();
    }

    let mut scene = Scene {
        size: (surface.width as u32, surface.height as u32),
        ..Default::default()
    };
    let segments = settings.quality.circle_segments();

    scene.push_layer(
        Layer::Background,
        shapes::vertical_gradient(
            0.0,
            0.0,
            surface.width,
            surface.height,
            colors::SPACE_TOP,
            colors::SPACE_BOTTOM,
        ),
    );

    let mut stars = Vec::with_capacity(state.stars.len() * segments as usize * 3);
    for star in &state.stars {
        stars.extend(star_vertices(star, segments));
    }
    scene.push_layer(Layer::Stars, stars);

    let mut pillars = Vec::new();
    for obstacle in &state.obstacles {
        pillars.extend(obstacle_vertices(obstacle, surface, settings.pillar_details));
    }
    scene.push_layer(Layer::Obstacles, pillars);

    let glow = (run_state == RunState::Running && settings.engine_glow).then(|| {
        if settings.effective_glow_pulse() {
            glow_radius(time_ms)
        } else {
            GLOW_RADIUS + GLOW_PULSE / 2.0
        }
    });
    scene.push_layer(Layer::Craft, craft_vertices(&state.craft, glow, segments));

    scene
}

/// Engine glow radius for a frame timestamp, in `[GLOW_RADIUS, GLOW_RADIUS + GLOW_PULSE]`
pub fn glow_radius(time_ms: f64) -> f32 {
    let phase = (time_ms * 0.025).sin() as f32;
    GLOW_RADIUS + GLOW_PULSE * (phase * 0.5 + 0.5)
}

fn star_vertices(star: &Star, segments: u32) -> Vec<Vertex> {
    shapes::circle(
        star.pos,
        star.size,
        colors::with_alpha(colors::STAR, star.opacity),
        segments,
    )
}

/// Solid parts above and below the gap, detail lines, and caps on the gap edges
fn obstacle_vertices(obstacle: &Obstacle, surface: Surface, details: bool) -> Vec<Vertex> {
    let stops = [
        (0.0, colors::PILLAR_EDGE),
        (0.5, colors::PILLAR_CORE),
        (1.0, colors::PILLAR_EDGE),
    ];
    let x = obstacle.x;
    let top_h = obstacle.gap_top;
    let bottom_y = obstacle.gap_bottom();
    let bottom_h = surface.height - bottom_y;

    let mut vertices = shapes::horizontal_gradient(x, 0.0, PIPE_WIDTH, top_h, &stops);
    vertices.extend(shapes::horizontal_gradient(
        x,
        bottom_y,
        PIPE_WIDTH,
        bottom_h,
        &stops,
    ));

    if details {
        for i in 1..4 {
            let lx = x + PIPE_WIDTH * i as f32 / 4.0;
            if top_h > 0.0 {
                vertices.extend(shapes::line(
                    Vec2::new(lx, 0.0),
                    Vec2::new(lx, top_h),
                    1.0,
                    colors::PILLAR_DETAIL,
                ));
            }
            if bottom_h > 0.0 {
                vertices.extend(shapes::line(
                    Vec2::new(lx, bottom_y),
                    Vec2::new(lx, surface.height),
                    1.0,
                    colors::PILLAR_DETAIL,
                ));
            }
        }
    }

    let cap_w = PIPE_WIDTH + CAP_OVERHANG * 2.0;
    vertices.extend(shapes::rect(
        x - CAP_OVERHANG,
        obstacle.gap_top - CAP_HEIGHT,
        cap_w,
        CAP_HEIGHT,
        colors::PILLAR_CAP,
    ));
    vertices.extend(shapes::rect(
        x - CAP_OVERHANG,
        bottom_y,
        cap_w,
        CAP_HEIGHT,
        colors::PILLAR_CAP,
    ));

    vertices
}

/// Craft in local space (origin at the body centre, nose toward +x), then
/// rotated and moved into place
fn craft_vertices(craft: &Craft, glow: Option<f32>, segments: u32) -> Vec<Vertex> {
    let w = CRAFT_WIDTH;
    let h = CRAFT_HEIGHT;
    let mut vertices = Vec::new();

    if let Some(radius) = glow {
        vertices.extend(shapes::radial_gradient(
            Vec2::new(-w / 2.0, 0.0),
            radius,
            &[
                (0.0, colors::GLOW_CORE),
                (0.5, colors::GLOW_MID),
                (1.0, colors::GLOW_EDGE),
            ],
            segments * 2,
        ));
    }

    // Hull: arrowhead with a notch at the tail, fanned from the notch
    vertices.extend(shapes::polygon(
        &[
            Vec2::new(-w / 3.0, 0.0),
            Vec2::new(-w / 2.0, -h / 3.0),
            Vec2::new(w / 2.0, 0.0),
            Vec2::new(-w / 2.0, h / 3.0),
        ],
        colors::HULL,
    ));

    vertices.extend(shapes::polygon(
        &[
            Vec2::new(-w / 4.0, -h / 4.0),
            Vec2::new(0.0, -h / 8.0),
            Vec2::new(-w / 4.0, 0.0),
        ],
        colors::WING,
    ));

    vertices.extend(shapes::ellipse(
        Vec2::new(w / 8.0, 0.0),
        w / 6.0,
        h / 10.0,
        colors::COCKPIT,
        segments,
    ));
    vertices.extend(shapes::ellipse(
        Vec2::new(w / 6.0, -2.0),
        w / 12.0,
        h / 20.0,
        colors::COCKPIT_SHINE,
        segments,
    ));

    shapes::transform(&mut vertices, craft.center(), craft.rotation);
    vertices
}
