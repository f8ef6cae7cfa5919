//! Shape generation for 2D primitives
//!
//! Everything is emitted as a plain triangle list in pixel space
//! (y grows downward).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Push a quad as two triangles. Corners go clockwise from top-left.
fn push_quad(vertices: &mut Vec<Vertex>, corners: [Vec2; 4], colors: [[f32; 4]; 4]) {
    let v = |i: usize| Vertex::new(corners[i].x, corners[i].y, colors[i]);
    vertices.extend_from_slice(&[v(0), v(1), v(2), v(0), v(2), v(3)]);
}

/// Generate vertices for a solid axis-aligned rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ],
        [color; 4],
    );
    vertices
}

/// Rectangle shaded from `top` to `bottom`
pub fn vertical_gradient(x: f32, y: f32, w: f32, h: f32, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ],
        [top, top, bottom, bottom],
    );
    vertices
}

/// Rectangle shaded left to right through color stops at fractions `0..=1`
pub fn horizontal_gradient(x: f32, y: f32, w: f32, h: f32, stops: &[(f32, [f32; 4])]) -> Vec<Vertex> {
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity(stops.len().saturating_sub(1) * 6);
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        let x0 = x + w * t0;
        let x1 = x + w * t1;
        push_quad(
            &mut vertices,
            [
                Vec2::new(x0, y),
                Vec2::new(x1, y),
                Vec2::new(x1, y + h),
                Vec2::new(x0, y + h),
            ],
            [c0, c1, c1, c0],
        );
    }
    vertices
}

/// Generate vertices for a line segment of the given width
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [a + perp, b + perp, b - perp, a - perp],
        [color; 4],
    );
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, radius, radius, color, segments)
}

/// Generate vertices for a filled axis-aligned ellipse
pub fn ellipse(center: Vec2, rx: f32, ry: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + rx * theta1.cos(),
            center.y + ry * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + rx * theta2.cos(),
            center.y + ry * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Radial gradient disc. Stops are `(fraction of radius, color)` in
/// increasing order; each pair becomes one ring.
pub fn radial_gradient(
    center: Vec2,
    radius: f32,
    stops: &[(f32, [f32; 4])],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(stops.len().saturating_sub(1) * (segments * 6) as usize);

    for pair in stops.windows(2) {
        let (t0, inner_color) = pair[0];
        let (t1, outer_color) = pair[1];
        let inner_r = radius * t0;
        let outer_r = radius * t1;

        for i in 0..segments {
            let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
            let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
            let d1 = Vec2::new(theta1.cos(), theta1.sin());
            let d2 = Vec2::new(theta2.cos(), theta2.sin());

            push_quad(
                &mut vertices,
                [
                    center + d1 * inner_r,
                    center + d1 * outer_r,
                    center + d2 * outer_r,
                    center + d2 * inner_r,
                ],
                [inner_color, outer_color, outer_color, inner_color],
            );
        }
    }

    vertices
}

/// Fill a polygon that is star-shaped around its first point
pub fn polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let anchor = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Rotate vertices about the origin, then move the origin to `pivot`
pub fn transform(vertices: &mut [Vertex], pivot: Vec2, rotation: f32) {
    let rot = Vec2::from_angle(rotation);
    for v in vertices.iter_mut() {
        let p = pivot + rot.rotate(Vec2::from(v.position));
        v.position = p.to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for v in vertices {
            let p = Vec2::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    #[test]
    fn test_rect_covers_area() {
        let verts = rect(10.0, 20.0, 30.0, 40.0, RED);
        assert_eq!(verts.len(), 6);
        assert_eq!(bounds(&verts), (Vec2::new(10.0, 20.0), Vec2::new(40.0, 60.0)));
        assert!(rect(0.0, 0.0, 0.0, 10.0, RED).is_empty());
    }

    #[test]
    fn test_vertical_gradient_colors() {
        let verts = vertical_gradient(0.0, 0.0, 10.0, 10.0, RED, BLUE);
        for v in &verts {
            let expected = if v.position[1] == 0.0 { RED } else { BLUE };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn test_horizontal_gradient_segments() {
        let stops = [(0.0, RED), (0.5, BLUE), (1.0, RED)];
        let verts = horizontal_gradient(0.0, 0.0, 60.0, 10.0, &stops);
        assert_eq!(verts.len(), 12);
        for v in &verts {
            let expected = if v.position[0] == 30.0 { BLUE } else { RED };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn test_radial_gradient_fades_out() {
        let stops = [(0.0, RED), (1.0, [1.0, 0.0, 0.0, 0.0])];
        let verts = radial_gradient(Vec2::ZERO, 10.0, &stops, 8);
        assert_eq!(verts.len(), 8 * 6);
        for v in &verts {
            let r = Vec2::from(v.position).length();
            if r > 9.9 {
                assert_eq!(v.color[3], 0.0);
            } else {
                assert!(r < 1e-4);
                assert_eq!(v.color[3], 1.0);
            }
        }
    }

    #[test]
    fn test_polygon_fan() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert_eq!(polygon(&points, RED).len(), 6);
        assert!(polygon(&points[..2], RED).is_empty());
    }

    #[test]
    fn test_transform_rotates_then_translates() {
        let mut verts = vec![Vertex::new(10.0, 0.0, RED)];
        transform(&mut verts, Vec2::new(100.0, 50.0), PI / 2.0);
        // +x turns into +y (downward on screen)
        assert!((verts[0].position[0] - 100.0).abs() < 1e-4);
        assert!((verts[0].position[1] - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_line_has_width() {
        let verts = line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 2.0, RED);
        let (min, max) = bounds(&verts);
        assert_eq!(min, Vec2::new(-1.0, 0.0));
        assert_eq!(max, Vec2::new(1.0, 10.0));
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, RED).is_empty());
    }
}
