//! Vertex generators for the shapes WebGL 1 cannot draw directly: filled
//! circles (as triangle fans) and lines wider than one pixel (as quads).

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::vertex::RgbaVertex;

/// A position in clip space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point `radius` away from `self` at `angle` radians.
    pub fn polar_offset(self, radius: f32, angle: f32) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

/// Center vertex followed by `sides + 1` rim vertices. The last rim vertex
/// repeats the first so the fan closes.
pub fn generate_circle_fan(
    center: Point,
    radius: f32,
    sides: u32,
    color: [f32; 4],
) -> Vec<RgbaVertex> {
    let mut vertices = Vec::with_capacity((sides as usize).saturating_add(2));
    vertices.push(RgbaVertex::new(center.x, center.y, color));
    if sides == 0 {
        return vertices;
    }

    for i in 0..=sides {
        let angle = (i as f32 / sides as f32) * TAU;
        let rim = center.polar_offset(radius, angle);
        vertices.push(RgbaVertex::new(rim.x, rim.y, color));
    }
    vertices
}

/// A `width`-wide rectangle around `p1 -> p2`, as two triangles.
///
/// When `p1 == p2` the direction falls back to `atan2(0, 0) == 0` and the
/// result is a zero-length rectangle.
pub fn generate_thick_line(p1: Point, p2: Point, width: f32, color: [f32; 4]) -> [RgbaVertex; 6] {
    let angle = (p2.y - p1.y).atan2(p2.x - p1.x);
    let half = width / 2.0;
    let nx = half * (angle + FRAC_PI_2).cos();
    let ny = half * (angle + FRAC_PI_2).sin();

    let start_left = RgbaVertex::new(p1.x + nx, p1.y + ny, color);
    let start_right = RgbaVertex::new(p1.x - nx, p1.y - ny, color);
    let end_left = RgbaVertex::new(p2.x + nx, p2.y + ny, color);
    let end_right = RgbaVertex::new(p2.x - nx, p2.y - ny, color);

    [
        start_left,
        end_left,
        end_right,
        start_right,
        start_left,
        end_right,
    ]
}

/// `count` rays spaced evenly around `center`, each running from
/// `inner_radius` out to `inner_radius + length`.
pub fn generate_ray_set(
    center: Point,
    inner_radius: f32,
    length: f32,
    count: u32,
    width: f32,
    color: [f32; 4],
) -> Vec<RgbaVertex> {
    let mut vertices = Vec::with_capacity((count as usize).saturating_mul(6));
    for i in 0..count {
        let angle = (i as f32 / count as f32) * TAU;
        let start = center.polar_offset(inner_radius, angle);
        let end = center.polar_offset(inner_radius + length, angle);
        vertices.extend_from_slice(&generate_thick_line(start, end, width, color));
    }
    vertices
}
