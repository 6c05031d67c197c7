use crate::config::SceneConfig;
use crate::geometry::{generate_circle_fan, generate_ray_set};
use crate::vertex::{DrawMode, RgbVertex, ShapeBuffer};

/// One `drawArrays` call over a slice of a pass's buffer, plus the state it
/// needs set first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRange {
    pub first: usize,
    pub count: usize,
    pub point_size: Option<f32>,
    pub line_width: Option<f32>,
}

impl DrawRange {
    pub fn all(count: usize) -> Self {
        Self {
            first: 0,
            count,
            point_size: None,
            line_width: None,
        }
    }
}

/// A shape buffer and the draws issued against it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePass {
    pub shape: ShapeBuffer,
    pub draws: Vec<DrawRange>,
}

impl ScenePass {
    fn single(shape: ShapeBuffer) -> Self {
        let count = shape.vertex_count();
        Self {
            shape,
            draws: vec![DrawRange::all(count)],
        }
    }
}

/// Triangle, sun, rays, points, connector lines; drawn in this order.
pub fn build_scene(config: &SceneConfig) -> Vec<ScenePass> {
    let triangle: Vec<RgbVertex> = config
        .triangle
        .iter()
        .map(|p| RgbVertex::new(p.x, p.y, config.triangle_color))
        .collect();

    let sun = generate_circle_fan(
        config.sun_center,
        config.sun_radius,
        config.sun_sides,
        config.sun_color,
    );

    let rays = generate_ray_set(
        config.sun_center,
        config.sun_radius,
        config.ray_length,
        config.ray_count,
        config.ray_width,
        config.ray_color,
    );

    let points: Vec<RgbVertex> = config
        .points
        .iter()
        .map(|(p, color, _)| RgbVertex::new(p.x, p.y, *color))
        .collect();
    let point_draws = config
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, _, size))| DrawRange {
            first: i,
            count: 1,
            point_size: Some(*size),
            line_width: None,
        })
        .collect();

    let target = config.line_target;
    let lines: Vec<RgbVertex> = config
        .points
        .iter()
        .flat_map(|(p, _, _)| {
            [
                RgbVertex::new(p.x, p.y, config.line_color),
                RgbVertex::new(target.x, target.y, config.line_color),
            ]
        })
        .collect();
    let line_draws = config
        .line_widths
        .iter()
        .enumerate()
        .map(|(i, width)| DrawRange {
            first: i * 2,
            count: 2,
            point_size: None,
            line_width: Some(*width),
        })
        .collect();

    vec![
        ScenePass::single(ShapeBuffer::from_vertices(
            "triangle",
            DrawMode::Triangles,
            &triangle,
        )),
        ScenePass::single(ShapeBuffer::from_vertices(
            "sun",
            DrawMode::TriangleFan,
            &sun,
        )),
        ScenePass::single(ShapeBuffer::from_vertices(
            "rays",
            DrawMode::Triangles,
            &rays,
        )),
        ScenePass {
            shape: ShapeBuffer::from_vertices("points", DrawMode::Points, &points),
            draws: point_draws,
        },
        ScenePass {
            shape: ShapeBuffer::from_vertices("lines", DrawMode::Lines, &lines),
            draws: line_draws,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::VertexLayout;

    fn labels(passes: &[ScenePass]) -> Vec<&'static str> {
        passes.iter().map(|p| p.shape.label).collect()
    }

    #[test]
    fn default_scene_has_77_vertices() {
        let passes = build_scene(&SceneConfig::default());
        let counts: Vec<usize> = passes.iter().map(|p| p.shape.vertex_count()).collect();

        assert_eq!(counts, vec![3, 32, 36, 2, 4]);
        assert_eq!(counts.iter().sum::<usize>(), 77);
    }

    #[test]
    fn passes_are_ordered_with_matching_layouts() {
        let passes = build_scene(&SceneConfig::default());

        assert_eq!(
            labels(&passes),
            vec!["triangle", "sun", "rays", "points", "lines"]
        );
        let shapes: Vec<(DrawMode, VertexLayout)> = passes
            .iter()
            .map(|p| (p.shape.mode, p.shape.layout))
            .collect();
        assert_eq!(
            shapes,
            vec![
                (DrawMode::Triangles, VertexLayout::Rgb),
                (DrawMode::TriangleFan, VertexLayout::Rgba),
                (DrawMode::Triangles, VertexLayout::Rgba),
                (DrawMode::Points, VertexLayout::Rgb),
                (DrawMode::Lines, VertexLayout::Rgb),
            ]
        );
    }

    #[test]
    fn every_draw_stays_inside_its_buffer() {
        for pass in build_scene(&SceneConfig::default()) {
            for draw in &pass.draws {
                assert!(draw.count > 0);
                assert!(draw.first + draw.count <= pass.shape.vertex_count());
            }
        }
    }

    #[test]
    fn points_draw_one_at_a_time_with_their_sizes() {
        let passes = build_scene(&SceneConfig::default());
        let points = &passes[3];

        assert_eq!(
            points.draws,
            vec![
                DrawRange {
                    first: 0,
                    count: 1,
                    point_size: Some(30.0),
                    line_width: None,
                },
                DrawRange {
                    first: 1,
                    count: 1,
                    point_size: Some(20.0),
                    line_width: None,
                },
            ]
        );
        assert_eq!(
            &points.shape.floats()[..6],
            &[-0.7, 0.7, 0.0, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn lines_connect_points_to_the_triangle_center() {
        let passes = build_scene(&SceneConfig::default());
        let lines = &passes[4];
        let floats = lines.shape.floats();

        assert_eq!(&floats[..6], &[-0.7, 0.7, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(&floats[6..12], &[0.0, -0.1667, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(&floats[12..15], &[-0.9, 0.5, 0.0]);
        let widths: Vec<_> = lines.draws.iter().map(|d| d.line_width).collect();
        assert_eq!(widths, vec![Some(10.0), Some(50.0)]);
        assert_eq!(lines.draws[1].first, 2);
    }

    #[test]
    fn query_overrides_change_counts() {
        let mut config = SceneConfig::default();
        config.apply_query("?sides=12&rays=8");
        let passes = build_scene(&config);

        assert_eq!(passes[1].shape.vertex_count(), 14);
        assert_eq!(passes[2].shape.vertex_count(), 48);
    }

    #[test]
    fn oversized_overrides_keep_the_default_scene() {
        let mut config = SceneConfig::default();
        config.apply_query("?sides=4294967295&rays=715827883");
        let total: usize = build_scene(&config)
            .iter()
            .map(|p| p.shape.vertex_count())
            .sum();

        assert_eq!(total, 77);
    }
}
