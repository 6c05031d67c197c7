use crate::geometry::Point;

pub const CANVAS_ID: &str = "webgl-canvas";

/// Accepted range for the `sides=` override.
pub const SUN_SIDES_RANGE: std::ops::RangeInclusive<u32> = 3..=1024;
/// Accepted range for the `rays=` override.
pub const RAY_COUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=360;

/// Every fixed input of the scene. `Default` is the shipped picture.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub canvas_id: String,
    pub clear_color: [f32; 4],

    pub triangle: [Point; 3],
    pub triangle_color: [f32; 3],

    pub sun_center: Point,
    pub sun_radius: f32,
    pub sun_sides: u32,
    pub sun_color: [f32; 4],

    pub ray_count: u32,
    pub ray_length: f32,
    pub ray_width: f32,
    pub ray_color: [f32; 4],

    /// Each point is drawn on its own with its own size.
    pub points: [(Point, [f32; 3], f32); 2],

    /// Where the connector lines from each point meet.
    pub line_target: Point,
    pub line_color: [f32; 3],
    pub line_widths: [f32; 2],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_string(),
            clear_color: [0.8, 0.8, 0.8, 1.0],

            triangle: [
                Point::new(0.0, 0.5),
                Point::new(-0.5, -0.5),
                Point::new(0.5, -0.5),
            ],
            triangle_color: [1.0, 0.65, 0.0],

            sun_center: Point::new(0.8, 0.8),
            sun_radius: 0.1,
            sun_sides: 30,
            sun_color: [1.0, 1.0, 0.0, 1.0],

            ray_count: 6,
            ray_length: 0.2,
            ray_width: 0.02,
            ray_color: [1.0, 0.525, 0.3, 1.0],

            points: [
                (Point::new(-0.7, 0.7), [1.0, 0.0, 0.0], 30.0),
                (Point::new(-0.9, 0.5), [0.0, 0.0, 1.0], 20.0),
            ],

            line_target: Point::new(0.0, -0.1667),
            line_color: [0.0, 0.0, 0.0],
            line_widths: [10.0, 50.0],
        }
    }
}

impl SceneConfig {
    /// Applies `sides=` and `rays=` overrides from a page query string.
    pub fn apply_query(&mut self, search: &str) {
        for (key, value) in query_pairs(search) {
            match key {
                "sides" => match value.parse::<u32>() {
                    Ok(sides) if SUN_SIDES_RANGE.contains(&sides) => self.sun_sides = sides,
                    _ => log::warn!(
                        "ignoring sides={} (need an integer in {:?})",
                        value,
                        SUN_SIDES_RANGE
                    ),
                },
                "rays" => match value.parse::<u32>() {
                    Ok(rays) if RAY_COUNT_RANGE.contains(&rays) => self.ray_count = rays,
                    _ => log::warn!(
                        "ignoring rays={} (need an integer in {:?})",
                        value,
                        RAY_COUNT_RANGE
                    ),
                },
                _ => {}
            }
        }
    }
}

/// Splits `?a=1&b=2` into key/value pairs. Keys without `=` are skipped.
pub fn query_pairs(search: &str) -> impl Iterator<Item = (&str, &str)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
}
