// Regular N-gon generator used by the "Polygon (N)" slider.
// Visual: N points evenly spaced on a circle, the first one centered in the top sector.

use crate::types::Point;
use glam::Vec2;

/// Radius of the polygon the N slider regenerates (world units).
pub const POLYGON_RADIUS: f32 = 200.0;

/// Smallest and largest vertex count the N slider can produce.
pub const MIN_VERTICES: usize = 3;
pub const MAX_VERTICES: usize = 20;

/// Build `n` points on a circle of `radius`, labeled 'A'.. in generation order.
/// Vertex i sits at 90° + sector/2 + i * sector.
pub fn generate_polygon(n: usize, radius: f32) -> Vec<Point> {
    let sector = 360.0 / n as f32;
    let start = 90.0 + sector / 2.0;
    (0..n)
        .map(|i| {
            let angle = (i as f32 * sector + start).to_radians();
            Point::new(Vec2::new(angle.cos() * radius, angle.sin() * radius), i)
        })
        .collect()
}
