// The locus "shader": a pure per-sample function of the frame uniforms.
// Visual expectation: pixels where `diff > 0` glow blue (brighter further in),
// with a thin near-white rim right at the zero crossing; everything else is black.

use crate::types::{EvalMode, MAX_POINTS, pack_rgb};
use crate::uniforms::FrameUniforms;
use glam::Vec2;

const BASE_COLOR: [f32; 3] = [0.2, 0.4, 0.9];
const RIM_COLOR: [f32; 3] = [0.8, 0.9, 1.0];
/// How quickly the fill saturates as `diff` grows (per world unit).
const FILL_FALLOFF: f32 = 0.02;
/// Rim fades out once `diff * zoom` (screen-scaled diff) reaches this.
const RIM_WIDTH: f32 = 2.0;

/// Core scalar of the visualization for the world sample `p`.
///
/// * `All`: sort the distances, take the largest and subtract the k-1 values just below it.
/// * `Single`: the last point is the master; subtract the first k-1 raw distances
///   (store order) from the master's distance.
///
/// Expects `1 <= points.len() <= MAX_POINTS` and `1 <= k <= points.len()`.
pub fn locus_diff(p: Vec2, points: &[Vec2], k: usize, mode: EvalMode) -> f32 {
    let count = points.len();
    let mut d = [0.0f32; MAX_POINTS];
    for (slot, q) in d.iter_mut().zip(points) {
        *slot = p.distance(*q);
    }
    let d = &mut d[..count];

    match mode {
        EvalMode::All => {
            d.sort_unstable_by(f32::total_cmp);
            let below_max: f32 = d[count - k..count - 1].iter().sum();
            d[count - 1] - below_max
        }
        EvalMode::Single => {
            let others: f32 = d[..k - 1].iter().sum();
            d[count - 1] - others
        }
    }
}

/// Hermite step, same contract as GLSL `smoothstep` (edges may be reversed).
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Map a diff to linear RGB in [0,1]. `zoom` scales the rim to screen space.
pub fn shade(diff: f32, zoom: f32) -> [f32; 3] {
    if diff <= 0.0 {
        return [0.0; 3];
    }
    let fill = 1.0 - (-diff * FILL_FALLOFF).exp();
    let edge = smoothstep(RIM_WIDTH, 0.0, diff * zoom);
    [
        BASE_COLOR[0] * fill + RIM_COLOR[0] * edge,
        BASE_COLOR[1] * fill + RIM_COLOR[1] * edge,
        BASE_COLOR[2] * fill + RIM_COLOR[2] * edge,
    ]
}

/// Color of framebuffer pixel (x, y) as 0x00RRGGBB, sampled at the pixel center.
#[inline]
pub fn shade_pixel(u: &FrameUniforms, x: usize, y: usize) -> u32 {
    if u.count == 0 {
        return 0;
    }
    let screen = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
    let world = (screen - u.offset) / u.zoom;
    let diff = locus_diff(world, u.points(), u.k, u.mode);
    pack_rgb(shade(diff, u.zoom))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn default_triangle_at_origin_is_outside_the_locus() {
        let pts = [v(-200.0, -100.0), v(200.0, -100.0), v(0.0, 150.0)];
        let diff = locus_diff(Vec2::ZERO, &pts, 3, EvalMode::All);
        // sorted: 150, 223.6, 223.6 -> 223.6 - (150 + 223.6)
        assert!((diff + 150.0).abs() < 1e-3, "diff={diff}");
        assert_eq!(pack_rgb(shade(diff, 1.0)), 0);
    }

    #[test]
    fn all_mode_is_max_minus_the_values_just_below_it() {
        // distances from the origin: 1, 2, 4, 8, 16
        let pts = [v(8.0, 0.0), v(0.0, 1.0), v(-16.0, 0.0), v(0.0, -2.0), v(4.0, 0.0)];
        assert!((locus_diff(Vec2::ZERO, &pts, 2, EvalMode::All) - (16.0 - 8.0)).abs() < 1e-4);
        assert!((locus_diff(Vec2::ZERO, &pts, 3, EvalMode::All) - (16.0 - 12.0)).abs() < 1e-4);
        // k == count: everything but the max is subtracted
        assert!((locus_diff(Vec2::ZERO, &pts, 5, EvalMode::All) - (16.0 - 15.0)).abs() < 1e-4);
    }

    #[test]
    fn all_mode_ignores_point_order() {
        let pts = [v(3.0, 1.0), v(-5.0, 2.0), v(0.5, -7.0), v(9.0, 9.0)];
        let p = v(1.0, 1.0);
        let base = locus_diff(p, &pts, 3, EvalMode::All);
        let mut shuffled = pts;
        shuffled.swap(0, 3);
        shuffled.swap(1, 2);
        assert_eq!(locus_diff(p, &shuffled, 3, EvalMode::All), base);
    }

    #[test]
    fn single_mode_uses_store_order_and_the_last_point_as_master() {
        // distances from the origin: 1, 2, 4, 8
        let pts = [v(1.0, 0.0), v(2.0, 0.0), v(4.0, 0.0), v(8.0, 0.0)];
        let p = Vec2::ZERO;
        assert!((locus_diff(p, &pts, 3, EvalMode::Single) - (8.0 - 3.0)).abs() < 1e-4);

        // Swapping two non-last points with k == count keeps the sum the same.
        let mut swapped = pts;
        swapped.swap(0, 2);
        assert_eq!(
            locus_diff(p, &swapped, 4, EvalMode::Single),
            locus_diff(p, &pts, 4, EvalMode::Single)
        );

        // Moving another point into the master slot changes the result.
        let mut new_master = pts;
        new_master.swap(0, 3);
        let diff = locus_diff(p, &new_master, 3, EvalMode::Single);
        assert!((diff - (1.0 - 10.0)).abs() < 1e-4);
    }

    #[test]
    fn single_point_degenerates_to_its_distance() {
        let pts = [v(3.0, 4.0)];
        assert!((locus_diff(Vec2::ZERO, &pts, 1, EvalMode::All) - 5.0).abs() < 1e-5);
        assert!((locus_diff(Vec2::ZERO, &pts, 1, EvalMode::Single) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn smoothstep_handles_reversed_edges() {
        assert_eq!(smoothstep(2.0, 0.0, 0.0), 1.0);
        assert_eq!(smoothstep(2.0, 0.0, 2.0), 0.0);
        assert_eq!(smoothstep(2.0, 0.0, 5.0), 0.0);
        assert!((smoothstep(2.0, 0.0, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rim_is_bright_near_zero_and_gone_deep_inside() {
        let near = shade(0.01, 1.0);
        assert!(near[0] > 0.75 && near[2] > 0.95);

        let deep = shade(500.0, 1.0);
        // only the saturated fill remains
        assert!((deep[0] - 0.2).abs() < 1e-3);
        assert!((deep[2] - 0.9).abs() < 1e-3);

        // zooming in shrinks the rim in world units
        assert!(shade(1.0, 10.0)[0] < shade(1.0, 1.0)[0]);
    }
}
