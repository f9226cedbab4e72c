// Per-frame snapshot handed to the locus evaluator.
// The evaluator sees nothing but this struct, so any backend can shade a frame
// from it without touching the scene.

use crate::scene::Scene;
use crate::types::{EvalMode, MAX_POINTS};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    /// Point positions in store order; only the first `count` are meaningful.
    pub points: [Vec2; MAX_POINTS],
    pub count: usize,
    pub k: usize,
    pub mode: EvalMode,
    /// Viewport size in pixels.
    pub resolution: Vec2,
    /// Screen position of the world origin (`camera.offset - target * zoom`).
    pub offset: Vec2,
    pub zoom: f32,
}

impl FrameUniforms {
    pub fn build(scene: &Scene, width: usize, height: usize) -> Self {
        let mut points = [Vec2::ZERO; MAX_POINTS];
        let mut count = 0;
        for (slot, p) in points.iter_mut().zip(scene.points.iter()) {
            *slot = p.pos;
            count += 1;
        }
        Self {
            points,
            count,
            k: scene.k,
            mode: scene.mode,
            resolution: Vec2::new(width as f32, height as f32),
            offset: scene.camera.shader_offset(),
            zoom: scene.camera.zoom,
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::DEFAULT_POINTS;

    #[test]
    fn snapshot_copies_points_and_parameters() {
        let mut scene = Scene::new(1280, 720);
        scene.mode = EvalMode::Single;
        scene.camera.zoom = 2.0;
        scene.camera.target = Vec2::new(10.0, 5.0);

        let u = FrameUniforms::build(&scene, 1280, 720);
        assert_eq!(u.count, 3);
        assert_eq!(u.points(), &DEFAULT_POINTS[..]);
        assert_eq!(u.k, 3);
        assert_eq!(u.mode, EvalMode::Single);
        assert_eq!(u.resolution, Vec2::new(1280.0, 720.0));
        assert_eq!(u.offset, Vec2::new(640.0 - 20.0, 360.0 - 10.0));
        assert_eq!(u.zoom, 2.0);
    }

    #[test]
    fn snapshot_is_frozen() {
        let mut scene = Scene::new(100, 100);
        let u = FrameUniforms::build(&scene, 100, 100);
        scene.points.relocate(0, Vec2::new(1.0, 1.0));
        assert_eq!(u.points[0], DEFAULT_POINTS[0]);
    }
}
