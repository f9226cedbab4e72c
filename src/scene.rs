// Everything the frame loop owns and the interaction logic mutates:
// the points, the view, the evaluation mode and the two sliders' values.

use crate::camera::Camera2D;
use crate::points::PointStore;
use crate::polygon::{MAX_VERTICES, MIN_VERTICES};
use crate::types::EvalMode;
use tracing::debug;

pub struct Scene {
    pub points: PointStore,
    pub camera: Camera2D,
    pub mode: EvalMode,
    /// Points in the "closeness" aggregate; always within [2, points.len()].
    pub k: usize,
    /// Vertex count of the last polygon the N slider asked for.
    pub polygon_n: usize,
}

impl Scene {
    /// Default triangle, k = 3, mode ALL, camera centered on a `width` x `height` viewport.
    pub fn new(width: usize, height: usize) -> Self {
        let points = PointStore::new();
        let k = points.clamp_k(3);
        Self {
            points,
            camera: Camera2D::centered(width, height),
            mode: EvalMode::All,
            k,
            polygon_n: MIN_VERTICES,
        }
    }

    /// Re-apply the k bounds after the store changed size.
    pub fn reclamp_k(&mut self) {
        self.k = self.points.clamp_k(self.k);
    }

    /// RESTART button: back to the default triangle.
    pub fn restart(&mut self) {
        self.points.reset();
        self.reclamp_k();
        debug!(k = self.k, "points reset to default triangle");
    }

    /// N slider: replace the points with a regular `n`-gon.
    pub fn regenerate(&mut self, n: usize) {
        self.polygon_n = n.clamp(MIN_VERTICES, MAX_VERTICES);
        self.points.regenerate(self.polygon_n);
        self.reclamp_k();
        debug!(n = self.polygon_n, k = self.k, "regenerated polygon");
    }
}
