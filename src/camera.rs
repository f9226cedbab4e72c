// 2D view camera: maps between window pixels and world units.
// Visual expectation: scrolling zooms around the mouse cursor (the world point
// under the cursor stays put), and dragging empty space slides the whole scene.

use glam::Vec2;

pub const MIN_ZOOM: f32 = 0.05;
pub const MAX_ZOOM: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera2D {
    /// World point that appears at `offset` on screen.
    pub target: Vec2,
    /// Screen anchor in pixels (the viewport center at startup).
    pub offset: Vec2,
    /// Pixels per world unit, kept within [MIN_ZOOM, MAX_ZOOM].
    pub zoom: f32,
}

impl Camera2D {
    /// Camera looking at the world origin from the middle of a `width` x `height` viewport.
    pub fn centered(width: usize, height: usize) -> Self {
        Self {
            target: Vec2::ZERO,
            offset: Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
            zoom: 1.0,
        }
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.offset + (world - self.target) * self.zoom
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom + self.target
    }

    /// Step the zoom by `delta` and keep the world point under `screen` fixed.
    pub fn zoom_at(&mut self, screen: Vec2, delta: f32) {
        if delta == 0.0 {
            return;
        }
        let before = self.screen_to_world(screen);
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        let after = self.screen_to_world(screen);
        self.target += before - after;
    }

    /// Slide the view by a pointer movement in screen pixels.
    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.target -= screen_delta / self.zoom;
    }

    /// Screen-space origin of the world, as the locus evaluator expects it.
    pub fn shader_offset(&self) -> Vec2 {
        self.offset - self.target * self.zoom
    }
}
