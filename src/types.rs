// Core types shared by the store, the evaluator and the drawing code.

use glam::Vec2;

/// Hard ceiling on how many points the store (and the uniform payload) can hold.
pub const MAX_POINTS: usize = 20;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Follow the window size; contents are undefined after a resize.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, 0);
    }
}

/// One labeled point. The label is only a display name ('A' + index), not identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub label: char,
}

impl Point {
    pub fn new(pos: Vec2, index: usize) -> Self {
        Self { pos, label: label_for(index) }
    }
}

/// 'A' for 0, 'B' for 1, ...
pub fn label_for(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Which rule the locus evaluator applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EvalMode {
    /// Largest distance minus the k-1 next largest.
    #[default]
    All,
    /// Last point (the master) minus the first k-1 points in store order.
    Single,
}

impl EvalMode {
    pub fn toggled(self) -> Self {
        match self {
            EvalMode::All => EvalMode::Single,
            EvalMode::Single => EvalMode::All,
        }
    }
}

/// Pack a float RGB triple in [0,1] as 0x00RRGGBB.
#[inline]
pub fn pack_rgb(c: [f32; 3]) -> u32 {
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
    (q(c[0]) << 16) | (q(c[1]) << 8) | q(c[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_count_up_from_a() {
        assert_eq!(label_for(0), 'A');
        assert_eq!(label_for(19), 'T');
        assert_eq!(Point::new(Vec2::ZERO, 2).label, 'C');
    }

    #[test]
    fn pack_rgb_clamps_and_orders_channels() {
        assert_eq!(pack_rgb([1.0, 0.0, 0.0]), 0x00FF_0000);
        assert_eq!(pack_rgb([0.0, 2.0, -1.0]), 0x0000_FF00);
        assert_eq!(pack_rgb([0.0, 0.0, 1.0]), 0x0000_00FF);
    }

    #[test]
    fn resize_reallocates_only_on_change() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.resize(4, 3);
        assert_eq!(fb.pixels.len(), 12);
        fb.resize(8, 2);
        assert_eq!((fb.width, fb.height, fb.pixels.len()), (8, 2, 16));
    }

    #[test]
    fn mode_toggles_both_ways() {
        assert_eq!(EvalMode::All.toggled(), EvalMode::Single);
        assert_eq!(EvalMode::Single.toggled(), EvalMode::All);
    }
}
