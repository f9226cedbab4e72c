// The editable point set.
// Order matters: it decides the labels ('A' + index) and, in SINGLE mode,
// the master point (always the last one).

use crate::polygon::{POLYGON_RADIUS, generate_polygon};
use crate::types::{MAX_POINTS, Point, label_for};
use glam::Vec2;

/// The triangle the app starts with (and returns to on RESTART).
pub const DEFAULT_POINTS: [Vec2; 3] = [
    Vec2::new(-200.0, -100.0),
    Vec2::new(200.0, -100.0),
    Vec2::new(0.0, 150.0),
];

/// Bounded, ordered list of labeled points (at most `MAX_POINTS`).
#[derive(Clone, Debug)]
pub struct PointStore {
    points: Vec<Point>,
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PointStore {
    pub fn new() -> Self {
        let mut store = Self { points: Vec::with_capacity(MAX_POINTS) };
        store.reset();
        store
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_POINTS
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Append a point with the next label. Returns false (and does nothing) when full.
    pub fn insert(&mut self, pos: Vec2) -> bool {
        if self.is_full() {
            return false;
        }
        let index = self.points.len();
        self.points.push(Point::new(pos, index));
        true
    }

    /// Remove a point and relabel the survivors by position.
    pub fn remove_at(&mut self, index: usize) {
        self.points.remove(index);
        self.relabel();
    }

    /// Move `index` to the back (the master slot). Labels travel with their points.
    pub fn swap_to_master(&mut self, index: usize) {
        let last = self.points.len() - 1;
        self.points.swap(index, last);
    }

    /// Drag update: move a point without touching its label.
    pub fn relocate(&mut self, index: usize, pos: Vec2) {
        if let Some(p) = self.points.get_mut(index) {
            p.pos = pos;
        }
    }

    /// Commit coordinates typed into a label.
    pub fn set_position(&mut self, index: usize, pos: Vec2) {
        self.relocate(index, pos);
    }

    /// Back to the default triangle.
    pub fn reset(&mut self) {
        self.points.clear();
        self.points
            .extend(DEFAULT_POINTS.iter().enumerate().map(|(i, &pos)| Point::new(pos, i)));
    }

    /// Replace everything with a regular `n`-gon.
    pub fn regenerate(&mut self, n: usize) {
        self.points = generate_polygon(n.min(MAX_POINTS), POLYGON_RADIUS);
    }

    /// Clamp `k` into [2, len]; with fewer than two points this yields `len`.
    pub fn clamp_k(&self, k: usize) -> usize {
        k.max(2).min(self.points.len())
    }

    fn relabel(&mut self) {
        for (i, p) in self.points.iter_mut().enumerate() {
            p.label = label_for(i);
        }
    }
}
