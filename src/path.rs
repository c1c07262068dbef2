//! Straight-line path geometry for translation behaviors.

use glam::Vec2;

/// A linear path between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearPath {
    pub start: Vec2,
    pub end: Vec2,
}

impl LinearPath {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Build a path from raw coordinates.
    pub fn linear(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Position along the path at normalized progress `t` (0.0 to 1.0).
    pub fn position(&self, t: f32) -> Vec2 {
        self.start.lerp(self.end, t)
    }
}
