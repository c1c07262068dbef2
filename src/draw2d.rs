//! Minimal 2D painting surface consumed by scenes and actors.
//!
//! The actual rasterizer lives outside this crate. Anything that can fill a
//! rectangle with a color can act as a [`Canvas`].

/// A rectangle in scene-space pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin with the given size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// RGBA color with premultiplied alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Scale every channel by `alpha` (premultiplied fade).
    pub fn faded(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self::rgba(self.r * alpha, self.g * alpha, self.b * alpha, self.a * alpha)
    }
}

/// Rendering context handed to `paint` calls.
pub trait Canvas {
    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Supplies per-frame collaborators to the scene graph.
///
/// The orchestrator that owns the frame loop implements this; scenes only
/// need it to reach the canvas while painting.
pub trait Director {
    fn canvas(&mut self) -> &mut dyn Canvas;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_all_channels() {
        let c = Color::rgba(1.0, 0.5, 0.0, 1.0).faded(0.5);
        assert_eq!(c, Color::rgba(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn faded_clamps_alpha() {
        assert_eq!(Color::WHITE.faded(2.0), Color::WHITE);
        assert_eq!(Color::WHITE.faded(-1.0), Color::TRANSPARENT);
    }

    #[test]
    fn rect_from_size_is_origin_anchored() {
        assert_eq!(Rect::from_size(10.0, 20.0), Rect::new(0.0, 0.0, 10.0, 20.0));
    }
}
