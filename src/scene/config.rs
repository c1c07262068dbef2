//! Scene construction options.

use crate::draw2d::Color;

/// Configuration for a new [`Scene`](super::Scene).
///
/// # Example
///
/// ```
/// use hoplite_stage::{Color, SceneConfig};
///
/// let config = SceneConfig::new()
///     .size(1280.0, 720.0)
///     .fill_color(Color::BLACK)
///     .seed(7);
/// assert_eq!(config.width, 1280.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub width: f32,
    pub height: f32,
    /// Background fill. `None` paints white.
    pub fill_color: Option<Color>,
    /// Seed for the rotation-sign random source. `None` seeds from process entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fill_color: None,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
