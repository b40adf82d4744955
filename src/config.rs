//! Scene configuration and canvas geometry.

use crate::basics::MAX_POINTS;
use crate::color::Color;

// ============================================================================
// Canvas
// ============================================================================

/// Size of the drawing surface in pixels.
///
/// Scene coordinates put `(0, 0)` at the canvas center with y pointing up;
/// screen coordinates put it at the top-left corner with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    fn half(&self) -> (f64, f64) {
        ((self.width / 2) as f64, (self.height / 2) as f64)
    }

    /// Screen (top-left origin, y down) to scene (centered, y up).
    pub fn to_scene(&self, x: f64, y: f64) -> (f64, f64) {
        let (hw, hh) = self.half();
        (x - hw, hh - y)
    }

    /// Scene (centered, y up) to screen (top-left origin, y down).
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let (hw, hh) = self.half();
        (x + hw, hh - y)
    }

    /// Integer form of [`Canvas::to_screen`] for pixel sinks.
    pub fn pixel_to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        let hw = (self.width / 2) as i32;
        let hh = (self.height / 2) as i32;
        (x + hw, hh - y)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(800, 600)
    }
}

// ============================================================================
// SceneConfig
// ============================================================================

/// Tunables of a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    /// Maximum number of clicked points.
    pub max_points: usize,
    /// Color of new points while no clip algorithm is selected.
    pub point_color: Color,
    /// Color of new points while a clip algorithm is selected.
    pub clip_point_color: Color,
    pub canvas: Canvas,
}

impl SceneConfig {
    /// Point registry capacity. Clipping can add at most one point per
    /// clicked point, so twice the click limit always suffices.
    pub fn registry_capacity(&self) -> usize {
        2 * self.max_points
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS,
            point_color: Color::BLACK,
            clip_point_color: Color::RED,
            canvas: Canvas::default(),
        }
    }
}
