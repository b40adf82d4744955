//! Point value type.

use crate::color::Color;

/// Index of a point inside a scene's point registry.
pub type PointIndex = usize;

/// A clicked (or clip-generated) point.
///
/// `taken` is set once the point has been absorbed into a line, polygon,
/// circle or clip rectangle; a taken point is never handed to another
/// entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: u64,
    pub x: f64,
    pub y: f64,
    color: Option<Color>,
    taken: bool,
}

impl Point {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            color: None,
            taken: false,
        }
    }

    pub fn with_color(id: u64, x: f64, y: f64, color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::new(id, x, y)
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn set_coord(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn coord(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Color used when painting; points without a color paint black.
    pub fn paint_color(&self) -> Color {
        self.color.unwrap_or_default()
    }

    /// Set the color once. A color already defined is kept.
    pub fn define_color(&mut self, color: Color) {
        if self.color.is_none() {
            self.color = Some(color);
        }
    }

    pub fn take(&mut self) {
        self.taken = true;
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }
}
