//! Foundation types, constants, and rounding helpers.
//!
//! Everything else in the kernel depends on these: the integer rounding
//! used when coordinates become pixels, degree/radian conversion for the
//! rotation template, and the axis-aligned [`Rect`] used as a clip window.

// ============================================================================
// Capacity constants
// ============================================================================

/// Polygon vertex bound (exclusive) and default click limit of a scene.
pub const MAX_POINTS: usize = 10;

/// Number of corners stored by a clip rectangle.
pub const NUM_CLIP_POINTS: usize = 4;

/// Largest absolute scene coordinate. Pixel spans between two in-range
/// points always fit the `i32` rasterizer arithmetic.
pub const COORD_LIMIT: f64 = 1.0e6;

/// `true` if both coordinates are finite and within [`COORD_LIMIT`].
#[inline]
pub fn in_coord_range(x: f64, y: f64) -> bool {
    x.abs() <= COORD_LIMIT && y.abs() <= COORD_LIMIT
}

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Truncate a double toward zero.
///
/// The Bresenham line works on truncated endpoints, so `-3.7` becomes `-3`.
#[inline]
pub fn itrunc(v: f64) -> i32 {
    v as i32
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Euclidean distance between two coordinates.
#[inline]
pub fn calc_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
///
/// Once normalized, `(x1, y1)` is the minimum corner and `(x2, y2)` the
/// maximum, i.e. `x1 = xmin, x2 = xmax, y1 = ymin, y2 = ymax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Returns `true` if the rectangle is valid (x1 <= x2 and y1 <= y2).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    pub fn xmin(&self) -> T {
        self.x1
    }

    pub fn xmax(&self) -> T {
        self.x2
    }

    pub fn ymin(&self) -> T {
        self.y1
    }

    pub fn ymax(&self) -> T {
        self.y2
    }
}

/// Rectangle with `f64` coordinates (clip windows).
pub type RectD = Rect<f64>;

// ============================================================================
// Tests
// ============================================================================
