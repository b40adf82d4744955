//! Line interpolation algorithms.
//!
//! Two ways of turning a segment into integer pixels: the floating-point
//! DDA (Digital Differential Analyzer) and Bresenham's integer
//! error-accumulator. Both are iterators that skip the start pixel and end
//! on the final one.

use crate::basics::{iround, itrunc};
use crate::shape::DrawAlgorithm;

// ============================================================================
// DDA line interpolator
// ============================================================================

/// Floating-point DDA line interpolator.
///
/// Takes `max(|dx|, |dy|)` (rounded, at least 1) equal steps from the
/// start point and yields the rounded position after each step.
#[derive(Debug, Clone)]
pub struct DdaLineInterpolator {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: u32,
}

impl DdaLineInterpolator {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = iround(dx.abs().max(dy.abs())).max(1) as u32;
        Self {
            x: x1,
            y: y1,
            x_inc: dx / steps as f64,
            y_inc: dy / steps as f64,
            remaining: steps,
        }
    }
}

impl Iterator for DdaLineInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.x += self.x_inc;
        self.y += self.y_inc;
        Some((iround(self.x), iround(self.y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DdaLineInterpolator {}

// ============================================================================
// Bresenham line interpolator
// ============================================================================

/// Bresenham line interpolator on truncated integer endpoints.
///
/// The axis with the larger delta drives the loop (`dy < dx` drives on x,
/// otherwise on y); the decision variable decides when the minor axis
/// advances.
#[derive(Debug, Clone)]
pub struct LineBresenhamInterpolator {
    x: i32,
    y: i32,
    incr_x: i32,
    incr_y: i32,
    drive_x: bool,
    p: i64,
    const1: i64,
    const2: i64,
    remaining: u32,
}

impl LineBresenhamInterpolator {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let xi = itrunc(x1);
        let yi = itrunc(y1);
        // Spans between any two i32 values fit an i64 decision variable.
        let dx = i64::from(itrunc(x2)) - i64::from(xi);
        let dy = i64::from(itrunc(y2)) - i64::from(yi);

        let incr_x = if dx >= 0 { 1 } else { -1 };
        let incr_y = if dy >= 0 { 1 } else { -1 };
        let dx = dx.abs();
        let dy = dy.abs();

        let drive_x = dy < dx;
        let (d_major, d_minor) = if drive_x { (dx, dy) } else { (dy, dx) };

        Self {
            x: xi,
            y: yi,
            incr_x,
            incr_y,
            drive_x,
            p: 2 * d_minor - d_major,
            const1: 2 * d_minor,
            const2: 2 * (d_minor - d_major),
            remaining: d_major as u32,
        }
    }
}

impl Iterator for LineBresenhamInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let advance_minor = self.p >= 0;
        if advance_minor {
            self.p += self.const2;
        } else {
            self.p += self.const1;
        }

        if self.drive_x {
            self.x += self.incr_x;
            if advance_minor {
                self.y += self.incr_y;
            }
        } else {
            self.y += self.incr_y;
            if advance_minor {
                self.x += self.incr_x;
            }
        }
        Some((self.x, self.y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LineBresenhamInterpolator {}

// ============================================================================
// Algorithm dispatch
// ============================================================================

/// Pixels of a segment drawn with either algorithm.
#[derive(Debug, Clone)]
pub enum LineInterpolator {
    Dda(DdaLineInterpolator),
    Bresenham(LineBresenhamInterpolator),
}

impl LineInterpolator {
    pub fn new(algorithm: DrawAlgorithm, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        match algorithm {
            DrawAlgorithm::Dda => LineInterpolator::Dda(DdaLineInterpolator::new(x1, y1, x2, y2)),
            DrawAlgorithm::Bresenham => {
                LineInterpolator::Bresenham(LineBresenhamInterpolator::new(x1, y1, x2, y2))
            }
        }
    }
}

impl Iterator for LineInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        match self {
            LineInterpolator::Dda(i) => i.next(),
            LineInterpolator::Bresenham(i) => i.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            LineInterpolator::Dda(i) => i.size_hint(),
            LineInterpolator::Bresenham(i) => i.size_hint(),
        }
    }
}

impl ExactSizeIterator for LineInterpolator {}

// ============================================================================
// Tests
// ============================================================================
