//! Bresenham circle interpolator.
//!
//! Integer midpoint stepping over one octant of a circle, from `(0, r)`
//! toward the diagonal. [`CirclePixels`] mirrors every octant offset into
//! the eight symmetric pixels around a center.

use crate::basics::iround;

// ============================================================================
// CircleBresenhamInterpolator
// ============================================================================

/// Octant offsets `(x, y)` of a circle with integer radius.
///
/// Yields `(0, r)` first, then one offset per step while `x < y`, the
/// last one at or just past the diagonal.
#[derive(Debug, Clone)]
pub struct CircleBresenhamInterpolator {
    x: i32,
    y: i32,
    p: i64,
    started: bool,
}

impl CircleBresenhamInterpolator {
    /// `radius` is rounded to the nearest integer.
    pub fn new(radius: f64) -> Self {
        let r = iround(radius);
        Self {
            x: 0,
            y: r,
            p: 3 - 2 * i64::from(r),
            started: false,
        }
    }
}

impl Iterator for CircleBresenhamInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if !self.started {
            self.started = true;
            return Some((self.x, self.y));
        }
        if self.x >= self.y {
            return None;
        }
        if self.p < 0 {
            self.p += 4 * i64::from(self.x) + 6;
        } else {
            self.p += 4 * (i64::from(self.x) - i64::from(self.y)) + 10;
            self.y -= 1;
        }
        self.x += 1;
        Some((self.x, self.y))
    }
}

// ============================================================================
// CirclePixels
// ============================================================================

/// Every pixel of a circle, eight mirrored pixels per octant step.
///
/// Per offset `(x, y)` around center `(cx, cy)` the order is
/// `(cx+x, cy+y)`, `(cx-x, cy+y)`, `(cx+x, cy-y)`, `(cx-x, cy-y)`,
/// `(cx+y, cy+x)`, `(cx-y, cy+x)`, `(cx+y, cy-x)`, `(cx-y, cy-x)`.
/// Symmetric duplicates are emitted as-is.
#[derive(Debug, Clone)]
pub struct CirclePixels {
    cx: i32,
    cy: i32,
    octant: CircleBresenhamInterpolator,
    offset: (i32, i32),
    mirror: u8,
}

impl CirclePixels {
    /// The center is rounded to the nearest pixel.
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            cx: iround(cx),
            cy: iround(cy),
            octant: CircleBresenhamInterpolator::new(radius),
            offset: (0, 0),
            mirror: 8,
        }
    }
}

impl Iterator for CirclePixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.mirror == 8 {
            self.offset = self.octant.next()?;
            self.mirror = 0;
        }
        let (x, y) = self.offset;
        let (cx, cy) = (self.cx, self.cy);
        let px = match self.mirror {
            0 => (cx + x, cy + y),
            1 => (cx - x, cy + y),
            2 => (cx + x, cy - y),
            3 => (cx - x, cy - y),
            4 => (cx + y, cy + x),
            5 => (cx - y, cy + x),
            6 => (cx + y, cy - x),
            _ => (cx - y, cy - x),
        };
        self.mirror += 1;
        Some(px)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octant_r5() {
        let offsets: Vec<_> = CircleBresenhamInterpolator::new(5.0).collect();
        assert_eq!(offsets, vec![(0, 5), (1, 5), (2, 5), (3, 4), (4, 3)]);
    }

    #[test]
    fn test_offsets_stay_near_radius() {
        let r = 37.0;
        for (x, y) in CircleBresenhamInterpolator::new(r) {
            let d = ((x * x + y * y) as f64).sqrt();
            assert!((d - r).abs() <= 1.0, "offset ({}, {}) at distance {}", x, y, d);
        }
    }

    #[test]
    fn test_radius_is_rounded() {
        let a: Vec<_> = CircleBresenhamInterpolator::new(4.6).collect();
        let b: Vec<_> = CircleBresenhamInterpolator::new(5.0).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_radius_single_offset() {
        let offsets: Vec<_> = CircleBresenhamInterpolator::new(0.0).collect();
        assert_eq!(offsets, vec![(0, 0)]);
    }

    #[test]
    fn test_huge_radius_does_not_overflow() {
        let mut it = CircleBresenhamInterpolator::new(2.0e9);
        assert_eq!(it.next(), Some((0, 2_000_000_000)));
        assert_eq!(it.next(), Some((1, 2_000_000_000)));
    }

    #[test]
    fn test_mirror_order() {
        let px: Vec<_> = CirclePixels::new(10.0, 20.0, 5.0).take(16).collect();
        assert_eq!(
            &px[..8],
            &[
                (10, 25),
                (10, 25),
                (10, 15),
                (10, 15),
                (15, 20),
                (5, 20),
                (15, 20),
                (5, 20)
            ]
        );
        assert_eq!(px[8], (11, 25));
        assert_eq!(px[13], (5, 21));
    }

    #[test]
    fn test_pixel_count_is_eight_per_offset() {
        let n = CircleBresenhamInterpolator::new(12.0).count();
        assert_eq!(CirclePixels::new(0.0, 0.0, 12.0).count(), 8 * n);
    }

    #[test]
    fn test_center_is_rounded() {
        let first = CirclePixels::new(1.6, -2.4, 3.0).next();
        assert_eq!(first, Some((2, 1)));
    }
}
