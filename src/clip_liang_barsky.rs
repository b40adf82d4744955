//! Liang-Barsky line clipping algorithm.
//!
//! Parametric clipping against a rectangular clip box: the segment is
//! `P(u) = P1 + u * (P2 - P1)` for `u` in `[0, 1]`, and each of the four
//! window edges narrows the visible interval `[u1, u2]`.

use crate::basics::RectD;
use crate::clip_rect::ClipOutcome;

// ============================================================================
// Boundary test
// ============================================================================

/// Narrow `[u1, u2]` against one boundary.
///
/// `p` is the directed delta toward the boundary and `q` the signed offset
/// of the start point from it. Returns `false` when the segment is
/// entirely outside this boundary.
#[inline]
pub fn clip_test(p: f64, q: f64, u1: &mut f64, u2: &mut f64) -> bool {
    if p < 0.0 {
        let r = q / p;
        if r > *u2 {
            return false;
        }
        if r > *u1 {
            *u1 = r;
        }
    } else if p > 0.0 {
        let r = q / p;
        if r < *u1 {
            return false;
        }
        if r < *u2 {
            *u2 = r;
        }
    } else if q < 0.0 {
        // Parallel to this boundary and on its outer side.
        return false;
    }
    true
}

// ============================================================================
// Liang-Barsky parametric line clipping
// ============================================================================

/// Clip a line segment against a rectangle using the Liang-Barsky algorithm.
///
/// Endpoints are recomputed only when their parameter moved off `0` or `1`.
pub fn clip_liang_barsky(x1: f64, y1: f64, x2: f64, y2: f64, clip_box: &RectD) -> ClipOutcome {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let mut u1 = 0.0;
    let mut u2 = 1.0;

    let accepted = clip_test(-dx, x1 - clip_box.x1, &mut u1, &mut u2)
        && clip_test(dx, clip_box.x2 - x1, &mut u1, &mut u2)
        && clip_test(-dy, y1 - clip_box.y1, &mut u1, &mut u2)
        && clip_test(dy, clip_box.y2 - y1, &mut u1, &mut u2);

    if !accepted {
        return ClipOutcome::Rejected;
    }

    let start = (u1 > 0.0).then(|| (x1 + u1 * dx, y1 + u1 * dy));
    let end = (u2 < 1.0).then(|| (x1 + u2 * dx, y1 + u2 * dy));
    ClipOutcome::Accepted { start, end }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn clip_box() -> RectD {
        RectD::new(-50.0, -50.0, 50.0, 50.0)
    }

    fn endpoints(o: ClipOutcome, x1: f64, y1: f64, x2: f64, y2: f64) -> ((f64, f64), (f64, f64)) {
        o.segment(x1, y1, x2, y2).expect("segment should be visible")
    }

    #[test]
    fn test_clip_test_parallel_outside() {
        let (mut u1, mut u2) = (0.0, 1.0);
        assert!(!clip_test(0.0, -1.0, &mut u1, &mut u2));
    }

    #[test]
    fn test_clip_test_parallel_inside() {
        let (mut u1, mut u2) = (0.0, 1.0);
        assert!(clip_test(0.0, 5.0, &mut u1, &mut u2));
        assert_eq!((u1, u2), (0.0, 1.0));
    }

    #[test]
    fn test_clip_test_raises_u1() {
        let (mut u1, mut u2) = (0.0, 1.0);
        assert!(clip_test(-200.0, -50.0, &mut u1, &mut u2));
        assert_relative_eq!(u1, 0.25);
        assert_eq!(u2, 1.0);
    }

    #[test]
    fn test_fully_inside() {
        let o = clip_liang_barsky(-20.0, -20.0, 30.0, 40.0, &clip_box());
        assert_eq!(o, ClipOutcome::UNCHANGED);
    }

    #[test]
    fn test_fully_outside() {
        let o = clip_liang_barsky(-100.0, -100.0, -60.0, -60.0, &clip_box());
        assert_eq!(o, ClipOutcome::Rejected);
    }

    #[test]
    fn test_fully_outside_above() {
        let o = clip_liang_barsky(-20.0, 110.0, 80.0, 110.0, &clip_box());
        assert_eq!(o, ClipOutcome::Rejected);
    }

    #[test]
    fn test_crossing() {
        let o = clip_liang_barsky(-100.0, 0.0, 100.0, 0.0, &clip_box());
        let ((sx, sy), (ex, ey)) = endpoints(o, -100.0, 0.0, 100.0, 0.0);
        assert_relative_eq!(sx, -50.0);
        assert_relative_eq!(sy, 0.0);
        assert_relative_eq!(ex, 50.0);
        assert_relative_eq!(ey, 0.0);
    }

    #[test]
    fn test_only_end_moves() {
        let o = clip_liang_barsky(0.0, 0.0, 0.0, 80.0, &clip_box());
        match o {
            ClipOutcome::Accepted { start: None, end: Some((x, y)) } => {
                assert_relative_eq!(x, 0.0);
                assert_relative_eq!(y, 50.0);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_diagonal_exact_intersection() {
        // Crosses x = 50 at y = 50/3; not rounded.
        let o = clip_liang_barsky(0.0, 0.0, 90.0, 30.0, &clip_box());
        let (_, (ex, ey)) = endpoints(o, 0.0, 0.0, 90.0, 30.0);
        assert_relative_eq!(ex, 50.0);
        assert_relative_eq!(ey, 50.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_misses_corner() {
        let o = clip_liang_barsky(-100.0, 10.0, -10.0, 100.0, &clip_box());
        assert_eq!(o, ClipOutcome::Rejected);
    }

    #[test]
    fn test_zero_length_inside() {
        let o = clip_liang_barsky(5.0, 5.0, 5.0, 5.0, &clip_box());
        assert_eq!(o, ClipOutcome::UNCHANGED);
    }
}
