//! Cohen-Sutherland line clipping.
//!
//! Region codes classify each endpoint against the four half-planes of the
//! clip window. Segments are trivially accepted when both codes are zero and
//! trivially rejected when the codes share a bit; otherwise one outside
//! endpoint is moved onto the violated boundary and the test repeats.

use crate::basics::RectD;
use crate::clip_rect::ClipOutcome;

// ============================================================================
// Region codes
// ============================================================================

pub const CLIP_LEFT: u32 = 1;
pub const CLIP_RIGHT: u32 = 2;
pub const CLIP_BOTTOM: u32 = 4;
pub const CLIP_TOP: u32 = 8;

/// Upper bound on endpoint moves before a segment is given up as rejected.
///
/// Exact arithmetic needs at most two moves per endpoint; rounding the
/// intersection can in rare cases bounce a point between two boundaries.
const MAX_MOVES: usize = 16;

/// Compute the region code of point (x, y) against clip_box.
///
/// ```text
///        |        |
///  1001  |  1000  | 1010
///        |        |
/// -------+--------+-------- ymax
///        |        |
///  0001  |  0000  | 0010
///        |        |
/// -------+--------+-------- ymin
///        |        |
///  0101  |  0100  | 0110
///        |        |
///      xmin     xmax
/// ```
#[inline]
pub fn region_code(x: f64, y: f64, clip_box: &RectD) -> u32 {
    (x < clip_box.x1) as u32
        | (((x > clip_box.x2) as u32) << 1)
        | (((y < clip_box.y1) as u32) << 2)
        | (((y > clip_box.y2) as u32) << 3)
}

/// Intersect the segment with the first violated boundary in `code`,
/// checked in bit order (left, right, bottom, top).
///
/// The boundary coordinate is kept exact; the other one is rounded to the
/// nearest integer.
fn boundary_intersection(x1: f64, y1: f64, x2: f64, y2: f64, code: u32, clip_box: &RectD) -> (f64, f64) {
    if code & CLIP_LEFT != 0 {
        let y = y1 + (y2 - y1) * (clip_box.x1 - x1) / (x2 - x1);
        (clip_box.x1, y.round())
    } else if code & CLIP_RIGHT != 0 {
        let y = y1 + (y2 - y1) * (clip_box.x2 - x1) / (x2 - x1);
        (clip_box.x2, y.round())
    } else if code & CLIP_BOTTOM != 0 {
        let x = x1 + (x2 - x1) * (clip_box.y1 - y1) / (y2 - y1);
        (x.round(), clip_box.y1)
    } else {
        let x = x1 + (x2 - x1) * (clip_box.y2 - y1) / (y2 - y1);
        (x.round(), clip_box.y2)
    }
}

// ============================================================================
// Cohen-Sutherland clipping
// ============================================================================

/// Clip a line segment against a rectangle using Cohen-Sutherland.
///
/// A boundary bit is only set on an endpoint when the other endpoint lies
/// on the opposite side of that boundary (otherwise the codes would share
/// the bit and the segment would be rejected), so the divisions in the
/// intersection step never see a zero delta.
pub fn clip_cohen_sutherland(x1: f64, y1: f64, x2: f64, y2: f64, clip_box: &RectD) -> ClipOutcome {
    let (mut x1, mut y1, mut x2, mut y2) = (x1, y1, x2, y2);
    let mut code1 = region_code(x1, y1, clip_box);
    let mut code2 = region_code(x2, y2, clip_box);
    let mut moved1 = false;
    let mut moved2 = false;

    for _ in 0..MAX_MOVES {
        if code1 | code2 == 0 {
            return ClipOutcome::Accepted {
                start: moved1.then_some((x1, y1)),
                end: moved2.then_some((x2, y2)),
            };
        }
        if code1 & code2 != 0 {
            return ClipOutcome::Rejected;
        }

        if code1 != 0 {
            let (x, y) = boundary_intersection(x1, y1, x2, y2, code1, clip_box);
            x1 = x;
            y1 = y;
            moved1 = true;
            code1 = region_code(x1, y1, clip_box);
        } else {
            let (x, y) = boundary_intersection(x1, y1, x2, y2, code2, clip_box);
            x2 = x;
            y2 = y;
            moved2 = true;
            code2 = region_code(x2, y2, clip_box);
        }
    }

    tracing::debug!(x1, y1, x2, y2, "cohen-sutherland did not converge");
    ClipOutcome::Rejected
}

// ============================================================================
// Tests
// ============================================================================
