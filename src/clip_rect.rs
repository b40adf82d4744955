//! Clip rectangle, clip algorithm selection and the shared clip outcome.

use crate::basics::{RectD, NUM_CLIP_POINTS};
use crate::clip_cohen_sutherland::clip_cohen_sutherland;
use crate::clip_liang_barsky::clip_liang_barsky;
use crate::error::ValidationError;
use crate::point::{Point, PointIndex};

// ============================================================================
// ClipAlgorithm
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipAlgorithm {
    CohenSutherland = 1,
    LiangBarsky = 2,
}

impl ClipAlgorithm {
    /// Decode an input-source selection. `0` clears the selection.
    pub fn from_selection(code: u32) -> Result<Option<Self>, ValidationError> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(ClipAlgorithm::CohenSutherland)),
            2 => Ok(Some(ClipAlgorithm::LiangBarsky)),
            _ => Err(ValidationError::UnknownSelection {
                what: "clipping algorithm",
                code,
            }),
        }
    }

    /// Clip segment `(x1, y1)-(x2, y2)` against `clip_box`.
    pub fn clip_segment(&self, x1: f64, y1: f64, x2: f64, y2: f64, clip_box: &RectD) -> ClipOutcome {
        match self {
            ClipAlgorithm::CohenSutherland => clip_cohen_sutherland(x1, y1, x2, y2, clip_box),
            ClipAlgorithm::LiangBarsky => clip_liang_barsky(x1, y1, x2, y2, clip_box),
        }
    }
}

// ============================================================================
// ClipOutcome
// ============================================================================

/// What a clip algorithm decided for one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipOutcome {
    /// The segment lies entirely outside the window.
    Rejected,
    /// Some part is inside. An endpoint is `Some` only when it was moved
    /// onto the window boundary.
    Accepted {
        start: Option<(f64, f64)>,
        end: Option<(f64, f64)>,
    },
}

impl ClipOutcome {
    pub const UNCHANGED: ClipOutcome = ClipOutcome::Accepted {
        start: None,
        end: None,
    };

    pub fn is_rejected(&self) -> bool {
        matches!(self, ClipOutcome::Rejected)
    }

    /// Visible segment given the original endpoints, or `None` if rejected.
    pub fn segment(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<((f64, f64), (f64, f64))> {
        match *self {
            ClipOutcome::Rejected => None,
            ClipOutcome::Accepted { start, end } => {
                Some((start.unwrap_or((x1, y1)), end.unwrap_or((x2, y2))))
            }
        }
    }
}

// ============================================================================
// ClipRect
// ============================================================================

/// Rectangular clip window built from two opposite corners.
///
/// `corners[0]` and `corners[2]` are the picked points; `corners[1]` is
/// `(c2.x, c0.y)` and `corners[3]` is `(c0.x, c2.y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRect {
    id: u64,
    corners: [Point; NUM_CLIP_POINTS],
    picked: [PointIndex; 2],
    algorithm: ClipAlgorithm,
}

impl ClipRect {
    /// Build the rectangle from two picked points.
    ///
    /// `derived_ids` supplies ids for the two derived corners. The derived
    /// corners take the color of the first picked corner.
    pub fn new(
        id: u64,
        first: (PointIndex, &Point),
        opposite: (PointIndex, &Point),
        derived_ids: [u64; 2],
        algorithm: ClipAlgorithm,
    ) -> Self {
        let (i0, c0) = first;
        let (i2, c2) = opposite;
        let color = c0.paint_color();
        let c1 = Point::with_color(derived_ids[0], c2.x, c0.y, color);
        let c3 = Point::with_color(derived_ids[1], c0.x, c2.y, color);
        Self {
            id,
            corners: [c0.clone(), c1, c2.clone(), c3],
            picked: [i0, i2],
            algorithm,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn corners(&self) -> &[Point; NUM_CLIP_POINTS] {
        &self.corners
    }

    /// Registry indices of the two picked corners.
    pub fn picked_points(&self) -> [PointIndex; 2] {
        self.picked
    }

    pub fn algorithm(&self) -> ClipAlgorithm {
        self.algorithm
    }

    /// `(xmin, xmax, ymin, ymax)` as a normalized rectangle.
    pub fn bounds(&self) -> RectD {
        let c0 = &self.corners[0];
        let c2 = &self.corners[2];
        let mut r = RectD::new(c0.x, c0.y, c2.x, c2.y);
        r.normalize();
        r
    }

    pub fn clip_segment(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> ClipOutcome {
        self.algorithm.clip_segment(x1, y1, x2, y2, &self.bounds())
    }
}
