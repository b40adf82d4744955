//! Line entity.

use crate::array::BoundedArray;
use crate::point::{Point, PointIndex};
use crate::shape::{ClipStatus, DrawAlgorithm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClip {
    None,
    Clipped { init: PointIndex, fin: PointIndex },
    Invisible,
}

/// A segment between two registry points.
///
/// Once clipped, the line also references the two endpoints of its visible
/// portion. An endpoint that did not move keeps referencing the original
/// point.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: u64,
    p_init: PointIndex,
    p_final: PointIndex,
    algorithm: DrawAlgorithm,
    clip: LineClip,
}

impl Line {
    /// Build a line from two points and mark both as taken.
    pub fn create(
        id: u64,
        points: &mut BoundedArray<Point>,
        p_init: PointIndex,
        p_final: PointIndex,
        algorithm: DrawAlgorithm,
    ) -> Self {
        points.get_mut(p_init).take();
        points.get_mut(p_final).take();
        Self {
            id,
            p_init,
            p_final,
            algorithm,
            clip: LineClip::None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// `[initial, final]`.
    pub fn points(&self) -> [PointIndex; 2] {
        [self.p_init, self.p_final]
    }

    pub fn algorithm(&self) -> DrawAlgorithm {
        self.algorithm
    }

    pub fn clip_status(&self) -> ClipStatus {
        match self.clip {
            LineClip::None => ClipStatus::None,
            LineClip::Clipped { .. } => ClipStatus::Clipped,
            LineClip::Invisible => ClipStatus::Invisible,
        }
    }

    /// `[clipped initial, clipped final]` when the line was clipped.
    pub fn clipped_points(&self) -> Option<[PointIndex; 2]> {
        match self.clip {
            LineClip::Clipped { init, fin } => Some([init, fin]),
            _ => None,
        }
    }

    pub fn set_clipped(&mut self, init: PointIndex, fin: PointIndex) {
        self.clip = LineClip::Clipped { init, fin };
    }

    pub fn set_invisible(&mut self) {
        self.clip = LineClip::Invisible;
    }

    /// Endpoints that should be displayed: the clipped pair if any, the
    /// original pair when never clipped, nothing when invisible.
    pub fn visible_points(&self) -> Option<[PointIndex; 2]> {
        match self.clip {
            LineClip::None => Some(self.points()),
            LineClip::Clipped { init, fin } => Some([init, fin]),
            LineClip::Invisible => None,
        }
    }
}
