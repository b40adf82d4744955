//! Polygon entity.
//!
//! Vertices are ordered; edges join consecutive vertices and an implicit
//! closing edge joins the last vertex back to the first.

use crate::array::BoundedArray;
use crate::basics::MAX_POINTS;
use crate::error::ValidationError;
use crate::point::{Point, PointIndex};
use crate::shape::{ClipStatus, DrawAlgorithm};

#[derive(Debug, Clone, PartialEq)]
enum PolygonClip {
    None,
    Clipped(Vec<PointIndex>),
    Invisible,
}

/// A closed polygon of `3..MAX_POINTS` registry points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    id: u64,
    vertices: BoundedArray<PointIndex>,
    algorithm: DrawAlgorithm,
    clip: PolygonClip,
}

impl Polygon {
    /// Build a polygon and mark its vertices as taken.
    ///
    /// Fails without touching any point when the vertex count is outside
    /// `3..MAX_POINTS`.
    pub fn create(
        id: u64,
        points: &mut BoundedArray<Point>,
        vertices: &[PointIndex],
        algorithm: DrawAlgorithm,
    ) -> Result<Self, ValidationError> {
        if vertices.len() >= MAX_POINTS {
            return Err(ValidationError::PolygonCapacity {
                count: vertices.len(),
                max: MAX_POINTS,
            });
        }
        if vertices.len() < 3 {
            return Err(ValidationError::PolygonTooSmall {
                count: vertices.len(),
            });
        }

        let mut stored = BoundedArray::new(MAX_POINTS);
        for &v in vertices {
            points.get_mut(v).take();
            stored.push(v);
        }

        Ok(Self {
            id,
            vertices: stored,
            algorithm,
            clip: PolygonClip::None,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn vertices(&self) -> Vec<PointIndex> {
        self.vertices.iter().copied().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.count()
    }

    /// Edges as `(start, end)` pairs, closing edge last.
    pub fn edges(&self) -> Vec<(PointIndex, PointIndex)> {
        closed_edges(&self.vertices())
    }

    pub fn algorithm(&self) -> DrawAlgorithm {
        self.algorithm
    }

    pub fn clip_status(&self) -> ClipStatus {
        match self.clip {
            PolygonClip::None => ClipStatus::None,
            PolygonClip::Clipped(_) => ClipStatus::Clipped,
            PolygonClip::Invisible => ClipStatus::Invisible,
        }
    }

    pub fn clipped_vertices(&self) -> Option<&[PointIndex]> {
        match &self.clip {
            PolygonClip::Clipped(v) => Some(v),
            _ => None,
        }
    }

    pub fn set_clipped(&mut self, vertices: Vec<PointIndex>) {
        self.clip = PolygonClip::Clipped(vertices);
    }

    pub fn set_invisible(&mut self) {
        self.clip = PolygonClip::Invisible;
    }

    /// Vertex loop to display: clipped vertices, originals, or nothing.
    pub fn visible_vertices(&self) -> Option<Vec<PointIndex>> {
        match &self.clip {
            PolygonClip::None => Some(self.vertices()),
            PolygonClip::Clipped(v) => Some(v.clone()),
            PolygonClip::Invisible => None,
        }
    }
}

/// Pair consecutive vertices and close the loop.
pub fn closed_edges(vertices: &[PointIndex]) -> Vec<(PointIndex, PointIndex)> {
    let n = vertices.len();
    (0..n).map(|i| (vertices[i], vertices[(i + 1) % n])).collect()
}
