//! Drawable entities as a closed variant.
//!
//! Lines, polygons and circles share a small capability set: the points
//! they own, the line algorithm used to draw them and their clip status.
//! [`Shape`] lets the transform engine and the renderer walk all of them
//! in one loop.

use std::fmt;

use crate::circle::Circle;
use crate::error::ValidationError;
use crate::line::Line;
use crate::point::PointIndex;
use crate::polygon::Polygon;

// ============================================================================
// Selections
// ============================================================================

/// Line rasterization algorithm chosen per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawAlgorithm {
    Dda = 1,
    Bresenham = 2,
}

impl DrawAlgorithm {
    /// Decode an input-source selection. `0` means nothing was selected.
    pub fn from_selection(code: u32) -> Result<Option<Self>, ValidationError> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(DrawAlgorithm::Dda)),
            2 => Ok(Some(DrawAlgorithm::Bresenham)),
            _ => Err(ValidationError::UnknownSelection {
                what: "drawing algorithm",
                code,
            }),
        }
    }
}

impl TryFrom<u32> for DrawAlgorithm {
    type Error = ValidationError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_selection(code)?.ok_or(ValidationError::NoDrawAlgorithm)
    }
}

/// Result of running a clip algorithm over an entity.
///
/// `None -> Clipped | Invisible`; there is no way back short of clearing
/// the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipStatus {
    #[default]
    None,
    Clipped,
    Invisible,
}

/// Kind of entity to build from free points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line = 1,
    Polygon = 2,
    Circle = 3,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Circle => "Circumference",
        }
    }

    /// Free points required before anything can be built.
    pub fn min_points(&self) -> usize {
        match self {
            ShapeKind::Line | ShapeKind::Circle => 2,
            ShapeKind::Polygon => 3,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for ShapeKind {
    type Error = ValidationError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ShapeKind::Line),
            2 => Ok(ShapeKind::Polygon),
            3 => Ok(ShapeKind::Circle),
            _ => Err(ValidationError::UnknownSelection {
                what: "object",
                code,
            }),
        }
    }
}

// ============================================================================
// Shape
// ============================================================================

/// Borrowed view of any drawable entity.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Line(&'a Line),
    Polygon(&'a Polygon),
    Circle(&'a Circle),
}

impl<'a> Shape<'a> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Shape::Line(l) => l.id(),
            Shape::Polygon(pl) => pl.id(),
            Shape::Circle(c) => c.id(),
        }
    }

    /// Defining points in order. The first one is the rotation pivot.
    pub fn points(&self) -> Vec<PointIndex> {
        match self {
            Shape::Line(l) => l.points().to_vec(),
            Shape::Polygon(pl) => pl.vertices().to_vec(),
            Shape::Circle(c) => c.points().to_vec(),
        }
    }

    /// Every distinct point the entity owns, clipped points included.
    ///
    /// The defining points come first, in order, so the first element is
    /// still the pivot. Clipped points that reuse a defining point are
    /// listed once.
    pub fn owned_points(&self) -> Vec<PointIndex> {
        let mut owned = self.points();
        let clipped = match self {
            Shape::Line(l) => l.clipped_points().map(|p| p.to_vec()),
            Shape::Polygon(pl) => pl.clipped_vertices().map(|v| v.to_vec()),
            Shape::Circle(_) => None,
        };
        for idx in clipped.into_iter().flatten() {
            if !owned.contains(&idx) {
                owned.push(idx);
            }
        }
        owned
    }

    /// Line algorithm used for the entity's edges. Circles have their own.
    pub fn algorithm(&self) -> Option<DrawAlgorithm> {
        match self {
            Shape::Line(l) => Some(l.algorithm()),
            Shape::Polygon(pl) => Some(pl.algorithm()),
            Shape::Circle(_) => None,
        }
    }

    /// Circles are never clipped and always report [`ClipStatus::None`].
    pub fn clip_status(&self) -> ClipStatus {
        match self {
            Shape::Line(l) => l.clip_status(),
            Shape::Polygon(pl) => pl.clip_status(),
            Shape::Circle(_) => ClipStatus::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::BoundedArray;
    use crate::point::Point;

    fn registry(n: usize) -> BoundedArray<Point> {
        let mut pts = BoundedArray::new(16);
        for i in 0..n {
            pts.push(Point::new(i as u64, i as f64, 0.0));
        }
        pts
    }

    #[test]
    fn test_selection_codes() {
        assert_eq!(DrawAlgorithm::from_selection(0), Ok(None));
        assert_eq!(DrawAlgorithm::try_from(2), Ok(DrawAlgorithm::Bresenham));
        assert_eq!(
            DrawAlgorithm::try_from(0),
            Err(ValidationError::NoDrawAlgorithm)
        );
        assert!(DrawAlgorithm::try_from(7).is_err());
        assert_eq!(ShapeKind::try_from(3), Ok(ShapeKind::Circle));
        assert!(ShapeKind::try_from(0).is_err());
    }

    #[test]
    fn test_owned_points_deduplicates_reused_endpoints() {
        let mut pts = registry(3);
        let mut line = Line::create(0, &mut pts, 0, 1, DrawAlgorithm::Dda);
        line.set_clipped(0, 2);
        let shape = Shape::Line(&line);
        assert_eq!(shape.points(), vec![0, 1]);
        assert_eq!(shape.owned_points(), vec![0, 1, 2]);
        assert_eq!(shape.clip_status(), ClipStatus::Clipped);
    }

    #[test]
    fn test_circle_capabilities() {
        let mut pts = registry(2);
        let c = Circle::create(4, &mut pts, 0, 1);
        let shape = Shape::Circle(&c);
        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert_eq!(shape.id(), 4);
        assert_eq!(shape.algorithm(), None);
        assert_eq!(shape.clip_status(), ClipStatus::None);
    }
}
