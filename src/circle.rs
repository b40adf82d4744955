//! Circle (circumference) entity.

use crate::array::BoundedArray;
use crate::basics::calc_distance;
use crate::point::{Point, PointIndex};

/// A circle defined by its center and one point on its border.
///
/// The radius is never stored; it is the distance between the two points
/// at the time it is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    id: u64,
    center: PointIndex,
    border: PointIndex,
}

impl Circle {
    /// Build a circle and mark both points as taken.
    pub fn create(
        id: u64,
        points: &mut BoundedArray<Point>,
        center: PointIndex,
        border: PointIndex,
    ) -> Self {
        points.get_mut(center).take();
        points.get_mut(border).take();
        Self { id, center, border }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// `[center, border]`.
    pub fn points(&self) -> [PointIndex; 2] {
        [self.center, self.border]
    }

    pub fn radius(&self, points: &BoundedArray<Point>) -> f64 {
        let c = points.get(self.center);
        let b = points.get(self.border);
        calc_distance(c.x, c.y, b.x, b.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_derived() {
        let mut pts = BoundedArray::new(2);
        pts.push(Point::new(0, 1.0, 1.0));
        pts.push(Point::new(1, 4.0, 5.0));
        let c = Circle::create(0, &mut pts, 0, 1);
        assert!((c.radius(&pts) - 5.0).abs() < 1e-12);
        assert!(pts.get(0).is_taken() && pts.get(1).is_taken());

        pts.get_mut(1).set_coord(1.0, 3.0);
        assert!((c.radius(&pts) - 2.0).abs() < 1e-12);
    }
}
