//! Affine transformations of scene points.
//!
//! A [`Transform`] is one user-requested operation (translate, rotate,
//! scale or one of three reflections), applied in place to the registry
//! points an entity owns. Each kind is evaluated with its own closed-form
//! expression.

use std::fmt;

use crate::array::BoundedArray;
use crate::error::ValidationError;
use crate::point::{Point, PointIndex};
use crate::shape::ShapeKind;

// ============================================================================
// TransformKind
// ============================================================================

/// Transformation selected by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Translate = 1,
    Rotate = 2,
    Scale = 3,
    ReflectX = 4,
    ReflectY = 5,
    ReflectXY = 6,
}

impl TransformKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Translate => "Translation",
            TransformKind::Rotate => "Rotation",
            TransformKind::Scale => "Scale",
            TransformKind::ReflectX => "X Reflection",
            TransformKind::ReflectY => "Y Reflection",
            TransformKind::ReflectXY => "XY Reflection",
        }
    }

    /// Shape of the parameter string; empty for reflections.
    pub fn template(&self) -> &'static str {
        match self {
            TransformKind::Translate | TransformKind::Scale => "(N,N)",
            TransformKind::Rotate => "Nd",
            _ => "",
        }
    }

    pub fn takes_parameters(&self) -> bool {
        !self.template().is_empty()
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for TransformKind {
    type Error = ValidationError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TransformKind::Translate),
            2 => Ok(TransformKind::Rotate),
            3 => Ok(TransformKind::Scale),
            4 => Ok(TransformKind::ReflectX),
            5 => Ok(TransformKind::ReflectY),
            6 => Ok(TransformKind::ReflectXY),
            _ => Err(ValidationError::UnknownSelection {
                what: "transformation",
                code,
            }),
        }
    }
}

// ============================================================================
// Transform
// ============================================================================

/// A parameterized transformation ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate { dx: f64, dy: f64 },
    /// Angle in radians, counter-clockwise.
    Rotate { angle: f64 },
    /// A negative factor shrinks: `-2` divides by two.
    Scale { sx: f64, sy: f64 },
    /// `y' = -y`.
    ReflectX,
    /// `x' = -x`.
    ReflectY,
    ReflectXY,
}

/// One scaled coordinate: `v * s` for `s >= 0`, `v / |s|` otherwise.
#[inline]
fn scale_coord(v: f64, s: f64) -> f64 {
    if s >= 0.0 {
        v * s
    } else {
        v / s.abs()
    }
}

impl Transform {
    /// Parameterless transform for a reflection kind.
    pub fn reflection(kind: TransformKind) -> Option<Self> {
        match kind {
            TransformKind::ReflectX => Some(Transform::ReflectX),
            TransformKind::ReflectY => Some(Transform::ReflectY),
            TransformKind::ReflectXY => Some(Transform::ReflectXY),
            _ => None,
        }
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::Translate { .. } => TransformKind::Translate,
            Transform::Rotate { .. } => TransformKind::Rotate,
            Transform::Scale { .. } => TransformKind::Scale,
            Transform::ReflectX => TransformKind::ReflectX,
            Transform::ReflectY => TransformKind::ReflectY,
            Transform::ReflectXY => TransformKind::ReflectXY,
        }
    }

    /// Circles ignore rotation; everything else applies to every shape.
    pub fn affects(&self, kind: ShapeKind) -> bool {
        !(matches!(self, Transform::Rotate { .. }) && kind == ShapeKind::Circle)
    }

    /// Image of `(x, y)`. `pivot` only matters for rotation.
    pub fn map(&self, pivot: (f64, f64), x: f64, y: f64) -> (f64, f64) {
        match *self {
            Transform::Translate { dx, dy } => (x + dx, y + dy),
            Transform::Rotate { angle } => {
                let (sa, ca) = angle.sin_cos();
                let (px, py) = pivot;
                (
                    (x - px) * ca - (y - py) * sa + px,
                    (x - px) * sa + (y - py) * ca + py,
                )
            }
            Transform::Scale { sx, sy } => (scale_coord(x, sx), scale_coord(y, sy)),
            Transform::ReflectX => (x, -y),
            Transform::ReflectY => (-x, y),
            Transform::ReflectXY => (-x, -y),
        }
    }

    /// New coordinates for the given registry points, without touching
    /// them.
    ///
    /// Rotation pins `indices[0]` and turns the rest around it, so the
    /// pivot is not part of the result.
    pub fn mapped(
        &self,
        points: &BoundedArray<Point>,
        indices: &[PointIndex],
    ) -> Vec<(PointIndex, (f64, f64))> {
        let Some(&first) = indices.first() else {
            return Vec::new();
        };
        let pivot = points.get(first).coord();
        let skip = usize::from(matches!(self, Transform::Rotate { .. }));

        indices[skip..]
            .iter()
            .map(|&idx| {
                let (x, y) = points.get(idx).coord();
                (idx, self.map(pivot, x, y))
            })
            .collect()
    }

    /// Transform the given registry points in place. Every index is
    /// expected to appear once.
    pub fn apply(&self, points: &mut BoundedArray<Point>, indices: &[PointIndex]) {
        for (idx, (x, y)) in self.mapped(points, indices) {
            points.get_mut(idx).set_coord(x, y);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::deg2rad;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-10;

    fn registry(coords: &[(f64, f64)]) -> BoundedArray<Point> {
        let mut pts = BoundedArray::new(8);
        for (i, &(x, y)) in coords.iter().enumerate() {
            pts.push(Point::new(i as u64, x, y));
        }
        pts
    }

    #[test]
    fn test_translate() {
        let mut pts = registry(&[(0.0, 0.0), (10.0, 5.0)]);
        Transform::Translate { dx: 3.0, dy: -2.0 }.apply(&mut pts, &[0, 1]);
        assert_eq!(pts.get(0).coord(), (3.0, -2.0));
        assert_eq!(pts.get(1).coord(), (13.0, 3.0));
    }

    #[test]
    fn test_rotate_pins_first_point() {
        let mut pts = registry(&[(10.0, 10.0), (20.0, 10.0)]);
        Transform::Rotate { angle: deg2rad(90.0) }.apply(&mut pts, &[0, 1]);
        assert_eq!(pts.get(0).coord(), (10.0, 10.0));
        let (x, y) = pts.get(1).coord();
        assert!((x - 10.0).abs() < EPS);
        assert!((y - 20.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_matches_pivot_formula() {
        let angle = 0.7_f64;
        let (px, py) = (3.5, -1.25);
        let (x, y) = (12.0, 4.0);
        let expected = (
            (x - px) * angle.cos() - (y - py) * angle.sin() + px,
            (x - px) * angle.sin() + (y - py) * angle.cos() + py,
        );
        assert_eq!(Transform::Rotate { angle }.map((px, py), x, y), expected);
    }

    #[test]
    fn test_scale_positive_and_shrink() {
        let mut pts = registry(&[(4.0, 6.0)]);
        Transform::Scale { sx: 2.0, sy: -2.0 }.apply(&mut pts, &[0]);
        let (x, y) = pts.get(0).coord();
        assert_relative_eq!(x, 8.0);
        assert_relative_eq!(y, 3.0);
    }

    #[test]
    fn test_negative_scale_divides() {
        let mut pts = registry(&[(7.0, 0.1)]);
        Transform::Scale { sx: -3.0, sy: -3.0 }.apply(&mut pts, &[0]);
        assert_eq!(pts.get(0).coord(), (7.0 / 3.0, 0.1 / 3.0));
        assert_ne!(pts.get(0).coord().0, 7.0 * (1.0 / 3.0));
    }

    #[test]
    fn test_scale_zero_collapses() {
        let mut pts = registry(&[(4.0, 6.0)]);
        Transform::Scale { sx: 0.0, sy: 1.0 }.apply(&mut pts, &[0]);
        assert_eq!(pts.get(0).coord(), (0.0, 6.0));
    }

    #[test]
    fn test_reflections() {
        let mut pts = registry(&[(3.0, 7.0)]);
        Transform::ReflectX.apply(&mut pts, &[0]);
        assert_eq!(pts.get(0).coord(), (3.0, -7.0));
        Transform::ReflectY.apply(&mut pts, &[0]);
        assert_eq!(pts.get(0).coord(), (-3.0, -7.0));
        Transform::ReflectXY.apply(&mut pts, &[0]);
        assert_eq!(pts.get(0).coord(), (3.0, 7.0));
    }

    #[test]
    fn test_reflection_twice_is_exact() {
        let mut pts = registry(&[(1.25, -9.5), (0.1, 0.2)]);
        for t in [Transform::ReflectX, Transform::ReflectY, Transform::ReflectXY] {
            t.apply(&mut pts, &[0, 1]);
            t.apply(&mut pts, &[0, 1]);
        }
        assert_eq!(pts.get(0).coord(), (1.25, -9.5));
        assert_eq!(pts.get(1).coord(), (0.1, 0.2));
    }

    #[test]
    fn test_mapped_leaves_points_untouched() {
        let pts = registry(&[(1.0, 2.0), (3.0, 4.0)]);
        let moves = Transform::Rotate { angle: 1.0 }.mapped(&pts, &[0, 1]);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].0, 1);
        assert_eq!(pts.get(1).coord(), (3.0, 4.0));
    }

    #[test]
    fn test_rotation_skips_circles() {
        let r = Transform::Rotate { angle: 1.0 };
        assert!(!r.affects(ShapeKind::Circle));
        assert!(r.affects(ShapeKind::Polygon));
        assert!(Transform::ReflectX.affects(ShapeKind::Circle));
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(TransformKind::try_from(2), Ok(TransformKind::Rotate));
        assert!(TransformKind::try_from(0).is_err());
        assert!(TransformKind::try_from(7).is_err());
        assert!(TransformKind::Scale.takes_parameters());
        assert!(!TransformKind::ReflectXY.takes_parameters());
        assert_eq!(
            Transform::reflection(TransformKind::ReflectY).map(|t| t.kind()),
            Some(TransformKind::ReflectY)
        );
        assert!(Transform::reflection(TransformKind::Translate).is_none());
    }

    #[test]
    fn test_apply_empty_is_noop() {
        let mut pts = registry(&[(1.0, 1.0)]);
        Transform::Translate { dx: 1.0, dy: 1.0 }.apply(&mut pts, &[]);
        assert_eq!(pts.get(0).coord(), (1.0, 1.0));
    }
}
