//! Error taxonomy.
//!
//! Every error here is recoverable: the failing operation leaves the scene
//! untouched and the message is surfaced to the rendering sink as a warning.

use thiserror::Error;

use crate::shape::ShapeKind;
use crate::trans_affine::TransformKind;

/// Input that cannot be turned into the requested operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("There must be at least {needed} free points to draw a {shape}.")]
    NotEnoughFreePoints { shape: &'static str, needed: usize },

    #[error("A polygon holds fewer than {max} vertices, got {count}.")]
    PolygonCapacity { count: usize, max: usize },

    #[error("A polygon needs at least 3 vertices, got {count}.")]
    PolygonTooSmall { count: usize },

    #[error("You must provide the drawing algorithm.")]
    NoDrawAlgorithm,

    #[error("You must provide parameters to this transformation.")]
    MissingParameters,

    #[error("{kind} template is: '{template}'. Please, reformulate your input.", template = .kind.template())]
    InvalidTemplate { kind: TransformKind },

    #[error("Template found is invalid. Please, reformulate your input.")]
    InvalidCharacter { found: char },

    #[error("You must provide the clipping algorithm.")]
    NoClipAlgorithm,

    #[error("A clip rectangle is already active.")]
    ClipRectActive,

    #[error("You have reached maximum amount of Points.")]
    PointCapacity,

    #[error("Coordinates must stay within [-{limit}, {limit}].", limit = crate::basics::COORD_LIMIT)]
    CoordinateRange,

    #[error("Unknown {what} selection: {code}.")]
    UnknownSelection { what: &'static str, code: u32 },
}

impl ValidationError {
    pub(crate) fn not_enough_points(kind: ShapeKind) -> Self {
        ValidationError::NotEnoughFreePoints {
            shape: kind.name(),
            needed: kind.min_points(),
        }
    }
}

/// Operation requested before the scene holds what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("You must draw points to perform this operation.")]
    NoPoints,

    #[error("You must draw an object to perform transformations.")]
    NoEntities,
}

/// Any recoverable scene failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    State(#[from] StateError),
}

pub type Result<T> = std::result::Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ValidationError::not_enough_points(ShapeKind::Line);
        assert_eq!(
            e.to_string(),
            "There must be at least 2 free points to draw a Line."
        );
        let e: SceneError = StateError::NoEntities.into();
        assert_eq!(
            e.to_string(),
            "You must draw an object to perform transformations."
        );
    }

    #[test]
    fn test_invalid_template_message_names_template() {
        let e = ValidationError::InvalidTemplate {
            kind: TransformKind::Rotate,
        };
        assert_eq!(
            e.to_string(),
            "Rotation template is: 'Nd'. Please, reformulate your input."
        );
        let e = ValidationError::InvalidCharacter { found: 'x' };
        assert_eq!(
            e.to_string(),
            "Template found is invalid. Please, reformulate your input."
        );
    }

    #[test]
    fn test_coordinate_range_message() {
        assert_eq!(
            ValidationError::CoordinateRange.to_string(),
            "Coordinates must stay within [-1000000, 1000000]."
        );
    }
}
