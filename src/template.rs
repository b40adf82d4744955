//! Transform parameter templates.
//!
//! Translation and scale take `"(N,N)"`, rotation takes `"Nd"` with the
//! angle in degrees. A number is made of digits, an optional sign and an
//! optional decimal point; nothing else is accepted inside a template.

use crate::basics::deg2rad;
use crate::error::ValidationError;
use crate::trans_affine::{Transform, TransformKind};

/// Characters allowed inside a numeric field.
#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-')
}

/// Parse one numeric field. `None` for empty, malformed or non-finite
/// input.
pub fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() || !s.chars().all(is_number_char) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reject any character that can never appear in a numeric field.
fn check_characters(field: &str) -> Result<(), ValidationError> {
    match field.chars().find(|&c| !is_number_char(c)) {
        Some(found) => Err(ValidationError::InvalidCharacter { found }),
        None => Ok(()),
    }
}

fn parse_field(field: &str, kind: TransformKind) -> Result<f64, ValidationError> {
    check_characters(field)?;
    parse_number(field).ok_or(ValidationError::InvalidTemplate { kind })
}

/// `"(N,N)"` -> `(N, N)`.
fn parse_pair(content: &str, kind: TransformKind) -> Result<(f64, f64), ValidationError> {
    let inner = content
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or(ValidationError::InvalidTemplate { kind })?;
    let (first, second) = inner
        .split_once(',')
        .ok_or(ValidationError::InvalidTemplate { kind })?;
    Ok((parse_field(first, kind)?, parse_field(second, kind)?))
}

/// `"Nd"` -> `N` degrees.
fn parse_degrees(content: &str, kind: TransformKind) -> Result<f64, ValidationError> {
    let number = content
        .strip_suffix('d')
        .ok_or(ValidationError::InvalidTemplate { kind })?;
    parse_field(number, kind)
}

/// Parameter string of a parameterized transform, trimmed.
fn required(content: &str) -> Result<&str, ValidationError> {
    let content = content.trim();
    if content.is_empty() {
        Err(ValidationError::MissingParameters)
    } else {
        Ok(content)
    }
}

/// Turn a transform selection and its parameter string into a
/// [`Transform`].
///
/// Reflections ignore `content`. Parameterized kinds fail with
/// [`ValidationError::MissingParameters`] when `content` is blank.
pub fn parse_transform(kind: TransformKind, content: &str) -> Result<Transform, ValidationError> {
    let transform = match kind {
        TransformKind::Translate => {
            let (dx, dy) = parse_pair(required(content)?, kind)?;
            Transform::Translate { dx, dy }
        }
        TransformKind::Scale => {
            let (sx, sy) = parse_pair(required(content)?, kind)?;
            Transform::Scale { sx, sy }
        }
        TransformKind::Rotate => {
            let degrees = parse_degrees(required(content)?, kind)?;
            Transform::Rotate {
                angle: deg2rad(degrees),
            }
        }
        TransformKind::ReflectX => Transform::ReflectX,
        TransformKind::ReflectY => Transform::ReflectY,
        TransformKind::ReflectXY => Transform::ReflectXY,
    };
    Ok(transform)
}
