//! Color type.
//!
//! Points carry an RGB color with `f64` components; every pixel painted for
//! an entity takes the color of that entity's reference point.

/// RGB color with floating-point components.
///
/// Components are nominally in `0.0..=1.0`, but values are stored as given
/// (the canvas historically used `255.0` for a saturated red). Use
/// [`Color::to_rgba8`] to get a clamped 8-bit representation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Components as `[r, g, b]`.
    pub fn components(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit RGBA (opaque), clamping each channel to `0.0..=1.0`.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let conv = |v: f64| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [conv(self.r), conv(self.g), conv(self.b), 255]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::BLACK.to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
        // Out-of-range channels clamp.
        assert_eq!(Color::new(255.0, 0.0, -1.0).to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_components() {
        assert_eq!(Color::new(0.1, 0.2, 0.3).components(), [0.1, 0.2, 0.3]);
    }
}
