//! Rendering sink.
//!
//! The kernel never owns a drawing surface. Everything it wants shown goes
//! through a [`RenderSink`]: a clear, single pixels, point marks and status
//! text. [`RecordingSink`] keeps the commands in memory for inspection.

use crate::color::Color;

// ============================================================================
// RenderSink
// ============================================================================

/// Consumer of paint commands, in scene coordinates (origin at the canvas
/// center, y up).
pub trait RenderSink {
    /// Wipe the surface before a full redraw.
    fn clear(&mut self);

    /// Paint one rasterized pixel.
    fn blend_pixel(&mut self, x: i32, y: i32, color: &Color);

    /// Paint the brush used for a scene point. Defaults to a single pixel.
    fn mark_point(&mut self, x: i32, y: i32, color: &Color) {
        self.blend_pixel(x, y, color);
    }

    /// Replace the status line.
    fn status(&mut self, message: &str);
}

// ============================================================================
// RecordingSink
// ============================================================================

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Clear,
    Pixel { x: i32, y: i32, color: Color },
    Mark { x: i32, y: i32, color: Color },
    Status(String),
}

/// Sink that records every command in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Vec<PaintCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Commands received since the last clear.
    pub fn frame(&self) -> &[PaintCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == PaintCommand::Clear)
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    /// Pixels painted since the last clear.
    pub fn pixels(&self) -> Vec<(i32, i32, Color)> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Pixel { x, y, color } => Some((*x, *y, *color)),
                _ => None,
            })
            .collect()
    }

    /// Point marks painted since the last clear.
    pub fn marks(&self) -> Vec<(i32, i32, Color)> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Mark { x, y, color } => Some((*x, *y, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            PaintCommand::Status(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self) {
        self.commands.push(PaintCommand::Clear);
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: &Color) {
        self.commands.push(PaintCommand::Pixel {
            x,
            y,
            color: *color,
        });
    }

    fn mark_point(&mut self, x: i32, y: i32, color: &Color) {
        self.commands.push(PaintCommand::Mark {
            x,
            y,
            color: *color,
        });
    }

    fn status(&mut self, message: &str) {
        self.commands.push(PaintCommand::Status(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PixelOnly(Vec<(i32, i32)>);

    impl RenderSink for PixelOnly {
        fn clear(&mut self) {
            self.0.clear();
        }
        fn blend_pixel(&mut self, x: i32, y: i32, _color: &Color) {
            self.0.push((x, y));
        }
        fn status(&mut self, _message: &str) {}
    }

    #[test]
    fn test_default_mark_is_a_pixel() {
        let mut s = PixelOnly(Vec::new());
        s.mark_point(3, 4, &Color::BLACK);
        assert_eq!(s.0, vec![(3, 4)]);
    }

    #[test]
    fn test_recording_frame_starts_after_clear() {
        let mut s = RecordingSink::new();
        s.blend_pixel(0, 0, &Color::BLACK);
        s.clear();
        s.blend_pixel(1, 2, &Color::RED);
        s.mark_point(5, 5, &Color::BLACK);
        s.status("done");

        assert_eq!(s.commands().len(), 5);
        assert_eq!(s.frame().len(), 3);
        assert_eq!(s.pixels(), vec![(1, 2, Color::RED)]);
        assert_eq!(s.marks(), vec![(5, 5, Color::BLACK)]);
        assert_eq!(s.last_status(), Some("done"));

        s.reset();
        assert!(s.commands().is_empty());
        assert_eq!(s.last_status(), None);
    }
}
