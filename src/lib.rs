//! # vector-canvas
//!
//! Geometry kernel of a 2D vector-drawing teaching tool. Users click points
//! on a canvas, assemble them into lines, polygons and circles, transform
//! them, and clip the scene against a rectangular window.
//!
//! It covers:
//!
//! - DDA and Bresenham line rasterization
//! - Bresenham circle rasterization
//! - Translation, rotation, scaling and reflections
//! - Cohen-Sutherland and Liang-Barsky line clipping
//!
//! ## Architecture
//!
//! The windowing layer is not part of this crate. Input arrives as
//! [`command::Command`]s (or direct [`scene::Scene`] calls) and output
//! leaves through a [`render_sink::RenderSink`]:
//!
//! 1. **Scene**: point registry, entities, clip window, selections
//! 2. **Builders**: free points become lines, polygons, circles
//! 3. **Transforms / clipping**: mutate points or clip state in place
//! 4. **Renderer**: entities become pixels through the interpolators
//! 5. **Sink**: receives pixels, point marks and status text

// Foundation types
pub mod array;
pub mod basics;
pub mod color;
pub mod config;
pub mod error;
pub mod point;

// Entities
pub mod circle;
pub mod clip_rect;
pub mod line;
pub mod polygon;
pub mod shape;

// Rasterization
pub mod circle_bresenham;
pub mod dda_line;

// Transformations
pub mod template;
pub mod trans_affine;

// Clipping
pub mod clip_cohen_sutherland;
pub mod clip_liang_barsky;

// Rendering & scene
pub mod command;
pub mod render_sink;
pub mod renderer_primitives;
pub mod scene;
