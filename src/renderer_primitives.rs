//! Entity renderer.
//!
//! Turns lines, polygons, circles and the clip rectangle into paint
//! commands on a [`RenderSink`]. Entity points are drawn as marks; the
//! pixels in between come from the line and circle interpolators.

use crate::array::BoundedArray;
use crate::basics::iround;
use crate::circle::Circle;
use crate::circle_bresenham::CirclePixels;
use crate::clip_rect::ClipRect;
use crate::color::Color;
use crate::dda_line::LineInterpolator;
use crate::line::Line;
use crate::point::{Point, PointIndex};
use crate::polygon::{closed_edges, Polygon};
use crate::render_sink::RenderSink;
use crate::shape::{DrawAlgorithm, Shape};

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Draws entities into a sink without anti-aliasing.
///
/// Each entity is painted in the color of one reference point: a line's
/// initial point, a polygon edge's start point, a circle's center.
pub struct RendererPrimitives<'a, S: RenderSink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: RenderSink + ?Sized> RendererPrimitives<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Mark a point at its rounded position.
    pub fn mark(&mut self, x: f64, y: f64, color: &Color) {
        self.sink.mark_point(iround(x), iround(y), color);
    }

    pub fn mark_point(&mut self, p: &Point) {
        self.mark(p.x, p.y, &p.paint_color());
    }

    /// Rasterize a segment. The start pixel is left to the endpoint mark.
    pub fn line(
        &mut self,
        algorithm: DrawAlgorithm,
        from: (f64, f64),
        to: (f64, f64),
        color: &Color,
    ) {
        for (x, y) in LineInterpolator::new(algorithm, from.0, from.1, to.0, to.1) {
            self.sink.blend_pixel(x, y, color);
        }
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, color: &Color) {
        for (x, y) in CirclePixels::new(cx, cy, radius) {
            self.sink.blend_pixel(x, y, color);
        }
    }

    /// Closed loop through `vertices`, each edge in its start point's color.
    pub fn polygon(
        &mut self,
        algorithm: DrawAlgorithm,
        points: &BoundedArray<Point>,
        vertices: &[PointIndex],
    ) {
        for &v in vertices {
            self.mark_point(points.get(v));
        }
        for (a, b) in closed_edges(vertices) {
            let start = points.get(a);
            let end = points.get(b);
            self.line(algorithm, start.coord(), end.coord(), &start.paint_color());
        }
    }

    /// The visible part of a line, if any.
    pub fn draw_line(&mut self, line: &Line, points: &BoundedArray<Point>) {
        let Some([a, b]) = line.visible_points() else {
            return;
        };
        let start = points.get(a);
        let end = points.get(b);
        self.mark_point(start);
        self.mark_point(end);
        self.line(
            line.algorithm(),
            start.coord(),
            end.coord(),
            &start.paint_color(),
        );
    }

    pub fn draw_polygon(&mut self, polygon: &Polygon, points: &BoundedArray<Point>) {
        if let Some(vertices) = polygon.visible_vertices() {
            self.polygon(polygon.algorithm(), points, &vertices);
        }
    }

    pub fn draw_circle(&mut self, circle: &Circle, points: &BoundedArray<Point>) {
        let [c, b] = circle.points();
        let center = points.get(c);
        self.mark_point(center);
        self.mark_point(points.get(b));
        self.circle(
            center.x,
            center.y,
            circle.radius(points),
            &center.paint_color(),
        );
    }

    pub fn draw_shape(&mut self, shape: Shape<'_>, points: &BoundedArray<Point>) {
        match shape {
            Shape::Line(l) => self.draw_line(l, points),
            Shape::Polygon(pl) => self.draw_polygon(pl, points),
            Shape::Circle(c) => self.draw_circle(c, points),
        }
    }

    /// Four corner marks and the outline, drawn with Bresenham in the
    /// first corner's color.
    pub fn draw_clip_rect(&mut self, rect: &ClipRect) {
        let corners = rect.corners();
        let color = corners[0].paint_color();
        for c in corners {
            self.mark_point(c);
        }
        for i in 0..corners.len() {
            let a = &corners[i];
            let b = &corners[(i + 1) % corners.len()];
            self.line(DrawAlgorithm::Bresenham, a.coord(), b.coord(), &color);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip_rect::ClipAlgorithm;
    use crate::render_sink::RecordingSink;

    fn registry(coords: &[(f64, f64)], color: Color) -> BoundedArray<Point> {
        let mut pts = BoundedArray::new(16);
        for (i, &(x, y)) in coords.iter().enumerate() {
            pts.push(Point::with_color(i as u64, x, y, color));
        }
        pts
    }

    #[test]
    fn test_line_uses_initial_point_color() {
        let mut pts = registry(&[(0.0, 0.0), (5.0, 0.0)], Color::BLACK);
        pts.set(0, Point::with_color(0, 0.0, 0.0, Color::RED));
        let line = Line::create(0, &mut pts, 0, 1, DrawAlgorithm::Dda);

        let mut sink = RecordingSink::new();
        RendererPrimitives::new(&mut sink).draw_line(&line, &pts);

        assert_eq!(sink.marks().len(), 2);
        let px = sink.pixels();
        assert_eq!(px.len(), 5);
        assert!(px.iter().all(|&(_, _, c)| c == Color::RED));
        assert_eq!((px[4].0, px[4].1), (5, 0));
    }

    #[test]
    fn test_invisible_line_draws_nothing() {
        let mut pts = registry(&[(0.0, 0.0), (5.0, 0.0)], Color::BLACK);
        let mut line = Line::create(0, &mut pts, 0, 1, DrawAlgorithm::Bresenham);
        line.set_invisible();

        let mut sink = RecordingSink::new();
        RendererPrimitives::new(&mut sink).draw_line(&line, &pts);
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_polygon_edge_colors() {
        let mut pts = registry(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)], Color::BLACK);
        pts.set(1, Point::with_color(1, 4.0, 0.0, Color::RED));
        let pl = Polygon::create(0, &mut pts, &[0, 1, 2], DrawAlgorithm::Bresenham).unwrap();

        let mut sink = RecordingSink::new();
        RendererPrimitives::new(&mut sink).draw_polygon(&pl, &pts);

        assert_eq!(sink.marks().len(), 3);
        let px = sink.pixels();
        // 4 + 4 + 4 pixels; the middle edge starts at the red vertex.
        assert_eq!(px.len(), 12);
        assert!(px[..4].iter().all(|&(_, _, c)| c == Color::BLACK));
        assert!(px[4..8].iter().all(|&(_, _, c)| c == Color::RED));
        assert!(px[8..].iter().all(|&(_, _, c)| c == Color::BLACK));
    }

    #[test]
    fn test_circle_pixels() {
        let mut pts = registry(&[(0.0, 0.0), (0.0, 5.0)], Color::BLACK);
        let c = Circle::create(0, &mut pts, 0, 1);

        let mut sink = RecordingSink::new();
        RendererPrimitives::new(&mut sink).draw_circle(&c, &pts);
        assert_eq!(sink.marks().len(), 2);
        assert_eq!(sink.pixels().len(), 5 * 8);
    }

    #[test]
    fn test_clip_rect_outline() {
        let p0 = Point::with_color(0, -2.0, -2.0, Color::RED);
        let p2 = Point::with_color(1, 2.0, 2.0, Color::RED);
        let rect = ClipRect::new(0, (0, &p0), (1, &p2), [2, 3], ClipAlgorithm::LiangBarsky);

        let mut sink = RecordingSink::new();
        RendererPrimitives::new(&mut sink).draw_clip_rect(&rect);
        assert_eq!(sink.marks().len(), 4);
        assert_eq!(sink.pixels().len(), 16);
        assert!(sink.pixels().iter().all(|&(_, _, c)| c == Color::RED));
    }
}
