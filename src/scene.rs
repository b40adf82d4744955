//! Scene aggregate.
//!
//! A [`Scene`] owns the point registry, every entity built from it, the
//! optional clip rectangle, the current selections and all id counters.
//! Each operation either succeeds completely or returns a [`SceneError`]
//! and leaves the scene as it was.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::array::BoundedArray;
use crate::basics::in_coord_range;
use crate::circle::Circle;
use crate::clip_rect::{ClipAlgorithm, ClipOutcome, ClipRect};
use crate::color::Color;
use crate::config::SceneConfig;
use crate::error::{Result, StateError, ValidationError};
use crate::line::Line;
use crate::point::{Point, PointIndex};
use crate::polygon::Polygon;
use crate::render_sink::RenderSink;
use crate::renderer_primitives::RendererPrimitives;
use crate::shape::{ClipStatus, DrawAlgorithm, Shape, ShapeKind};
use crate::template::parse_transform;
use crate::trans_affine::{Transform, TransformKind};

/// Name used for the clip rectangle in free-point errors.
const CLIP_RECT_NAME: &str = "Clip Rectangle";

// ============================================================================
// ClipSummary
// ============================================================================

/// What one clip pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipSummary {
    /// Entities that kept a visible part.
    pub clipped: usize,
    /// Entities found entirely outside the window.
    pub invisible: usize,
    /// Points added to the registry for moved endpoints.
    pub new_points: usize,
}

impl ClipSummary {
    pub fn processed(&self) -> usize {
        self.clipped + self.invisible
    }
}

// ============================================================================
// Scene
// ============================================================================

#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    points: BoundedArray<Point>,
    free: VecDeque<PointIndex>,
    clicked: usize,
    lines: BoundedArray<Line>,
    polygons: BoundedArray<Polygon>,
    circles: BoundedArray<Circle>,
    clip_rect: Option<ClipRect>,
    draw_algorithm: Option<DrawAlgorithm>,
    clip_algorithm: Option<ClipAlgorithm>,
    next_point_id: u64,
    next_line_id: u64,
    next_polygon_id: u64,
    next_circle_id: u64,
    next_clip_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let entities = config.max_points;
        Self {
            points: BoundedArray::new(config.registry_capacity()),
            free: VecDeque::with_capacity(config.max_points),
            clicked: 0,
            lines: BoundedArray::new(entities),
            polygons: BoundedArray::new(entities),
            circles: BoundedArray::new(entities),
            clip_rect: None,
            draw_algorithm: None,
            clip_algorithm: None,
            next_point_id: 0,
            next_line_id: 0,
            next_polygon_id: 0,
            next_circle_id: 0,
            next_clip_id: 0,
            config,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn points(&self) -> &BoundedArray<Point> {
        &self.points
    }

    pub fn point(&self, index: PointIndex) -> &Point {
        self.points.get(index)
    }

    /// Points not yet absorbed by any entity, oldest first.
    pub fn free_points(&self) -> impl Iterator<Item = PointIndex> + '_ {
        self.free.iter().copied()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Points added by clicks, excluding points generated by clipping.
    pub fn clicked_count(&self) -> usize {
        self.clicked
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.iter()
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.circles.iter()
    }

    pub fn clip_rect(&self) -> Option<&ClipRect> {
        self.clip_rect.as_ref()
    }

    /// Every drawable entity: lines, then polygons, then circles.
    pub fn shapes(&self) -> impl Iterator<Item = Shape<'_>> {
        self.lines
            .iter()
            .map(Shape::Line)
            .chain(self.polygons.iter().map(Shape::Polygon))
            .chain(self.circles.iter().map(Shape::Circle))
    }

    pub fn shape_count(&self) -> usize {
        self.lines.count() + self.polygons.count() + self.circles.count()
    }

    pub fn draw_algorithm(&self) -> Option<DrawAlgorithm> {
        self.draw_algorithm
    }

    pub fn clip_algorithm(&self) -> Option<ClipAlgorithm> {
        self.clip_algorithm
    }

    // ------------------------------------------------------------------------
    // Selections
    // ------------------------------------------------------------------------

    pub fn set_draw_algorithm(&mut self, algorithm: Option<DrawAlgorithm>) {
        debug!(?algorithm, "draw algorithm selected");
        self.draw_algorithm = algorithm;
    }

    /// Select the clip algorithm. While one is selected, new points are
    /// painted with the clip point color.
    pub fn set_clip_mode(&mut self, algorithm: Option<ClipAlgorithm>) {
        debug!(?algorithm, "clip algorithm selected");
        self.clip_algorithm = algorithm;
    }

    fn current_point_color(&self) -> Color {
        if self.clip_algorithm.is_some() {
            self.config.clip_point_color
        } else {
            self.config.point_color
        }
    }

    // ------------------------------------------------------------------------
    // Points
    // ------------------------------------------------------------------------

    /// Add a clicked point in scene coordinates.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<PointIndex> {
        if self.clicked >= self.config.max_points {
            return Err(ValidationError::PointCapacity.into());
        }
        if !in_coord_range(x, y) {
            return Err(ValidationError::CoordinateRange.into());
        }
        let id = self.next_point_id;
        self.next_point_id += 1;
        let color = self.current_point_color();
        let index = self.points.push(Point::with_color(id, x, y, color));
        self.free.push_back(index);
        self.clicked += 1;
        debug!(id, x, y, index, "point added");
        Ok(index)
    }

    /// New taken point for a clipped endpoint, colored like `origin`.
    fn add_clip_point(&mut self, (x, y): (f64, f64), origin: PointIndex) -> PointIndex {
        let id = self.next_point_id;
        self.next_point_id += 1;
        let mut p = Point::new(id, x, y);
        if let Some(&color) = self.points.get(origin).color() {
            p.define_color(color);
        }
        p.take();
        self.points.push(p)
    }

    // ------------------------------------------------------------------------
    // Entity builders
    // ------------------------------------------------------------------------

    /// Build as many entities of `kind` as the free points allow and return
    /// how many were built.
    ///
    /// Lines and circles take free points in pairs, in click order; a
    /// trailing odd point stays free. A polygon takes every free point.
    pub fn build(&mut self, kind: ShapeKind) -> Result<usize> {
        let built = match kind {
            ShapeKind::Line => self.build_lines()?,
            ShapeKind::Polygon => self.build_polygon()?,
            ShapeKind::Circle => self.build_circles()?,
        };
        info!(%kind, built, "entities created");
        Ok(built)
    }

    fn require_algorithm(&self) -> Result<DrawAlgorithm> {
        self.draw_algorithm
            .ok_or_else(|| ValidationError::NoDrawAlgorithm.into())
    }

    fn require_free(&self, kind: ShapeKind) -> Result<()> {
        if self.free.len() < kind.min_points() {
            return Err(ValidationError::not_enough_points(kind).into());
        }
        Ok(())
    }

    fn take_pair(&mut self) -> Option<(PointIndex, PointIndex)> {
        if self.free.len() < 2 {
            return None;
        }
        let a = self.free.pop_front()?;
        let b = self.free.pop_front()?;
        Some((a, b))
    }

    fn build_lines(&mut self) -> Result<usize> {
        let algorithm = self.require_algorithm()?;
        self.require_free(ShapeKind::Line)?;

        let mut built = 0;
        while let Some((a, b)) = self.take_pair() {
            let line = Line::create(self.next_line_id, &mut self.points, a, b, algorithm);
            debug!(id = line.id(), p_init = a, p_final = b, "line created");
            self.next_line_id += 1;
            self.lines.push(line);
            built += 1;
        }
        Ok(built)
    }

    fn build_polygon(&mut self) -> Result<usize> {
        let algorithm = self.require_algorithm()?;
        self.require_free(ShapeKind::Polygon)?;

        let vertices: Vec<PointIndex> = self.free.iter().copied().collect();
        let polygon = Polygon::create(self.next_polygon_id, &mut self.points, &vertices, algorithm)?;
        debug!(id = polygon.id(), ?vertices, "polygon created");
        self.free.clear();
        self.next_polygon_id += 1;
        self.polygons.push(polygon);
        Ok(1)
    }

    fn build_circles(&mut self) -> Result<usize> {
        self.require_free(ShapeKind::Circle)?;

        let mut built = 0;
        while let Some((center, border)) = self.take_pair() {
            let circle = Circle::create(self.next_circle_id, &mut self.points, center, border);
            debug!(id = circle.id(), center, border, "circle created");
            self.next_circle_id += 1;
            self.circles.push(circle);
            built += 1;
        }
        Ok(built)
    }

    /// Build the clip rectangle from the two oldest free points.
    pub fn create_clip_rect(&mut self) -> Result<&ClipRect> {
        if self.clip_rect.is_some() {
            return Err(ValidationError::ClipRectActive.into());
        }
        let algorithm = self
            .clip_algorithm
            .ok_or(ValidationError::NoClipAlgorithm)?;
        let (a, b) = self.take_pair().ok_or(ValidationError::NotEnoughFreePoints {
            shape: CLIP_RECT_NAME,
            needed: 2,
        })?;

        self.points.get_mut(a).take();
        self.points.get_mut(b).take();
        let derived_ids = [self.next_point_id, self.next_point_id + 1];
        self.next_point_id += 2;

        let rect = ClipRect::new(
            self.next_clip_id,
            (a, self.points.get(a)),
            (b, self.points.get(b)),
            derived_ids,
            algorithm,
        );
        self.next_clip_id += 1;
        info!(
            id = rect.id(),
            picked = ?rect.picked_points(),
            bounds = ?rect.bounds(),
            ?algorithm,
            "clip rectangle created"
        );
        Ok(self.clip_rect.insert(rect))
    }

    // ------------------------------------------------------------------------
    // Clipping
    // ------------------------------------------------------------------------

    /// Clip every line and polygon that has not been clipped yet against
    /// the active clip rectangle.
    ///
    /// Fails with [`StateError::NoPoints`] on an empty scene. Without a
    /// clip rectangle nothing changes. Circles are never clipped.
    pub fn clip(&mut self) -> Result<ClipSummary> {
        if self.points.is_empty() {
            return Err(StateError::NoPoints.into());
        }
        let mut summary = ClipSummary::default();
        let Some(rect) = self.clip_rect.clone() else {
            debug!("no clip rectangle, nothing to clip");
            return Ok(summary);
        };

        for i in 0..self.lines.count() {
            if self.lines.get(i).clip_status() != ClipStatus::None {
                continue;
            }
            let [a, b] = self.lines.get(i).points();
            let (x1, y1) = self.points.get(a).coord();
            let (x2, y2) = self.points.get(b).coord();

            match rect.clip_segment(x1, y1, x2, y2) {
                ClipOutcome::Rejected => {
                    self.lines.get_mut(i).set_invisible();
                    summary.invisible += 1;
                }
                ClipOutcome::Accepted { start, end } => {
                    let init = self.resolve_endpoint(start, a, &mut summary);
                    let fin = self.resolve_endpoint(end, b, &mut summary);
                    self.lines.get_mut(i).set_clipped(init, fin);
                    summary.clipped += 1;
                }
            }
            debug!(id = self.lines.get(i).id(), status = ?self.lines.get(i).clip_status(), "line clipped");
        }

        for i in 0..self.polygons.count() {
            if self.polygons.get(i).clip_status() != ClipStatus::None {
                continue;
            }
            let edges = self.polygons.get(i).edges();
            let outcomes: Vec<ClipOutcome> = edges
                .iter()
                .map(|&(a, b)| {
                    let (x1, y1) = self.points.get(a).coord();
                    let (x2, y2) = self.points.get(b).coord();
                    rect.clip_segment(x1, y1, x2, y2)
                })
                .collect();

            if outcomes.iter().any(ClipOutcome::is_rejected) {
                self.polygons.get_mut(i).set_invisible();
                summary.invisible += 1;
            } else {
                let mut clipped = Vec::with_capacity(edges.len());
                for (&(a, _), outcome) in edges.iter().zip(&outcomes) {
                    let start = match *outcome {
                        ClipOutcome::Accepted { start, .. } => start,
                        ClipOutcome::Rejected => None,
                    };
                    clipped.push(self.resolve_endpoint(start, a, &mut summary));
                }
                self.polygons.get_mut(i).set_clipped(clipped);
                summary.clipped += 1;
            }
            debug!(id = self.polygons.get(i).id(), status = ?self.polygons.get(i).clip_status(), "polygon clipped");
        }

        info!(
            clipped = summary.clipped,
            invisible = summary.invisible,
            new_points = summary.new_points,
            algorithm = ?rect.algorithm(),
            "clip pass finished"
        );
        Ok(summary)
    }

    /// Registry index of a clipped endpoint: a new point if it moved, the
    /// original otherwise.
    fn resolve_endpoint(
        &mut self,
        moved: Option<(f64, f64)>,
        original: PointIndex,
        summary: &mut ClipSummary,
    ) -> PointIndex {
        match moved {
            Some(coord) => {
                summary.new_points += 1;
                self.add_clip_point(coord, original)
            }
            None => original,
        }
    }

    // ------------------------------------------------------------------------
    // Transformations
    // ------------------------------------------------------------------------

    /// Parse `content` for `kind` and apply the result to every entity.
    ///
    /// Fails with [`StateError`] before looking at `content` when the scene
    /// holds no points or no entities.
    pub fn transform(&mut self, kind: TransformKind, content: &str) -> Result<usize> {
        self.require_entities()?;
        let transform = parse_transform(kind, content)?;
        self.apply_transform(&transform)
    }

    fn require_entities(&self) -> Result<()> {
        if self.clicked == 0 {
            return Err(StateError::NoPoints.into());
        }
        if self.shape_count() == 0 {
            return Err(StateError::NoEntities.into());
        }
        Ok(())
    }

    /// Apply `transform` to every line, polygon and circle and return how
    /// many entities moved.
    ///
    /// Each entity's points, clipped ones included, are transformed once.
    /// Clip rectangle corners and free points stay in place. A result
    /// outside [`COORD_LIMIT`](crate::basics::COORD_LIMIT) fails with
    /// [`ValidationError::CoordinateRange`] and nothing moves.
    pub fn apply_transform(&mut self, transform: &Transform) -> Result<usize> {
        self.require_entities()?;

        let targets: Vec<Vec<PointIndex>> = self
            .shapes()
            .filter(|s| transform.affects(s.kind()))
            .map(|s| s.owned_points())
            .collect();

        let moves: Vec<(PointIndex, (f64, f64))> = targets
            .iter()
            .flat_map(|indices| transform.mapped(&self.points, indices))
            .collect();
        if let Some((idx, (x, y))) = moves.iter().find(|(_, (x, y))| !in_coord_range(*x, *y)) {
            debug!(index = idx, x, y, "transformed point out of range");
            return Err(ValidationError::CoordinateRange.into());
        }

        for (idx, (x, y)) in moves {
            self.points.get_mut(idx).set_coord(x, y);
        }
        info!(kind = %transform.kind(), entities = targets.len(), "transformation applied");
        Ok(targets.len())
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Redraw the whole scene into `sink`.
    ///
    /// Entities are drawn in their displayed form (clipped geometry when
    /// clipped, nothing when invisible), followed by free point marks and
    /// the clip rectangle.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.clear();
        let mut ren = RendererPrimitives::new(sink);
        for shape in self.shapes() {
            ren.draw_shape(shape, &self.points);
        }
        for &index in &self.free {
            ren.mark_point(self.points.get(index));
        }
        if let Some(rect) = &self.clip_rect {
            ren.draw_clip_rect(rect);
        }
    }

    // ------------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------------

    /// Drop every point and entity and restart all id counters. Current
    /// selections are kept.
    pub fn clear(&mut self) {
        self.points.clear();
        self.free.clear();
        self.clicked = 0;
        self.lines.clear();
        self.polygons.clear();
        self.circles.clear();
        self.clip_rect = None;
        self.next_point_id = 0;
        self.next_line_id = 0;
        self.next_polygon_id = 0;
        self.next_circle_id = 0;
        self.next_clip_id = 0;
        info!("scene cleared");
    }
}

// ============================================================================
// Tests
// ============================================================================
