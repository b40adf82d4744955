//! Criterion microbenches for the rasterizers and line clippers.
//!
//! - Lines: DDA vs Bresenham over short, diagonal and long segments.
//! - Circles: Bresenham octant walk for a few radii.
//! - Clipping: Cohen-Sutherland vs Liang-Barsky on a fixed segment mix.
//! - Scene: full redraw into a recording sink.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use vector_canvas::basics::RectD;
use vector_canvas::circle_bresenham::CirclePixels;
use vector_canvas::clip_cohen_sutherland::clip_cohen_sutherland;
use vector_canvas::clip_liang_barsky::clip_liang_barsky;
use vector_canvas::dda_line::{DdaLineInterpolator, LineBresenhamInterpolator};
use vector_canvas::render_sink::RecordingSink;
use vector_canvas::scene::Scene;
use vector_canvas::shape::{DrawAlgorithm, ShapeKind};

const SEGMENTS: [(&str, (f64, f64, f64, f64)); 3] = [
    ("short", (0.0, 0.0, 7.0, 3.0)),
    ("diagonal", (-200.0, -200.0, 200.0, 200.0)),
    ("long", (-400.0, -17.0, 399.0, 251.0)),
];

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    for (name, (x1, y1, x2, y2)) in SEGMENTS {
        group.bench_function(BenchmarkId::new("dda", name), |b| {
            b.iter(|| DdaLineInterpolator::new(x1, y1, x2, y2).fold(0i64, |acc, (x, y)| acc + (x ^ y) as i64))
        });
        group.bench_function(BenchmarkId::new("bresenham", name), |b| {
            b.iter(|| {
                LineBresenhamInterpolator::new(x1, y1, x2, y2)
                    .fold(0i64, |acc, (x, y)| acc + (x ^ y) as i64)
            })
        });
    }
    group.finish();
}

fn bench_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    for radius in [5.0, 50.0, 280.0] {
        group.bench_with_input(BenchmarkId::new("bresenham", radius), &radius, |b, &r| {
            b.iter(|| CirclePixels::new(0.0, 0.0, black_box(r)).count())
        });
    }
    group.finish();
}

fn segment_mix() -> Vec<(f64, f64, f64, f64)> {
    let mut v = Vec::with_capacity(64);
    for i in 0..64 {
        let t = i as f64;
        v.push((-300.0 + 9.0 * t, -250.0 + 3.0 * t, 280.0 - 7.0 * t, 260.0 - 8.0 * t));
    }
    v
}

fn bench_clipping(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");
    let window = RectD::new(-100.0, -75.0, 100.0, 75.0);
    let segments = segment_mix();
    group.bench_function("cohen_sutherland", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter(|&&(x1, y1, x2, y2)| !clip_cohen_sutherland(x1, y1, x2, y2, &window).is_rejected())
                .count()
        })
    });
    group.bench_function("liang_barsky", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter(|&&(x1, y1, x2, y2)| !clip_liang_barsky(x1, y1, x2, y2, &window).is_rejected())
                .count()
        })
    });
    group.finish();
}

fn bench_scene_render(c: &mut Criterion) {
    let mut scene = Scene::default();
    scene.set_draw_algorithm(Some(DrawAlgorithm::Bresenham));
    for &(x, y) in &[(-300.0, -200.0), (250.0, 180.0), (0.0, 0.0), (0.0, 120.0)] {
        let _ = scene.add_point(x, y);
    }
    let _ = scene.build(ShapeKind::Line);
    c.bench_function("scene_render", |b| {
        b.iter_batched(
            RecordingSink::new,
            |mut sink| {
                scene.render(&mut sink);
                sink
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_lines, bench_circles, bench_clipping, bench_scene_render);
criterion_main!(benches);
