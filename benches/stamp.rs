//! Benchmarks for the easel engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use easel::{ArtSpace, Brush, BrushStyle, PixelGridUpdate, Point, PointF, SpaceOptions};

// -- Brush benchmarks --

fn bench_bristles(c: &mut Criterion) {
    let mut group = c.benchmark_group("bristles");

    for size in [1, 7, 31] {
        group.bench_function(format!("circle_{}", size), |b| {
            b.iter(|| Brush::new(BrushStyle::Circle, black_box(size)))
        });
    }
    group.bench_function("square_7", |b| {
        b.iter(|| Brush::new(BrushStyle::Square, black_box(7)))
    });

    group.finish();
}

// -- Facade benchmarks --

fn bench_painting(c: &mut Criterion) {
    let mut group = c.benchmark_group("painting");

    group.bench_function("paint_32", |b| {
        let mut space = ArtSpace::new();
        b.iter(|| space.paint(black_box(PointF::new(0.5, 0.5))).unwrap())
    });

    group.bench_function("paint_256", |b| {
        let mut space = ArtSpace::with_options(SpaceOptions {
            drawing_size: Point::splat(256),
            brush_size: 31,
            ..SpaceOptions::default()
        });
        b.iter(|| space.paint(black_box(PointF::new(0.5, 0.5))).unwrap())
    });

    group.bench_function("update_cell", |b| {
        let mut space = ArtSpace::new();
        b.iter(|| {
            space
                .update_cell(black_box(PixelGridUpdate { key: 500, value: 3 }))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");

    group.bench_function("record_stamp", |b| {
        let mut space = ArtSpace::new();
        let mut toggle = false;
        b.iter(|| {
            space.record_drawing_history(false);
            let value = usize::from(toggle);
            toggle = !toggle;
            space.update_cell(PixelGridUpdate { key: 100, value }).unwrap();
            space.record_drawing_history(true);
        })
    });

    group.bench_function("undo_redo", |b| {
        let mut space = ArtSpace::new();
        space.record_drawing_history(false);
        space.paint(PointF::new(0.5, 0.5)).unwrap();
        space.update_cell(PixelGridUpdate { key: 0, value: 1 }).unwrap();
        space.record_drawing_history(true);
        b.iter(|| {
            space.apply_drawing_history(false);
            space.apply_drawing_history(true);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_bristles, bench_painting, bench_history);
criterion_main!(benches);
