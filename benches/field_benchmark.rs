/*
 * Neural Field Benchmark
 *
 * Measures the per-frame cost of the particle field: stepping the points,
 * the pairwise edge pass, and a full render into a surface that only counts
 * draw calls.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::color::Rgba;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use neural_field::{render_field, FieldParams, FieldStyle, ParticleField, Surface};

const WIDTH: f32 = 1920.0;
const HEIGHT: f32 = 1080.0;
const COUNTS: [usize; 4] = [50, 100, 200, 400];

#[derive(Default)]
struct CountingSurface {
    calls: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.calls += 1;
    }

    fn line(&mut self, _from: Vec2, _to: Vec2, _weight: f32, _color: Rgba) {
        self.calls += 1;
    }

    fn disc(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
        self.calls += 1;
    }
}

fn field(count: usize) -> ParticleField {
    let mut params = FieldParams::default();
    params.node_count = count;
    ParticleField::with_rng(&params, WIDTH, HEIGHT, &mut StdRng::seed_from_u64(42))
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            let mut field = field(n);
            b.iter(|| {
                field.update();
                black_box(field.points().len());
            });
        });
    }
    group.finish();
}

fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges");
    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            let field = field(n);
            b.iter(|| {
                let mut total = 0.0;
                field.for_each_edge(|edge| total += edge.opacity);
                black_box(total)
            });
        });
    }
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let style = FieldStyle { accent: rgb(0u8, 210, 255), opacity: 0.3 };
    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            let mut field = field(n);
            let mut surface = CountingSurface::default();
            b.iter(|| {
                field.update();
                black_box(render_field(&field, &mut surface, style));
            });
        });
    }
    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_update, bench_edges, bench_frame
}

criterion_main!(benches);
