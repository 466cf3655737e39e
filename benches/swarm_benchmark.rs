/*
 * Swarm Benchmark
 *
 * Benchmarks for the per-frame engine update across particle counts and
 * behavior modes. Attraction mode carries the O(N^2) separation pass and is
 * expected to dominate; the free and shape modes give the linear baseline.
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use nanoswarm::{Engine, ParticleStore, ShapeKind, SimulationParams, Theme};

const COUNTS: [usize; 4] = [100, 500, 1000, 2000];

fn setup(count: usize) -> (ParticleStore, Engine, SimulationParams) {
    let mut rng = StdRng::seed_from_u64(42);
    let store = ParticleStore::new(count, Theme::Rainbow, &mut rng).unwrap();
    let engine = Engine::new(Theme::Rainbow);
    (store, engine, SimulationParams::default())
}

// Ambient drift only: the linear baseline
fn bench_free_drift(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_drift");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            let (mut store, mut engine, params) = setup(n);

            b.iter(|| {
                engine.update(&mut store, &params);
            });
        });
    }

    group.finish();
}

// Attraction mode runs the pairwise separation pass
fn bench_attraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("attraction");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            let (mut store, mut engine, params) = setup(n);
            engine.set_attraction_point(Some(Vec3::ZERO));

            b.iter(|| {
                engine.update(&mut store, &params);
            });
        });
    }

    group.finish();
}

// Shape pursuit: one spring per particle
fn bench_shape_pursuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_pursuit");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            let (mut store, mut engine, params) = setup(n);
            engine.form_shape(ShapeKind::Sphere, None, n);

            b.iter(|| {
                engine.update(&mut store, &params);
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_free_drift, bench_attraction, bench_shape_pursuit
}

criterion_main!(benches);
