//! Benchmarks for CPU-side seeding and the reference integrator.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;

use sape::layout::{create_position_data, texture_size};
use sape::{euler_step, AttractorId};

fn bench_create_position_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_position_data");

    for count in [1_000u32, 65_536, 262_144] {
        let size = texture_size(count);
        for id in [AttractorId::Thomas, AttractorId::Lorenz] {
            let def = id.definition();
            group.bench_with_input(BenchmarkId::new(id.as_str(), count), &count, |b, &count| {
                b.iter(|| black_box(create_position_data(def, count, size)))
            });
        }
    }

    group.finish();
}

fn bench_texture_size(c: &mut Criterion) {
    c.bench_function("texture_size", |b| {
        b.iter(|| {
            for n in (1..10_000u32).step_by(7) {
                black_box(texture_size(black_box(n)));
            }
        })
    });
}

fn bench_euler_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler_step");

    for id in AttractorId::ALL {
        let def = id.definition();
        let params = def.params();
        let start = def.initial_position(0, 1);
        group.bench_function(id.as_str(), |b| {
            b.iter(|| {
                let mut p: Vec3 = start;
                for _ in 0..1000 {
                    p = euler_step(id, p, &params, 1.0);
                }
                black_box(p)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_create_position_data,
    bench_texture_size,
    bench_euler_step,
);
criterion_main!(benches);
