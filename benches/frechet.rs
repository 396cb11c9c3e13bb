//! Benchmarks for the Fréchet distance routines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use frechetum::frechet::{
    continuous_frechet_at_most, discrete_frechet_at_most, discrete_frechet_distance,
    discrete_frechet_distance_bounded, discrete_frechet_distance_exact, DistanceScratch,
};
use frechetum::sampling::RandomStream;
use frechetum::Point2;

/// Random walk with unit-scale steps.
fn random_walk(len: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = RandomStream::new(seed);
    let mut p = Point2::new(0.0, 0.0);
    (0..len)
        .map(|_| {
            p = Point2::new(p.x + rng.next_f64() - 0.5, p.y + rng.next_f64() - 0.5);
            p
        })
        .collect()
}

fn bench_discrete_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("discrete_frechet");

    for len in [64, 256, 1024] {
        let a = random_walk(len, 1);
        let b = random_walk(len, 2);
        let mut scratch = DistanceScratch::with_capacity(len);
        group.throughput(Throughput::Elements((len * len) as u64));

        group.bench_with_input(BenchmarkId::new("rolling", len), &len, |bench, _| {
            bench.iter(|| discrete_frechet_distance(black_box(&a), black_box(&b), &mut scratch))
        });

        if len <= 256 {
            group.bench_with_input(BenchmarkId::new("full_grid", len), &len, |bench, _| {
                bench.iter(|| discrete_frechet_distance_exact(black_box(&a), black_box(&b)))
            });
        }
    }

    group.finish();
}

fn bench_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("discrete_frechet_bounded");

    let a = random_walk(1024, 3);
    let b = random_walk(1024, 4);
    let mut scratch = DistanceScratch::new();
    let exact = discrete_frechet_distance(&a, &b, &mut scratch).unwrap_or(f64::INFINITY);

    // Tight bounds reject early, loose ones run the whole table.
    for fraction in [0.25, 0.5, 1.0] {
        let bound = exact * fraction;
        group.bench_with_input(
            BenchmarkId::from_parameter(fraction),
            &bound,
            |bench, &bound| {
                bench.iter(|| {
                    discrete_frechet_distance_bounded(
                        black_box(&a),
                        black_box(&b),
                        bound,
                        &mut scratch,
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("frechet_decision");

    let a = random_walk(512, 5);
    let b = random_walk(512, 6);
    let mut scratch = DistanceScratch::new();
    let eps = discrete_frechet_distance(&a, &b, &mut scratch).unwrap_or(1.0);

    group.bench_function("discrete", |bench| {
        bench.iter(|| discrete_frechet_at_most(black_box(&a), black_box(&b), eps, &mut scratch))
    });
    group.bench_function("continuous", |bench| {
        bench.iter(|| continuous_frechet_at_most(black_box(&a), black_box(&b), eps, &mut scratch))
    });

    group.finish();
}

criterion_group!(benches, bench_discrete_distance, bench_bounded, bench_decision);
criterion_main!(benches);
