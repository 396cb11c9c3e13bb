//! Benchmarks for grid fingerprints and the hash-filtered join.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use frechetum::frechet::DistanceScratch;
use frechetum::hash::{similarity_join, HashFamily, HashScratch, TensoredHasher};
use frechetum::sampling::RandomStream;
use frechetum::{Curve, Point2};

fn random_walk(len: usize, rng: &mut RandomStream) -> Vec<Point2<f64>> {
    let mut p = Point2::new(rng.next_f64() * 50.0, rng.next_f64() * 50.0);
    (0..len)
        .map(|_| {
            p = Point2::new(p.x + rng.next_f64() - 0.5, p.y + rng.next_f64() - 0.5);
            p
        })
        .collect()
}

fn bench_hash_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_curve");
    let mut rng = RandomStream::new(11);

    for len in [100, 1000, 10_000] {
        let points = random_walk(len, &mut rng);
        let family = HashFamily::<Point2<f64>>::new(0.5, 8, 42).unwrap();
        let mut scratch = HashScratch::new();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("fingerprint", len), &len, |bench, _| {
            bench.iter(|| family.hash_curve(black_box(&points), &mut scratch))
        });
        group.bench_with_input(BenchmarkId::new("grid_keys", len), &len, |bench, _| {
            bench.iter(|| {
                family
                    .grid_keys(black_box(&points), &mut scratch)
                    .map(|keys| keys.len())
            })
        });
    }

    group.finish();
}

fn bench_tensored(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensored_keys");
    let mut rng = RandomStream::new(12);
    let points = random_walk(1000, &mut rng);
    let mut scratch = HashScratch::new();
    let mut out = Vec::new();

    for functions in [2, 4, 8] {
        let hasher = TensoredHasher::<Point2<f64>>::new(0.5, functions, 7).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(functions),
            &functions,
            |bench, _| {
                bench.iter(|| hasher.tensored_keys(black_box(&points), &mut scratch, &mut out))
            },
        );
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut rng = RandomStream::new(13);
    let curves: Vec<Curve<Point2<f64>>> = (0..200)
        .filter_map(|k| Curve::new(k, random_walk(50, &mut rng)).ok())
        .collect();
    let hasher = TensoredHasher::<Point2<f64>>::new(2.0, 4, 3).unwrap();
    let mut hash_scratch = HashScratch::new();
    let mut distance_scratch = DistanceScratch::new();

    c.bench_function("similarity_join_200", |bench| {
        bench.iter(|| {
            similarity_join(
                black_box(&curves),
                1.0,
                &hasher,
                &mut hash_scratch,
                &mut distance_scratch,
            )
        })
    });
}

criterion_group!(benches, bench_hash_curve, bench_tensored, bench_join);
criterion_main!(benches);
