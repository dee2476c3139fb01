//! Criterion benchmarks for the TSP search engines.
//!
//! Instances are sampled from a fixed seed so every run measures the same
//! problems.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tsp_search::exhaustive::ExhaustiveRunner;
use tsp_search::hill::{HillClimbingConfig, HillClimbingRunner};
use tsp_search::problem::{random_cities, DistanceMatrix, InstanceConfig};
use tsp_search::tabu::{TabuConfig, TabuRunner};

fn instance(n: usize) -> DistanceMatrix {
    let config = InstanceConfig::default().with_num_cities(n);
    let cities = random_cities(&config, &mut StdRng::seed_from_u64(42)).expect("valid instance");
    DistanceMatrix::from_cities(&cities).expect("non-empty instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);

    for &n in &[6usize, 7, 8] {
        let matrix = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| black_box(ExhaustiveRunner::run(black_box(m))))
        });
    }
    group.finish();
}

fn bench_hill_climbing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climbing");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let matrix = instance(n);
        let config = HillClimbingConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| black_box(HillClimbingRunner::run(black_box(m), &config, &mut rng)))
        });
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for (n, iterations, capacity) in [(20usize, 500usize, 20usize), (50, 200, 20), (100, 100, 30)] {
        let matrix = instance(n);
        let config = TabuConfig::default()
            .with_iterations(iterations)
            .with_tabu_capacity(capacity);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_i{}_k{}", n, iterations, capacity), n),
            &(matrix, config),
            |b, (m, c)| {
                let mut rng = StdRng::seed_from_u64(7);
                b.iter(|| black_box(TabuRunner::run(black_box(m), black_box(c), &mut rng)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_exhaustive, bench_hill_climbing, bench_tabu);
criterion_main!(benches);
