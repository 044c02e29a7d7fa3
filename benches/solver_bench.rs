//! Criterion benchmarks for the R||Cmax solvers.
//!
//! Instances come from the synthetic generator with fixed seeds, so every
//! run measures the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use u_rcmax::bnb::{BnbConfig, BranchAndBound};
use u_rcmax::brute_force::BruteForce;
use u_rcmax::ig::{IgConfig, IteratedGreedy};
use u_rcmax::instance::{generate, Distribution};
use u_rcmax::lpt;
use u_rcmax::Solver;

fn bench_lpt(c: &mut Criterion) {
    let mut group = c.benchmark_group("lpt");
    for &n in &[50usize, 200, 500] {
        let inst = generate(n, 10, Distribution::Uniform, 2024).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &inst, |b, inst| {
            b.iter(|| black_box(lpt::construct(inst)))
        });
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    group.sample_size(10);
    let inst = generate(9, 3, Distribution::Uniform, 2024).unwrap();

    group.bench_function("brute_force_9x3", |b| {
        b.iter(|| black_box(BruteForce::new().solve(&inst)))
    });
    group.bench_function("bnb_9x3", |b| {
        b.iter(|| {
            let mut solver = BranchAndBound::new(BnbConfig::default()).unwrap();
            black_box(solver.solve(&inst))
        })
    });

    let inst = generate(14, 2, Distribution::JobCorrelated, 2024).unwrap();
    group.bench_function("bnb_14x2_correlated", |b| {
        b.iter(|| {
            let config = BnbConfig::default().with_time_limit(Duration::from_secs(5));
            let mut solver = BranchAndBound::new(config).unwrap();
            black_box(solver.solve(&inst))
        })
    });
    group.finish();
}

fn bench_ig(c: &mut Criterion) {
    let mut group = c.benchmark_group("ig_1000_iterations");
    group.sample_size(10);
    for &(n, m) in &[(50usize, 5usize), (200, 10)] {
        let inst = generate(n, m, Distribution::Uniform, 2024).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{n}x{m}")),
            &inst,
            |b, inst| {
                b.iter(|| {
                    let config = IgConfig::default()
                        .with_time_limit(Duration::from_secs(60))
                        .with_max_iterations(1000)
                        .with_seed(42);
                    let mut solver = IteratedGreedy::new(config).unwrap();
                    black_box(solver.run(inst))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_lpt, bench_exact, bench_ig);
criterion_main!(benches);
