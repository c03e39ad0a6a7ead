//! Criterion benchmarks for pricer_risk Greek strategies.
//!
//! Benchmarks cover:
//! - Finite-difference vs complex-step evaluation at one step
//! - Forward-mode AD Delta
//! - A full default sweep per preset scenario

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricer_models::scenario::PresetScenario;
use pricer_risk::greeks::{compute_cs, compute_fd};
use pricer_risk::sweep::{run_sweep, StepGrid};

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");
    let scenario = PresetScenario::AtmReference.scenario();
    let h = 1e-6 * scenario.spot();

    group.bench_function("finite_difference", |b| {
        b.iter(|| compute_fd(black_box(&scenario), black_box(h)));
    });
    group.bench_function("complex_step", |b| {
        b.iter(|| compute_cs(black_box(&scenario), black_box(h)));
    });
    #[cfg(feature = "num-dual-mode")]
    group.bench_function("dual_delta", |b| {
        b.iter(|| pricer_risk::greeks::ad_delta(black_box(&scenario)));
    });

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let grid = StepGrid::default();

    for preset in PresetScenario::all() {
        let scenario = preset.scenario();
        group.bench_function(preset.name(), |b| {
            b.iter(|| run_sweep(black_box(&scenario), black_box(&grid)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_step, bench_sweep);
criterion_main!(benches);
