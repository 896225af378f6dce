//! Benchmarks for the scoring engine.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use agroscore::{FarmAttributes, LegalReserveStatus, ViabilityScorer};

fn bench_farm() -> FarmAttributes {
    FarmAttributes {
        distance_to_paved_road_km: 25.0,
        distance_to_grain_storage_km: 45.0,
        legal_reserve_status: LegalReserveStatus::Regularized,
        has_georeferencing: true,
        annual_rainfall_mm: 1500.0,
        has_perennial_river: true,
        soil_ph: 5.8,
        clay_content_percent: 30.0,
        mechanizable_area_percent: 85.0,
    }
}

fn benchmark_evaluate(c: &mut Criterion) {
    let scorer = ViabilityScorer::new();
    let farm = bench_farm();

    c.bench_function("evaluate", |b| {
        b.iter(|| scorer.evaluate(black_box(&farm)).expect("valid input"))
    });
}

fn benchmark_validation(c: &mut Criterion) {
    let farm = bench_farm();

    c.bench_function("validate", |b| b.iter(|| black_box(&farm).validate()));
}

criterion_group!(benches, benchmark_evaluate, benchmark_validation);
criterion_main!(benches);
