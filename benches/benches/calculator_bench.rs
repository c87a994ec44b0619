//! # AQI Calculator Benchmarks
//!
//! Measures the cost of breakpoint interpolation, multi-pollutant
//! aggregation and full reading assembly.
//!
//! Run: `cargo bench --bench calculator_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aqm_core::{
    aggregate_aqi, build_reading, individual_aqi, Location, Pollutant, PollutantReading,
    SimulatedCollector,
};

/// Benchmark single-pollutant interpolation across the index spectrum
fn bench_individual_aqi(c: &mut Criterion) {
    let mut group = c.benchmark_group("individual_aqi");

    for concentration in [5.0, 25.0, 100.0, 300.0, 1000.0] {
        group.bench_with_input(
            BenchmarkId::new("pm25", concentration),
            &concentration,
            |b, &concentration| {
                b.iter(|| individual_aqi(black_box(Pollutant::Pm25), black_box(concentration)))
            },
        );
    }

    group.finish();
}

/// Benchmark multi-pollutant aggregation
fn bench_aggregate_aqi(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_aqi");

    let readings = vec![
        PollutantReading::new(Pollutant::Pm25, 25.0, "µg/m³", 0),
        PollutantReading::new(Pollutant::Pm10, 80.0, "µg/m³", 0),
        PollutantReading::new(Pollutant::O3, 0.06, "ppm", 0),
        PollutantReading::new(Pollutant::No2, 75.0, "ppb", 0),
        PollutantReading::new(Pollutant::So2, 40.0, "ppb", 0),
        PollutantReading::new(Pollutant::Co, 5.0, "ppm", 0),
    ];

    group.bench_function("six_pollutants", |b| {
        b.iter(|| aggregate_aqi(black_box(&readings)))
    });

    group.bench_function("empty", |b| b.iter(|| aggregate_aqi(black_box(&[]))));

    group.finish();
}

/// Benchmark full reading assembly
fn bench_build_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_reading");

    let location = Location::new("New York", 40.7128, -74.0060);
    let readings = vec![
        PollutantReading::new(Pollutant::Pm25, 25.0, "µg/m³", 0),
        PollutantReading::new(Pollutant::O3, 0.06, "ppm", 0),
        PollutantReading::new(Pollutant::No2, 75.0, "ppb", 0),
    ];

    group.bench_function("three_pollutants", |b| {
        b.iter(|| {
            build_reading(
                black_box(location.clone()),
                black_box(readings.clone()),
                Some(0),
                "Bench",
            )
        })
    });

    group.finish();
}

/// Benchmark the simulated collector pipeline
fn bench_simulated_collector(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulated_collector");

    let mut collector = SimulatedCollector::new().unwrap();
    let location = Location::new("Beijing", 39.9042, 116.4074);

    group.bench_function("fetch_current", |b| {
        b.iter(|| collector.fetch_current(black_box(&location)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_individual_aqi,
    bench_aggregate_aqi,
    bench_build_reading,
    bench_simulated_collector
);
criterion_main!(benches);
