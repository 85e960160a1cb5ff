use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jieqi_core::{AnalyticProvider, Astronomy, Body, MemoProvider};
use jieqi_frames::GeographicCoordinates;
use jieqi_search::{SolverConfig, solar_terms, solve_longitude};
use jieqi_time::JulianDay;

fn solar_terms_bench(c: &mut Criterion) {
    let provider = AnalyticProvider;
    let astro = Astronomy::new(
        GeographicCoordinates::from_degrees(116.4, 39.9),
        JulianDay::new(2_460_310.5),
        &provider,
    );
    let config = SolverConfig::default();

    let mut group = c.benchmark_group("solar_terms");
    group.sample_size(20);
    group.bench_function("year_analytic", |b| {
        b.iter(|| solar_terms(black_box(&astro), black_box(2024), &config).expect("should solve"))
    });
    group.bench_function("year_memoized", |b| {
        b.iter(|| {
            let memo = MemoProvider::new(AnalyticProvider);
            let astro = Astronomy::new(GeographicCoordinates::default(), JulianDay::new(2_460_310.5), &memo);
            solar_terms(black_box(&astro), black_box(2024), &config).expect("should solve")
        })
    });
    group.finish();
}

fn moon_longitude_bench(c: &mut Criterion) {
    let provider = AnalyticProvider;
    let astro = Astronomy::new(
        GeographicCoordinates::default(),
        JulianDay::new(2_460_310.5),
        &provider,
    );
    let moon = astro.planet(Body::Moon).expect("moon state");
    let config = SolverConfig::default();

    c.bench_function("solve_moon_longitude", |b| {
        b.iter(|| {
            solve_longitude(black_box(&astro), &moon, black_box(3.0), &config)
                .expect("should converge")
        })
    });
}

criterion_group!(benches, solar_terms_bench, moon_longitude_bench);
criterion_main!(benches);
