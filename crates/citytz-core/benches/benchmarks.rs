// crates/citytz-core/benches/benchmarks.rs

use citytz_core::{haversine_distance_km, CityDb};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine_chicago_nyc", |b| {
        b.iter(|| {
            haversine_distance_km(
                black_box(41.83),
                black_box(-87.68),
                black_box(40.7128),
                black_box(-74.006),
            )
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let db = CityDb::load().expect("bundled dataset must load");

    c.bench_function("lookup_by_city", |b| {
        b.iter(|| db.lookup_by_city(black_box("Chicago")))
    });

    c.bench_function("find_by_city_state_province", |b| {
        b.iter(|| db.find_by_city_state_province(black_box("springfield mo")))
    });

    c.bench_function("find_by_iso_code", |b| {
        b.iter(|| db.find_by_iso_code(black_box("de")))
    });

    c.bench_function("find_nearest_cities_50km", |b| {
        b.iter(|| db.find_nearest_cities(black_box(41.8299), black_box(-87.75), black_box(50.0)))
    });
}

criterion_group!(benches, bench_haversine, bench_queries);
criterion_main!(benches);
