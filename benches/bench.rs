// Criterion benchmarks for BloodLink Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bloodlink_algo::core::{haversine_distance, normalize_donor, rank_donors, Matcher};
use bloodlink_algo::models::{
    Coordinates, DonorId, LocationValue, MatchRequest, NormalizedDonor, NumericValue, RawDonor,
};

const KATHMANDU: Coordinates = Coordinates::new(27.7172, 85.3240);

fn raw_donor(id: usize) -> RawDonor {
    // Spread donors over a grid around the valley
    let latitude = 26.5 + (id % 100) as f64 * 0.03;
    let longitude = 83.0 + (id / 100) as f64 * 0.03;

    RawDonor {
        id: Some(DonorId::Number(id as i64)),
        name: Some(format!("Donor {}", id)),
        location: Some(LocationValue::Pair(vec![
            NumericValue::Number(latitude),
            NumericValue::Number(longitude),
        ])),
        ..RawDonor::default()
    }
}

fn normalized_pool(size: usize) -> Vec<NormalizedDonor> {
    (0..size)
        .map(|id| normalize_donor(&raw_donor(id)).unwrap())
        .collect()
}

fn bench_haversine(c: &mut Criterion) {
    let pokhara = Coordinates::new(28.2096, 83.9856);

    c.bench_function("haversine_distance", |b| {
        b.iter(|| haversine_distance(black_box(KATHMANDU), black_box(pokhara)))
    });
}

fn bench_rank_donors(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_donors");

    for size in [100, 1_000, 10_000] {
        let pool = normalized_pool(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| rank_donors(black_box(KATHMANDU), pool, 5))
        });
    }

    group.finish();
}

fn bench_full_match(c: &mut Criterion) {
    let matcher = Matcher::default();
    let donors: Vec<RawDonor> = (0..1_000).map(raw_donor).collect();
    let request = MatchRequest {
        city: Some("Kathmandu".to_string()),
        ..MatchRequest::default()
    };

    c.bench_function("match_request_1000", |b| {
        b.iter(|| matcher.match_request(black_box(&request), black_box(&donors)))
    });
}

criterion_group!(benches, bench_haversine, bench_rank_donors, bench_full_match);
criterion_main!(benches);
