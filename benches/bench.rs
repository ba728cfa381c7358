// Criterion benchmarks for Place Concierge

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use place_concierge::core::{build_prompt, select_place};
use place_concierge::models::PlaceRecord;
use place_concierge::views::nl2br;

fn create_candidate(id: usize) -> PlaceRecord {
    PlaceRecord {
        place_id: format!("place-{}", id),
        name: format!("カフェ {}", id),
        vicinity: format!("新宿区新宿{}-1-1", id % 7 + 1),
        types: vec![
            "point_of_interest".to_string(),
            "cafe".to_string(),
            "restaurant".to_string(),
            "establishment".to_string(),
        ],
        rating: if id % 5 == 0 { None } else { Some((id % 50) as f64 / 10.0) },
        user_ratings_total: (id * 13) as u32,
        open_now: Some(id % 2 == 0),
        price_level: Some((id % 4 + 1) as u8),
        website: None,
    }
}

fn bench_build_prompt(c: &mut Criterion) {
    let place = create_candidate(42);

    c.bench_function("build_prompt", |b| {
        b.iter(|| build_prompt(black_box(&place)));
    });
}

fn bench_select_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_place");

    // Nearby Search pages hold at most 20 results; larger sizes show the trend
    for size in [20, 60, 200].iter() {
        let candidates: Vec<PlaceRecord> = (0..*size).map(create_candidate).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| select_place(black_box(candidates.clone()), black_box(Some(4.8))));
        });
    }

    group.finish();
}

fn bench_nl2br(c: &mut Criterion) {
    let text = "ブルーボトルコーヒーはいかがですか？\n".repeat(10);

    c.bench_function("nl2br", |b| {
        b.iter(|| nl2br(black_box(&text)));
    });
}

criterion_group!(benches, bench_build_prompt, bench_select_place, bench_nl2br);
criterion_main!(benches);
