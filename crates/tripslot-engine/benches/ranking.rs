use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tripslot_engine::templates::{backfill_opening_hours, Category};
use tripslot_engine::{filter_open, rank_by_relevance, Place, QueryMoment};

fn candidates(n: usize) -> Vec<Place> {
    let places: Vec<Place> = (0..n)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            let mut place = Place::named(&format!("place-{}", i)).with_category(category.as_str());
            // Every fifth place has no rating and every seventh no category.
            if i % 5 != 0 {
                place.rating = Some((i % 50) as f64 / 10.0);
            }
            if i % 7 == 0 {
                place.category = None;
            }
            place
        })
        .collect();
    backfill_opening_hours(&places)
}

fn bench_ranking(c: &mut Criterion) {
    let places = candidates(500);
    let late_friday = QueryMoment::parse("2026-10-16", "23:30").unwrap();

    c.bench_function("rank_by_relevance/500", |b| {
        b.iter(|| rank_by_relevance(black_box(&places), black_box(late_friday)))
    });
    c.bench_function("filter_open/500", |b| {
        b.iter(|| filter_open(black_box(&places), black_box(late_friday)))
    });
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
