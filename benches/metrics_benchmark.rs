use criterion::{criterion_group, criterion_main, Criterion};
use fittracker::models::Activity;
use fittracker::services::metrics;
use fittracker::views::ListDisplay;
use fittracker::FetchState;
use std::hint::black_box;

fn activity_page(count: usize) -> Vec<Activity> {
    let types = ["RUNNING", "WALKING", "CYCLING", "SWIMMING"];
    (0..count)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": format!("a{}", i),
                "type": types[i % types.len()],
                "duration": (i % 90) as u32,
                "caloriesBurned": (i * 7 % 1200) as u32,
                "createdAt": "2025-03-01T08:15:00"
            }))
            .expect("Failed to build activity")
        })
        .collect()
}

fn benchmark_metrics(c: &mut Criterion) {
    let activities = activity_page(500);

    let mut group = c.benchmark_group("activity_metrics");

    group.bench_function("summarize_500", |b| {
        b.iter(|| {
            activities
                .iter()
                .map(|a| metrics::summarize(black_box(a)))
                .count()
        })
    });

    // Full list rendering: metrics plus date formatting per card
    let state = FetchState::Ready(activities.clone());
    group.bench_function("list_display_500", |b| {
        b.iter(|| ListDisplay::from_state(black_box(&state)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_metrics);
criterion_main!(benches);
