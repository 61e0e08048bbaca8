use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fitbeat_server::models::{Scope, WorkoutRecord};
use fitbeat_server::rollup;

/// Build a year of synthetic workouts, a few per day, with gaps in the
/// optional fields like real watch data has.
fn synthetic_year(count: usize) -> Vec<WorkoutRecord> {
    (0..count)
        .map(|i| {
            let month = (i % 12) + 1;
            let day = (i % 28) + 1;
            WorkoutRecord {
                id: format!("w{:06}", i),
                user_id: "bench-user".to_string(),
                distance_cm: 300_000 + (i as u64 % 50) * 10_000,
                duration_sec: 1500 + (i as u64 % 40) * 60,
                avg_hr: if i % 3 == 0 { None } else { Some(120 + (i as u32 % 60)) },
                max_hr: if i % 4 == 0 { None } else { Some(150 + (i as u32 % 50)) },
                elevation_gain: if i % 2 == 0 { Some(80.0) } else { None },
                elevation_loss: if i % 2 == 0 { Some(75.0) } else { None },
                steps: Some(5_000 + (i as u64 % 100) * 50),
                cadence: None,
                timestamp: format!("2026-{:02}-{:02}T07:30:00", month, day),
                lang: 0,
            }
        })
        .collect()
}

fn benchmark_aggregate(c: &mut Criterion) {
    let records = synthetic_year(1_000);

    let mut group = c.benchmark_group("rollup");

    group.bench_function("all_time_1k", |b| {
        b.iter(|| rollup::aggregate(Scope::All, black_box(&records)))
    });

    group.bench_function("single_month_1k", |b| {
        b.iter(|| rollup::aggregate(Scope::Month(2026, 6), black_box(&records)))
    });

    group.bench_function("month_entries_1k", |b| {
        b.iter(|| rollup::month_entries(black_box(&records)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_aggregate);
criterion_main!(benches);
