// SPDX-License-Identifier: MIT

//! Workout rollup engine: pure aggregation over already-retrieved records.
//!
//! Records are bucketed by parsing `timestamp` into a structured date and
//! comparing `(year, month)` integers, never by slicing the string. A record
//! whose timestamp does not parse is excluded from time-bucketed scopes and
//! counted so the caller can log it; it never aborts the rollup.
//!
//! All functions here are deterministic and I/O-free; retrieval belongs to
//! the storage layer and response shaping to the summary service.

use chrono::{Datelike, NaiveDateTime};

use crate::metrics;
use crate::models::{MonthComparison, MonthEntry, RollupBucket, Scope, WorkoutRecord};
use crate::units::{round1, to_kilometers};

/// Parse a stored timestamp.
///
/// Ingestion writes `YYYY-MM-DDTHH:MM:SS`; older records may carry
/// fractional seconds or a trailing offset, so both are accepted.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.naive_local())
}

/// Whether a parsed timestamp falls inside a scope.
fn in_scope(scope: Scope, dt: NaiveDateTime) -> bool {
    match scope {
        Scope::All => true,
        Scope::Year(y) => dt.year() == y,
        Scope::Month(y, m) => dt.year() == y && dt.month() == m,
    }
}

/// Aggregate records into a rollup bucket.
///
/// Returns the bucket and the number of records skipped because their
/// timestamp failed to parse under a time-bucketed scope. `Scope::All`
/// skips nothing: a record with a broken timestamp still counts toward
/// all-time totals.
pub fn aggregate(scope: Scope, records: &[WorkoutRecord]) -> (RollupBucket, usize) {
    let mut in_bucket: Vec<&WorkoutRecord> = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for record in records {
        match scope {
            Scope::All => in_bucket.push(record),
            _ => match parse_timestamp(&record.timestamp) {
                Some(dt) if in_scope(scope, dt) => in_bucket.push(record),
                Some(_) => {} // outside the requested window, not an anomaly
                None => skipped += 1,
            },
        }
    }

    if in_bucket.is_empty() {
        return (RollupBucket::empty(scope), skipped);
    }

    let (gain, loss) = metrics::elevation_totals(in_bucket.iter().copied());

    let bucket = RollupBucket {
        scope,
        count: in_bucket.len() as u64,
        total_distance_cm: in_bucket.iter().map(|r| r.distance_cm).sum(),
        total_duration_sec: in_bucket.iter().map(|r| r.duration_sec).sum(),
        total_steps: metrics::total_steps(in_bucket.iter().copied()),
        avg_hr: metrics::mean_avg_hr(in_bucket.iter().copied()),
        max_hr: metrics::max_max_hr(in_bucket.iter().copied()),
        total_elevation_gain: gain,
        total_elevation_loss: loss,
        has_elevation: metrics::has_elevation(gain, loss),
        comparison: None,
    };
    (bucket, skipped)
}

/// Bucket a year's records into per-month entries, newest month first.
pub fn month_entries(records: &[WorkoutRecord]) -> Vec<MonthEntry> {
    let mut by_month: std::collections::BTreeMap<u32, (u64, u64)> =
        std::collections::BTreeMap::new();
    for record in records {
        if let Some(dt) = parse_timestamp(&record.timestamp) {
            let entry = by_month.entry(dt.month()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += record.distance_cm;
        }
    }
    by_month
        .into_iter()
        .rev()
        .map(|(month, (count, distance_cm))| MonthEntry {
            month,
            count,
            distance_km: round1(to_kilometers(distance_cm)),
        })
        .collect()
}

/// Month-over-month comparison.
///
/// `None` when the previous month has no workouts or no distance.
pub fn compare_months(current: &RollupBucket, previous: &RollupBucket) -> Option<MonthComparison> {
    let prev_km = to_kilometers(previous.total_distance_cm);
    if previous.count == 0 || prev_km <= 0.0 {
        return None;
    }
    let curr_km = to_kilometers(current.total_distance_cm);
    Some(MonthComparison {
        distance_change_percent: round1(((curr_km - prev_km) / prev_km) * 100.0),
        workouts_change: current.count as i64 - previous.count as i64,
    })
}

/// The calendar month preceding `(year, month)`.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The calendar month following `(year, month)`.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Half-open `[start, end)` timestamp bounds for one calendar month.
///
/// Bounds are sortable ISO strings matching the stored format, so a record
/// at `YYYY-MM-01T00:00:00` lands in that month and never the one before.
pub fn month_range(year: i32, month: u32) -> (String, String) {
    let (ny, nm) = next_month(year, month);
    (
        format!("{:04}-{:02}-01T00:00:00", year, month),
        format!("{:04}-{:02}-01T00:00:00", ny, nm),
    )
}

/// Half-open `[start, end)` timestamp bounds for one calendar year.
pub fn year_range(year: i32) -> (String, String) {
    (
        format!("{:04}-01-01T00:00:00", year),
        format!("{:04}-01-01T00:00:00", year + 1),
    )
}

/// Sort newest-first, ties broken by id so ordering is deterministic.
pub fn sort_newest_first(records: &mut [WorkoutRecord]) {
    records.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
}
