// SPDX-License-Identifier: MIT

//! Derived per-workout and per-bucket metrics.
//!
//! Heart-rate statistics follow a strict presence policy: a record with no
//! `avg_hr`/`max_hr` is excluded from both numerator and denominator, so a
//! missing value can never drag an average toward zero.

use crate::models::WorkoutRecord;

/// Sentinel pace shown when distance is zero.
pub const PACE_UNAVAILABLE: &str = "--:--";

/// Format average pace as `M:SS` per km.
///
/// Zero distance yields the unavailable sentinel, never a division error.
pub fn format_pace(distance_km: f64, duration_sec: u64) -> String {
    if distance_km <= 0.0 {
        return PACE_UNAVAILABLE.to_string();
    }
    let pace_sec_per_km = duration_sec as f64 / distance_km;
    let minutes = (pace_sec_per_km / 60.0).floor() as u64;
    let seconds = (pace_sec_per_km % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, seconds)
}

/// Mean of present `avg_hr` values, rounded to the nearest integer.
///
/// `None` when no record carries one.
pub fn mean_avg_hr<'a, I>(records: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    let mut sum: u64 = 0;
    let mut present: u64 = 0;
    for record in records {
        if let Some(hr) = record.avg_hr {
            sum += hr as u64;
            present += 1;
        }
    }
    if present == 0 {
        return None;
    }
    Some((sum as f64 / present as f64).round() as u32)
}

/// Maximum of present `max_hr` values.
pub fn max_max_hr<'a, I>(records: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    records.into_iter().filter_map(|r| r.max_hr).max()
}

/// Total elevation gain and loss in meters; missing values contribute 0.
pub fn elevation_totals<'a, I>(records: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    let mut gain = 0.0;
    let mut loss = 0.0;
    for record in records {
        gain += record.elevation_gain.unwrap_or(0.0);
        loss += record.elevation_loss.unwrap_or(0.0);
    }
    (gain, loss)
}

/// Whether any elevation data exists (display flag for the presenter).
pub fn has_elevation(gain: f64, loss: f64) -> bool {
    gain > 0.0 || loss > 0.0
}

/// Total steps; missing values contribute 0.
pub fn total_steps<'a, I>(records: I) -> u64
where
    I: IntoIterator<Item = &'a WorkoutRecord>,
{
    records.into_iter().filter_map(|r| r.steps).sum()
}
