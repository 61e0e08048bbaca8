// SPDX-License-Identifier: MIT

//! Rollup bucket types: derived aggregates, never persisted.

use serde::Serialize;

/// Time window a rollup is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Scope {
    All,
    Year(i32),
    Month(i32, u32),
}

/// Month-over-month delta for a monthly rollup.
///
/// Absent when the preceding calendar month has zero workouts or zero
/// distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthComparison {
    /// Percent change in distance vs. previous month, 1 decimal place
    pub distance_change_percent: f64,
    /// Signed workout-count delta vs. previous month
    pub workouts_change: i64,
}

/// Per-month summary line for a year's sub-navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthEntry {
    pub month: u32,
    pub count: u64,
    /// Total distance for the month, km, 1 decimal place
    pub distance_km: f64,
}

/// Aggregated statistics for one scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupBucket {
    pub scope: Scope,
    pub count: u64,
    pub total_distance_cm: u64,
    pub total_duration_sec: u64,
    pub total_steps: u64,
    /// Mean of present per-workout averages, nearest integer; `None` when
    /// no record in scope carries one
    pub avg_hr: Option<u32>,
    /// Max of present per-workout maxima; same presence policy
    pub max_hr: Option<u32>,
    pub total_elevation_gain: f64,
    pub total_elevation_loss: f64,
    /// Whether any elevation data exists in scope (presenter display flag)
    pub has_elevation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<MonthComparison>,
}

impl RollupBucket {
    /// Zero/neutral bucket for a scope with no matching records.
    pub fn empty(scope: Scope) -> Self {
        Self {
            scope,
            count: 0,
            total_distance_cm: 0,
            total_duration_sec: 0,
            total_steps: 0,
            avg_hr: None,
            max_hr: None,
            total_elevation_gain: 0.0,
            total_elevation_loss: 0.0,
            has_elevation: false,
            comparison: None,
        }
    }
}
