// SPDX-License-Identifier: MIT

//! Workout record model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored workout record.
///
/// Immutable once created; clients model edits as delete + reinsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Opaque unique id (also used as document ID)
    pub id: String,
    /// Owning user (derived from device id, see services::identity)
    pub user_id: String,
    /// Total distance in centimeters
    pub distance_cm: u64,
    /// Total elapsed seconds
    pub duration_sec: u64,
    /// Average heart rate (BPM); `None` when not recorded
    #[serde(default)]
    pub avg_hr: Option<u32>,
    /// Maximum heart rate (BPM); `None` when not recorded
    #[serde(default)]
    pub max_hr: Option<u32>,
    /// Elevation gain in meters
    #[serde(default)]
    pub elevation_gain: Option<f64>,
    /// Elevation loss in meters
    #[serde(default)]
    pub elevation_loss: Option<f64>,
    /// Step count
    #[serde(default)]
    pub steps: Option<u64>,
    /// Average cadence (steps/min)
    #[serde(default)]
    pub cadence: Option<u64>,
    /// Workout occurrence instant, ISO 8601 (`YYYY-MM-DDTHH:MM:SS`).
    /// Assigned once at ingestion, sortable lexicographically.
    pub timestamp: String,
    /// Language preference index captured at submission time
    #[serde(default)]
    pub lang: u8,
}

/// Ingestion payload submitted by the watch/companion app.
///
/// The client may supply a local-time `timestamp`; the ingestion adapter
/// falls back to server receipt time when it does not parse.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutSubmission {
    #[validate(length(min = 1, max = 128))]
    pub device_id: String,
    pub distance_cm: u64,
    pub duration_sec: u64,
    /// Non-positive values mean "not recorded" and are normalized to `None`
    #[validate(range(max = 250))]
    pub avg_hr: Option<i64>,
    #[validate(range(max = 250))]
    pub max_hr: Option<i64>,
    pub elevation_gain: Option<f64>,
    pub elevation_loss: Option<f64>,
    pub steps: Option<u64>,
    pub cadence: Option<u64>,
    /// Client-local workout time (ISO 8601), preferred over server time
    pub timestamp: Option<String>,
    #[serde(default)]
    #[validate(range(max = 5))]
    pub lang: u8,
}
