// SPDX-License-Identifier: MIT

//! Ingestion adapter: turns a watch submission into a stored record.
//!
//! Timestamp resolution is a two-step policy: the client-supplied local
//! time wins when it parses; otherwise the server receipt time is used and
//! the fallback is logged. Heart-rate values that are zero or negative are
//! normalized to "not recorded" before storage so rollups never have to
//! re-interpret them.

use chrono::NaiveDateTime;
use sha2::{Digest, Sha256};
use validator::Validate;

use crate::error::Result;
use crate::models::{WorkoutRecord, WorkoutSubmission};
use crate::rollup::parse_timestamp;
use crate::services::identity;

/// Stored timestamp format, sortable lexicographically.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Build a workout record from a submission.
///
/// `received_at` is the server receipt time, passed in by the handler so
/// the adapter stays deterministic under test.
pub fn build_record(
    submission: &WorkoutSubmission,
    received_at: NaiveDateTime,
) -> Result<WorkoutRecord> {
    submission.validate()?;

    let user_id = identity::user_id_for_device(&submission.device_id);
    let timestamp = resolve_timestamp(submission.timestamp.as_deref(), received_at);
    let id = assign_id(&user_id, &timestamp, received_at);

    Ok(WorkoutRecord {
        id,
        user_id,
        distance_cm: submission.distance_cm,
        duration_sec: submission.duration_sec,
        avg_hr: normalize_hr(submission.avg_hr),
        max_hr: normalize_hr(submission.max_hr),
        elevation_gain: submission.elevation_gain,
        elevation_loss: submission.elevation_loss,
        steps: submission.steps,
        cadence: submission.cadence,
        timestamp,
        lang: submission.lang,
    })
}

/// Prefer the client-local time; fall back to server receipt time.
fn resolve_timestamp(client_time: Option<&str>, received_at: NaiveDateTime) -> String {
    match client_time.and_then(parse_timestamp) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => {
            if let Some(raw) = client_time {
                tracing::warn!(
                    client_timestamp = raw,
                    "Client timestamp did not parse, using server receipt time"
                );
            }
            received_at.format(TIMESTAMP_FORMAT).to_string()
        }
    }
}

/// Zero or negative heart-rate means "not recorded".
fn normalize_hr(value: Option<i64>) -> Option<u32> {
    value.filter(|&v| v > 0).map(|v| v as u32)
}

/// Assign an opaque record id.
///
/// Hash of owner, workout time, and receipt nanos; unique in practice since
/// a single device cannot submit twice in the same nanosecond.
fn assign_id(user_id: &str, timestamp: &str, received_at: NaiveDateTime) -> String {
    let nanos = received_at.and_utc().timestamp_nanos_opt().unwrap_or(0);
    let digest = Sha256::digest(format!("{}:{}:{}", user_id, timestamp, nanos).as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(32);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn submission(timestamp: Option<&str>) -> WorkoutSubmission {
        WorkoutSubmission {
            device_id: "garmin-12345".to_string(),
            distance_cm: 500_000,
            duration_sec: 1800,
            avg_hr: Some(140),
            max_hr: Some(0),
            elevation_gain: Some(50.0),
            elevation_loss: None,
            steps: Some(6000),
            cadence: None,
            timestamp: timestamp.map(String::from),
            lang: 1,
        }
    }

    fn received_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_client_timestamp_preferred() {
        let record = build_record(&submission(Some("2026-03-01T18:30:00")), received_at())
            .expect("valid submission");
        assert_eq!(record.timestamp, "2026-03-01T18:30:00");
    }

    #[test]
    fn test_unparseable_timestamp_falls_back_to_server_time() {
        let record =
            build_record(&submission(Some("last tuesday")), received_at()).expect("valid");
        assert_eq!(record.timestamp, "2026-03-02T10:15:00");
    }

    #[test]
    fn test_missing_timestamp_uses_server_time() {
        let record = build_record(&submission(None), received_at()).expect("valid");
        assert_eq!(record.timestamp, "2026-03-02T10:15:00");
    }

    #[test]
    fn test_non_positive_hr_normalized_to_none() {
        let record = build_record(&submission(None), received_at()).expect("valid");
        assert_eq!(record.avg_hr, Some(140));
        // max_hr submitted as 0 means "not recorded"
        assert_eq!(record.max_hr, None);
    }

    #[test]
    fn test_user_id_derived_from_device() {
        let record = build_record(&submission(None), received_at()).expect("valid");
        assert_eq!(
            record.user_id,
            identity::user_id_for_device("garmin-12345")
        );
    }

    #[test]
    fn test_empty_device_id_rejected() {
        let mut sub = submission(None);
        sub.device_id = String::new();
        assert!(build_record(&sub, received_at()).is_err());
    }

    #[test]
    fn test_absurd_hr_rejected() {
        let mut sub = submission(None);
        sub.avg_hr = Some(400);
        assert!(build_record(&sub, received_at()).is_err());
    }
}
