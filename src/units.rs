// SPDX-License-Identifier: MIT

//! Unit conversions and display formatting for stored workout fields.
//!
//! Distances are stored in centimeters and durations in seconds; everything
//! user-facing goes through these helpers so rounding stays consistent
//! across the single-workout and rollup pages.

/// Centimeters per kilometer.
const CM_PER_KM: f64 = 100_000.0;

/// Convert a stored distance (cm) to kilometers.
pub fn to_kilometers(distance_cm: u64) -> f64 {
    distance_cm as f64 / CM_PER_KM
}

/// Split a duration into (hours, minutes, seconds).
pub fn duration_parts(duration_sec: u64) -> (u64, u64, u64) {
    (
        duration_sec / 3600,
        (duration_sec % 3600) / 60,
        duration_sec % 60,
    )
}

/// Format a duration as `H:MM:SS`, or `M:SS` when under an hour.
pub fn format_duration(duration_sec: u64) -> String {
    let (hours, minutes, seconds) = duration_parts(duration_sec);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Round to 1 decimal place (bucket totals, percent deltas).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (single-workout distance).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kilometers() {
        assert_eq!(to_kilometers(0), 0.0);
        assert_eq!(to_kilometers(100_000), 1.0);
        assert_eq!(to_kilometers(500_000), 5.0);
        assert_eq!(to_kilometers(123_456), 1.23456);
    }

    #[test]
    fn test_duration_parts() {
        assert_eq!(duration_parts(0), (0, 0, 0));
        assert_eq!(duration_parts(59), (0, 0, 59));
        assert_eq!(duration_parts(60), (0, 1, 0));
        assert_eq!(duration_parts(3599), (0, 59, 59));
        assert_eq!(duration_parts(3600), (1, 0, 0));
        assert_eq!(duration_parts(7325), (2, 2, 5));
    }

    #[test]
    fn test_format_duration_under_an_hour() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(1800), "30:00");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn test_format_duration_with_hours() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(36_125), "10:02:05");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round1(8.04), 8.0);
        assert_eq!(round1(8.26), 8.3);
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(9.999), 10.0);
    }
}
