// SPDX-License-Identifier: MIT

//! WhatsApp deep-link construction for shareable summaries.

use crate::i18n;
use crate::metrics;
use crate::models::{RollupBucket, WorkoutRecord};
use crate::units::{format_duration, round1, round2, to_kilometers};

/// Deep link opening WhatsApp with pre-filled text.
pub fn whatsapp_link(text: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(text))
}

/// Public page URL for a user's latest-workout summary.
pub fn workout_page_url(base_url: &str, user_id: &str) -> String {
    format!("{}/u/{}/workout", base_url, user_id)
}

/// Public page URL for a monthly summary.
pub fn monthly_page_url(base_url: &str, user_id: &str, year: i32, month: u32) -> String {
    format!("{}/u/{}/monthly?year={}&month={}", base_url, user_id, year, month)
}

/// Share text for a single workout.
pub fn workout_share_text(record: &WorkoutRecord, page_url: &str) -> String {
    let distance_km = round2(to_kilometers(record.distance_cm));
    let pace = metrics::format_pace(to_kilometers(record.distance_cm), record.duration_sec);

    let mut text = format!(
        "🏃 {}\n📍 {} km\n⏱️ {}\n⚡ {} /km",
        i18n::finished_workout(record.lang),
        distance_km,
        format_duration(record.duration_sec),
        pace,
    );
    if let Some(hr) = record.avg_hr {
        text.push_str(&format!("\n❤️ {} BPM", hr));
    }
    text.push_str(&format!("\n\n🔗 {}", page_url));
    text
}

/// Share text for a monthly rollup.
pub fn monthly_share_text(bucket: &RollupBucket, lang: u8, month_name: &str, year: i32, page_url: &str) -> String {
    let distance_km = round1(to_kilometers(bucket.total_distance_cm));

    let mut text = format!(
        "📅 {} - {} {}\n🏃 {}\n📍 {} km",
        i18n::monthly_summary(lang),
        month_name,
        year,
        bucket.count,
        distance_km,
    );
    if let Some(hr) = bucket.avg_hr {
        text.push_str(&format!("\n❤️ {} BPM", hr));
    }
    if let Some(cmp) = bucket.comparison {
        let sign = if cmp.distance_change_percent >= 0.0 { "+" } else { "" };
        text.push_str(&format!("\n📈 {}{}%", sign, cmp.distance_change_percent));
    }
    text.push_str(&format!("\n\n🔗 {}", page_url));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthComparison, Scope};

    fn record() -> WorkoutRecord {
        WorkoutRecord {
            id: "w1".to_string(),
            user_id: "u1".to_string(),
            distance_cm: 500_000,
            duration_sec: 1800,
            avg_hr: Some(140),
            max_hr: None,
            elevation_gain: None,
            elevation_loss: None,
            steps: None,
            cadence: None,
            timestamp: "2026-01-15T07:30:00".to_string(),
            lang: 0,
        }
    }

    #[test]
    fn test_whatsapp_link_encodes_text() {
        let link = whatsapp_link("5 km & done");
        assert!(link.starts_with("https://wa.me/?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('&'));
    }

    #[test]
    fn test_workout_share_text_contents() {
        let text = workout_share_text(&record(), "https://fitbeat.example/u/u1/workout");
        assert!(text.contains("5 km"));
        assert!(text.contains("30:00"));
        assert!(text.contains("6:00 /km"));
        assert!(text.contains("140 BPM"));
        assert!(text.contains("https://fitbeat.example/u/u1/workout"));
    }

    #[test]
    fn test_workout_share_text_omits_missing_hr() {
        let mut r = record();
        r.avg_hr = None;
        let text = workout_share_text(&r, "url");
        assert!(!text.contains("BPM"));
    }

    #[test]
    fn test_monthly_share_text_with_comparison() {
        let mut bucket = RollupBucket::empty(Scope::Month(2026, 2));
        bucket.count = 3;
        bucket.total_distance_cm = 1_000_000;
        bucket.comparison = Some(MonthComparison {
            distance_change_percent: 25.0,
            workouts_change: -1,
        });
        let text = monthly_share_text(&bucket, 0, "February", 2026, "url");
        assert!(text.contains("February 2026"));
        assert!(text.contains("+25%"));
    }

    #[test]
    fn test_page_urls() {
        assert_eq!(
            workout_page_url("https://fitbeat.example", "abc"),
            "https://fitbeat.example/u/abc/workout"
        );
        assert_eq!(
            monthly_page_url("https://fitbeat.example", "abc", 2026, 2),
            "https://fitbeat.example/u/abc/monthly?year=2026&month=2"
        );
    }
}
