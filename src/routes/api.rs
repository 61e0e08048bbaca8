// SPDX-License-Identifier: MIT

//! API routes: ingestion, summaries, deletion.

use crate::error::{AppError, Result};
use crate::models::{MonthComparison, MonthEntry, RollupBucket, WorkoutRecord, WorkoutSubmission};
use crate::services::{ingest, share};
use crate::units::{format_duration, round1, round2, to_kilometers};
use crate::{i18n, metrics, AppState};
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workout", post(create_workout))
        .route("/api/workout/latest/{user_id}", get(get_latest_workout))
        .route("/api/workout/{id}", delete(delete_workout))
        .route("/api/user/{user_id}/stats", get(get_all_time_stats))
        .route("/api/user/{user_id}/yearly", get(get_yearly_stats))
        .route("/api/user/{user_id}/monthly", get(get_monthly_stats))
        .route("/api/user/{user_id}/workouts", delete(delete_all_workouts))
}

// ─── Ingestion ───────────────────────────────────────────────

/// Response after storing a workout.
#[derive(Serialize)]
pub struct WorkoutCreatedResponse {
    pub id: String,
    pub user_id: String,
    pub timestamp: String,
}

/// Ingest a workout submission from the watch.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<WorkoutSubmission>,
) -> Result<Json<WorkoutCreatedResponse>> {
    let record = ingest::build_record(&submission, chrono::Utc::now().naive_utc())?;
    state.db.insert_workout(&record).await?;

    tracing::info!(
        user_id = %record.user_id,
        workout_id = %record.id,
        "Workout stored"
    );

    Ok(Json(WorkoutCreatedResponse {
        id: record.id,
        user_id: record.user_id,
        timestamp: record.timestamp,
    }))
}

// ─── Single Workout ──────────────────────────────────────────

/// Latest workout with derived display fields.
#[derive(Serialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub user_id: String,
    pub timestamp: String,
    /// Distance in km, 2 decimal places
    pub distance_km: f64,
    pub duration: String,
    /// `M:SS` per km, or `--:--` for zero distance
    pub pace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<u64>,
    pub share_url: String,
}

fn workout_response(record: WorkoutRecord, base_url: &str) -> WorkoutResponse {
    let distance_km = to_kilometers(record.distance_cm);
    let page_url = share::workout_page_url(base_url, &record.user_id);
    let share_url = share::whatsapp_link(&share::workout_share_text(&record, &page_url));

    WorkoutResponse {
        id: record.id,
        user_id: record.user_id,
        timestamp: record.timestamp,
        distance_km: round2(distance_km),
        duration: format_duration(record.duration_sec),
        pace: metrics::format_pace(distance_km, record.duration_sec),
        avg_hr: record.avg_hr,
        max_hr: record.max_hr,
        elevation_gain: record.elevation_gain,
        elevation_loss: record.elevation_loss,
        steps: record.steps,
        cadence: record.cadence,
        share_url,
    }
}

/// Get the most recent workout for a user.
async fn get_latest_workout(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<WorkoutResponse>> {
    let record = state
        .db
        .latest_for_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No workouts for user {}", user_id)))?;

    Ok(Json(workout_response(record, &state.config.base_url)))
}

// ─── Rollups ─────────────────────────────────────────────────

/// Bucket totals shared by all rollup responses.
#[derive(Serialize)]
pub struct BucketTotals {
    pub total_workouts: u64,
    /// Km, 1 decimal place
    pub total_distance_km: f64,
    /// Minutes, 1 decimal place
    pub total_duration_min: f64,
    pub total_steps: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<u32>,
    pub total_elevation_gain: f64,
    pub total_elevation_loss: f64,
    pub has_elevation: bool,
}

impl From<&RollupBucket> for BucketTotals {
    fn from(bucket: &RollupBucket) -> Self {
        Self {
            total_workouts: bucket.count,
            total_distance_km: round1(to_kilometers(bucket.total_distance_cm)),
            total_duration_min: round1(bucket.total_duration_sec as f64 / 60.0),
            total_steps: bucket.total_steps,
            avg_hr: bucket.avg_hr,
            max_hr: bucket.max_hr,
            total_elevation_gain: round1(bucket.total_elevation_gain),
            total_elevation_loss: round1(bucket.total_elevation_loss),
            has_elevation: bucket.has_elevation,
        }
    }
}

/// All-time rollup response.
#[derive(Serialize)]
pub struct AllTimeResponse {
    pub user_id: String,
    #[serde(flatten)]
    pub totals: BucketTotals,
}

/// Get all-time stats for a user.
async fn get_all_time_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<AllTimeResponse>> {
    let bucket = state.summary.all_time(&user_id).await?;
    Ok(Json(AllTimeResponse {
        user_id,
        totals: BucketTotals::from(&bucket),
    }))
}

#[derive(Deserialize)]
struct YearlyQuery {
    /// Defaults to the current UTC year
    year: Option<i32>,
}

/// Yearly rollup response with per-month sub-navigation.
#[derive(Serialize)]
pub struct YearlyResponse {
    pub user_id: String,
    pub year: i32,
    #[serde(flatten)]
    pub totals: BucketTotals,
    pub months: Vec<MonthEntry>,
}

/// Get one calendar year's stats, grouped by month.
async fn get_yearly_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<YearlyQuery>,
) -> Result<Json<YearlyResponse>> {
    let year = query.year.unwrap_or_else(|| chrono::Utc::now().year());
    let (bucket, months) = state.summary.yearly(&user_id, year).await?;

    Ok(Json(YearlyResponse {
        user_id,
        year,
        totals: BucketTotals::from(&bucket),
        months,
    }))
}

#[derive(Deserialize)]
struct MonthlyQuery {
    /// Defaults to the current UTC year
    year: Option<i32>,
    /// Defaults to the current UTC month
    month: Option<u32>,
    /// Language for the localized month name
    #[serde(default)]
    lang: u8,
}

/// One line of the monthly workout list, newest first.
#[derive(Serialize)]
pub struct WorkoutListItem {
    pub id: String,
    pub timestamp: String,
    /// Km, 2 decimal places
    pub distance_km: f64,
    pub duration: String,
    pub pace: String,
}

impl From<&WorkoutRecord> for WorkoutListItem {
    fn from(record: &WorkoutRecord) -> Self {
        let distance_km = to_kilometers(record.distance_cm);
        Self {
            id: record.id.clone(),
            timestamp: record.timestamp.clone(),
            distance_km: round2(distance_km),
            duration: format_duration(record.duration_sec),
            pace: metrics::format_pace(distance_km, record.duration_sec),
        }
    }
}

/// Monthly rollup response with comparison and share link.
#[derive(Serialize)]
pub struct MonthlyResponse {
    pub user_id: String,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    #[serde(flatten)]
    pub totals: BucketTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<MonthComparison>,
    pub workouts: Vec<WorkoutListItem>,
    pub share_url: String,
}

/// Get one calendar month's stats with month-over-month comparison.
async fn get_monthly_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<MonthlyQuery>,
) -> Result<Json<MonthlyResponse>> {
    let now = chrono::Utc::now();
    let year = query.year.unwrap_or_else(|| now.year());
    let month = query.month.unwrap_or_else(|| now.month());

    let (bucket, records) = state.summary.monthly(&user_id, year, month).await?;

    let month_name = i18n::month_name(query.lang, month);
    let page_url = share::monthly_page_url(&state.config.base_url, &user_id, year, month);
    let share_url = share::whatsapp_link(&share::monthly_share_text(
        &bucket,
        query.lang,
        &month_name,
        year,
        &page_url,
    ));

    Ok(Json(MonthlyResponse {
        user_id,
        year,
        month,
        month_name,
        totals: BucketTotals::from(&bucket),
        comparison: bucket.comparison,
        workouts: records.iter().map(WorkoutListItem::from).collect(),
        share_url,
    }))
}

// ─── Deletion ────────────────────────────────────────────────

#[derive(Deserialize)]
struct DeleteWorkoutQuery {
    user_id: String,
}

/// Response for a single-workout deletion.
#[derive(Serialize)]
pub struct DeleteWorkoutResponse {
    pub deleted: bool,
}

/// Delete one workout. Clients model edits as delete + reinsert.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<DeleteWorkoutQuery>,
) -> Result<Json<DeleteWorkoutResponse>> {
    let deleted = state.db.delete_workout(&id, &query.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Workout {} not found", id)));
    }
    Ok(Json(DeleteWorkoutResponse { deleted }))
}

/// Response for a bulk deletion.
#[derive(Serialize)]
pub struct DeleteAllResponse {
    pub deleted_count: usize,
}

/// Delete all workouts for a user.
async fn delete_all_workouts(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteAllResponse>> {
    tracing::info!(user_id = %user_id, "User-initiated bulk deletion");
    let deleted_count = state.db.delete_all_for_user(&user_id).await?;
    Ok(Json(DeleteAllResponse { deleted_count }))
}
