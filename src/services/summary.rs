// SPDX-License-Identifier: MIT

//! Summary service: retrieval plus rollup for each scope.
//!
//! Owns the only coupling between the storage layer and the pure rollup
//! engine. Retrieval failures propagate unchanged; a scope with no records
//! yields a zero bucket, never an error.

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{MonthEntry, RollupBucket, Scope, WorkoutRecord};
use crate::rollup;

/// Computes rollup buckets for a user's workout history.
#[derive(Clone)]
pub struct SummaryService {
    db: FirestoreDb,
}

impl SummaryService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// All-time rollup across every stored workout for the user.
    pub async fn all_time(&self, user_id: &str) -> Result<RollupBucket> {
        let records = self.db.fetch_by_user(user_id).await?;
        let (bucket, skipped) = rollup::aggregate(Scope::All, &records);
        log_skipped(user_id, Scope::All, skipped);
        Ok(bucket)
    }

    /// Year rollup plus per-month entries for sub-navigation.
    pub async fn yearly(&self, user_id: &str, year: i32) -> Result<(RollupBucket, Vec<MonthEntry>)> {
        let (start, end) = rollup::year_range(year);
        let records = self.db.fetch_by_user_and_range(user_id, &start, &end).await?;
        let (bucket, skipped) = rollup::aggregate(Scope::Year(year), &records);
        log_skipped(user_id, Scope::Year(year), skipped);
        Ok((bucket, rollup::month_entries(&records)))
    }

    /// Month rollup with month-over-month comparison, plus the month's
    /// records newest-first (ties broken by id) for the summary page list.
    ///
    /// The previous calendar month is fetched with a second range query;
    /// January's predecessor is December of the prior year.
    pub async fn monthly(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<(RollupBucket, Vec<WorkoutRecord>)> {
        validate_month(month)?;

        let (start, end) = rollup::month_range(year, month);
        let mut records = self.db.fetch_by_user_and_range(user_id, &start, &end).await?;
        rollup::sort_newest_first(&mut records);
        let (mut bucket, skipped) = rollup::aggregate(Scope::Month(year, month), &records);
        log_skipped(user_id, Scope::Month(year, month), skipped);

        let (prev_year, prev_month) = rollup::previous_month(year, month);
        let (prev_start, prev_end) = rollup::month_range(prev_year, prev_month);
        let prev_records = self
            .db
            .fetch_by_user_and_range(user_id, &prev_start, &prev_end)
            .await?;
        let (prev_bucket, prev_skipped) =
            rollup::aggregate(Scope::Month(prev_year, prev_month), &prev_records);
        log_skipped(user_id, Scope::Month(prev_year, prev_month), prev_skipped);

        bucket.comparison = rollup::compare_months(&bucket, &prev_bucket);
        Ok((bucket, records))
    }
}

/// Months outside 1-12 are a caller error, rejected before any retrieval.
pub fn validate_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "month must be between 1 and 12, got {}",
            month
        )))
    }
}

/// Records with unparseable timestamps are excluded from time buckets but
/// never silently: the count surfaces in the logs.
fn log_skipped(user_id: &str, scope: Scope, skipped: usize) {
    if skipped > 0 {
        tracing::warn!(
            user_id,
            ?scope,
            skipped,
            "Workouts excluded from rollup (unparseable timestamp)"
        );
    }
}
