// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed workout operations.
//!
//! The rollup engine never talks to Firestore directly; it consumes the
//! record slices these queries return. All queries order by `timestamp`
//! descending so callers see newest workouts first, and range queries use
//! half-open `[start, end)` bounds on the sortable ISO timestamp strings.

use crate::db::collections;
use crate::error::AppError;
use crate::models::WorkoutRecord;
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// Store a workout record.
    pub async fn insert_workout(&self, record: &WorkoutRecord) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::WORKOUTS)
            .document_id(&record.id)
            .object(record)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get a workout by id.
    pub async fn get_workout(&self, id: &str) -> Result<Option<WorkoutRecord>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::WORKOUTS)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the most recent workout for a user.
    pub async fn latest_for_user(&self, user_id: &str) -> Result<Option<WorkoutRecord>, AppError> {
        let user_id = user_id.to_string();
        let results: Vec<WorkoutRecord> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::WORKOUTS)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.clone())]))
            .order_by([("timestamp", firestore::FirestoreQueryDirection::Descending)])
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(results.into_iter().next())
    }

    /// Get all workouts for a user, newest first.
    pub async fn fetch_by_user(&self, user_id: &str) -> Result<Vec<WorkoutRecord>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::WORKOUTS)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.clone())]))
            .order_by([("timestamp", firestore::FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a user's workouts in the half-open range `[start, end)`, newest first.
    ///
    /// Bounds are sortable ISO timestamp strings produced by
    /// `rollup::month_range` / `rollup::year_range`.
    pub async fn fetch_by_user_and_range(
        &self,
        user_id: &str,
        start_inclusive: &str,
        end_exclusive: &str,
    ) -> Result<Vec<WorkoutRecord>, AppError> {
        let user_id = user_id.to_string();
        let start = start_inclusive.to_string();
        let end = end_exclusive.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::WORKOUTS)
            .filter(move |q| {
                q.for_all([
                    q.field("user_id").eq(user_id.clone()),
                    q.field("timestamp").greater_than_or_equal(start.clone()),
                    q.field("timestamp").less_than(end.clone()),
                ])
            })
            .order_by([("timestamp", firestore::FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a single workout, verifying ownership first.
    ///
    /// Returns `true` if a record was deleted, `false` if no record matched
    /// the `(id, user_id)` pair.
    pub async fn delete_workout(&self, id: &str, user_id: &str) -> Result<bool, AppError> {
        match self.get_workout(id).await? {
            Some(record) if record.user_id == user_id => {}
            _ => return Ok(false),
        }

        self.get_client()?
            .fluent()
            .delete()
            .from(collections::WORKOUTS)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(true)
    }

    /// Delete all workouts for a user.
    ///
    /// Uses concurrent deletes with a limit to avoid overloading Firestore.
    /// Returns the number of documents deleted.
    pub async fn delete_all_for_user(&self, user_id: &str) -> Result<usize, AppError> {
        let records = self.fetch_by_user(user_id).await?;
        let client = self.get_client()?;
        let count = records.len();

        stream::iter(records)
            .map(|record| async move {
                client
                    .fluent()
                    .delete()
                    .from(collections::WORKOUTS)
                    .document_id(&record.id)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok::<_, AppError>(())
            })
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .collect::<Vec<Result<(), AppError>>>()
            .await
            .into_iter()
            .collect::<Result<Vec<()>, AppError>>()?;

        tracing::info!(user_id, deleted_count = count, "User workouts deleted");

        Ok(count)
    }
}
