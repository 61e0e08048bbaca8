// SPDX-License-Identifier: MIT

//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    /// Workout records (keyed by workout id)
    pub const WORKOUTS: &str = "workouts";
}
