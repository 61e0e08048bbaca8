// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod rollup;
pub mod workout;

pub use rollup::{MonthComparison, MonthEntry, RollupBucket, Scope};
pub use workout::{WorkoutRecord, WorkoutSubmission};
