// SPDX-License-Identifier: MIT

//! FitBeat: workout recording and shareable summary backend
//!
//! This crate provides the backend API for recording GPS-watch workout
//! sessions and serving hierarchical summaries (all-time, year, month,
//! single workout) through shareable links.

pub mod config;
pub mod db;
pub mod error;
pub mod i18n;
pub mod metrics;
pub mod models;
pub mod rollup;
pub mod routes;
pub mod services;
pub mod units;

use config::Config;
use db::FirestoreDb;
use services::SummaryService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub summary: SummaryService,
}
