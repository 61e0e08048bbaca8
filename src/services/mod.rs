// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod identity;
pub mod ingest;
pub mod share;
pub mod summary;

pub use summary::SummaryService;
