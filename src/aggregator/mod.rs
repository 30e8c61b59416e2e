//! Aggregation of test log records into per-package and per-test results.
//!
//! This module turns decoded log lines into:
//! - A last-wins store keyed by package and by test identity
//! - Duration rankings for packages and tests

pub mod ingest;
pub mod ranking;
pub mod store;

// Re-export main types and functions
pub use ingest::{stats_from_files, IngestSummary};
pub use ranking::{packages_by_duration, tests_by_duration};
pub use store::{elapsed_to_duration, test_key, PackageRecord, StatsStore, TestRecord};
