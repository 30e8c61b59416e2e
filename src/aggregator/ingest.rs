//! Feed log files into a fresh store.

use super::store::StatsStore;
use crate::parser::read_event_file;
use crate::utils::error::IngestError;
use log::{debug, info};
use std::path::Path;

/// Counters gathered while reading inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub files: usize,
    pub lines: usize,
    pub dropped: usize,
    pub applied: usize,
}

impl IngestSummary {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Files: {} | Records: {} | Untimed: {} | Applied: {}",
            self.files, self.lines, self.dropped, self.applied
        )
    }
}

/// Build a store from log files
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `files` - Log files, applied in the given order so later files win
///
/// # Returns
/// The populated store and read counters
///
/// # Errors
/// The first open, read or decode failure. Nothing read before it is
/// returned.
pub fn stats_from_files<P: AsRef<Path>>(
    files: &[P],
) -> Result<(StatsStore, IngestSummary), IngestError> {
    let mut store = StatsStore::new();
    let mut summary = IngestSummary::default();

    for path in files {
        let path = path.as_ref();
        info!("Reading {}", path.display());

        let read = read_event_file(path)?;

        summary.files += 1;
        summary.lines += read.lines;
        summary.dropped += read.dropped;
        summary.applied += read.events.len();

        store.apply_all(&read.events);
    }

    debug!(
        "Aggregated {} packages and {} tests",
        store.package_count(),
        store.test_count()
    );

    Ok((store, summary))
}
