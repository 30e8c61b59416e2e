//! Duration rankings over a populated store.
//!
//! Both rankings sort by duration descending. Equal durations fall back to
//! identity ascending so repeated runs print identical reports.

use super::store::{PackageRecord, StatsStore, TestRecord};
use log::debug;
use std::cmp::Ordering;

/// All packages, slowest first
///
/// **Public** - backs the `pkg-time` statistic
pub fn packages_by_duration(store: &StatsStore) -> Vec<PackageRecord> {
    let mut rows: Vec<PackageRecord> = store.packages().cloned().collect();
    rows.sort_by(|a, b| {
        descending(a.duration, b.duration).then_with(|| a.package.cmp(&b.package))
    });

    debug!("Ranked {} packages", rows.len());
    rows
}

/// All tests, slowest first
///
/// **Public** - backs the `test-time` statistic
pub fn tests_by_duration(store: &StatsStore) -> Vec<TestRecord> {
    let mut rows: Vec<TestRecord> = store.tests().cloned().collect();
    rows.sort_by(|a, b| descending(a.duration, b.duration).then_with(|| a.key().cmp(&b.key())));

    debug!("Ranked {} tests", rows.len());
    rows
}

fn descending<T: Ord>(a: T, b: T) -> Ordering {
    b.cmp(&a)
}
