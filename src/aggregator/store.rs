//! Last-wins store of per-package and per-test results.
//!
//! A later `pass`/`fail` event for an identity replaces the earlier record
//! outright. Every other action is ignored.

use crate::parser::{Action, RawEvent};
use crate::utils::config::TEST_KEY_SEPARATOR;
use chrono::TimeDelta;
use log::debug;
use std::collections::HashMap;

/// Latest outcome of one test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub package: String,
    pub name: String,
    pub duration: TimeDelta,
    pub passed: bool,
}

impl TestRecord {
    /// Identity of this record, `<package>#<name>`
    pub fn key(&self) -> String {
        test_key(&self.package, &self.name)
    }

    pub fn status(&self) -> &'static str {
        if self.passed {
            "pass"
        } else {
            "fail"
        }
    }
}

/// Latest package-level summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub package: String,
    pub duration: TimeDelta,
}

/// Composite identity of a test
pub fn test_key(package: &str, name: &str) -> String {
    format!("{}{}{}", package, TEST_KEY_SEPARATOR, name)
}

/// Convert an `Elapsed` value in seconds to a signed duration
///
/// Truncates toward zero at nanosecond precision; out-of-range and NaN
/// inputs saturate the way `as` casts do.
pub fn elapsed_to_duration(elapsed: f64) -> TimeDelta {
    TimeDelta::nanoseconds((elapsed * 1_000_000_000.0) as i64)
}

/// Aggregated state for one invocation
#[derive(Debug, Clone, Default)]
pub struct StatsStore {
    packages: HashMap<String, PackageRecord>,
    tests: HashMap<String, TestRecord>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an event may touch the store at all
    pub fn is_eligible(event: &RawEvent) -> bool {
        event.has_valid_time() && !event.package.is_empty() && !event.action.is_empty()
    }

    /// Apply one event
    ///
    /// **Public** - the single mutation point of the store
    ///
    /// Ineligible events and non-outcome actions are no-ops. Elapsed values
    /// are taken as given, negative ones included.
    pub fn apply(&mut self, event: &RawEvent) {
        if !Self::is_eligible(event) || !event.action.is_outcome() {
            return;
        }

        let duration = elapsed_to_duration(event.elapsed);

        if event.is_test_event() {
            let record = TestRecord {
                package: event.package.clone(),
                name: event.test.clone(),
                duration,
                passed: event.action == Action::Pass,
            };
            self.tests.insert(record.key(), record);
        } else {
            let record = PackageRecord {
                package: event.package.clone(),
                duration,
            };
            self.packages.insert(record.package.clone(), record);
        }
    }

    /// Apply a file's worth of events in order
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a RawEvent>) {
        for event in events {
            self.apply(event);
        }
        debug!(
            "Store now holds {} packages and {} tests",
            self.packages.len(),
            self.tests.len()
        );
    }

    pub fn package(&self, package: &str) -> Option<&PackageRecord> {
        self.packages.get(package)
    }

    pub fn test(&self, package: &str, name: &str) -> Option<&TestRecord> {
        self.tests.get(&test_key(package, name))
    }

    pub fn packages(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages.values()
    }

    pub fn tests(&self) -> impl Iterator<Item = &TestRecord> {
        self.tests.values()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn test_count(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.tests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn event(action: &str, package: &str, test: &str, elapsed: f64) -> RawEvent {
        RawEvent {
            action: Action::from(action),
            package: package.to_string(),
            test: test.to_string(),
            output: String::new(),
            time: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z").ok(),
            elapsed,
        }
    }

    #[test]
    fn test_elapsed_to_duration() {
        assert_eq!(elapsed_to_duration(2.5).num_nanoseconds(), Some(2_500_000_000));
        assert_eq!(elapsed_to_duration(0.0), TimeDelta::zero());
        assert_eq!(elapsed_to_duration(-0.5).num_milliseconds(), -500);
        // 0.2 * 1e9 lands just above 2e8 in binary floating point
        assert_eq!(elapsed_to_duration(0.2).num_nanoseconds(), Some(200_000_000));
    }

    #[test]
    fn test_later_event_overwrites() {
        let mut store = StatsStore::new();
        store.apply(&event("fail", "pkgA", "T1", 0.1));
        store.apply(&event("pass", "pkgA", "T1", 0.3));

        let record = store.test("pkgA", "T1").unwrap();
        assert!(record.passed);
        assert_eq!(record.duration, TimeDelta::milliseconds(300));
        assert_eq!(store.test_count(), 1);
    }

    #[test]
    fn test_events_are_routed_by_test_name() {
        let mut store = StatsStore::new();
        store.apply(&event("pass", "pkgA", "", 1.5));
        store.apply(&event("pass", "pkgA", "T1", 0.2));

        assert_eq!(store.package_count(), 1);
        assert_eq!(store.test_count(), 1);
        assert!(store.package("pkgA").is_some());
        assert!(store.packages().all(|p| p.package == "pkgA"));
        assert!(store.tests().all(|t| t.name == "T1"));
    }

    #[test]
    fn test_non_outcome_actions_ignored() {
        let mut store = StatsStore::new();
        store.apply(&event("run", "pkgA", "T1", 0.0));
        store.apply(&event("output", "pkgA", "", 0.0));
        store.apply(&event("skip", "pkgA", "T2", 0.0));

        assert!(store.is_empty());
    }

    #[test]
    fn test_ineligible_events_ignored() {
        let mut store = StatsStore::new();
        store.apply(&event("pass", "", "T1", 1.0));
        store.apply(&event("", "pkgA", "T1", 1.0));

        let mut untimed = event("pass", "pkgA", "", 1.0);
        untimed.time = None;
        store.apply(&untimed);

        assert!(store.is_empty());
    }

    #[test]
    fn test_fail_replaces_pass_entirely() {
        let mut store = StatsStore::new();
        store.apply(&event("pass", "pkgA", "T1", 5.0));
        store.apply(&event("fail", "pkgA", "T1", -1.0));

        let record = store.test("pkgA", "T1").unwrap();
        assert!(!record.passed);
        assert_eq!(record.duration, TimeDelta::seconds(-1));
        assert_eq!(record.status(), "fail");
    }
}
