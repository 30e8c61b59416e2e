//! Configuration and constants for the CLI.

use chrono::{DateTime, NaiveDate, Utc};

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Statistic names accepted by `--statistic`
pub const PKG_TIME: &str = "pkg-time";
pub const TEST_TIME: &str = "test-time";
pub const STATISTIC_NAMES: &[&str] = &[PKG_TIME, TEST_TIME];

/// Upper bound for `--top`
pub const MAX_TOP_ROWS: usize = 100_000;

/// Separator between package and test name in a test identity
pub const TEST_KEY_SEPARATOR: char = '#';

/// The zero-value timestamp, `0001-01-01T00:00:00Z`.
///
/// Events must be stamped strictly after this to be counted; an absent
/// `Time` field is treated as equal to it.
pub fn zero_time() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
