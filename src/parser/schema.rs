//! Input record definitions for `go test -json` output.
//!
//! One `RawEvent` is decoded per line. Field names follow the test runner's
//! capitalised keys, matched without regard to case; unknown keys are
//! ignored and missing or null keys take their zero value.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Outcome tag of a log line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Action {
    Pass,
    Fail,
    /// `run`, `output`, `skip`, `pause`, ... or the empty string when absent
    Other(String),
}

impl Action {
    /// Whether this action commits a record to the store
    pub fn is_outcome(&self) -> bool {
        matches!(self, Action::Pass | Action::Fail)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Action::Other(s) if s.is_empty())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Pass => "pass",
            Action::Fail => "fail",
            Action::Other(s) => s,
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Other(String::new())
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pass" => Action::Pass,
            "fail" => Action::Fail,
            _ => Action::Other(s),
        }
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        Action::from(s.to_string())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical keys of a log record
pub const FIELD_NAMES: &[&str] = &["Action", "Package", "Test", "Output", "Time", "Elapsed"];

/// A single decoded log line
///
/// A `null` value leaves the field at its zero value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default, rename = "Action", deserialize_with = "null_as_default")]
    pub action: Action,

    /// Import path of the package under test
    #[serde(default, rename = "Package", deserialize_with = "null_as_default")]
    pub package: String,

    /// Test name; empty for package-level summary lines
    #[serde(default, rename = "Test", deserialize_with = "null_as_default")]
    pub test: String,

    #[serde(default, rename = "Output", deserialize_with = "null_as_default")]
    pub output: String,

    /// RFC 3339 timestamp; `None` when the key is absent or null
    #[serde(default, rename = "Time")]
    pub time: Option<DateTime<FixedOffset>>,

    /// Elapsed wall time in seconds
    #[serde(default, rename = "Elapsed", deserialize_with = "null_as_default")]
    pub elapsed: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Map a key onto its canonical spelling, ignoring ASCII case
pub fn canonical_field(key: &str) -> Option<&'static str> {
    FIELD_NAMES
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(key))
}

impl RawEvent {
    pub fn is_test_event(&self) -> bool {
        !self.test.is_empty()
    }

    /// Whether the event carries a timestamp strictly after the zero-value
    /// sentinel
    pub fn has_valid_time(&self) -> bool {
        let zero = crate::utils::config::zero_time();
        self.time
            .map(|t| t.with_timezone(&chrono::Utc) > zero)
            .unwrap_or(false)
    }
}
