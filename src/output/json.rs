//! JSON report format.
//!
//! Carries the same rows, in the same order, as the text report, plus the
//! raw nanosecond durations for tooling that post-processes the output.

use super::duration::format_duration;
use crate::aggregator::{PackageRecord, TestRecord};
use crate::utils::config::{PKG_TIME, REPORT_SCHEMA_VERSION, TEST_TIME};
use crate::utils::error::OutputError;
use chrono::{TimeDelta, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Top-level report document
///
/// The row shape is chosen by `statistic` when reading a report back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredReport")]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// `pkg-time` or `test-time`
    pub statistic: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub rows: ReportRows,
}

/// Serialized as a bare array; the kind follows from `Report::statistic`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportRows {
    Packages(Vec<PackageRow>),
    Tests(Vec<TestRow>),
}

impl ReportRows {
    pub fn len(&self) -> usize {
        match self {
            ReportRows::Packages(rows) => rows.len(),
            ReportRows::Tests(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageRow {
    pub package: String,
    pub duration: String,
    pub duration_ns: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestRow {
    pub test: String,
    pub package: String,
    pub duration: String,
    pub duration_ns: i64,
    pub status: String,
}

/// On-disk form before the rows are typed
#[derive(Deserialize)]
struct StoredReport {
    version: String,
    statistic: String,
    generated_at: String,
    rows: serde_json::Value,
}

impl TryFrom<StoredReport> for Report {
    type Error = serde_json::Error;

    fn try_from(stored: StoredReport) -> Result<Self, Self::Error> {
        let rows = match stored.statistic.as_str() {
            PKG_TIME => ReportRows::Packages(serde_json::from_value(stored.rows)?),
            TEST_TIME => ReportRows::Tests(serde_json::from_value(stored.rows)?),
            other => {
                return Err(serde::de::Error::custom(format!(
                    "unknown statistic `{}`",
                    other
                )))
            }
        };

        Ok(Report {
            version: stored.version,
            statistic: stored.statistic,
            generated_at: stored.generated_at,
            rows,
        })
    }
}

fn nanos(d: TimeDelta) -> i64 {
    d.num_nanoseconds().unwrap_or(i64::MAX)
}

/// Build the `pkg-time` document from ranked rows
pub fn package_report(rows: &[PackageRecord]) -> Report {
    let rows = rows
        .iter()
        .map(|r| PackageRow {
            package: r.package.clone(),
            duration: format_duration(r.duration),
            duration_ns: nanos(r.duration),
        })
        .collect();

    new_report(PKG_TIME, ReportRows::Packages(rows))
}

/// Build the `test-time` document from ranked rows
pub fn test_report(rows: &[TestRecord]) -> Report {
    let rows = rows
        .iter()
        .map(|r| TestRow {
            test: r.name.clone(),
            package: r.package.clone(),
            duration: format_duration(r.duration),
            duration_ns: nanos(r.duration),
            status: r.status().to_string(),
        })
        .collect();

    new_report(TEST_TIME, ReportRows::Tests(rows))
}

fn new_report(statistic: &str, rows: ReportRows) -> Report {
    Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        statistic: statistic.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        rows,
    }
}

/// Serialize a report as pretty-printed JSON with a trailing newline
pub fn report_to_string(report: &Report) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Read a report back from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: Report = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} rows",
        report.version,
        report.rows.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_report_rows() {
        let report = package_report(&[PackageRecord {
            package: "pkgA".to_string(),
            duration: TimeDelta::milliseconds(1500),
        }]);

        assert_eq!(report.version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.statistic, "pkg-time");
        assert_eq!(
            report.rows,
            ReportRows::Packages(vec![PackageRow {
                package: "pkgA".to_string(),
                duration: "1.5s".to_string(),
                duration_ns: 1_500_000_000,
            }])
        );
    }

    #[test]
    fn test_test_report_serializes_status() {
        let report = test_report(&[TestRecord {
            package: "pkgA".to_string(),
            name: "T1".to_string(),
            duration: TimeDelta::milliseconds(300),
            passed: false,
        }]);

        let json = report_to_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(json.ends_with('\n'));
        assert_eq!(value["statistic"], "test-time");
        assert_eq!(value["rows"][0]["test"], "T1");
        assert_eq!(value["rows"][0]["duration"], "300ms");
        assert_eq!(value["rows"][0]["status"], "fail");
    }

    #[test]
    fn test_empty_test_report_keeps_row_kind() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.json");
        std::fs::write(&path, report_to_string(&test_report(&[])).unwrap()).unwrap();

        let report = read_report(&path).unwrap();
        assert_eq!(report.statistic, "test-time");
        assert_eq!(report.rows, ReportRows::Tests(Vec::new()));
    }

    #[test]
    fn test_read_report_rows_must_match_statistic() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.json");
        std::fs::write(
            &path,
            r#"{"version":"1.0.0","statistic":"pkg-time","generated_at":"x",
               "rows":[{"test":"T","package":"p","duration":"1s","duration_ns":1000000000,"status":"pass"}]}"#,
        )
        .unwrap();
        assert!(read_report(&path).is_err());

        std::fs::write(
            &path,
            r#"{"version":"1.0.0","statistic":"mem","generated_at":"x","rows":[]}"#,
        )
        .unwrap();
        assert!(read_report(&path).is_err());
    }

    #[test]
    fn test_read_report_rejects_garbage() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            read_report(&path),
            Err(OutputError::SerializationFailed(_))
        ));
    }
}
