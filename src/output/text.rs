//! Tab-separated text report.
//!
//! One row per line:
//! - packages: `<package>\t<duration>`
//! - tests:    `<test>\t<package>\t<duration>\t<pass|fail>`

use super::duration::format_duration;
use crate::aggregator::{PackageRecord, TestRecord};
use std::fmt::Write;

pub fn package_line(record: &PackageRecord) -> String {
    format!("{}\t{}", record.package, format_duration(record.duration))
}

pub fn test_line(record: &TestRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        record.name,
        record.package,
        format_duration(record.duration),
        record.status()
    )
}

/// Render the `pkg-time` report, newline-terminated rows
pub fn render_package_report(rows: &[PackageRecord]) -> String {
    render(rows, package_line)
}

/// Render the `test-time` report, newline-terminated rows
pub fn render_test_report(rows: &[TestRecord]) -> String {
    render(rows, test_line)
}

fn render<T>(rows: &[T], line: impl Fn(&T) -> String) -> String {
    rows.iter().fold(String::new(), |mut out, row| {
        let _ = writeln!(out, "{}", line(row));
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_package_line() {
        let record = PackageRecord {
            package: "pkgA".to_string(),
            duration: TimeDelta::milliseconds(1500),
        };
        assert_eq!(package_line(&record), "pkgA\t1.5s");
    }

    #[test]
    fn test_test_line() {
        let record = TestRecord {
            package: "pkgA".to_string(),
            name: "T1".to_string(),
            duration: TimeDelta::milliseconds(200),
            passed: true,
        };
        assert_eq!(test_line(&record), "T1\tpkgA\t200ms\tpass");
    }

    #[test]
    fn test_render_terminates_every_row() {
        let rows = vec![
            PackageRecord {
                package: "a".to_string(),
                duration: TimeDelta::seconds(2),
            },
            PackageRecord {
                package: "b".to_string(),
                duration: TimeDelta::zero(),
            },
        ];
        assert_eq!(render_package_report(&rows), "a\t2s\nb\t0s\n");
        assert_eq!(render_test_report(&[]), "");
    }
}
