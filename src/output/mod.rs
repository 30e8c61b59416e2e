//! Report rendering and writing.
//!
//! This module handles:
//! - Go-style duration notation
//! - Tab-separated text reports
//! - JSON reports
//! - Writing to stdout or a file

pub mod duration;
pub mod json;
pub mod text;

// Re-export main functions
pub use duration::format_duration;
pub use json::{read_report, report_to_string, Report};
pub use text::{render_package_report, render_test_report};

use crate::utils::error::OutputError;
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Write a rendered report
///
/// **Public** - final step of every statistic
///
/// # Arguments
/// * `contents` - Rendered report
/// * `destination` - File to write, or `None` for stdout
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, directory, or parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report(contents: &str, destination: Option<&Path>) -> Result<(), OutputError> {
    let Some(output_path) = destination else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    info!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    std::fs::write(output_path, contents)?;

    info!("Report written ({} bytes)", contents.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.txt");

        write_report("pkgA\t1s\n", Some(&nested_path)).unwrap();

        assert_eq!(std::fs::read_to_string(&nested_path).unwrap(), "pkgA\t1s\n");
    }
}
