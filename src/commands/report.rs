//! Report command implementation.
//!
//! The report command:
//! 1. Reads every log file in order
//! 2. Aggregates the latest result per package and per test
//! 3. Ranks the requested statistic
//! 4. Renders and writes the report

use crate::aggregator::{packages_by_duration, stats_from_files, tests_by_duration};
use crate::commands::models::{OutputFormat, ReportArgs, Statistic};
use crate::output::json::{package_report, test_report};
use crate::output::{render_package_report, render_test_report, report_to_string, write_report};
use crate::utils::config::MAX_TOP_ROWS;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Report command arguments
///
/// # Returns
/// Ok once the whole report is written; nothing is written on failure
///
/// # Errors
/// * Unreadable or malformed log files
/// * Output write errors
///
/// # Example
/// ```ignore
/// let args = ReportArgs {
///     statistic: Statistic::TestTime,
///     files: vec![PathBuf::from("run1.json"), PathBuf::from("run2.json")],
///     ..Default::default()
/// };
///
/// execute_report(args)?;
/// ```
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    validate_args(&args)?;

    let contents = generate_report(&args)?;

    write_report(&contents, args.output.as_deref()).context("Failed to write report")?;

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Aggregate the inputs and render the requested statistic
///
/// **Public** - the whole pipeline minus the final write
pub fn generate_report(args: &ReportArgs) -> Result<String> {
    info!(
        "Computing {} over {} file(s)",
        args.statistic,
        args.files.len()
    );

    let (store, summary) =
        stats_from_files(args.files.as_slice()).context("Failed to aggregate test logs")?;
    info!("Ingested: {}", summary.summary());

    let limit = args.row_limit();

    let contents = match args.statistic {
        Statistic::PackageTime => {
            let mut rows = packages_by_duration(&store);
            rows.truncate(limit);
            debug!("Reporting {} packages", rows.len());
            match args.format {
                OutputFormat::Text => render_package_report(&rows),
                OutputFormat::Json => report_to_string(&package_report(&rows))?,
            }
        }
        Statistic::TestTime => {
            let mut rows = tests_by_duration(&store);
            rows.truncate(limit);
            debug!("Reporting {} tests", rows.len());
            match args.format {
                OutputFormat::Text => render_test_report(&rows),
                OutputFormat::Json => report_to_string(&test_report(&rows))?,
            }
        }
    };

    Ok(contents)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("top must be greater than 0");
        }

        if top > MAX_TOP_ROWS {
            anyhow::bail!("top is too large (max {})", MAX_TOP_ROWS);
        }
    }

    if args.files.iter().any(|f| f.as_os_str().is_empty()) {
        anyhow::bail!("Input file paths cannot be empty");
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}
