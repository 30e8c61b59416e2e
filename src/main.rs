//! gotest-stats CLI
//!
//! Ranks packages or tests by elapsed time from `go test -json` logs.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::path::PathBuf;

use gotest_stats::commands::{
    execute_report, statistic_usage_message, OutputFormat, ReportArgs, Statistic, ABOUT_INPUTS,
};

/// gotest-stats - test set statistics from `go test -json` output
#[derive(Parser, Debug)]
#[command(name = "gotest-stats")]
#[command(version, about, long_about = None, after_help = ABOUT_INPUTS)]
struct Cli {
    /// Statistic to compute: pkg-time|test-time
    #[arg(long)]
    statistic: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only print the N slowest rows
    #[arg(long)]
    top: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log files written by `go test -json`, applied in order
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // A missing or unknown statistic is a usage problem, not a failure
    let statistic = match cli.statistic.as_deref().map(str::parse::<Statistic>) {
        Some(Ok(statistic)) => statistic,
        Some(Err(err)) => return print_usage(statistic_usage_message(Some(&err))),
        None => return print_usage(statistic_usage_message(None)),
    };

    let args = ReportArgs {
        statistic,
        files: cli.files,
        format: cli.format,
        top: cli.top,
        output: cli.output,
    };

    execute_report(args)
}

fn print_usage(message: String) -> Result<()> {
    println!("{}\n", message);
    Cli::command().print_help()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_statistic_long_flag() {
        let cli = Cli::try_parse_from(["gotest-stats", "--statistic", "pkg-time", "a.json"]).unwrap();
        assert_eq!(cli.statistic.as_deref(), Some("pkg-time"));
        assert_eq!(cli.files, vec![PathBuf::from("a.json")]);
    }

    #[test]
    fn test_single_dash_statistic_is_rejected() {
        // `-statistic` must not be split into short flags
        assert!(Cli::try_parse_from(["gotest-stats", "-statistic", "pkg-time"]).is_err());
    }
}
