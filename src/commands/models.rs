use crate::utils::config::{PKG_TIME, TEST_TIME};
use crate::utils::error::StatisticError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which ranking to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    /// Packages by total elapsed time
    PackageTime,
    /// Individual tests by elapsed time
    TestTime,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::PackageTime => PKG_TIME,
            Statistic::TestTime => TEST_TIME,
        }
    }
}

impl FromStr for Statistic {
    type Err = StatisticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PKG_TIME => Ok(Statistic::PackageTime),
            TEST_TIME => Ok(Statistic::TestTime),
            other => Err(StatisticError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated rows
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Ranking to compute
    pub statistic: Statistic,

    /// Log files, applied in order
    pub files: Vec<PathBuf>,

    /// Report encoding
    pub format: OutputFormat,

    /// Keep only the first N rows
    pub top: Option<usize>,

    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            statistic: Statistic::PackageTime,
            files: Vec::new(),
            format: OutputFormat::Text,
            top: None,
            output: None,
        }
    }
}

impl ReportArgs {
    /// Row limit actually applied, `usize::MAX` when unlimited
    pub fn row_limit(&self) -> usize {
        self.top.unwrap_or(usize::MAX)
    }
}
