//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{OutputFormat, ReportArgs, Statistic};
pub use report::{execute_report, generate_report, validate_args};
pub use utils::{statistic_usage_message, ABOUT_INPUTS};
