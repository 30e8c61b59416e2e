//! gotest-stats
//!
//! Duration statistics for Go test suites, computed from the
//! newline-delimited JSON written by `go test -json`.
//!
//! Records from several log files are merged with last-wins semantics
//! (later files override earlier ones) and ranked slowest first, either
//! per package or per test.
//!
//! ## Getting Started
//!
//! ```bash
//! go test -json ./... > run.json
//! gotest-stats --statistic test-time run.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
