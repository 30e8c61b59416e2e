//! Test log parsing and record definitions.
//!
//! This module handles:
//! - Decoding one JSON record per line
//! - Reading whole log files in line order
//! - Dropping records without a usable timestamp

pub mod schema;
pub mod test_event;

// Re-export main types
pub use schema::{Action, RawEvent};
pub use test_event::{parse_line, read_event_file, FileEvents};
