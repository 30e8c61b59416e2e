//! Line-oriented reader for `go test -json` logs.
//!
//! Each file is read in full before anything is aggregated. A single bad
//! line fails the whole file.

use super::schema::{canonical_field, RawEvent};
use crate::utils::error::IngestError;
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Events kept from one file, in line order
#[derive(Debug, Clone, Default)]
pub struct FileEvents {
    pub events: Vec<RawEvent>,

    /// Non-empty lines decoded
    pub lines: usize,

    /// Lines dropped for lacking a timestamp after the zero sentinel
    pub dropped: usize,
}

/// Decode a single log line
///
/// **Public** - building block for read_event_file and tests
///
/// Keys are matched case-insensitively. A bare `null` decodes to an empty
/// event, which the eligibility checks then drop.
///
/// # Errors
/// Returns the `serde_json` error for malformed JSON, a non-object value,
/// mistyped fields, or an unparseable `Time`.
pub fn parse_line(line: &str) -> Result<RawEvent, serde_json::Error> {
    match serde_json::from_str::<Value>(line)? {
        Value::Null => Ok(RawEvent::default()),
        Value::Object(fields) => RawEvent::deserialize(Value::Object(canonicalize_keys(fields))),
        other => RawEvent::deserialize(other),
    }
}

/// Rename known keys to their canonical spelling; unknown keys are dropped
fn canonicalize_keys(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .filter_map(|(key, value)| canonical_field(&key).map(|name| (name.to_string(), value)))
        .collect()
}

/// Read every record of a log file
///
/// **Public** - called by the ingestion driver once per input file
///
/// # Arguments
/// * `path` - Log file written by `go test -json`
///
/// # Returns
/// The events stamped after the zero-value sentinel, in file order
///
/// # Errors
/// * `IngestError::Open` - file missing or unreadable
/// * `IngestError::Read` - I/O failure mid-file
/// * `IngestError::Decode` - malformed record; carries the 1-based line number
pub fn read_event_file(path: impl AsRef<Path>) -> Result<FileEvents, IngestError> {
    let path = path.as_ref();

    debug!("Reading test log: {}", path.display());

    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = FileEvents::default();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if line.is_empty() {
            continue;
        }

        let event = parse_line(&line).map_err(|source| IngestError::Decode {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        out.lines += 1;

        if event.has_valid_time() {
            out.events.push(event);
        } else {
            out.dropped += 1;
        }
    }

    debug!(
        "{}: {} records, {} without timestamp",
        path.display(),
        out.lines,
        out.dropped
    );

    Ok(out)
}
