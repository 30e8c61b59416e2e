//! Human-readable duration notation.
//!
//! Matches the `time.Duration` string form used by the Go toolchain, so
//! reports line up with what `go test` itself prints: `0s`, `850ns`,
//! `1.5µs`, `200ms`, `1.5s`, `2m3.25s`, `1h0m0s`.

use chrono::TimeDelta;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Format a signed duration
pub fn format_duration(d: TimeDelta) -> String {
    let nanos = d
        .num_nanoseconds()
        .unwrap_or(if d < TimeDelta::zero() { i64::MIN } else { i64::MAX });
    format_nanos(nanos)
}

/// Format a signed nanosecond count
pub fn format_nanos(nanos: i64) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }

    let sign = if nanos < 0 { "-" } else { "" };
    let u = nanos.unsigned_abs();

    if u < NANOS_PER_SECOND {
        let (prec, unit) = if u < 1_000 {
            (0, "ns")
        } else if u < 1_000_000 {
            (3, "µs")
        } else {
            (6, "ms")
        };
        let scale = 10u64.pow(prec);
        return format!(
            "{}{}{}{}",
            sign,
            u / scale,
            fraction(u % scale, prec as usize),
            unit
        );
    }

    let frac = fraction(u % NANOS_PER_SECOND, 9);
    let total_secs = u / NANOS_PER_SECOND;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    if hours > 0 {
        format!("{}{}h{}m{}{}s", sign, hours, mins, secs, frac)
    } else if total_mins > 0 {
        format!("{}{}m{}{}s", sign, mins, secs, frac)
    } else {
        format!("{}{}{}s", sign, secs, frac)
    }
}

/// `.ddd` with trailing zeros removed, or nothing for a zero fraction
fn fraction(value: u64, width: usize) -> String {
    if value == 0 {
        return String::new();
    }
    let digits = format!("{:0width$}", value, width = width);
    format!(".{}", digits.trim_end_matches('0'))
}
