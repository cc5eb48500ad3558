//! Permissive timestamp parsing and minute arithmetic
//!
//! Cells that match none of the recognised layouts become `None` instead of
//! failing the load. `None` then flows through [`minutes_between`] so any
//! metric with a missing operand is itself missing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Layouts carrying an explicit UTC offset; normalised to UTC.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Slash dates with the year last are read month first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a timestamp cell, returning `None` for anything unrecognised.
///
/// Offset-aware values are converted to UTC wall-clock time. A trailing `Z`
/// or ` UTC` marks a UTC value. Date-only values land on midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_utc());
        }
    }

    let s = strip_utc_suffix(s);
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

fn strip_utc_suffix(s: &str) -> &str {
    s.strip_suffix(" UTC")
        .or_else(|| s.strip_suffix('Z'))
        .unwrap_or(s)
        .trim_end()
}

/// Elapsed minutes from `earlier` to `later`, from total elapsed seconds.
///
/// Negative when `later` precedes `earlier`. Missing if either side is.
pub fn minutes_between(
    later: Option<NaiveDateTime>,
    earlier: Option<NaiveDateTime>,
) -> Option<f64> {
    let delta = later?.signed_duration_since(earlier?);
    match delta.num_microseconds() {
        Some(us) => Some(us as f64 / 60_000_000.0),
        None => Some(delta.num_seconds() as f64 / 60.0),
    }
}
