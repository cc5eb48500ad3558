//! Case-review metrics pipeline
//!
//! Turns a delimited file of case-review records into a clean, typed table:
//!
//! 1. **Parse**: read the header and rows, parsing the four timestamp columns
//!    permissively (unrecognised cells become missing, never an error)
//! 2. **Derive**: handling duration, backlog delay and case age in minutes,
//!    plus the review date
//! 3. **Validate**: drop rows with any missing or negative duration
//! 4. **Cap**: drop rows above the 99th percentile of any duration, with each
//!    cap computed independently over the validated rows
//!
//! The result is deterministic for a given file. [`TableCache`] keeps one
//! clean table per path for the rest of a session.
//!
//! # Example
//!
//! ```rust
//! use review_pipeline::{load_from_reader, DurationMetric};
//!
//! let csv = "\
//! REVIEW_ID,ACTOR_ID,CASE_TYPE,CASE_CREATED_TIME,CASE_BACKLOG_ENTRY_TIME,HANDLING_TIME_START,HANDLING_TIME_END
//! r1,agent-1,TYPE_ONE,2024-01-01 20:00:00,2024-01-01 23:00:00,2024-01-01 23:50:00,2024-01-02 00:10:00
//! r2,agent-2,TYPE_TWO,2024-01-01 20:00:00,2024-01-01 23:00:00,not-a-time,2024-01-02 00:10:00
//! ";
//!
//! let table = load_from_reader(csv.as_bytes()).unwrap();
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.metric_values(DurationMetric::HandlingDuration), vec![20.0]);
//! ```

pub mod cache;
pub mod clean;
pub mod columns;
pub mod loader;
pub mod record;
pub mod table;
pub mod timestamp;

pub use cache::{CacheStats, TableCache};
pub use clean::{clean, duration_caps, validate, CAP_PERCENTILE};
pub use columns::{DurationMetric, DERIVED_COLUMNS, REQUIRED_COLUMNS, TIMESTAMP_COLUMNS};
pub use loader::{load, load_from_reader, load_raw, read_table};
pub use record::{CaseReview, CleanReview, DerivedMetrics};
pub use table::{CleanTable, CleaningSummary, DurationCaps, RawTable};
pub use timestamp::{minutes_between, parse_timestamp};

pub use review_core::{Error, Result};
