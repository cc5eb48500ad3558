//! Common test utilities for review-pipeline tests

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "REVIEW_ID,ACTOR_ID,CASE_TYPE,CASE_CREATED_TIME,CASE_BACKLOG_ENTRY_TIME,HANDLING_TIME_START,HANDLING_TIME_END";

/// Install a subscriber so `RUST_LOG=debug cargo test` shows pipeline logs
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A source row described by its raw cells
#[derive(Debug, Clone)]
pub struct Row {
    pub review_id: String,
    pub actor_id: String,
    pub case_type: String,
    pub created: String,
    pub backlog: String,
    pub start: String,
    pub end: String,
}

impl Row {
    /// Row whose start is `2024-01-01 12:00` and whose three durations are
    /// the given minutes (negative values allowed)
    pub fn with_minutes(id: usize, handling: i64, backlog: i64, age: i64) -> Self {
        let start = minutes_from_noon(0);
        Self {
            review_id: format!("r{id}"),
            actor_id: format!("agent-{}", id % 3),
            case_type: "TYPE_ONE".to_string(),
            created: minutes_from_noon(-age),
            backlog: minutes_from_noon(-backlog),
            start,
            end: minutes_from_noon(handling),
        }
    }

    pub fn actor(mut self, actor: &str) -> Self {
        self.actor_id = actor.to_string();
        self
    }

    pub fn case_type(mut self, case_type: &str) -> Self {
        self.case_type = case_type.to_string();
        self
    }

    pub fn start(mut self, raw: &str) -> Self {
        self.start = raw.to_string();
        self
    }

    pub fn end(mut self, raw: &str) -> Self {
        self.end = raw.to_string();
        self
    }

    fn to_line(&self) -> String {
        [
            self.review_id.as_str(),
            &self.actor_id,
            &self.case_type,
            &self.created,
            &self.backlog,
            &self.start,
            &self.end,
        ]
        .join(",")
    }
}

/// `2024-01-01 12:00:00` shifted by `minutes`, formatted as the source does
pub fn minutes_from_noon(minutes: i64) -> String {
    let noon = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    (noon + chrono::Duration::minutes(minutes))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn to_csv(rows: &[Row]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_line());
        out.push('\n');
    }
    out
}

/// Write rows to a temporary CSV file that lives as long as the handle
pub fn write_csv(rows: &[Row]) -> NamedTempFile {
    write_raw(&to_csv(rows))
}

pub fn write_raw(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
