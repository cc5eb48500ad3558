//! Common test utilities for review-report tests

#![allow(dead_code)]

use review_pipeline::{load_from_reader, CleanTable};

const HEADER: &str = "REVIEW_ID,ACTOR_ID,CASE_TYPE,CASE_CREATED_TIME,CASE_BACKLOG_ENTRY_TIME,HANDLING_TIME_START,HANDLING_TIME_END";

/// A clean-by-construction row: created 08:00, backlog 08:00 + `backlog`
/// minutes before start, start at 09:00, end `handling` minutes later.
#[derive(Debug, Clone)]
pub struct Row {
    pub actor: &'static str,
    pub case_type: &'static str,
    pub day: u32,
    pub handling: u32,
    pub backlog: u32,
}

impl Row {
    pub fn new(actor: &'static str, case_type: &'static str) -> Self {
        Self {
            actor,
            case_type,
            day: 1,
            handling: 10,
            backlog: 10,
        }
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    pub fn handling(mut self, minutes: u32) -> Self {
        self.handling = minutes;
        self
    }

    pub fn backlog(mut self, minutes: u32) -> Self {
        self.backlog = minutes;
        self
    }
}

/// Build a clean table from rows. With uniform durations nothing is
/// capped, so the table keeps every row in order.
pub fn table(rows: &[Row]) -> CleanTable {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for (i, row) in rows.iter().enumerate() {
        let day = format!("2024-03-{:02}", row.day);
        let start = chrono::NaiveDate::parse_from_str(&day, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let fmt = |t: chrono::NaiveDateTime| t.format("%Y-%m-%d %H:%M:%S").to_string();
        let created = start - chrono::Duration::hours(1);
        let backlog = start - chrono::Duration::minutes(i64::from(row.backlog));
        let end = start + chrono::Duration::minutes(i64::from(row.handling));
        csv.push_str(&format!(
            "r{i},{},{},{},{},{},{}\n",
            row.actor,
            row.case_type,
            fmt(created),
            fmt(backlog),
            fmt(start),
            fmt(end)
        ));
    }
    load_from_reader(csv.as_bytes()).unwrap()
}
