//! Reading the delimited source file

use crate::clean::clean;
use crate::columns::{
    ACTOR_ID, CASE_BACKLOG_ENTRY_TIME, CASE_CREATED_TIME, CASE_TYPE, DERIVED_COLUMNS,
    HANDLING_TIME_END, HANDLING_TIME_START, REQUIRED_COLUMNS, REVIEW_ID,
};
use crate::record::CaseReview;
use crate::table::{CleanTable, RawTable};
use crate::timestamp::parse_timestamp;
use csv::{ReaderBuilder, StringRecord};
use review_core::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Header positions of the required columns plus any pass-through columns
#[derive(Debug, Clone)]
struct ColumnLayout {
    review_id: usize,
    actor_id: usize,
    case_type: usize,
    case_created_time: usize,
    case_backlog_entry_time: usize,
    handling_time_start: usize,
    handling_time_end: usize,
    extra: Vec<(usize, String)>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers
            .iter()
            .map(|name| name.trim().trim_start_matches('\u{feff}'))
            .collect();
        let find = |column: &str| names.iter().position(|&name| name == column);

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| find(*column).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(Error::missing_columns(missing));
        }

        let index = |column: &str| find(column).ok_or_else(|| Error::missing_columns([column]));
        let layout = Self {
            review_id: index(REVIEW_ID)?,
            actor_id: index(ACTOR_ID)?,
            case_type: index(CASE_TYPE)?,
            case_created_time: index(CASE_CREATED_TIME)?,
            case_backlog_entry_time: index(CASE_BACKLOG_ENTRY_TIME)?,
            handling_time_start: index(HANDLING_TIME_START)?,
            handling_time_end: index(HANDLING_TIME_END)?,
            extra: Vec::new(),
        };

        // Pass-through columns keep unique names that do not shadow a
        // required or derived column; the first header of a name wins.
        let required = layout.required_indices();
        let mut extra: Vec<(usize, String)> = Vec::new();
        let mut shadowed = 0usize;
        for (idx, &name) in names.iter().enumerate() {
            if required.contains(&idx) {
                continue;
            }
            if REQUIRED_COLUMNS.contains(&name)
                || DERIVED_COLUMNS.contains(&name)
                || extra.iter().any(|(_, kept)| kept == name)
            {
                shadowed += 1;
                continue;
            }
            extra.push((idx, name.to_string()));
        }
        if shadowed > 0 {
            warn!(shadowed, "ignoring source columns that repeat an output column name");
        }
        Ok(Self { extra, ..layout })
    }

    fn required_indices(&self) -> [usize; 7] {
        [
            self.review_id,
            self.actor_id,
            self.case_type,
            self.case_created_time,
            self.case_backlog_entry_time,
            self.handling_time_start,
            self.handling_time_end,
        ]
    }

    fn extract(&self, record: &StringRecord) -> CaseReview {
        let cell = |idx: usize| record.get(idx).unwrap_or("");
        let timestamp = |idx: usize| parse_timestamp(cell(idx));

        CaseReview {
            review_id: cell(self.review_id).to_string(),
            actor_id: cell(self.actor_id).to_string(),
            case_type: cell(self.case_type).to_string(),
            case_created_time: timestamp(self.case_created_time),
            case_backlog_entry_time: timestamp(self.case_backlog_entry_time),
            handling_time_start: timestamp(self.handling_time_start),
            handling_time_end: timestamp(self.handling_time_end),
            extra: self
                .extra
                .iter()
                .map(|(idx, _)| cell(*idx).to_string())
                .collect(),
        }
    }
}

/// Parse a delimited table with a header row from any reader.
///
/// # Errors
/// `Error::MissingColumns` if a required column is absent, `Error::Csv` on
/// malformed input such as rows with the wrong number of fields.
pub fn read_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let layout = ColumnLayout::resolve(&headers)?;

    let mut rows = Vec::new();
    let mut unparsed_cells = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        let review = layout.extract(&record);
        unparsed_cells += [
            review.case_created_time,
            review.case_backlog_entry_time,
            review.handling_time_start,
            review.handling_time_end,
        ]
        .iter()
        .filter(|parsed| parsed.is_none())
        .count();
        rows.push(review);
    }

    if unparsed_cells > 0 {
        warn!(
            unparsed_cells,
            "blank or unparseable timestamp cells treated as missing"
        );
    }
    debug!(rows = rows.len(), extra_columns = layout.extra.len(), "read source table");

    Ok(RawTable {
        extra_columns: layout.extra.into_iter().map(|(_, name)| name).collect(),
        rows,
    })
}

/// Read and parse the source file at `path` without cleaning it.
pub fn load_raw(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    info!(path = %path.display(), "loading case-review table");
    read_table(file)
}

/// Load, derive, validate and cap the source file at `path`.
///
/// # Errors
/// Fails without a partial table if the file is absent, unreadable,
/// malformed or missing a required column.
pub fn load(path: impl AsRef<Path>) -> Result<CleanTable> {
    clean(load_raw(path)?)
}

/// Like [`load`] but from an already open reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<CleanTable> {
    clean(read_table(reader)?)
}
