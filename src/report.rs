//! CSV report writing for breach lookup results.
//!
//! The report is breach-hits-only: one row per breach record of every Found
//! outcome, nothing for emails whose outcome is NoData/Failed or whose result
//! list is empty. Rows are flattened in full before the file is created, so a
//! malformed payload never leaves a partial report behind.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;

use crate::errors::{BreachwatchError, IoResultExt, Result};
use crate::records::{BreachRecord, LookupOutcome, LookupResults, ReportRow};

/// Column order of the report file.
pub const REPORT_COLUMNS: [&str; 5] = ["Email", "Password", "Sha1", "Hash", "Sources"];

/// Default report file name in the working directory, stamped with the
/// current local time.
pub fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "{}_breach_results.csv",
        Local::now().format("%Y-%m-%d_%H-%M-%S")
    ))
}

/// Flatten every Found outcome into report rows, preserving field values
/// verbatim except `sources`, which is joined with ", ".
///
/// A `result` value that is present but not a list of record-shaped objects
/// fails the whole report.
pub fn flatten_rows(results: &LookupResults) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::new();
    for (email, outcome) in results.iter() {
        let payload = match outcome {
            LookupOutcome::Found(payload) => payload,
            _ => continue,
        };
        for record in records_of(payload, email)? {
            rows.push(ReportRow::from_record(email, &record));
        }
    }
    Ok(rows)
}

/// Extract the `result` list from a payload, defaulting to empty if absent.
fn records_of(payload: &Value, email: &str) -> Result<Vec<BreachRecord>> {
    match payload.get("result") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| BreachwatchError::report_shape(email, e.to_string())),
    }
}

/// Write the CSV report to `path`. Returns the number of data rows written.
///
/// An empty results mapping still produces a header-only file; the caller
/// decides whether to write at all.
pub fn write_report(path: &Path, results: &LookupResults) -> Result<usize> {
    let rows = flatten_rows(results)?;

    let mut out = String::new();
    out.push_str(&REPORT_COLUMNS.join(","));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }

    let mut file = File::create(path).with_path(path.display().to_string(), "create")?;
    file.write_all(out.as_bytes())
        .with_path(path.display().to_string(), "write")?;
    Ok(rows.len())
}

fn format_row(row: &ReportRow) -> String {
    [
        row.email.as_str(),
        row.password.as_str(),
        row.sha1.as_str(),
        row.hash.as_str(),
        row.sources.as_str(),
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a field when it contains a comma, quote or newline; double embedded
/// quotes.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
