//! Writing rendered reports to disk.
//!
//! Each report gets a name derived from its subject (employee + period), and
//! is written to a temporary file in the target directory then renamed over
//! the final path. Readers see either the previous file or the complete new
//! one, and renders for different subjects never share a path.

use crate::errors::{AppError, AppResult};
use crate::models::record::TimesheetRecord;
use std::io::Write;
use std::path::{Path, PathBuf};

/// `timesheet_<employee>_<period start>.pdf`, employee reduced to `[A-Za-z0-9_-]`.
pub fn report_file_name(record: &TimesheetRecord) -> String {
    let mut employee: String = record
        .employee
        .number
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if employee.is_empty() {
        employee.push_str("unknown");
    }
    format!(
        "timesheet_{}_{}.pdf",
        employee,
        record.period.start().format("%Y-%m-%d")
    )
}

/// Atomically write `bytes` as `dir/file_name`, creating `dir` if needed.
pub fn publish_atomic(dir: &Path, file_name: &str, bytes: &[u8]) -> AppResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let final_path = dir.join(file_name);

    let mut temp = tempfile::Builder::new()
        .prefix(".paysheet-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;

    temp.persist(&final_path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.error.kind(),
            format!("renaming report to {}: {}", final_path.display(), e.error),
        ))
    })?;

    Ok(final_path)
}

/// Convert `document` to PDF and publish it under the record's name.
pub fn publish_report(
    dir: &Path,
    record: &TimesheetRecord,
    document: &crate::report::document::Document,
) -> AppResult<PathBuf> {
    let bytes = document.to_pdf();
    publish_atomic(dir, &report_file_name(record), &bytes)
}
