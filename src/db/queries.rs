use crate::core::access::RecordScope;
use crate::errors::{AppError, AppResult};
use crate::models::record::TimesheetRecord;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// A record as stored, with its row metadata.
#[derive(Debug, Clone)]
pub struct StoredTimesheet {
    pub id: i64,
    pub record: TimesheetRecord,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    Amended,
}

impl SaveOutcome {
    /// Audit operation name.
    pub fn operation(self) -> &'static str {
        match self {
            SaveOutcome::Inserted => "submit",
            SaveOutcome::Amended => "amend",
        }
    }
}

pub fn map_row(row: &Row) -> Result<StoredTimesheet> {
    let doc: String = row.get("document")?;
    let record: TimesheetRecord = serde_json::from_str(&doc).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(StoredTimesheet {
        id: row.get("id")?,
        record,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn group_tag(record: &TimesheetRecord) -> Option<String> {
    record
        .group()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
}

/// Insert `record`, or replace the one already stored for the same
/// employee and period start.
pub fn upsert_record(conn: &Connection, record: &TimesheetRecord) -> AppResult<SaveOutcome> {
    let number = record.employee.number.trim();
    let start = record.period.start().to_string();
    let now = Local::now().to_rfc3339();
    let doc = serde_json::to_string(record)?;

    let exists = conn
        .query_row(
            "SELECT id FROM timesheets WHERE employee_number = ?1 AND period_start = ?2",
            params![number, start],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .is_some();

    conn.execute(
        "INSERT INTO timesheets
            (employee_number, group_tag, period_start, period_end, anchor_version,
             document, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
         ON CONFLICT(employee_number, period_start) DO UPDATE SET
            group_tag = excluded.group_tag,
            period_end = excluded.period_end,
            anchor_version = excluded.anchor_version,
            document = excluded.document,
            updated_at = excluded.updated_at",
        params![
            number,
            group_tag(record),
            start,
            record.period.end().to_string(),
            record.anchor_version,
            doc,
            now,
        ],
    )?;

    Ok(if exists {
        SaveOutcome::Amended
    } else {
        SaveOutcome::Inserted
    })
}

pub fn load_record(
    conn: &Connection,
    employee: &str,
    period_start: NaiveDate,
) -> AppResult<Option<StoredTimesheet>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM timesheets
         WHERE employee_number = ?1 AND period_start = ?2",
    )?;
    let found = stmt
        .query_row(params![employee.trim(), period_start.to_string()], map_row)
        .optional()?;
    Ok(found)
}

/// Like `load_record`, but a missing row is `RecordNotFound`.
pub fn require_record(
    conn: &Connection,
    employee: &str,
    period_start: NaiveDate,
) -> AppResult<StoredTimesheet> {
    load_record(conn, employee, period_start)?.ok_or_else(|| AppError::RecordNotFound {
        employee: employee.trim().to_string(),
        period_start: period_start.to_string(),
    })
}

/// Records visible under `scope`, ordered by period then employee.
///
/// The scope narrows the query and is applied again to the decoded
/// records, so a row whose columns disagree with its document is dropped.
pub fn list_records(conn: &Connection, scope: &RecordScope) -> AppResult<Vec<StoredTimesheet>> {
    let (group, employee): (Option<&str>, Option<&str>) = match scope {
        RecordScope::All => (None, None),
        RecordScope::Group(g) => (Some(g.as_str()), None),
        RecordScope::Employee(e) => (None, Some(e.as_str())),
    };

    let mut stmt = conn.prepare(
        "SELECT * FROM timesheets
         WHERE (?1 IS NULL OR group_tag = ?1)
           AND (?2 IS NULL OR employee_number = ?2)
         ORDER BY period_start ASC, employee_number ASC",
    )?;
    let rows = stmt.query_map(params![group, employee], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        let stored = r?;
        if scope.matches(&stored.record) {
            out.push(stored);
        }
    }
    Ok(out)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM timesheets", [], |row| row.get(0))?)
}

/// Remove the record of `employee` for the period starting on
/// `period_start`. Returns whether a row was deleted.
pub fn delete_record(conn: &Connection, employee: &str, period_start: NaiveDate) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM timesheets WHERE employee_number = ?1 AND period_start = ?2",
        params![employee.trim(), period_start.to_string()],
    )?;
    Ok(n > 0)
}
