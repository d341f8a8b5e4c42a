use crate::core::list::ListLogic;
use crate::db::log::audit;
use crate::db::queries::{delete_record, require_record};
use crate::errors::{AppError, AppResult};
use crate::models::role::Caller;
use chrono::NaiveDate;
use rusqlite::Connection;

/// High-level business logic for the `delete` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the record of `employee` for the period starting on
    /// `period_start`. The caller must be able to see the record.
    pub fn apply(
        conn: &Connection,
        caller: &Caller,
        employee: &str,
        period_start: NaiveDate,
    ) -> AppResult<()> {
        let scope = ListLogic::scope(conn, caller)?;
        let stored = require_record(conn, employee, period_start)?;

        if !scope.matches(&stored.record) {
            return Err(AppError::AccessDenied(format!(
                "caller limited to {} cannot delete the timesheet of employee {}",
                scope.describe(),
                employee.trim()
            )));
        }

        // la riga può sparire tra lettura e cancellazione
        if !delete_record(conn, employee, period_start)? {
            return Err(AppError::RecordNotFound {
                employee: employee.trim().to_string(),
                period_start: period_start.to_string(),
            });
        }

        audit(
            conn,
            "delete",
            &format!("{}@{}", stored.record.employee.number, period_start),
            &format!("deleted by {} ({})", caller.identity.trim(), caller.role),
        );

        Ok(())
    }
}
