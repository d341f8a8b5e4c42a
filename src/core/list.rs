use crate::core::access::{RecordScope, scope_for};
use crate::db::log::audit;
use crate::db::queries::{StoredTimesheet, list_records};
use crate::errors::{AppError, AppResult};
use crate::models::role::Caller;
use rusqlite::Connection;

/// High-level business logic for the `list` command.
pub struct ListLogic;

impl ListLogic {
    /// Scope for `caller`. A supervisor without a group is written to the
    /// audit log as a data-integrity problem before the error is returned.
    pub fn scope(conn: &Connection, caller: &Caller) -> AppResult<RecordScope> {
        match scope_for(caller) {
            Err(AppError::MissingGroup(who)) => {
                audit(
                    conn,
                    "integrity",
                    &who,
                    "supervisor has no group assignment",
                );
                Err(AppError::MissingGroup(who))
            }
            Ok(RecordScope::Employee(id)) if id.trim().is_empty() => Err(AppError::AccessDenied(
                "an employee caller needs an identity (--as)".into(),
            )),
            other => other,
        }
    }

    pub fn records(conn: &Connection, caller: &Caller) -> AppResult<Vec<StoredTimesheet>> {
        let scope = Self::scope(conn, caller)?;
        list_records(conn, &scope)
    }
}
