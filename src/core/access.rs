//! Which stored timesheets a caller may see.

use crate::errors::{AppError, AppResult};
use crate::models::record::TimesheetRecord;
use crate::models::role::{Caller, Role};

/// Record-selection predicate handed to the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordScope {
    All,
    Group(String),
    Employee(String),
}

impl RecordScope {
    pub fn matches(&self, record: &TimesheetRecord) -> bool {
        match self {
            RecordScope::All => true,
            RecordScope::Group(g) => record.group().map(str::trim) == Some(g.as_str()),
            RecordScope::Employee(id) => record.employee.number.trim() == id,
        }
    }

    /// Closure form, for callers filtering arbitrary collections.
    pub fn into_predicate(self) -> impl Fn(&TimesheetRecord) -> bool {
        move |r| self.matches(r)
    }

    pub fn describe(&self) -> String {
        match self {
            RecordScope::All => "all timesheets".into(),
            RecordScope::Group(g) => format!("group '{g}'"),
            RecordScope::Employee(id) => format!("employee {id}"),
        }
    }
}

/// Scope for `caller`.
///
/// A supervisor without a group is a configuration error, never an empty
/// result.
pub fn scope_for(caller: &Caller) -> AppResult<RecordScope> {
    match caller.role {
        Role::Admin => Ok(RecordScope::All),
        Role::Supervisor => caller
            .group
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(|g| RecordScope::Group(g.to_string()))
            .ok_or_else(|| AppError::MissingGroup(caller.identity.clone())),
        Role::Employee => Ok(RecordScope::Employee(caller.identity.trim().to_string())),
    }
}
