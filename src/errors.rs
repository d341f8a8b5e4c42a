//! Unified application error type.
//! All modules (db, core, report, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timesheet: {}", .0.join("; "))]
    Validation(Vec<String>),

    // ---------------------------
    // Access control
    // ---------------------------
    #[error("No group assigned to supervisor '{0}'")]
    MissingGroup(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("No timesheet found for employee {employee} in period starting {period_start}")]
    RecordNotFound {
        employee: String,
        period_start: String,
    },

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("Report template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid report template: {0}")]
    TemplateInvalid(String),

    #[error("Report field cannot be resolved: {0}")]
    UnresolvedField(String),

    #[error("Invalid report field map: {0}")]
    FieldMapInvalid(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Errors the submitter can fix by correcting their input or credentials.
    /// Everything else points at a deployment or configuration defect.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::Validation(_)
                | AppError::MissingGroup(_)
                | AppError::AccessDenied(_)
                | AppError::RecordNotFound { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
