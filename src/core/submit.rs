use crate::config::Config;
use crate::core::period::period_for;
use crate::core::record::{BuildContext, build_record_with};
use crate::db::log::audit;
use crate::db::queries::{SaveOutcome, upsert_record};
use crate::errors::AppResult;
use crate::models::form::RawTimesheetForm;
use crate::models::record::TimesheetRecord;
use crate::ui::messages::success;
use crate::utils::format_hours;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;

/// High-level business logic for the `submit` command.
pub struct SubmitLogic;

#[derive(Debug, Clone)]
pub struct Submission {
    pub record: TimesheetRecord,
    pub outcome: SaveOutcome,
}

impl SubmitLogic {
    /// Read a form from `form_path` and store it for the period containing `today`.
    pub fn apply(
        conn: &Connection,
        cfg: &Config,
        form_path: &Path,
        today: NaiveDate,
    ) -> AppResult<Submission> {
        let form = RawTimesheetForm::from_file(form_path)?;
        Self::apply_form(conn, cfg, &form, today)
    }

    pub fn apply_form(
        conn: &Connection,
        cfg: &Config,
        form: &RawTimesheetForm,
        today: NaiveDate,
    ) -> AppResult<Submission> {
        let period = period_for(&cfg.anchor, today);
        let ctx = BuildContext {
            anchor_version: cfg.anchor.version,
            submitted_on: Some(today),
        };

        let record = build_record_with(form, &period, &ctx)?;
        let outcome = upsert_record(conn, &record)?;

        let target = format!("{}@{}", record.employee.number, period.start());
        audit(
            conn,
            outcome.operation(),
            &target,
            &format!(
                "{} submitted {}h for {}",
                record.employee.full_name(),
                format_hours(record.grand_total()),
                period
            ),
        );

        match outcome {
            SaveOutcome::Inserted => success(format!(
                "Timesheet stored for {} ({}), period {}.",
                record.employee.full_name(),
                record.employee.number,
                period
            )),
            SaveOutcome::Amended => success(format!(
                "Timesheet amended for {} ({}), period {}.",
                record.employee.full_name(),
                record.employee.number,
                period
            )),
        }

        Ok(Submission { record, outcome })
    }
}
