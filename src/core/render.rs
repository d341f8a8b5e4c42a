use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::log::audit;
use crate::db::queries::require_record;
use crate::errors::{AppError, AppResult};
use crate::models::record::TimesheetRecord;
use crate::models::role::Caller;
use crate::report::{
    ReportFieldMap, ReportTotals, TemplateSource, load_template, notify_render_success,
    publish_report, render,
};
use crate::utils::colors::{CYAN, RESET, color_for_week_total};
use crate::utils::format_hours;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// High-level business logic for the `render` command.
pub struct RenderLogic;

#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub path: PathBuf,
    pub totals: ReportTotals,
}

/// Field map configured in `cfg`, or the standard one.
pub fn configured_field_map(cfg: &Config) -> AppResult<ReportFieldMap> {
    match cfg.field_map.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => ReportFieldMap::from_file(&expand_tilde(p)),
        _ => Ok(ReportFieldMap::standard()),
    }
}

impl RenderLogic {
    /// Render the record of `employee` for the period starting on
    /// `period_start` and publish it into `out_dir`.
    ///
    /// Nothing is written unless the whole document rendered.
    pub fn apply(
        conn: &Connection,
        cfg: &Config,
        caller: &Caller,
        employee: &str,
        period_start: NaiveDate,
        out_dir: &Path,
    ) -> AppResult<RenderOutcome> {
        let scope = ListLogic::scope(conn, caller)?;
        let stored = require_record(conn, employee, period_start)?;

        if !scope.matches(&stored.record) {
            return Err(AppError::AccessDenied(format!(
                "caller limited to {} cannot read the timesheet of employee {}",
                scope.describe(),
                employee.trim()
            )));
        }

        let template = load_template(&TemplateSource::from_config(cfg.template.as_deref()))?;
        let field_map = configured_field_map(cfg)?;

        let rendered = render(&stored.record, &field_map, &template)?;
        let path = publish_report(out_dir, &stored.record, &rendered.document)?;

        audit(
            conn,
            "render",
            &format!("{}@{}", stored.record.employee.number, period_start),
            &format!("report written to {}", path.display()),
        );

        notify_render_success(&path);
        print_totals(&stored.record, &rendered.totals);

        Ok(RenderOutcome {
            path,
            totals: rendered.totals,
        })
    }
}

fn print_totals(record: &TimesheetRecord, totals: &ReportTotals) {
    println!(
        "{}{} ({}){} {}",
        CYAN,
        record.employee.full_name(),
        record.employee.number,
        RESET,
        record.period
    );
    for week in 0..2 {
        let hours = totals.week(week);
        println!(
            "  Week {}: {}{}{}",
            week + 1,
            color_for_week_total(hours),
            format_hours(hours),
            RESET
        );
    }
    println!("  Total:  {}", format_hours(totals.grand));
}
