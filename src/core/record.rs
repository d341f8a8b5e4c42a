//! Turning a raw submission form into a `TimesheetRecord`.

use crate::errors::{AppError, AppResult};
use crate::models::day::DayOfWeek;
use crate::models::form::{RawTimesheetForm, RawWeek};
use crate::models::period::PayPeriod;
use crate::models::record::{
    Classification, Compensation, CostCentre, EmployeeIdentity, TimesheetRecord, Week,
};
use crate::models::role::Role;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

const MAX_NAME_LEN: usize = 100;

/// Values attached to a record that do not come from the form itself.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    pub anchor_version: u32,
    pub submitted_on: Option<NaiveDate>,
}

/// Build a record for `period` with no anchor version or submission date.
pub fn build_record(form: &RawTimesheetForm, period: &PayPeriod) -> AppResult<TimesheetRecord> {
    build_record_with(form, period, &BuildContext::default())
}

/// Validate `form` and build the canonical record for `period`.
///
/// Every problem is collected and reported in a single `Validation` error.
/// Hours are never a validation problem: they are clamped into `0..=24`.
pub fn build_record_with(
    form: &RawTimesheetForm,
    period: &PayPeriod,
    ctx: &BuildContext,
) -> AppResult<TimesheetRecord> {
    let mut problems: Vec<String> = Vec::new();

    let first_name = required_text(&form.first_name, "first name", &mut problems);
    let last_name = required_text(&form.last_name, "last name", &mut problems);
    let number = required_text(&form.employee_number, "employee number", &mut problems);

    let role = match form.role.as_deref().map(str::trim) {
        None | Some("") => Role::Employee,
        Some(r) => match parse_role(r) {
            Some(role) => role,
            None => {
                problems.push(format!("unknown role '{r}'"));
                Role::Employee
            }
        },
    };

    let hourly_rate = match form.hourly_rate.as_ref().and_then(|v| v.as_number()) {
        Some(rate) if rate.is_finite() && rate > 0.0 => rate,
        Some(_) => {
            problems.push("hourly rate must be greater than 0".into());
            0.0
        }
        None => {
            problems.push("hourly rate is required".into());
            0.0
        }
    };

    let classification = match form.is_casual {
        Some(true) => Classification::Casual,
        Some(false) => Classification::Regular,
        None => {
            problems.push("employment classification (isCasual) is required".into());
            Classification::Regular
        }
    };

    let contract_end = optional_date(
        form.contract_end_date.as_deref(),
        "contract end date",
        &mut problems,
    );

    if let Some(declared) = optional_date(
        form.pay_period_start_date.as_deref(),
        "pay period start date",
        &mut problems,
    ) && declared != period.start()
    {
        problems.push(format!(
            "pay period start {} does not match the current period ({})",
            declared, period
        ));
    }

    check_day_keys(&form.week1, "week1", &mut problems);
    check_day_keys(&form.week2, "week2", &mut problems);

    let filled_weeks = [&form.week1, &form.week2]
        .iter()
        .filter(|w| w.values().any(|d| !d.is_empty()))
        .count();
    if filled_weeks == 0 {
        problems.push("at least one week must contain hours or notes".into());
    }

    if !problems.is_empty() {
        return Err(AppError::Validation(problems));
    }

    let weeks = [0usize, 1].map(|w| {
        let mut week = Week::for_window(period.week_start(w));
        for weekday in DayOfWeek::ALL {
            if let Some(raw) = form.day(w, weekday) {
                let entry = week.day_mut(weekday);
                entry.hours = raw.hours.as_ref().map(|h| h.to_hours()).unwrap_or_default();
                entry.note = raw.info.as_deref().unwrap_or_default().trim().to_string();
            }
        }
        week
    });

    Ok(TimesheetRecord {
        employee: EmployeeIdentity {
            first_name,
            last_name,
            number,
            group: non_blank(form.group.as_deref()),
            role,
        },
        cost_centre: CostCentre {
            fund: non_blank(form.fund.as_deref()),
            dept: non_blank(form.dept.as_deref()),
            program: non_blank(form.program.as_deref()),
            account: non_blank(form.account.as_deref()),
            project: non_blank(form.project.as_deref()),
        },
        compensation: Compensation {
            hourly_rate,
            classification,
            contract_end,
        },
        period: *period,
        anchor_version: ctx.anchor_version,
        weeks,
        notes: form.notes.trim().to_string(),
        submitted_on: ctx.submitted_on,
    })
}

pub fn parse_role(s: &str) -> Option<Role> {
    match s.trim().to_ascii_lowercase().as_str() {
        "admin" => Some(Role::Admin),
        "supervisor" => Some(Role::Supervisor),
        "employee" => Some(Role::Employee),
        _ => None,
    }
}

fn required_text(value: &str, label: &str, problems: &mut Vec<String>) -> String {
    let v = value.trim();
    if v.is_empty() {
        problems.push(format!("{label} is required"));
    } else if v.chars().count() > MAX_NAME_LEN {
        problems.push(format!("{label} exceeds {MAX_NAME_LEN} characters"));
    }
    v.to_string()
}

fn optional_date(
    value: Option<&str>,
    label: &str,
    problems: &mut Vec<String>,
) -> Option<NaiveDate> {
    let v = value.map(str::trim).filter(|s| !s.is_empty())?;
    match parse_date(v) {
        Some(d) => Some(d),
        None => {
            problems.push(format!("{label} '{v}' is not a valid YYYY-MM-DD date"));
            None
        }
    }
}

fn check_day_keys(week: &RawWeek, label: &str, problems: &mut Vec<String>) {
    for key in week.keys() {
        if !DayOfWeek::ALL.iter().any(|d| d.key() == key) {
            problems.push(format!("{label}: unknown day '{key}'"));
        }
    }
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
