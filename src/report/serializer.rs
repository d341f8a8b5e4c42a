//! Fill the timesheet template from a record.

use crate::errors::{AppError, AppResult};
use crate::models::record::{Classification, TimesheetRecord};
use crate::report::document::Document;
use crate::report::field_map::{DayAttr, FieldKey, ReportFieldMap};
use crate::utils::formatting::{format_hours, format_money, truncate_to_width};
use serde::Serialize;

/// Hour totals printed on the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportTotals {
    pub week1: f64,
    pub week2: f64,
    pub grand: f64,
}

impl ReportTotals {
    pub fn of(record: &TimesheetRecord) -> Self {
        let week1 = record.week_total(0);
        let week2 = record.week_total(1);
        Self {
            week1,
            week2,
            grand: week1 + week2,
        }
    }

    pub fn week(&self, week: usize) -> f64 {
        if week == 0 { self.week1 } else { self.week2 }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub document: Document,
    pub totals: ReportTotals,
}

/// Place every mapped field of `record` onto a copy of `template`.
///
/// All keys are resolved before anything is placed; a single unresolvable
/// key aborts the whole render, so a partially filled report never exists.
pub fn render(
    record: &TimesheetRecord,
    field_map: &ReportFieldMap,
    template: &Document,
) -> AppResult<RenderedReport> {
    template.ensure_template_shape()?;

    if field_map.version != template.version {
        return Err(AppError::FieldMapInvalid(format!(
            "field map version {} does not match template version {}",
            field_map.version, template.version
        )));
    }

    let totals = ReportTotals::of(record);

    let mut placements = Vec::with_capacity(field_map.fields.len());
    for field in &field_map.fields {
        let key = FieldKey::parse(&field.key)
            .ok_or_else(|| AppError::UnresolvedField(field.key.clone()))?;
        if field.page >= template.pages.len() {
            return Err(AppError::FieldMapInvalid(format!(
                "field '{}' targets missing page {}",
                field.key, field.page
            )));
        }

        let mut text = resolve(key, record, &totals);
        if let Some(width) = field.max_width {
            text = truncate_to_width(&text, width);
        }
        placements.push((field, text));
    }

    let mut document = template.clone();
    for (field, text) in placements {
        document.pages[field.page].place(field.x, field.y, field.font_size, text);
    }

    Ok(RenderedReport { document, totals })
}

/// Text for `key`. Absent optional values resolve to an empty string.
pub fn resolve(key: FieldKey, record: &TimesheetRecord, totals: &ReportTotals) -> String {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    let mark = |c: Classification| {
        if record.compensation.classification == c {
            "X".to_string()
        } else {
            String::new()
        }
    };

    match key {
        FieldKey::EmployeeName => record.employee.full_name(),
        FieldKey::FirstName => record.employee.first_name.clone(),
        FieldKey::LastName => record.employee.last_name.clone(),
        FieldKey::EmployeeNumber => record.employee.number.clone(),
        FieldKey::Group => opt(&record.employee.group),
        FieldKey::Fund => opt(&record.cost_centre.fund),
        FieldKey::Dept => opt(&record.cost_centre.dept),
        FieldKey::Program => opt(&record.cost_centre.program),
        FieldKey::Account => opt(&record.cost_centre.account),
        FieldKey::Project => opt(&record.cost_centre.project),
        FieldKey::HourlyRate => format_money(record.compensation.hourly_rate),
        FieldKey::Classification => record.compensation.classification.label().to_string(),
        FieldKey::CasualMark => mark(Classification::Casual),
        FieldKey::RegularMark => mark(Classification::Regular),
        FieldKey::ContractEndDate => record
            .compensation
            .contract_end
            .map(|d| d.to_string())
            .unwrap_or_default(),
        FieldKey::PeriodStart => record.period.start().to_string(),
        FieldKey::PeriodEnd => record.period.end().to_string(),
        FieldKey::SubmittedOn => record
            .submitted_on
            .map(|d| d.to_string())
            .unwrap_or_default(),
        FieldKey::Notes => record.notes.replace(['\n', '\r'], " "),
        FieldKey::Day { week, day, attr } => {
            let Some(entry) = record.weeks.get(week).map(|w| w.day(day)) else {
                return String::new();
            };
            match attr {
                DayAttr::Date => entry.date.format("%B %-d").to_string(),
                DayAttr::Weekday => entry.weekday.label().to_string(),
                DayAttr::Hours => format_hours(entry.hours.value()),
                DayAttr::Note => entry.note.replace(['\n', '\r'], " "),
            }
        }
        FieldKey::WeekTotal(week) => format_hours(totals.week(week)),
        FieldKey::GrandTotal => format_hours(totals.grand),
    }
}
