//! Where each record field goes on the two-page timesheet template.
//!
//! The map is static configuration, versioned together with the template:
//! changing one means changing the other. Keys are plain strings so a map
//! can be loaded from YAML; they are parsed into `FieldKey` when a map is
//! validated and again at render time.

use crate::errors::{AppError, AppResult};
use crate::models::day::DayOfWeek;
use crate::report::document::{LAYOUT_VERSION, default_layout_version};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

pub const DEFAULT_FONT_SIZE: f32 = 10.0;

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPlacement {
    pub key: String,
    pub page: usize,
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Longest text (in terminal columns) printed before truncation.
    #[serde(default)]
    pub max_width: Option<usize>,
}

impl FieldPlacement {
    pub fn new(key: FieldKey, page: usize, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            key: key.to_string(),
            page,
            x,
            y,
            font_size,
            max_width: None,
        }
    }

    pub fn truncated_at(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayAttr {
    Date,
    Weekday,
    Hours,
    Note,
}

impl DayAttr {
    fn as_str(self) -> &'static str {
        match self {
            DayAttr::Date => "date",
            DayAttr::Weekday => "weekday",
            DayAttr::Hours => "hours",
            DayAttr::Note => "note",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "date" => Some(DayAttr::Date),
            "weekday" => Some(DayAttr::Weekday),
            "hours" => Some(DayAttr::Hours),
            "note" => Some(DayAttr::Note),
            _ => None,
        }
    }
}

/// Logical name of something printable on the report.
///
/// Weeks are 0-based internally and 1-based in the key text
/// (`week1.day[3].hours` is `Day { week: 0, day: Wednesday, .. }`).
/// Day indices follow `DayOfWeek`: 0 = Sunday … 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    EmployeeName,
    FirstName,
    LastName,
    EmployeeNumber,
    Group,
    Fund,
    Dept,
    Program,
    Account,
    Project,
    HourlyRate,
    Classification,
    CasualMark,
    RegularMark,
    ContractEndDate,
    PeriodStart,
    PeriodEnd,
    SubmittedOn,
    Notes,
    Day {
        week: usize,
        day: DayOfWeek,
        attr: DayAttr,
    },
    WeekTotal(usize),
    GrandTotal,
}

const SIMPLE_KEYS: [(FieldKey, &str); 19] = [
    (FieldKey::EmployeeName, "employeeName"),
    (FieldKey::FirstName, "firstName"),
    (FieldKey::LastName, "lastName"),
    (FieldKey::EmployeeNumber, "employeeNumber"),
    (FieldKey::Group, "group"),
    (FieldKey::Fund, "fund"),
    (FieldKey::Dept, "dept"),
    (FieldKey::Program, "program"),
    (FieldKey::Account, "account"),
    (FieldKey::Project, "project"),
    (FieldKey::HourlyRate, "hourlyRate"),
    (FieldKey::Classification, "classification"),
    (FieldKey::CasualMark, "classification.casual"),
    (FieldKey::RegularMark, "classification.regular"),
    (FieldKey::ContractEndDate, "contractEndDate"),
    (FieldKey::PeriodStart, "periodStart"),
    (FieldKey::PeriodEnd, "periodEnd"),
    (FieldKey::SubmittedOn, "submittedOn"),
    (FieldKey::Notes, "notes"),
];

impl FieldKey {
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Some((key, _)) = SIMPLE_KEYS.iter().find(|(_, name)| *name == s) {
            return Some(*key);
        }
        if s == "grandTotal" {
            return Some(FieldKey::GrandTotal);
        }

        // week{1,2}.total | week{1,2}.day[i].attr
        let rest = s.strip_prefix("week")?;
        let (week_no, rest) = rest.split_once('.')?;
        let week = match week_no {
            "1" => 0,
            "2" => 1,
            _ => return None,
        };

        if rest == "total" {
            return Some(FieldKey::WeekTotal(week));
        }

        let rest = rest.strip_prefix("day[")?;
        let (index, rest) = rest.split_once(']')?;
        // exactly one digit: "+0" or "00" would alias "0"
        let digit = match index.as_bytes() {
            [b] if b.is_ascii_digit() => usize::from(b - b'0'),
            _ => return None,
        };
        let day = DayOfWeek::from_index(digit)?;
        let attr = DayAttr::parse(rest.strip_prefix('.')?)?;

        Some(FieldKey::Day { week, day, attr })
    }

    /// Keys every complete map must place.
    pub fn required() -> Vec<FieldKey> {
        let mut keys = vec![
            FieldKey::EmployeeName,
            FieldKey::EmployeeNumber,
            FieldKey::Group,
            FieldKey::HourlyRate,
            FieldKey::Classification,
            FieldKey::PeriodStart,
            FieldKey::PeriodEnd,
        ];
        for week in 0..2 {
            for day in DayOfWeek::ALL {
                for attr in [DayAttr::Date, DayAttr::Hours, DayAttr::Note] {
                    keys.push(FieldKey::Day { week, day, attr });
                }
            }
            keys.push(FieldKey::WeekTotal(week));
        }
        keys.push(FieldKey::GrandTotal);
        keys
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Day { week, day, attr } => write!(
                f,
                "week{}.day[{}].{}",
                week + 1,
                day.index(),
                attr.as_str()
            ),
            FieldKey::WeekTotal(week) => write!(f, "week{}.total", week + 1),
            FieldKey::GrandTotal => f.write_str("grandTotal"),
            simple => {
                let name = SIMPLE_KEYS
                    .iter()
                    .find(|(k, _)| k == simple)
                    .map(|(_, n)| *n)
                    .unwrap_or("?");
                f.write_str(name)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFieldMap {
    /// Must equal the template's `version`.
    #[serde(default = "default_layout_version")]
    pub version: u32,
    pub fields: Vec<FieldPlacement>,
}

// ---------------------------------------------------------------------
// Standard layout (US Letter, origin bottom-left)
// ---------------------------------------------------------------------
const ROW_H: f32 = 22.0;
const COL_DATE: f32 = 130.0;
const COL_HOURS: f32 = 250.0;
const COL_NOTE: f32 = 310.0;
/// Baseline of the Sunday row of week 1 (page 0) and week 2 (page 1).
const WEEK_FIRST_ROW_Y: [f32; 2] = [540.0, 700.0];

impl ReportFieldMap {
    /// Layout matching the bundled template.
    pub fn standard() -> Self {
        use FieldKey::*;

        let mut fields = vec![
            // identity block
            FieldPlacement::new(EmployeeName, 0, 130.0, 700.0, 11.0).truncated_at(30),
            FieldPlacement::new(EmployeeNumber, 0, 410.0, 700.0, 11.0),
            FieldPlacement::new(Group, 0, 130.0, 680.0, 11.0).truncated_at(30),
            FieldPlacement::new(PeriodStart, 0, 410.0, 680.0, 11.0),
            FieldPlacement::new(PeriodEnd, 0, 495.0, 680.0, 11.0),
            // cost centre
            FieldPlacement::new(Fund, 0, 85.0, 650.0, 9.0).truncated_at(10),
            FieldPlacement::new(Dept, 0, 185.0, 650.0, 9.0).truncated_at(10),
            FieldPlacement::new(Program, 0, 305.0, 650.0, 9.0).truncated_at(10),
            FieldPlacement::new(Account, 0, 400.0, 650.0, 9.0).truncated_at(10),
            FieldPlacement::new(Project, 0, 505.0, 650.0, 9.0).truncated_at(10),
            // compensation
            FieldPlacement::new(HourlyRate, 0, 130.0, 620.0, 11.0),
            FieldPlacement::new(Classification, 0, 300.0, 620.0, 11.0),
            FieldPlacement::new(CasualMark, 0, 403.0, 620.0, 11.0),
            FieldPlacement::new(RegularMark, 0, 473.0, 620.0, 11.0),
            FieldPlacement::new(ContractEndDate, 0, 130.0, 600.0, 11.0),
        ];

        for (week, first_row_y) in WEEK_FIRST_ROW_Y.iter().enumerate() {
            let page = week;
            for day in DayOfWeek::ALL {
                let y = first_row_y - ROW_H * day.index() as f32;
                fields.push(FieldPlacement::new(
                    Day { week, day, attr: DayAttr::Date },
                    page,
                    COL_DATE,
                    y,
                    10.0,
                ));
                fields.push(FieldPlacement::new(
                    Day { week, day, attr: DayAttr::Hours },
                    page,
                    COL_HOURS,
                    y,
                    10.0,
                ));
                fields.push(
                    FieldPlacement::new(
                        Day { week, day, attr: DayAttr::Note },
                        page,
                        COL_NOTE,
                        y,
                        9.0,
                    )
                    .truncated_at(45),
                );
            }
            let total_y = first_row_y - ROW_H * 7.0 - 6.0;
            fields.push(FieldPlacement::new(
                WeekTotal(week),
                page,
                COL_HOURS,
                total_y,
                11.0,
            ));
        }

        fields.push(FieldPlacement::new(GrandTotal, 1, COL_HOURS, 505.0, 12.0));
        fields.push(FieldPlacement::new(Notes, 1, 50.0, 452.0, 9.0).truncated_at(95));
        fields.push(FieldPlacement::new(SubmittedOn, 1, 120.0, 400.0, 10.0));

        Self {
            version: LAYOUT_VERSION,
            fields,
        }
    }

    /// Load a map from YAML and validate it.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::FieldMapInvalid(format!("cannot read {}: {e}", path.display()))
        })?;
        let map: ReportFieldMap = serde_yaml::from_str(&content)?;
        map.validate()?;
        Ok(map)
    }

    /// Checks: pages are 0 or 1, every key parses and is written in its
    /// canonical form, no key appears twice, every required key is present.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen: HashSet<FieldKey> = HashSet::new();

        for f in &self.fields {
            if f.page > 1 {
                return Err(AppError::FieldMapInvalid(format!(
                    "field '{}' is on page {}, template has pages 0 and 1",
                    f.key, f.page
                )));
            }
            let key = FieldKey::parse(&f.key)
                .ok_or_else(|| AppError::UnresolvedField(f.key.clone()))?;
            if key.to_string() != f.key.trim() {
                return Err(AppError::FieldMapInvalid(format!(
                    "field '{}' should be written '{key}'",
                    f.key
                )));
            }
            if !seen.insert(key) {
                return Err(AppError::FieldMapInvalid(format!(
                    "field '{key}' is placed more than once"
                )));
            }
        }

        let missing: Vec<String> = FieldKey::required()
            .into_iter()
            .filter(|k| !seen.contains(k))
            .map(|k| k.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::FieldMapInvalid(format!(
                "missing fields: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldPlacement> {
        let wanted = key.to_string();
        self.fields.iter().find(|f| f.key.trim() == wanted)
    }
}
