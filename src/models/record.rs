use super::day::{DayEntry, DayOfWeek};
use super::period::PayPeriod;
use super::role::Role;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeIdentity {
    pub first_name: String,
    pub last_name: String,
    pub number: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl EmployeeIdentity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Accounting codes printed in the header block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostCentre {
    #[serde(default)]
    pub fund: Option<String>,
    #[serde(default)]
    pub dept: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Casual,
    Regular,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Casual => "Casual",
            Classification::Regular => "Regular",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compensation {
    pub hourly_rate: f64,
    pub classification: Classification,
    #[serde(default)]
    pub contract_end: Option<NaiveDate>,
}

/// Seven days, always Sunday through Saturday.
///
/// `days[i].weekday == DayOfWeek::ALL[i]`. The date held at each index is
/// the date with that weekday inside the week's 7-day window, so when a
/// period does not start on a Sunday the array is not in calendar order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub days: [DayEntry; 7],
}

impl Week {
    /// Empty week for the 7-day window beginning at `window_start`.
    pub fn for_window(window_start: NaiveDate) -> Self {
        let days = DayOfWeek::ALL.map(|wd| {
            let date = date_in_window(window_start, wd);
            DayEntry::placeholder(date)
        });
        Self { days }
    }

    pub fn day(&self, weekday: DayOfWeek) -> &DayEntry {
        &self.days[weekday.index()]
    }

    pub fn day_mut(&mut self, weekday: DayOfWeek) -> &mut DayEntry {
        &mut self.days[weekday.index()]
    }

    pub fn total(&self) -> f64 {
        self.days.iter().map(|d| d.hours.value()).sum()
    }
}

/// Date carrying `weekday` within `[window_start, window_start + 6]`.
pub fn date_in_window(window_start: NaiveDate, weekday: DayOfWeek) -> NaiveDate {
    let first = DayOfWeek::of(window_start).index() as i64;
    let offset = (weekday.index() as i64 - first).rem_euclid(7) as u64;
    window_start
        .checked_add_days(Days::new(offset))
        .unwrap_or(NaiveDate::MAX)
}

/// One employee's submission for one pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRecord {
    pub employee: EmployeeIdentity,
    #[serde(default)]
    pub cost_centre: CostCentre,
    pub compensation: Compensation,
    pub period: PayPeriod,
    pub anchor_version: u32,
    pub weeks: [Week; 2],
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub submitted_on: Option<NaiveDate>,
}

impl TimesheetRecord {
    pub fn week_total(&self, week: usize) -> f64 {
        self.weeks.get(week).map(Week::total).unwrap_or(0.0)
    }

    pub fn grand_total(&self) -> f64 {
        self.week_total(0) + self.week_total(1)
    }

    pub fn group(&self) -> Option<&str> {
        self.employee.group.as_deref()
    }

    /// Days in calendar order, week 1 then week 2.
    pub fn days_chronological(&self) -> Vec<&DayEntry> {
        let mut days: Vec<&DayEntry> = self.weeks.iter().flat_map(|w| w.days.iter()).collect();
        days.sort_by_key(|d| d.date);
        days
    }
}
