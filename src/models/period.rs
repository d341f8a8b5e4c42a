use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of calendar days in a pay period.
pub const PERIOD_DAYS: i64 = 14;

/// A known period start from which every other period is derived.
///
/// `version` increases each time the anchor is deliberately moved; records
/// remember the version they were computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAnchor {
    pub version: u32,
    pub date: NaiveDate,
}

impl Default for PeriodAnchor {
    fn default() -> Self {
        Self {
            version: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap_or_default(),
        }
    }
}

/// A 14-day inclusive window: `end - start == 13 days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StoredPeriod")]
pub struct PayPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

/// Wire shape of a period. The end date is re-derived from the start on load.
#[derive(Deserialize)]
struct StoredPeriod {
    start: NaiveDate,
    #[allow(dead_code)]
    end: Option<NaiveDate>,
}

impl From<StoredPeriod> for PayPeriod {
    fn from(p: StoredPeriod) -> Self {
        PayPeriod::starting(p.start)
    }
}

impl PayPeriod {
    /// Period beginning on `start`.
    pub fn starting(start: NaiveDate) -> Self {
        let end = start
            .checked_add_days(Days::new((PERIOD_DAYS - 1) as u64))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// First day of week 0 or 1.
    pub fn week_start(&self, week: usize) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(7 * week as u64))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn next(&self) -> Self {
        Self::starting(
            self.start
                .checked_add_days(Days::new(PERIOD_DAYS as u64))
                .unwrap_or(NaiveDate::MAX),
        )
    }

    pub fn previous(&self) -> Self {
        Self::starting(
            self.start
                .checked_sub_days(Days::new(PERIOD_DAYS as u64))
                .unwrap_or(NaiveDate::MIN),
        )
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}
