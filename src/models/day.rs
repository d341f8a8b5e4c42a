use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, Sunday first.
///
/// The discriminant is the index of the day inside a `Week`
/// (Sunday = 0 … Saturday = 6) and the row it occupies on the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    /// Full English name ("Sunday").
    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }

    /// Three-letter key used by submission forms ("sun").
    pub fn key(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sun",
            DayOfWeek::Monday => "mon",
            DayOfWeek::Tuesday => "tue",
            DayOfWeek::Wednesday => "wed",
            DayOfWeek::Thursday => "thu",
            DayOfWeek::Friday => "fri",
            DayOfWeek::Saturday => "sat",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(w: Weekday) -> Self {
        // num_days_from_sunday() is always 0..=6
        Self::ALL[w.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const MAX_DAILY_HOURS: f64 = 24.0;

/// Hours worked in a single day, always within `0..=24`.
///
/// Construction never fails: out-of-range values are clamped and anything
/// that is not a number becomes 0. Deserialization goes through the same
/// path, so a stored document cannot smuggle in an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Hours(f64);

impl Hours {
    pub const ZERO: Hours = Hours(0.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Hours(0.0)
        } else {
            Hours(value.clamp(0.0, MAX_DAILY_HOURS))
        }
    }

    /// Coerce a raw form value. Blank or non-numeric input is 0.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim().parse::<f64>().map(Hours::new).unwrap_or(Hours::ZERO)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Hours {
    fn from(v: f64) -> Self {
        Hours::new(v)
    }
}

impl From<Hours> for f64 {
    fn from(h: Hours) -> Self {
        h.0
    }
}

/// One calendar day of a pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub weekday: DayOfWeek,
    pub date: NaiveDate,
    pub hours: Hours,
    #[serde(default)]
    pub note: String,
}

impl DayEntry {
    /// Empty entry for a date: 0 hours, no note.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            weekday: DayOfWeek::of(date),
            date,
            hours: Hours::ZERO,
            note: String::new(),
        }
    }
}
