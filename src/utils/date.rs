//! Calendar convention and date parsing.

use crate::errors::{AppError, AppResult};
use chrono::{FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The one calendar in which "today" is decided.
///
/// Period boundaries and weekday labels are both computed from the
/// resulting `NaiveDate`, so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Calendar {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl Calendar {
    pub fn today(&self) -> NaiveDate {
        match self {
            Calendar::Local => Local::now().date_naive(),
            Calendar::Utc => Utc::now().date_naive(),
            Calendar::Fixed(offset) => Utc::now().with_timezone(offset).date_naive(),
        }
    }
}

impl FromStr for Calendar {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Calendar::Local),
            "utc" | "z" => Ok(Calendar::Utc),
            other => parse_offset(other)
                .map(Calendar::Fixed)
                .ok_or_else(|| AppError::Config(format!("invalid calendar '{s}'"))),
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calendar::Local => f.write_str("local"),
            Calendar::Utc => f.write_str("utc"),
            Calendar::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl Serialize for Calendar {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Calendar {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// "+HH:MM" / "-HH:MM"
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (h, m) = rest.split_once(':')?;
    let h: i32 = h.parse().ok()?;
    let m: i32 = m.parse().ok()?;
    if !(0..=23).contains(&h) || !(0..=59).contains(&m) {
        return None;
    }
    FixedOffset::east_opt(sign * (h * 3600 + m * 60))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--date` flag, falling back to today in `calendar`.
pub fn resolve_date(arg: Option<&str>, calendar: &Calendar) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(calendar.today()),
    }
}
