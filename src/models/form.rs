//! Raw submission form as collected by the UI layer.
//! Nothing here is validated yet; see `core::record::build_record`.

use super::day::{DayOfWeek, Hours};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A form value that may arrive as a number or as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Number(_) => false,
            RawValue::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn to_hours(&self) -> Hours {
        match self {
            RawValue::Number(n) => Hours::new(*n),
            RawValue::Text(s) => Hours::parse_lenient(s),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
    #[serde(default)]
    pub hours: Option<RawValue>,
    #[serde(default)]
    pub info: Option<String>,
}

impl RawDay {
    pub fn is_empty(&self) -> bool {
        self.hours.as_ref().is_none_or(RawValue::is_blank)
            && self.info.as_deref().is_none_or(|s| s.trim().is_empty())
    }
}

/// Days keyed by "sun" … "sat".
pub type RawWeek = BTreeMap<String, RawDay>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimesheetForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, alias = "wNum")]
    pub employee_number: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub fund: Option<String>,
    #[serde(default)]
    pub dept: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default, alias = "acct")]
    pub account: Option<String>,
    #[serde(default)]
    pub project: Option<String>,

    #[serde(default)]
    pub hourly_rate: Option<RawValue>,
    #[serde(default)]
    pub is_casual: Option<bool>,
    #[serde(default)]
    pub contract_end_date: Option<String>,

    #[serde(default)]
    pub pay_period_start_date: Option<String>,

    #[serde(default)]
    pub week1: RawWeek,
    #[serde(default)]
    pub week2: RawWeek,

    #[serde(default)]
    pub notes: String,
}

impl RawTimesheetForm {
    /// Read a form from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            other => Err(AppError::Validation(vec![format!(
                "unsupported form file extension '{other}' (expected json, yaml or yml)"
            )])),
        }
    }

    pub fn week(&self, week: usize) -> Option<&RawWeek> {
        match week {
            0 => Some(&self.week1),
            1 => Some(&self.week2),
            _ => None,
        }
    }

    pub fn day(&self, week: usize, weekday: DayOfWeek) -> Option<&RawDay> {
        self.week(week)?.get(weekday.key())
    }
}
