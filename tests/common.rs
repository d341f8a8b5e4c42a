#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use paysheet::models::form::RawTimesheetForm;
use paysheet::models::period::PayPeriod;
use paysheet::models::record::TimesheetRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated HOME with its own database path.
pub struct TestEnv {
    pub home: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("temp home");
        let db = home
            .path()
            .join("paysheet_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { home, db }
    }

    /// `paysheet --db <db>` running with HOME pointed at the temp dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("paysheet");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .args(["--db", &self.db]);
        cmd
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.home.path().join("reports")
    }

    /// Write `form` as JSON into the temp dir and return its path.
    pub fn write_form(&self, name: &str, form: &serde_json::Value) -> String {
        let path = self.home.path().join(format!("{name}.json"));
        fs::write(&path, serde_json::to_string_pretty(form).expect("json")).expect("write form");
        path.to_string_lossy().to_string()
    }

    pub fn submit(&self, form: &serde_json::Value, date: &str) {
        let file = self.write_form("form", form);
        self.cmd()
            .args(["submit", "--file", &file, "--date", date])
            .assert()
            .success();
    }
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn anchor() -> NaiveDate {
    d("2025-01-14")
}

/// Form with 8 hours Sunday to Thursday in both weeks.
pub fn full_form_json(number: &str, group: &str) -> serde_json::Value {
    let week = serde_json::json!({
        "sun": { "hours": "8" },
        "mon": { "hours": "8", "info": "site visit" },
        "tue": { "hours": 8 },
        "wed": { "hours": "8" },
        "thu": { "hours": "8" },
        "fri": { "hours": "0" },
        "sat": { "hours": "" }
    });
    serde_json::json!({
        "firstName": "Ada",
        "lastName": format!("Worker{number}"),
        "employeeNumber": number,
        "group": group,
        "fund": "10",
        "dept": "4400",
        "program": "210",
        "acct": "5120",
        "hourlyRate": "22.5",
        "isCasual": true,
        "notes": "regular fortnight",
        "week1": week.clone(),
        "week2": week
    })
}

pub fn full_form(number: &str, group: &str) -> RawTimesheetForm {
    serde_json::from_value(full_form_json(number, group)).expect("form")
}

/// Period containing 2025-01-20 (2025-01-14 → 2025-01-27).
pub fn first_period() -> PayPeriod {
    PayPeriod::starting(anchor())
}

pub fn sample_record(number: &str, group: &str) -> TimesheetRecord {
    paysheet::core::record::build_record(&full_form(number, group), &first_period())
        .expect("valid record")
}

pub fn pdf_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|it| {
            it.filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().to_string())
                .filter(|n| n.ends_with(".pdf"))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
