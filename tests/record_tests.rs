use paysheet::core::record::{BuildContext, build_record, build_record_with};
use paysheet::errors::AppError;
use paysheet::models::day::{DayOfWeek, Hours};
use paysheet::models::form::RawTimesheetForm;
use paysheet::models::record::{Classification, date_in_window};
use paysheet::models::role::Role;
use serde_json::json;

mod common;
use common::{d, first_period, full_form_json, sample_record};

fn form(value: serde_json::Value) -> RawTimesheetForm {
    serde_json::from_value(value).expect("form")
}

fn with_week1_sunday(hours: serde_json::Value) -> RawTimesheetForm {
    let mut v = full_form_json("E100", "ops");
    v["week1"]["sun"]["hours"] = hours;
    form(v)
}

fn sunday_hours(f: &RawTimesheetForm) -> f64 {
    let record = build_record(f, &first_period()).expect("valid");
    record.weeks[0].day(DayOfWeek::Sunday).hours.value()
}

#[test]
fn hours_are_clamped_not_rejected() {
    assert_eq!(sunday_hours(&with_week1_sunday(json!(-5))), 0.0);
    assert_eq!(sunday_hours(&with_week1_sunday(json!(30))), 24.0);
    assert_eq!(sunday_hours(&with_week1_sunday(json!("abc"))), 0.0);
    assert_eq!(sunday_hours(&with_week1_sunday(json!("7.5"))), 7.5);
    assert_eq!(sunday_hours(&with_week1_sunday(json!(""))), 0.0);
}

#[test]
fn hours_type_clamps_on_every_path() {
    assert_eq!(Hours::new(f64::NAN).value(), 0.0);
    assert_eq!(Hours::parse_lenient(" 12 ").value(), 12.0);
    let h: Hours = serde_json::from_str("99").expect("hours");
    assert_eq!(h.value(), 24.0);
}

#[test]
fn scenario_c_totals() {
    let record = sample_record("E100", "ops");
    assert_eq!(record.week_total(0), 40.0);
    assert_eq!(record.week_total(1), 40.0);
    assert_eq!(record.grand_total(), 80.0);

    let sum: f64 = record
        .days_chronological()
        .iter()
        .map(|e| e.hours.value())
        .sum();
    assert_eq!(sum, record.grand_total());
}

#[test]
fn record_carries_identity_and_compensation() {
    let record = sample_record("E100", "ops");
    assert_eq!(record.employee.full_name(), "Ada WorkerE100");
    assert_eq!(record.employee.role, Role::Employee);
    assert_eq!(record.group(), Some("ops"));
    assert_eq!(record.compensation.hourly_rate, 22.5);
    assert_eq!(record.compensation.classification, Classification::Casual);
    assert_eq!(record.cost_centre.account.as_deref(), Some("5120"));
    assert_eq!(record.cost_centre.project, None);
    assert_eq!(
        record.weeks[0].day(DayOfWeek::Monday).note,
        "site visit".to_string()
    );
}

#[test]
fn day_dates_follow_their_weekday_inside_the_week() {
    let record = sample_record("E100", "ops");
    // period starts Tuesday 2025-01-14
    assert_eq!(record.weeks[0].day(DayOfWeek::Tuesday).date, d("2025-01-14"));
    assert_eq!(record.weeks[0].day(DayOfWeek::Sunday).date, d("2025-01-19"));
    assert_eq!(record.weeks[0].day(DayOfWeek::Monday).date, d("2025-01-20"));
    assert_eq!(record.weeks[1].day(DayOfWeek::Tuesday).date, d("2025-01-21"));
    assert_eq!(record.weeks[1].day(DayOfWeek::Monday).date, d("2025-01-27"));

    for week in &record.weeks {
        for (i, day) in week.days.iter().enumerate() {
            assert_eq!(day.weekday.index(), i);
            assert!(record.period.contains(day.date));
        }
    }
    assert_eq!(record.days_chronological().len(), 14);
}

#[test]
fn date_in_window_wraps_within_seven_days() {
    let start = d("2025-01-14");
    assert_eq!(date_in_window(start, DayOfWeek::Tuesday), start);
    assert_eq!(date_in_window(start, DayOfWeek::Saturday), d("2025-01-18"));
    assert_eq!(date_in_window(start, DayOfWeek::Sunday), d("2025-01-19"));
    assert_eq!(date_in_window(start, DayOfWeek::Monday), d("2025-01-20"));
}

#[test]
fn all_problems_are_reported_together() {
    let f = form(json!({
        "firstName": "",
        "hourlyRate": "-3",
        "week1": { "funday": { "hours": "8" } }
    }));

    match build_record(&f, &first_period()) {
        Err(AppError::Validation(problems)) => {
            let all = problems.join("\n");
            assert!(all.contains("first name is required"), "{all}");
            assert!(all.contains("last name is required"), "{all}");
            assert!(all.contains("employee number is required"), "{all}");
            assert!(all.contains("hourly rate"), "{all}");
            assert!(all.contains("isCasual"), "{all}");
            assert!(all.contains("funday"), "{all}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn empty_weeks_are_rejected() {
    let mut v = full_form_json("E100", "ops");
    v["week1"] = json!({});
    v["week2"] = json!({ "mon": { "hours": "", "info": "  " } });
    let err = build_record(&form(v), &first_period()).expect_err("no hours");
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn declared_period_start_must_match() {
    let mut v = full_form_json("E100", "ops");
    v["payPeriodStartDate"] = json!("2025-01-28");
    let err = build_record(&form(v.clone()), &first_period()).expect_err("mismatch");
    assert!(err.to_string().contains("does not match"), "{err}");

    v["payPeriodStartDate"] = json!("2025-01-14");
    assert!(build_record(&form(v), &first_period()).is_ok());
}

#[test]
fn unknown_role_is_a_validation_problem() {
    let mut v = full_form_json("E100", "ops");
    v["role"] = json!("overlord");
    assert!(matches!(
        build_record(&form(v.clone()), &first_period()),
        Err(AppError::Validation(_))
    ));

    v["role"] = json!("Supervisor");
    let record = build_record(&form(v), &first_period()).expect("valid");
    assert_eq!(record.employee.role, Role::Supervisor);
}

#[test]
fn context_is_recorded() {
    let ctx = BuildContext {
        anchor_version: 3,
        submitted_on: Some(d("2025-01-20")),
    };
    let record = build_record_with(
        &form(full_form_json("E100", "ops")),
        &first_period(),
        &ctx,
    )
    .expect("valid");
    assert_eq!(record.anchor_version, 3);
    assert_eq!(record.submitted_on, Some(d("2025-01-20")));
}

#[test]
fn record_survives_storage_as_json() {
    let record = sample_record("E100", "ops");
    let doc = serde_json::to_string(&record).expect("serialize");
    let back: paysheet::models::record::TimesheetRecord =
        serde_json::from_str(&doc).expect("deserialize");
    assert_eq!(back, record);
}
