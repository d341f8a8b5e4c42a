use paysheet::core::period::{current_period, period_days, period_for, period_index};
use paysheet::models::day::DayOfWeek;
use paysheet::models::period::{PayPeriod, PeriodAnchor};

mod common;
use common::{anchor, d};

#[test]
fn scenario_a_first_period() {
    let p = current_period(anchor(), d("2025-01-20"));
    assert_eq!(p.start(), d("2025-01-14"));
    assert_eq!(p.end(), d("2025-01-27"));
}

#[test]
fn scenario_b_second_period() {
    let p = current_period(anchor(), d("2025-01-28"));
    assert_eq!(p.start(), d("2025-01-28"));
    assert_eq!(p.end(), d("2025-02-10"));
}

#[test]
fn boundaries_are_inclusive() {
    assert_eq!(current_period(anchor(), d("2025-01-14")).start(), d("2025-01-14"));
    assert_eq!(current_period(anchor(), d("2025-01-27")).start(), d("2025-01-14"));
}

#[test]
fn dates_before_anchor_fall_in_earlier_periods() {
    let p = current_period(anchor(), d("2025-01-13"));
    assert_eq!(p.start(), d("2024-12-31"));
    assert_eq!(p.end(), d("2025-01-13"));

    let p = current_period(anchor(), d("2024-12-31"));
    assert_eq!(p.start(), d("2024-12-31"));
    assert_eq!(period_index(anchor(), &p), -1);
}

#[test]
fn periods_tile_and_are_deterministic() {
    let mut day = d("2024-06-01");
    while day < d("2026-06-01") {
        let p = current_period(anchor(), day);
        assert_eq!(p, current_period(anchor(), day));
        assert!(p.contains(day));
        assert_eq!((p.end() - p.start()).num_days(), 13);
        assert_eq!((p.start() - anchor()).num_days().rem_euclid(14), 0);
        day = day.succ_opt().expect("next day");
    }
}

#[test]
fn next_and_previous_are_adjacent() {
    let p = PayPeriod::starting(anchor());
    assert_eq!(p.next().start(), d("2025-01-28"));
    assert_eq!(p.previous().end(), d("2025-01-13"));
    assert_eq!(p.next().previous(), p);
}

#[test]
fn versioned_anchor_defaults() {
    let a = PeriodAnchor::default();
    assert_eq!(a.version, 1);
    assert_eq!(a.date, anchor());
    assert_eq!(period_for(&a, d("2025-01-20")).start(), anchor());
}

#[test]
fn period_days_are_labelled_from_their_dates() {
    let days = period_days(&PayPeriod::starting(anchor()));
    assert_eq!(days.len(), 14);
    assert_eq!(days[0].date, d("2025-01-14"));
    assert_eq!(days[0].weekday, DayOfWeek::Tuesday);
    assert_eq!(days[5].weekday, DayOfWeek::Sunday);
    assert_eq!(days[13].date, d("2025-01-27"));
    assert_eq!(days[13].weekday, DayOfWeek::Monday);
    assert!(days.iter().all(|e| e.hours.value() == 0.0 && e.note.is_empty()));
}

#[test]
fn period_deserialization_rederives_end() {
    let p: PayPeriod =
        serde_json::from_str(r#"{"start":"2025-01-28","end":"2025-03-01"}"#).expect("period");
    assert_eq!(p.end(), d("2025-02-10"));
}
