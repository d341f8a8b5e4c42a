//! Pay-period arithmetic.
//!
//! Everything here works on plain calendar dates. "Today" is resolved once,
//! by the caller, in the configured calendar convention
//! (`utils::date::Calendar`); weekday labels are derived from the same
//! dates, so boundaries and labels always agree.

use crate::models::day::DayEntry;
use crate::models::period::{PERIOD_DAYS, PayPeriod, PeriodAnchor};
use chrono::{Days, NaiveDate};

/// The period containing `today`.
///
/// Starts at `anchor + 14 * k` with `k = floor((today - anchor) / 14)`;
/// dates before the anchor land in earlier periods (floor, not truncation).
pub fn current_period(anchor: NaiveDate, today: NaiveDate) -> PayPeriod {
    let elapsed = (today - anchor).num_days();
    let k = elapsed.div_euclid(PERIOD_DAYS);
    let offset = k * PERIOD_DAYS;

    let start = if offset >= 0 {
        anchor.checked_add_days(Days::new(offset as u64))
    } else {
        anchor.checked_sub_days(Days::new(offset.unsigned_abs()))
    };

    PayPeriod::starting(start.unwrap_or(today))
}

/// Same as `current_period`, taking a versioned anchor.
pub fn period_for(anchor: &PeriodAnchor, today: NaiveDate) -> PayPeriod {
    current_period(anchor.date, today)
}

/// The 14 days of `period`, in calendar order, each with 0 hours.
pub fn period_days(period: &PayPeriod) -> Vec<DayEntry> {
    period
        .start()
        .iter_days()
        .take(PERIOD_DAYS as usize)
        .map(DayEntry::placeholder)
        .collect()
}

/// Whole periods between the anchor's period and `period` (negative before it).
pub fn period_index(anchor: NaiveDate, period: &PayPeriod) -> i64 {
    (period.start() - anchor).num_days().div_euclid(PERIOD_DAYS)
}
