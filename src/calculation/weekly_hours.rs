//! Weekly aggregation of shift records.
//!
//! This module sums net worked time into ISO-week buckets: a single-week
//! total used by the accrual evaluator, and a full per-week breakdown used
//! by review screens.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::rounding::round_hours;
use crate::models::{Shift, WeekKey};

/// Sums the net worked hours of the shifts in one week bucket.
///
/// Shifts with a different week-key are ignored; filtering down to a single
/// worker is the caller's job, the aggregation is pure over whatever it is
/// given. Net minutes are summed before converting to hours, and the result
/// is deliberately unrounded so the accrual evaluator can compare it
/// against the policy minimum at full precision.
///
/// # Arguments
///
/// * `shifts` - The shift records to aggregate, pre-filtered by worker.
/// * `week` - The week bucket to total.
///
/// # Returns
///
/// Net worked hours for the week as an unrounded `Decimal`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::weekly_worked_hours;
/// use leave_engine::models::{Shift, ShiftSource, WeekKey};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
/// let shift = Shift::new(
///     "shift_001",
///     "store-001",
///     "worker-001",
///     date,
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     60,
///     ShiftSource::Manual,
///     "admin",
///     "2026-02-16T20:00:00Z".parse().unwrap(),
/// );
///
/// let hours = weekly_worked_hours(&[shift], WeekKey::from_date(date));
/// assert_eq!(hours, Decimal::new(8, 0));
/// ```
pub fn weekly_worked_hours(shifts: &[Shift], week: WeekKey) -> Decimal {
    let minutes: i64 = shifts
        .iter()
        .filter(|s| s.week_key == week)
        .map(|s| s.net_minutes)
        .sum();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// One week's worth of shifts in a [`weekly_breakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// The week bucket.
    pub week: WeekKey,
    /// Net worked hours for the week, rounded to 2 decimal places.
    pub total_hours: Decimal,
    /// How many shifts fall in the week.
    pub shift_count: usize,
    /// The week's shifts, sorted by date ascending.
    pub shifts: Vec<Shift>,
}

/// Groups an arbitrary shift collection into per-week summaries.
///
/// Groups are ordered by week-key ascending and shifts within a group by
/// date ascending, so identical input always yields an identical breakdown.
/// Each group's total is the minute sum converted to hours and rounded to
/// 2 decimal places.
///
/// # Arguments
///
/// * `shifts` - The shift records to break down, pre-filtered by worker.
///
/// # Returns
///
/// One [`WeekSummary`] per distinct week-key, in chronological order.
pub fn weekly_breakdown(shifts: &[Shift]) -> Vec<WeekSummary> {
    let mut by_week: BTreeMap<WeekKey, Vec<Shift>> = BTreeMap::new();
    for shift in shifts {
        by_week.entry(shift.week_key).or_default().push(shift.clone());
    }

    by_week
        .into_iter()
        .map(|(week, mut group)| {
            group.sort_by_key(|s| s.date);
            let minutes: i64 = group.iter().map(|s| s.net_minutes).sum();
            WeekSummary {
                week,
                total_hours: round_hours(Decimal::new(minutes, 0) / Decimal::new(60, 0)),
                shift_count: group.len(),
                shifts: group,
            }
        })
        .collect()
}
