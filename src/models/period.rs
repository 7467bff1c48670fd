//! Payroll period model.
//!
//! This module contains the [`PayrollPeriod`] type that defines the date
//! window for payroll summaries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range for payroll reporting.
///
/// # Example
///
/// ```
/// use leave_engine::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayrollPeriod {
    /// Builds the period covering one whole calendar month.
    ///
    /// Returns `None` when the year/month do not form a valid date.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::PayrollPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let february = PayrollPeriod::calendar_month(2026, 2).unwrap();
    /// assert_eq!(february.start_date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    /// assert_eq!(february.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    /// ```
    pub fn calendar_month(year: i32, month: u32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let end_date = first_of_next.pred_opt()?;
        Some(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// PP-001: contains_date within period
    #[test]
    fn test_contains_date_within_period() {
        let period = PayrollPeriod {
            start_date: make_date("2026-02-01"),
            end_date: make_date("2026-02-28"),
        };
        assert!(period.contains_date(make_date("2026-02-15")));
    }

    /// PP-002: contains_date is inclusive at both ends
    #[test]
    fn test_contains_date_inclusive_bounds() {
        let period = PayrollPeriod {
            start_date: make_date("2026-02-01"),
            end_date: make_date("2026-02-28"),
        };
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
        assert!(!period.contains_date(make_date("2026-01-31")));
        assert!(!period.contains_date(make_date("2026-03-01")));
    }

    /// PP-003: calendar_month covers the full month
    #[test]
    fn test_calendar_month_covers_full_month() {
        let period = PayrollPeriod::calendar_month(2026, 2).unwrap();
        assert_eq!(period.start_date, make_date("2026-02-01"));
        assert_eq!(period.end_date, make_date("2026-02-28"));
    }

    /// PP-004: calendar_month handles December
    #[test]
    fn test_calendar_month_december() {
        let period = PayrollPeriod::calendar_month(2026, 12).unwrap();
        assert_eq!(period.start_date, make_date("2026-12-01"));
        assert_eq!(period.end_date, make_date("2026-12-31"));
    }

    /// PP-005: calendar_month handles leap February
    #[test]
    fn test_calendar_month_leap_february() {
        let period = PayrollPeriod::calendar_month(2028, 2).unwrap();
        assert_eq!(period.end_date, make_date("2028-02-29"));
    }

    /// PP-006: invalid month yields None
    #[test]
    fn test_calendar_month_invalid_month() {
        assert_eq!(PayrollPeriod::calendar_month(2026, 13), None);
        assert_eq!(PayrollPeriod::calendar_month(2026, 0), None);
    }

    #[test]
    fn test_period_serialization() {
        let period = PayrollPeriod::calendar_month(2026, 2).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2026-02-01\""));
        assert!(json.contains("\"end_date\":\"2026-02-28\""));
    }
}
