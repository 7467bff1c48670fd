//! ISO week identifiers.
//!
//! This module defines the [`WeekKey`] type used to bucket shifts and
//! accrual decisions into ISO 8601 weeks. Every place the engine needs a
//! week grouping (shift creation, accrual evaluation, the weekly breakdown)
//! goes through this type so the grouping is computed consistently.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// An ISO 8601 week identifier: a week-year plus a week number.
///
/// Weeks start on Monday and week 1 is the week containing the year's first
/// Thursday, so a date near a year boundary may belong to the ISO week-year
/// of the adjacent calendar year. The key renders as `"YYYY-Www"` with a
/// two-digit, zero-padded week number, which makes lexicographic ordering of
/// the rendered strings agree with chronological ordering of the keys.
///
/// # Example
///
/// ```
/// use leave_engine::models::WeekKey;
/// use chrono::NaiveDate;
///
/// let key = WeekKey::from_date(NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
/// assert_eq!(key.to_string(), "2026-W08");
///
/// // 2025-12-29 is a Monday that already belongs to ISO year 2026.
/// let boundary = WeekKey::from_date(NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
/// assert_eq!(boundary.to_string(), "2026-W01");
/// assert!(boundary < key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekKey {
    year: i32,
    week: u32,
}

impl WeekKey {
    /// Computes the week key for a calendar date.
    ///
    /// # Arguments
    ///
    /// * `date` - The calendar date to bucket.
    ///
    /// # Returns
    ///
    /// The [`WeekKey`] of the ISO week containing the date.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::WeekKey;
    /// use chrono::NaiveDate;
    ///
    /// // 2027-01-01 is a Friday in the last ISO week of 2026.
    /// let key = WeekKey::from_date(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    /// assert_eq!(key.to_string(), "2026-W53");
    /// ```
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Returns the ISO week-year of this key.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the ISO week number of this key (1-53).
    pub fn week(&self) -> u32 {
        self.week
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = EngineError;

    /// Parses a `"YYYY-Www"` string back into a [`WeekKey`].
    ///
    /// The week number must be exactly two digits and between 01 and 53.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidWeekKey {
            value: s.to_string(),
        };

        let (year_part, week_part) = s.split_once("-W").ok_or_else(invalid)?;
        if week_part.len() != 2 || !week_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let week: u32 = week_part.parse().map_err(|_| invalid())?;
        if !(1..=53).contains(&week) {
            return Err(invalid());
        }

        Ok(Self { year, week })
    }
}

impl TryFrom<String> for WeekKey {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekKey> for String {
    fn from(key: WeekKey) -> Self {
        key.to_string()
    }
}
