//! Shift model and net worked-time arithmetic.
//!
//! This module defines the [`Shift`] record for one worked period and the
//! [`net_minutes`] function that turns a (start, end, break) clock
//! description into net worked minutes, handling shifts that cross
//! midnight.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::week::WeekKey;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// How a shift record entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftSource {
    /// Entered by hand by an administrator.
    Manual,
    /// Loaded by a bulk import process.
    Import,
}

/// One field-level change produced by a shift edit.
///
/// Edits return these so the storage collaborator can persist its audit
/// trail; the engine itself keeps no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// The name of the field that changed.
    pub field: String,
    /// The rendered value before the edit.
    pub old_value: String,
    /// The rendered value after the edit.
    pub new_value: String,
}

/// Computes the net worked minutes for a shift description.
///
/// The wall-clock span from `start` to `end` is wrapped forward by 24 hours
/// when the raw difference is negative (the shift crosses midnight), then
/// the break is subtracted and the result clamped at zero. A break longer
/// than the worked span yields zero, never negative minutes. Equal start
/// and end times mean a zero-length shift, not a 24-hour one.
///
/// Malformed time strings are the caller's validation concern; this
/// function is total over its typed inputs.
///
/// # Arguments
///
/// * `start` - The wall-clock start time.
/// * `end` - The wall-clock end time.
/// * `break_minutes` - The unpaid break duration in minutes.
///
/// # Returns
///
/// Net worked minutes, always in `0..=1440`.
///
/// # Examples
///
/// ```
/// use leave_engine::models::net_minutes;
/// use chrono::NaiveTime;
///
/// let t = |s: &str| NaiveTime::parse_from_str(s, "%H:%M").unwrap();
///
/// // Ordinary day shift with a one-hour break.
/// assert_eq!(net_minutes(t("09:00"), t("18:00"), 60), 480);
///
/// // Overnight shift: the end time is numerically earlier than the start.
/// assert_eq!(net_minutes(t("22:00"), t("06:00"), 0), 480);
///
/// // A break longer than the span clamps to zero.
/// assert_eq!(net_minutes(t("09:00"), t("10:00"), 120), 0);
/// ```
pub fn net_minutes(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> i64 {
    let mut span = (end - start).num_minutes();
    if span < 0 {
        // End before start on the clock: the shift crosses midnight.
        span += MINUTES_PER_DAY;
    }
    (span - i64::from(break_minutes)).max(0)
}

/// Represents one worked period for one worker at one store.
///
/// `net_minutes` and `week_key` are derived at creation time and only
/// recomputed by an explicit [`Shift::reschedule`]; they are stored on the
/// record so aggregations never re-derive them implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The store this shift belongs to.
    pub store_id: String,
    /// The worker who worked the shift.
    pub worker_id: String,
    /// The calendar date of the shift (date-only; overnight shifts keep
    /// their start date).
    pub date: NaiveDate,
    /// The wall-clock start time.
    pub start_time: NaiveTime,
    /// The wall-clock end time.
    pub end_time: NaiveTime,
    /// Unpaid break duration in minutes.
    pub break_minutes: u32,
    /// Derived net worked minutes (see [`net_minutes`]).
    pub net_minutes: i64,
    /// Derived ISO week bucket for the shift date.
    pub week_key: WeekKey,
    /// Whether an administrator has confirmed the shift.
    pub confirmed: bool,
    /// How the record entered the system.
    pub source: ShiftSource,
    /// Who created the record.
    pub created_by: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Shift {
    /// Creates a shift record, deriving `net_minutes` and `week_key`.
    ///
    /// New shifts start unconfirmed; `updated_at` starts equal to
    /// `created_at`.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::{Shift, ShiftSource};
    /// use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    ///
    /// let shift = Shift::new(
    ///     "shift_001",
    ///     "store-001",
    ///     "worker-001",
    ///     NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
    ///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
    ///     60,
    ///     ShiftSource::Manual,
    ///     "admin",
    ///     "2026-02-16T20:00:00Z".parse::<DateTime<Utc>>().unwrap(),
    /// );
    ///
    /// assert_eq!(shift.net_minutes, 480);
    /// assert_eq!(shift.week_key.to_string(), "2026-W08");
    /// assert!(!shift.confirmed);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        store_id: &str,
        worker_id: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_minutes: u32,
        source: ShiftSource,
        created_by: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            store_id: store_id.to_string(),
            worker_id: worker_id.to_string(),
            date,
            start_time,
            end_time,
            break_minutes,
            net_minutes: net_minutes(start_time, end_time, break_minutes),
            week_key: WeekKey::from_date(date),
            confirmed: false,
            source,
            created_by: created_by.to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns the net worked time as decimal hours.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::{Shift, ShiftSource};
    /// use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new(
    ///     "shift_001",
    ///     "store-001",
    ///     "worker-001",
    ///     NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
    ///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
    ///     30,
    ///     ShiftSource::Manual,
    ///     "admin",
    ///     "2026-02-16T20:00:00Z".parse::<DateTime<Utc>>().unwrap(),
    /// );
    ///
    /// assert_eq!(shift.worked_hours(), Decimal::new(45, 1)); // 4.5 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        Decimal::new(self.net_minutes, 0) / Decimal::new(60, 0)
    }

    /// Applies an edit to the shift's date, times, or break.
    ///
    /// `net_minutes` and `week_key` are recomputed from the new values and
    /// `updated_at` is set. Returns one [`FieldChange`] per field whose
    /// value actually changed (derived fields are not reported), in
    /// declaration order, for the caller's audit trail. An edit that
    /// changes nothing returns an empty list but still touches
    /// `updated_at`.
    pub fn reschedule(
        &mut self,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_minutes: u32,
        updated_at: DateTime<Utc>,
    ) -> Vec<FieldChange> {
        let mut changes = Vec::new();

        if self.date != date {
            changes.push(FieldChange {
                field: "date".to_string(),
                old_value: self.date.to_string(),
                new_value: date.to_string(),
            });
        }
        if self.start_time != start_time {
            changes.push(FieldChange {
                field: "start_time".to_string(),
                old_value: self.start_time.to_string(),
                new_value: start_time.to_string(),
            });
        }
        if self.end_time != end_time {
            changes.push(FieldChange {
                field: "end_time".to_string(),
                old_value: self.end_time.to_string(),
                new_value: end_time.to_string(),
            });
        }
        if self.break_minutes != break_minutes {
            changes.push(FieldChange {
                field: "break_minutes".to_string(),
                old_value: self.break_minutes.to_string(),
                new_value: break_minutes.to_string(),
            });
        }

        self.date = date;
        self.start_time = start_time;
        self.end_time = end_time;
        self.break_minutes = break_minutes;
        self.net_minutes = net_minutes(start_time, end_time, break_minutes);
        self.week_key = WeekKey::from_date(date);
        self.updated_at = updated_at;

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn make_timestamp(ts: &str) -> DateTime<Utc> {
        ts.parse().unwrap()
    }

    fn make_shift(id: &str, date_str: &str, start: &str, end: &str, break_minutes: u32) -> Shift {
        Shift::new(
            id,
            "store-001",
            "worker-001",
            make_date(date_str),
            make_time(start),
            make_time(end),
            break_minutes,
            ShiftSource::Manual,
            "admin",
            make_timestamp("2026-02-16T20:00:00Z"),
        )
    }

    /// SH-001: standard day shift with one-hour break
    #[test]
    fn test_standard_day_shift_with_break() {
        assert_eq!(
            net_minutes(make_time("09:00"), make_time("18:00"), 60),
            480
        );
    }

    /// SH-002: short shift with half-hour break
    #[test]
    fn test_short_shift_with_break() {
        assert_eq!(
            net_minutes(make_time("10:00"), make_time("15:00"), 30),
            270
        );
    }

    /// SH-003: overnight shift wraps past midnight
    #[test]
    fn test_overnight_shift_wraps() {
        assert_eq!(net_minutes(make_time("22:00"), make_time("06:00"), 0), 480);
    }

    /// SH-004: overnight shift with a break
    #[test]
    fn test_overnight_shift_with_break() {
        assert_eq!(
            net_minutes(make_time("23:00"), make_time("07:00"), 30),
            450
        );
    }

    /// SH-005: break longer than the span clamps to zero
    #[test]
    fn test_break_longer_than_span_clamps_to_zero() {
        assert_eq!(
            net_minutes(make_time("09:00"), make_time("10:00"), 120),
            0
        );
    }

    /// SH-006: equal start and end is a zero-length shift, not 24 hours
    #[test]
    fn test_equal_times_are_zero_length() {
        assert_eq!(net_minutes(make_time("09:00"), make_time("09:00"), 0), 0);
    }

    /// SH-007: no break means the full span counts
    #[test]
    fn test_no_break_counts_full_span() {
        assert_eq!(net_minutes(make_time("13:30"), make_time("17:00"), 0), 210);
    }

    #[test]
    fn test_new_derives_net_minutes_and_week_key() {
        let shift = make_shift("SH-101", "2026-02-16", "09:00", "18:00", 60);
        assert_eq!(shift.net_minutes, 480);
        assert_eq!(shift.week_key.to_string(), "2026-W08");
        assert!(!shift.confirmed);
        assert_eq!(shift.updated_at, shift.created_at);
    }

    #[test]
    fn test_worked_hours_converts_to_decimal() {
        let shift = make_shift("SH-102", "2026-02-16", "09:00", "18:00", 60);
        assert_eq!(shift.worked_hours(), Decimal::new(80, 1)); // 8.0

        let short = make_shift("SH-103", "2026-02-17", "10:00", "11:30", 0);
        assert_eq!(short.worked_hours(), Decimal::new(15, 1)); // 1.5
    }

    #[test]
    fn test_reschedule_recomputes_net_minutes() {
        let mut shift = make_shift("SH-104", "2026-02-16", "09:00", "18:00", 60);
        let changes = shift.reschedule(
            make_date("2026-02-16"),
            make_time("09:00"),
            make_time("19:00"),
            60,
            make_timestamp("2026-02-17T08:00:00Z"),
        );

        assert_eq!(shift.net_minutes, 540);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "end_time");
        assert_eq!(changes[0].old_value, "18:00:00");
        assert_eq!(changes[0].new_value, "19:00:00");
        assert_eq!(shift.updated_at, make_timestamp("2026-02-17T08:00:00Z"));
    }

    #[test]
    fn test_reschedule_to_new_week_recomputes_week_key() {
        let mut shift = make_shift("SH-105", "2026-02-16", "09:00", "18:00", 60);
        let changes = shift.reschedule(
            make_date("2026-02-23"),
            make_time("09:00"),
            make_time("18:00"),
            60,
            make_timestamp("2026-02-17T08:00:00Z"),
        );

        assert_eq!(shift.week_key.to_string(), "2026-W09");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "date");
        assert_eq!(changes[0].old_value, "2026-02-16");
        assert_eq!(changes[0].new_value, "2026-02-23");
    }

    #[test]
    fn test_reschedule_reports_every_changed_field() {
        let mut shift = make_shift("SH-106", "2026-02-16", "09:00", "18:00", 60);
        let changes = shift.reschedule(
            make_date("2026-02-17"),
            make_time("10:00"),
            make_time("17:00"),
            30,
            make_timestamp("2026-02-17T08:00:00Z"),
        );

        let fields: Vec<&str> = changes.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["date", "start_time", "end_time", "break_minutes"]);
        assert_eq!(shift.net_minutes, 390);
    }

    #[test]
    fn test_reschedule_without_changes_reports_nothing() {
        let mut shift = make_shift("SH-107", "2026-02-16", "09:00", "18:00", 60);
        let changes = shift.reschedule(
            make_date("2026-02-16"),
            make_time("09:00"),
            make_time("18:00"),
            60,
            make_timestamp("2026-02-18T08:00:00Z"),
        );

        assert!(changes.is_empty());
        assert_eq!(shift.updated_at, make_timestamp("2026-02-18T08:00:00Z"));
    }

    #[test]
    fn test_week_key_computed_from_start_date_for_overnight_shift() {
        // A Sunday-night shift running into Monday stays in the Sunday week.
        let shift = make_shift("SH-108", "2026-02-22", "22:00", "06:00", 0);
        assert_eq!(shift.week_key.to_string(), "2026-W08");
        assert_eq!(shift.net_minutes, 480);
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = make_shift("SH-109", "2026-02-16", "09:00", "18:00", 60);
        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }

    #[test]
    fn test_shift_serializes_derived_fields() {
        let shift = make_shift("SH-110", "2026-02-16", "09:00", "18:00", 60);
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"week_key\":\"2026-W08\""));
        assert!(json.contains("\"net_minutes\":480"));
        assert!(json.contains("\"source\":\"manual\""));
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": "shift_001",
            "store_id": "store-001",
            "worker_id": "worker-001",
            "date": "2026-02-16",
            "start_time": "09:00:00",
            "end_time": "18:00:00",
            "break_minutes": 60,
            "net_minutes": 480,
            "week_key": "2026-W08",
            "confirmed": true,
            "source": "import",
            "created_by": "importer",
            "created_at": "2026-02-16T20:00:00Z",
            "updated_at": "2026-02-16T20:00:00Z"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.id, "shift_001");
        assert_eq!(shift.source, ShiftSource::Import);
        assert!(shift.confirmed);
        assert_eq!(shift.week_key.to_string(), "2026-W08");
    }
}
