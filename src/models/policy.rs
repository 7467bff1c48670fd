//! Leave accrual policy model.
//!
//! This module defines the [`LeavePolicy`] configured per store and the
//! [`AccrualMode`] variants that decide how much leave a qualifying week
//! earns. The mode is a tagged variant carrying only the field relevant to
//! it, so a fixed-mode policy cannot carry a stray ratio and vice versa.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a qualifying week converts into accrued leave hours.
///
/// Serialized with an `accrual_mode` tag alongside the mode's own field, so
/// stored policy records keep a flat shape:
///
/// ```
/// use leave_engine::models::AccrualMode;
/// use rust_decimal::Decimal;
///
/// let mode: AccrualMode =
///     serde_json::from_str(r#"{"accrual_mode":"fixed","accrual_fixed_hours":"8"}"#).unwrap();
/// assert_eq!(
///     mode,
///     AccrualMode::Fixed { accrual_fixed_hours: Decimal::new(8, 0) }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "accrual_mode", rename_all = "snake_case")]
pub enum AccrualMode {
    /// A flat amount of leave per qualifying week, regardless of how far
    /// above the minimum the worker worked.
    Fixed {
        /// Hours granted per qualifying week. Absent in stored data means
        /// zero, which evaluates as a silent zero-accrual rather than a
        /// fault.
        #[serde(default)]
        accrual_fixed_hours: Decimal,
    },
    /// Leave proportional to the hours worked in the qualifying week.
    Proportional {
        /// Accrued hours per worked hour. Absent in stored data means
        /// zero.
        #[serde(default)]
        accrual_ratio: Decimal,
    },
}

impl fmt::Display for AccrualMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccrualMode::Fixed { .. } => write!(f, "fixed"),
            AccrualMode::Proportional { .. } => write!(f, "proportional"),
        }
    }
}

/// The leave accrual policy for one store.
///
/// Exactly one policy is active per store. Policy changes apply
/// prospectively only; ledger entries already written are never recomputed
/// against a new policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// The store this policy applies to.
    pub store_id: String,
    /// Minimum weekly worked hours required to accrue. The boundary is
    /// inclusive: a week exactly at the minimum accrues.
    pub min_weekly_hours: Decimal,
    /// How a qualifying week converts into accrued hours.
    #[serde(flatten)]
    pub mode: AccrualMode,
    /// Balance cap in hours; 0 means unlimited. The ledger is never
    /// silently capped against it; the accrual planner raises a warning
    /// when a planned entry would cross it.
    pub max_accumulated_hours: Decimal,
    /// Hours per day used by the day/hour display formatter.
    pub display_day_hours: Decimal,
    /// Master switch: a disabled policy never accrues.
    pub enabled: bool,
    /// Who last changed the policy.
    pub updated_by: String,
    /// When the policy last changed.
    pub updated_at: DateTime<Utc>,
}
