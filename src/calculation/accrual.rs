//! Accrual policy evaluation.
//!
//! This module decides whether a week of work earns leave, and how much,
//! under a store's [`LeavePolicy`]. The branch order is part of the
//! contract: disabled beats everything, then the minimum-hours gate, then
//! the mode decides the amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::rounding::round_hours;
use crate::models::{AccrualMode, LeavePolicy};

/// The outcome of evaluating a week of work against a leave policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccrualDecision {
    /// Whether the week earns leave at all.
    pub accrues: bool,
    /// How many hours the week earns; zero whenever `accrues` is false.
    pub hours: Decimal,
}

impl AccrualDecision {
    fn no_accrual() -> Self {
        Self {
            accrues: false,
            hours: Decimal::ZERO,
        }
    }
}

/// Evaluates a week's worked hours against the accrual policy.
///
/// Branches short-circuit in this order:
///
/// 1. A disabled policy never accrues, whatever the hours.
/// 2. Weekly hours strictly below the minimum do not accrue; hours exactly
///    equal to the minimum DO accrue, the boundary is inclusive.
/// 3. Fixed mode grants the policy's flat amount, regardless of how far
///    above the minimum the week was.
/// 4. Proportional mode grants `weekly_hours × ratio`, rounded to
///    2 decimal places half-up.
///
/// A policy whose mode amount is missing (deserialized as zero) yields an
/// accruing decision of zero hours rather than a fault.
///
/// # Arguments
///
/// * `weekly_hours` - Net worked hours for the week, as produced by the
///   weekly aggregator (unrounded).
/// * `policy` - The store's leave policy.
///
/// # Returns
///
/// The [`AccrualDecision`] for the week.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::evaluate_accrual;
/// use leave_engine::models::{AccrualMode, LeavePolicy};
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy {
///     store_id: "store-001".to_string(),
///     min_weekly_hours: Decimal::new(15, 0),
///     mode: AccrualMode::Fixed { accrual_fixed_hours: Decimal::new(8, 0) },
///     max_accumulated_hours: Decimal::ZERO,
///     display_day_hours: Decimal::new(8, 0),
///     enabled: true,
///     updated_by: "admin".to_string(),
///     updated_at: "2026-01-05T00:00:00Z".parse().unwrap(),
/// };
///
/// let decision = evaluate_accrual(Decimal::new(28, 0), &policy);
/// assert!(decision.accrues);
/// assert_eq!(decision.hours, Decimal::new(8, 0));
///
/// let below = evaluate_accrual(Decimal::new(12, 0), &policy);
/// assert!(!below.accrues);
/// assert_eq!(below.hours, Decimal::ZERO);
/// ```
pub fn evaluate_accrual(weekly_hours: Decimal, policy: &LeavePolicy) -> AccrualDecision {
    if !policy.enabled {
        return AccrualDecision::no_accrual();
    }

    if weekly_hours < policy.min_weekly_hours {
        return AccrualDecision::no_accrual();
    }

    match policy.mode {
        AccrualMode::Fixed {
            accrual_fixed_hours,
        } => AccrualDecision {
            accrues: true,
            hours: accrual_fixed_hours,
        },
        AccrualMode::Proportional { accrual_ratio } => AccrualDecision {
            accrues: true,
            hours: round_hours(weekly_hours * accrual_ratio),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fixed_policy(min_weekly: &str, fixed_hours: &str) -> LeavePolicy {
        LeavePolicy {
            store_id: "store-001".to_string(),
            min_weekly_hours: dec(min_weekly),
            mode: AccrualMode::Fixed {
                accrual_fixed_hours: dec(fixed_hours),
            },
            max_accumulated_hours: Decimal::ZERO,
            display_day_hours: dec("8"),
            enabled: true,
            updated_by: "admin".to_string(),
            updated_at: "2026-01-05T00:00:00Z".parse().unwrap(),
        }
    }

    fn proportional_policy(min_weekly: &str, ratio: &str) -> LeavePolicy {
        LeavePolicy {
            mode: AccrualMode::Proportional {
                accrual_ratio: dec(ratio),
            },
            ..fixed_policy(min_weekly, "0")
        }
    }

    /// AC-001: below the minimum does not accrue
    #[test]
    fn test_below_minimum_does_not_accrue() {
        let decision = evaluate_accrual(dec("12"), &fixed_policy("15", "8"));
        assert!(!decision.accrues);
        assert_eq!(decision.hours, Decimal::ZERO);
    }

    /// AC-002: above the minimum accrues the flat amount
    #[test]
    fn test_above_minimum_accrues_flat_amount() {
        let decision = evaluate_accrual(dec("28"), &fixed_policy("15", "8"));
        assert!(decision.accrues);
        assert_eq!(decision.hours, dec("8"));
    }

    /// AC-003: the minimum boundary is inclusive
    #[test]
    fn test_minimum_boundary_is_inclusive() {
        let at_boundary = evaluate_accrual(dec("15"), &fixed_policy("15", "8"));
        assert!(at_boundary.accrues);
        assert_eq!(at_boundary.hours, dec("8"));

        let just_below = evaluate_accrual(dec("14.9"), &fixed_policy("15", "8"));
        assert!(!just_below.accrues);
    }

    /// AC-004: fixed amount ignores the margin above the minimum
    #[test]
    fn test_fixed_amount_ignores_margin() {
        let policy = fixed_policy("15", "8");
        assert_eq!(evaluate_accrual(dec("15"), &policy).hours, dec("8"));
        assert_eq!(evaluate_accrual(dec("40"), &policy).hours, dec("8"));
        assert_eq!(evaluate_accrual(dec("60"), &policy).hours, dec("8"));
    }

    /// AC-005: proportional mode multiplies by the ratio
    #[test]
    fn test_proportional_mode_multiplies() {
        let policy = proportional_policy("15", "0.2");
        assert_eq!(evaluate_accrual(dec("40"), &policy).hours, dec("8"));
        assert_eq!(evaluate_accrual(dec("20"), &policy).hours, dec("4"));
    }

    /// AC-006: proportional amounts round half-up to 2 decimals
    #[test]
    fn test_proportional_rounds_half_up() {
        // 16.5 × 0.15 = 2.475, a true midpoint
        let policy = proportional_policy("10", "0.15");
        assert_eq!(evaluate_accrual(dec("16.5"), &policy).hours, dec("2.48"));

        // 38.33 × 0.15 = 5.7495, above the midpoint
        assert_eq!(evaluate_accrual(dec("38.33"), &policy).hours, dec("5.75"));
    }

    /// AC-007: a disabled policy never accrues
    #[test]
    fn test_disabled_policy_never_accrues() {
        let mut policy = fixed_policy("15", "8");
        policy.enabled = false;

        let decision = evaluate_accrual(dec("100"), &policy);
        assert!(!decision.accrues);
        assert_eq!(decision.hours, Decimal::ZERO);
    }

    /// AC-008: a missing fixed amount accrues zero hours, not a fault
    #[test]
    fn test_missing_fixed_amount_accrues_zero() {
        let decision = evaluate_accrual(dec("40"), &fixed_policy("15", "0"));
        assert!(decision.accrues);
        assert_eq!(decision.hours, Decimal::ZERO);
    }

    /// AC-009: a missing ratio accrues zero hours, not a fault
    #[test]
    fn test_missing_ratio_accrues_zero() {
        let decision = evaluate_accrual(dec("40"), &proportional_policy("15", "0"));
        assert!(decision.accrues);
        assert_eq!(decision.hours, Decimal::ZERO);
    }

    /// AC-010: fractional weekly hours compare exactly against the minimum
    #[test]
    fn test_fractional_hours_compare_exactly() {
        // 15.0166... hours (901 minutes / 60) clears a 15-hour minimum.
        let weekly = Decimal::new(901, 0) / Decimal::new(60, 0);
        let decision = evaluate_accrual(weekly, &fixed_policy("15", "8"));
        assert!(decision.accrues);
    }
}
