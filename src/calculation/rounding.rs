//! Rounding discipline for ledger amounts and derived views.
//!
//! All hour sums round to 2 decimal places, day-formatting remainders to 1,
//! and currency amounts to whole units, always half-up away from zero. The
//! same rounding is applied everywhere an amount becomes visible so
//! repeated ledger math can never drift.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an hour quantity to 2 decimal places, half-up away from zero.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::round_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_hours(Decimal::new(2475, 3)), Decimal::new(248, 2)); // 2.475 -> 2.48
/// assert_eq!(round_hours(Decimal::new(-2475, 3)), Decimal::new(-248, 2));
/// ```
pub fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a day-formatting remainder to 1 decimal place, half-up away from
/// zero.
pub fn round_remainder(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a currency amount to whole units, half-up away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
