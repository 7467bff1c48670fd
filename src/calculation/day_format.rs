//! Human-readable day/hour formatting of leave balances.
//!
//! Balances are stored in hours; review screens show them as whole days
//! plus a remainder, divided by the policy's display divisor.

use rust_decimal::Decimal;

use crate::calculation::rounding::round_remainder;

/// The day divisor used when a policy does not configure one: 8 hours.
pub const DEFAULT_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Formats an hour quantity as a days-and-hours string.
///
/// The absolute value is split into whole days (`floor(|hours| /
/// hours_per_day)`) and a remainder rounded to 1 decimal place. Whichever
/// parts are non-zero are rendered, so the possible shapes are
/// `"1 day"`, `"1 day 4 hours"`, and `"4 hours"`; a zero balance renders
/// as `"0 hours"`. Quantities of exactly one use the singular word. A
/// negative input gets a leading `-`; zero is never signed.
///
/// Callers normally pass the policy's `display_day_hours` as the divisor;
/// a non-positive divisor falls back to [`DEFAULT_HOURS_PER_DAY`] so the
/// formatter stays total.
///
/// # Arguments
///
/// * `hours` - The hour quantity to format; may be negative.
/// * `hours_per_day` - How many hours make up one displayed day.
///
/// # Returns
///
/// The formatted string.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{format_as_days, DEFAULT_HOURS_PER_DAY};
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_as_days(Decimal::new(8, 0), DEFAULT_HOURS_PER_DAY), "1 day");
/// assert_eq!(format_as_days(Decimal::new(12, 0), DEFAULT_HOURS_PER_DAY), "1 day 4 hours");
/// assert_eq!(format_as_days(Decimal::new(4, 0), DEFAULT_HOURS_PER_DAY), "4 hours");
/// assert_eq!(format_as_days(Decimal::ZERO, DEFAULT_HOURS_PER_DAY), "0 hours");
/// assert_eq!(format_as_days(Decimal::new(-12, 0), DEFAULT_HOURS_PER_DAY), "-1 day 4 hours");
/// ```
pub fn format_as_days(hours: Decimal, hours_per_day: Decimal) -> String {
    let divisor = if hours_per_day > Decimal::ZERO {
        hours_per_day
    } else {
        DEFAULT_HOURS_PER_DAY
    };

    let sign = if hours < Decimal::ZERO { "-" } else { "" };
    let magnitude = hours.abs();

    let days = (magnitude / divisor).floor();
    let remainder = round_remainder(magnitude % divisor);

    let day_word = if days == Decimal::ONE { "day" } else { "days" };
    let hour_word = if remainder == Decimal::ONE {
        "hour"
    } else {
        "hours"
    };

    if days > Decimal::ZERO && remainder > Decimal::ZERO {
        format!(
            "{sign}{} {day_word} {} {hour_word}",
            days.normalize(),
            remainder.normalize()
        )
    } else if days > Decimal::ZERO {
        format!("{sign}{} {day_word}", days.normalize())
    } else {
        format!("{sign}{} {hour_word}", remainder.normalize())
    }
}
