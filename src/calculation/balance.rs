//! Ledger balance and monthly summary calculation.
//!
//! The balance is always recomputed from the full entry list; the engine
//! never caches it and never trusts the per-entry snapshots. The monthly
//! summary partitions the same ledger by entry creation month, so summing
//! the partitions reproduces the balance.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::rounding::round_hours;
use crate::models::{EntryKind, LeaveLedgerEntry};

/// Computes the current leave balance from a worker's ledger.
///
/// The balance is the sum of `amount_hours` over all entries, rounded to
/// 2 decimal places. This is the single source of truth; the
/// `balance_snapshot` stored on individual entries is advisory and may be
/// stale.
///
/// # Arguments
///
/// * `entries` - The worker's full ledger, pre-filtered by the caller.
///
/// # Returns
///
/// The current balance in hours. Negative balances are possible when
/// usage or adjustments outrun accrual.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::balance;
/// use leave_engine::models::{EntryKind, LeaveLedgerEntry};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let entry = |kind, amount: i64| LeaveLedgerEntry {
///     id: Uuid::new_v4(),
///     store_id: "store-001".to_string(),
///     worker_id: "worker-001".to_string(),
///     kind,
///     amount_hours: Decimal::new(amount, 0),
///     balance_snapshot: Decimal::ZERO,
///     related_request_id: None,
///     related_week: None,
///     weekly_hours_worked: None,
///     note: String::new(),
///     created_by: "admin".to_string(),
///     created_at: "2026-02-23T09:00:00Z".parse().unwrap(),
/// };
///
/// let ledger = vec![
///     entry(EntryKind::Accrual, 8),
///     entry(EntryKind::Accrual, 8),
///     entry(EntryKind::Use, -8),
/// ];
/// assert_eq!(balance(&ledger), Decimal::new(8, 0));
/// ```
pub fn balance(entries: &[LeaveLedgerEntry]) -> Decimal {
    round_hours(entries.iter().map(|e| e.amount_hours).sum())
}

/// Month-scoped totals of a worker's ledger activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Hours accrued in the month, rounded to 2 decimal places.
    pub accrued: Decimal,
    /// Hours of leave used in the month, reported as a positive magnitude.
    pub used: Decimal,
    /// Signed net of manual adjustments in the month; can be negative.
    pub adjusted: Decimal,
}

impl MonthlySummary {
    /// The month's net effect on the balance: `accrued - used + adjusted`.
    pub fn net(&self) -> Decimal {
        self.accrued - self.used + self.adjusted
    }
}

/// Summarises one calendar month of ledger activity.
///
/// Entries are selected by their creation timestamp, not any business
/// date: an accrual recorded in March for a February week counts as March
/// activity. That keeps the summary a lossless partition of the ledger
/// (every entry belongs to exactly one month) at the cost of attributing
/// late entries to the month they were written.
///
/// # Arguments
///
/// * `entries` - The worker's ledger, pre-filtered by the caller.
/// * `year` - The calendar year (UTC).
/// * `month` - The calendar month, 1-12 (UTC).
///
/// # Returns
///
/// The [`MonthlySummary`] with each total rounded to 2 decimal places.
/// `used` is the positive magnitude of the month's `use` entries even
/// though they are stored negative.
pub fn monthly_summary(entries: &[LeaveLedgerEntry], year: i32, month: u32) -> MonthlySummary {
    let mut accrued = Decimal::ZERO;
    let mut used = Decimal::ZERO;
    let mut adjusted = Decimal::ZERO;

    for entry in entries {
        if entry.created_at.year() != year || entry.created_at.month() != month {
            continue;
        }
        match entry.kind {
            EntryKind::Accrual => accrued += entry.amount_hours,
            EntryKind::Use => used += entry.amount_hours.abs(),
            EntryKind::Adjust => adjusted += entry.amount_hours,
        }
    }

    MonthlySummary {
        accrued: round_hours(accrued),
        used: round_hours(used),
        adjusted: round_hours(adjusted),
    }
}
