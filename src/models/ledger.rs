//! Leave ledger entry model.
//!
//! The ledger is the system of record for leave balances: an append-only
//! list of signed hour changes. Entries are never updated or deleted;
//! corrections append an offsetting entry. The authoritative balance is
//! always the sum of `amount_hours` over a worker's entries; the
//! `balance_snapshot` stored on each entry is informational and may go
//! stale.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::week::WeekKey;

/// The kind of balance change a ledger entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Weekly accrual; the amount is positive.
    Accrual,
    /// Leave consumption from an approved request; the amount is negative.
    Use,
    /// Manual correction; the amount keeps the operator's sign.
    Adjust,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Accrual => write!(f, "accrual"),
            EntryKind::Use => write!(f, "use"),
            EntryKind::Adjust => write!(f, "adjust"),
        }
    }
}

/// One atomic, signed change to a worker's leave balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveLedgerEntry {
    /// Unique identifier for the entry. Planner-built entries get a fresh
    /// UUID v4; stored entries keep whatever they were persisted with.
    pub id: Uuid,
    /// The store the ledger belongs to.
    pub store_id: String,
    /// The worker whose balance this entry changes.
    pub worker_id: String,
    /// What kind of change this is.
    pub kind: EntryKind,
    /// The signed hour amount. Accruals and positive adjustments increase
    /// the balance; leave usage and negative adjustments decrease it.
    pub amount_hours: Decimal,
    /// Balance after this entry as computed at insertion time. Advisory
    /// only; never used as a source of truth.
    pub balance_snapshot: Decimal,
    /// The leave request that produced this entry, for `use` entries.
    pub related_request_id: Option<String>,
    /// The week the accrual was earned in, for `accrual` entries.
    pub related_week: Option<WeekKey>,
    /// The weekly worked hours behind an accrual decision, recorded for
    /// later review.
    pub weekly_hours_worked: Option<Decimal>,
    /// Free-text description of the entry.
    pub note: String,
    /// Who created the entry.
    pub created_by: String,
    /// When the entry was created. Monthly summaries partition the ledger
    /// by this timestamp.
    pub created_at: DateTime<Utc>,
}

/// A soft condition raised while planning a ledger entry.
///
/// Warnings never block the planned entry; they surface conditions the
/// operator may want to act on, like a balance crossing the policy cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerWarning {
    /// Stable machine-readable code, e.g. `BALANCE_CAP_EXCEEDED`.
    pub code: String,
    /// Human-readable description of the condition.
    pub message: String,
    /// Severity level: currently always `warning`.
    pub severity: String,
}
