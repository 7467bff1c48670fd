//! Manual ledger adjustments.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::calculation::balance::balance;
use crate::calculation::rounding::round_hours;
use crate::models::{EntryKind, LeaveLedgerEntry};

/// Plans a manual adjustment entry for a worker's ledger.
///
/// Adjustments carry a signed amount: positive grants hours, negative
/// revokes them. The snapshot is the 2dp-rounded balance after the
/// adjustment. The note is free text supplied by the operator, typically
/// the reason for the correction.
///
/// # Arguments
///
/// * `entries` - The worker's current ledger.
/// * `amount_hours` - Signed hours to grant or revoke.
/// * `note` - Operator-supplied reason for the adjustment.
/// * `posted_by` - Recorded as the entry creator.
/// * `posted_at` - Recorded as the entry creation time.
pub fn plan_adjustment(
    store_id: &str,
    worker_id: &str,
    entries: &[LeaveLedgerEntry],
    amount_hours: Decimal,
    note: &str,
    posted_by: &str,
    posted_at: DateTime<Utc>,
) -> LeaveLedgerEntry {
    let snapshot = round_hours(balance(entries) + amount_hours);

    info!(
        worker_id = %worker_id,
        amount_hours = %amount_hours,
        balance_snapshot = %snapshot,
        "Planned adjustment entry"
    );

    LeaveLedgerEntry {
        id: Uuid::new_v4(),
        store_id: store_id.to_string(),
        worker_id: worker_id.to_string(),
        kind: EntryKind::Adjust,
        amount_hours,
        balance_snapshot: snapshot,
        related_request_id: None,
        related_week: None,
        weekly_hours_worked: None,
        note: note.to_string(),
        created_by: posted_by.to_string(),
        created_at: posted_at,
    }
}
