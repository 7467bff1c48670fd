//! Leave use planning.
//!
//! Converts an approved leave request into the negative ledger entry that
//! records the time taken. Requests in any other status are rejected here
//! rather than silently producing an entry.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::balance::balance;
use crate::calculation::rounding::round_hours;
use crate::error::{EngineError, EngineResult};
use crate::models::{EntryKind, LeaveLedgerEntry, LeaveRequest, LedgerWarning};

/// Warning code raised when a planned use entry takes the balance below
/// the hours being used.
pub const WARN_INSUFFICIENT_BALANCE: &str = "INSUFFICIENT_BALANCE";

/// The outcome of planning a leave use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveUsePlan {
    /// The use entry to append.
    pub entry: LeaveLedgerEntry,
    /// Soft conditions the operator may want to act on.
    pub warnings: Vec<LedgerWarning>,
}

/// Returns whether the ledger balance covers `amount_hours` of leave.
///
/// Useful for request forms that want to flag an over-ask before the
/// request is even submitted. The planner itself does not enforce this;
/// see [`plan_leave_use`].
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::covers;
///
/// assert!(covers(&[], rust_decimal::Decimal::ZERO));
/// ```
pub fn covers(entries: &[LeaveLedgerEntry], amount_hours: Decimal) -> bool {
    balance(entries) >= amount_hours
}

/// Plans the ledger entry for an approved leave request.
///
/// The entry's amount is the negative of the requested hours, its snapshot
/// is the 2dp-rounded balance after the deduction, and it links back to
/// the request id. A request that is not approved yields
/// [`EngineError::InvalidRequest`].
///
/// A balance too small to cover the request does not block the entry; a
/// [`WARN_INSUFFICIENT_BALANCE`] warning is attached instead, leaving the
/// go/no-go call to the approver.
///
/// # Arguments
///
/// * `request` - The leave request, expected to be approved.
/// * `entries` - The worker's current ledger.
/// * `posted_by` - Recorded as the entry creator.
/// * `posted_at` - Recorded as the entry creation time.
pub fn plan_leave_use(
    request: &LeaveRequest,
    entries: &[LeaveLedgerEntry],
    posted_by: &str,
    posted_at: DateTime<Utc>,
) -> EngineResult<LeaveUsePlan> {
    if !request.is_approved() {
        return Err(EngineError::InvalidRequest {
            request_id: request.id.clone(),
            reason: format!("request is not approved (status: {})", request.status),
        });
    }

    let current_balance = balance(entries);
    let amount = -request.amount_hours;
    let snapshot = round_hours(current_balance + amount);

    let mut warnings = Vec::new();
    if current_balance < request.amount_hours {
        warn!(
            worker_id = %request.worker_id,
            request_id = %request.id,
            balance = %current_balance,
            requested = %request.amount_hours,
            "Leave use exceeds available balance"
        );
        warnings.push(LedgerWarning {
            code: WARN_INSUFFICIENT_BALANCE.to_string(),
            message: format!(
                "balance {} does not cover {} requested hours for worker {}",
                current_balance.normalize(),
                request.amount_hours.normalize(),
                request.worker_id
            ),
            severity: "warning".to_string(),
        });
    }

    let entry = LeaveLedgerEntry {
        id: Uuid::new_v4(),
        store_id: request.store_id.clone(),
        worker_id: request.worker_id.clone(),
        kind: EntryKind::Use,
        amount_hours: amount,
        balance_snapshot: snapshot,
        related_request_id: Some(request.id.clone()),
        related_week: None,
        weekly_hours_worked: None,
        note: format!(
            "Leave used: {} ({}h)",
            request.date,
            request.amount_hours.normalize()
        ),
        created_by: posted_by.to_string(),
        created_at: posted_at,
    };

    info!(
        worker_id = %request.worker_id,
        request_id = %request.id,
        amount_hours = %amount,
        balance_snapshot = %snapshot,
        "Planned leave use entry"
    );

    Ok(LeaveUsePlan { entry, warnings })
}
