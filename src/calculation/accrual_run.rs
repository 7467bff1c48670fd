//! Weekly accrual planning.
//!
//! One accrual run covers one worker and one week: aggregate the week's
//! shifts, evaluate the policy, check the ledger for a prior accrual in
//! the same week, and plan the entry the storage collaborator should
//! append. The run never writes anything itself.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::accrual::{AccrualDecision, evaluate_accrual};
use crate::calculation::balance::balance;
use crate::calculation::rounding::round_hours;
use crate::calculation::weekly_hours::weekly_worked_hours;
use crate::models::{EntryKind, LeaveLedgerEntry, LeavePolicy, LedgerWarning, Shift, WeekKey};

/// Warning code raised when a planned accrual pushes the balance past the
/// policy's accumulation cap.
pub const WARN_BALANCE_CAP_EXCEEDED: &str = "BALANCE_CAP_EXCEEDED";

/// The outcome of one weekly accrual planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAccrualRun {
    /// The week the run covered.
    pub week: WeekKey,
    /// Net worked hours found for the week (unrounded).
    pub weekly_hours: Decimal,
    /// What the policy evaluator decided.
    pub decision: AccrualDecision,
    /// Whether the ledger already holds an accrual for this week. When
    /// true no entry is planned, making re-runs safe.
    pub already_accrued: bool,
    /// The accrual entry to append, when one is due.
    pub entry: Option<LeaveLedgerEntry>,
    /// Soft conditions the operator may want to act on.
    pub warnings: Vec<LedgerWarning>,
}

/// Plans the weekly accrual for one worker and one week.
///
/// The run aggregates `shifts` for the week, evaluates `policy`, and plans
/// an `accrual` ledger entry when the decision accrues a positive amount
/// and `entries` holds no accrual linked to the same week yet. The planned
/// entry carries the week-key, the 2dp-rounded weekly hours as context, a
/// balance snapshot derived from the supplied ledger, and a generated id.
///
/// Appending the entry is the caller's job, as is supplying a consistent
/// snapshot of the worker's ledger; the duplicate-week check is only as
/// good as the entries given to it.
///
/// A positive `max_accumulated_hours` on the policy is not enforced as a
/// cap: the entry is still planned, with a
/// [`WARN_BALANCE_CAP_EXCEEDED`] warning attached when the post-entry
/// balance would cross it.
///
/// # Arguments
///
/// * `shifts` - The worker's shifts (any weeks; the run filters).
/// * `entries` - The worker's current ledger.
/// * `policy` - The store's leave policy.
/// * `week` - The week to run for.
/// * `posted_by` - Recorded as the entry creator.
/// * `posted_at` - Recorded as the entry creation time.
#[allow(clippy::too_many_arguments)]
pub fn run_weekly_accrual(
    shifts: &[Shift],
    entries: &[LeaveLedgerEntry],
    policy: &LeavePolicy,
    store_id: &str,
    worker_id: &str,
    week: WeekKey,
    posted_by: &str,
    posted_at: DateTime<Utc>,
) -> WeeklyAccrualRun {
    let weekly_hours = weekly_worked_hours(shifts, week);
    let decision = evaluate_accrual(weekly_hours, policy);
    let already_accrued = entries
        .iter()
        .any(|e| e.kind == EntryKind::Accrual && e.related_week == Some(week));

    if already_accrued {
        debug!(
            worker_id = %worker_id,
            week = %week,
            "Skipping accrual run: week already accrued"
        );
        return WeeklyAccrualRun {
            week,
            weekly_hours,
            decision,
            already_accrued,
            entry: None,
            warnings: Vec::new(),
        };
    }

    if !decision.accrues || decision.hours <= Decimal::ZERO {
        debug!(
            worker_id = %worker_id,
            week = %week,
            weekly_hours = %weekly_hours,
            accrues = decision.accrues,
            "No accrual entry planned for week"
        );
        return WeeklyAccrualRun {
            week,
            weekly_hours,
            decision,
            already_accrued,
            entry: None,
            warnings: Vec::new(),
        };
    }

    let current_balance = balance(entries);
    let snapshot = round_hours(current_balance + decision.hours);
    let context_hours = round_hours(weekly_hours);

    let mut warnings = Vec::new();
    if policy.max_accumulated_hours > Decimal::ZERO && snapshot > policy.max_accumulated_hours {
        warnings.push(LedgerWarning {
            code: WARN_BALANCE_CAP_EXCEEDED.to_string(),
            message: format!(
                "balance {} exceeds accumulation cap {} for worker {}",
                snapshot.normalize(),
                policy.max_accumulated_hours.normalize(),
                worker_id
            ),
            severity: "warning".to_string(),
        });
    }

    let entry = LeaveLedgerEntry {
        id: Uuid::new_v4(),
        store_id: store_id.to_string(),
        worker_id: worker_id.to_string(),
        kind: EntryKind::Accrual,
        amount_hours: decision.hours,
        balance_snapshot: snapshot,
        related_request_id: None,
        related_week: Some(week),
        weekly_hours_worked: Some(context_hours),
        note: format!(
            "Weekly accrual for {} ({}h worked)",
            week,
            context_hours.normalize()
        ),
        created_by: posted_by.to_string(),
        created_at: posted_at,
    };

    info!(
        worker_id = %worker_id,
        week = %week,
        amount_hours = %decision.hours,
        balance_snapshot = %snapshot,
        "Planned weekly accrual entry"
    );

    WeeklyAccrualRun {
        week,
        weekly_hours,
        decision,
        already_accrued,
        entry: Some(entry),
        warnings,
    }
}
