//! Payroll period summaries.
//!
//! Folds shifts, ledger entries, and leave requests into one row per
//! worker for a payroll period. Rows carry hours and the paid-leave
//! amount in currency; producing a payslip document from them is the
//! caller's concern.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::rounding::{round_currency, round_hours};
use crate::models::{EntryKind, LeaveLedgerEntry, LeaveRequest, PayrollPeriod, Shift, Worker};

/// One worker's line in a payroll period summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// Worker identifier.
    pub worker_id: String,
    /// Worker display name.
    pub name: String,
    /// Net worked hours in the period, rounded to 2dp.
    pub total_work_hours: Decimal,
    /// Leave hours recorded against the period, as a positive magnitude.
    pub leave_hours_used: Decimal,
    /// Dates of approved leave falling in the period, ascending.
    pub leave_dates: Vec<NaiveDate>,
    /// Paid-leave amount in currency, rounded to whole units.
    pub paid_leave_amount: Decimal,
}

/// Builds one payroll row per worker for the given period.
///
/// Worked hours count shifts whose date falls in the period. Leave hours
/// sum the magnitudes of use entries recorded in the period, dated by
/// entry creation. Leave dates list approved requests whose leave date
/// falls in the period. The paid amount is leave hours times the worker's
/// hourly wage; a worker without a wage on file is paid zero.
///
/// Rows come back in the order of `workers`, one per worker even when a
/// worker has no activity in the period.
pub fn payroll_rows(
    workers: &[Worker],
    shifts: &[Shift],
    entries: &[LeaveLedgerEntry],
    requests: &[LeaveRequest],
    period: &PayrollPeriod,
) -> Vec<PayrollRow> {
    workers
        .iter()
        .map(|worker| {
            let worked_minutes: i64 = shifts
                .iter()
                .filter(|s| s.worker_id == worker.id && period.contains_date(s.date))
                .map(|s| s.net_minutes)
                .sum();
            let total_work_hours =
                round_hours(Decimal::new(worked_minutes, 0) / Decimal::new(60, 0));

            let leave_hours_used = round_hours(
                entries
                    .iter()
                    .filter(|e| {
                        e.worker_id == worker.id
                            && e.kind == EntryKind::Use
                            && period.contains_date(e.created_at.date_naive())
                    })
                    .map(|e| e.amount_hours.abs())
                    .sum(),
            );

            let mut leave_dates: Vec<NaiveDate> = requests
                .iter()
                .filter(|r| {
                    r.worker_id == worker.id && r.is_approved() && period.contains_date(r.date)
                })
                .map(|r| r.date)
                .collect();
            leave_dates.sort();

            let wage = worker.hourly_wage.unwrap_or(Decimal::ZERO);
            let paid_leave_amount = round_currency(leave_hours_used * wage);

            PayrollRow {
                worker_id: worker.id.clone(),
                name: worker.name.clone(),
                total_work_hours,
                leave_hours_used,
                leave_dates,
                paid_leave_amount,
            }
        })
        .collect()
}
