//! Calculation logic for the leave accrual and ledger engine.
//!
//! This module contains all the calculation functions for turning shifts
//! into net worked time, aggregating hours by ISO week, evaluating accrual
//! policies, planning ledger entries for weekly accruals, leave use, and
//! manual adjustments, summarising ledgers by balance, month, and payroll
//! period, and formatting hour balances as whole days for display.

mod accrual;
mod accrual_run;
mod adjustment;
mod balance;
mod day_format;
mod leave_use;
mod payroll;
mod rounding;
mod weekly_hours;

pub use accrual::{AccrualDecision, evaluate_accrual};
pub use accrual_run::{WARN_BALANCE_CAP_EXCEEDED, WeeklyAccrualRun, run_weekly_accrual};
pub use adjustment::plan_adjustment;
pub use balance::{MonthlySummary, balance, monthly_summary};
pub use day_format::{DEFAULT_HOURS_PER_DAY, format_as_days};
pub use leave_use::{LeaveUsePlan, WARN_INSUFFICIENT_BALANCE, covers, plan_leave_use};
pub use payroll::{PayrollRow, payroll_rows};
pub use rounding::{round_currency, round_hours, round_remainder};
pub use weekly_hours::{WeekSummary, weekly_breakdown, weekly_worked_hours};
