//! Core data models for the Leave Accrual & Ledger Engine.
//!
//! This module contains all the domain records the engine consumes and
//! produces.

mod ledger;
mod period;
mod policy;
mod request;
mod shift;
mod week;
mod worker;

pub use ledger::{EntryKind, LeaveLedgerEntry, LedgerWarning};
pub use period::PayrollPeriod;
pub use policy::{AccrualMode, LeavePolicy};
pub use request::{LeaveRequest, RequestStatus};
pub use shift::{net_minutes, FieldChange, Shift, ShiftSource};
pub use week::WeekKey;
pub use worker::Worker;
