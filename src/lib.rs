//! Leave Accrual & Ledger Engine for hourly and part-time workers
//!
//! This crate derives weekly worked hours from shift records, evaluates a
//! store's accrual policy to decide whether a worker's leave balance grows
//! that week, and maintains an append-only leave ledger from which balances,
//! monthly summaries, and payroll figures are derived. Persistence and UI
//! are external collaborators: the engine consumes their records and plans
//! the ledger entries they should append.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
