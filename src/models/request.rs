//! Leave request model.
//!
//! Requests are owned by the external approval workflow; the engine only
//! consumes approved requests when planning `use` ledger entries and when
//! listing leave dates for payroll.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The review state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; consumes leave hours via a `use` ledger entry.
    Approved,
    /// Declined; has no ledger effect.
    Rejected,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A worker's request to take paid leave on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The store the request belongs to.
    pub store_id: String,
    /// The worker requesting leave.
    pub worker_id: String,
    /// The date the leave would be taken.
    pub date: NaiveDate,
    /// The number of leave hours requested (positive).
    pub amount_hours: Decimal,
    /// The current review state.
    pub status: RequestStatus,
    /// Optional free-text reason given by the worker.
    pub reason: Option<String>,
    /// Who reviewed the request, once decided.
    pub reviewed_by: Option<String>,
    /// When the request was reviewed, once decided.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Returns `true` when the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == RequestStatus::Approved
    }
}
