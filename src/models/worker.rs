//! Worker model.
//!
//! The payroll-relevant slice of a staff record. Authentication, contact
//! details, and roles live with the excluded user-management collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A worker as the payroll summariser sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: String,
    /// Display name used on payroll rows.
    pub name: String,
    /// Hourly wage in whole currency units per hour. Workers without a
    /// recorded wage are paid zero for leave until one is set.
    pub hourly_wage: Option<Decimal>,
}
