//! Configuration types for store setup.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The leave policy itself
//! is [`crate::models::LeavePolicy`]; policy files and stored policy
//! records share that one shape.

use serde::Deserialize;

use crate::models::LeavePolicy;

/// How often the store runs payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCycle {
    /// One payroll period per calendar month.
    Monthly,
    /// One payroll period per week.
    Weekly,
}

/// Metadata about the store.
///
/// Contains identifying information about the store, including its id,
/// display name, payroll cadence, and operating timezone.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreMetadata {
    /// The store identifier (e.g., "store-001").
    pub store_id: String,
    /// The human-readable name of the store.
    pub name: String,
    /// How often the store runs payroll.
    pub pay_cycle: PayCycle,
    /// Day of the month wages are paid on.
    pub pay_day: u8,
    /// IANA timezone name the store operates in.
    pub timezone: String,
}

/// The complete store configuration loaded from YAML files.
///
/// This struct aggregates the store metadata and the active leave policy
/// loaded from a store configuration directory.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store metadata.
    store: StoreMetadata,
    /// The active leave policy for the store.
    policy: LeavePolicy,
}

impl StoreConfig {
    /// Creates a new StoreConfig from its component parts.
    pub fn new(store: StoreMetadata, policy: LeavePolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the store metadata.
    pub fn store(&self) -> &StoreMetadata {
        &self.store
    }

    /// Returns the active leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }
}
