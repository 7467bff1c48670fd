//! Configuration loading and management for the leave engine.
//!
//! This module provides functionality to load store configuration from
//! YAML files, including store metadata and the active leave policy.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/store-001").unwrap();
//! println!("Loaded policy for store: {}", loader.store().name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{PayCycle, StoreConfig, StoreMetadata};
