//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading store
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::LeavePolicy;

use super::types::{StoreConfig, StoreMetadata};

/// Loads and provides access to store configuration.
///
/// The `PolicyLoader` reads YAML configuration files from a directory
/// and provides access to the store metadata and the active leave policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/store-001/
/// ├── store.yaml   # Store metadata
/// └── policy.yaml  # The active leave policy
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/store-001").unwrap();
/// println!("Store: {}", loader.store().name);
/// println!("Accrual mode: {}", loader.policy().mode);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: StoreConfig,
}

impl PolicyLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/store-001")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The policy's store id does not match the store metadata
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::PolicyLoader;
    ///
    /// let loader = PolicyLoader::load("./config/store-001")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load store.yaml
        let store_path = path.join("store.yaml");
        let store = Self::load_yaml::<StoreMetadata>(&store_path)?;

        // Load policy.yaml
        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<LeavePolicy>(&policy_path)?;

        if policy.store_id != store.store_id {
            return Err(EngineError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: format!(
                    "policy store_id '{}' does not match store.yaml store_id '{}'",
                    policy.store_id, store.store_id
                ),
            });
        }

        Ok(Self {
            config: StoreConfig::new(store, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the store metadata.
    pub fn store(&self) -> &StoreMetadata {
        self.config.store()
    }

    /// Returns the active leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        self.config.policy()
    }
}
