// ABOUTME: Environment configuration management for store selection and deployment settings
// ABOUTME: Reads DOUGHMASTER_* variables with warnings and defaults for invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::path::PathBuf;

use doughmaster_core::constants::storage::{APP_DIR_NAME, RECIPES_SLOT_KEY, SLOT_FILE_EXTENSION};
use doughmaster_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::types::{Environment, StoreBackend};

/// Environment variable selecting the store backend
pub const STORE_BACKEND_ENV: &str = "DOUGHMASTER_STORE";
/// Environment variable overriding the JSON file location
pub const STORE_PATH_ENV: &str = "DOUGHMASTER_STORE_PATH";
/// Environment variable naming the deployment environment
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";

/// Recipe store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend holding the recipe slot
    pub backend: StoreBackend,
    /// File location for the file backend
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DoughMasterConfig {
    /// Recipe store
    pub store: StoreConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl DoughMasterConfig {
    /// Load configuration from environment variables
    ///
    /// Unknown backend names fall back to the file backend with a warning.
    ///
    /// # Errors
    ///
    /// Returns a config error if the resulting configuration is invalid
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let backend = match env::var(STORE_BACKEND_ENV) {
            Ok(raw) => StoreBackend::parse(&raw).unwrap_or_else(|| {
                warn!(
                    value = %raw,
                    "Unknown {STORE_BACKEND_ENV} value, falling back to {}",
                    StoreBackend::default()
                );
                StoreBackend::default()
            }),
            Err(_) => StoreBackend::default(),
        };

        let path = env::var(STORE_PATH_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map_or_else(default_store_path, PathBuf::from);

        let config = Self {
            store: StoreConfig { backend, path },
            environment: Environment::from_str_or_default(&env_var_or(ENVIRONMENT_ENV, "development")),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Override the store backend
    #[must_use]
    pub const fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.store.backend = backend;
        self
    }

    /// Override the store file path
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.path = path.into();
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a config error when the file backend has no usable path
    pub fn validate(&self) -> AppResult<()> {
        if self.store.backend == StoreBackend::File && self.store.path.as_os_str().is_empty() {
            return Err(AppError::config("File store selected but no store path is set")
                .with_field(STORE_PATH_ENV));
        }
        Ok(())
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        match self.store.backend {
            StoreBackend::File => format!(
                "DoughMaster ({}): file store at {}",
                self.environment,
                self.store.path.display()
            ),
            StoreBackend::Memory => format!("DoughMaster ({}): in-memory store", self.environment),
        }
    }
}

/// `<data dir>/doughmaster/doughMasterRecipes.json`, or the working directory
/// when the platform has no data directory
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_default()
        .join(format!("{RECIPES_SLOT_KEY}.{SLOT_FILE_EXTENSION}"))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_slot_file() {
        let path = default_store_path();
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("doughMasterRecipes.json")
        );
    }

    #[test]
    fn test_file_backend_requires_path() {
        let config = DoughMasterConfig::default().with_store_path("");
        assert!(config.validate().is_err());
        assert!(config.with_backend(StoreBackend::Memory).validate().is_ok());
    }
}
