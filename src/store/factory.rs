// ABOUTME: Store factory for configuration-based backend selection
// ABOUTME: Wraps the chosen slot backend in a single repository type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughmaster_core::errors::AppResult;
use doughmaster_core::models::Recipe;
use tracing::info;

use super::file::JsonFileSlot;
use super::memory::InMemorySlot;
use super::{RecipeRepository, SlotRepository};
use crate::config::{DoughMasterConfig, StoreBackend};

/// Unified recipe store over whichever backend the configuration selects
#[derive(Debug, Clone)]
pub enum RecipeStore {
    /// JSON file backend
    File(SlotRepository<JsonFileSlot>),
    /// In-memory backend
    Memory(SlotRepository<InMemorySlot>),
}

impl RecipeStore {
    /// Build the store named by `config`
    #[must_use]
    pub fn new(config: &DoughMasterConfig) -> Self {
        match config.store.backend {
            StoreBackend::File => {
                info!(
                    store.backend = "file",
                    store.path = %config.store.path.display(),
                    "Initializing recipe store"
                );
                Self::File(SlotRepository::new(JsonFileSlot::new(&config.store.path)))
            }
            StoreBackend::Memory => {
                info!(store.backend = "memory", "Initializing recipe store");
                Self::Memory(SlotRepository::new(InMemorySlot::new()))
            }
        }
    }

    /// Build the store from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error if the environment configuration is invalid
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(&DoughMasterConfig::from_env()?))
    }

    /// Backend name for logs and CLI output
    #[must_use]
    pub const fn backend(&self) -> StoreBackend {
        match self {
            Self::File(_) => StoreBackend::File,
            Self::Memory(_) => StoreBackend::Memory,
        }
    }
}

impl RecipeRepository for RecipeStore {
    fn list(&self) -> AppResult<Vec<Recipe>> {
        match self {
            Self::File(repository) => repository.list(),
            Self::Memory(repository) => repository.list(),
        }
    }

    fn replace_all(&self, recipes: &[Recipe]) -> AppResult<()> {
        match self {
            Self::File(repository) => repository.replace_all(recipes),
            Self::Memory(repository) => repository.replace_all(recipes),
        }
    }
}
