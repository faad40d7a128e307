// ABOUTME: In-memory recipe slot for tests and embedding
// ABOUTME: Holds the serialized collection behind a RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::{Arc, RwLock};

use doughmaster_core::errors::{AppError, AppResult};

use super::RecipeSlot;

/// Slot kept in process memory
///
/// Clones share the same contents, so a test can keep a handle and inspect
/// what a repository wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    contents: Arc<RwLock<Option<String>>>,
}

impl InMemorySlot {
    /// Empty slot, as if never written
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with raw contents
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }

    /// Current raw contents
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned
    pub fn snapshot(&self) -> AppResult<Option<String>> {
        self.read()
    }
}

impl RecipeSlot for InMemorySlot {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn read(&self) -> AppResult<Option<String>> {
        let guard = self
            .contents
            .read()
            .map_err(|e| AppError::internal(format!("In-memory slot lock poisoned: {e}")))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> AppResult<()> {
        let mut guard = self
            .contents
            .write()
            .map_err(|e| AppError::internal(format!("In-memory slot lock poisoned: {e}")))?;
        *guard = Some(contents.to_owned());
        Ok(())
    }
}
