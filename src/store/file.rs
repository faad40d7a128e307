// ABOUTME: JSON file recipe slot used by the CLI
// ABOUTME: Writes go to a sibling temp file first and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use doughmaster_core::errors::{AppError, AppResult};
use tracing::debug;

use super::RecipeSlot;

/// Slot stored as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Slot at `path`; nothing is touched until the first read or write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the slot file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecipeSlot for JsonFileSlot {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn read(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read recipe store {}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }

    fn write(&self, contents: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("Failed to create {}", parent.display())).with_source(e)
            })?;
        }

        let temp = self.temp_path();
        fs::write(&temp, contents).map_err(|e| {
            AppError::storage(format!("Failed to write {}", temp.display())).with_source(e)
        })?;
        fs::rename(&temp, &self.path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}", self.path.display())).with_source(e)
        })?;

        debug!(path = %self.path.display(), bytes = contents.len(), "Recipe store file written");
        Ok(())
    }
}
