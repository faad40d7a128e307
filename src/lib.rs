// ABOUTME: Main library entry point for DoughMaster
// ABOUTME: Recipe storage, editor session, navigation routes, and print payloads over the formulation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # DoughMaster
//!
//! Baker's-percentage bread formulation with local recipe storage.
//!
//! ## Architecture
//!
//! - **`doughmaster-core`**: errors, constants, and the recipe data model
//! - **`doughmaster-formulation`**: pure engine from recipe to ingredient weights
//! - **store**: one key-value slot holding every recipe, with pluggable backends
//! - **services**: recipe book enforcing naming and collision rules
//! - **editor**: the draft being edited and the list selection
//! - **routes** / **export**: navigation identity and print payloads
//!
//! ## Example Usage
//!
//! ```rust
//! use doughmaster::editor::RecipeEditor;
//! use doughmaster::services::RecipeBook;
//! use doughmaster::store::{memory::InMemorySlot, SlotRepository};
//!
//! # fn example() -> doughmaster_core::AppResult<()> {
//! let mut book = RecipeBook::open(SlotRepository::new(InMemorySlot::new()));
//! let mut editor = RecipeEditor::new();
//! editor.set_name("Sourdough");
//! let saved = editor.save_as_new(&mut book)?;
//! assert_eq!(saved.name, "Sourdough");
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Editor session over a recipe book
pub mod editor;

/// Print and export payloads
pub mod export;

/// Structured logging setup
pub mod logging;

/// Recipe navigation paths
pub mod routes;

/// Recipe book and other domain services
pub mod services;

/// Recipe slot backends and repository
pub mod store;

pub use doughmaster_core::{AppError, AppResult, ErrorCode, Recipe};
pub use doughmaster_formulation::{formulate, FormulationReport};
