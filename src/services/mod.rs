// ABOUTME: Domain service layer for recipe persistence rules
// ABOUTME: Provides the recipe book used by the editor session and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold business rules that sit between the pure formulation engine
//! and storage, so the editor and the CLI apply the same naming rules.

/// Recipe book: save, rename, duplicate, delete, pin, and tiles
pub mod recipes;

pub use recipes::{RecipeBook, RecipeTile};
