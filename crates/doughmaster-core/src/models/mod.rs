// ABOUTME: Recipe data model for the DoughMaster formulation engine
// ABOUTME: Recipe aggregate, owned components, identifiers, and built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data model
//!
//! The `Recipe` is the only unit of persistence. Flour and liquid components
//! and amendments are owned by exactly one recipe.

/// Component identifiers
pub mod ids;

/// Flour, liquid, and amendment components
pub mod components;

/// Recipe aggregate and its lenient stored form
pub mod recipe;

/// Built-in default recipe, recipe set, flour set, and liquid set
pub mod defaults;

pub use components::{Amendment, FlourComponent, LiquidComponent};
pub use defaults::{default_flour_set, default_liquid_set, default_recipe, default_recipe_set};
pub use ids::ComponentId;
pub use recipe::{Recipe, StoredRecipe};
