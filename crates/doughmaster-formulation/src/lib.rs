// ABOUTME: Baker's percentage formulation engine for DoughMaster
// ABOUTME: Pure functions from a recipe description to absolute ingredient weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # DoughMaster Formulation
//!
//! Deterministic rules that turn a sparse recipe (percentages, relative flour
//! shares, optional components, egg counts) into a complete ingredient list.
//! Nothing here performs I/O and nothing is cached; every derived value is
//! recomputed from the recipe on demand.
//!
//! ## Example
//!
//! ```rust
//! use doughmaster_core::Recipe;
//! use doughmaster_formulation::formulate;
//!
//! let report = formulate(&Recipe::default());
//! assert!((report.summary.total_dough_weight - 840.0).abs() < 1e-9);
//! ```

/// Percentage and weight arithmetic
pub mod conversion;

/// Flour blend normalizer
pub mod flour_blend;

/// Hydration resolver and egg rules
pub mod hydration;

/// Ingredient list and totals
pub mod aggregator;

/// Quantity formatting
pub mod format;

/// Numeric input clamping
pub mod clamp;

/// Explicit edit transitions
pub mod editing;

pub use aggregator::{
    component_weights, formulate, ComponentWeights, FormulationReport, FormulationSummary,
    IngredientLine,
};
pub use clamp::{clamp_input, parse_egg_count, parse_numeric_input};
pub use conversion::{percentage_from_weight, weight_from_percentage};
pub use flour_blend::{normalize_flour_blend, normalize_shares, remove_flour_component, FlourBreakdownEntry};
pub use format::{format_grams, QuantityStyle};
pub use hydration::{default_egg_count, resolve_hydration, HydrationBreakdown};
