// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Egg model constants, numeric input bounds, storage keys, and route tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Input bounds for every numeric field the editor accepts
pub mod bounds;

/// Egg model used by the hydration resolver
pub mod eggs {
    /// Average whole large egg weight in grams
    pub const EGG_UNIT_WEIGHT_G: f64 = 50.0;
    /// Fraction of an egg's weight that is water
    pub const EGG_WATER_FRACTION: f64 = 0.75;
    /// Flour weight that calls for one egg when eggs are first enabled
    pub const FLOUR_PER_EGG_G: f64 = 300.0;
}

/// Display names for synthesized ingredient list entries
pub mod labels {
    /// Single synthetic entry used when no detailed flour blend applies
    pub const FLOUR_TOTAL: &str = "Flour (Total)";
    /// Directly added water
    pub const WATER: &str = "Water";
    /// Salt
    pub const SALT: &str = "Salt";
    /// Yeast
    pub const YEAST: &str = "Yeast";
    /// Sugar
    pub const SUGAR: &str = "Sugar";
    /// Butter
    pub const BUTTER: &str = "Butter";
    /// Oil
    pub const OIL: &str = "Oil";
    /// Prefix for generated custom flour names
    pub const CUSTOM_FLOUR_PREFIX: &str = "Custom Flour";
    /// Prefix for generated custom liquid names
    pub const CUSTOM_LIQUID_PREFIX: &str = "Custom Liquid";
}

/// Persistence slot naming
pub mod storage {
    /// Name of the single key-value slot holding every saved recipe
    pub const RECIPES_SLOT_KEY: &str = "doughMasterRecipes";
    /// File extension for the JSON file backend
    pub const SLOT_FILE_EXTENSION: &str = "json";
    /// Application directory under the platform data directory
    pub const APP_DIR_NAME: &str = "doughmaster";
}

/// Navigation identity
pub mod routes {
    /// Route token meaning "no recipe loaded, start from defaults"
    pub const NEW_RECIPE_TOKEN: &str = "new";
    /// Base path recipes are addressed under
    pub const RECIPES_BASE: &str = "/recipes";
}

/// Service identification for structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const DOUGHMASTER: &str = "doughmaster";
}
