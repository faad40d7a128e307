// ABOUTME: Built-in defaults used for back-fill, reset, and seeding an empty store
// ABOUTME: Default recipe, default recipe set, Default Flour Set, and Default Liquid Set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::components::{FlourComponent, LiquidComponent};
use super::recipe::Recipe;

/// Name given to a recipe that has not been saved yet
pub const DEFAULT_RECIPE_NAME: &str = "New Recipe";

/// Name of the recipe seeded into an empty store
pub const SEED_RECIPE_NAME: &str = "Basic Bread";

/// Recipe every absent field is back-filled from
#[must_use]
pub fn default_recipe() -> Recipe {
    Recipe {
        name: DEFAULT_RECIPE_NAME.to_owned(),
        flour_weight: 500.0,
        desired_hydration_percentage: 65.0,
        salt_percentage: 2.0,
        yeast_percentage: 1.0,
        use_detailed_flour_composition: false,
        flour_composition: Vec::new(),
        use_custom_liquid_blend: false,
        liquid_composition: Vec::new(),
        amendments: Vec::new(),
        use_sugar: false,
        sugar_percentage: 5.0,
        use_egg: false,
        egg_count: 1,
        use_butter: false,
        butter_percentage: 10.0,
        use_oil: false,
        oil_percentage: 3.0,
        pinned: false,
        updated_at: None,
    }
}

impl Default for Recipe {
    fn default() -> Self {
        default_recipe()
    }
}

/// Collection written to a store that is empty or unreadable
#[must_use]
pub fn default_recipe_set() -> Vec<Recipe> {
    vec![Recipe {
        name: SEED_RECIPE_NAME.to_owned(),
        flour_weight: 400.0,
        desired_hydration_percentage: 65.0,
        salt_percentage: 2.0,
        yeast_percentage: 1.0,
        ..default_recipe()
    }]
}

/// Four-flour starting blend: bread flour at full share, the rest at zero
#[must_use]
pub fn default_flour_set() -> Vec<FlourComponent> {
    vec![
        FlourComponent::predefined("Bread Flour", 100.0),
        FlourComponent::predefined("Whole Wheat Flour", 0.0),
        FlourComponent::predefined("Rye Flour", 0.0),
        FlourComponent::predefined("Spelt Flour", 0.0),
    ]
}

/// Liquid blend seeded when the blend is enabled on an empty list
#[must_use]
pub fn default_liquid_set() -> Vec<LiquidComponent> {
    vec![LiquidComponent::predefined("Milk", 0.0)]
}
