// ABOUTME: Explicit recipe state transitions for edits that carry side rules
// ABOUTME: Egg toggling, composition toggles, component and amendment editing, clamped setters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Editing transitions
//!
//! Every edit is a `Recipe -> Recipe` function so each rule can be tested
//! without a UI. Numeric setters clamp to the field bounds in
//! `doughmaster_core::constants::bounds`.

use doughmaster_core::constants::bounds::{
    ADDITIVE_PERCENTAGE, COMPONENT_WEIGHT, FLOUR_SHARE, FLOUR_WEIGHT, HYDRATION_PERCENTAGE,
    SALT_PERCENTAGE, YEAST_PERCENTAGE,
};
use doughmaster_core::constants::labels::{CUSTOM_FLOUR_PREFIX, CUSTOM_LIQUID_PREFIX};
use doughmaster_core::models::{
    default_flour_set, default_liquid_set, Amendment, ComponentId, FlourComponent,
    LiquidComponent, Recipe,
};

use crate::clamp::clamp_input;
use crate::flour_blend::remove_flour_component;
use crate::hydration::default_egg_count;

/// Percentage-driven optional additive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Additive {
    /// Sugar
    Sugar,
    /// Butter
    Butter,
    /// Oil
    Oil,
}

// ============================================================================
// Core fields
// ============================================================================

/// Set total flour weight
///
/// With eggs enabled and a stored count of 0, the count snaps to the
/// default for the new weight.
#[must_use]
pub fn set_flour_weight(mut recipe: Recipe, grams: f64) -> Recipe {
    recipe.flour_weight = clamp_input(grams, FLOUR_WEIGHT);
    if recipe.use_egg && recipe.egg_count == 0 {
        recipe.egg_count = default_egg_count(recipe.flour_weight);
    }
    recipe
}

/// Set desired hydration
#[must_use]
pub fn set_hydration(mut recipe: Recipe, percentage: f64) -> Recipe {
    recipe.desired_hydration_percentage = clamp_input(percentage, HYDRATION_PERCENTAGE);
    recipe
}

/// Set salt percentage
#[must_use]
pub fn set_salt(mut recipe: Recipe, percentage: f64) -> Recipe {
    recipe.salt_percentage = clamp_input(percentage, SALT_PERCENTAGE);
    recipe
}

/// Set yeast percentage
#[must_use]
pub fn set_yeast(mut recipe: Recipe, percentage: f64) -> Recipe {
    recipe.yeast_percentage = clamp_input(percentage, YEAST_PERCENTAGE);
    recipe
}

// ============================================================================
// Optional additives and eggs
// ============================================================================

/// Toggle sugar, butter, or oil
#[must_use]
pub fn set_additive_enabled(mut recipe: Recipe, additive: Additive, enabled: bool) -> Recipe {
    match additive {
        Additive::Sugar => recipe.use_sugar = enabled,
        Additive::Butter => recipe.use_butter = enabled,
        Additive::Oil => recipe.use_oil = enabled,
    }
    recipe
}

/// Set the percentage for sugar, butter, or oil
#[must_use]
pub fn set_additive_percentage(mut recipe: Recipe, additive: Additive, percentage: f64) -> Recipe {
    let value = clamp_input(percentage, ADDITIVE_PERCENTAGE);
    match additive {
        Additive::Sugar => recipe.sugar_percentage = value,
        Additive::Butter => recipe.butter_percentage = value,
        Additive::Oil => recipe.oil_percentage = value,
    }
    recipe
}

/// Enable eggs, snapping a zero count to the flour-based default
#[must_use]
pub fn enable_eggs(mut recipe: Recipe) -> Recipe {
    recipe.use_egg = true;
    if recipe.egg_count == 0 {
        recipe.egg_count = default_egg_count(recipe.flour_weight);
    }
    recipe
}

/// Disable eggs; the stored count is kept for re-enabling
#[must_use]
pub fn disable_eggs(mut recipe: Recipe) -> Recipe {
    recipe.use_egg = false;
    recipe
}

/// Store a raw egg count
///
/// The count may transiently be 0 while eggs are enabled; calculations
/// still use at least one egg.
#[must_use]
pub fn set_egg_count(mut recipe: Recipe, count: u32) -> Recipe {
    recipe.egg_count = count;
    recipe
}

// ============================================================================
// Flour blend
// ============================================================================

/// Enable detailed flour composition, seeding the Default Flour Set when empty
#[must_use]
pub fn enable_detailed_composition(mut recipe: Recipe) -> Recipe {
    recipe.use_detailed_flour_composition = true;
    if recipe.flour_composition.is_empty() {
        recipe.flour_composition = default_flour_set();
    }
    recipe
}

/// Disable detailed flour composition
#[must_use]
pub fn disable_detailed_composition(mut recipe: Recipe) -> Recipe {
    recipe.use_detailed_flour_composition = false;
    recipe
}

/// Append a custom flour named "Custom Flour N" at share 0
#[must_use]
pub fn add_custom_flour(mut recipe: Recipe) -> Recipe {
    let custom_count = recipe.flour_composition.iter().filter(|f| f.is_custom).count();
    recipe.flour_composition.push(FlourComponent::custom(
        format!("{CUSTOM_FLOUR_PREFIX} {}", custom_count + 1),
        0.0,
    ));
    recipe
}

/// Set a flour component's share value
#[must_use]
pub fn set_flour_share(mut recipe: Recipe, id: &ComponentId, share: f64) -> Recipe {
    let share = clamp_input(share, FLOUR_SHARE);
    if let Some(component) = recipe.flour_composition.iter_mut().find(|c| &c.id == id) {
        component.share_value = share;
    }
    recipe
}

/// Rename a custom flour
///
/// Blank names are rejected and the current name kept. Predefined flours
/// keep their names.
#[must_use]
pub fn rename_flour(mut recipe: Recipe, id: &ComponentId, name: &str) -> Recipe {
    let name = name.trim();
    if name.is_empty() {
        return recipe;
    }
    if let Some(component) = recipe
        .flour_composition
        .iter_mut()
        .find(|c| &c.id == id && c.is_custom)
    {
        name.clone_into(&mut component.name);
    }
    recipe
}

/// Remove a flour component, keeping the blend defined
#[must_use]
pub fn remove_flour(mut recipe: Recipe, id: &ComponentId) -> Recipe {
    recipe.flour_composition = remove_flour_component(&recipe.flour_composition, id);
    recipe
}

// ============================================================================
// Liquid blend
// ============================================================================

/// Enable the custom liquid blend, seeding the Default Liquid Set when empty
#[must_use]
pub fn enable_liquid_blend(mut recipe: Recipe) -> Recipe {
    recipe.use_custom_liquid_blend = true;
    if recipe.liquid_composition.is_empty() {
        recipe.liquid_composition = default_liquid_set();
    }
    recipe
}

/// Disable the custom liquid blend
#[must_use]
pub fn disable_liquid_blend(mut recipe: Recipe) -> Recipe {
    recipe.use_custom_liquid_blend = false;
    recipe
}

/// Append a custom liquid named "Custom Liquid N" at 0 g
#[must_use]
pub fn add_custom_liquid(mut recipe: Recipe) -> Recipe {
    let custom_count = recipe.liquid_composition.iter().filter(|l| l.is_custom).count();
    recipe.liquid_composition.push(LiquidComponent::custom(
        format!("{CUSTOM_LIQUID_PREFIX} {}", custom_count + 1),
        0.0,
    ));
    recipe
}

/// Set a liquid component's weight
#[must_use]
pub fn set_liquid_weight(mut recipe: Recipe, id: &ComponentId, grams: f64) -> Recipe {
    let grams = clamp_input(grams, COMPONENT_WEIGHT);
    if let Some(component) = recipe.liquid_composition.iter_mut().find(|c| &c.id == id) {
        component.weight = grams;
    }
    recipe
}

/// Rename a custom liquid; blank names are rejected
#[must_use]
pub fn rename_liquid(mut recipe: Recipe, id: &ComponentId, name: &str) -> Recipe {
    let name = name.trim();
    if name.is_empty() {
        return recipe;
    }
    if let Some(component) = recipe
        .liquid_composition
        .iter_mut()
        .find(|c| &c.id == id && c.is_custom)
    {
        name.clone_into(&mut component.name);
    }
    recipe
}

/// Remove a liquid component
#[must_use]
pub fn remove_liquid(mut recipe: Recipe, id: &ComponentId) -> Recipe {
    recipe.liquid_composition.retain(|c| &c.id != id);
    recipe
}

// ============================================================================
// Amendments
// ============================================================================

/// Append a blank amendment
#[must_use]
pub fn add_amendment(mut recipe: Recipe) -> Recipe {
    recipe.amendments.push(Amendment::new("", 0.0));
    recipe
}

/// Change an amendment's name
#[must_use]
pub fn set_amendment_name(mut recipe: Recipe, id: &ComponentId, name: &str) -> Recipe {
    if let Some(amendment) = recipe.amendments.iter_mut().find(|a| &a.id == id) {
        name.clone_into(&mut amendment.name);
    }
    recipe
}

/// Change an amendment's weight
#[must_use]
pub fn set_amendment_weight(mut recipe: Recipe, id: &ComponentId, grams: f64) -> Recipe {
    let grams = clamp_input(grams, COMPONENT_WEIGHT);
    if let Some(amendment) = recipe.amendments.iter_mut().find(|a| &a.id == id) {
        amendment.weight = grams;
    }
    recipe
}

/// Remove an amendment
#[must_use]
pub fn remove_amendment(mut recipe: Recipe, id: &ComponentId) -> Recipe {
    recipe.amendments.retain(|a| &a.id != id);
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_eggs_snaps_zero_count() {
        let recipe = Recipe {
            flour_weight: 900.0,
            egg_count: 0,
            ..Recipe::default()
        };
        let recipe = enable_eggs(recipe);
        assert!(recipe.use_egg);
        assert_eq!(recipe.egg_count, 3);
    }

    #[test]
    fn test_enable_eggs_keeps_existing_count() {
        let recipe = enable_eggs(Recipe {
            egg_count: 4,
            ..Recipe::default()
        });
        assert_eq!(recipe.egg_count, 4);
    }

    #[test]
    fn test_flour_change_snaps_zero_eggs() {
        let recipe = set_egg_count(enable_eggs(Recipe::default()), 0);
        let recipe = set_flour_weight(recipe, 600.0);
        assert_eq!(recipe.egg_count, 2);
    }

    #[test]
    fn test_setters_clamp() {
        let recipe = set_hydration(Recipe::default(), 400.0);
        assert_eq!(recipe.desired_hydration_percentage, 150.0);
        let recipe = set_salt(recipe, -1.0);
        assert_eq!(recipe.salt_percentage, 0.0);
        let recipe = set_flour_weight(recipe, -20.0);
        assert_eq!(recipe.flour_weight, 0.0);
    }

    #[test]
    fn test_enable_composition_seeds_default_flours() {
        let recipe = enable_detailed_composition(Recipe::default());
        assert_eq!(recipe.flour_composition.len(), 4);
    }

    #[test]
    fn test_custom_flour_naming_and_rename() {
        let recipe = add_custom_flour(add_custom_flour(enable_detailed_composition(Recipe::default())));
        assert_eq!(recipe.flour_composition[4].name, "Custom Flour 1");
        assert_eq!(recipe.flour_composition[5].name, "Custom Flour 2");

        let id = recipe.flour_composition[4].id.clone();
        let recipe = rename_flour(recipe, &id, "   ");
        assert_eq!(recipe.flour_composition[4].name, "Custom Flour 1");
        let recipe = rename_flour(recipe, &id, " Einkorn ");
        assert_eq!(recipe.flour_composition[4].name, "Einkorn");
    }

    #[test]
    fn test_predefined_flour_names_are_fixed() {
        let recipe = enable_detailed_composition(Recipe::default());
        let id = recipe.flour_composition[0].id.clone();
        let recipe = rename_flour(recipe, &id, "Renamed");
        assert_eq!(recipe.flour_composition[0].name, "Bread Flour");
    }

    #[test]
    fn test_liquid_blend_seeds_milk() {
        let recipe = enable_liquid_blend(Recipe::default());
        assert_eq!(recipe.liquid_composition.len(), 1);
        assert_eq!(recipe.liquid_composition[0].name, "Milk");
    }

    #[test]
    fn test_amendment_lifecycle() {
        let recipe = add_amendment(Recipe::default());
        let id = recipe.amendments[0].id.clone();
        let recipe = set_amendment_weight(set_amendment_name(recipe, &id, "Walnuts"), &id, -5.0);
        assert_eq!(recipe.amendments[0].name, "Walnuts");
        assert_eq!(recipe.amendments[0].weight, 0.0);
        let recipe = remove_amendment(recipe, &id);
        assert!(recipe.amendments.is_empty());
    }
}
