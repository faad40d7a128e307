// ABOUTME: Hydration resolver computing directly added water after eggs and liquid blend
// ABOUTME: Also owns the egg-count rules used when eggs are enabled or flour weight changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughmaster_core::constants::eggs::{EGG_UNIT_WEIGHT_G, EGG_WATER_FRACTION, FLOUR_PER_EGG_G};
use doughmaster_core::models::Recipe;
use serde::Serialize;

use crate::conversion::{percentage_from_weight, weight_from_percentage};

/// Where the recipe's liquid comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationBreakdown {
    /// Liquid needed to reach the desired hydration
    pub total_liquid_target: f64,
    /// Eggs counted in calculations
    pub effective_egg_count: u32,
    /// Whole egg weight
    pub total_egg_weight: f64,
    /// Water contributed by the eggs
    pub water_from_eggs: f64,
    /// Weight of the custom liquid blend, 0 when the blend is off
    pub liquid_blend_weight: f64,
    /// Water to add directly, never negative
    pub net_added_water: f64,
    /// Hydration actually achieved; can exceed the target
    pub realized_hydration_percentage: f64,
}

/// Resolve how much water must be added directly
///
/// When eggs or the liquid blend already meet the target, added water is
/// zero and realized hydration exceeds the target. That overshoot is
/// reported, not corrected.
#[must_use]
pub fn resolve_hydration(recipe: &Recipe) -> HydrationBreakdown {
    let total_liquid_target =
        weight_from_percentage(recipe.flour_weight, recipe.desired_hydration_percentage);

    let effective_egg_count = recipe.effective_egg_count();
    let total_egg_weight = f64::from(effective_egg_count) * EGG_UNIT_WEIGHT_G;
    let water_from_eggs = total_egg_weight * EGG_WATER_FRACTION;

    let liquid_blend_weight = if recipe.use_custom_liquid_blend {
        recipe.liquid_composition.iter().map(|l| l.weight.max(0.0)).sum()
    } else {
        0.0
    };

    let net_added_water = (total_liquid_target - water_from_eggs - liquid_blend_weight).max(0.0);
    let realized_hydration_percentage = percentage_from_weight(
        recipe.flour_weight,
        net_added_water + water_from_eggs + liquid_blend_weight,
    );

    HydrationBreakdown {
        total_liquid_target,
        effective_egg_count,
        total_egg_weight,
        water_from_eggs,
        liquid_blend_weight,
        net_added_water,
        realized_hydration_percentage,
    }
}

/// Egg count chosen when eggs are enabled with no stored count
///
/// One egg per 300 g of flour, rounded, with a minimum of one.
#[must_use]
pub fn default_egg_count(flour_weight: f64) -> u32 {
    if flour_weight <= 0.0 || !flour_weight.is_finite() {
        return 1;
    }
    ((flour_weight / FLOUR_PER_EGG_G).round() as u32).max(1)
}
