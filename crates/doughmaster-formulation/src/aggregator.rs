// ABOUTME: Recipe aggregator assembling component weights into the ingredient list and totals
// ABOUTME: Produces the FormulationReport consumed by display, print, and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughmaster_core::constants::labels;
use doughmaster_core::models::Recipe;
use serde::Serialize;
use tracing::trace;

use crate::conversion::weight_from_percentage;
use crate::flour_blend::{normalize_flour_blend, FlourBreakdownEntry};
use crate::format::{format_grams, QuantityStyle};
use crate::hydration::{resolve_hydration, HydrationBreakdown};

/// One line of the printable ingredient list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientLine {
    /// Display name
    pub name: String,
    /// Formatted quantity such as `"325.0g"`
    pub quantity: String,
    /// Unformatted grams
    #[serde(skip)]
    pub grams: f64,
}

impl IngredientLine {
    fn new(name: impl Into<String>, grams: f64, style: QuantityStyle) -> Self {
        Self {
            name: name.into(),
            quantity: format_grams(grams, style),
            grams,
        }
    }
}

/// Weight of every percentage-driven component, 0 when toggled off
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentWeights {
    /// Salt
    pub salt: f64,
    /// Yeast
    pub yeast: f64,
    /// Sugar
    pub sugar: f64,
    /// Butter
    pub butter: f64,
    /// Oil
    pub oil: f64,
    /// Sum of all amendment weights
    pub amendments: f64,
}

/// Totals shown under the ingredient list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulationSummary {
    /// Sum of every ingredient weight
    pub total_dough_weight: f64,
    /// Echo of the desired hydration, 0 when there is no flour
    pub overall_hydration_display: f64,
}

/// Everything derived from a recipe in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulationReport {
    /// Normalized flour breakdown
    pub flour: Vec<FlourBreakdownEntry>,
    /// Liquid sources and added water
    pub hydration: HydrationBreakdown,
    /// Percentage-driven component weights
    pub weights: ComponentWeights,
    /// Ordered ingredient list
    pub ingredients: Vec<IngredientLine>,
    /// Totals
    pub summary: FormulationSummary,
}

fn optional_weight(enabled: bool, flour_weight: f64, percentage: f64) -> f64 {
    if enabled {
        weight_from_percentage(flour_weight, percentage)
    } else {
        0.0
    }
}

/// Compute component weights for a recipe
#[must_use]
pub fn component_weights(recipe: &Recipe) -> ComponentWeights {
    let flour = recipe.flour_weight;
    ComponentWeights {
        salt: weight_from_percentage(flour, recipe.salt_percentage),
        yeast: weight_from_percentage(flour, recipe.yeast_percentage),
        sugar: optional_weight(recipe.use_sugar, flour, recipe.sugar_percentage),
        butter: optional_weight(recipe.use_butter, flour, recipe.butter_percentage),
        oil: optional_weight(recipe.use_oil, flour, recipe.oil_percentage),
        amendments: recipe.amendments.iter().map(|a| a.weight.max(0.0)).sum(),
    }
}

/// Derive the full formulation for a recipe
///
/// Pure and recomputed on demand. The displayed hydration is the desired
/// hydration echoed back, not a value recomputed from realized weights.
#[must_use]
pub fn formulate(recipe: &Recipe) -> FormulationReport {
    let flour = normalize_flour_blend(recipe);
    let hydration = resolve_hydration(recipe);
    let weights = component_weights(recipe);

    let flour_weight = recipe.flour_weight.max(0.0);
    let total_dough_weight = flour_weight
        + hydration.net_added_water
        + weights.salt
        + weights.yeast
        + weights.sugar
        + hydration.total_egg_weight
        + weights.butter
        + weights.oil
        + hydration.liquid_blend_weight
        + weights.amendments;

    let overall_hydration_display = if recipe.flour_weight > 0.0 {
        recipe.desired_hydration_percentage
    } else {
        0.0
    };

    let ingredients = ingredient_list(recipe, &flour, &hydration, &weights);
    trace!(
        recipe.name = %recipe.name,
        total_dough_weight,
        lines = ingredients.len(),
        "Formulated recipe"
    );

    FormulationReport {
        flour,
        hydration,
        weights,
        ingredients,
        summary: FormulationSummary {
            total_dough_weight,
            overall_hydration_display,
        },
    }
}

/// Build the ordered ingredient list
///
/// Order: flours, added water, eggs, custom liquids, salt, yeast, sugar,
/// butter, oil, amendments.
fn ingredient_list(
    recipe: &Recipe,
    flour: &[FlourBreakdownEntry],
    hydration: &HydrationBreakdown,
    weights: &ComponentWeights,
) -> Vec<IngredientLine> {
    let mut lines = Vec::new();

    lines.extend(
        flour
            .iter()
            .filter(|entry| entry.weight > 0.0)
            .map(|entry| IngredientLine::new(entry.name.clone(), entry.weight, QuantityStyle::Standard)),
    );

    if hydration.net_added_water > 0.0 {
        lines.push(IngredientLine::new(
            labels::WATER,
            hydration.net_added_water,
            QuantityStyle::Standard,
        ));
    }

    if recipe.use_egg && hydration.total_egg_weight > 0.0 {
        lines.push(IngredientLine::new(
            egg_label(hydration),
            hydration.total_egg_weight,
            QuantityStyle::WholeUnits,
        ));
    }

    if recipe.use_custom_liquid_blend {
        lines.extend(
            recipe
                .liquid_composition
                .iter()
                .filter(|liquid| liquid.weight > 0.0)
                .map(|liquid| IngredientLine::new(liquid.name.clone(), liquid.weight, QuantityStyle::Standard)),
        );
    }

    lines.push(IngredientLine::new(labels::SALT, weights.salt, QuantityStyle::Standard));
    lines.push(IngredientLine::new(labels::YEAST, weights.yeast, QuantityStyle::Yeast));

    for (enabled, label, grams) in [
        (recipe.use_sugar, labels::SUGAR, weights.sugar),
        (recipe.use_butter, labels::BUTTER, weights.butter),
        (recipe.use_oil, labels::OIL, weights.oil),
    ] {
        if enabled && grams > 0.0 {
            lines.push(IngredientLine::new(label, grams, QuantityStyle::Standard));
        }
    }

    lines.extend(
        recipe
            .amendments
            .iter()
            .filter(|amendment| amendment.is_listed())
            .map(|amendment| {
                IngredientLine::new(amendment.name.trim(), amendment.weight, QuantityStyle::Standard)
            }),
    );

    lines
}

fn egg_label(hydration: &HydrationBreakdown) -> String {
    format!(
        "Eggs ({}, ~{:.1}g water)",
        hydration.effective_egg_count, hydration.water_from_eggs
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use doughmaster_core::models::{default_flour_set, Amendment, LiquidComponent};

    #[test]
    fn test_basic_total_dough_weight() {
        let report = formulate(&Recipe::default());
        assert!((report.summary.total_dough_weight - 840.0).abs() < 1e-9);
        assert_eq!(report.summary.overall_hydration_display, 65.0);
    }

    #[test]
    fn test_zero_flour_hides_hydration() {
        let recipe = Recipe {
            flour_weight: 0.0,
            ..Recipe::default()
        };
        let report = formulate(&recipe);
        assert_eq!(report.summary.overall_hydration_display, 0.0);
        assert_eq!(report.summary.total_dough_weight, 0.0);
    }

    #[test]
    fn test_ingredient_order() {
        let recipe = Recipe {
            use_detailed_flour_composition: true,
            flour_composition: default_flour_set(),
            use_custom_liquid_blend: true,
            liquid_composition: vec![LiquidComponent::predefined("Milk", 50.0)],
            use_egg: true,
            egg_count: 1,
            use_sugar: true,
            use_butter: true,
            use_oil: true,
            amendments: vec![Amendment::new("Seeds", 30.0), Amendment::new("  ", 10.0)],
            ..Recipe::default()
        };

        let names: Vec<String> = formulate(&recipe)
            .ingredients
            .into_iter()
            .map(|line| line.name)
            .collect();

        assert_eq!(
            names,
            vec![
                "Bread Flour".to_owned(),
                "Water".to_owned(),
                "Eggs (1, ~37.5g water)".to_owned(),
                "Milk".to_owned(),
                "Salt".to_owned(),
                "Yeast".to_owned(),
                "Sugar".to_owned(),
                "Butter".to_owned(),
                "Oil".to_owned(),
                "Seeds".to_owned(),
            ]
        );
    }

    #[test]
    fn test_disabled_additives_contribute_nothing() {
        let recipe = Recipe {
            sugar_percentage: 20.0,
            butter_percentage: 20.0,
            ..Recipe::default()
        };
        let weights = component_weights(&recipe);
        assert_eq!(weights.sugar, 0.0);
        assert_eq!(weights.butter, 0.0);
    }

    #[test]
    fn test_egg_line_uses_whole_grams() {
        let recipe = Recipe {
            use_egg: true,
            egg_count: 2,
            ..Recipe::default()
        };
        let report = formulate(&recipe);
        let eggs = report
            .ingredients
            .iter()
            .find(|line| line.name.starts_with("Eggs"));
        assert_eq!(eggs.map(|line| line.quantity.as_str()), Some("100g"));
    }
}
