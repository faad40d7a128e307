// ABOUTME: Recipe aggregate and its lenient persisted form
// ABOUTME: Loading back-fills every absent optional field from the default recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::components::{Amendment, FlourComponent, LiquidComponent};
use crate::constants::bounds::{self, FieldBounds};

/// A complete dough formulation
///
/// All percentages are baker's percentages of `flour_weight`. The recipe is
/// the only unit of persistence; components live and die with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique, non-empty key within the store
    pub name: String,
    /// Total flour weight in grams
    pub flour_weight: f64,
    /// Target overall hydration, counting egg water and liquid blend
    pub desired_hydration_percentage: f64,
    /// Salt as a percentage of flour
    pub salt_percentage: f64,
    /// Yeast as a percentage of flour
    pub yeast_percentage: f64,
    /// Split the flour weight across a blend of flours
    pub use_detailed_flour_composition: bool,
    /// Ordered flour blend; persisted only while detailed composition is on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flour_composition: Vec<FlourComponent>,
    /// Count liquid components toward hydration
    pub use_custom_liquid_blend: bool,
    /// Ordered liquid blend
    #[serde(default)]
    pub liquid_composition: Vec<LiquidComponent>,
    /// Free-form solid ingredients
    #[serde(default)]
    pub amendments: Vec<Amendment>,
    /// Include sugar
    pub use_sugar: bool,
    /// Sugar as a percentage of flour
    pub sugar_percentage: f64,
    /// Include whole eggs
    pub use_egg: bool,
    /// Number of whole eggs
    pub egg_count: u32,
    /// Include butter
    pub use_butter: bool,
    /// Butter as a percentage of flour
    pub butter_percentage: f64,
    /// Include oil
    pub use_oil: bool,
    /// Oil as a percentage of flour
    pub oil_percentage: f64,
    /// Pinned to the top of the recipe list
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pinned: bool,
    /// Last modification, used only for list ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Copy of this recipe under a different name
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Set the modification marker
    #[must_use]
    pub const fn touched(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Snapshot suitable for writing to the store
    ///
    /// The flour blend is dropped while detailed composition is disabled so
    /// stored records only carry it when it takes effect.
    #[must_use]
    pub fn persistable(&self) -> Self {
        let mut snapshot = self.clone();
        if !snapshot.use_detailed_flour_composition {
            snapshot.flour_composition.clear();
        }
        snapshot
    }

    /// Egg count that calculations use: at least one while eggs are enabled
    #[must_use]
    pub fn effective_egg_count(&self) -> u32 {
        if self.use_egg {
            self.egg_count.max(1)
        } else {
            0
        }
    }
}

/// Recipe as found in storage, where any optional field may be absent
///
/// Older records predate detailed flour blends, liquid blends, and the
/// predefined additives, and some stored the added-water percentage under
/// `waterPercentage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecipe {
    /// Recipe name
    pub name: String,
    /// Total flour weight in grams
    pub flour_weight: Option<f64>,
    /// Target hydration percentage
    #[serde(alias = "waterPercentage")]
    pub desired_hydration_percentage: Option<f64>,
    /// Salt percentage
    pub salt_percentage: Option<f64>,
    /// Yeast percentage
    pub yeast_percentage: Option<f64>,
    /// Detailed flour blend toggle
    pub use_detailed_flour_composition: Option<bool>,
    /// Flour blend
    pub flour_composition: Option<Vec<FlourComponent>>,
    /// Liquid blend toggle
    pub use_custom_liquid_blend: Option<bool>,
    /// Liquid blend
    pub liquid_composition: Option<Vec<LiquidComponent>>,
    /// Amendments
    pub amendments: Option<Vec<Amendment>>,
    /// Sugar toggle
    pub use_sugar: Option<bool>,
    /// Sugar percentage
    pub sugar_percentage: Option<f64>,
    /// Egg toggle
    pub use_egg: Option<bool>,
    /// Egg count, possibly written as a float by other tools
    pub egg_count: Option<f64>,
    /// Butter toggle
    pub use_butter: Option<bool>,
    /// Butter percentage
    pub butter_percentage: Option<f64>,
    /// Oil toggle
    pub use_oil: Option<bool>,
    /// Oil percentage
    pub oil_percentage: Option<f64>,
    /// Pinned flag
    pub pinned: Option<bool>,
    /// Modification marker
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoredRecipe {
    /// Merge onto `defaults`, keeping every field present in the record
    ///
    /// The egg count is clamped to at least one when eggs are enabled, so a
    /// loaded record never leaves the hydration resolver without eggs it
    /// claims to use. Every numeric field, component shares and weights
    /// included, is clamped into its input bounds.
    #[must_use]
    pub fn merge_onto(self, defaults: &Recipe) -> Recipe {
        let use_egg = self.use_egg.unwrap_or(defaults.use_egg);
        let stored_eggs = self
            .egg_count
            .filter(|count| count.is_finite())
            .map_or(defaults.egg_count, |count| count.max(0.0).round() as u32);
        let egg_count = if use_egg { stored_eggs.max(1) } else { stored_eggs };

        let field = |value: Option<f64>, fallback: f64, field_bounds: FieldBounds| {
            field_bounds.clamp(value.unwrap_or(fallback))
        };

        let flour_composition = self
            .flour_composition
            .unwrap_or_else(|| defaults.flour_composition.clone())
            .into_iter()
            .map(|mut component| {
                component.share_value = bounds::FLOUR_SHARE.clamp(component.share_value);
                component
            })
            .collect();
        let liquid_composition = self
            .liquid_composition
            .unwrap_or_else(|| defaults.liquid_composition.clone())
            .into_iter()
            .map(|mut component| {
                component.weight = bounds::COMPONENT_WEIGHT.clamp(component.weight);
                component
            })
            .collect();
        let amendments = self
            .amendments
            .unwrap_or_else(|| defaults.amendments.clone())
            .into_iter()
            .map(|mut amendment| {
                amendment.weight = bounds::COMPONENT_WEIGHT.clamp(amendment.weight);
                amendment
            })
            .collect();

        Recipe {
            name: self.name,
            flour_weight: field(self.flour_weight, defaults.flour_weight, bounds::FLOUR_WEIGHT),
            desired_hydration_percentage: field(
                self.desired_hydration_percentage,
                defaults.desired_hydration_percentage,
                bounds::HYDRATION_PERCENTAGE,
            ),
            salt_percentage: field(
                self.salt_percentage,
                defaults.salt_percentage,
                bounds::SALT_PERCENTAGE,
            ),
            yeast_percentage: field(
                self.yeast_percentage,
                defaults.yeast_percentage,
                bounds::YEAST_PERCENTAGE,
            ),
            use_detailed_flour_composition: self
                .use_detailed_flour_composition
                .unwrap_or(defaults.use_detailed_flour_composition),
            flour_composition,
            use_custom_liquid_blend: self
                .use_custom_liquid_blend
                .unwrap_or(defaults.use_custom_liquid_blend),
            liquid_composition,
            amendments,
            use_sugar: self.use_sugar.unwrap_or(defaults.use_sugar),
            sugar_percentage: field(
                self.sugar_percentage,
                defaults.sugar_percentage,
                bounds::ADDITIVE_PERCENTAGE,
            ),
            use_egg,
            egg_count,
            use_butter: self.use_butter.unwrap_or(defaults.use_butter),
            butter_percentage: field(
                self.butter_percentage,
                defaults.butter_percentage,
                bounds::ADDITIVE_PERCENTAGE,
            ),
            use_oil: self.use_oil.unwrap_or(defaults.use_oil),
            oil_percentage: field(
                self.oil_percentage,
                defaults.oil_percentage,
                bounds::ADDITIVE_PERCENTAGE,
            ),
            pinned: self.pinned.unwrap_or(defaults.pinned),
            updated_at: self.updated_at,
        }
    }
}
