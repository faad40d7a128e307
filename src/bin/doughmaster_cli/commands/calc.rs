// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Formulation command and shared recipe arguments for doughmaster-cli
// ABOUTME: Builds a recipe from flags through the editing transitions and prints its formulation

use clap::Args;
use doughmaster::services::RecipeBook;
use doughmaster::store::RecipeRepository;
use doughmaster_core::errors::{AppError, AppResult};
use doughmaster_core::models::{default_recipe, ComponentId, Recipe};
use doughmaster_formulation::editing::{
    add_amendment, add_custom_flour, add_custom_liquid, disable_eggs, enable_detailed_composition,
    enable_eggs, enable_liquid_blend, rename_flour, rename_liquid, set_additive_enabled,
    set_additive_percentage, set_amendment_name, set_amendment_weight, set_egg_count,
    set_flour_share, set_flour_weight, set_hydration, set_liquid_weight, set_salt, set_yeast,
    Additive,
};
use doughmaster_formulation::formulate;
use tracing::debug;

use crate::helpers::display;

type Result<T> = AppResult<T>;

/// Recipe fields settable from the command line
///
/// Unset flags keep the base recipe's values. Numeric values clamp to the
/// field bounds rather than failing.
#[derive(Args, Debug, Clone, Default)]
pub struct RecipeArgs {
    /// Start from a saved recipe instead of the defaults
    #[arg(long)]
    pub from: Option<String>,

    /// Total flour weight in grams
    #[arg(long)]
    pub flour: Option<f64>,

    /// Desired hydration percentage
    #[arg(long)]
    pub hydration: Option<f64>,

    /// Salt percentage
    #[arg(long)]
    pub salt: Option<f64>,

    /// Yeast percentage
    #[arg(long)]
    pub yeast: Option<f64>,

    /// Sugar percentage (enables sugar)
    #[arg(long)]
    pub sugar: Option<f64>,

    /// Butter percentage (enables butter)
    #[arg(long)]
    pub butter: Option<f64>,

    /// Oil percentage (enables oil)
    #[arg(long)]
    pub oil: Option<f64>,

    /// Whole egg count; 0 disables eggs
    #[arg(long)]
    pub eggs: Option<u32>,

    /// Flour blend share as NAME=SHARE (repeatable, enables detailed composition)
    #[arg(long = "blend", value_name = "NAME=SHARE")]
    pub blend: Vec<String>,

    /// Liquid blend weight as NAME=GRAMS (repeatable, enables the liquid blend)
    #[arg(long = "liquid", value_name = "NAME=GRAMS")]
    pub liquids: Vec<String>,

    /// Amendment as NAME=GRAMS (repeatable)
    #[arg(long = "amendment", value_name = "NAME=GRAMS")]
    pub amendments: Vec<String>,
}

impl RecipeArgs {
    /// Resolve the base recipe and apply every flag to it
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown `--from` recipe, or an invalid-input
    /// error for a malformed `NAME=VALUE` pair
    pub fn build<R: RecipeRepository>(&self, book: &RecipeBook<R>) -> Result<Recipe> {
        let base = match self.from.as_deref() {
            Some(name) => book.get(name).cloned().ok_or_else(|| AppError::not_found(name))?,
            None => default_recipe(),
        };
        self.apply(base)
    }

    /// Apply every flag to `recipe`
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a malformed `NAME=VALUE` pair
    pub fn apply(&self, mut recipe: Recipe) -> Result<Recipe> {
        if let Some(grams) = self.flour {
            recipe = set_flour_weight(recipe, grams);
        }
        if let Some(pct) = self.hydration {
            recipe = set_hydration(recipe, pct);
        }
        if let Some(pct) = self.salt {
            recipe = set_salt(recipe, pct);
        }
        if let Some(pct) = self.yeast {
            recipe = set_yeast(recipe, pct);
        }
        for (additive, pct) in [
            (Additive::Sugar, self.sugar),
            (Additive::Butter, self.butter),
            (Additive::Oil, self.oil),
        ] {
            if let Some(pct) = pct {
                recipe = set_additive_enabled(recipe, additive, true);
                recipe = set_additive_percentage(recipe, additive, pct);
            }
        }
        match self.eggs {
            Some(0) => recipe = disable_eggs(recipe),
            Some(count) => recipe = set_egg_count(enable_eggs(recipe), count),
            None => {}
        }

        if !self.blend.is_empty() {
            recipe = enable_detailed_composition(recipe);
            for raw in &self.blend {
                let (name, share) = parse_pair(raw)?;
                recipe = apply_flour_share(recipe, name, share);
            }
        }
        if !self.liquids.is_empty() {
            recipe = enable_liquid_blend(recipe);
            for raw in &self.liquids {
                let (name, grams) = parse_pair(raw)?;
                recipe = apply_liquid_weight(recipe, name, grams);
            }
        }
        for raw in &self.amendments {
            let (name, grams) = parse_pair(raw)?;
            recipe = add_amendment(recipe);
            if let Some(id) = recipe.amendments.last().map(|a| a.id.clone()) {
                recipe = set_amendment_weight(set_amendment_name(recipe, &id, name), &id, grams);
            }
        }

        Ok(recipe)
    }
}

/// Calculate and print a formulation without saving it
///
/// # Errors
///
/// Returns an error if the recipe flags are invalid or JSON encoding fails
pub fn calc<R: RecipeRepository>(book: &RecipeBook<R>, args: &RecipeArgs, json: bool) -> Result<()> {
    let recipe = args.build(book)?;
    debug!(recipe.flour_weight = recipe.flour_weight, "Calculating formulation");
    display::print_formulation(&recipe, &formulate(&recipe), json)
}

/// Split `NAME=VALUE` into a trimmed name and a number
fn parse_pair(raw: &str) -> Result<(&str, f64)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::invalid_input(format!("Expected NAME=VALUE, got '{raw}'")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input(format!("Missing name in '{raw}'")));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::invalid_input(format!("Invalid number in '{raw}'")))?;
    Ok((name, value))
}

fn find_flour(recipe: &Recipe, name: &str) -> Option<ComponentId> {
    recipe
        .flour_composition
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| c.id.clone())
}

fn apply_flour_share(recipe: Recipe, name: &str, share: f64) -> Recipe {
    if let Some(id) = find_flour(&recipe, name) {
        return set_flour_share(recipe, &id, share);
    }
    let recipe = add_custom_flour(recipe);
    match recipe.flour_composition.last().map(|c| c.id.clone()) {
        Some(id) => set_flour_share(rename_flour(recipe, &id, name), &id, share),
        None => recipe,
    }
}

fn apply_liquid_weight(recipe: Recipe, name: &str, grams: f64) -> Recipe {
    let existing = recipe
        .liquid_composition
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| c.id.clone());
    if let Some(id) = existing {
        return set_liquid_weight(recipe, &id, grams);
    }
    let recipe = add_custom_liquid(recipe);
    match recipe.liquid_composition.last().map(|c| c.id.clone()) {
        Some(id) => set_liquid_weight(rename_liquid(recipe, &id, name), &id, grams),
        None => recipe,
    }
}
