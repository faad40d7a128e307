// ABOUTME: Print and export payload built from the ingredient list
// ABOUTME: Recipe name header plus ordered name and quantity pairs, as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use doughmaster_core::errors::AppResult;
use doughmaster_core::models::Recipe;
use doughmaster_formulation::{formulate, FormulationReport};
use serde::{Deserialize, Serialize};

/// One printed ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintLine {
    /// Ingredient name
    pub name: String,
    /// Formatted quantity
    pub quantity: String,
}

/// Everything a print or export collaborator receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintPayload {
    /// Header
    pub recipe_name: String,
    /// Ingredients in list order
    pub ingredients: Vec<PrintLine>,
}

impl PrintPayload {
    /// Payload for a recipe, computing its formulation
    #[must_use]
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self::from_report(&recipe.name, &formulate(recipe))
    }

    /// Payload from an already computed report
    #[must_use]
    pub fn from_report(recipe_name: &str, report: &FormulationReport) -> Self {
        Self {
            recipe_name: recipe_name.to_owned(),
            ingredients: report
                .ingredients
                .iter()
                .map(|line| PrintLine {
                    name: line.name.clone(),
                    quantity: line.quantity.clone(),
                })
                .collect(),
        }
    }

    /// Plain-text rendering with aligned quantities
    #[must_use]
    pub fn to_text(&self) -> String {
        let width = self
            .ingredients
            .iter()
            .map(|line| line.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.recipe_name);
        let _ = writeln!(out, "{}", "=".repeat(self.recipe_name.chars().count()));
        for line in &self.ingredients {
            let _ = writeln!(out, "{:<width$}  {:>10}", line.name, line.quantity);
        }
        out
    }

    /// JSON rendering
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
