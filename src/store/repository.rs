// ABOUTME: Whole-collection recipe repository over a raw slot
// ABOUTME: Seeds empty slots, back-fills partial records, and falls back on corrupted data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use doughmaster_core::errors::AppResult;
use doughmaster_core::models::{default_recipe, default_recipe_set, Recipe, StoredRecipe};
use serde_json::Value;
use tracing::{info, warn};

use super::{RecipeRepository, RecipeSlot};
use crate::logging::StoreLogger;

/// Decode the slot's JSON array into complete recipes
///
/// Records that are not recipe objects, or have a blank or repeated name,
/// are skipped with a warning. Absent optional fields are back-filled from
/// the default recipe.
///
/// # Errors
///
/// Returns a serialization error when the contents are not a JSON array
pub fn decode_collection(raw: &str) -> AppResult<Vec<Recipe>> {
    let records: Vec<Value> = serde_json::from_str(raw)?;
    let defaults = default_recipe();
    let mut seen = HashSet::new();
    let mut recipes = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let stored: StoredRecipe = match serde_json::from_value(record) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(record.index = index, error = %e, "Skipping unreadable recipe record");
                continue;
            }
        };
        let name = stored.name.trim().to_owned();
        if name.is_empty() {
            warn!(record.index = index, "Skipping recipe record without a name");
            continue;
        }
        if !seen.insert(name.clone()) {
            warn!(record.index = index, recipe.name = %name, "Skipping duplicate recipe record");
            continue;
        }
        let mut recipe = stored.merge_onto(&defaults);
        recipe.name = name;
        recipes.push(recipe);
    }

    Ok(recipes)
}

/// Encode recipes for the slot
///
/// # Errors
///
/// Returns a serialization error if a recipe cannot be serialized
pub fn encode_collection(recipes: &[Recipe]) -> AppResult<String> {
    let snapshots: Vec<Recipe> = recipes.iter().map(Recipe::persistable).collect();
    Ok(serde_json::to_string_pretty(&snapshots)?)
}

/// Repository storing the collection in one slot
#[derive(Debug, Clone)]
pub struct SlotRepository<S> {
    slot: S,
}

impl<S: RecipeSlot> SlotRepository<S> {
    /// Repository over `slot`
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Underlying slot
    pub const fn slot(&self) -> &S {
        &self.slot
    }
}

impl<S: RecipeSlot> RecipeRepository for SlotRepository<S> {
    /// Read the collection
    ///
    /// A slot that was never written is seeded with the default recipe set.
    /// A slot holding anything other than a recipe array yields the default
    /// set and is left as it is until the next mutation.
    fn list(&self) -> AppResult<Vec<Recipe>> {
        let raw = self.slot.read()?.filter(|raw| !raw.trim().is_empty());

        let Some(raw) = raw else {
            let seed = default_recipe_set();
            self.replace_all(&seed)?;
            info!(
                store.backend = self.slot.backend_name(),
                recipes.count = seed.len(),
                "Seeded empty recipe store with defaults"
            );
            return Ok(seed);
        };

        match decode_collection(&raw) {
            Ok(recipes) => {
                StoreLogger::log_hydration(self.slot.backend_name(), recipes.len());
                Ok(recipes)
            }
            Err(e) => {
                warn!(
                    store.backend = self.slot.backend_name(),
                    error = %e,
                    "Recipe store is corrupted, using default recipes"
                );
                Ok(default_recipe_set())
            }
        }
    }

    fn replace_all(&self, recipes: &[Recipe]) -> AppResult<()> {
        self.slot.write(&encode_collection(recipes)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::store::memory::InMemorySlot;

    #[test]
    fn test_empty_slot_is_seeded_and_written() {
        let slot = InMemorySlot::new();
        let repository = SlotRepository::new(slot.clone());

        let recipes = repository.list().unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Basic Bread");
        assert!(slot.snapshot().unwrap().is_some());
    }

    #[test]
    fn test_corrupted_slot_falls_back_without_overwrite() {
        let slot = InMemorySlot::with_contents("{not json");
        let repository = SlotRepository::new(slot.clone());

        let recipes = repository.list().unwrap();

        assert_eq!(recipes[0].name, "Basic Bread");
        assert_eq!(slot.snapshot().unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let raw = r#"[{"name":"Good"},{"flourWeight":10},{"name":"  "},{"name":"Good"},42]"#;
        let recipes = decode_collection(raw).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Good");
        assert_eq!(recipes[0].flour_weight, 500.0);
    }

    #[test]
    fn test_explicitly_empty_collection_stays_empty() {
        let repository = SlotRepository::new(InMemorySlot::with_contents("[]"));
        assert!(repository.list().unwrap().is_empty());
    }
}
