// ABOUTME: Recipe book enforcing naming, uniqueness, and collision rules over a repository
// ABOUTME: Save, save-as-new, rename, duplicate, delete, pin, and list-view tiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe book
//!
//! Holds the hydrated collection in memory and writes the full collection
//! through the repository on every mutation. A mutation only changes the
//! in-memory view after the write succeeded.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use doughmaster_core::constants::routes::NEW_RECIPE_TOKEN;
use doughmaster_core::errors::{AppError, AppResult};
use doughmaster_core::models::{default_recipe_set, Recipe};
use serde::Serialize;
use tracing::{debug, warn};

use crate::logging::StoreLogger;
use crate::routes::RecipeRoute;
use crate::store::RecipeRepository;

/// First suffix number used when a name is taken
const FIRST_DUPLICATE_SUFFIX: u32 = 2;

/// Summary of a saved recipe for list views
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTile {
    /// Recipe name
    pub name: String,
    /// `"{flour}g flour • {hydration}% hydration"`
    pub summary: String,
    /// Pinned to the top
    pub pinned: bool,
    /// Last modification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Navigation path for the recipe
    pub path: String,
}

impl RecipeTile {
    fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            summary: format!(
                "{}g flour \u{2022} {}% hydration",
                recipe.flour_weight, recipe.desired_hydration_percentage
            ),
            pinned: recipe.pinned,
            updated_at: recipe.updated_at,
            path: RecipeRoute::named(&recipe.name).to_path(),
        }
    }
}

/// Saved recipes plus the rules that keep their names unique
pub struct RecipeBook<R> {
    repository: R,
    recipes: Vec<Recipe>,
}

impl<R: RecipeRepository> RecipeBook<R> {
    /// Hydrate the book from `repository`
    ///
    /// A repository that cannot be read yields the default recipe set with a
    /// warning; nothing is written until the next mutation.
    pub fn open(repository: R) -> Self {
        let recipes = repository.list().unwrap_or_else(|e| {
            warn!(error = %e, "Recipe store unavailable, using default recipes");
            default_recipe_set()
        });
        debug!(recipes.count = recipes.len(), "Recipe book opened");
        Self {
            repository,
            recipes,
        }
    }

    /// Saved recipes in stored order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Underlying repository
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Look up a recipe by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Whether a recipe with this exact name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// List tiles: pinned first, then most recently updated, then stored order
    #[must_use]
    pub fn tiles(&self) -> Vec<RecipeTile> {
        let mut ordered: Vec<&Recipe> = self.recipes.iter().collect();
        ordered.sort_by_key(|r| (Reverse(r.pinned), Reverse(r.updated_at)));
        ordered.into_iter().map(RecipeTile::from_recipe).collect()
    }

    /// `candidate` if free, else the first free `"candidate (N)"` for N >= 2
    ///
    /// The reserved route token counts as taken.
    #[must_use]
    pub fn unique_name(&self, candidate: &str) -> String {
        let taken = |name: &str| name == NEW_RECIPE_TOKEN || self.contains(name);
        if !taken(candidate) {
            return candidate.to_owned();
        }
        let mut suffix = FIRST_DUPLICATE_SUFFIX;
        loop {
            let name = format!("{candidate} ({suffix})");
            if !taken(&name) {
                return name;
            }
            suffix += 1;
        }
    }

    /// Upsert by name
    ///
    /// An existing recipe is replaced in place and keeps its pin; otherwise
    /// the recipe is appended. Returns the stored recipe.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank or reserved name, or the
    /// repository's error if the write fails
    pub fn save(&mut self, recipe: &Recipe) -> AppResult<Recipe> {
        let name = validate_name(&recipe.name)?;
        let existing = self.recipes.iter().position(|r| r.name == name);

        let mut stored = recipe.renamed(name).persistable().touched(Utc::now());
        let mut next = self.recipes.clone();
        match existing {
            Some(index) => {
                stored.pinned = next[index].pinned;
                next[index] = stored.clone();
            }
            None => next.push(stored.clone()),
        }

        self.commit(next)?;
        StoreLogger::log_mutation("save", &stored.name, self.recipes.len());
        Ok(stored)
    }

    /// Always create a new entry, numbering the name on collision
    ///
    /// The returned recipe carries the generated name, which the caller
    /// adopts as the active name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, or the repository's
    /// error if the write fails
    pub fn save_as_new(&mut self, recipe: &Recipe) -> AppResult<Recipe> {
        let candidate = recipe.name.trim();
        if candidate.is_empty() {
            return Err(AppError::missing_field("name", "Please enter a recipe name"));
        }
        let name = self.unique_name(candidate);
        let mut stored = recipe.renamed(name).persistable().touched(Utc::now());
        stored.pinned = false;

        let mut next = self.recipes.clone();
        next.push(stored.clone());
        self.commit(next)?;
        StoreLogger::log_mutation("save_as_new", &stored.name, self.recipes.len());
        Ok(stored)
    }

    /// Copy a stored recipe under the next free numbered name
    ///
    /// # Errors
    ///
    /// Returns not-found if `name` is not stored, or the repository's error
    pub fn duplicate(&mut self, name: &str) -> AppResult<Recipe> {
        let source = self.get(name).cloned().ok_or_else(|| AppError::not_found(name))?;
        let copy_name = self.unique_name(&source.name);
        let mut copy = source.renamed(copy_name).touched(Utc::now());
        copy.pinned = false;

        let mut next = self.recipes.clone();
        next.push(copy.clone());
        self.commit(next)?;
        StoreLogger::log_mutation("duplicate", &copy.name, self.recipes.len());
        Ok(copy)
    }

    /// Rename a stored recipe in place
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown source, a validation error for a
    /// blank or reserved target, already-exists when another recipe holds
    /// the target name, or the repository's error
    pub fn rename(&mut self, from: &str, to: &str) -> AppResult<Recipe> {
        let index = self
            .recipes
            .iter()
            .position(|r| r.name == from)
            .ok_or_else(|| AppError::not_found(from))?;
        let target = validate_name(to)?;
        if self
            .recipes
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.name == target)
        {
            return Err(AppError::already_exists(target));
        }

        let renamed = self.recipes[index].renamed(target).touched(Utc::now());
        let mut next = self.recipes.clone();
        next[index] = renamed.clone();
        self.commit(next)?;
        StoreLogger::log_mutation("rename", &renamed.name, self.recipes.len());
        Ok(renamed)
    }

    /// Remove a recipe by name, returning it
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown name, or the repository's error
    pub fn delete(&mut self, name: &str) -> AppResult<Recipe> {
        let index = self
            .recipes
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| AppError::not_found(name))?;

        let mut next = self.recipes.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        StoreLogger::log_mutation("delete", &removed.name, self.recipes.len());
        Ok(removed)
    }

    /// Flip a recipe's pin, returning the updated recipe
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown name, or the repository's error
    pub fn toggle_pin(&mut self, name: &str) -> AppResult<Recipe> {
        let index = self
            .recipes
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| AppError::not_found(name))?;

        let mut next = self.recipes.clone();
        next[index].pinned = !next[index].pinned;
        let updated = next[index].clone();
        self.commit(next)?;
        StoreLogger::log_mutation("toggle_pin", &updated.name, self.recipes.len());
        Ok(updated)
    }

    fn commit(&mut self, next: Vec<Recipe>) -> AppResult<()> {
        self.repository.replace_all(&next)?;
        self.recipes = next;
        Ok(())
    }
}

/// Trim a name and reject blank or reserved names
fn validate_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::missing_field("name", "Please enter a recipe name"));
    }
    if name == NEW_RECIPE_TOKEN {
        return Err(AppError::reserved_name(name));
    }
    Ok(name.to_owned())
}
