// ABOUTME: Editor session holding the draft recipe and the list selection
// ABOUTME: Load, save, save-as-new, delete, reset, and route opening against a recipe book
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Editor session
//!
//! The draft is plain state; edits go through the transitions in
//! `doughmaster_formulation::editing` via [`RecipeEditor::apply`].
//!
//! ```rust
//! use doughmaster::editor::RecipeEditor;
//! use doughmaster_formulation::editing::enable_eggs;
//!
//! let mut editor = RecipeEditor::new();
//! editor.apply(enable_eggs);
//! assert!(editor.draft().use_egg);
//! ```

use doughmaster_core::errors::{AppError, AppResult};
use doughmaster_core::models::{default_recipe, Recipe};
use doughmaster_formulation::{formulate, FormulationReport};
use tracing::{debug, info};

use crate::export::PrintPayload;
use crate::routes::{RecipeLocation, RecipeRoute};
use crate::services::RecipeBook;
use crate::store::RecipeRepository;

/// What opening a route did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Editor reset to defaults
    Fresh,
    /// Named recipe loaded
    Loaded {
        /// Host should print once shown
        auto_print: bool,
    },
}

/// The recipe being edited plus the name picked in the saved-recipes list
#[derive(Debug, Clone)]
pub struct RecipeEditor {
    draft: Recipe,
    selection: Option<String>,
}

impl Default for RecipeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeEditor {
    /// Editor on the default recipe with nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: default_recipe(),
            selection: None,
        }
    }

    /// Current draft
    #[must_use]
    pub const fn draft(&self) -> &Recipe {
        &self.draft
    }

    /// Name selected for load or delete
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select a saved recipe by name
    pub fn select(&mut self, name: impl Into<String>) {
        self.selection = Some(name.into());
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Run an edit transition on the draft
    pub fn apply(&mut self, transition: impl FnOnce(Recipe) -> Recipe) {
        let draft = std::mem::take(&mut self.draft);
        self.draft = transition(draft);
    }

    /// Set the draft's name as typed
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Formulation of the current draft
    #[must_use]
    pub fn report(&self) -> FormulationReport {
        formulate(&self.draft)
    }

    /// Print payload of the current draft
    #[must_use]
    pub fn print_payload(&self) -> PrintPayload {
        PrintPayload::for_recipe(&self.draft)
    }

    /// Return to the default recipe and clear the selection
    pub fn reset(&mut self) {
        self.draft = default_recipe();
        self.selection = None;
        debug!("Editor reset to default recipe");
    }

    /// Replace the draft with a stored recipe
    ///
    /// Stored recipes are already back-filled, so every field is defined.
    ///
    /// # Errors
    ///
    /// Returns not-found when `name` is not stored
    pub fn load<R: RecipeRepository>(&mut self, book: &RecipeBook<R>, name: &str) -> AppResult<()> {
        let recipe = book.get(name).ok_or_else(|| AppError::not_found(name))?;
        self.draft = recipe.clone();
        self.selection = Some(recipe.name.clone());
        info!(recipe.name = %recipe.name, "Recipe loaded");
        Ok(())
    }

    /// Load the selected recipe
    ///
    /// # Errors
    ///
    /// Returns a validation error when nothing is selected, or not-found
    pub fn load_selected<R: RecipeRepository>(&mut self, book: &RecipeBook<R>) -> AppResult<()> {
        let name = self.require_selection("load")?;
        self.load(book, &name)
    }

    /// Upsert the draft under its own name
    ///
    /// # Errors
    ///
    /// Propagates the book's validation and storage errors
    pub fn save<R: RecipeRepository>(&mut self, book: &mut RecipeBook<R>) -> AppResult<Recipe> {
        let stored = book.save(&self.draft)?;
        self.adopt(&stored);
        Ok(stored)
    }

    /// Save the draft as a new entry, adopting the generated name
    ///
    /// # Errors
    ///
    /// Propagates the book's validation and storage errors
    pub fn save_as_new<R: RecipeRepository>(
        &mut self,
        book: &mut RecipeBook<R>,
    ) -> AppResult<Recipe> {
        let stored = book.save_as_new(&self.draft)?;
        self.adopt(&stored);
        Ok(stored)
    }

    /// Delete the selected recipe
    ///
    /// When the deleted recipe is the one in the editor, the editor resets
    /// to the default recipe. The selection is cleared either way.
    ///
    /// # Errors
    ///
    /// Returns a validation error when nothing is selected, or the book's
    /// not-found and storage errors
    pub fn delete_selected<R: RecipeRepository>(
        &mut self,
        book: &mut RecipeBook<R>,
    ) -> AppResult<Recipe> {
        let name = self.require_selection("delete")?;
        let removed = book.delete(&name)?;
        if self.draft.name.trim() == removed.name {
            self.reset();
        } else {
            self.selection = None;
        }
        Ok(removed)
    }

    /// Open a navigation path
    ///
    /// # Errors
    ///
    /// Returns an invalid-format error for foreign paths and not-found for
    /// unknown names; the caller then returns to the recipe list
    pub fn open_route<R: RecipeRepository>(
        &mut self,
        book: &RecipeBook<R>,
        path: &str,
    ) -> AppResult<RouteOutcome> {
        let RecipeLocation { route, auto_print } = RecipeRoute::parse(path)?;
        match route {
            RecipeRoute::New => {
                self.reset();
                Ok(RouteOutcome::Fresh)
            }
            RecipeRoute::Named(name) => {
                self.load(book, &name)?;
                Ok(RouteOutcome::Loaded { auto_print })
            }
        }
    }

    fn adopt(&mut self, stored: &Recipe) {
        self.draft = stored.clone();
        self.selection = Some(stored.name.clone());
    }

    fn require_selection(&self, action: &str) -> AppResult<String> {
        self.selection
            .clone()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                AppError::missing_field("selection", format!("Please select a recipe to {action}"))
            })
    }
}
