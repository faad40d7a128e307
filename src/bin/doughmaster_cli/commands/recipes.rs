// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recipe management commands for doughmaster-cli
// ABOUTME: List, show, save, duplicate, rename, delete, and pin saved recipes

use doughmaster::editor::RecipeEditor;
use doughmaster::services::RecipeBook;
use doughmaster::store::RecipeRepository;
use doughmaster_core::errors::{AppError, AppResult};
use tracing::info;

use super::calc::RecipeArgs;
use crate::helpers::display;

type Result<T> = AppResult<T>;

/// List saved recipes, pinned first then most recently updated
///
/// # Errors
///
/// Returns an error if JSON encoding fails
pub fn list<R: RecipeRepository>(book: &RecipeBook<R>, json: bool) -> Result<()> {
    let tiles = book.tiles();
    if json {
        println!("{}", serde_json::to_string_pretty(&tiles)?);
    } else {
        display::print_tiles(&tiles);
    }
    Ok(())
}

/// Show a saved recipe's formulation
///
/// # Errors
///
/// Returns not-found for an unknown name
pub fn show<R: RecipeRepository>(book: &RecipeBook<R>, name: &str, json: bool) -> Result<()> {
    let mut editor = RecipeEditor::new();
    editor.load(book, name)?;
    display::print_formulation(editor.draft(), &editor.report(), json)
}

/// Save a recipe built from flags
///
/// # Errors
///
/// Returns the book's validation and storage errors
pub fn save<R: RecipeRepository>(
    book: &mut RecipeBook<R>,
    name: &str,
    args: &RecipeArgs,
    as_new: bool,
) -> Result<()> {
    let built = args.build(book)?;
    let mut editor = RecipeEditor::new();
    editor.apply(|_| built);
    editor.set_name(name);

    let stored = if as_new {
        editor.save_as_new(book)?
    } else {
        editor.save(book)?
    };
    info!(recipe.name = %stored.name, "Recipe saved");
    display::print_success(&format!("Saved recipe '{}'", stored.name));
    Ok(())
}

/// Copy a saved recipe under the next free numbered name
///
/// # Errors
///
/// Returns not-found for an unknown name, or a storage error
pub fn duplicate<R: RecipeRepository>(book: &mut RecipeBook<R>, name: &str) -> Result<()> {
    let copy = book.duplicate(name)?;
    display::print_success(&format!("Duplicated '{name}' as '{}'", copy.name));
    Ok(())
}

/// Rename a saved recipe
///
/// # Errors
///
/// Returns not-found, validation, already-exists, or storage errors
pub fn rename<R: RecipeRepository>(book: &mut RecipeBook<R>, from: &str, to: &str) -> Result<()> {
    let renamed = book.rename(from, to)?;
    display::print_success(&format!("Renamed '{from}' to '{}'", renamed.name));
    Ok(())
}

/// Delete a saved recipe
///
/// # Errors
///
/// Returns not-found for an unknown name, or a storage error
pub fn delete<R: RecipeRepository>(book: &mut RecipeBook<R>, name: &str) -> Result<()> {
    if !book.contains(name) {
        return Err(AppError::not_found(name));
    }
    let mut editor = RecipeEditor::new();
    editor.select(name);
    let removed = editor.delete_selected(book)?;
    display::print_success(&format!("Deleted recipe '{}'", removed.name));
    Ok(())
}

/// Pin or unpin a saved recipe
///
/// # Errors
///
/// Returns not-found for an unknown name, or a storage error
pub fn pin<R: RecipeRepository>(book: &mut RecipeBook<R>, name: &str) -> Result<()> {
    let updated = book.toggle_pin(name)?;
    let state = if updated.pinned { "Pinned" } else { "Unpinned" };
    display::print_success(&format!("{state} '{}'", updated.name));
    Ok(())
}
