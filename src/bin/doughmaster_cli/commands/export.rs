// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Export command for doughmaster-cli
// ABOUTME: Writes a saved recipe's print payload as aligned text or JSON

use clap::ValueEnum;
use doughmaster::editor::RecipeEditor;
use doughmaster::services::RecipeBook;
use doughmaster::store::RecipeRepository;
use doughmaster_core::errors::AppResult;
use tracing::debug;

type Result<T> = AppResult<T>;

/// Export rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Header plus aligned ingredient lines
    Text,
    /// Print payload as JSON
    Json,
}

/// Print a saved recipe's ingredient list
///
/// # Errors
///
/// Returns not-found for an unknown name, or a serialization error
pub fn export<R: RecipeRepository>(
    book: &RecipeBook<R>,
    name: &str,
    format: ExportFormat,
) -> Result<()> {
    let mut editor = RecipeEditor::new();
    editor.load(book, name)?;
    let payload = editor.print_payload();
    debug!(
        recipe.name = %payload.recipe_name,
        ingredients = payload.ingredients.len(),
        "Exporting recipe"
    );

    match format {
        ExportFormat::Text => print!("{}", payload.to_text()),
        ExportFormat::Json => println!("{}", payload.to_json()?),
    }
    Ok(())
}
