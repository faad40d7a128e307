// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for doughmaster-cli
// ABOUTME: Provides consistent display functions for recipe tiles and formulation reports

use doughmaster::services::RecipeTile;
use doughmaster_core::errors::AppResult;
use doughmaster_core::models::Recipe;
use doughmaster_formulation::{format_grams, FormulationReport, QuantityStyle};

/// Display recipe tiles in list order
pub fn print_tiles(tiles: &[RecipeTile]) {
    if tiles.is_empty() {
        println!("No saved recipes.");
        return;
    }
    println!("{}", "=".repeat(60));
    for tile in tiles {
        let marker = if tile.pinned { "*" } else { " " };
        println!("{marker} {:<30} {}", tile.name, tile.summary);
        if let Some(updated) = tile.updated_at {
            println!("  {:<30} updated {}", "", updated.format("%Y-%m-%d %H:%M UTC"));
        }
    }
    println!("{}", "=".repeat(60));
}

/// Display a formulation, or its JSON report
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn print_formulation(recipe: &Recipe, report: &FormulationReport, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("\n{}", recipe.name);
    println!("{}", "=".repeat(60));
    let width = report
        .ingredients
        .iter()
        .map(|line| line.name.chars().count())
        .max()
        .unwrap_or(0);
    for line in &report.ingredients {
        println!("   {:<width$}  {:>10}", line.name, line.quantity);
    }
    println!("{}", "-".repeat(60));
    println!(
        "   Total dough weight: {}",
        format_grams(report.summary.total_dough_weight, QuantityStyle::Standard)
    );
    println!(
        "   Overall hydration:  {}%",
        report.summary.overall_hydration_display
    );

    if let Some(note) = overshoot_note(recipe, report) {
        println!("   Note: {note}");
    }
    Ok(())
}

/// Hydration gap below which realized and desired hydration count as equal
const HYDRATION_TOLERANCE: f64 = 1e-6;

/// Note shown when eggs and liquids alone overshoot the desired hydration
fn overshoot_note(recipe: &Recipe, report: &FormulationReport) -> Option<String> {
    let realized = report.hydration.realized_hydration_percentage;
    let overshoot = realized - recipe.desired_hydration_percentage;
    (report.hydration.net_added_water == 0.0 && overshoot > HYDRATION_TOLERANCE).then(|| {
        format!("eggs and liquids already reach {realized:.1}% hydration, no water added")
    })
}

/// Display a confirmation line
pub fn print_success(message: &str) {
    println!("Success {message}");
}
