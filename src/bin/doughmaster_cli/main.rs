// ABOUTME: DoughMaster CLI - command-line front end for the formulation engine and recipe store
// ABOUTME: Lists, shows, calculates, saves, renames, duplicates, deletes, pins, and exports recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show saved recipes, pinned first
//! doughmaster-cli list
//!
//! # Calculate a formulation without saving it
//! doughmaster-cli calc --flour 1000 --hydration 72 --eggs 2 --amendment "Walnuts=80"
//!
//! # Save a new recipe, numbering the name if it is taken
//! doughmaster-cli save --name Sourdough --hydration 78 --as-new
//!
//! # Export a recipe for printing
//! doughmaster-cli export Sourdough --format json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use doughmaster::config::{DoughMasterConfig, StoreBackend};
use doughmaster::logging::LoggingConfig;
use doughmaster::services::RecipeBook;
use doughmaster::store::RecipeStore;
use tracing::debug;

use commands::calc::RecipeArgs;
use commands::export::ExportFormat;

#[derive(Parser)]
#[command(
    name = "doughmaster-cli",
    about = "DoughMaster bread formulation CLI",
    long_about = "Turn baker's percentages into exact ingredient weights and manage saved recipes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store backend override (file or memory)
    #[arg(long, global = true)]
    store: Option<String>,

    /// Store file override
    #[arg(long, global = true)]
    store_path: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List saved recipes
    List {
        /// Print tiles as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a saved recipe's formulation
    Show {
        /// Recipe name
        name: String,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate a formulation without saving
    Calc {
        #[command(flatten)]
        recipe: RecipeArgs,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a recipe (upsert by name)
    Save {
        /// Recipe name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        recipe: RecipeArgs,

        /// Always create a new entry, numbering the name on collision
        #[arg(long)]
        as_new: bool,
    },

    /// Copy a saved recipe under the next free numbered name
    Duplicate {
        /// Recipe to copy
        name: String,
    },

    /// Rename a saved recipe
    Rename {
        /// Current name
        from: String,
        /// New name
        to: String,
    },

    /// Delete a saved recipe
    Delete {
        /// Recipe name
        name: String,
    },

    /// Pin or unpin a saved recipe
    Pin {
        /// Recipe name
        name: String,
    },

    /// Export a saved recipe's ingredient list
    Export {
        /// Recipe name
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = DoughMasterConfig::from_env()?;
    if let Some(raw) = cli.store.as_deref() {
        let backend = StoreBackend::parse(raw)
            .ok_or_else(|| anyhow::anyhow!("Unknown store backend '{raw}', expected file or memory"))?;
        config = config.with_backend(backend);
    }
    if let Some(path) = cli.store_path {
        config = config.with_store_path(path);
    }
    config.validate()?;
    debug!("{}", config.summary());

    let store = RecipeStore::new(&config);
    debug!(store.backend = ?store.backend(), "Opening recipe book");
    let mut book = RecipeBook::open(store);

    match cli.command {
        Command::List { json } => commands::recipes::list(&book, json)?,
        Command::Show { name, json } => commands::recipes::show(&book, &name, json)?,
        Command::Calc { recipe, json } => commands::calc::calc(&book, &recipe, json)?,
        Command::Save {
            name,
            recipe,
            as_new,
        } => commands::recipes::save(&mut book, &name, &recipe, as_new)?,
        Command::Duplicate { name } => commands::recipes::duplicate(&mut book, &name)?,
        Command::Rename { from, to } => commands::recipes::rename(&mut book, &from, &to)?,
        Command::Delete { name } => commands::recipes::delete(&mut book, &name)?,
        Command::Pin { name } => commands::recipes::pin(&mut book, &name)?,
        Command::Export { name, format } => commands::export::export(&book, &name, format)?,
    }

    Ok(())
}
