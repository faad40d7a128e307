// ABOUTME: Recipe store abstraction over a single named key-value slot
// ABOUTME: Pluggable slot backends (in-memory, JSON file) behind a whole-collection repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe storage
//!
//! Every saved recipe lives in one slot as a JSON array. Reads happen once
//! at hydration and every mutation replaces the whole collection.
//!
//! ```rust
//! use doughmaster::store::{memory::InMemorySlot, RecipeRepository, SlotRepository};
//!
//! # fn example() -> doughmaster_core::AppResult<()> {
//! let repository = SlotRepository::new(InMemorySlot::new());
//! let recipes = repository.list()?;
//! assert_eq!(recipes[0].name, "Basic Bread");
//! # Ok(())
//! # }
//! ```

/// Store factory selecting a backend from configuration
pub mod factory;
/// JSON file slot
pub mod file;
/// In-memory slot
pub mod memory;
/// Whole-collection repository with merge-on-load decoding
pub mod repository;

pub use factory::RecipeStore;
pub use repository::{decode_collection, encode_collection, SlotRepository};

use doughmaster_core::errors::AppResult;
use doughmaster_core::models::Recipe;

/// Raw key-value slot holding the serialized recipe collection
pub trait RecipeSlot: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Read the slot, `None` when it has never been written
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    fn read(&self) -> AppResult<Option<String>>;

    /// Replace the slot contents
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn write(&self, contents: &str) -> AppResult<()>;
}

/// Persisted recipe collection seen as a whole
pub trait RecipeRepository: Send + Sync {
    /// Every stored recipe, complete and in stored order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing slot cannot be read or seeded
    fn list(&self) -> AppResult<Vec<Recipe>>;

    /// Replace the stored collection
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written
    fn replace_all(&self, recipes: &[Recipe]) -> AppResult<()>;
}

impl<R: RecipeRepository + ?Sized> RecipeRepository for Box<R> {
    fn list(&self) -> AppResult<Vec<Recipe>> {
        (**self).list()
    }

    fn replace_all(&self, recipes: &[Recipe]) -> AppResult<()> {
        (**self).replace_all(recipes)
    }
}
