// ABOUTME: Integration tests for the recipe store and recipe book
// ABOUTME: Seeding, back-fill on load, corruption fallback, naming rules, write-through semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use common::{assert_close, book_with_slot, empty_book, init_test_logging, named_recipe};
use doughmaster::services::RecipeBook;
use doughmaster::store::file::JsonFileSlot;
use doughmaster::store::memory::InMemorySlot;
use doughmaster::store::{RecipeRepository, RecipeSlot, SlotRepository};
use doughmaster_core::errors::{AppError, AppResult, ErrorCode};
use doughmaster_formulation::editing::enable_detailed_composition;
use doughmaster_formulation::formulate;

/// Slot that can be switched into failing every write
#[derive(Clone, Default)]
struct FlakySlot {
    inner: InMemorySlot,
    failing: Arc<AtomicBool>,
}

impl RecipeSlot for FlakySlot {
    fn backend_name(&self) -> &'static str {
        "flaky"
    }

    fn read(&self) -> AppResult<Option<String>> {
        self.inner.read()
    }

    fn write(&self, contents: &str) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::storage("disk full"));
        }
        self.inner.write(contents)
    }
}

// ============================================================================
// Hydration from the slot
// ============================================================================

#[test]
fn test_empty_slot_seeds_default_set() {
    let slot = InMemorySlot::new();
    let book = book_with_slot(&slot);

    assert_eq!(book.recipes().len(), 1);
    let basic = book.get("Basic Bread").unwrap();
    assert_close(basic.flour_weight, 400.0);
    assert!(slot.snapshot().unwrap().unwrap().contains("Basic Bread"));
}

#[test]
fn test_explicit_empty_array_stays_empty() {
    assert!(empty_book().recipes().is_empty());
}

#[test]
fn test_corrupted_slot_falls_back_without_overwriting() {
    let slot = InMemorySlot::with_contents("{not json");
    let book = book_with_slot(&slot);

    assert_eq!(book.recipes().len(), 1);
    assert_eq!(book.recipes()[0].name, "Basic Bread");
    assert_eq!(slot.snapshot().unwrap().as_deref(), Some("{not json"));
}

#[test]
fn test_non_array_slot_falls_back() {
    let book = book_with_slot(&InMemorySlot::with_contents(r#"{"name":"Solo"}"#));
    assert_eq!(book.recipes()[0].name, "Basic Bread");
}

#[test]
fn test_missing_fields_are_back_filled() {
    let slot = InMemorySlot::with_contents(
        r#"[{"name":"Old Loaf","flourWeight":600,"waterPercentage":70}]"#,
    );
    let book = book_with_slot(&slot);
    let recipe = book.get("Old Loaf").unwrap();

    assert!(!recipe.use_butter);
    assert_close(recipe.butter_percentage, 10.0);
    assert_close(recipe.desired_hydration_percentage, 70.0);
    assert_close(recipe.salt_percentage, 2.0);
    assert!(recipe.flour_composition.is_empty());
    assert!(recipe.amendments.is_empty());
}

#[test]
fn test_enabled_eggs_load_with_at_least_one() {
    let slot = InMemorySlot::with_contents(r#"[{"name":"Brioche","useEgg":true,"eggCount":0}]"#);
    let book = book_with_slot(&slot);
    assert_eq!(book.get("Brioche").unwrap().egg_count, 1);
}

#[test]
fn test_out_of_range_records_load_clamped() {
    let slot = InMemorySlot::with_contents(
        r#"[{"name":"Wild","flourWeight":400,"desiredHydrationPercentage":400,
             "useDetailedFlourComposition":true,
             "flourComposition":[
                 {"id":"bread","name":"Bread Flour","shareValue":-50,"isPredefined":true},
                 {"id":"rye","name":"Rye Flour","shareValue":150}]}]"#,
    );
    let book = book_with_slot(&slot);
    let recipe = book.get("Wild").unwrap();

    assert_close(recipe.desired_hydration_percentage, 150.0);
    assert_close(recipe.flour_composition[0].share_value, 0.0);
    assert_close(recipe.flour_composition[1].share_value, 100.0);

    let report = formulate(recipe);
    assert!(report.flour.iter().all(|entry| entry.weight >= 0.0));
    assert!(report.flour.iter().all(|entry| entry.percentage <= 100.0));
    assert_close(report.flour[1].weight, 400.0);
    assert_close(report.hydration.net_added_water, 600.0);
}

#[test]
fn test_negative_flour_weight_loads_as_zero() {
    let slot = InMemorySlot::with_contents(r#"[{"name":"Broken","flourWeight":-250}]"#);
    let book = book_with_slot(&slot);
    let recipe = book.get("Broken").unwrap();

    assert_close(recipe.flour_weight, 0.0);
    assert_close(formulate(recipe).summary.total_dough_weight, 0.0);
}

#[test]
fn test_bad_records_are_skipped() {
    let slot = InMemorySlot::with_contents(
        r#"[{"name":"Keep"},{"name":"  "},{"flourWeight":300},{"name":"Keep"},42]"#,
    );
    let book = book_with_slot(&slot);
    let names: Vec<&str> = book.recipes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Keep"]);
}

// ============================================================================
// Naming rules
// ============================================================================

#[test]
fn test_save_as_new_numbers_collisions() {
    let mut book = empty_book();
    let names: Vec<String> = (0..3)
        .map(|_| book.save_as_new(&named_recipe("Sourdough")).unwrap().name)
        .collect();
    assert_eq!(names, ["Sourdough", "Sourdough (2)", "Sourdough (3)"]);
}

#[test]
fn test_save_upserts_in_place() {
    let mut book = empty_book();
    book.save(&named_recipe("Rye")).unwrap();
    book.save(&named_recipe("Wheat")).unwrap();

    let mut edited = named_recipe("Rye");
    edited.flour_weight = 900.0;
    book.save(&edited).unwrap();

    let names: Vec<&str> = book.recipes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Rye", "Wheat"]);
    assert_close(book.get("Rye").unwrap().flour_weight, 900.0);
    assert!(book.get("Rye").unwrap().updated_at.is_some());
}

#[test]
fn test_blank_name_rejected() {
    let mut book = empty_book();
    let err = book.save(&named_recipe("   ")).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(book.save_as_new(&named_recipe("")).is_err());
    assert!(book.recipes().is_empty());
}

#[test]
fn test_reserved_name_rejected() {
    let mut book = empty_book();
    assert_eq!(
        book.save(&named_recipe("new")).unwrap_err().code,
        ErrorCode::ReservedName
    );

    book.save(&named_recipe("Focaccia")).unwrap();
    assert_eq!(
        book.rename("Focaccia", " new ").unwrap_err().code,
        ErrorCode::ReservedName
    );
    assert_eq!(book.save_as_new(&named_recipe("new")).unwrap().name, "new (2)");
}

#[test]
fn test_rename_collision_rejected_without_mutation() {
    let slot = InMemorySlot::with_contents("[]");
    let mut book = book_with_slot(&slot);
    book.save(&named_recipe("Ciabatta")).unwrap();
    book.save(&named_recipe("Baguette")).unwrap();
    let before = slot.snapshot().unwrap();

    let err = book.rename("Ciabatta", "Baguette").unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert!(book.contains("Ciabatta"));
    assert_eq!(slot.snapshot().unwrap(), before);
}

#[test]
fn test_rename_to_own_name_is_allowed() {
    let mut book = empty_book();
    book.save(&named_recipe("Pita")).unwrap();
    let renamed = book.rename("Pita", " Pita ").unwrap();
    assert_eq!(renamed.name, "Pita");
    assert_eq!(book.recipes().len(), 1);
}

#[test]
fn test_duplicate_uses_numbering_and_unpins() {
    let mut book = empty_book();
    book.save(&named_recipe("Challah")).unwrap();
    book.toggle_pin("Challah").unwrap();

    let copy = book.duplicate("Challah").unwrap();

    assert_eq!(copy.name, "Challah (2)");
    assert!(!copy.pinned);
    assert!(book.get("Challah").unwrap().pinned);
}

#[test]
fn test_save_keeps_existing_pin() {
    let mut book = empty_book();
    book.save(&named_recipe("Bagel")).unwrap();
    book.toggle_pin("Bagel").unwrap();
    assert!(book.save(&named_recipe("Bagel")).unwrap().pinned);
}

#[test]
fn test_unknown_names_are_not_found() {
    let mut book = empty_book();
    assert_eq!(book.delete("Ghost").unwrap_err().code, ErrorCode::ResourceNotFound);
    assert_eq!(book.duplicate("Ghost").unwrap_err().code, ErrorCode::ResourceNotFound);
    assert_eq!(book.toggle_pin("Ghost").unwrap_err().code, ErrorCode::ResourceNotFound);
    assert_eq!(
        book.rename("Ghost", "Spirit").unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

// ============================================================================
// List tiles
// ============================================================================

#[test]
fn test_tiles_pinned_then_recent_then_stored_order() {
    let slot = InMemorySlot::with_contents(
        r#"[
            {"name":"Old","updatedAt":"2024-01-01T00:00:00Z"},
            {"name":"Undated A"},
            {"name":"Recent","updatedAt":"2025-06-01T00:00:00Z"},
            {"name":"Pinned","pinned":true,"updatedAt":"2023-01-01T00:00:00Z"},
            {"name":"Undated B"}
        ]"#,
    );
    let book = book_with_slot(&slot);

    let order: Vec<String> = book.tiles().into_iter().map(|t| t.name).collect();
    assert_eq!(order, ["Pinned", "Recent", "Old", "Undated A", "Undated B"]);
}

// ============================================================================
// Write-through
// ============================================================================

#[test]
fn test_failed_write_leaves_book_untouched() {
    init_test_logging();
    let slot = FlakySlot::default();
    let mut book = RecipeBook::open(SlotRepository::new(slot.clone()));
    assert_eq!(book.recipes().len(), 1);

    slot.failing.store(true, Ordering::SeqCst);
    let err = book.save_as_new(&named_recipe("Lost")).unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(!book.contains("Lost"));
    assert_eq!(book.recipes().len(), 1);
}

#[test]
fn test_disabled_blend_is_not_persisted() {
    let slot = InMemorySlot::with_contents("[]");
    let mut book = book_with_slot(&slot);

    let mut recipe = enable_detailed_composition(named_recipe("Plain"));
    recipe.use_detailed_flour_composition = false;
    book.save(&recipe).unwrap();

    let raw = slot.snapshot().unwrap().unwrap();
    assert!(raw.contains("\"flourWeight\""));
    assert!(!raw.contains("flourComposition"));
}

#[test]
fn test_file_store_round_trip() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doughMasterRecipes.json");

    {
        let mut book = RecipeBook::open(SlotRepository::new(JsonFileSlot::new(&path)));
        let mut recipe = enable_detailed_composition(named_recipe("Spelt Loaf"));
        recipe.flour_weight = 650.0;
        book.save(&recipe).unwrap();
    }

    let reopened = SlotRepository::new(JsonFileSlot::new(&path)).list().unwrap();
    let names: Vec<&str> = reopened.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Basic Bread", "Spelt Loaf"]);
    let spelt = &reopened[1];
    assert_close(spelt.flour_weight, 650.0);
    assert_eq!(spelt.flour_composition.len(), 4);
}
