// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, in-memory recipe books, and sample recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `doughmaster`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::sync::Once;

use doughmaster::services::RecipeBook;
use doughmaster::store::memory::InMemorySlot;
use doughmaster::store::SlotRepository;
use doughmaster_core::models::{default_recipe, Recipe};

static INIT_LOGGER: Once = Once::new();

/// Book type used by most integration tests
pub type MemoryBook = RecipeBook<SlotRepository<InMemorySlot>>;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Book over an explicitly empty collection
pub fn empty_book() -> MemoryBook {
    init_test_logging();
    RecipeBook::open(SlotRepository::new(InMemorySlot::with_contents("[]")))
}

/// Book over a slot the caller keeps a handle to
pub fn book_with_slot(slot: &InMemorySlot) -> MemoryBook {
    init_test_logging();
    RecipeBook::open(SlotRepository::new(slot.clone()))
}

/// Default recipe under another name
pub fn named_recipe(name: &str) -> Recipe {
    default_recipe().renamed(name)
}

/// Approximate float equality for gram weights
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
