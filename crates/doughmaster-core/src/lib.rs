// ABOUTME: Core types and constants for the DoughMaster formulation engine
// ABOUTME: Foundation crate with error handling, recipe data model, and built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # DoughMaster Core
//!
//! Foundation crate providing shared types and constants for the DoughMaster
//! bread formulation engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Egg constants, input bounds, storage keys, and route tokens
//! - **models**: `Recipe`, flour/liquid components, amendments, and the built-in defaults

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe data model and built-in default recipes
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    Amendment, ComponentId, FlourComponent, LiquidComponent, Recipe, StoredRecipe,
};
