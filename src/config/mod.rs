// ABOUTME: Configuration management module for DoughMaster settings
// ABOUTME: Environment-driven store selection and deployment settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables. Command-line flags in the
//! CLI override them after loading.

/// Environment-based configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::DoughMasterConfig;
pub use types::{Environment, StoreBackend};
