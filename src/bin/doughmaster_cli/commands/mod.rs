// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for doughmaster-cli
// ABOUTME: Provides access to calculation, recipe management, and export commands

pub mod calc;
pub mod export;
pub mod recipes;
