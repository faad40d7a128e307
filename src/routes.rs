// ABOUTME: Navigation identity for recipes addressed by URL-encoded name
// ABOUTME: Parses and renders /recipes/{name} paths with the reserved "new" token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! `/recipes/new` means "no recipe loaded, start from defaults". Any other
//! segment is a URL-encoded recipe name. A `print=1` query flag asks the
//! host to print once the recipe is shown.

use std::fmt::{Display, Formatter, Result as FmtResult};

use doughmaster_core::constants::routes::{NEW_RECIPE_TOKEN, RECIPES_BASE};
use doughmaster_core::errors::{AppError, AppResult, ErrorCode};

/// Which recipe a path addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeRoute {
    /// Fresh editor with default values
    New,
    /// Stored recipe by name
    Named(String),
}

/// A parsed path plus its query flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeLocation {
    /// Addressed recipe
    pub route: RecipeRoute,
    /// `print=1` was present
    pub auto_print: bool,
}

impl RecipeRoute {
    /// Route for a stored recipe name
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Render as a path such as `/recipes/Sourdough%20%282%29`
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::New => format!("{RECIPES_BASE}/{NEW_RECIPE_TOKEN}"),
            Self::Named(name) => format!("{RECIPES_BASE}/{}", urlencoding::encode(name)),
        }
    }

    /// Render with the auto-print flag
    #[must_use]
    pub fn to_print_path(&self) -> String {
        format!("{}?print=1", self.to_path())
    }

    /// Parse a `/recipes/{segment}` path, with or without a query string
    ///
    /// # Errors
    ///
    /// Returns an invalid-format error when the path is outside `/recipes/`,
    /// has an empty segment, or is not valid percent-encoding
    pub fn parse(path: &str) -> AppResult<RecipeLocation> {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let segment = path
            .strip_prefix(RECIPES_BASE)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|rest| rest.trim_end_matches('/'))
            .filter(|segment| !segment.is_empty() && !segment.contains('/'))
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::InvalidFormat,
                    format!("Not a recipe path: {path}"),
                )
            })?;

        let route = if segment == NEW_RECIPE_TOKEN {
            Self::New
        } else {
            let name = urlencoding::decode(segment).map_err(|e| {
                AppError::new(
                    ErrorCode::InvalidFormat,
                    format!("Recipe path is not valid UTF-8: {segment}"),
                )
                .with_source(e)
            })?;
            Self::Named(name.into_owned())
        };

        let auto_print = query
            .split('&')
            .any(|pair| pair == "print=1" || pair == "print=true");

        Ok(RecipeLocation { route, auto_print })
    }
}

impl Display for RecipeRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_path())
    }
}
