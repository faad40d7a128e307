// ABOUTME: Component entities owned by a recipe: flours, liquids, and amendments
// ABOUTME: Each carries a stable id; none exists outside its containing recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::ids::ComponentId;

/// One flour in a detailed blend
///
/// `share_value` is a relative weight, not a percentage: shares `[100, 0]`
/// and `[1, 0]` describe the same blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlourComponent {
    /// Stable identity, never reused
    pub id: ComponentId,
    /// Display name
    pub name: String,
    /// Relative weight within the blend
    pub share_value: f64,
    /// Added by the user rather than shipped with the defaults
    #[serde(default)]
    pub is_custom: bool,
    /// Part of the built-in flour set
    #[serde(default)]
    pub is_predefined: bool,
}

impl FlourComponent {
    /// Built-in flour
    pub fn predefined(name: impl Into<String>, share_value: f64) -> Self {
        Self {
            id: ComponentId::generate(),
            name: name.into(),
            share_value,
            is_custom: false,
            is_predefined: true,
        }
    }

    /// User-added flour
    pub fn custom(name: impl Into<String>, share_value: f64) -> Self {
        Self {
            id: ComponentId::generate(),
            name: name.into(),
            share_value,
            is_custom: true,
            is_predefined: false,
        }
    }
}

/// A liquid whose whole weight counts toward hydration (milk, juice, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidComponent {
    /// Stable identity
    pub id: ComponentId,
    /// Display name
    pub name: String,
    /// Weight in grams
    pub weight: f64,
    /// Added by the user
    #[serde(default)]
    pub is_custom: bool,
    /// Part of the built-in liquid set
    #[serde(default)]
    pub is_predefined: bool,
}

impl LiquidComponent {
    /// Built-in liquid
    pub fn predefined(name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: ComponentId::generate(),
            name: name.into(),
            weight,
            is_custom: false,
            is_predefined: true,
        }
    }

    /// User-added liquid
    pub fn custom(name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: ComponentId::generate(),
            name: name.into(),
            weight,
            is_custom: true,
            is_predefined: false,
        }
    }
}

/// Free-form solid ingredient (seeds, cheese, raisins, ...)
///
/// Adds to total dough weight, never to hydration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amendment {
    /// Stable identity
    pub id: ComponentId,
    /// Free text name; blank names are left out of the ingredient list
    pub name: String,
    /// Weight in grams
    pub weight: f64,
}

impl Amendment {
    /// New amendment with a generated id
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: ComponentId::generate(),
            name: name.into(),
            weight,
        }
    }

    /// Whether this entry belongs in the ingredient list
    #[must_use]
    pub fn is_listed(&self) -> bool {
        !self.name.trim().is_empty() && self.weight > 0.0
    }
}
