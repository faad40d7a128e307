// ABOUTME: Numeric input bounds for recipe fields
// ABOUTME: Out-of-range entries clamp to these limits instead of raising errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Inclusive range a numeric field is clamped into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value (`f64::INFINITY` when unbounded)
    pub max: f64,
}

impl FieldBounds {
    /// Bounds with an upper limit
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds with only a lower limit
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    /// Clamp `value` into the range; NaN lands on the minimum
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

/// Total flour weight in grams
pub const FLOUR_WEIGHT: FieldBounds = FieldBounds::at_least(0.0);
/// Desired overall hydration percentage
pub const HYDRATION_PERCENTAGE: FieldBounds = FieldBounds::new(0.0, 150.0);
/// Salt baker's percentage
pub const SALT_PERCENTAGE: FieldBounds = FieldBounds::new(0.0, 5.0);
/// Yeast baker's percentage
pub const YEAST_PERCENTAGE: FieldBounds = FieldBounds::new(0.0, 3.0);
/// Sugar, butter, and oil baker's percentages
pub const ADDITIVE_PERCENTAGE: FieldBounds = FieldBounds::at_least(0.0);
/// Flour component share value
pub const FLOUR_SHARE: FieldBounds = FieldBounds::new(0.0, 100.0);
/// Liquid component and amendment weights in grams
pub const COMPONENT_WEIGHT: FieldBounds = FieldBounds::at_least(0.0);
