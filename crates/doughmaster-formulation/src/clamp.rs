// ABOUTME: Numeric input sanitation for recipe fields
// ABOUTME: Out-of-range or non-numeric entries clamp to field bounds instead of erroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughmaster_core::constants::bounds::FieldBounds;

/// Clamp a numeric entry into `bounds`
///
/// Non-finite entries other than positive infinity land on the minimum.
#[must_use]
pub fn clamp_input(value: f64, bounds: FieldBounds) -> f64 {
    bounds.clamp(value)
}

/// Parse raw text entered for a numeric field and clamp it
///
/// Text that does not parse as a number yields the field's minimum.
#[must_use]
pub fn parse_numeric_input(raw: &str, bounds: FieldBounds) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map_or(bounds.min, |value| clamp_input(value, bounds))
}

/// Parse an egg count entry
///
/// Fractional text is truncated to its integer part, negatives become 0,
/// and unparseable text becomes 0.
#[must_use]
pub fn parse_egg_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let integral = trimmed.split('.').next().unwrap_or(trimmed);
    integral
        .parse::<i64>()
        .map_or(0, |count| u32::try_from(count.max(0)).unwrap_or(u32::MAX))
}
