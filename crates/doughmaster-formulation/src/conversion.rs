// ABOUTME: Baker's percentage arithmetic relative to a flour base
// ABOUTME: Every percentage-to-weight conversion in the engine routes through here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Convert a baker's percentage into grams
///
/// Returns 0 whenever `flour_weight` is not positive, regardless of the
/// percentage. This is a guard, not an error.
///
/// # Examples
///
/// ```rust
/// use doughmaster_formulation::conversion::weight_from_percentage;
///
/// assert_eq!(weight_from_percentage(500.0, 2.0), 10.0);
/// assert_eq!(weight_from_percentage(0.0, 65.0), 0.0);
/// ```
#[must_use]
pub fn weight_from_percentage(flour_weight: f64, percentage: f64) -> f64 {
    if flour_weight <= 0.0 {
        return 0.0;
    }
    flour_weight * percentage / 100.0
}

/// Convert grams back into a baker's percentage
///
/// Same zero guard as [`weight_from_percentage`]. Used only for displaying
/// realized ratios.
#[must_use]
pub fn percentage_from_weight(flour_weight: f64, grams: f64) -> f64 {
    if flour_weight <= 0.0 {
        return 0.0;
    }
    grams / flour_weight * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_flour_guard() {
        assert_eq!(weight_from_percentage(0.0, 100.0), 0.0);
        assert_eq!(weight_from_percentage(-10.0, 100.0), 0.0);
        assert_eq!(percentage_from_weight(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_conversions() {
        assert!((weight_from_percentage(500.0, 65.0) - 325.0).abs() < 1e-9);
        assert!((percentage_from_weight(500.0, 325.0) - 65.0).abs() < 1e-9);
    }
}
