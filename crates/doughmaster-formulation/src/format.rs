// ABOUTME: Quantity formatting for ingredient list entries
// ABOUTME: Renders gram quantities as "<number>g" with per-ingredient precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

const WHOLE_GRAM_TOLERANCE: f64 = 1e-9;

/// Precision rule for a rendered quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityStyle {
    /// One decimal place
    Standard,
    /// Two decimals unless the value is a whole gram, then one
    Yeast,
    /// No decimals
    WholeUnits,
}

impl QuantityStyle {
    const fn decimals(self, whole: bool) -> usize {
        match self {
            Self::Standard => 1,
            Self::Yeast if whole => 1,
            Self::Yeast => 2,
            Self::WholeUnits => 0,
        }
    }
}

/// Render grams as a quantity string
///
/// ```rust
/// use doughmaster_formulation::format::{format_grams, QuantityStyle};
///
/// assert_eq!(format_grams(325.0, QuantityStyle::Standard), "325.0g");
/// assert_eq!(format_grams(3.75, QuantityStyle::Yeast), "3.75g");
/// assert_eq!(format_grams(5.0, QuantityStyle::Yeast), "5.0g");
/// ```
#[must_use]
pub fn format_grams(grams: f64, style: QuantityStyle) -> String {
    let whole = (grams - grams.round()).abs() < WHOLE_GRAM_TOLERANCE;
    let decimals = style.decimals(whole);
    format!("{grams:.decimals$}g")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_one_decimal() {
        assert_eq!(format_grams(10.0, QuantityStyle::Standard), "10.0g");
        assert_eq!(format_grams(12.34, QuantityStyle::Standard), "12.3g");
    }

    #[test]
    fn test_yeast_precision() {
        assert_eq!(format_grams(1.5, QuantityStyle::Yeast), "1.50g");
        assert_eq!(format_grams(4.0, QuantityStyle::Yeast), "4.0g");
    }

    #[test]
    fn test_whole_units() {
        assert_eq!(format_grams(100.0, QuantityStyle::WholeUnits), "100g");
    }
}
