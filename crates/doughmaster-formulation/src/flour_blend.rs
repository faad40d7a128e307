// ABOUTME: Flour blend normalizer turning relative share values into percentages and weights
// ABOUTME: Includes the degenerate all-zero fallback and the removal correction rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughmaster_core::constants::labels;
use doughmaster_core::models::{default_flour_set, ComponentId, FlourComponent, Recipe};
use serde::Serialize;
use tracing::debug;

/// Share assigned to the anchor component when a removal zeroes the blend
const REMOVAL_FALLBACK_SHARE: f64 = 100.0;

/// One row of the normalized flour breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlourBreakdownEntry {
    /// Source component, `None` for the synthetic total entry
    pub id: Option<ComponentId>,
    /// Display name
    pub name: String,
    /// Share of total flour, 0 to 100
    pub percentage: f64,
    /// Grams of this flour
    pub weight: f64,
}

impl FlourBreakdownEntry {
    fn synthetic_total(flour_weight: f64) -> Self {
        Self {
            id: None,
            name: labels::FLOUR_TOTAL.to_owned(),
            percentage: 100.0,
            weight: flour_weight,
        }
    }
}

/// Flour breakdown for a recipe
///
/// Falls back to a single "Flour (Total)" entry when detailed composition
/// is off or the flour weight is not positive. The synthetic entry is never
/// part of the recipe's component list.
#[must_use]
pub fn normalize_flour_blend(recipe: &Recipe) -> Vec<FlourBreakdownEntry> {
    if !recipe.use_detailed_flour_composition || recipe.flour_weight <= 0.0 {
        return vec![FlourBreakdownEntry::synthetic_total(recipe.flour_weight.max(0.0))];
    }
    normalize_shares(&recipe.flour_composition, recipe.flour_weight)
}

/// Normalize share values against `flour_weight`
///
/// Shares are relative weights; negative shares count as zero. When every
/// share is zero, the first predefined component (else the first component)
/// is treated as holding the whole blend. That correction is derived here only; the components
/// passed in are left as they are.
#[must_use]
pub fn normalize_shares(components: &[FlourComponent], flour_weight: f64) -> Vec<FlourBreakdownEntry> {
    let Some(anchor) = anchor_index(components) else {
        return Vec::new();
    };

    let total_shares: f64 = components.iter().map(|c| c.share_value.max(0.0)).sum();
    let degenerate = total_shares <= 0.0;
    if degenerate {
        debug!(
            components = components.len(),
            "All flour shares are zero, deriving blend from anchor component"
        );
    }

    components
        .iter()
        .enumerate()
        .map(|(index, component)| {
            let (share, total) = if degenerate {
                (if index == anchor { 1.0 } else { 0.0 }, 1.0)
            } else {
                (component.share_value.max(0.0), total_shares)
            };
            let percentage = share / total * 100.0;
            FlourBreakdownEntry {
                id: Some(component.id.clone()),
                name: component.name.clone(),
                percentage,
                weight: percentage / 100.0 * flour_weight,
            }
        })
        .collect()
}

/// Remove a flour component and keep the blend defined
///
/// Removing the last component restores the Default Flour Set. If the
/// remaining shares sum to zero, the first predefined (else first) component
/// gets the full share. Unknown ids leave the blend unchanged.
#[must_use]
pub fn remove_flour_component(components: &[FlourComponent], id: &ComponentId) -> Vec<FlourComponent> {
    if !components.iter().any(|c| &c.id == id) {
        return components.to_vec();
    }

    let mut remaining: Vec<FlourComponent> =
        components.iter().filter(|c| &c.id != id).cloned().collect();

    if remaining.is_empty() {
        debug!("Last flour component removed, restoring default flour set");
        return default_flour_set();
    }

    let total: f64 = remaining.iter().map(|c| c.share_value).sum();
    if total <= 0.0 {
        if let Some(anchor) = anchor_index(&remaining) {
            remaining[anchor].share_value = REMOVAL_FALLBACK_SHARE;
        }
    }
    remaining
}

/// First predefined component, else the first component
fn anchor_index(components: &[FlourComponent]) -> Option<usize> {
    if components.is_empty() {
        return None;
    }
    Some(components.iter().position(|c| c.is_predefined).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blend(shares: &[(f64, bool)]) -> Vec<FlourComponent> {
        shares
            .iter()
            .enumerate()
            .map(|(i, &(share, predefined))| {
                if predefined {
                    FlourComponent::predefined(format!("Flour {i}"), share)
                } else {
                    FlourComponent::custom(format!("Flour {i}"), share)
                }
            })
            .collect()
    }

    #[test]
    fn test_equal_shares_split_evenly() {
        let entries = normalize_shares(&blend(&[(1.0, true), (1.0, true), (1.0, true), (1.0, true)]), 400.0);
        for entry in &entries {
            assert!((entry.percentage - 25.0).abs() < 1e-9);
            assert!((entry.weight - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_prefers_predefined() {
        let entries = normalize_shares(&blend(&[(0.0, false), (0.0, true)]), 300.0);
        assert_eq!(entries[0].percentage, 0.0);
        assert_eq!(entries[1].percentage, 100.0);
        assert_eq!(entries[1].weight, 300.0);
    }

    #[test]
    fn test_degenerate_without_predefined_uses_first() {
        let entries = normalize_shares(&blend(&[(0.0, false), (0.0, false)]), 300.0);
        assert_eq!(entries[0].percentage, 100.0);
        assert_eq!(entries[1].percentage, 0.0);
    }

    #[test]
    fn test_negative_shares_count_as_zero() {
        let entries = normalize_shares(&blend(&[(-50.0, true), (150.0, false)]), 400.0);
        assert_eq!(entries[0].weight, 0.0);
        assert_eq!(entries[1].percentage, 100.0);
        assert_eq!(entries[1].weight, 400.0);

        let entries = normalize_shares(&blend(&[(-5.0, false), (-1.0, true)]), 200.0);
        assert_eq!(entries[1].weight, 200.0);
    }

    #[test]
    fn test_empty_blend_is_empty() {
        assert!(normalize_shares(&[], 500.0).is_empty());
    }

    #[test]
    fn test_disabled_composition_yields_total_entry() {
        let recipe = Recipe {
            flour_composition: blend(&[(50.0, true), (50.0, true)]),
            ..Recipe::default()
        };
        let entries = normalize_flour_blend(&recipe);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, labels::FLOUR_TOTAL);
        assert!(entries[0].id.is_none());
        assert_eq!(entries[0].weight, recipe.flour_weight);
    }

    #[test]
    fn test_removal_reassigns_full_share() {
        let components = blend(&[(0.0, false), (0.0, true), (80.0, false)]);
        let removed = remove_flour_component(&components, &components[2].id);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[1].share_value, REMOVAL_FALLBACK_SHARE);
        assert_eq!(removed[0].share_value, 0.0);
    }

    #[test]
    fn test_removing_last_restores_default_set() {
        let components = blend(&[(10.0, false)]);
        let removed = remove_flour_component(&components, &components[0].id);
        assert_eq!(removed.len(), 4);
        assert_eq!(removed[0].share_value, 100.0);
    }

    #[test]
    fn test_removing_unknown_id_is_noop() {
        let components = blend(&[(10.0, true)]);
        let removed = remove_flour_component(&components, &ComponentId::new("missing"));
        assert_eq!(removed, components);
    }
}
