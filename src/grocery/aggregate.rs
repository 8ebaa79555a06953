use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::intake::{EntryType, IntakeEntry};

/// One consolidated shopping-list line for a date range.
///
/// Field names are the persisted wire shape and must stay as-is for
/// compatibility with existing snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    pub item_id: i64,
    pub item_name: String,
    #[serde(rename = "totalQuantity")]
    pub total_quantity: f64,
    pub unit: String,
    pub occurrences: u32,
    pub purchased: bool,
}

/// Diagnostic side channel for the grocery merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroceryStats {
    /// Entries counted into `occurrences` whose quantity could not be summed
    /// because their unit differed from the first-seen unit for the item.
    pub unmerged_units: u32,
}

/// Consolidates ingredient-type entries into per-item totals.
///
/// Grouping key is `item_id`. An entry whose unit matches the first-seen
/// unit for its item adds to the total; a mismatched unit still bumps
/// `occurrences` but its quantity stays unmerged. Output is sorted by
/// descending total quantity.
pub fn aggregate_grocery(entries: &[IntakeEntry]) -> Vec<AggregatedIngredient> {
    aggregate_grocery_with_stats(entries).0
}

pub fn aggregate_grocery_with_stats(
    entries: &[IntakeEntry],
) -> (Vec<AggregatedIngredient>, GroceryStats) {
    let mut stats = GroceryStats::default();
    let mut by_item: HashMap<i64, AggregatedIngredient> = HashMap::new();

    for entry in entries {
        if entry.entry_type != EntryType::Ingredient {
            continue;
        }
        let Some(item_id) = entry.item_id else {
            continue;
        };

        match by_item.get_mut(&item_id) {
            Some(item) => {
                item.occurrences += 1;
                if item.unit == entry.unit {
                    item.total_quantity += entry.quantity;
                } else {
                    warn!(%item_id, first = %item.unit, got = %entry.unit,
                        "unit mismatch, quantity left unmerged");
                    stats.unmerged_units += 1;
                }
            }
            None => {
                by_item.insert(
                    item_id,
                    AggregatedIngredient {
                        item_id,
                        item_name: entry.item_name.clone().unwrap_or_default(),
                        total_quantity: entry.quantity,
                        unit: entry.unit.clone(),
                        occurrences: 1,
                        purchased: false,
                    },
                );
            }
        }
    }

    let mut items: Vec<AggregatedIngredient> = by_item.into_values().collect();
    items.sort_by(|a, b| {
        b.total_quantity
            .partial_cmp(&a.total_quantity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    debug!(items = items.len(), unmerged = stats.unmerged_units, "grocery aggregation done");
    (items, stats)
}
