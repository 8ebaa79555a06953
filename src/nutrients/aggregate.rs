use tracing::{debug, warn};

use crate::intake::{EntryType, IntakeEntry};

use super::catalog::DensityLookup;
use super::units::normalize_water;
use super::vector::NutrientVector;

/// Diagnostic side channel: how many entries contributed nothing and why.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    /// Entries whose item reference no longer resolves to a density record.
    pub missing_refs: u32,
    /// Supplement entries skipped because of a zero or negative serving size.
    pub zero_serving: u32,
}

/// Sums the nutrient contributions of `entries` into one vector.
///
/// Purely additive and range-agnostic: the caller pre-filters entries to a
/// date or an inclusive date range, and for disjoint entry sets
/// `aggregate(a) + aggregate(b) == aggregate(a ++ b)`.
pub fn aggregate(entries: &[IntakeEntry], lookup: &impl DensityLookup) -> NutrientVector {
    aggregate_with_stats(entries, lookup).0
}

/// [`aggregate`] plus skip diagnostics for callers that want to surface them.
pub fn aggregate_with_stats(
    entries: &[IntakeEntry],
    lookup: &impl DensityLookup,
) -> (NutrientVector, AggregationStats) {
    let mut totals = NutrientVector::zero();
    let mut stats = AggregationStats::default();

    for entry in entries {
        match entry.entry_type {
            EntryType::Ingredient => match entry.item_id.and_then(|id| lookup.ingredient(id)) {
                // Density values are per 100 of the record's base unit.
                Some(record) => totals.add_scaled(&record.per_100, entry.quantity / 100.0),
                None => {
                    warn!(entry_id = %entry.id, item_id = ?entry.item_id,
                        "ingredient record missing, skipping entry");
                    stats.missing_refs += 1;
                }
            },
            EntryType::Supplement => match entry.item_id.and_then(|id| lookup.supplement(id)) {
                Some(record) if record.serving_size > 0.0 => {
                    totals.add_scaled(&record.per_serving, entry.quantity / record.serving_size);
                }
                Some(record) => {
                    // Guard against division-by-zero contaminating the vector.
                    warn!(entry_id = %entry.id, item_id = record.id,
                        "supplement has no usable serving size, skipping entry");
                    stats.zero_serving += 1;
                }
                None => {
                    warn!(entry_id = %entry.id, item_id = ?entry.item_id,
                        "supplement record missing, skipping entry");
                    stats.missing_refs += 1;
                }
            },
            EntryType::Water => totals.water += normalize_water(entry.quantity, &entry.unit),
            // Recipes are pre-expanded into ingredient entries upstream.
            EntryType::Recipe => {}
        }
    }

    debug!(
        entries = entries.len(),
        missing_refs = stats.missing_refs,
        zero_serving = stats.zero_serving,
        "intake aggregation done"
    );
    (totals, stats)
}
