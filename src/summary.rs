use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::grocery::{aggregate_grocery, AggregatedIngredient, CacheKey, KvStore, PurchaseStateCache};
use crate::intake::IntakeEntry;
use crate::nutrients::{aggregate, DensityLookup, NutrientVector};
use crate::profile::UserProfile;
use crate::recommend::{default_recommendations, percentages, recommend, statuses, AdherenceStatus};

/// Day or date-range totals compared against the profile's targets.
#[derive(Debug, Clone, Serialize)]
pub struct NutritionSummary {
    pub totals: NutrientVector,
    pub targets: NutrientVector,
    pub percentages: BTreeMap<&'static str, i32>,
    pub statuses: BTreeMap<&'static str, AdherenceStatus>,
}

/// Aggregates a pre-filtered entry set and compares it against personalized
/// targets. A missing profile falls back to the default recommendations.
pub fn nutrition_summary(
    entries: &[IntakeEntry],
    lookup: &impl DensityLookup,
    profile: Option<&UserProfile>,
) -> NutritionSummary {
    let totals = aggregate(entries, lookup);
    let targets = match profile {
        Some(profile) => recommend(profile),
        None => default_recommendations(),
    };
    let pct = percentages(&totals, &targets);
    let statuses = statuses(&pct);
    debug!(entries = entries.len(), compared = pct.len(), "nutrition summary computed");
    NutritionSummary {
        totals,
        targets,
        percentages: pct,
        statuses,
    }
}

/// Grocery list for a date range with validated purchase flags applied.
pub fn grocery_list<S: KvStore>(
    entries: &[IntakeEntry],
    cache: &PurchaseStateCache<S>,
    key: &CacheKey,
) -> Vec<AggregatedIngredient> {
    let mut items = aggregate_grocery(entries);
    let flags = cache.load(key, &items);
    for item in &mut items {
        item.purchased = flags.get(&item.item_id).copied().unwrap_or(false);
    }
    items
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use uuid::Uuid;

    use super::*;
    use crate::intake::EntryType;
    use crate::nutrients::{DensityCatalog, IngredientDensity};

    fn chicken_catalog() -> DensityCatalog {
        let mut catalog = DensityCatalog::new();
        let mut per_100 = NutrientVector::zero();
        per_100.calories = 165.0;
        per_100.protein = 31.0;
        catalog.insert_ingredient(IngredientDensity {
            id: 1,
            name: "chicken breast".into(),
            base_unit: "g".into(),
            per_100,
        });
        catalog
    }

    fn chicken_entry(quantity: f64) -> IntakeEntry {
        IntakeEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            entry_date: date!(2025 - 03 - 10),
            entry_time: None,
            entry_type: EntryType::Ingredient,
            item_id: Some(1),
            item_name: Some("chicken breast".into()),
            quantity,
            unit: "g".into(),
            notes: None,
        }
    }

    #[test]
    fn missing_profile_uses_default_targets() {
        let summary = nutrition_summary(&[chicken_entry(150.0)], &chicken_catalog(), None);
        assert_eq!(summary.totals.calories, 247.5);
        assert_eq!(summary.targets, default_recommendations());
        // Zero-target keys never make it into the comparison.
        assert_eq!(summary.percentages.len(), summary.statuses.len());
        assert!(summary.percentages.contains_key("protein"));
    }

    #[test]
    fn grocery_list_applies_cached_flags() {
        let entries = [chicken_entry(150.0), chicken_entry(100.0)];
        let key = CacheKey {
            start_date: date!(2025 - 03 - 10),
            end_date: date!(2025 - 03 - 10),
            epoch: 1,
        };

        let mut cache = PurchaseStateCache::new(crate::grocery::MemoryStore::new());
        let items = grocery_list(&entries, &cache, &key);
        assert_eq!(items[0].total_quantity, 250.0);
        assert!(!items[0].purchased);

        let flags = std::collections::HashMap::from([(1, true)]);
        cache.save(&key, &flags, &items).unwrap();
        let reloaded = grocery_list(&entries, &cache, &key);
        assert!(reloaded[0].purchased);
    }
}
