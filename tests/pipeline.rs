//! End-to-end pipeline: entries -> aggregation -> targets -> adherence,
//! and grocery aggregation -> purchase cache round trips.

use std::collections::HashMap;

use time::macros::date;
use uuid::Uuid;

use nutrimind::{
    aggregate, default_recommendations, grocery_list, nutrition_summary, percentages, CacheKey,
    DensityCatalog, EntryType, Gender, Goal, IngredientDensity, IntakeEntry, MemoryStore,
    NutrientVector, PurchaseStateCache, SupplementDensity, UserProfile,
};

fn entry(entry_type: EntryType, item_id: Option<i64>, name: &str, quantity: f64, unit: &str) -> IntakeEntry {
    IntakeEntry {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        entry_date: date!(2025 - 03 - 10),
        entry_time: None,
        entry_type,
        item_id,
        item_name: (!name.is_empty()).then(|| name.to_string()),
        quantity,
        unit: unit.into(),
        notes: None,
    }
}

fn catalog() -> DensityCatalog {
    let mut catalog = DensityCatalog::new();

    let mut chicken = NutrientVector::zero();
    chicken.calories = 165.0;
    chicken.protein = 31.0;
    catalog.insert_ingredient(IngredientDensity {
        id: 1,
        name: "chicken breast".into(),
        base_unit: "g".into(),
        per_100: chicken,
    });

    let mut rice = NutrientVector::zero();
    rice.calories = 130.0;
    rice.carbs = 28.0;
    catalog.insert_ingredient(IngredientDensity {
        id: 2,
        name: "rice".into(),
        base_unit: "g".into(),
        per_100: rice,
    });

    let mut multivitamin = NutrientVector::zero();
    multivitamin.vitamin_c = 80.0;
    multivitamin.zinc = 5.0;
    catalog.insert_supplement(SupplementDensity {
        id: 10,
        name: "multivitamin".into(),
        serving_size: 1.0,
        serving_unit: "tablet".into(),
        per_serving: multivitamin,
    });

    catalog
}

#[test]
fn spec_scenario_150g_chicken() {
    let totals = aggregate(
        &[entry(EntryType::Ingredient, Some(1), "chicken breast", 150.0, "g")],
        &catalog(),
    );
    assert_eq!(totals.calories, 247.5);
    assert_eq!(totals.protein, 46.5);
    for key in NutrientVector::KEYS {
        if *key != "calories" && *key != "protein" {
            assert_eq!(totals.get(key), Some(0.0), "{key} should stay zero");
        }
    }
}

#[test]
fn mixed_day_summary_against_profile() {
    let entries = vec![
        entry(EntryType::Ingredient, Some(1), "chicken breast", 200.0, "g"),
        entry(EntryType::Ingredient, Some(2), "rice", 150.0, "g"),
        entry(EntryType::Supplement, Some(10), "multivitamin", 1.0, "tablet"),
        entry(EntryType::Water, None, "", 2.0, "glass"),
        entry(EntryType::Water, None, "", 0.5, "l"),
        // Recipe entries are expanded upstream; this one must contribute nothing.
        entry(EntryType::Recipe, Some(77), "stir fry", 1.0, "portion"),
        // Orphaned reference from a deleted ingredient.
        entry(EntryType::Ingredient, Some(999), "gone", 100.0, "g"),
    ];

    let profile = UserProfile {
        weight_kg: Some(80.0),
        height_cm: Some(182.0),
        age: Some(34),
        gender: Some(Gender::Male),
        activity_level: Some(1.7),
        goal: Some(Goal::Maintain),
        ..Default::default()
    };

    let summary = nutrition_summary(&entries, &catalog(), Some(&profile));
    assert_eq!(summary.totals.calories, 165.0 * 2.0 + 130.0 * 1.5);
    assert_eq!(summary.totals.protein, 62.0);
    assert_eq!(summary.totals.carbs, 42.0);
    assert_eq!(summary.totals.vitamin_c, 80.0);
    assert_eq!(summary.totals.water, 1000.0);

    // Every target this calculator produces is positive, so every key is compared.
    assert_eq!(summary.percentages.len(), NutrientVector::KEYS.len());
    assert_eq!(summary.percentages.get("vitamin_c"), Some(&100));
    assert_eq!(summary.statuses.len(), summary.percentages.len());
}

#[test]
fn percentage_omission_for_zero_targets() {
    let mut actual = NutrientVector::zero();
    actual.sodium = 900.0;
    let target = NutrientVector::zero();
    assert!(percentages(&actual, &target).is_empty());
}

#[test]
fn default_targets_are_stable_across_paths() {
    let via_empty_profile = nutrition_summary(&[], &catalog(), Some(&UserProfile::default()));
    let via_missing_profile = nutrition_summary(&[], &catalog(), None);
    assert_eq!(via_empty_profile.targets, via_missing_profile.targets);
    assert_eq!(via_missing_profile.targets, default_recommendations());
}

#[test]
fn grocery_checklist_survives_only_unchanged_quantities() {
    let week = vec![
        entry(EntryType::Ingredient, Some(1), "chicken breast", 200.0, "g"),
        entry(EntryType::Ingredient, Some(1), "chicken breast", 150.0, "g"),
        entry(EntryType::Ingredient, Some(2), "rice", 300.0, "g"),
        entry(EntryType::Water, None, "", 2.0, "glass"),
    ];
    let key = CacheKey {
        start_date: date!(2025 - 03 - 10),
        end_date: date!(2025 - 03 - 16),
        epoch: 29_000_000,
    };
    let mut cache = PurchaseStateCache::new(MemoryStore::new());

    // First fetch: everything unpurchased, water excluded.
    let items = grocery_list(&week, &cache, &key);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item_name, "chicken breast");
    assert_eq!(items[0].total_quantity, 350.0);

    // Mark the chicken purchased.
    let mut flags: HashMap<i64, bool> = items.iter().map(|i| (i.item_id, i.purchased)).collect();
    flags.insert(1, true);
    cache.save(&key, &flags, &items).unwrap();
    assert!(grocery_list(&week, &cache, &key)[0].purchased);

    // An extra chicken entry changes the aggregated quantity: flag resets.
    let mut extended = week.clone();
    extended.push(entry(EntryType::Ingredient, Some(1), "chicken breast", 100.0, "g"));
    let reloaded = grocery_list(&extended, &cache, &key);
    assert_eq!(reloaded[0].total_quantity, 450.0);
    assert!(!reloaded[0].purchased);
    // Rice was never marked and stays unpurchased.
    assert!(!reloaded[1].purchased);
}
