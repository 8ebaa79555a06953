use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::vector::NutrientVector;

/// Nutrient content of an ingredient per 100 of its `base_unit`.
///
/// The base unit (g or ml) is authoritative: entry quantities are assumed
/// compatible with it, no cross-unit conversion is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDensity {
    pub id: i64,
    pub name: String,
    pub base_unit: String,
    #[serde(default)]
    pub per_100: NutrientVector,
}

/// Nutrient content of a supplement per one declared serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementDensity {
    pub id: i64,
    pub name: String,
    pub serving_size: f64,
    pub serving_unit: String,
    #[serde(default)]
    pub per_serving: NutrientVector,
}

/// Resolves an intake entry's item reference to its density record.
///
/// Implementations must return `None` for deleted or unknown items instead of
/// failing; historical entries keep aggregating after their item is removed.
pub trait DensityLookup {
    fn ingredient(&self, item_id: i64) -> Option<&IngredientDensity>;
    fn supplement(&self, item_id: i64) -> Option<&SupplementDensity>;
}

/// In-memory density catalog. Backs tests and embedded use; a database repo
/// can sit behind the same [`DensityLookup`] trait.
#[derive(Debug, Clone, Default)]
pub struct DensityCatalog {
    ingredients: HashMap<i64, IngredientDensity>,
    supplements: HashMap<i64, SupplementDensity>,
}

impl DensityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_ingredient(&mut self, record: IngredientDensity) {
        self.ingredients.insert(record.id, record);
    }

    pub fn insert_supplement(&mut self, record: SupplementDensity) {
        self.supplements.insert(record.id, record);
    }
}

impl DensityLookup for DensityCatalog {
    fn ingredient(&self, item_id: i64) -> Option<&IngredientDensity> {
        self.ingredients.get(&item_id)
    }

    fn supplement(&self, item_id: i64) -> Option<&SupplementDensity> {
        self.supplements.get(&item_id)
    }
}
