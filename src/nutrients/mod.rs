mod aggregate;
mod catalog;
mod units;
mod vector;

pub use aggregate::{aggregate, aggregate_with_stats, AggregationStats};
pub use catalog::{DensityCatalog, DensityLookup, IngredientDensity, SupplementDensity};
pub use units::normalize_water;
pub use vector::NutrientVector;
