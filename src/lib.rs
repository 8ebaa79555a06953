//! Daily nutrient tracking core: intake aggregation across heterogeneous
//! sources, personalized recommendation targets, adherence comparison, and
//! grocery consolidation with a self-invalidating purchase checklist.
//!
//! The HTTP layer, auth and persistence live outside this crate; they talk
//! to it through [`nutrients::DensityLookup`], pre-filtered
//! [`intake::IntakeEntry`] slices and the [`grocery::KvStore`] trait.

pub mod grocery;
pub mod intake;
pub mod nutrients;
pub mod profile;
pub mod recommend;
pub mod summary;

pub use grocery::{
    aggregate_grocery, AggregatedIngredient, CacheKey, KvStore, MemoryStore, PurchaseStateCache,
};
pub use intake::{EntryType, IntakeEntry};
pub use nutrients::{
    aggregate, normalize_water, DensityCatalog, DensityLookup, IngredientDensity, NutrientVector,
    SupplementDensity,
};
pub use profile::{Gender, Goal, UserProfile};
pub use recommend::{default_recommendations, percentages, recommend, water_needs, AdherenceStatus};
pub use summary::{grocery_list, nutrition_summary, NutritionSummary};
