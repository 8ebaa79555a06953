mod aggregate;
mod cache;

pub use aggregate::{
    aggregate_grocery, aggregate_grocery_with_stats, AggregatedIngredient, GroceryStats,
};
pub use cache::{CacheKey, KvStore, MemoryStore, PurchaseSnapshot, PurchaseStateCache, SnapshotError};
