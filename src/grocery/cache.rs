use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

use super::aggregate::AggregatedIngredient;

/// Minimal string key-value store the purchase checklist persists into.
///
/// Modeled on the browser local storage the source system used; an in-memory
/// map, a file, or a database row can all sit behind it.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;
}

/// HashMap-backed [`KvStore`] for tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

const KEY_PREFIX: &str = "grocery-purchases";

/// Storage key for one purchase checklist: date range plus invalidation
/// epoch. The epoch is minute-truncated so rapid successive edits collapse
/// into one invalidation generation instead of thrashing the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheKey {
    pub start_date: Date,
    pub end_date: Date,
    pub epoch: i64,
}

impl CacheKey {
    /// `changed_at` is the timestamp of the last grocery-affecting edit.
    pub fn new(start_date: Date, end_date: Date, changed_at: OffsetDateTime) -> Self {
        Self {
            start_date,
            end_date,
            epoch: changed_at.unix_timestamp() / 60,
        }
    }

    pub fn render(&self) -> String {
        format!("{}:{}:{}:{}", KEY_PREFIX, self.start_date, self.end_date, self.epoch)
    }

    /// Shared by every epoch of the same date range.
    pub fn range_prefix(&self) -> String {
        format!("{}:{}:{}:", KEY_PREFIX, self.start_date, self.end_date)
    }
}

/// Persisted checklist state. Field names match the legacy snapshots
/// byte-for-byte, `lastUpdated` included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseSnapshot {
    pub purchased: HashMap<i64, bool>,
    pub quantities: HashMap<i64, f64>,
    #[serde(rename = "lastUpdated", with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("purchase store read failed: {0}")]
    Store(#[from] anyhow::Error),
    #[error("malformed purchase snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Checklist of purchased flags that self-invalidates when the underlying
/// aggregated quantities change.
pub struct PurchaseStateCache<S> {
    store: S,
}

impl<S: KvStore> PurchaseStateCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn read_snapshot(&self, key: &CacheKey) -> Result<Option<PurchaseSnapshot>, SnapshotError> {
        let Some(raw) = self.store.get(&key.render())? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Validated purchase flags for the current aggregation.
    ///
    /// A stored flag survives iff the snapshotted quantity for that item
    /// equals its current `totalQuantity` exactly; items without a prior
    /// record default to unpurchased. A missing or malformed snapshot is
    /// treated as empty, never as a failure.
    pub fn load(&self, key: &CacheKey, current: &[AggregatedIngredient]) -> HashMap<i64, bool> {
        let snapshot = match self.read_snapshot(key) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return current.iter().map(|i| (i.item_id, false)).collect(),
            Err(e) => {
                warn!(error = %e, key = %key.render(), "treating purchase snapshot as empty");
                return current.iter().map(|i| (i.item_id, false)).collect();
            }
        };

        current
            .iter()
            .map(|item| {
                let purchased = snapshot.purchased.get(&item.item_id).copied().unwrap_or(false)
                    && snapshot.quantities.get(&item.item_id).copied()
                        == Some(item.total_quantity);
                (item.item_id, purchased)
            })
            .collect()
    }

    /// Persists the checklist with a quantity snapshot taken from `current`,
    /// then eagerly drops sibling snapshots left behind by earlier epochs of
    /// the same date range.
    pub fn save(
        &mut self,
        key: &CacheKey,
        purchased: &HashMap<i64, bool>,
        current: &[AggregatedIngredient],
    ) -> Result<()> {
        let snapshot = PurchaseSnapshot {
            purchased: purchased.clone(),
            quantities: current.iter().map(|i| (i.item_id, i.total_quantity)).collect(),
            last_updated: OffsetDateTime::now_utc(),
        };
        self.store.set(&key.render(), &serde_json::to_string(&snapshot)?)?;
        self.invalidate_stale(key)
    }

    /// Deletes snapshots sharing the date-range prefix but a different epoch.
    pub fn invalidate_stale(&mut self, current: &CacheKey) -> Result<()> {
        let keep = current.render();
        for stale in self.store.keys_with_prefix(&current.range_prefix())? {
            if stale != keep {
                debug!(key = %stale, "deleting stale purchase snapshot");
                self.store.delete(&stale)?;
            }
        }
        Ok(())
    }
}
