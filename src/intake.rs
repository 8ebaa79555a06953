use serde::{Deserialize, Serialize};
use time::{Date, Time};
use uuid::Uuid;

/// What an intake entry points at.
///
/// `Recipe` entries carry no nutrient contribution of their own: recipes are
/// expanded into ingredient entries at creation time, upstream of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Ingredient,
    Recipe,
    Supplement,
    Water,
}

/// One logged intake row, already filtered to a single user by the caller.
///
/// `quantity` is expressed in the entry's own `unit`; for ingredients and
/// supplements that unit is assumed compatible with the referenced density
/// record's base unit. `item_name` is the denormalized display name joined
/// onto the row, consumed by the grocery aggregator. Water entries have no
/// item reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub entry_date: Date,
    #[serde(default)]
    pub entry_time: Option<Time>,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub item_name: Option<String>,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub notes: Option<String>,
}
