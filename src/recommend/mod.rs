mod calculator;
mod compare;
mod water;

pub use calculator::{default_recommendations, recommend};
pub use compare::{percentages, statuses, AdherenceStatus};
pub use water::water_needs;
