use std::collections::BTreeMap;

use serde::Serialize;

use crate::nutrients::NutrientVector;

/// Three-tier adherence classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdherenceStatus {
    Optimal,
    Moderate,
    Attention,
}

impl AdherenceStatus {
    /// [90, 110] optimal; [70, 90) and (110, 130] moderate; everything else
    /// needs attention. The boundaries are inclusive/exclusive exactly so.
    pub fn classify(percentage: i32) -> Self {
        match percentage {
            90..=110 => Self::Optimal,
            70..=89 | 111..=130 => Self::Moderate,
            _ => Self::Attention,
        }
    }
}

/// Per-nutrient adherence of `actual` against `target`, as whole percents.
///
/// Keys whose target is zero or negative are omitted entirely: no division
/// by zero, and no implied target where none exists.
pub fn percentages(actual: &NutrientVector, target: &NutrientVector) -> BTreeMap<&'static str, i32> {
    let mut out = BTreeMap::new();
    for &key in NutrientVector::KEYS {
        let t = target.get(key).unwrap_or(0.0);
        if t > 0.0 {
            let a = actual.get(key).unwrap_or(0.0);
            out.insert(key, (a / t * 100.0).round() as i32);
        }
    }
    out
}

/// Classification of every computed percentage, for checklist-style UIs.
pub fn statuses(
    percentages: &BTreeMap<&'static str, i32>,
) -> BTreeMap<&'static str, AdherenceStatus> {
    percentages
        .iter()
        .map(|(&key, &pct)| (key, AdherenceStatus::classify(pct)))
        .collect()
}
