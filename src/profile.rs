use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Maintain,
    Lose,
    Gain,
}

/// Body/activity profile as stored. Every field is optional; recommendation
/// code works on [`ResolvedProfile`] after the documented fallbacks apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Physical activity level, a BMR multiplier in [1.2, 2.5].
    #[serde(default)]
    pub activity_level: Option<f64>,
    #[serde(default)]
    pub goal: Option<Goal>,
}

/// Profile with all fallbacks materialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: f64,
    pub goal: Goal,
}

impl Default for ResolvedProfile {
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 170.0,
            age: 30,
            gender: Gender::Male,
            activity_level: 1.5,
            goal: Goal::Maintain,
        }
    }
}

impl UserProfile {
    pub fn resolved(&self) -> ResolvedProfile {
        let fallback = ResolvedProfile::default();
        ResolvedProfile {
            weight_kg: self.weight_kg.unwrap_or(fallback.weight_kg),
            height_cm: self.height_cm.unwrap_or(fallback.height_cm),
            age: self.age.unwrap_or(fallback.age),
            gender: self.gender.unwrap_or(fallback.gender),
            activity_level: self.activity_level.unwrap_or(fallback.activity_level),
            goal: self.goal.unwrap_or(fallback.goal),
        }
    }
}
