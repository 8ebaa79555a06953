use tracing::debug;

use crate::nutrients::NutrientVector;
use crate::profile::{Gender, Goal, ResolvedProfile, UserProfile};

use super::water::water_needs;

// TDEE adjustment per goal.
const LOSE_FACTOR: f64 = 0.85;
const GAIN_FACTOR: f64 = 1.15;

const PROTEIN_G_PER_KG: f64 = 1.6;
const FAT_CALORIE_SHARE: f64 = 0.30;
// 5%-of-calories sugar ceiling, stricter than the 10% WHO limit.
const SUGAR_CALORIE_SHARE: f64 = 0.05;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

// Fat subtype split; the three shares sum to 1.0 by construction.
const SATURATED_SHARE: f64 = 0.33;
const UNSATURATED_SHARE: f64 = 0.50;
const POLYUNSATURATED_SHARE: f64 = 0.17;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Personalized daily nutrient targets for a stored profile.
pub fn recommend(profile: &UserProfile) -> NutrientVector {
    recommend_resolved(profile.resolved())
}

/// Targets for the documented fallback profile (70 kg / 170 cm / 30 y /
/// male / PAL 1.5 / maintain). Identical to calling [`recommend`] on an
/// empty profile.
pub fn default_recommendations() -> NutrientVector {
    recommend_resolved(ResolvedProfile::default())
}

fn recommend_resolved(profile: ResolvedProfile) -> NutrientVector {
    let age = profile.age as f64;
    let male = profile.gender == Gender::Male;

    // Mifflin-St Jeor; female and other share the female offset.
    let bmr = if male {
        10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * age + 5.0
    } else {
        10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * age - 161.0
    };
    let tdee = bmr
        * profile.activity_level
        * match profile.goal {
            Goal::Lose => LOSE_FACTOR,
            Goal::Gain => GAIN_FACTOR,
            Goal::Maintain => 1.0,
        };

    let protein = profile.weight_kg * PROTEIN_G_PER_KG;
    let fat = tdee * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    // Residual-calorie method; negative carbs for pathological profiles are
    // accepted as-is, sanity-checking extremes is the caller's concern.
    let carbs = (tdee - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT) / KCAL_PER_G_CARB;

    let mut rec = NutrientVector::zero();
    rec.calories = tdee.round();
    rec.protein = round1(protein);
    rec.fat = round1(fat);
    rec.carbs = round1(carbs);
    // Split computed from the unrounded fat total, rounded once at the end.
    rec.saturated_fat = round1(fat * SATURATED_SHARE);
    rec.unsaturated_fat = round1(fat * UNSATURATED_SHARE);
    rec.polyunsaturated_fat = round1(fat * POLYUNSATURATED_SHARE);

    // Gender-tiered micronutrients.
    rec.iron = if male { 10.0 } else { 18.0 };
    rec.vitamin_a = if male { 900.0 } else { 700.0 };
    rec.vitamin_k = if male { 75.0 } else { 60.0 };

    // Age-tiered, stepping at 50 and 70 (b12 steps once at 50).
    rec.vitamin_d = if profile.age > 70 {
        25.0
    } else if profile.age > 50 {
        20.0
    } else {
        15.0
    };
    rec.calcium = if profile.age > 70 {
        1200.0
    } else if profile.age > 50 {
        1000.0
    } else {
        800.0
    };
    rec.vitamin_b12 = if profile.age > 50 { 4.0 } else { 2.5 };
    rec.fiber = if profile.age > 50 { 30.0 } else { 25.0 };

    // Activity-tiered minerals.
    let active = profile.activity_level > 1.6;
    rec.magnesium = if active { 400.0 } else { 375.0 };
    rec.potassium = if active { 4000.0 } else { 3500.0 };
    rec.zinc = if active { 12.0 } else { 10.0 };

    // Energy-scaled B-vitamins, floor-clamped at the population baseline.
    rec.thiamine = round1((tdee * 0.0004).max(1.1));
    rec.riboflavin = round1((tdee * 0.0006).max(1.4));
    rec.niacin = round1((tdee * 0.0066).max(16.0));
    rec.vitamin_b6 = round1((protein * 0.015).max(1.4));

    rec.water = water_needs(profile.age, profile.gender, profile.activity_level, profile.weight_kg)
        as f64;
    rec.sugar = (tdee * SUGAR_CALORIE_SHARE / KCAL_PER_G_CARB).round();

    // Fixed EU reference values, independent of the profile.
    rec.phosphorus = 700.0;
    rec.sodium = 2300.0;
    rec.chloride = 800.0;
    rec.sulfur = 1000.0;
    rec.iodine = 150.0;
    rec.copper = 1.0;
    rec.chromium = 40.0;
    rec.manganese = 2.0;
    rec.selenium = 55.0;
    rec.fluoride = 3.5;
    rec.molybdenum = 50.0;
    rec.cobalt = 5.0;
    rec.vitamin_c = 80.0;
    rec.vitamin_e = 12.0;

    debug!(
        calories = rec.calories,
        protein = rec.protein,
        water = rec.water,
        "recommendations computed"
    );
    rec
}
