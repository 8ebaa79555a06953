use crate::profile::Gender;

const MIN_WATER_ML: f64 = 1500.0;
const MAX_WATER_ML: f64 = 4000.0;

/// ml surcharge per kg of body weight above the adult reference of 70 kg.
const SURCHARGE_ML_PER_KG: f64 = 35.0;

/// Daily water target in milliliters, clamped to [1500, 4000].
///
/// Base intake follows the EFSA adequate-intake brackets (gender split from
/// age 9; `Other` follows the female brackets, matching the BMR pairing),
/// scaled by activity and topped up for heavier adults.
pub fn water_needs(age: u32, gender: Gender, activity_level: f64, weight_kg: f64) -> i64 {
    let male = gender == Gender::Male;
    let base: f64 = match age {
        0 => 800.0,
        1..=3 => 1300.0,
        4..=8 => 1600.0,
        9..=13 => {
            if male {
                2100.0
            } else {
                1900.0
            }
        }
        14..=18 => {
            if male {
                2500.0
            } else {
                2000.0
            }
        }
        19..=50 => {
            if male {
                2500.0
            } else {
                2000.0
            }
        }
        51..=70 => {
            if male {
                2300.0
            } else {
                1900.0
            }
        }
        _ => {
            if male {
                2100.0
            } else {
                1800.0
            }
        }
    };

    // First matching threshold wins, highest first; the thresholds overlap.
    let multiplier = if activity_level >= 2.0 {
        1.4
    } else if activity_level >= 1.8 {
        1.3
    } else if activity_level >= 1.6 {
        1.2
    } else if activity_level >= 1.4 {
        1.1
    } else {
        1.0
    };

    let mut target = base * multiplier;
    // Weight surcharge applies after the multiplier, not before.
    if age >= 18 && weight_kg > 70.0 {
        target += (weight_kg - 70.0) * SURCHARGE_ML_PER_KG;
    }

    target.round().clamp(MIN_WATER_ML, MAX_WATER_ML) as i64
}
