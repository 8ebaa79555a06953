use tracing::warn;

/// ml per US cup.
const CUP_ML: f64 = 240.0;
/// ml per household glass.
const GLASS_ML: f64 = 250.0;

/// Converts a water intake quantity to milliliters.
///
/// Unknown units are treated as already normalized instead of rejected, so
/// malformed client data degrades a single entry rather than aborting the
/// whole aggregation pass.
pub fn normalize_water(quantity: f64, unit: &str) -> f64 {
    match unit.trim().to_ascii_lowercase().as_str() {
        "ml" => quantity,
        "l" => quantity * 1000.0,
        "cup" => quantity * CUP_ML,
        "glass" => quantity * GLASS_ML,
        other => {
            warn!(unit = other, "unknown water unit, assuming ml");
            quantity
        }
    }
}
