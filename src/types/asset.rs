//! Asset configuration — per-session constants for one pump station

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fallback nameplate rating when the configured value is unusable (kW).
const MIN_RATED_POWER_FALLBACK_KW: f64 = 1.0;

/// Immutable asset constants, set once when the engine is configured
///
/// Covers the motor nameplate and the tariff context used by the financial
/// projection. Read-only after construction; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetConfig {
    /// Nameplate motor rating (kW)
    pub rated_power_kw: f64,
    /// Energy tariff per kWh, in the configured currency
    pub unit_cost: f64,
    /// Currency label for display ("Tsh", "$", ...)
    pub currency_symbol: String,
    /// Grid carbon intensity (kg CO2 per kWh)
    pub co2_factor: f64,
}

impl AssetConfig {
    /// Sanitizing constructor.
    ///
    /// A rated power ≤ 0 would make the load estimate divide by zero, so it
    /// is coerced to 1.0 kW; tariff and CO2 factor are folded to their
    /// absolute values. Each coercion is logged as a warning.
    pub fn new(rated_power_kw: f64, unit_cost: f64, currency_symbol: &str, co2_factor: f64) -> Self {
        let rated = if rated_power_kw > 0.0 {
            rated_power_kw
        } else {
            warn!(
                rated_power_kw,
                fallback = MIN_RATED_POWER_FALLBACK_KW,
                "Non-positive rated power coerced to fallback"
            );
            MIN_RATED_POWER_FALLBACK_KW
        };
        if unit_cost < 0.0 {
            warn!(unit_cost, "Negative unit cost folded to absolute value");
        }
        if co2_factor < 0.0 {
            warn!(co2_factor, "Negative CO2 factor folded to absolute value");
        }
        Self {
            rated_power_kw: rated,
            unit_cost: unit_cost.abs(),
            currency_symbol: currency_symbol.to_string(),
            co2_factor: co2_factor.abs(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            rated_power_kw: 30.0,
            unit_cost: 0.15,
            currency_symbol: "$".to_string(),
            co2_factor: 0.4,
        }
    }
}
