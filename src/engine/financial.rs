//! Financial and environmental projection
//!
//! Converts the instantaneous power draw into a monthly cost, a monthly
//! emissions figure, and a recoverable-waste estimate. The savings figure is
//! a heuristic model for budgeting conversations, not a measured value:
//! either an optimal-draw comparison (when the wire-to-water efficiency is
//! known and poor) or a flat waste fraction for any active fault.

use crate::types::{motor_curve, AssetConfig, Severity};

/// Projection horizon: 24 h × 30 days of continuous duty.
pub const HOURS_PER_MONTH: f64 = 24.0 * 30.0;

/// Wire-to-water efficiency below this triggers the optimal-draw comparison (%).
pub const SAVINGS_EFFICIENCY_CUTOFF_PCT: f64 = 50.0;

/// Assumed energy waste fraction for a system with an active fault.
pub const FAULT_WASTE_FRACTION: f64 = 0.25;

/// Monthly financial and environmental impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialImpact {
    /// Monthly energy cost in the configured currency
    pub monthly_cost: f64,
    /// Monthly emissions (tonnes CO2)
    pub monthly_co2_tonnes: f64,
    /// Estimated recoverable monthly waste
    pub monthly_savings: f64,
}

/// Monthly energy cost for a continuous draw.
pub fn monthly_cost(real_kw: f64, unit_cost: f64) -> f64 {
    real_kw * unit_cost * HOURS_PER_MONTH
}

/// Monthly emissions in tonnes for a continuous draw.
pub fn monthly_co2_tonnes(real_kw: f64, co2_factor: f64) -> f64 {
    (real_kw * co2_factor * HOURS_PER_MONTH) / 1000.0
}

/// Project the monthly impact of running the asset in its current state.
///
/// Savings logic, in order:
/// 1. Wire-to-water efficiency in (0, 50): compare against the hypothetical
///    optimal draw `(hydraulic_kw / baseline) / 0.92` and report the cost
///    difference, floored at 0.
/// 2. Any active fault (severity ≠ NORMAL): flat 25% waste assumption.
/// 3. Otherwise 0.
pub fn project(
    real_kw: f64,
    hydraulic_kw: f64,
    total_eff_pct: f64,
    severity: Severity,
    asset: &AssetConfig,
    baseline_eff: f64,
) -> FinancialImpact {
    let cost = monthly_cost(real_kw, asset.unit_cost);
    let co2 = monthly_co2_tonnes(real_kw, asset.co2_factor);

    let savings = if total_eff_pct > 0.0 && total_eff_pct < SAVINGS_EFFICIENCY_CUTOFF_PCT {
        let optimal_kw = (hydraulic_kw / baseline_eff) / motor_curve::NOMINAL_EFF;
        let optimal_cost = monthly_cost(optimal_kw, asset.unit_cost);
        (cost - optimal_cost).max(0.0)
    } else if severity != Severity::Normal {
        cost * FAULT_WASTE_FRACTION
    } else {
        0.0
    };

    FinancialImpact {
        monthly_cost: cost,
        monthly_co2_tonnes: co2,
        monthly_savings: savings,
    }
}
