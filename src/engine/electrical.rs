//! Electrical health analysis
//!
//! Diagnoses grid quality and phase balance from the panel readings:
//! voltage window classification and NEMA-style worst-phase deviation.

use crate::types::electrical_thresholds as thresholds;
use crate::types::{ElectricalHealth, ImbalanceStatus, VoltageStatus};

/// Classify line voltage against the 415 V nominal window.
///
/// Both cutoffs are strict, so 370.0 V and 460.0 V exactly are STABLE.
pub fn voltage_status(voltage: f64) -> VoltageStatus {
    if voltage < thresholds::UNDER_VOLTAGE_CUTOFF {
        VoltageStatus::UnderVoltage
    } else if voltage > thresholds::SURGE_CUTOFF {
        VoltageStatus::Surge
    } else {
        VoltageStatus::Stable
    }
}

/// Worst-phase deviation from the three-phase mean, as a percentage.
///
/// imbalance% = max(|Iₙ − avg|) / avg × 100
///
/// Returns `(imbalance_pct, avg_current)`. A non-positive average (pump off,
/// clamp not attached) yields 0% rather than a division by zero.
pub fn phase_imbalance(l1: f64, l2: f64, l3: f64) -> (f64, f64) {
    let avg = (l1 + l2 + l3) / 3.0;
    if avg <= 0.0 {
        return (0.0, avg);
    }
    let max_deviation = (l1 - avg)
        .abs()
        .max((l2 - avg).abs())
        .max((l3 - avg).abs());
    ((max_deviation / avg) * 100.0, avg)
}

/// Band the imbalance percentage.
///
/// Above 5% the deviation indicates degrading windings; above 2% it warrants
/// watching. Both bounds strict, matching the legacy panel behavior.
pub fn imbalance_status(imbalance_pct: f64) -> ImbalanceStatus {
    if imbalance_pct > thresholds::IMBALANCE_CRITICAL_PCT {
        ImbalanceStatus::Critical
    } else if imbalance_pct > thresholds::IMBALANCE_WARNING_PCT {
        ImbalanceStatus::Warning
    } else {
        ImbalanceStatus::Balanced
    }
}

/// Full supply analysis: voltage window + phase balance.
pub fn analyze_supply(voltage: f64, l1: f64, l2: f64, l3: f64) -> ElectricalHealth {
    let (imbalance_pct, avg_current) = phase_imbalance(l1, l2, l3);
    ElectricalHealth {
        voltage_status: voltage_status(voltage),
        imbalance_status: imbalance_status(imbalance_pct),
        imbalance_pct,
        avg_current,
    }
}
