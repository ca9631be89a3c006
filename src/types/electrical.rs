//! Supply-quality classification types
//!
//! Severity is carried as a typed field on each status enum; the legacy
//! gauge-panel strings survive only as `Display` output so that rendered
//! reports keep their historical wording. Downstream logic must branch on the
//! enums, never on the strings.

use serde::{Deserialize, Serialize};

use super::Severity;

/// Line voltage classification against the 415 V nominal window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum VoltageStatus {
    /// Within the stable window (370–460 V inclusive)
    #[default]
    Stable,
    /// Below 370 V — sustained under-voltage overheats the windings
    UnderVoltage,
    /// Above 460 V — surge stresses the insulation
    Surge,
}

impl VoltageStatus {
    /// Severity contribution of the supply voltage
    pub fn severity(self) -> Severity {
        match self {
            VoltageStatus::Stable => Severity::Normal,
            VoltageStatus::UnderVoltage | VoltageStatus::Surge => Severity::Critical,
        }
    }
}

impl std::fmt::Display for VoltageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoltageStatus::Stable => write!(f, "STABLE"),
            VoltageStatus::UnderVoltage => write!(f, "CRITICAL: UNDER-VOLTAGE (Overheating Risk)"),
            VoltageStatus::Surge => write!(f, "CRITICAL: SURGE (Insulation Risk)"),
        }
    }
}

/// Phase current imbalance classification (NEMA-style deviation bands)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ImbalanceStatus {
    /// Deviation within 2% of the three-phase mean
    #[default]
    Balanced,
    /// Deviation above 2% — supply or connection degradation
    Warning,
    /// Deviation above 5% — winding failure territory
    Critical,
}

impl ImbalanceStatus {
    /// Severity contribution of the phase balance
    pub fn severity(self) -> Severity {
        match self {
            ImbalanceStatus::Balanced => Severity::Normal,
            ImbalanceStatus::Warning => Severity::Warning,
            ImbalanceStatus::Critical => Severity::Critical,
        }
    }

    /// Legacy gauge-panel string, including the measured percentage.
    pub fn legacy_label(self, imbalance_pct: f64) -> String {
        match self {
            ImbalanceStatus::Balanced => "BALANCED".to_string(),
            ImbalanceStatus::Warning => format!("WARNING: {imbalance_pct:.1}% IMBALANCE"),
            ImbalanceStatus::Critical => {
                format!("CRITICAL: {imbalance_pct:.1}% IMBALANCE (Winding Failure)")
            }
        }
    }
}

/// Output of the electrical health analyzer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ElectricalHealth {
    /// Voltage window classification
    pub voltage_status: VoltageStatus,
    /// Phase balance classification
    pub imbalance_status: ImbalanceStatus,
    /// Worst-phase deviation from the mean (%), ≥ 0
    pub imbalance_pct: f64,
    /// Mean of the three phase currents (A)
    pub avg_current: f64,
}
