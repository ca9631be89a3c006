//! Diagnosis types: Severity, FaultCode, DiagnosticResult

use serde::{Deserialize, Serialize};

/// Severity level of a diagnosis
///
/// Ordered so that `Critical > Warning > Normal`; the savings heuristic and
/// display layers branch on this enum, never on status strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Normal = 0,
    Warning = 1,
    Critical = 2,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Normal => write!(f, "NORMAL"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Typed outcome of the fault classifier
///
/// One variant per classifier rule, in precedence order, plus `Optimal` for
/// the no-fault case. Each code knows its display label, its fixed reason
/// text, and its severity, so every consumer works from the same wording.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FaultCode {
    /// Supply voltage outside the stable window
    GridInstability,
    /// Phase currents critically imbalanced
    PhaseImbalance,
    /// Load current too low — pump spinning in air
    DryRun,
    /// High power with near-zero discharge pressure
    BurstPipe,
    /// High pressure with near-zero flow
    DeadHead,
    /// Motor drawing beyond its service factor
    MotorOverload,
    /// Wet end converting too little shaft power to water power
    PoorEfficiency,
    /// No rule fired
    #[default]
    Optimal,
}

impl FaultCode {
    /// Headline status label for the diagnosis.
    pub fn status_label(self) -> &'static str {
        match self {
            FaultCode::GridInstability => "DANGER: GRID INSTABILITY",
            FaultCode::PhaseImbalance => "DANGER: PHASE IMBALANCE",
            FaultCode::DryRun => "CRITICAL: DRY RUN DETECTED",
            FaultCode::BurstPipe => "CRITICAL: BURST PIPE / ZERO HEAD",
            FaultCode::DeadHead => "WARNING: BLOCKAGE / DEAD-HEAD",
            FaultCode::MotorOverload => "WARNING: MOTOR OVERLOAD",
            FaultCode::PoorEfficiency => "WARNING: POOR EFFICIENCY",
            FaultCode::Optimal => "OPTIMAL",
        }
    }

    /// Fixed reason text for codes whose reason does not depend on the
    /// reading. `GridInstability` reports the voltage status string instead;
    /// the classifier substitutes it.
    pub fn default_reason(self) -> &'static str {
        match self {
            FaultCode::GridInstability => "Grid supply outside stable window.",
            FaultCode::PhaseImbalance => "Motor windings degrading. Check cables.",
            FaultCode::DryRun => "Amperage too low (<30%). Pump likely spinning in air.",
            FaultCode::BurstPipe => "High Power vs. Low Pressure. Massive hydraulic loss.",
            FaultCode::DeadHead => "Pressure exceeding safety limits with zero flow.",
            FaultCode::MotorOverload => "Motor drawing excess current. Thermal risk.",
            FaultCode::PoorEfficiency => {
                "Pump hydraulic efficiency is very low. Possible worn impeller."
            }
            FaultCode::Optimal => "System operating within normal parameters.",
        }
    }

    /// Severity attached to this code.
    pub fn severity(self) -> Severity {
        match self {
            FaultCode::GridInstability
            | FaultCode::PhaseImbalance
            | FaultCode::DryRun
            | FaultCode::BurstPipe => Severity::Critical,
            FaultCode::DeadHead | FaultCode::MotorOverload | FaultCode::PoorEfficiency => {
                Severity::Warning
            }
            FaultCode::Optimal => Severity::Normal,
        }
    }

    /// Whether the reported flow estimate must be zeroed.
    ///
    /// A dry-running pump moves no fluid regardless of what the back-solved
    /// flow formula says.
    pub fn suppresses_flow(self) -> bool {
        matches!(self, FaultCode::DryRun)
    }
}

impl std::fmt::Display for FaultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_label())
    }
}

/// Complete diagnostic record for one gauge reading
///
/// A flat, serializable snapshot: every field is derived from the asset
/// config and the reading, with no hidden state. Field names are stable —
/// report renderers and dashboards consume this record as-is.
///
/// The `monthly_savings` figure is a heuristic financial model (optimal-draw
/// comparison or a flat 25% waste assumption), not a measured value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticResult {
    // === Electrical Health ===
    /// Real electrical input power (kW)
    pub real_power_kw: f64,
    /// Motor load relative to the estimated full-load current (%)
    pub load_pct: f64,
    /// Voltage classification, legacy display string
    pub voltage_status: String,
    /// Phase balance classification, legacy display string
    pub imbalance_status: String,
    /// Worst-phase deviation from the mean (%)
    pub imbalance_pct: f64,
    /// Mean of the three phase currents (A)
    pub avg_current: f64,
    /// Line voltage as read (V)
    pub input_voltage: f64,

    // === Hydraulic Estimate ===
    /// Discharge head (m of water column)
    pub head_m: f64,
    /// Estimated flow (m³/h); forced to 0 on dry run
    pub estimated_flow_m3h: f64,

    // === Efficiency Decoupling ===
    /// Motor efficiency estimate from the load curve (%)
    pub motor_eff_pct: f64,
    /// Wet-end efficiency: hydraulic power over shaft power (%)
    pub pump_eff_pct: f64,
    /// Wire-to-water efficiency: hydraulic power over input power (%)
    pub total_eff_pct: f64,

    // === Diagnosis ===
    /// Headline status label
    pub status: String,
    /// Human-readable reason for the status
    pub reason: String,
    /// Severity of the diagnosis
    pub severity: Severity,
    /// Typed fault code behind the status label
    pub fault_code: FaultCode,

    // === Financial Projection ===
    /// Projected monthly energy cost in the configured currency
    pub monthly_cost: f64,
    /// Projected monthly emissions (tonnes CO2)
    pub monthly_co2_tonnes: f64,
    /// Estimated recoverable monthly waste (heuristic)
    pub monthly_savings: f64,
    /// Currency label for rendering the financial figures
    pub currency_symbol: String,
}

impl DiagnosticResult {
    /// Serialize the record to a JSON string for structured export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
