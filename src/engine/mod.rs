//! Diagnostic Engine
//!
//! Deterministic pump health estimation. All math here is pure
//! physics/bookkeeping — one gauge reading in, one diagnostic record out,
//! no state carried between invocations.
//!
//! ## Pipeline (each phase feeds the next)
//! - `electrical::analyze_supply()` — voltage window + phase balance
//! - `hydraulic::estimate()` — power, load, head, flow, efficiency split
//! - `classifier::classify()` — ordered first-match-wins fault rules
//! - `financial::project()` — monthly cost, CO2, recoverable waste

pub mod classifier;
pub mod electrical;
pub mod financial;
pub mod hydraulic;

pub use classifier::{Diagnosis, RuleContext};
pub use financial::FinancialImpact;
pub use hydraulic::HydraulicEstimate;

use tracing::{debug, warn};

use crate::config::{PhysicsSection, PumpConfig};
use crate::error::EngineError;
use crate::types::{AssetConfig, DiagnosticResult, GaugeReading};

/// Voltage readings below this are floored to prevent divide-by-zero (V).
const MIN_VOLTAGE: f64 = 1.0;

/// The diagnostic engine handle
///
/// Configured once per session with the asset constants and physics tuning,
/// then invoked per reading. Holds only plain owned data, so it is `Send +
/// Sync` and safe to share across call sites without coordination.
#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    asset: AssetConfig,
    physics: PhysicsSection,
}

impl DiagnosticEngine {
    /// Configure an engine with default physics tuning.
    pub fn new(asset: AssetConfig) -> Self {
        Self::with_tuning(asset, PhysicsSection::default())
    }

    /// Configure an engine with explicit physics tuning.
    pub fn with_tuning(asset: AssetConfig, physics: PhysicsSection) -> Self {
        Self { asset, physics }
    }

    /// Configure an engine from a loaded deployment config.
    pub fn from_config(config: &PumpConfig) -> Self {
        Self::with_tuning(config.asset_config(), config.physics.clone())
    }

    /// Asset constants this engine was configured with.
    pub fn asset(&self) -> &AssetConfig {
        &self.asset
    }

    /// Run the full diagnostic pipeline for one gauge reading.
    ///
    /// Fails only on non-finite inputs; every finite reading produces a
    /// result, with implausible values clamped to documented fallbacks.
    pub fn diagnose(&self, reading: &GaugeReading) -> Result<DiagnosticResult, EngineError> {
        reading.validate()?;

        // Floor the voltage before anything divides by it
        let voltage = if reading.voltage < MIN_VOLTAGE {
            warn!(
                voltage = reading.voltage,
                floor = MIN_VOLTAGE,
                "Sub-volt reading floored"
            );
            MIN_VOLTAGE
        } else {
            reading.voltage
        };

        // Supply quality and phase balance
        let electrical = electrical::analyze_supply(
            voltage,
            reading.current_l1,
            reading.current_l2,
            reading.current_l3,
        );

        // Layered hydraulic estimation
        let estimate = hydraulic::estimate(
            voltage,
            electrical.avg_current,
            reading.power_factor,
            reading.pressure_bar,
            self.asset.rated_power_kw,
            self.physics.hydraulic_baseline_eff,
        );

        // Fault classification over the derived quantities
        let diagnosis = classifier::classify(&RuleContext {
            electrical,
            load_pct: estimate.load_pct,
            pressure_bar: reading.pressure_bar,
            flow_m3h: estimate.flow_m3h,
            pump_eff_pct: estimate.pump_eff_pct,
        });

        // A dry-running pump moves no fluid; only the reported flow is
        // zeroed — the efficiency split keeps the pre-suppression estimate
        let reported_flow = if diagnosis.code.suppresses_flow() {
            0.0
        } else {
            estimate.flow_m3h
        };

        let impact = financial::project(
            estimate.real_power_kw,
            estimate.hydraulic_power_kw,
            estimate.total_eff_pct,
            diagnosis.severity,
            &self.asset,
            self.physics.hydraulic_baseline_eff,
        );

        debug!(
            status = diagnosis.status,
            severity = %diagnosis.severity,
            load_pct = estimate.load_pct,
            "Diagnosis complete"
        );

        Ok(DiagnosticResult {
            real_power_kw: estimate.real_power_kw,
            load_pct: estimate.load_pct,
            voltage_status: electrical.voltage_status.to_string(),
            imbalance_status: electrical
                .imbalance_status
                .legacy_label(electrical.imbalance_pct),
            imbalance_pct: electrical.imbalance_pct,
            avg_current: electrical.avg_current,
            input_voltage: voltage,
            head_m: estimate.head_m,
            estimated_flow_m3h: reported_flow,
            motor_eff_pct: estimate.motor_eff * 100.0,
            pump_eff_pct: estimate.pump_eff_pct,
            total_eff_pct: estimate.total_eff_pct,
            status: diagnosis.status.to_string(),
            reason: diagnosis.reason,
            severity: diagnosis.severity,
            fault_code: diagnosis.code,
            monthly_cost: impact.monthly_cost,
            monthly_co2_tonnes: impact.monthly_co2_tonnes,
            monthly_savings: impact.monthly_savings,
            currency_symbol: self.asset.currency_symbol.clone(),
        })
    }
}
