//! Gauge reading types

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Assumed power factor when none is measured at the panel.
pub const DEFAULT_POWER_FACTOR: f64 = 0.85;

/// One set of field-gauge measurements for a pump station
///
/// Collected from a clamp meter and the discharge pressure gauge. All values
/// are instantaneous spot readings; the engine treats each reading as an
/// independent snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GaugeReading {
    /// Line voltage (V)
    pub voltage: f64,
    /// Phase L1 current (A)
    pub current_l1: f64,
    /// Phase L2 current (A)
    pub current_l2: f64,
    /// Phase L3 current (A)
    pub current_l3: f64,
    /// Discharge gauge pressure (bar)
    pub pressure_bar: f64,
    /// Power factor — assumed, not measured
    #[serde(default = "default_power_factor")]
    pub power_factor: f64,
}

fn default_power_factor() -> f64 {
    DEFAULT_POWER_FACTOR
}

impl Default for GaugeReading {
    fn default() -> Self {
        Self {
            voltage: 0.0,
            current_l1: 0.0,
            current_l2: 0.0,
            current_l3: 0.0,
            pressure_bar: 0.0,
            power_factor: DEFAULT_POWER_FACTOR,
        }
    }
}

impl GaugeReading {
    /// Precision mode: one clamp reading per phase.
    pub fn three_phase(voltage: f64, l1: f64, l2: f64, l3: f64, pressure_bar: f64) -> Self {
        Self {
            voltage,
            current_l1: l1,
            current_l2: l2,
            current_l3: l3,
            pressure_bar,
            power_factor: DEFAULT_POWER_FACTOR,
        }
    }

    /// Quick-estimate mode: a single clamp reading replicated across all
    /// three slots. Phase imbalance reads as zero in this mode.
    pub fn single_phase(voltage: f64, amps: f64, pressure_bar: f64) -> Self {
        Self::three_phase(voltage, amps, amps, amps, pressure_bar)
    }

    /// Mean of the three phase currents (A)
    pub fn avg_current(&self) -> f64 {
        (self.current_l1 + self.current_l2 + self.current_l3) / 3.0
    }

    /// Reject non-finite values before they reach the numeric pipeline.
    ///
    /// Finite-but-implausible values (negative current, zero voltage) are the
    /// pipeline's job to clamp; NaN and infinity are the only inputs with no
    /// defined fallback.
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields: [(&'static str, f64); 6] = [
            ("voltage", self.voltage),
            ("current_l1", self.current_l1),
            ("current_l2", self.current_l2),
            ("current_l3", self.current_l3),
            ("pressure_bar", self.pressure_bar),
            ("power_factor", self.power_factor),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(EngineError::InvalidInput { field, value });
            }
        }
        Ok(())
    }
}
