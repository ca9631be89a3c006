//! Frozen diagnostic thresholds and the motor efficiency load curve
//!
//! Every value in this module is part of the engine's external contract:
//! downstream classification, display, and savings logic all key off these
//! exact cutoffs, so they are constants rather than deployment config. The
//! only tunable physical parameter (the hydraulic baseline efficiency) lives
//! in `config::PhysicsSection` instead.

/// Supply-quality classification thresholds
pub mod electrical_thresholds {
    /// Nominal line voltage for a 3-phase asynchronous motor (V).
    /// The stable window below spans roughly ±11% around this value.
    pub const NOMINAL_VOLTAGE: f64 = 415.0;
    /// Voltage below this is classified under-voltage (V).
    /// Strict `<`: 370.0 exactly is still STABLE.
    pub const UNDER_VOLTAGE_CUTOFF: f64 = 370.0;
    /// Voltage above this is classified as a surge (V).
    /// Strict `>`: 460.0 exactly is still STABLE.
    pub const SURGE_CUTOFF: f64 = 460.0;
    /// Phase imbalance above this warrants a warning (%).
    pub const IMBALANCE_WARNING_PCT: f64 = 2.0;
    /// Phase imbalance above this indicates degrading windings (%).
    pub const IMBALANCE_CRITICAL_PCT: f64 = 5.0;
}

/// Fault classifier cutoffs, in rule order
pub mod fault_thresholds {
    /// Motor load below this indicates the pump is spinning in air (%).
    pub const DRY_RUN_LOAD_PCT: f64 = 30.0;
    /// Motor load above this combined with low pressure indicates a burst line (%).
    pub const BURST_PIPE_LOAD_PCT: f64 = 65.0;
    /// Discharge pressure below this counts as zero head for burst detection (bar).
    pub const BURST_PIPE_PRESSURE_BAR: f64 = 1.5;
    /// Discharge pressure above this with no flow indicates a dead-head (bar).
    pub const DEAD_HEAD_PRESSURE_BAR: f64 = 8.0;
    /// Estimated flow below this counts as "no flow" for dead-head detection (m³/h).
    pub const DEAD_HEAD_FLOW_M3H: f64 = 2.0;
    /// Motor load above this is an overload (%).
    pub const OVERLOAD_LOAD_PCT: f64 = 105.0;
    /// Pump efficiency below this warrants a wear warning (%).
    pub const POOR_EFFICIENCY_PCT: f64 = 45.0;
}

/// IEC-style motor efficiency estimates by load band
///
/// Asynchronous motors drop efficiency significantly below 50% load and
/// slightly above 110%; between the two they sit near their nameplate peak.
/// These are curve estimates, not measurements.
pub mod motor_curve {
    /// Load below this uses the low-load efficiency (%).
    pub const LOW_LOAD_CUTOFF_PCT: f64 = 50.0;
    /// Load above this uses the overload efficiency (%).
    pub const HIGH_LOAD_CUTOFF_PCT: f64 = 110.0;
    /// Efficiency fraction below the low-load cutoff.
    pub const LOW_LOAD_EFF: f64 = 0.85;
    /// Efficiency fraction above the high-load cutoff.
    pub const HIGH_LOAD_EFF: f64 = 0.89;
    /// Efficiency fraction in the nominal band; also the ceiling assumed by
    /// the savings projection.
    pub const NOMINAL_EFF: f64 = 0.92;
}
