//! Hydraulic estimation and efficiency decoupling
//!
//! The layered physical model at the heart of the engine. None of these
//! quantities is independently measured: each step feeds the next, starting
//! from panel electrical readings and ending at a wire-to-water efficiency
//! split between the motor and the pump wet end.
//!
//! Every division carries an explicit guard that substitutes a defined 0
//! fallback for a zero or near-zero denominator — the engine never emits
//! NaN or infinity.

use crate::types::motor_curve;

/// √3, as carried on field calculation sheets.
pub const SQRT_3: f64 = 1.732;

/// Meters of water column per bar of gauge pressure.
pub const BAR_TO_METERS_HEAD: f64 = 10.197;

/// Gravitational acceleration (m/s²) for hydraulic power.
pub const GRAVITY: f64 = 9.81;

/// Shaft power below this is treated as "pump not running" (kW).
pub const MIN_SHAFT_POWER_KW: f64 = 0.1;

/// Pump efficiency is clamped here; anything above is estimation error (%).
pub const MAX_PUMP_EFF_PCT: f64 = 99.9;

/// Real electrical input power for a 3-phase motor.
///
/// P = V × I_avg × PF × √3 / 1000   (kW)
pub fn real_power_kw(voltage: f64, avg_current: f64, power_factor: f64) -> f64 {
    (voltage * avg_current * power_factor * SQRT_3) / 1000.0
}

/// Estimated full-load current from the nameplate rating.
///
/// I_rated = (rated_kW × 1000) / (V × √3 × PF)   (A)
///
/// Returns 0 when the electrical denominator is non-positive; the load
/// estimate then reads 0 rather than propagating an undefined value.
pub fn rated_current_estimate(rated_kw: f64, voltage: f64, power_factor: f64) -> f64 {
    let denominator = voltage * SQRT_3 * power_factor;
    if denominator <= 0.0 {
        return 0.0;
    }
    (rated_kw * 1000.0) / denominator
}

/// Motor load as a percentage of the estimated full-load current.
///
/// Returns 0 if the rated-current estimate is non-positive.
pub fn motor_load_pct(avg_current: f64, rated_current: f64) -> f64 {
    if rated_current <= 0.0 {
        return 0.0;
    }
    (avg_current / rated_current) * 100.0
}

/// Convert discharge gauge pressure to head.
///
/// head_m = pressure_bar × 10.197
pub fn pressure_to_head_m(pressure_bar: f64) -> f64 {
    pressure_bar * BAR_TO_METERS_HEAD
}

/// Back-solve flow from input power assuming a baseline overall efficiency.
///
/// flow = kW × B × 3600 / (head × g)   (m³/h)
///
/// The baseline `B` (default 0.60) is only used to back-solve flow; it is
/// never reported as an efficiency figure. Returns 0 below 1 m of head
/// (gauge noise territory) or for non-positive input power.
pub fn estimate_flow_m3h(real_kw: f64, head_m: f64, baseline_eff: f64) -> f64 {
    if head_m <= 1.0 || real_kw <= 0.0 {
        return 0.0;
    }
    (real_kw * baseline_eff * 3600.0) / (head_m * GRAVITY)
}

/// Motor efficiency estimate from the IEC-style load curve.
///
/// Asynchronous motors lose efficiency well below 50% load and slightly past
/// 110%; in between they run near nameplate peak.
pub fn motor_efficiency_from_load(load_pct: f64) -> f64 {
    if load_pct < motor_curve::LOW_LOAD_CUTOFF_PCT {
        motor_curve::LOW_LOAD_EFF
    } else if load_pct > motor_curve::HIGH_LOAD_CUTOFF_PCT {
        motor_curve::HIGH_LOAD_EFF
    } else {
        motor_curve::NOMINAL_EFF
    }
}

/// Hydraulic (water) power delivered by the pump.
///
/// P_hyd = flow × head × g / 3600   (kW)
pub fn hydraulic_power_kw(flow_m3h: f64, head_m: f64) -> f64 {
    (flow_m3h * head_m * GRAVITY) / 3600.0
}

/// Wet-end (pump-only) efficiency.
///
/// Computed only when shaft power clears the 0.1 kW floor, and clamped to
/// 99.9% — beyond that the layered estimates have outrun their accuracy.
pub fn pump_efficiency_pct(hydraulic_kw: f64, shaft_kw: f64) -> f64 {
    if shaft_kw <= MIN_SHAFT_POWER_KW {
        return 0.0;
    }
    ((hydraulic_kw / shaft_kw) * 100.0).min(MAX_PUMP_EFF_PCT)
}

/// Wire-to-water efficiency.
///
/// Returns 0 for non-positive input power.
pub fn total_efficiency_pct(hydraulic_kw: f64, real_kw: f64) -> f64 {
    if real_kw <= 0.0 {
        return 0.0;
    }
    (hydraulic_kw / real_kw) * 100.0
}

/// All hydraulic and efficiency quantities for one reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicEstimate {
    /// Real electrical input power (kW)
    pub real_power_kw: f64,
    /// Motor load (%)
    pub load_pct: f64,
    /// Discharge head (m)
    pub head_m: f64,
    /// Back-solved flow (m³/h), before any fault suppression
    pub flow_m3h: f64,
    /// Motor efficiency fraction from the load curve
    pub motor_eff: f64,
    /// Power reaching the pump shaft (kW)
    pub shaft_power_kw: f64,
    /// Water power out of the wet end (kW)
    pub hydraulic_power_kw: f64,
    /// Wet-end efficiency (%)
    pub pump_eff_pct: f64,
    /// Wire-to-water efficiency (%)
    pub total_eff_pct: f64,
}

/// Run the full estimation ladder for one reading.
///
/// Steps, in dependency order: input power → load → head → flow → motor
/// efficiency → shaft power → hydraulic power → pump efficiency →
/// wire-to-water efficiency.
pub fn estimate(
    voltage: f64,
    avg_current: f64,
    power_factor: f64,
    pressure_bar: f64,
    rated_kw: f64,
    baseline_eff: f64,
) -> HydraulicEstimate {
    let real_kw = real_power_kw(voltage, avg_current, power_factor);
    let rated_current = rated_current_estimate(rated_kw, voltage, power_factor);
    let load_pct = motor_load_pct(avg_current, rated_current);

    let head_m = pressure_to_head_m(pressure_bar);
    let flow_m3h = estimate_flow_m3h(real_kw, head_m, baseline_eff);

    let motor_eff = motor_efficiency_from_load(load_pct);
    let shaft_power_kw = real_kw * motor_eff;
    let hydraulic_kw = hydraulic_power_kw(flow_m3h, head_m);

    HydraulicEstimate {
        real_power_kw: real_kw,
        load_pct,
        head_m,
        flow_m3h,
        motor_eff,
        shaft_power_kw,
        hydraulic_power_kw: hydraulic_kw,
        pump_eff_pct: pump_efficiency_pct(hydraulic_kw, shaft_power_kw),
        total_eff_pct: total_efficiency_pct(hydraulic_kw, real_kw),
    }
}
