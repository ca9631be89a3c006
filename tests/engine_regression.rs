//! Engine Regression Tests
//!
//! Exercises the full diagnostic pipeline through the public API: the
//! canonical 30 kW fixture, fault scenarios, rule precedence, idempotence,
//! and data integrity (no NaN, severity consistent with status wording,
//! stable serialized field names).

use pumpsight::{
    AssetConfig, DiagnosticEngine, FaultCode, GaugeReading, Severity,
};

/// The 30 kW Tanzanian borehole station used as the canonical fixture.
fn tsh_engine() -> DiagnosticEngine {
    DiagnosticEngine::new(AssetConfig::new(30.0, 280.0, "Tsh", 0.4))
}

fn diagnose(engine: &DiagnosticEngine, reading: &GaugeReading) -> pumpsight::DiagnosticResult {
    engine
        .diagnose(reading)
        .expect("finite readings must always diagnose")
}

// ============================================================================
// Canonical fixture
// ============================================================================

#[test]
fn canonical_fixture_matches_reference_arithmetic() {
    let engine = tsh_engine();
    let reading = GaugeReading::three_phase(415.0, 55.0, 54.0, 56.0, 4.2);
    let result = diagnose(&engine, &reading);

    assert!((result.real_power_kw - 33.602965).abs() < 1e-6);
    assert!((result.load_pct - 112.00988).abs() < 1e-3);
    assert!((result.imbalance_pct - 1.8181818).abs() < 1e-5);
    assert_eq!(result.voltage_status, "STABLE");
    assert_eq!(result.imbalance_status, "BALANCED");
    assert!((result.head_m - 42.8274).abs() < 1e-6);
    assert!((result.estimated_flow_m3h - 172.759).abs() < 1e-2);
    assert_eq!(result.motor_eff_pct, 89.0);
    assert!((result.pump_eff_pct - 67.41573).abs() < 1e-3);
    assert!((result.total_eff_pct - 60.0).abs() < 1e-9);
    assert_eq!(result.severity, Severity::Warning);
    assert_eq!(result.status, "WARNING: MOTOR OVERLOAD");
    assert!((result.monthly_cost - 6_774_357.744).abs() < 1e-2);
    assert!((result.monthly_co2_tonnes - 9.67765392).abs() < 1e-6);
    assert!((result.monthly_savings - result.monthly_cost * 0.25).abs() < 1e-6);
}

// ============================================================================
// Fault scenarios
// ============================================================================

#[test]
fn dry_run_zeroes_flow_regardless_of_pressure() {
    let engine = tsh_engine();
    for pressure in [0.5, 4.2, 9.5] {
        let reading = GaugeReading::three_phase(415.0, 10.0, 10.0, 10.0, pressure);
        let result = diagnose(&engine, &reading);
        assert!(result.load_pct < 30.0);
        assert_eq!(result.fault_code, FaultCode::DryRun, "pressure {pressure}");
        assert_eq!(result.status, "CRITICAL: DRY RUN DETECTED");
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(
            result.estimated_flow_m3h, 0.0,
            "flow must be exactly 0 at {pressure} bar"
        );
    }
}

#[test]
fn dead_head_detected_on_high_pressure_low_flow() {
    // A 2.2 kW booster drawing 1.2 A against a blocked 9 bar discharge:
    // enough load to rule out dry run, almost no back-solved flow.
    let engine = DiagnosticEngine::new(AssetConfig::new(2.2, 280.0, "Tsh", 0.4));
    let reading = GaugeReading::three_phase(415.0, 1.2, 1.2, 1.2, 9.0);
    let result = diagnose(&engine, &reading);

    assert!(result.load_pct > 30.0 && result.load_pct < 65.0, "load {}", result.load_pct);
    assert!(result.estimated_flow_m3h < 2.0);
    assert_eq!(result.fault_code, FaultCode::DeadHead);
    assert_eq!(result.status, "WARNING: BLOCKAGE / DEAD-HEAD");
    assert_eq!(result.severity, Severity::Warning);
}

#[test]
fn burst_pipe_detected_on_high_load_low_pressure() {
    let engine = tsh_engine();
    let reading = GaugeReading::three_phase(415.0, 50.0, 50.0, 50.0, 1.0);
    let result = diagnose(&engine, &reading);
    assert!(result.load_pct > 65.0);
    assert_eq!(result.fault_code, FaultCode::BurstPipe);
    assert_eq!(result.severity, Severity::Critical);
}

#[test]
fn surge_classified_as_grid_instability() {
    let engine = tsh_engine();
    let reading = GaugeReading::three_phase(470.0, 40.0, 40.0, 40.0, 4.0);
    let result = diagnose(&engine, &reading);
    assert_eq!(result.fault_code, FaultCode::GridInstability);
    assert_eq!(result.status, "DANGER: GRID INSTABILITY");
    assert_eq!(result.reason, "CRITICAL: SURGE (Insulation Risk)");
}

#[test]
fn critical_imbalance_classified_as_phase_fault() {
    let engine = tsh_engine();
    // avg 50 A, worst phase 10 A off → 20% imbalance
    let reading = GaugeReading::three_phase(415.0, 60.0, 40.0, 50.0, 4.0);
    let result = diagnose(&engine, &reading);
    assert_eq!(result.fault_code, FaultCode::PhaseImbalance);
    assert!(result.imbalance_status.starts_with("CRITICAL:"));
    assert!(result.imbalance_status.contains("20.0%"));
}

// ============================================================================
// Rule precedence
// ============================================================================

#[test]
fn dry_run_takes_precedence_over_dead_head() {
    // Low current against a blocked 9 bar discharge satisfies both the
    // dry-run and dead-head predicates; dry run must win.
    let engine = tsh_engine();
    let reading = GaugeReading::three_phase(415.0, 1.0, 1.0, 1.0, 9.0);
    let result = diagnose(&engine, &reading);
    assert!(result.load_pct < 30.0);
    assert_eq!(result.fault_code, FaultCode::DryRun);
    assert_eq!(result.estimated_flow_m3h, 0.0);
}

#[test]
fn burst_pipe_takes_precedence_over_overload() {
    // 55 A on a 30 kW motor is both > 65% and > 105% load; with 1 bar of
    // pressure the burst-pipe rule must fire, not the overload rule.
    let engine = tsh_engine();
    let reading = GaugeReading::three_phase(415.0, 55.0, 55.0, 55.0, 1.0);
    let result = diagnose(&engine, &reading);
    assert!(result.load_pct > 105.0);
    assert_eq!(result.fault_code, FaultCode::BurstPipe);
}

#[test]
fn grid_instability_takes_precedence_over_everything() {
    let engine = tsh_engine();
    // Under-voltage + imbalance + low load + high pressure all at once
    let reading = GaugeReading::three_phase(350.0, 2.0, 1.0, 0.5, 9.0);
    let result = diagnose(&engine, &reading);
    assert_eq!(result.fault_code, FaultCode::GridInstability);
    assert_eq!(result.reason, "CRITICAL: UNDER-VOLTAGE (Overheating Risk)");
}

// ============================================================================
// Boundary behavior
// ============================================================================

#[test]
fn voltage_window_boundaries_are_stable() {
    let engine = tsh_engine();
    for voltage in [370.0, 460.0] {
        let reading = GaugeReading::three_phase(voltage, 40.0, 40.0, 40.0, 4.0);
        let result = diagnose(&engine, &reading);
        assert_eq!(result.voltage_status, "STABLE", "{voltage} V must be stable");
        assert_ne!(result.fault_code, FaultCode::GridInstability);
    }
}

// ============================================================================
// Purity and integrity
// ============================================================================

#[test]
fn diagnose_is_idempotent() {
    let engine = tsh_engine();
    let reading = GaugeReading::three_phase(415.0, 55.0, 54.0, 56.0, 4.2);
    let first = diagnose(&engine, &reading);
    let second = diagnose(&engine, &reading);
    assert_eq!(first, second, "identical inputs must yield identical results");
    assert_eq!(
        first.to_json().expect("result serializes"),
        second.to_json().expect("result serializes"),
    );
}

#[test]
fn single_phase_reading_matches_replicated_three_phase() {
    let engine = tsh_engine();
    let quick = diagnose(&engine, &GaugeReading::single_phase(415.0, 55.0, 4.2));
    let precise = diagnose(
        &engine,
        &GaugeReading::three_phase(415.0, 55.0, 55.0, 55.0, 4.2),
    );
    assert_eq!(quick, precise);
}

#[test]
fn derived_quantities_stay_in_bounds_across_input_grid() {
    let engine = tsh_engine();
    let voltages = [0.0, 200.0, 370.0, 415.0, 460.0, 500.0];
    let currents = [0.0, 1.0, 10.0, 55.0, 120.0];
    let pressures = [0.0, 0.05, 1.5, 4.2, 9.0, 15.0];

    for v in voltages {
        for i in currents {
            for p in pressures {
                let reading = GaugeReading::three_phase(v, i, i, i, p);
                let result = diagnose(&engine, &reading);

                assert!(result.imbalance_pct >= 0.0);
                assert!(
                    (0.0..=99.9).contains(&result.pump_eff_pct),
                    "pump eff {} out of bounds for V={v} I={i} P={p}",
                    result.pump_eff_pct
                );
                for (name, value) in [
                    ("real_power_kw", result.real_power_kw),
                    ("load_pct", result.load_pct),
                    ("head_m", result.head_m),
                    ("estimated_flow_m3h", result.estimated_flow_m3h),
                    ("total_eff_pct", result.total_eff_pct),
                    ("monthly_cost", result.monthly_cost),
                    ("monthly_savings", result.monthly_savings),
                ] {
                    assert!(
                        value.is_finite(),
                        "{name} not finite for V={v} I={i} P={p}"
                    );
                }

                // Status wording and severity must agree
                match result.severity {
                    Severity::Critical => assert!(
                        result.status.starts_with("DANGER") || result.status.starts_with("CRITICAL"),
                        "{}",
                        result.status
                    ),
                    Severity::Warning => {
                        assert!(result.status.starts_with("WARNING"), "{}", result.status);
                    }
                    Severity::Normal => assert_eq!(result.status, "OPTIMAL"),
                }
            }
        }
    }
}

#[test]
fn serialized_record_exposes_stable_field_names() {
    let engine = tsh_engine();
    let reading = GaugeReading::three_phase(415.0, 55.0, 54.0, 56.0, 4.2);
    let result = diagnose(&engine, &reading);

    let value: serde_json::Value =
        serde_json::from_str(&result.to_json().expect("result serializes"))
            .expect("JSON parses back");
    let object = value.as_object().expect("result is a flat object");

    for field in [
        "real_power_kw",
        "load_pct",
        "voltage_status",
        "imbalance_status",
        "imbalance_pct",
        "avg_current",
        "input_voltage",
        "head_m",
        "estimated_flow_m3h",
        "motor_eff_pct",
        "pump_eff_pct",
        "total_eff_pct",
        "status",
        "reason",
        "severity",
        "fault_code",
        "monthly_cost",
        "monthly_co2_tonnes",
        "monthly_savings",
        "currency_symbol",
    ] {
        assert!(object.contains_key(field), "missing field '{field}'");
    }
}

#[test]
fn non_finite_input_fails_before_the_pipeline() {
    let engine = tsh_engine();
    let reading = GaugeReading {
        pressure_bar: f64::NAN,
        ..GaugeReading::three_phase(415.0, 55.0, 54.0, 56.0, 4.2)
    };
    let err = engine.diagnose(&reading);
    assert!(err.is_err(), "NaN pressure must be rejected");
}
