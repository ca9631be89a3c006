//! Fault classification — ordered decision list, first match wins
//!
//! The rule table below is the single source of truth for fault precedence.
//! Rules are evaluated top to bottom against one reading's derived
//! quantities; the first predicate that fires decides the diagnosis and
//! suppresses everything after it. Grid problems outrank phase problems,
//! which outrank hydraulic faults, which outrank efficiency advisories.

use crate::types::fault_thresholds as thresholds;
use crate::types::{ElectricalHealth, FaultCode, Severity};

/// Derived quantities the rule predicates evaluate against
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    /// Supply analysis for the reading
    pub electrical: ElectricalHealth,
    /// Motor load (%)
    pub load_pct: f64,
    /// Discharge gauge pressure (bar)
    pub pressure_bar: f64,
    /// Estimated flow before suppression (m³/h)
    pub flow_m3h: f64,
    /// Wet-end efficiency (%)
    pub pump_eff_pct: f64,
}

/// One predicate → outcome pair in the decision list
struct FaultRule {
    code: FaultCode,
    applies: fn(&RuleContext) -> bool,
}

/// The decision list, in precedence order.
const RULES: &[FaultRule] = &[
    FaultRule {
        code: FaultCode::GridInstability,
        applies: |ctx| ctx.electrical.voltage_status.severity() == Severity::Critical,
    },
    FaultRule {
        code: FaultCode::PhaseImbalance,
        applies: |ctx| ctx.electrical.imbalance_status.severity() == Severity::Critical,
    },
    FaultRule {
        code: FaultCode::DryRun,
        applies: |ctx| ctx.load_pct < thresholds::DRY_RUN_LOAD_PCT,
    },
    FaultRule {
        code: FaultCode::BurstPipe,
        applies: |ctx| {
            ctx.load_pct > thresholds::BURST_PIPE_LOAD_PCT
                && ctx.pressure_bar < thresholds::BURST_PIPE_PRESSURE_BAR
        },
    },
    FaultRule {
        code: FaultCode::DeadHead,
        applies: |ctx| {
            ctx.pressure_bar > thresholds::DEAD_HEAD_PRESSURE_BAR
                && ctx.flow_m3h < thresholds::DEAD_HEAD_FLOW_M3H
        },
    },
    FaultRule {
        code: FaultCode::MotorOverload,
        applies: |ctx| ctx.load_pct > thresholds::OVERLOAD_LOAD_PCT,
    },
    FaultRule {
        code: FaultCode::PoorEfficiency,
        applies: |ctx| ctx.pump_eff_pct < thresholds::POOR_EFFICIENCY_PCT,
    },
];

/// Outcome of the classifier for one reading
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    /// Typed fault code
    pub code: FaultCode,
    /// Headline status label
    pub status: &'static str,
    /// Human-readable reason
    pub reason: String,
    /// Severity of the diagnosis
    pub severity: Severity,
}

/// Classify one reading's derived quantities.
///
/// Returns the first matching rule's outcome, or `Optimal` when nothing
/// fires. The grid-instability reason carries the voltage status text so the
/// report names the actual supply problem.
pub fn classify(ctx: &RuleContext) -> Diagnosis {
    let code = RULES
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map_or(FaultCode::Optimal, |rule| rule.code);

    let reason = match code {
        FaultCode::GridInstability => ctx.electrical.voltage_status.to_string(),
        _ => code.default_reason().to_string(),
    };

    Diagnosis {
        code,
        status: code.status_label(),
        reason,
        severity: code.severity(),
    }
}
