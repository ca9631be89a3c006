//! Deployment Configuration Module
//!
//! Per-station configuration loaded from TOML files: asset nameplate data,
//! tariff context, and the one tunable physics parameter (the hydraulic
//! baseline efficiency used to back-solve flow).
//!
//! ## Loading Order
//!
//! 1. `PUMPSIGHT_CONFIG` environment variable (path to TOML file)
//! 2. `pump_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The frozen diagnostic thresholds (voltage window, imbalance bands, fault
//! cutoffs) are deliberately NOT configurable — they live in
//! `types::thresholds`.
//!
//! ## Usage
//!
//! ```ignore
//! let config = PumpConfig::load();
//! let engine = DiagnosticEngine::from_config(&config);
//! ```

mod pump_config;
pub mod validation;

pub use pump_config::*;
