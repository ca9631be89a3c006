//! Pump station configuration — deployment constants as operator-tunable TOML
//!
//! Each struct implements `Default` with values matching the built-in
//! constants, ensuring zero-change behavior when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::types::AssetConfig;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a pump station deployment.
///
/// Load with `PumpConfig::load()` which searches:
/// 1. `$PUMPSIGHT_CONFIG` env var
/// 2. `./pump_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PumpConfig {
    /// Station identification
    #[serde(default)]
    pub station: StationInfo,

    /// Motor nameplate data
    #[serde(default)]
    pub asset: AssetSection,

    /// Energy tariff and carbon context
    #[serde(default)]
    pub tariff: TariffSection,

    /// Physics tuning
    #[serde(default)]
    pub physics: PhysicsSection,
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            station: StationInfo::default(),
            asset: AssetSection::default(),
            tariff: TariffSection::default(),
            physics: PhysicsSection::default(),
        }
    }
}

impl PumpConfig {
    /// Load configuration using the standard search order:
    /// 1. `$PUMPSIGHT_CONFIG` environment variable
    /// 2. `./pump_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("PUMPSIGHT_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), station = %config.station.name, "Loaded pump config from PUMPSIGHT_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from PUMPSIGHT_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "PUMPSIGHT_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./pump_config.toml
        let local = PathBuf::from("pump_config.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(station = %config.station.name, "Loaded pump config from ./pump_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./pump_config.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No pump_config.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        // Unknown keys first (warnings only, never fatal)
        for w in super::validation::validate_unknown_keys(&contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Pump config saved");
        Ok(())
    }

    /// Build the engine's per-session asset constants from this config.
    ///
    /// Goes through the sanitizing `AssetConfig` constructor, so a config
    /// that slipped past validation still cannot destabilize the pipeline.
    pub fn asset_config(&self) -> AssetConfig {
        AssetConfig::new(
            self.asset.rated_power_kw,
            self.tariff.unit_cost_per_kwh,
            &self.tariff.currency_symbol,
            self.tariff.co2_factor_kg_per_kwh,
        )
    }

    /// Validate the config for internal consistency.
    ///
    /// Rules:
    /// - Rated power must be > 0
    /// - Power factor and hydraulic baseline must be in (0, 1]
    /// - Tariff and CO2 factor must be ≥ 0
    /// - All values must be finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.asset.rated_power_kw <= 0.0 {
            errors.push(format!(
                "asset.rated_power_kw ({:.2}) must be > 0",
                self.asset.rated_power_kw
            ));
        }
        if self.asset.power_factor <= 0.0 || self.asset.power_factor > 1.0 {
            errors.push(format!(
                "asset.power_factor ({:.2}) must be in (0, 1]",
                self.asset.power_factor
            ));
        }
        if self.tariff.unit_cost_per_kwh < 0.0 {
            errors.push(format!(
                "tariff.unit_cost_per_kwh ({:.2}) must be >= 0",
                self.tariff.unit_cost_per_kwh
            ));
        }
        if self.tariff.co2_factor_kg_per_kwh < 0.0 {
            errors.push(format!(
                "tariff.co2_factor_kg_per_kwh ({:.2}) must be >= 0",
                self.tariff.co2_factor_kg_per_kwh
            ));
        }
        if self.physics.hydraulic_baseline_eff <= 0.0 || self.physics.hydraulic_baseline_eff > 1.0 {
            errors.push(format!(
                "physics.hydraulic_baseline_eff ({:.2}) must be in (0, 1] (used as divisor)",
                self.physics.hydraulic_baseline_eff
            ));
        }

        // Physical range validation
        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        // Reject NaN/Inf in any config value (sweep all f64 fields via serialization)
        if let Ok(ref s) = toml::to_string(self) {
            if s.contains("nan") || s.contains("inf") {
                errors.push(
                    "Config contains NaN or Inf values — all values must be finite numbers"
                        .to_string(),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Station Info
// ============================================================================

/// Identification metadata — not used for logic, but appears in logs and reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationInfo {
    /// Station name / identifier
    #[serde(default = "default_station_name")]
    pub name: String,

    /// Site or scheme the station belongs to
    #[serde(default)]
    pub site: String,

    /// Responsible operator / auditor
    #[serde(default)]
    pub operator: String,
}

fn default_station_name() -> String {
    "PUMP-001".to_string()
}

impl Default for StationInfo {
    fn default() -> Self {
        Self {
            name: default_station_name(),
            site: String::new(),
            operator: String::new(),
        }
    }
}

// ============================================================================
// Asset Section
// ============================================================================

/// Motor nameplate data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetSection {
    /// Nameplate motor rating (kW).
    #[serde(default = "default_rated_power")]
    pub rated_power_kw: f64,

    /// Assumed power factor for panels without a PF meter.
    /// Passed into gauge readings by the wiring layer.
    #[serde(default = "default_power_factor")]
    pub power_factor: f64,
}

fn default_rated_power() -> f64 {
    30.0
}
fn default_power_factor() -> f64 {
    0.85
}

impl Default for AssetSection {
    fn default() -> Self {
        Self {
            rated_power_kw: default_rated_power(),
            power_factor: default_power_factor(),
        }
    }
}

// ============================================================================
// Tariff Section
// ============================================================================

/// Energy tariff and carbon context for the financial projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TariffSection {
    /// Energy cost per kWh in the configured currency.
    #[serde(default = "default_unit_cost")]
    pub unit_cost_per_kwh: f64,

    /// Display-only currency label ("Tsh", "Ksh", "$", "€").
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Grid carbon intensity (kg CO2 per kWh).
    #[serde(default = "default_co2_factor")]
    pub co2_factor_kg_per_kwh: f64,
}

fn default_unit_cost() -> f64 {
    0.15
}
fn default_currency() -> String {
    "$".to_string()
}
fn default_co2_factor() -> f64 {
    0.4
}

impl Default for TariffSection {
    fn default() -> Self {
        Self {
            unit_cost_per_kwh: default_unit_cost(),
            currency_symbol: default_currency(),
            co2_factor_kg_per_kwh: default_co2_factor(),
        }
    }
}

// ============================================================================
// Physics Section
// ============================================================================

/// Physics tuning constants.
///
/// The hydraulic baseline is an empirical approximation of overall
/// wire-to-water efficiency for a healthy centrifugal installation. It is
/// asset-dependent: only change it if you have commissioning data for the
/// specific pump.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhysicsSection {
    /// Baseline overall efficiency used to back-solve flow from input power
    /// and to anchor the optimal-draw savings comparison.
    #[serde(default = "default_hydraulic_baseline")]
    pub hydraulic_baseline_eff: f64,
}

fn default_hydraulic_baseline() -> f64 {
    0.60
}

impl Default for PhysicsSection {
    fn default() -> Self {
        Self {
            hydraulic_baseline_eff: default_hydraulic_baseline(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
