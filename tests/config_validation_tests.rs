//! Config Validation Tests
//!
//! Exercises the config validation layer independently from the diagnostic
//! pipeline: typo detection, physical range checks, and file loading.

use std::io::Write;

use pumpsight::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use pumpsight::config::{ConfigError, PumpConfig};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_asset_section_warns_with_suggestion() {
    let toml_str = r#"
[asset]
rated_powr_kw = 30.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("rated_powr_kw"));
    assert!(
        warnings[0].suggestion.is_some(),
        "Should suggest a correction"
    );
    assert!(
        warnings[0]
            .suggestion
            .as_ref()
            .unwrap()
            .contains("rated_power_kw"),
        "Should suggest the correct spelling"
    );
}

#[test]
fn typo_in_station_section_warns() {
    let toml_str = r#"
[station]
naem = "BOREHOLE-7"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].field.contains("naem"));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("station.name"));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[station]
name = "BOREHOLE-7"
site = "Mwanza Scheme"
operator = "C. Mwise"

[asset]
rated_power_kw = 30.0
power_factor = 0.85

[tariff]
unit_cost_per_kwh = 280.0
currency_symbol = "Tsh"
co2_factor_kg_per_kwh = 0.4

[physics]
hydraulic_baseline_eff = 0.60
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(
        warnings.is_empty(),
        "Valid config should produce 0 warnings, got: {:?}",
        warnings.iter().map(|w| &w.field).collect::<Vec<_>>()
    );
}

#[test]
fn unknown_section_warns() {
    let toml_str = r#"
[nonexistent_section]
some_field = 42
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(
        !warnings.is_empty(),
        "Unknown section should produce at least 1 warning"
    );
    assert!(warnings
        .iter()
        .any(|w| w.field.contains("nonexistent_section")));
}

#[test]
fn suggestion_requires_a_close_match() {
    let known = known_config_keys();
    assert_eq!(
        suggest_correction("asset.rated_powr_kw", &known).as_deref(),
        Some("asset.rated_power_kw")
    );
    assert!(suggest_correction("zzz_nothing_like_any_key_zzz", &known).is_none());
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn default_config_is_clean() {
    let config = PumpConfig::default();
    assert!(config.validate().is_ok());
    let (errors, warnings) = validate_physical_ranges(&config);
    assert!(errors.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn megawatt_scale_rating_is_rejected() {
    let mut config = PumpConfig::default();
    config.asset.rated_power_kw = 50_000.0;
    let result = config.validate();
    assert!(result.is_err());
    if let Err(ConfigError::Validation(errors)) = result {
        assert!(errors.iter().any(|e| e.contains("rated_power_kw")));
    }
}

#[test]
fn suspicious_power_factor_warns_but_loads() {
    let mut config = PumpConfig::default();
    config.asset.power_factor = 0.4;
    // Suspicious, not fatal
    assert!(config.validate().is_ok());
    let (_, warnings) = validate_physical_ranges(&config);
    assert!(warnings.iter().any(|w| w.field.contains("power_factor")));
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn load_from_file_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pump_config.toml");

    let mut config = PumpConfig::default();
    config.station.name = "BOREHOLE-7".to_string();
    config.tariff.unit_cost_per_kwh = 280.0;
    config.tariff.currency_symbol = "Tsh".to_string();
    config.save_to_file(&path).expect("save should work");

    let loaded = PumpConfig::load_from_file(&path).expect("load should work");
    assert_eq!(loaded, config);
}

#[test]
fn load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pump_config.toml");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(
        file,
        r#"
[asset]
rated_power_kw = -5.0
"#
    )
    .expect("write");

    let result = PumpConfig::load_from_file(&path);
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn load_from_file_reports_io_error_for_missing_path() {
    let result = PumpConfig::load_from_file(std::path::Path::new(
        "/definitely/not/a/real/pump_config.toml",
    ));
    assert!(matches!(result, Err(ConfigError::Io(_, _))));
}

#[test]
fn load_from_file_rejects_malformed_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pump_config.toml");
    std::fs::write(&path, "[asset\nrated_power_kw = ").expect("write");

    let result = PumpConfig::load_from_file(&path);
    assert!(matches!(result, Err(ConfigError::Parse(_, _))));
}
