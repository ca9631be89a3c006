//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for PumpConfig.
///
/// This is maintained manually to match the struct hierarchy in
/// pump_config.rs. Any new field added to PumpConfig must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [station]
        "station",
        "station.name",
        "station.site",
        "station.operator",
        // [asset]
        "asset",
        "asset.rated_power_kw",
        "asset.power_factor",
        // [tariff]
        "tariff",
        "tariff.unit_cost_per_kwh",
        "tariff.currency_symbol",
        "tariff.co2_factor_kg_per_kwh",
        // [physics]
        "physics",
        "physics.hydraulic_baseline_eff",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_len = a.len();
    let b_len = b.len();
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &k in known {
        let dist = levenshtein(unknown, k);
        if dist <= 3 {
            if let Some((_, best_dist)) = best {
                if dist < best_dist {
                    best = Some((k, dist));
                }
            } else {
                best = Some((k, dist));
            }
        }
    }
    best.map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys — it only warns. Existing configs
/// always continue to work.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    let found = walk_toml_keys(&value, "");
    let mut warnings = Vec::new();

    for key in &found {
        if !known.contains(key.as_str()) {
            let suggestion = suggest_correction(key, &known);
            let message = format!("Unknown config key '{key}'");
            warnings.push(ValidationWarning {
                field: key.clone(),
                message,
                suggestion,
            });
        }
    }

    warnings
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed PumpConfig.
///
/// Returns (errors, warnings) — errors are impossible values that must
/// prevent startup; warnings are suspicious but not fatal.
pub fn validate_physical_ranges(
    config: &super::PumpConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Rated power: field pumps run from fractional-kW boreholes to a few MW
    let rated = config.asset.rated_power_kw;
    if rated > 10_000.0 {
        errors.push(format!(
            "asset.rated_power_kw = {:.1} is outside physical range for this tool (0-10000 kW)",
            rated
        ));
    }

    // Power factor below 0.5 is possible but points at a metering problem
    let pf = config.asset.power_factor;
    if pf > 0.0 && pf < 0.5 {
        warnings.push(ValidationWarning {
            field: "asset.power_factor".to_string(),
            message: format!("power_factor = {:.2} is outside typical range (0.5-1.0)", pf),
            suggestion: None,
        });
    }

    // Hydraulic baseline: healthy centrifugal installations sit around 0.3-0.8
    let baseline = config.physics.hydraulic_baseline_eff;
    if baseline > 0.0 && !(0.3..=0.8).contains(&baseline) {
        warnings.push(ValidationWarning {
            field: "physics.hydraulic_baseline_eff".to_string(),
            message: format!(
                "hydraulic_baseline_eff = {:.2} is outside typical range (0.30-0.80)",
                baseline
            ),
            suggestion: None,
        });
    }

    // Empty currency label renders unreadable reports
    if config.tariff.currency_symbol.trim().is_empty() {
        warnings.push(ValidationWarning {
            field: "tariff.currency_symbol".to_string(),
            message: "currency_symbol is empty — financial figures will render without a label"
                .to_string(),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
