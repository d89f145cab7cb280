//! Configuration snapshot for the millwork drafting engine.
//!
//! The snapshot mirrors the nested key/value document projects keep under
//! version control (`SCALE_PLAN`, `TOLERANCES.LENGTH_SUM`, `ADA.KNEE_CLEAR`, ...).
//! Missing keys fall back to shop defaults, except the `ADA` block: when it is
//! absent (or incomplete) no clearance geometry is produced.

mod error;
mod fingerprint;
mod validate;

pub use error::ConfigError;
pub use fingerprint::{canonical_json, fingerprint_value};

use millwork_types::{ConsistencyResult, PageSize, UnknownPageSize};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Length reconciliation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Tolerances {
    /// Maximum absolute discrepancy (inches) between a declared total and the placed run.
    pub length_sum: f64,
    /// Decimal places used when rounding geometry values.
    pub length_rounding: u32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            length_sum: 0.125,
            length_rounding: 2,
        }
    }
}

/// Accessibility clearances. Every key is optional in the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AdaConfig {
    /// Free text such as `27" H x 30" W x 17" D`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knee_clear: Option<String>,
    /// Free text such as `9" H x 6" D`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toe_clear: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_range: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_widths: Option<f64>,
}

impl AdaConfig {
    /// The 2010 ADA Standards values shipped with new projects.
    pub fn standard() -> Self {
        Self {
            knee_clear: Some("27\" H x 30\" W x 17\" D".to_string()),
            toe_clear: Some("9\" H x 6\" D".to_string()),
            counter_range: Some([28.0, 34.0]),
            clear_widths: Some(32.0),
        }
    }

    /// Clearance geometry needs knee, toe and approach width together.
    pub fn is_complete(&self) -> bool {
        self.knee_clear.is_some() && self.toe_clear.is_some() && self.clear_widths.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PdfConfig {
    pub size: String,
    /// Top, right, bottom, left in inches.
    pub margins: Vec<f64>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            size: PageSize::Letter.name().to_string(),
            margins: vec![0.5; 4],
        }
    }
}

impl PdfConfig {
    pub fn page_size(&self) -> Result<PageSize, UnknownPageSize> {
        self.size.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct HardwareDefaults {
    pub hinge: String,
    pub pull: String,
    pub slide: String,
}

impl Default for HardwareDefaults {
    fn default() -> Self {
        Self {
            hinge: "BLUM-110".to_string(),
            pull: "SS-128".to_string(),
            slide: "BLUM-563".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct HardwareConfig {
    pub defaults: HardwareDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CodeConfig {
    pub basis: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            basis: "ADA 2010".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ScheduleConfig {
    /// `on-sheet` or `csv`.
    pub format: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            format: "on-sheet".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CadConfig {
    pub deliverables: bool,
}

/// One immutable configuration snapshot, passed explicitly to every layout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MillworkConfig {
    /// Drawing scale (1/4" = 1'-0" is 0.25). Only the renderer uses it.
    pub scale_plan: f64,
    pub counter_height: f64,
    pub base_depth: f64,
    pub wall_cab_depth: f64,
    pub edge_rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ada: Option<AdaConfig>,
    pub tolerances: Tolerances,
    pub pdf: PdfConfig,
    #[serde(rename = "HW")]
    pub hardware: HardwareConfig,
    pub code: CodeConfig,
    pub schedule: ScheduleConfig,
    pub cad: CadConfig,
    pub edge_rules: Vec<String>,
}

impl Default for MillworkConfig {
    fn default() -> Self {
        Self {
            scale_plan: 0.25,
            counter_height: 36.0,
            base_depth: 24.0,
            wall_cab_depth: 12.0,
            edge_rule: "MATCH_FACE".to_string(),
            ada: None,
            tolerances: Tolerances::default(),
            pdf: PdfConfig::default(),
            hardware: HardwareConfig::default(),
            code: CodeConfig::default(),
            schedule: ScheduleConfig::default(),
            cad: CadConfig::default(),
            edge_rules: ["MATCH_FACE", "PVC_EDGE", "SOLID_LUMBER", "RADIUS"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl MillworkConfig {
    pub fn with_ada(mut self, ada: AdaConfig) -> Self {
        self.ada = Some(ada);
        self
    }

    /// The ADA block, only when it carries everything clearance geometry needs.
    pub fn complete_ada(&self) -> Option<&AdaConfig> {
        self.ada.as_ref().filter(|ada| ada.is_complete())
    }

    /// Parses a JSON document, filling missing keys with defaults. Does not range-check.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses and range-checks a JSON document, rejecting it when any check fails.
    pub fn load_json_str(json: &str) -> Result<Self, ConfigError> {
        let config = Self::from_json_str(json)?;
        config.ensure_valid()?;
        Ok(config)
    }

    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        let report = self.validate();
        if report.is_valid() {
            Ok(())
        } else {
            log::warn!(
                "Rejecting configuration with {} validation error(s)",
                report.errors.len()
            );
            Err(ConfigError::invalid(report.errors))
        }
    }

    /// Range checks over every numeric and enumerated key.
    pub fn validate(&self) -> ConsistencyResult {
        validate::validate_config(self)
    }

    /// SHA-256 hex digest of the canonical (key-sorted, compact) JSON form.
    ///
    /// The full 64-character digest is kept. Audit trails that hashed
    /// space-separated JSON or stored a 16-character prefix are not directly
    /// comparable.
    pub fn fingerprint(&self) -> String {
        match serde_json::to_value(self) {
            Ok(value) => fingerprint_value(&value),
            // Unreachable for this type; keep the hash total regardless.
            Err(_) => fingerprint::fingerprint_bytes(format!("{:?}", self).as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = MillworkConfig::from_json_str(r#"{ "COUNTER_HEIGHT": 34.0 }"#).unwrap();
        assert_eq!(config.counter_height, 34.0);
        assert_eq!(config.base_depth, 24.0);
        assert_eq!(config.tolerances.length_sum, 0.125);
        assert_eq!(config.tolerances.length_rounding, 2);
        assert_eq!(config.code.basis, "ADA 2010");
        assert!(config.ada.is_none());
    }

    #[test]
    fn test_nested_keys_are_screaming_case() {
        let config = MillworkConfig::from_value(json!({
            "TOLERANCES": { "LENGTH_SUM": 0.0625 },
            "HW": { "DEFAULTS": { "HINGE": "SALICE-C2" } },
            "ADA": { "KNEE_CLEAR": "27\" H x 30\" W x 17\" D", "CLEAR_WIDTHS": 36 }
        }))
        .unwrap();

        assert_eq!(config.tolerances.length_sum, 0.0625);
        assert_eq!(config.tolerances.length_rounding, 2);
        assert_eq!(config.hardware.defaults.hinge, "SALICE-C2");
        assert_eq!(config.hardware.defaults.pull, "SS-128");
        let ada = config.ada.as_ref().unwrap();
        assert_eq!(ada.clear_widths, Some(36.0));
        assert!(ada.toe_clear.is_none());
    }

    #[test]
    fn test_complete_ada_requires_knee_toe_and_widths() {
        let mut config = MillworkConfig::default().with_ada(AdaConfig::standard());
        assert!(config.complete_ada().is_some());

        if let Some(ada) = config.ada.as_mut() {
            ada.toe_clear = None;
        }
        assert!(config.complete_ada().is_none());

        // COUNTER_RANGE is informational only.
        let ada = AdaConfig {
            counter_range: None,
            ..AdaConfig::standard()
        };
        assert!(ada.is_complete());
    }

    #[test]
    fn test_absent_ada_is_not_serialized() {
        let value = serde_json::to_value(MillworkConfig::default()).unwrap();
        assert!(value.get("ADA").is_none());
        assert_eq!(value["SCALE_PLAN"], json!(0.25));
        assert_eq!(value["HW"]["DEFAULTS"]["SLIDE"], json!("BLUM-563"));
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let err = MillworkConfig::load_json_str(r#"{ "BASE_DEPTH": -1.0 }"#).unwrap_err();
        match err {
            ConfigError::Invalid { issues, summary } => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].field, "BASE_DEPTH");
                assert!(summary.contains("positive"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = MillworkConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::JsonParse(_)));
    }

    #[test]
    fn test_from_reader() {
        let doc = br#"{ "SCALE_PLAN": 0.5 }"#;
        let config = MillworkConfig::from_reader(&doc[..]).unwrap();
        assert_eq!(config.scale_plan, 0.5);
    }
}
