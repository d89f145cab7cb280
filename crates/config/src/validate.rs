use crate::MillworkConfig;
use millwork_types::{ConsistencyResult, PageSize};
use serde_json::json;

pub(crate) fn validate_config(config: &MillworkConfig) -> ConsistencyResult {
    let mut result = ConsistencyResult::new();

    for (field, value) in [
        ("SCALE_PLAN", config.scale_plan),
        ("COUNTER_HEIGHT", config.counter_height),
        ("BASE_DEPTH", config.base_depth),
        ("WALL_CAB_DEPTH", config.wall_cab_depth),
        ("TOLERANCES.LENGTH_SUM", config.tolerances.length_sum),
    ] {
        if !(value.is_finite() && value > 0.0) {
            result.add_error(field, "Must be a positive number", value, None);
        }
    }

    if let Some(ada) = &config.ada {
        if let Some([low, high]) = ada.counter_range {
            if !(low.is_finite() && high.is_finite()) {
                result.add_error("ADA.COUNTER_RANGE", "Must contain only numbers", json!([low, high]), None);
            } else if low >= high {
                result.add_error(
                    "ADA.COUNTER_RANGE",
                    "First value must be less than second",
                    json!([low, high]),
                    None,
                );
            }
        }
        if let Some(width) = ada.clear_widths {
            if !(width.is_finite() && width > 0.0) {
                result.add_error("ADA.CLEAR_WIDTHS", "Must be a positive number", width, None);
            }
        }
    }

    if config.pdf.page_size().is_err() {
        let names: Vec<&str> = PageSize::ALL.iter().map(|size| size.name()).collect();
        result.add_error(
            "PDF.SIZE",
            format!("Must be one of: {}", names.join(", ")),
            config.pdf.size.as_str(),
            None,
        );
    }

    let margins = &config.pdf.margins;
    if margins.len() != 4 {
        result.add_error("PDF.MARGINS", "Must be a list of four numbers", json!(margins), None);
    } else if !margins.iter().all(|m| m.is_finite() && *m >= 0.0) {
        result.add_error(
            "PDF.MARGINS",
            "Must contain only non-negative numbers",
            json!(margins),
            None,
        );
    }

    if config.edge_rule.is_empty() || !config.edge_rules.contains(&config.edge_rule) {
        result.add_error(
            "EDGE_RULE",
            format!("Must be one of EDGE_RULES: {}", config.edge_rules.join(", ")),
            config.edge_rule.as_str(),
            None,
        );
    }

    if !matches!(config.schedule.format.as_str(), "on-sheet" | "csv") {
        result.add_error(
            "SCHEDULE.FORMAT",
            "Must be 'on-sheet' or 'csv'",
            config.schedule.format.as_str(),
            None,
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use crate::{AdaConfig, MillworkConfig};
    use serde_json::json;

    #[test]
    fn test_default_config_is_valid() {
        let report = MillworkConfig::default().validate();
        assert!(report.is_valid(), "{:?}", report.errors);

        let with_ada = MillworkConfig::default().with_ada(AdaConfig::standard());
        assert!(with_ada.validate().is_valid());
    }

    #[test]
    fn test_non_positive_dimensions_are_reported() {
        let mut config = MillworkConfig::default();
        config.scale_plan = 0.0;
        config.counter_height = -36.0;
        config.tolerances.length_sum = f64::NAN;

        let report = config.validate();
        let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["SCALE_PLAN", "COUNTER_HEIGHT", "TOLERANCES.LENGTH_SUM"]);
    }

    #[test]
    fn test_counter_range_must_be_ordered() {
        let config = MillworkConfig::default().with_ada(AdaConfig {
            counter_range: Some([34.0, 28.0]),
            ..AdaConfig::standard()
        });
        let report = config.validate();
        let issue = report.error_for("ADA.COUNTER_RANGE").unwrap();
        assert_eq!(issue.value, json!([34.0, 28.0]));
    }

    #[test]
    fn test_pdf_settings_are_checked() {
        let mut config = MillworkConfig::default();
        config.pdf.size = "A4".to_string();
        config.pdf.margins = vec![0.5, 0.5, -0.25, 0.5];

        let report = config.validate();
        assert!(report.error_for("PDF.SIZE").unwrap().message.contains("ANSI-D"));
        assert_eq!(
            report.error_for("PDF.MARGINS").unwrap().message,
            "Must contain only non-negative numbers"
        );

        config.pdf.margins = vec![0.5, 0.5];
        let report = config.validate();
        assert_eq!(
            report.error_for("PDF.MARGINS").unwrap().message,
            "Must be a list of four numbers"
        );
    }

    #[test]
    fn test_edge_rule_must_be_listed() {
        let mut config = MillworkConfig::default();
        config.edge_rule = "BULLNOSE".to_string();
        assert!(config.validate().error_for("EDGE_RULE").is_some());
    }
}
