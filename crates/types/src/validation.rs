//! Structured findings produced by configuration checks and layout reconciliation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A single finding: which field, what went wrong, and the offending value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_id: Option<String>,
    pub severity: IssueSeverity,
}

/// Errors and warnings collected for one room or one configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ConsistencyResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<Value>,
        row_id: Option<&str>,
    ) {
        self.errors.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
            value: value.into(),
            row_id: row_id.map(str::to_string),
            severity: IssueSeverity::Error,
        });
    }

    pub fn add_warning(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<Value>,
        row_id: Option<&str>,
    ) {
        self.warnings.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
            value: value.into(),
            row_id: row_id.map(str::to_string),
            severity: IssueSeverity::Warning,
        });
    }

    pub fn merge(&mut self, other: ConsistencyResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// First error recorded against `field`, if any.
    pub fn error_for(&self, field: &str) -> Option<&ValidationIssue> {
        self.errors.iter().find(|issue| issue.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_invalidate_warnings_do_not() {
        let mut result = ConsistencyResult::new();
        result.add_warning("notes", "Long note", "x".repeat(3), None);
        assert!(result.is_valid());

        result.add_error("module_count", "Module count mismatch", 3, Some("K-1"));
        assert!(!result.is_valid());
        let issue = result.error_for("module_count").unwrap();
        assert_eq!(issue.value, Value::from(3));
        assert_eq!(issue.row_id.as_deref(), Some("K-1"));
        assert_eq!(issue.severity, IssueSeverity::Error);
    }

    #[test]
    fn test_merge_keeps_both_sides() {
        let mut left = ConsistencyResult::new();
        left.add_error("a", "first", 1.0, None);
        let mut right = ConsistencyResult::new();
        right.add_error("b", "second", 2.0, None);
        right.add_warning("c", "third", 3.0, None);

        left.merge(right);
        assert_eq!(left.errors.len(), 2);
        assert_eq!(left.warnings.len(), 1);
    }
}
