use millwork_types::ValidationIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Configuration validation failed: {summary}")]
    Invalid {
        summary: String,
        issues: Vec<ValidationIssue>,
    },
}

impl ConfigError {
    pub(crate) fn invalid(issues: Vec<ValidationIssue>) -> Self {
        let summary = issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect::<Vec<_>>()
            .join("; ");
        ConfigError::Invalid { summary, issues }
    }
}
