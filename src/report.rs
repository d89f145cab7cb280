//! Per-room error reports and the batch summary.
//!
//! Both serialize to pretty JSON; where the text ends up is the caller's call.

use millwork_layout::{ConsistencyResult, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cap on messages kept in [`BatchSummary::messages`].
pub const MAX_SUMMARY_MESSAGES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Failed,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomErrorReport {
    pub room_id: String,
    pub status: RoomStatus,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl RoomErrorReport {
    /// `None` for a room with nothing to report.
    pub fn from_consistency(room_id: &str, result: &ConsistencyResult) -> Option<Self> {
        if result.errors.is_empty() && result.warnings.is_empty() {
            return None;
        }
        Some(Self {
            room_id: room_id.to_string(),
            status: if result.errors.is_empty() {
                RoomStatus::Warning
            } else {
                RoomStatus::Failed
            },
            errors: result.errors.clone(),
            warnings: result.warnings.clone(),
        })
    }

    pub fn is_failure(&self) -> bool {
        self.status == RoomStatus::Failed
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Outcome counts for a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_rooms: usize,
    pub successful_rooms: usize,
    pub failed_rooms: usize,
    /// Successful rooms over total rooms, 0.0 for an empty batch.
    pub success_rate: f64,
    /// Error count per issue field.
    pub error_breakdown: BTreeMap<String, usize>,
    /// `"<room_id>: <message>"` for the first errors seen.
    pub messages: Vec<String>,
}

impl BatchSummary {
    pub fn new(total_rooms: usize) -> Self {
        Self {
            total_rooms,
            ..Self::default()
        }
    }

    pub fn record_success(&mut self) {
        self.successful_rooms += 1;
        self.update_rate();
    }

    /// Counts one failed room and every error it carries.
    pub fn record_failure(&mut self, report: &RoomErrorReport) {
        self.failed_rooms += 1;
        for issue in &report.errors {
            let field = if issue.field.is_empty() {
                "general"
            } else {
                issue.field.as_str()
            };
            *self.error_breakdown.entry(field.to_string()).or_insert(0) += 1;
            self.push_message(format!("{}: {}", report.room_id, issue.message));
        }
        self.update_rate();
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn push_message(&mut self, message: String) {
        if self.messages.len() < MAX_SUMMARY_MESSAGES {
            self.messages.push(message);
        }
    }

    fn update_rate(&mut self) {
        self.success_rate = if self.total_rooms == 0 {
            0.0
        } else {
            self.successful_rooms as f64 / self.total_rooms as f64
        };
    }
}
