use millwork_layout::LayoutResult;
use serde::{Deserialize, Serialize};

/// Version stamped into every title block.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title-block data for one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingMetadata {
    pub room_id: String,
    pub app_version: String,
    pub layout_version: String,
    pub config_sha256: String,
    /// Hash of the source room table. Left empty unless the caller knows it.
    pub source_sha256: String,
    pub timestamp: String,
    pub drawing_id: Option<String>,
    pub submittal_number: Option<String>,
}

impl DrawingMetadata {
    /// Metadata for a computed layout, stamped with the current local time.
    pub fn for_layout(layout: &LayoutResult) -> Self {
        Self {
            room_id: layout.room_id.clone(),
            app_version: APP_VERSION.to_string(),
            layout_version: layout.audit.layout_version.clone(),
            config_sha256: layout.audit.config_fingerprint.clone(),
            source_sha256: String::new(),
            timestamp: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            drawing_id: Some(format!("MW-{}", layout.room_id)),
            submittal_number: Some("01".to_string()),
        }
    }

    pub fn with_source_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.source_sha256 = sha256.into();
        self
    }
}
