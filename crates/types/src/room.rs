use serde::{Deserialize, Serialize};

/// One validated room row.
///
/// Produced by an upstream parser/validator; the layout engine trusts field
/// types and ranges and only checks geometric consistency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub room_id: String,
    pub total_length_in: f64,
    pub num_modules: usize,
    /// Placement order, left to right.
    pub module_widths: Vec<f64>,
    pub material_top: String,
    pub material_casework: String,
    #[serde(default)]
    pub left_filler_in: f64,
    #[serde(default)]
    pub right_filler_in: f64,
    #[serde(default)]
    pub counter_height_in: Option<f64>,

    // Descriptive fields, carried through untouched.
    #[serde(default)]
    pub has_sink: bool,
    #[serde(default)]
    pub has_ref: bool,
    #[serde(default)]
    pub edge_rule: Option<String>,
    #[serde(default)]
    pub hardware_defaults: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub references: Option<String>,
    #[serde(default)]
    pub row_number: usize,
    #[serde(default)]
    pub source_file: Option<String>,
}

impl RoomSpec {
    /// Creates a room with no fillers; `num_modules` follows `module_widths`.
    pub fn new(
        room_id: impl Into<String>,
        total_length_in: f64,
        module_widths: Vec<f64>,
        material_top: impl Into<String>,
        material_casework: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            total_length_in,
            num_modules: module_widths.len(),
            module_widths,
            material_top: material_top.into(),
            material_casework: material_casework.into(),
            left_filler_in: 0.0,
            right_filler_in: 0.0,
            counter_height_in: None,
            has_sink: false,
            has_ref: false,
            edge_rule: None,
            hardware_defaults: None,
            notes: None,
            references: None,
            row_number: 0,
            source_file: None,
        }
    }

    pub fn with_fillers(mut self, left: f64, right: f64) -> Self {
        self.left_filler_in = left;
        self.right_filler_in = right;
        self
    }

    pub fn with_counter_height(mut self, height: f64) -> Self {
        self.counter_height_in = Some(height);
        self
    }

    /// Sum of declared module widths plus both fillers.
    pub fn declared_run_length(&self) -> f64 {
        self.module_widths.iter().sum::<f64>() + self.left_filler_in + self.right_filler_in
    }
}
