//! Output types from the layout engine.
//!
//! A [`LayoutResult`] is a self-contained value: it holds no reference back to
//! the room or configuration it was computed from and can be shared freely
//! between the renderer and any reporting step.

use millwork_types::{ConsistencyResult, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format version stamped on every audit record.
pub const LAYOUT_VERSION: &str = "1.0";

/// Countertop thickness in inches.
pub const COUNTERTOP_THICKNESS: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulePlacement {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub material_code: String,
}

impl ModulePlacement {
    /// Elevation rectangle (width x height).
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillerSide {
    Left,
    Right,
}

impl fmt::Display for FillerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillerSide::Left => f.write_str("left"),
            FillerSide::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerPlacement {
    pub side: FillerSide,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl FillerPlacement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountertopPlacement {
    pub x: f64,
    /// Top of the cabinets: the effective counter height.
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    /// Slab thickness.
    pub height: f64,
    pub material_code: String,
}

impl CountertopPlacement {
    /// Zero-sized countertop used when no modules were placed.
    pub fn empty(material_code: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            depth: 0.0,
            height: 0.0,
            material_code: material_code.into(),
        }
    }

    /// The rectangle the countertop contributes to layout bounds: its run
    /// along x and its depth stacked on the counter height.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.depth)
    }

    /// Slab profile as seen in elevation.
    pub fn elevation_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaGeometry {
    pub knee_box: Rect,
    pub toe_box: Rect,
    pub approach_width: f64,
    pub counter_height: f64,
    pub code_basis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutAudit {
    pub room_id: String,
    pub timestamp: String,
    pub config_fingerprint: String,
    pub layout_version: String,
    pub computation_time_ms: f64,
    pub tolerance_used: f64,
}

/// Complete geometric layout for one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub room_id: String,
    pub modules: Vec<ModulePlacement>,
    pub fillers: Vec<FillerPlacement>,
    pub countertop: CountertopPlacement,
    pub ada_geometry: Option<AdaGeometry>,
    pub total_width: f64,
    pub total_depth: f64,
    pub bounding_box: Rect,
    pub audit: LayoutAudit,
    pub consistency: ConsistencyResult,
}

impl LayoutResult {
    pub fn is_consistent(&self) -> bool {
        self.consistency.is_valid()
    }

    pub fn filler(&self, side: FillerSide) -> Option<&FillerPlacement> {
        self.fillers.iter().find(|filler| filler.side == side)
    }

    /// Horizontal extent `(min_x, max_x)` of modules and fillers, if any were placed.
    pub fn run_extent(&self) -> Option<(f64, f64)> {
        let spans = self
            .modules
            .iter()
            .map(|m| (m.x, m.x + m.width))
            .chain(self.fillers.iter().map(|f| (f.x, f.x + f.width)));

        spans.fold(None, |acc, (start, end)| match acc {
            None => Some((start, end)),
            Some((lo, hi)) => Some((f64::min(lo, start), f64::max(hi, end))),
        })
    }
}
