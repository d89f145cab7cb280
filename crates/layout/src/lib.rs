use thiserror::Error;

/// Internal placement faults. These never escape [`compute_layout`]; they are
/// folded into the result's consistency errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum LayoutError {
    #[error("{field} is not a finite number ({value})")]
    NonFiniteDimension { field: String, value: f64 },
    #[error("{field} overflowed while placing elements")]
    Overflow { field: String },
}

mod elements;
pub mod engine;
pub mod geometry;
pub mod output;

pub use self::elements::{ClearanceKind, LayoutElement, PositionedElement};
pub use self::engine::{WIDTH_EPSILON, compute_layout, validate_geometry};
pub use self::geometry::{AdaDimensions, ClearanceDims, GeometryUtils};
pub use self::output::{
    AdaGeometry, COUNTERTOP_THICKNESS, CountertopPlacement, FillerPlacement, FillerSide,
    LAYOUT_VERSION, LayoutAudit, LayoutResult, ModulePlacement,
};

// Re-export foundation types so callers need only this crate.
pub use millwork_config::{AdaConfig, MillworkConfig, Tolerances};
pub use millwork_types::{ConsistencyResult, Rect, RoomSpec, ValidationIssue};

#[cfg(test)]
mod test_utils;
