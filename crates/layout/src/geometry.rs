//! Geometry helpers for the layout engine.
//!
//! Everything here is a pure function of its arguments. Helpers whose
//! defaults come from the configuration snapshot live on [`GeometryUtils`],
//! which only borrows the snapshot for the duration of a call.

use millwork_config::MillworkConfig;
use millwork_types::{Point, Rect};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// PostScript points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

static HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\d+(?:\.\d+)?)"?\s*H"#).expect("BUG: invalid HEIGHT_RE regex literal")
});

static WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\d+(?:\.\d+)?)"?\s*W"#).expect("BUG: invalid WIDTH_RE regex literal")
});

static DEPTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\d+(?:\.\d+)?)"?\s*D"#).expect("BUG: invalid DEPTH_RE regex literal")
});

/// Height/width/depth pulled out of a clearance string. Missing dimensions are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearanceDims {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
}

impl ClearanceDims {
    pub fn is_empty(&self) -> bool {
        self.height == 0.0 && self.width == 0.0 && self.depth == 0.0
    }
}

/// Parsed ADA block, ready for box construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaDimensions {
    pub knee: ClearanceDims,
    pub toe: ClearanceDims,
    pub counter_range: Option<[f64; 2]>,
    pub clear_widths: f64,
    pub code_basis: String,
}

impl AdaDimensions {
    /// `None` unless the configuration carries knee, toe and clear-width values.
    pub fn from_config(config: &MillworkConfig) -> Option<Self> {
        let ada = config.complete_ada()?;
        Some(Self {
            knee: parse_clearance_spec(ada.knee_clear.as_deref()?),
            toe: parse_clearance_spec(ada.toe_clear.as_deref()?),
            counter_range: ada.counter_range,
            clear_widths: ada.clear_widths?,
            code_basis: config.code.basis.clone(),
        })
    }
}

/// Config-defaulted geometry helpers.
#[derive(Debug, Clone, Copy)]
pub struct GeometryUtils<'a> {
    config: &'a MillworkConfig,
}

impl<'a> GeometryUtils<'a> {
    pub fn new(config: &'a MillworkConfig) -> Self {
        Self { config }
    }

    /// Multiplies by `scale`, or by `SCALE_PLAN` when none is given.
    pub fn apply_scale(&self, value: f64, scale: Option<f64>) -> f64 {
        value * scale.unwrap_or(self.config.scale_plan)
    }

    /// Rounds half-to-even to `places` decimals, or `TOLERANCES.LENGTH_ROUNDING`.
    pub fn round_to_tolerance(&self, value: f64, places: Option<u32>) -> f64 {
        round_half_even(value, places.unwrap_or(self.config.tolerances.length_rounding))
    }

    /// See [`check_length_sum`]; `tolerance` defaults to `TOLERANCES.LENGTH_SUM`.
    pub fn validate_length_sum(
        &self,
        module_widths: &[f64],
        left_filler: f64,
        right_filler: f64,
        total_length: f64,
        tolerance: Option<f64>,
    ) -> (bool, f64) {
        check_length_sum(
            module_widths,
            left_filler,
            right_filler,
            total_length,
            tolerance.unwrap_or(self.config.tolerances.length_sum),
        )
    }

    pub fn ada_dimensions(&self) -> Option<AdaDimensions> {
        AdaDimensions::from_config(self.config)
    }
}

// Every f64 has an exact decimal expansion within this many places.
const MAX_ROUNDING_PLACES: u32 = 1074;

pub fn inches_to_points(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

pub fn points_to_inches(points: f64) -> f64 {
    points / POINTS_PER_INCH
}

/// Rounds to `places` decimals, ties to even, on the exact binary value.
/// Non-finite input is returned as is.
/// `2.675` is stored just below the tie, so it rounds to `2.67`.
pub fn round_half_even(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = places.min(MAX_ROUNDING_PLACES) as usize;
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Smallest rectangle enclosing every input; the zero rectangle for none.
pub fn bounding_box(rects: &[Rect]) -> Rect {
    let Some(first) = rects.first() else {
        return Rect::zero();
    };

    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.right(), first.top());
    for rect in &rects[1..] {
        min_x = min_x.min(rect.x);
        min_y = min_y.min(rect.y);
        max_x = max_x.max(rect.right());
        max_y = max_y.max(rect.top());
    }

    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Reconciles a run against its declared total.
///
/// Returns `(within_tolerance, |sum(widths) + left + right - total|)`. The
/// tolerance is inclusive: a difference of exactly `tolerance` passes.
pub fn check_length_sum(
    module_widths: &[f64],
    left_filler: f64,
    right_filler: f64,
    total_length: f64,
    tolerance: f64,
) -> (bool, f64) {
    let computed = module_widths.iter().sum::<f64>() + left_filler + right_filler;
    let difference = (computed - total_length).abs();
    (difference <= tolerance, difference)
}

/// Best-effort extraction of `<n> H`, `<n> W`, `<n> D` from free text such as
/// `27" H x 30" W x 17" D`. Matching is case-insensitive and the inch mark is
/// optional. Unmatched dimensions stay 0; nothing here rejects malformed text.
pub fn parse_clearance_spec(text: &str) -> ClearanceDims {
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    ClearanceDims {
        height: capture(&HEIGHT_RE),
        width: capture(&WIDTH_RE),
        depth: capture(&DEPTH_RE),
    }
}

/// Knee and toe clearance rectangles beneath a countertop.
///
/// The knee box hangs from `counter_height` and is only as wide as the knee
/// clearance; the toe box sits directly below it and spans the full counter.
pub fn ada_clearance_boxes(
    countertop: Rect,
    counter_height: f64,
    ada: &AdaDimensions,
) -> (Rect, Rect) {
    let knee = Rect::new(
        countertop.x,
        counter_height - ada.knee.height,
        ada.knee.width,
        ada.knee.height,
    );
    let toe = Rect::new(
        countertop.x,
        knee.y - ada.toe.height,
        countertop.width,
        ada.toe.height,
    );
    (knee, toe)
}

pub fn center_point(rect: Rect) -> Point {
    Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

pub fn offset_rect(rect: Rect, dx: f64, dy: f64) -> Rect {
    Rect::new(rect.x + dx, rect.y + dy, rect.width, rect.height)
}

/// Scales the size, keeping the origin. `scale_y` defaults to `scale_x`.
pub fn scale_rect(rect: Rect, scale_x: f64, scale_y: Option<f64>) -> Rect {
    Rect::new(
        rect.x,
        rect.y,
        rect.width * scale_x,
        rect.height * scale_y.unwrap_or(scale_x),
    )
}
