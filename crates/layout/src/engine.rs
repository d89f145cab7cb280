//! The parametric layout engine.
//!
//! [`compute_layout`] is a free function: the configuration snapshot is an
//! explicit argument on every call and nothing is retained between calls, so
//! rooms can be laid out concurrently without coordination.

use crate::LayoutError;
use crate::geometry::{self, AdaDimensions, GeometryUtils};
use crate::output::{
    AdaGeometry, COUNTERTOP_THICKNESS, CountertopPlacement, FillerPlacement, FillerSide,
    LAYOUT_VERSION, LayoutAudit, LayoutResult, ModulePlacement,
};
use millwork_config::{MillworkConfig, Tolerances};
use millwork_types::{ConsistencyResult, Rect, RoomSpec};
use std::time::Instant;

/// Largest difference tolerated between a placed module width and its declared width.
pub const WIDTH_EPSILON: f64 = 1e-3;

struct PlacedGeometry {
    modules: Vec<ModulePlacement>,
    fillers: Vec<FillerPlacement>,
    countertop: CountertopPlacement,
    ada_geometry: Option<AdaGeometry>,
    bounding_box: Rect,
}

/// Computes the complete layout for one room.
///
/// Never fails: geometry that does not reconcile with the declared totals is
/// still returned, with the findings in `consistency.errors`. An internal
/// placement fault yields an empty layout carrying a single
/// `layout_computation` error.
pub fn compute_layout(room: &RoomSpec, config: &MillworkConfig) -> LayoutResult {
    let started = Instant::now();
    log::debug!(
        "Computing layout for room '{}' ({} modules, total {:.3} in)",
        room.room_id,
        room.module_widths.len(),
        room.total_length_in
    );

    match place_elements(room, config) {
        Ok(placed) => {
            let consistency = check_consistency(room, &placed.modules, config);
            if !consistency.is_valid() {
                log::warn!(
                    "Room '{}' laid out with {} consistency error(s)",
                    room.room_id,
                    consistency.errors.len()
                );
            }

            LayoutResult {
                room_id: room.room_id.clone(),
                modules: placed.modules,
                fillers: placed.fillers,
                countertop: placed.countertop,
                ada_geometry: placed.ada_geometry,
                total_width: placed.bounding_box.width,
                total_depth: placed.bounding_box.height,
                bounding_box: placed.bounding_box,
                audit: audit_record(room, config, started),
                consistency,
            }
        }
        Err(err) => {
            log::warn!("Layout computation failed for room '{}': {}", room.room_id, err);
            let mut consistency = ConsistencyResult::new();
            consistency.add_error(
                "layout_computation",
                format!("Layout computation failed: {err}"),
                room.room_id.as_str(),
                Some(&room.room_id),
            );

            LayoutResult {
                room_id: room.room_id.clone(),
                modules: Vec::new(),
                fillers: Vec::new(),
                countertop: CountertopPlacement::empty(""),
                ada_geometry: None,
                total_width: 0.0,
                total_depth: 0.0,
                bounding_box: Rect::zero(),
                audit: audit_record(room, config, started),
                consistency,
            }
        }
    }
}

/// Re-validates an already computed layout, e.g. one read back from JSON.
///
/// Every module needs a strictly positive width, and the module and filler
/// widths together must match `total_width` within `LENGTH_SUM`.
pub fn validate_geometry(layout: &LayoutResult, tolerances: &Tolerances) -> ConsistencyResult {
    let mut result = ConsistencyResult::new();

    for module in &layout.modules {
        if !(module.width > 0.0) {
            result.add_error(
                format!("module_{}_width", module.index),
                format!("Module {} has invalid width: {}", module.index, module.width),
                module.width,
                Some(&layout.room_id),
            );
        }
    }

    let computed_width: f64 = layout.modules.iter().map(|m| m.width).sum::<f64>()
        + layout.fillers.iter().map(|f| f.width).sum::<f64>();
    let discrepancy = (computed_width - layout.total_width).abs();
    if !(discrepancy <= tolerances.length_sum) {
        result.add_error(
            "total_width_consistency",
            format!(
                "Computed width {} doesn't match layout total {} (discrepancy {:.3})",
                computed_width, layout.total_width, discrepancy
            ),
            discrepancy,
            Some(&layout.room_id),
        );
    }

    result
}

fn place_elements(room: &RoomSpec, config: &MillworkConfig) -> Result<PlacedGeometry, LayoutError> {
    ensure_finite_inputs(room, config)?;

    let modules = place_modules(room, config)?;
    let fillers = place_fillers(room, &modules, config);
    let countertop = place_countertop(room, &modules, &fillers, config);
    let ada_geometry = place_ada(&countertop, config);

    let mut rects: Vec<Rect> = modules.iter().map(ModulePlacement::rect).collect();
    rects.extend(fillers.iter().map(FillerPlacement::rect));
    rects.push(countertop.rect());
    let bounding_box = geometry::bounding_box(&rects);

    if !bounding_box.is_finite() {
        return Err(LayoutError::Overflow {
            field: "bounding_box".to_string(),
        });
    }

    Ok(PlacedGeometry {
        modules,
        fillers,
        countertop,
        ada_geometry,
        bounding_box,
    })
}

fn ensure_finite_inputs(room: &RoomSpec, config: &MillworkConfig) -> Result<(), LayoutError> {
    let scalars = [
        ("total_length_in", room.total_length_in),
        ("left_filler_in", room.left_filler_in),
        ("right_filler_in", room.right_filler_in),
        ("counter_height_in", room.counter_height_in.unwrap_or(0.0)),
        ("COUNTER_HEIGHT", config.counter_height),
        ("BASE_DEPTH", config.base_depth),
    ];
    let widths = room
        .module_widths
        .iter()
        .enumerate()
        .map(|(i, w)| (format!("module_widths[{i}]"), *w));

    scalars
        .into_iter()
        .map(|(field, value)| (field.to_string(), value))
        .chain(widths)
        .find(|(_, value)| !value.is_finite())
        .map_or(Ok(()), |(field, value)| {
            Err(LayoutError::NonFiniteDimension { field, value })
        })
}

/// Modules run left to right in input order, starting at the left filler's edge.
fn place_modules(room: &RoomSpec, config: &MillworkConfig) -> Result<Vec<ModulePlacement>, LayoutError> {
    let mut modules = Vec::with_capacity(room.module_widths.len());
    let mut cursor = room.left_filler_in;

    for (index, &width) in room.module_widths.iter().enumerate() {
        modules.push(ModulePlacement {
            index,
            x: cursor,
            y: 0.0,
            width,
            height: config.counter_height,
            depth: config.base_depth,
            material_code: room.material_casework.clone(),
        });
        cursor += width;
        if !cursor.is_finite() {
            return Err(LayoutError::Overflow {
                field: format!("module_widths[{index}]"),
            });
        }
    }

    Ok(modules)
}

fn place_fillers(
    room: &RoomSpec,
    modules: &[ModulePlacement],
    config: &MillworkConfig,
) -> Vec<FillerPlacement> {
    let mut fillers = Vec::with_capacity(2);

    if room.left_filler_in > 0.0 {
        fillers.push(FillerPlacement {
            side: FillerSide::Left,
            x: 0.0,
            y: 0.0,
            width: room.left_filler_in,
            height: config.counter_height,
            depth: config.base_depth,
        });
    }

    // A right filler needs a module to sit against.
    if let Some(last) = modules.last().filter(|_| room.right_filler_in > 0.0) {
        fillers.push(FillerPlacement {
            side: FillerSide::Right,
            x: last.x + last.width,
            y: 0.0,
            width: room.right_filler_in,
            height: config.counter_height,
            depth: config.base_depth,
        });
    }

    fillers
}

fn place_countertop(
    room: &RoomSpec,
    modules: &[ModulePlacement],
    fillers: &[FillerPlacement],
    config: &MillworkConfig,
) -> CountertopPlacement {
    if modules.is_empty() {
        return CountertopPlacement::empty(room.material_top.as_str());
    }

    let spans = modules
        .iter()
        .map(|m| (m.x, m.x + m.width))
        .chain(fillers.iter().map(|f| (f.x, f.x + f.width)));
    let (min_x, max_x) = spans.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (start, end)| {
        (lo.min(start), hi.max(end))
    });

    CountertopPlacement {
        x: min_x,
        y: room.counter_height_in.unwrap_or(config.counter_height),
        width: max_x - min_x,
        depth: config.base_depth,
        height: COUNTERTOP_THICKNESS,
        material_code: room.material_top.clone(),
    }
}

fn place_ada(countertop: &CountertopPlacement, config: &MillworkConfig) -> Option<AdaGeometry> {
    let dims: AdaDimensions = GeometryUtils::new(config).ada_dimensions()?;
    if dims.knee.height == 0.0 || dims.toe.height == 0.0 {
        log::warn!(
            "ADA clearance text yielded a zero height (knee {:?}, toe {:?}); boxes will be degenerate",
            dims.knee,
            dims.toe
        );
    }

    let (knee_box, toe_box) = geometry::ada_clearance_boxes(countertop.rect(), countertop.y, &dims);
    Some(AdaGeometry {
        knee_box,
        toe_box,
        approach_width: dims.clear_widths,
        counter_height: countertop.y,
        code_basis: dims.code_basis,
        counter_range: dims.counter_range,
    })
}

/// Reconciles placed modules against the declared room data.
pub(crate) fn check_consistency(
    room: &RoomSpec,
    modules: &[ModulePlacement],
    config: &MillworkConfig,
) -> ConsistencyResult {
    let mut result = ConsistencyResult::new();
    let row_id = Some(room.room_id.as_str());

    let (within_tolerance, difference) = GeometryUtils::new(config).validate_length_sum(
        &room.module_widths,
        room.left_filler_in,
        room.right_filler_in,
        room.total_length_in,
        None,
    );
    if !within_tolerance {
        result.add_error(
            "total_length_validation",
            format!("Length sum validation failed. Difference: {difference:.3} inches"),
            difference,
            row_id,
        );
    }

    if modules.len() != room.num_modules {
        result.add_error(
            "module_count",
            format!(
                "Module count mismatch: expected {}, got {}",
                room.num_modules,
                modules.len()
            ),
            modules.len(),
            row_id,
        );
    }

    for (i, (module, &declared)) in modules.iter().zip(&room.module_widths).enumerate() {
        if (module.width - declared).abs() > WIDTH_EPSILON {
            result.add_error(
                format!("module_{i}_width"),
                format!(
                    "Module {i} width mismatch: expected {declared}, got {}",
                    module.width
                ),
                module.width,
                row_id,
            );
        }
    }

    result
}

fn audit_record(room: &RoomSpec, config: &MillworkConfig, started: Instant) -> LayoutAudit {
    let config_fingerprint = config.fingerprint();
    LayoutAudit {
        room_id: room.room_id.clone(),
        timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        config_fingerprint,
        layout_version: LAYOUT_VERSION.to_string(),
        computation_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        tolerance_used: config.tolerances.length_sum,
    }
}
