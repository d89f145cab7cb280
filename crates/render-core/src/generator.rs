//! Sheet composition for one room.
//!
//! Every view is drawn in drawing inches relative to a fixed origin on the
//! sheet. Nothing here knows how a backend turns those calls into a file.

use crate::error::RenderError;
use crate::traits::DrawingRenderer;
use crate::types::DrawingMetadata;
use millwork_config::MillworkConfig;
use millwork_layout::geometry::{center_point, offset_rect};
use millwork_layout::{FillerSide, LayoutElement, LayoutResult};
use millwork_types::{Point, Rect, RenderStyle};
use std::path::{Path, PathBuf};

const PLAN_ORIGIN: Point = Point { x: 24.0, y: 12.0 };
const ELEVATION_ORIGIN: Point = Point { x: 120.0, y: 12.0 };
const SCHEDULE_ORIGIN: Point = Point { x: 12.0, y: 60.0 };
const ADA_ORIGIN: Point = Point { x: 120.0, y: 60.0 };
const NOTES_ORIGIN: Point = Point { x: 12.0, y: 30.0 };

const TOE_KICK_HEIGHT: f64 = 4.0;
const DOOR_MARGIN: f64 = 2.0;
const COUNTERTOP_OVERHANG: f64 = 1.0;
const LINE_SPACING: f64 = 12.0;
const NOTE_SPACING: f64 = 8.0;

const CONSTRUCTION_NOTES: [&str; 5] = [
    "1. All dimensions to be verified in field",
    "2. Provide backing for all wall-mounted units",
    "3. Coordinate with electrical and plumbing rough-in",
    "4. Finish exposed edges to match face material",
    "5. Install per manufacturer's recommendations",
];

/// Caller-level policy for layouts that carry consistency errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationPolicy {
    /// Refuse to draw a layout with any consistency error.
    pub strict: bool,
}

impl GenerationPolicy {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn check(&self, layout: &LayoutResult) -> Result<(), RenderError> {
        if self.strict && !layout.is_consistent() {
            return Err(RenderError::InconsistentLayout {
                room_id: layout.room_id.clone(),
                error_count: layout.consistency.errors.len(),
            });
        }
        Ok(())
    }
}

/// File name for a room's sheet. Characters that are unsafe in file names
/// become `_`.
pub fn sheet_file_name(room_id: &str, extension: &str) -> String {
    let stem: String = room_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "room".to_string() } else { stem };
    format!("{stem}.{extension}")
}

/// Composes a complete shop drawing for one layout on any [`DrawingRenderer`].
#[derive(Debug, Clone)]
pub struct ShopDrawingGenerator<'a> {
    config: &'a MillworkConfig,
    policy: GenerationPolicy,
    extension: String,
}

impl<'a> ShopDrawingGenerator<'a> {
    pub fn new(config: &'a MillworkConfig) -> Self {
        Self {
            config,
            policy: GenerationPolicy::default(),
            extension: "pdf".to_string(),
        }
    }

    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extension used for saved sheets; `pdf` unless changed.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Draws the sheet, saves it under `output_dir` and returns the path.
    pub fn generate<R: DrawingRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &LayoutResult,
        output_dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let metadata = DrawingMetadata::for_layout(layout);
        self.draw(renderer, layout, &metadata)?;

        let path = output_dir.join(sheet_file_name(&layout.room_id, &self.extension));
        renderer.save(&path)?;
        log::info!("Saved shop drawing for room '{}' to {}", layout.room_id, path.display());
        Ok(path)
    }

    /// Draws one page for `layout` without saving it.
    pub fn draw<R: DrawingRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &LayoutResult,
        metadata: &DrawingMetadata,
    ) -> Result<(), RenderError> {
        self.policy.check(layout)?;
        if !layout.is_consistent() {
            log::warn!(
                "Drawing room '{}' despite {} consistency error(s)",
                layout.room_id,
                layout.consistency.errors.len()
            );
        }

        let page_size = self.config.pdf.page_size()?;
        renderer.begin_page(metadata, page_size)?;

        self.draw_plan_view(renderer, layout)?;
        self.draw_elevation_view(renderer, layout)?;
        self.draw_dimensions(renderer, layout)?;
        if self.config.schedule.format == "on-sheet" {
            self.draw_material_schedule(renderer, layout)?;
        }
        self.draw_ada_compliance(renderer, layout)?;
        self.draw_notes(renderer)?;

        renderer.end_page()
    }

    fn draw_plan_view<R: DrawingRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &LayoutResult,
    ) -> Result<(), RenderError> {
        let Point { x: ox, y: oy } = PLAN_ORIGIN;

        for module in &layout.modules {
            let rect = Rect::new(ox + module.x, oy + module.y, module.width, module.depth);
            renderer.draw_rect(rect, RenderStyle::MediumLine)?;
            renderer.draw_text(
                center_point(rect),
                &format!("M{}", module.index + 1),
                RenderStyle::TextMedium,
                0.0,
            )?;
        }

        for filler in &layout.fillers {
            let rect = Rect::new(ox + filler.x, oy + filler.y, filler.width, filler.depth);
            renderer.draw_rect(rect, RenderStyle::ThinLine)?;
            let label = match filler.side {
                FillerSide::Left => "F-L",
                FillerSide::Right => "F-R",
            };
            renderer.draw_text(center_point(rect), label, RenderStyle::TextSmall, 0.0)?;
        }

        let top = &layout.countertop;
        if top.width > 0.0 {
            // Front edge overhangs the cabinet faces.
            let rect = Rect::new(
                ox + top.x,
                oy - COUNTERTOP_OVERHANG,
                top.width,
                top.depth + COUNTERTOP_OVERHANG,
            );
            renderer.draw_rect(rect, RenderStyle::ThickLine)?;
            renderer.draw_text(center_point(rect), &top.material_code, RenderStyle::TextMedium, 0.0)?;
        }

        Ok(())
    }

    fn draw_elevation_view<R: DrawingRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &LayoutResult,
    ) -> Result<(), RenderError> {
        for positioned in layout.elements() {
            let bounds = offset_rect(positioned.bounds, ELEVATION_ORIGIN.x, ELEVATION_ORIGIN.y);
            renderer.draw_rect(bounds, positioned.style)?;

            match positioned.element {
                LayoutElement::Module(_) => draw_cabinet_face(renderer, bounds)?,
                LayoutElement::Filler(_)
                | LayoutElement::Countertop(_)
                | LayoutElement::AdaBox(_) => {}
            }
        }
        Ok(())
    }

    fn draw_dimensions<R: DrawingRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &LayoutResult,
    ) -> Result<(), RenderError> {
        let Point { x: ox, y: oy } = PLAN_ORIGIN;
        let Some((min_x, max_x)) = layout.run_extent() else {
            return Ok(());
        };

        renderer.draw_dimension(
            ox + min_x,
            ox + max_x,
            oy - 6.0,
            &format!("{:.1}\"", layout.total_width),
            RenderStyle::DimensionLine,
        )?;

        for module in &layout.modules {
            renderer.draw_dimension(
                ox + module.x,
                ox + module.x + module.width,
                oy - 12.0,
                &format!("{:.1}\"", module.width),
                RenderStyle::DimensionLine,
            )?;
        }

        for filler in &layout.fillers {
            renderer.draw_dimension(
                ox + filler.x,
                ox + filler.x + filler.width,
                oy - 18.0,
                &format!("F{:.1}\"", filler.width),
                RenderStyle::DimensionLine,
            )?;
        }

        Ok(())
    }

    fn draw_material_schedule<R: DrawingRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &LayoutResult,
    ) -> Result<(), RenderError> {
        let hw = &self.config.hardware.defaults;
        let mut lines = vec![format!("Countertop: {}", layout.countertop.material_code)];
        if let Some(first) = layout.modules.first() {
            lines.push(format!("Base Cabinets: {}", first.material_code));
        }
        lines.push(format!("Edge Treatment: {}", self.config.edge_rule));
        lines.push(format!("Hardware: {} / {} / {}", hw.hinge, hw.pull, hw.slide));

        let Point { x, y } = SCHEDULE_ORIGIN;
        renderer.draw_text(Point::new(x, y), "MATERIAL SCHEDULE", RenderStyle::TextLarge, 0.0)?;
        for (i, line) in lines.iter().enumerate() {
            let at = Point::new(x, y - LINE_SPACING * (i + 1) as f64);
            renderer.draw_text(at, line, RenderStyle::TextMedium, 0.0)?;
        }
        Ok(())
    }

    fn draw_ada_compliance<R: DrawingRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &LayoutResult,
    ) -> Result<(), RenderError> {
        let Some(ada) = &layout.ada_geometry else {
            return Ok(());
        };
        let Point { x, y } = ADA_ORIGIN;

        renderer.draw_text(Point::new(x, y), "ADA COMPLIANCE", RenderStyle::TextLarge, 0.0)?;
        renderer.draw_text(
            Point::new(x, y - 12.0),
            &format!("Code Basis: {}", ada.code_basis),
            RenderStyle::TextMedium,
            0.0,
        )?;

        let knee = Rect::new(x, y - 36.0, ada.knee_box.width, ada.knee_box.height);
        renderer.draw_rect(knee, RenderStyle::MediumLine)?;
        renderer.draw_text(center_point(knee), "KNEE CLEARANCE", RenderStyle::TextSmall, 0.0)?;

        let toe = Rect::new(x, y - 48.0, ada.toe_box.width, ada.toe_box.height);
        renderer.draw_rect(toe, RenderStyle::ThinLine)?;
        renderer.draw_text(center_point(toe), "TOE CLEARANCE", RenderStyle::TextSmall, 0.0)?;

        renderer.draw_text(
            Point::new(x, y - 60.0),
            &format!("Counter Height: {:.1}\"", ada.counter_height),
            RenderStyle::TextMedium,
            0.0,
        )?;
        if let Some([low, high]) = ada.counter_range {
            renderer.draw_text(
                Point::new(x, y - 72.0),
                &format!("Counter Range: {low:.1}\" - {high:.1}\""),
                RenderStyle::TextSmall,
                0.0,
            )?;
        }
        Ok(())
    }

    fn draw_notes<R: DrawingRenderer + ?Sized>(&self, renderer: &mut R) -> Result<(), RenderError> {
        let Point { x, y } = NOTES_ORIGIN;
        renderer.draw_text(Point::new(x, y), "CONSTRUCTION NOTES", RenderStyle::TextLarge, 0.0)?;

        for (i, note) in CONSTRUCTION_NOTES.iter().enumerate() {
            let at = Point::new(x, y - LINE_SPACING - NOTE_SPACING * i as f64);
            renderer.draw_text(at, note, RenderStyle::TextSmall, 0.0)?;
        }

        renderer.draw_text(
            Point::new(x, y - 60.0),
            &format!("Fabrication tolerance: ±{}\"", self.config.tolerances.length_sum),
            RenderStyle::TextSmall,
            0.0,
        )
    }
}

/// Toe kick and door outline inside a cabinet's elevation rectangle.
fn draw_cabinet_face<R: DrawingRenderer + ?Sized>(
    renderer: &mut R,
    bounds: Rect,
) -> Result<(), RenderError> {
    let kick = Rect::new(bounds.x, bounds.y, bounds.width, TOE_KICK_HEIGHT.min(bounds.height));
    renderer.draw_rect(kick, RenderStyle::ThinLine)?;

    let door_width = bounds.width - 2.0 * DOOR_MARGIN;
    let door_height = bounds.height - TOE_KICK_HEIGHT - 2.0 * DOOR_MARGIN;
    if door_width > 0.0 && door_height > 0.0 {
        let door = Rect::new(
            bounds.x + DOOR_MARGIN,
            bounds.y + TOE_KICK_HEIGHT + DOOR_MARGIN,
            door_width,
            door_height,
        );
        renderer.draw_rect(door, RenderStyle::ThinLine)?;
    }
    Ok(())
}
