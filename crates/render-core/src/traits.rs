use crate::error::RenderError;
use crate::types::DrawingMetadata;
use millwork_types::{PageSize, Point, Rect, RenderStyle};
use std::path::Path;

/// A drawing backend, abstracting the sheet-level drawing primitives.
///
/// Coordinates are drawing inches with the origin at the lower left of the
/// sheet's drawing area; converting to device units is the backend's job.
/// The layout engine never sees this trait.
pub trait DrawingRenderer {
    fn begin_page(&mut self, metadata: &DrawingMetadata, page_size: PageSize)
    -> Result<(), RenderError>;

    fn draw_rect(&mut self, rect: Rect, style: RenderStyle) -> Result<(), RenderError>;

    fn draw_line(&mut self, from: Point, to: Point, style: RenderStyle) -> Result<(), RenderError>;

    fn draw_text(
        &mut self,
        at: Point,
        text: &str,
        style: RenderStyle,
        rotation: f64,
    ) -> Result<(), RenderError>;

    /// A horizontal dimension string between `x1` and `x2` at height `y_base`.
    fn draw_dimension(
        &mut self,
        x1: f64,
        x2: f64,
        y_base: f64,
        text: &str,
        style: RenderStyle,
    ) -> Result<(), RenderError>;

    fn draw_polyline(
        &mut self,
        points: &[Point],
        style: RenderStyle,
        closed: bool,
    ) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    fn save(&mut self, path: &Path) -> Result<(), RenderError>;
}
