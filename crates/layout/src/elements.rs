use crate::output::{CountertopPlacement, FillerPlacement, LayoutResult, ModulePlacement};
use millwork_types::{Rect, RenderStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearanceKind {
    Knee,
    Toe,
}

/// The closed set of things a layout places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutElement<'a> {
    Module(&'a ModulePlacement),
    Filler(&'a FillerPlacement),
    Countertop(&'a CountertopPlacement),
    AdaBox(ClearanceKind),
}

/// An element with its elevation rectangle and default drawing style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedElement<'a> {
    pub element: LayoutElement<'a>,
    pub bounds: Rect,
    pub style: RenderStyle,
}

impl LayoutResult {
    /// Modules, fillers, the countertop (when it has extent) and any clearance
    /// boxes, in that order.
    pub fn elements(&self) -> Vec<PositionedElement<'_>> {
        let mut out = Vec::with_capacity(self.modules.len() + self.fillers.len() + 3);

        out.extend(self.modules.iter().map(|module| PositionedElement {
            element: LayoutElement::Module(module),
            bounds: module.rect(),
            style: RenderStyle::MediumLine,
        }));
        out.extend(self.fillers.iter().map(|filler| PositionedElement {
            element: LayoutElement::Filler(filler),
            bounds: filler.rect(),
            style: RenderStyle::ThinLine,
        }));

        if self.countertop.width > 0.0 {
            out.push(PositionedElement {
                element: LayoutElement::Countertop(&self.countertop),
                bounds: self.countertop.elevation_rect(),
                style: RenderStyle::ThickLine,
            });
        }

        if let Some(ada) = &self.ada_geometry {
            out.push(PositionedElement {
                element: LayoutElement::AdaBox(ClearanceKind::Knee),
                bounds: ada.knee_box,
                style: RenderStyle::HiddenLine,
            });
            out.push(PositionedElement {
                element: LayoutElement::AdaBox(ClearanceKind::Toe),
                bounds: ada.toe_box,
                style: RenderStyle::HiddenLine,
            });
        }

        out
    }
}
