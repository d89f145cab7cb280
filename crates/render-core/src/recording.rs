use crate::error::RenderError;
use crate::traits::DrawingRenderer;
use crate::types::DrawingMetadata;
use millwork_types::{PageSize, Point, Rect, RenderStyle};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// One captured drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        style: RenderStyle,
    },
    Line {
        from: Point,
        to: Point,
        style: RenderStyle,
    },
    Text {
        at: Point,
        text: String,
        style: RenderStyle,
        rotation: f64,
    },
    Dimension {
        x1: f64,
        x2: f64,
        y_base: f64,
        text: String,
        style: RenderStyle,
    },
    Polyline {
        points: Vec<Point>,
        style: RenderStyle,
        closed: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedPage {
    pub metadata: DrawingMetadata,
    pub page_size: PageSize,
    pub commands: Vec<DrawCommand>,
}

/// A backend that keeps every call in memory and saves them as JSON.
///
/// Useful for tests, and as a neutral interchange for backends living
/// outside this workspace.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pages: Vec<RecordedPage>,
    current: Option<RecordedPage>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished pages, in order.
    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<RecordedPage> {
        self.pages
    }

    /// Text of every `Text` command on finished pages.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| &page.commands)
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        let page = self.current.as_mut().ok_or(RenderError::NoOpenPage)?;
        page.commands.push(command);
        Ok(())
    }
}

impl DrawingRenderer for RecordingRenderer {
    fn begin_page(
        &mut self,
        metadata: &DrawingMetadata,
        page_size: PageSize,
    ) -> Result<(), RenderError> {
        if let Some(open) = &self.current {
            return Err(RenderError::PageAlreadyOpen(open.metadata.room_id.clone()));
        }
        self.current = Some(RecordedPage {
            metadata: metadata.clone(),
            page_size,
            commands: Vec::new(),
        });
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, style: RenderStyle) -> Result<(), RenderError> {
        self.record(DrawCommand::Rect { rect, style })
    }

    fn draw_line(&mut self, from: Point, to: Point, style: RenderStyle) -> Result<(), RenderError> {
        self.record(DrawCommand::Line { from, to, style })
    }

    fn draw_text(
        &mut self,
        at: Point,
        text: &str,
        style: RenderStyle,
        rotation: f64,
    ) -> Result<(), RenderError> {
        self.record(DrawCommand::Text {
            at,
            text: text.to_string(),
            style,
            rotation,
        })
    }

    fn draw_dimension(
        &mut self,
        x1: f64,
        x2: f64,
        y_base: f64,
        text: &str,
        style: RenderStyle,
    ) -> Result<(), RenderError> {
        self.record(DrawCommand::Dimension {
            x1,
            x2,
            y_base,
            text: text.to_string(),
            style,
        })
    }

    fn draw_polyline(
        &mut self,
        points: &[Point],
        style: RenderStyle,
        closed: bool,
    ) -> Result<(), RenderError> {
        self.record(DrawCommand::Polyline {
            points: points.to_vec(),
            style,
            closed,
        })
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self.current.take().ok_or(RenderError::NoOpenPage)?;
        log::debug!(
            "Recorded {} draw commands for room '{}'",
            page.commands.len(),
            page.metadata.room_id
        );
        self.pages.push(page);
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &self.pages)?;
        Ok(())
    }
}
