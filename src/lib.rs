//! Millwork shop-drawing pipeline.
//!
//! Rooms go through the parametric layout engine one independent task at a
//! time; the resulting layouts are summarised and handed to any
//! [`DrawingRenderer`] through the [`ShopDrawingGenerator`].
//!
//! ```ignore
//! use millwork::{BatchProcessor, MillworkConfig, RecordingRenderer};
//!
//! let processor = BatchProcessor::new(MillworkConfig::load_json_str(&config_json)?)?;
//! let outcome = processor.process(rooms);
//! println!("{}", outcome.summary.to_json_string()?);
//! let sheets = processor.draw_all(&outcome, out_dir, |_| {
//!     RecordingRenderer::new()
//! });
//! ```

pub mod batch;
pub mod error;
pub mod report;

pub use batch::{BatchOptions, BatchOutcome, BatchProcessor, DUPLICATE_ROOM_ID};
pub use error::PipelineError;
pub use report::{BatchSummary, MAX_SUMMARY_MESSAGES, RoomErrorReport, RoomStatus};

pub use millwork_config::{AdaConfig, ConfigError, MillworkConfig};
pub use millwork_executor::{Executor, ExecutorImpl, SyncExecutor};
#[cfg(feature = "rayon")]
pub use millwork_executor::RayonExecutor;
pub use millwork_layout::{
    ConsistencyResult, FillerSide, LayoutElement, LayoutResult, PositionedElement, RoomSpec,
    ValidationIssue, compute_layout, validate_geometry,
};
pub use millwork_render_core::{
    DrawCommand, DrawingMetadata, DrawingRenderer, GenerationPolicy, RecordingRenderer,
    RenderError, ShopDrawingGenerator,
};
