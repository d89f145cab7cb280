//! Core rendering abstractions for millwork shop drawings.
//!
//! This crate provides:
//! - `DrawingRenderer`, the backend-neutral drawing port
//! - `ShopDrawingGenerator`, which lays a computed room out on a sheet
//! - `RecordingRenderer`, a backend that captures draw calls as data
//! - Error types for rendering operations

mod error;
mod generator;
mod recording;
mod traits;
mod types;

pub use error::RenderError;
pub use generator::{GenerationPolicy, ShopDrawingGenerator, sheet_file_name};
pub use recording::{DrawCommand, RecordedPage, RecordingRenderer};
pub use traits::DrawingRenderer;
pub use types::{APP_VERSION, DrawingMetadata};
