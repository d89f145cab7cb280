// src/error.rs
use millwork_config::ConfigError;
use millwork_executor::ExecutorError;
use millwork_render_core::RenderError;
use thiserror::Error;

/// A comprehensive error type for the room-to-drawing pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Executor setup failed: {0}")]
    Executor(#[from] ExecutorError),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}
