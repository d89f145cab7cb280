use millwork_types::UnknownPageSize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    PageSize(#[from] UnknownPageSize),
    #[error("No page is open")]
    NoOpenPage,
    #[error("A page is already open for room '{0}'")]
    PageAlreadyOpen(String),
    #[error("Room '{room_id}' has {error_count} consistency error(s); strict mode refuses to draw it")]
    InconsistentLayout { room_id: String, error_count: usize },
}
