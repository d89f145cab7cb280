pub mod geometry;
pub mod page;
pub mod room;
pub mod style;
pub mod validation;

pub use geometry::{Point, Rect};
pub use page::{PageSize, UnknownPageSize};
pub use room::RoomSpec;
pub use style::RenderStyle;
pub use validation::{ConsistencyResult, IssueSeverity, ValidationIssue};
