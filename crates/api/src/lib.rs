pub mod error;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use render::{AssetRenderer, RendererRegistry};
