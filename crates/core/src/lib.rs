pub mod catalog;
pub mod classify;
pub mod collate;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod scanner;

pub use catalog::AssetCatalog;
pub use classify::classify;
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use scanner::scan;
