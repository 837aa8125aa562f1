pub mod asset;
pub mod kind;

pub use asset::{ASSETS_ROUTE, AssetRecord};
pub use kind::{AssetKind, MODEL_EXTENSIONS, TEXTURE_EXTENSIONS};
