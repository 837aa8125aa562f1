//! Built-in thumbnail renderers, one per asset kind.

mod model;
mod texture;

pub use model::{ModelRenderer, THREE_VERSION};
pub use texture::TextureRenderer;
