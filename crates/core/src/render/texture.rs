use asset_viewer_api::{AssetKind, AssetRenderer};

const SCRIPT: &str = r#"
function render(asset, url, thumb, meta) {
  const img = new Image();
  img.alt = asset.name;
  img.onload = () => {
    meta.textContent = img.naturalWidth + "x" + img.naturalHeight;
  };
  img.onerror = () => {
    meta.textContent = "Error";
  };
  img.src = url;
  thumb.appendChild(img);
}
"#;

/// Draws textures as plain `<img>` elements.
#[derive(Debug, Default)]
pub struct TextureRenderer;

impl TextureRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl AssetRenderer for TextureRenderer {
    fn kind(&self) -> AssetKind {
        AssetKind::Texture
    }

    fn name(&self) -> &str {
        "Image Texture Renderer"
    }

    fn script(&self) -> &str {
        SCRIPT
    }
}
