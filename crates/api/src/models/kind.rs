use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extensions (lowercase, with the leading dot) recognised as 3D models.
pub const MODEL_EXTENSIONS: &[&str] = &[".glb", ".gltf"];

/// Extensions (lowercase, with the leading dot) recognised as textures.
pub const TEXTURE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".webp"];

/// The kind of a previewable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Model,
    Texture,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Model, AssetKind::Texture];

    /// Map a file extension to an asset kind.
    ///
    /// Accepts the extension with or without its leading dot and in any case.
    /// Returns `None` for anything outside the allow-list; callers treat that
    /// as "not an asset", never as an error.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let dotted = format!(".{}", ext.strip_prefix('.').unwrap_or(ext).to_lowercase());
        Self::ALL
            .into_iter()
            .find(|kind| kind.extensions().contains(&dotted.as_str()))
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Model => MODEL_EXTENSIONS,
            Self::Texture => TEXTURE_EXTENSIONS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Texture => "texture",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model" => Ok(Self::Model),
            "texture" => Ok(Self::Texture),
            other => Err(ApiError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_extensions() {
        assert_eq!(AssetKind::from_extension("glb"), Some(AssetKind::Model));
        assert_eq!(AssetKind::from_extension(".gltf"), Some(AssetKind::Model));
        assert_eq!(AssetKind::from_extension("GLB"), Some(AssetKind::Model));
    }

    #[test]
    fn test_texture_extensions() {
        for ext in ["png", "jpg", ".JPEG", "WebP"] {
            assert_eq!(AssetKind::from_extension(ext), Some(AssetKind::Texture), "{ext}");
        }
    }

    #[test]
    fn test_unknown_extensions() {
        for ext in ["txt", "", ".", "gif", "fbx", "glb.bak"] {
            assert_eq!(AssetKind::from_extension(ext), None, "{ext}");
        }
    }

    #[test]
    fn test_tables_agree_with_mapping() {
        for kind in AssetKind::ALL {
            for ext in kind.extensions() {
                assert_eq!(AssetKind::from_extension(ext), Some(kind));
            }
        }
    }

    #[test]
    fn test_every_table_spelling_accepted() {
        for kind in AssetKind::ALL {
            for ext in kind.extensions() {
                let bare = &ext[1..];
                assert_eq!(AssetKind::from_extension(bare), Some(kind), "{bare}");
                assert_eq!(
                    AssetKind::from_extension(&ext.to_uppercase()),
                    Some(kind),
                    "{ext}"
                );
            }
        }
        assert_eq!(AssetKind::from_extension("..glb"), None);
    }

    #[test]
    fn test_string_forms() {
        assert_eq!(AssetKind::Model.to_string(), "model");
        assert_eq!("texture".parse::<AssetKind>().unwrap(), AssetKind::Texture);
        assert!("sound".parse::<AssetKind>().is_err());
        assert_eq!(
            serde_json::to_string(&AssetKind::Texture).unwrap(),
            "\"texture\""
        );
    }
}
