use super::kind::AssetKind;
use serde::{Deserialize, Serialize};

/// URL prefix under which asset bytes are served.
pub const ASSETS_ROUTE: &str = "/assets";

/// One discovered asset, as handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRecord {
    /// File name without the matched extension
    pub name: String,
    /// File name including the extension
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// Base-relative path with forward slashes and a single leading `/`
    pub path: String,
}

impl AssetRecord {
    /// URL the asset bytes can be fetched from.
    pub fn url(&self) -> String {
        format!("{}{}", ASSETS_ROUTE, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let record = AssetRecord {
            name: "door".to_string(),
            filename: "door.gltf".to_string(),
            kind: AssetKind::Model,
            path: "/sub/door.gltf".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "door",
                "filename": "door.gltf",
                "type": "model",
                "path": "/sub/door.gltf",
            })
        );
        assert_eq!(record.url(), "/assets/sub/door.gltf");
    }
}
