use serde::{Deserialize, Serialize};

/// Texture manifest: every image the scene needs, loaded from a JSON
/// string at startup. Slot indices follow manifest order, so the JS
/// loader and the registry agree on numbering without negotiation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    pub textures: Vec<TextureDescriptor>,
}

/// One texture entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Name game code refers to (e.g., "earth").
    pub name: String,
    /// Relative path to the image file (e.g., "earth.jpg").
    pub path: String,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let json = r#"{
            "textures": [
                { "name": "sun", "path": "sun.jpg" },
                { "name": "earth", "path": "earth.jpg" }
            ]
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures[0].name, "sun");
        assert_eq!(manifest.textures[1].path, "earth.jpg");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TextureManifest::from_json("{ not json").is_err());
    }
}
