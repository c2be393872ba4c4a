use crate::error::AssetMirrorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of the manifest's `assets` array.
///
/// Every field is optional at the serde level: the loader does not validate
/// descriptor shape, so a malformed descriptor parses here and fails later,
/// per item, inside the mirror loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetDescriptor {
    /// Remote resource location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Explicit destination filename; derived from the URL when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Category tag driving directory selection (e.g. "font", "icon", "logo").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// The asset manifest: a JSON document whose `assets` key holds the ordered
/// list of descriptors to mirror. Other top-level keys are ignored; the same
/// file typically carries unrelated page metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub assets: Vec<AssetDescriptor>,
}

impl Manifest {
    pub fn load_from_file(path: &Path) -> Result<Self, AssetMirrorError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AssetMirrorError::ManifestLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|e| AssetMirrorError::ManifestLoad {
                path: path.to_path_buf(),
                reason: format!("JSON parsing failed: {}", e),
            })?;
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("metadata.json");
        std::fs::write(&path, contents).expect("write manifest");
        (dir, path)
    }

    #[test]
    fn test_parses_descriptors_in_order() {
        let (_dir, path) = write_manifest(
            r#"{
                "assets": [
                    {"url": "https://example.com/a.png", "type": "image"},
                    {"url": "https://example.com/b.woff2", "filename": "b.woff2", "type": "font"}
                ]
            }"#,
        );

        let manifest = Manifest::load_from_file(&path).expect("manifest should parse");
        assert_eq!(manifest.assets.len(), 2);
        assert_eq!(
            manifest.assets[0].url.as_deref(),
            Some("https://example.com/a.png")
        );
        assert_eq!(manifest.assets[1].kind.as_deref(), Some("font"));
        assert_eq!(manifest.assets[1].filename.as_deref(), Some("b.woff2"));
    }

    #[test]
    fn test_missing_assets_key_yields_empty_list() {
        let (_dir, path) = write_manifest(r#"{"title": "Some page", "version": 3}"#);

        let manifest = Manifest::load_from_file(&path).expect("manifest should parse");
        assert!(manifest.assets.is_empty());
    }

    #[test]
    fn test_descriptor_without_url_still_parses() {
        let (_dir, path) = write_manifest(r#"{"assets": [{"type": "logo"}]}"#);

        let manifest = Manifest::load_from_file(&path).expect("manifest should parse");
        assert_eq!(manifest.assets.len(), 1);
        assert!(manifest.assets[0].url.is_none());
    }

    #[test]
    fn test_invalid_json_is_a_load_error() {
        let (_dir, path) = write_manifest("{not json");

        let err = Manifest::load_from_file(&path).expect_err("parse should fail");
        match err {
            AssetMirrorError::ManifestLoad { path: p, reason } => {
                assert_eq!(p, path);
                assert!(reason.contains("JSON parsing failed"));
            }
            other => panic!("Unexpected error variant: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does-not-exist.json");

        let err = Manifest::load_from_file(&path).expect_err("load should fail");
        assert!(matches!(err, AssetMirrorError::ManifestLoad { .. }));
    }
}
