use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process configuration, resolved once at startup and immutable afterwards.
/// Defaults reproduce the zero-argument invocation: `metadata.json` next to
/// the working directory, mirrored into `assets/`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MirrorConfig {
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
    #[serde(default = "default_assets_root")]
    pub assets_root: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            assets_root: default_assets_root(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("metadata.json")
}

fn default_assets_root() -> PathBuf {
    PathBuf::from("assets")
}

fn default_timeout_secs() -> u64 {
    30
}
