use crate::download::MirrorOptions;
use crate::manifest::Manifest;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MirrorParams {
    pub manifest: Manifest,
    pub assets_root: PathBuf,
    pub options: MirrorOptions,
}
