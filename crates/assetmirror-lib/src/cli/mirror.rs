use crate::cli::MirrorParams;
use crate::download::{build_client, mirror_all};
use crate::error::AssetMirrorError;
use crate::layout::AssetLayout;
use tracing;

/// Runs the mirror pass. Per-item failures are logged by the download loop
/// and never turn into a non-zero exit; only setup failures propagate.
pub async fn run_mirror(params: MirrorParams) -> Result<(), AssetMirrorError> {
    let MirrorParams {
        manifest,
        assets_root,
        options,
    } = params;

    tracing::info!(
        "Mirroring {} assets into {}",
        manifest.assets.len(),
        assets_root.display()
    );

    let layout = AssetLayout::new(assets_root);
    let client = build_client(&options)?;

    let report = mirror_all(&client, &manifest.assets, &layout, &options).await?;

    tracing::info!(
        "Done: {} downloaded, {} skipped, {} failed. Check {} for downloaded files",
        report.downloaded,
        report.skipped,
        report.failed,
        layout.root().display()
    );
    Ok(())
}
