use super::types::{ItemOutcome, MirrorOptions, MirrorReport};
use crate::error::AssetMirrorError;
use crate::layout::AssetLayout;
use crate::manifest::AssetDescriptor;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

pub fn build_client(options: &MirrorOptions) -> Result<reqwest::Client, AssetMirrorError> {
    reqwest::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(Into::into)
}

/// Mirrors every descriptor, strictly in order and one at a time. Per-item
/// failures are logged and counted; only layout creation can fail the run.
pub async fn mirror_all(
    client: &reqwest::Client,
    assets: &[AssetDescriptor],
    layout: &AssetLayout,
    options: &MirrorOptions,
) -> Result<MirrorReport, AssetMirrorError> {
    layout.ensure_directories()?;

    let mut report = MirrorReport::default();
    for descriptor in assets {
        let outcome = match mirror_one(client, descriptor, layout, options).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let url = descriptor.url.as_deref().unwrap_or("<missing url>");
                warn!(url = %url, error = %err, "Failed to mirror asset");
                ItemOutcome::Failed
            }
        };
        report.record(outcome);
    }

    info!(
        downloaded = report.downloaded,
        skipped = report.skipped,
        failed = report.failed,
        "Mirror run complete"
    );
    Ok(report)
}

async fn mirror_one(
    client: &reqwest::Client,
    descriptor: &AssetDescriptor,
    layout: &AssetLayout,
    options: &MirrorOptions,
) -> Result<ItemOutcome, AssetMirrorError> {
    let destination = layout.destination(descriptor)?;
    // destination() has already rejected descriptors without a url.
    let url = descriptor
        .url
        .as_deref()
        .ok_or_else(|| AssetMirrorError::AssetResolution {
            url: "<missing url>".to_string(),
            reason: "descriptor has no url".to_string(),
        })?;

    if destination.exists() {
        info!(url = %url, path = %destination.display(), "Exists, skipping");
        return Ok(ItemOutcome::Skipped);
    }

    info!(url = %url, path = %destination.display(), "Downloading");

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| AssetMirrorError::AssetDownload {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let mut stream = response.bytes_stream();
    let file = tokio::fs::File::create(&destination).await.map_err(|e| {
        AssetMirrorError::AssetDownload {
            url: url.to_string(),
            reason: format!("failed to create {}: {}", destination.display(), e),
        }
    })?;
    let mut writer = tokio::io::BufWriter::with_capacity(options.chunk_size, file);

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| AssetMirrorError::AssetDownload {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| AssetMirrorError::AssetDownload {
                url: url.to_string(),
                reason: format!("failed to write {}: {}", destination.display(), e),
            })?;
    }

    writer
        .flush()
        .await
        .map_err(|e| AssetMirrorError::AssetDownload {
            url: url.to_string(),
            reason: format!("failed to flush {}: {}", destination.display(), e),
        })?;

    Ok(ItemOutcome::Downloaded)
}
