use crate::cli::args::Command;
use crate::cli::params::MirrorParams;
use crate::config::{MirrorConfig, load_config};
use crate::download::MirrorOptions;
use crate::error::AssetMirrorError;
use crate::manifest::Manifest;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Mirror(MirrorParams),
}

/// Resolves CLI arguments and the optional config file into run parameters.
/// The manifest is loaded here, before any directory is created, so a parse
/// failure aborts the run without touching the filesystem.
pub fn resolve_command(command: Command) -> Result<ResolvedCommand, AssetMirrorError> {
    match command {
        Command::Mirror {
            config_path,
            manifest_path,
            assets_root,
            timeout_secs,
        } => {
            let file_config = match config_path {
                Some(config_path) => load_config(&config_path)?,
                None => MirrorConfig::default(),
            };

            let manifest_path = manifest_path
                .map(PathBuf::from)
                .unwrap_or(file_config.manifest_path);
            let assets_root = assets_root
                .map(PathBuf::from)
                .unwrap_or(file_config.assets_root);
            let timeout_secs = timeout_secs.unwrap_or(file_config.timeout_secs);

            if timeout_secs == 0 {
                return Err(AssetMirrorError::CliArgumentValidation {
                    details: "timeout-secs must be greater than 0.".to_string(),
                });
            }

            let manifest = Manifest::load_from_file(&manifest_path)?;

            Ok(ResolvedCommand::Mirror(MirrorParams {
                manifest,
                assets_root,
                options: MirrorOptions {
                    timeout: Duration::from_secs(timeout_secs),
                    ..MirrorOptions::default()
                },
            }))
        }
    }
}
