pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod layout;
pub mod manifest;

pub use config::MirrorConfig;
pub use error::AssetMirrorError;
