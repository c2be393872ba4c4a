mod mirror;
mod types;

pub use mirror::{build_client, mirror_all};
pub use types::{ItemOutcome, MirrorOptions, MirrorReport};
