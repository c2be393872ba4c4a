mod args;
mod mirror;
mod params;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use mirror::run_mirror;
pub use params::MirrorParams;
pub use resolved_command::{ResolvedCommand, resolve_command};
