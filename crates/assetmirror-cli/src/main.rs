use assetmirror_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_mirror};
use assetmirror_lib::error::AssetMirrorError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), AssetMirrorError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Mirror(params) => run_mirror(params).await?,
    }

    Ok(())
}
