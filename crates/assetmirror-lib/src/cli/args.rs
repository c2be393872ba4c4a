use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Mirror {
        config_path: Option<String>,
        manifest_path: Option<String>,
        assets_root: Option<String>,
        timeout_secs: Option<u64>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "assetmirror",
    version,
    about = "Mirror remote assets listed in a manifest into categorized local directories, skipping files already present"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Read the asset manifest and download every asset not already on disk
    Mirror {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Optional config file providing manifest path, assets root and timeout"
        )]
        config: Option<String>,

        #[arg(
            short = 'm',
            long = "manifest",
            value_name = "FILE",
            help = "Overrides the manifest path (default: metadata.json)"
        )]
        manifest: Option<String>,

        #[arg(
            short = 'r',
            long = "root",
            value_name = "DIR",
            help = "Overrides the assets root directory (default: assets)"
        )]
        root: Option<String>,

        #[arg(
            long = "timeout-secs",
            value_name = "SECS",
            help = "Network timeout per asset, in seconds (default: 30)"
        )]
        timeout_secs: Option<u64>,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = match cli.command {
        CliCommand::Mirror {
            config,
            manifest,
            root,
            timeout_secs,
        } => Command::Mirror {
            config_path: config,
            manifest_path: manifest,
            assets_root: root,
            timeout_secs,
        },
    };

    Args { command, log_level }
}
