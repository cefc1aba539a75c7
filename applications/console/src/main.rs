/// Halcyon console - host a player session outside the browser
use clap::{Parser, Subcommand};
use halcyon_console::{ConsoleConfig, RunMode, Session};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "halcyon-console")]
#[command(about = "Halcyon music player session host", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./halcyon.toml when present)
    #[arg(short, long, env = "HALCYON_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a command script, stopping at the first malformed line
    Run {
        /// Script path, one command per line
        script: PathBuf,
    },
    /// Read commands from stdin
    Interactive,
    /// List catalog tracks
    Catalog,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ConsoleConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let catalog = config.load_catalog()?;

    match cli.command {
        Commands::Run { script } => {
            let session = Session::new(&config.playback, catalog);
            let input = BufReader::new(File::open(&script)?);
            let summary = session.run(input, &mut io::stdout(), RunMode::Script)?;
            tracing::info!(
                "Script {} finished: {} executed, {} skipped",
                script.display(),
                summary.executed,
                summary.skipped
            );
        }
        Commands::Interactive => {
            let session = Session::new(&config.playback, catalog);
            session.run(io::stdin().lock(), &mut io::stdout(), RunMode::Interactive)?;
        }
        Commands::Catalog => {
            for track in &catalog {
                println!(
                    "{:<16} {} - {} [{}]",
                    track.id.as_str(),
                    track.title,
                    track.artist,
                    track.source.platform
                );
            }
        }
    }

    Ok(())
}
