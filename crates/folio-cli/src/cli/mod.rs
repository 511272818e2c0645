//! CLI entry and dispatch.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::{self, Config};
use folio_core::{interrupt, logging};
use tracing::info;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A terminal portfolio with a typewriter headline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the portfolio full-screen (default)
    View,
    /// Run the typewriter headline on its own
    Type {
        /// Stop after this many phrases have been shown and cleared (0 = run until Ctrl+C)
        #[arg(long, default_value_t = 1)]
        cycles: u64,

        /// Use simulated time and print a timestamped line per change
        #[arg(long)]
        simulate: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print the effective configuration
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::View);

    // Config commands must keep working when the config file is broken.
    if let Commands::Config { command } = command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(),
        };
    }

    let config = Config::load().context("load config")?;
    let _log_guard = logging::init(&config.logging, &config::paths::logs_dir())?;
    interrupt::init()?;
    info!(?command, "folio starting");

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(command, &config).await })
}

async fn dispatch(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::View => commands::view::run(config).await,
        Commands::Type {
            cycles,
            simulate: true,
        } => commands::typewriter::simulate(config, cycles, &mut io::stdout()),
        Commands::Type {
            cycles,
            simulate: false,
        } => commands::typewriter::run_live(config, cycles).await,
        Commands::Config { .. } => Ok(()),
    }
}
