//! SkyTally CLI - Command-line interface
//!
//! Polls a local ADS-B decoder and keeps a daily aircraft report up to date
//! in a Discord channel.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;

#[derive(Parser)]
#[command(name = "skytally")]
#[command(version = skytally::VERSION)]
#[command(about = "Daily aircraft sighting reports for Discord", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the feed and update the report until interrupted (Ctrl+C)
    Run,

    /// Run a single poll cycle and exit
    Once {
        /// Print the report pages instead of posting them
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the identity an ICAO hex resolves to
    Lookup {
        /// 24-bit ICAO address, e.g. 4ca1fa
        hex: String,
    },

    /// View or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => commands::run::run(cli.debug).await,
        Commands::Once { dry_run } => commands::once::run(dry_run, cli.debug).await,
        Commands::Lookup { hex } => commands::lookup::run(&hex, cli.debug),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
