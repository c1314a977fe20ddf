//! Elevate CLI.
//!
//! Renders navigation menus and replays interaction scripts against the
//! menu state machine.

mod commands;
mod error;
mod output;
mod script;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{RenderArgs, SimulateArgs};
use crate::output::Output;

#[derive(Parser)]
#[command(name = "elevate")]
#[command(about = "Elevate navigation menu renderer and simulator")]
#[command(version)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the menu to stdout.
    Render(RenderArgs),
    /// Replay an event script against the menu.
    Simulate(SimulateArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Simulate(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
