//! arc-sidebar CLI - inspect Arc's sidebar file from the command line

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "arc-sidebar")]
#[command(about = "arc-sidebar: map Arc saved tabs to their sidebar folder paths", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the arc-sidebar CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
