//! GGMP Configuration CLI
//!
//! Command-line interface for resolving, validating, and exporting the
//! effective GGMP constant table.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Execute command
    match &cli.command {
        Commands::Show { json } => {
            cli::show::run(&cli, *json)?;
        }
        Commands::Check => {
            cli::check::run(&cli)?;
        }
        Commands::Export { output } => {
            cli::export::run(&cli, output.as_deref())?;
        }
    }

    Ok(())
}
