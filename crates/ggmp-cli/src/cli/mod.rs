//! CLI Command Definitions
//!
//! Defines the command-line interface using clap.

pub mod check;
pub mod export;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ggmp_config::{ExternalDefines, keys};

/// GGMP - Game Global Multiplayer Platform configuration tool
///
/// Resolves the effective GGMP constant table from compiled-in defaults and
/// externally supplied definitions (environment variables and defines
/// files), then inspects, validates, or exports it.
#[derive(Parser, Debug)]
#[command(name = "ggmp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defines file with externally supplied constants (.toml or KEY=VALUE)
    #[arg(long, global = true, value_name = "FILE")]
    pub defines: Option<PathBuf>,

    /// Ignore externally supplied values from the process environment
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Resolve with GGMP mode disabled (the override layer stays inert)
    #[arg(long, global = true)]
    pub disabled: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved constant table
    ///
    /// Prints every effective constant with its value, the table that
    /// defined it, and whether it replaced an earlier definition.
    #[command(visible_alias = "s")]
    Show {
        /// Emit the full resolved configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the build configuration
    ///
    /// Resolves the table and fails on definition conflicts or malformed
    /// external values; reports whether the override layer is active.
    #[command(visible_alias = "c")]
    Check,

    /// Export the resolved table as KEY=VALUE lines
    ///
    /// Suitable for consumption by build tooling; writes to stdout unless
    /// an output file is given.
    #[command(visible_alias = "e")]
    Export {
        /// File to write instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Collects the externally supplied definitions selected by the CLI flags.
///
/// Environment and file definitions are merged with conflict checking; the
/// `--disabled` switch forces the enable flag off afterwards.
pub fn load_external(cli: &Cli) -> anyhow::Result<ExternalDefines> {
    let mut external = if cli.no_env {
        ExternalDefines::new()
    } else {
        ExternalDefines::from_env()?
    };

    match &cli.defines {
        Some(path) => {
            let is_toml = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
            let from_file = if is_toml {
                ExternalDefines::load(path)?
            } else {
                ExternalDefines::from_env_file(path)?
            };
            external.merge(from_file)?;
        }
        None => {
            let default_path = ExternalDefines::default_defines_path();
            if default_path.exists() {
                external.merge(ExternalDefines::load(&default_path)?)?;
            }
        }
    }

    if cli.disabled {
        external.set(keys::GGMP_ENABLED, false);
    }

    Ok(external)
}
