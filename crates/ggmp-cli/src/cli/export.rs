//! Export Command Implementation

use std::path::Path;

use anyhow::Result;
use ggmp_config::resolve_table;
use tracing::info;

use crate::cli::Cli;

/// Run the export command
pub fn run(cli: &Cli, output: Option<&Path>) -> Result<()> {
    let external = super::load_external(cli)?;
    let table = resolve_table(&external)?;
    let contents = table.to_env_format();

    match output {
        Some(path) => {
            std::fs::write(path, format!("{contents}\n"))?;
            info!(path = %path.display(), constants = table.len(), "exported resolved table");
        }
        None => println!("{contents}"),
    }

    Ok(())
}
