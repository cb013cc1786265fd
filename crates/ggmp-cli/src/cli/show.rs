//! Show Command Implementation

use anyhow::Result;
use ggmp_config::PlatformConfig;

use crate::cli::Cli;

/// Run the show command
pub fn run(cli: &Cli, json: bool) -> Result<()> {
    let external = super::load_external(cli)?;
    let config = PlatformConfig::resolve(&external)?;

    if json {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    println!();
    println!(
        "{} {} ({})",
        config.product_name, config.product_version, config.product_full_name
    );
    println!(
        "GGMP mode: {}",
        if config.ggmp_enabled { "enabled" } else { "disabled" }
    );
    println!();

    for define in config.defines.iter() {
        let marker = if define.overridden { "*" } else { " " };
        println!(
            "  {marker} {:<24} [{:<9}] = {}",
            define.key,
            define.origin.to_string(),
            define.value
        );
    }

    println!();
    println!("  * replaced an earlier definition");

    Ok(())
}
