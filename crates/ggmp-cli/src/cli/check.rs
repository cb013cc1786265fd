//! Check Command Implementation

use anyhow::{Context, Result};
use ggmp_config::{PlatformConfig, keys};

use crate::cli::Cli;

/// Run the check command
pub fn run(cli: &Cli) -> Result<()> {
    let external = super::load_external(cli)?;
    let config = PlatformConfig::resolve(&external)
        .context("build configuration failed to resolve")?;

    println!(
        "ok: {} constants resolved, {} supplied externally",
        config.defines.len(),
        external.len()
    );

    if config.ggmp_enabled {
        println!("GGMP mode enabled: platform endpoints redirected");
        for key in [
            keys::CFX_KEYMASTER_URL,
            keys::CFX_POLICY_URL,
            keys::CFX_NUCLEUS_URL,
            keys::POLICY_LIVE_ENDPOINT,
        ] {
            if let Some(define) = config.defines.get(key) {
                let note = if define.overridden { " (overrode external value)" } else { "" };
                println!("  {key} = {}{note}", define.value);
            }
        }
    } else {
        println!("GGMP mode disabled: override layer inert");
        for key in [
            keys::PRODUCT_NAME,
            keys::CFX_KEYMASTER_URL,
            keys::CFX_POLICY_URL,
            keys::CFX_NUCLEUS_URL,
            keys::POLICY_LIVE_ENDPOINT,
        ] {
            match config.defines.get(key) {
                Some(define) => println!("  {key} = {} ({})", define.value, define.origin),
                None => println!("  {key} is undefined"),
            }
        }
    }

    Ok(())
}
