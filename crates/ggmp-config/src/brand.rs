//! Branding Constants
//!
//! Single source of truth for GGMP product naming and branding. UI, window
//! title, and support-link code consumes these through the resolved table.

use tracing::debug;

use crate::defines::{DefineTable, Origin};
use crate::error::Result;
use crate::keys;

/// Product display name
pub const PRODUCT_NAME: &str = "GGMP";

/// Full product name
pub const PRODUCT_FULL_NAME: &str = "Game Global Multiplayer Platform";

/// Product version string
pub const PRODUCT_VERSION: &str = "1.0.0";

/// Main window title
pub const WINDOW_TITLE: &str = "GGMP - Game Global Multiplayer Platform";

/// Server console title
pub const SERVER_TITLE: &str = "GGMP Server";

/// Client window title
pub const CLIENT_TITLE: &str = "GGMP Client";

/// Project website
pub const WEBSITE_URL: &str = "https://github.com/Snozxyx/fivem";

/// Platform documentation
pub const DOCUMENTATION_URL: &str = "https://github.com/Snozxyx/fivem/blob/master/docs/GGMP.md";

/// Issue tracker / support link
pub const SUPPORT_URL: &str = "https://github.com/Snozxyx/fivem/issues";

/// Stages the branding table into `table`.
///
/// Branding keys are unconditional defines, so a conflicting external
/// redefinition fails resolution. When `enabled`, the platform's own
/// `PRODUCT_NAME` constant is replaced with the GGMP product name; an unset
/// flag leaves that override inert.
pub fn apply(table: &mut DefineTable, enabled: bool) -> Result<()> {
    table.define(keys::GGMP_PRODUCT_NAME, PRODUCT_NAME, Origin::Branding)?;
    table.define(keys::GGMP_PRODUCT_FULL_NAME, PRODUCT_FULL_NAME, Origin::Branding)?;
    table.define(keys::GGMP_PRODUCT_VERSION, PRODUCT_VERSION, Origin::Branding)?;
    table.define(keys::GGMP_WINDOW_TITLE, WINDOW_TITLE, Origin::Branding)?;
    table.define(keys::GGMP_SERVER_TITLE, SERVER_TITLE, Origin::Branding)?;
    table.define(keys::GGMP_CLIENT_TITLE, CLIENT_TITLE, Origin::Branding)?;
    table.define(keys::GGMP_WEBSITE_URL, WEBSITE_URL, Origin::Branding)?;
    table.define(keys::GGMP_DOCUMENTATION_URL, DOCUMENTATION_URL, Origin::Branding)?;
    table.define(keys::GGMP_SUPPORT_URL, SUPPORT_URL, Origin::Branding)?;

    if enabled {
        table.redefine(keys::PRODUCT_NAME, PRODUCT_NAME, Origin::Branding);
        debug!(product = PRODUCT_NAME, "replaced platform product name");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_literals_resolve() {
        let mut table = DefineTable::new();
        apply(&mut table, false).unwrap();

        assert_eq!(table.get_str(keys::GGMP_PRODUCT_NAME), Some(PRODUCT_NAME));
        assert_eq!(table.get_str(keys::GGMP_WINDOW_TITLE), Some(WINDOW_TITLE));
        assert_eq!(table.get_str(keys::GGMP_SUPPORT_URL), Some(SUPPORT_URL));
        // Override stays inert when disabled
        assert!(!table.contains(keys::PRODUCT_NAME));
    }

    #[test]
    fn test_product_name_override_when_enabled() {
        let mut table = DefineTable::new();
        table
            .define(keys::PRODUCT_NAME, "FiveM", Origin::External)
            .unwrap();

        apply(&mut table, true).unwrap();

        let define = table.get(keys::PRODUCT_NAME).unwrap();
        assert_eq!(define.value.as_str(), Some(PRODUCT_NAME));
        assert!(define.overridden);
    }
}
