//! Service-Endpoint Constants
//!
//! Default base URLs for the three GGMP backend services plus platform info
//! and limits. When GGMP mode is enabled the platform's own endpoint
//! constants are redirected to the GGMP services.

use tracing::debug;

use crate::defines::{DefineTable, Origin, Value};
use crate::error::{GgmpError, Result};
use crate::keys;

/// Default keymaster service endpoint
pub const KEYMASTER_URL: &str = "http://localhost:3001";

/// Default policy service endpoint
pub const POLICY_URL: &str = "http://localhost:3002";

/// Default nucleus service endpoint
pub const NUCLEUS_URL: &str = "http://localhost:3003";

/// Platform version string
pub const PLATFORM_VERSION: &str = "1.0.0";

/// Short platform name
pub const PLATFORM_NAME: &str = "GGMP";

/// Full platform name
pub const PLATFORM_FULL_NAME: &str = "Game Global Multiplayer Platform";

/// Maximum concurrent players
pub const MAX_PLAYERS: u32 = 2048;

/// Streaming memory budget in bytes (18MB)
pub const STREAMING_MEMORY: u64 = 0x120_0000;

/// Premium features enabled by default
pub const PREMIUM_ENABLED: bool = true;

/// GGMP mode enabled by default
pub const GGMP_ENABLED: bool = true;

/// Stages the service-endpoint table into `table`.
///
/// Every key in this table is define-if-absent: an externally supplied
/// value always wins over the compiled-in default, whether it is a service
/// URL, platform info, or a limit. When `enabled`, the platform's
/// keymaster/nucleus/policy endpoints and the live policy endpoint (policy
/// URL plus a trailing slash) are unconditionally redirected to the GGMP
/// services.
pub fn apply(table: &mut DefineTable, enabled: bool) -> Result<()> {
    table.define_if_absent(keys::GGMP_ENABLED, enabled, Origin::Endpoints);

    table.define_if_absent(keys::GGMP_KEYMASTER_URL, KEYMASTER_URL, Origin::Endpoints);
    table.define_if_absent(keys::GGMP_POLICY_URL, POLICY_URL, Origin::Endpoints);
    table.define_if_absent(keys::GGMP_NUCLEUS_URL, NUCLEUS_URL, Origin::Endpoints);

    if enabled {
        let keymaster = url_value(table, keys::GGMP_KEYMASTER_URL)?;
        let policy = url_value(table, keys::GGMP_POLICY_URL)?;
        let nucleus = url_value(table, keys::GGMP_NUCLEUS_URL)?;

        table.redefine(keys::POLICY_LIVE_ENDPOINT, format!("{policy}/"), Origin::Endpoints);
        table.redefine(keys::CFX_KEYMASTER_URL, keymaster, Origin::Endpoints);
        table.redefine(keys::CFX_NUCLEUS_URL, nucleus, Origin::Endpoints);
        table.redefine(keys::CFX_POLICY_URL, policy, Origin::Endpoints);
        debug!("redirected platform endpoints to GGMP services");
    }

    table.define_if_absent(keys::GGMP_VERSION, PLATFORM_VERSION, Origin::Endpoints);
    table.define_if_absent(keys::GGMP_PLATFORM_NAME, PLATFORM_NAME, Origin::Endpoints);
    table.define_if_absent(keys::GGMP_FULL_NAME, PLATFORM_FULL_NAME, Origin::Endpoints);
    table.define_if_absent(keys::GGMP_MAX_PLAYERS, u64::from(MAX_PLAYERS), Origin::Endpoints);
    table.define_if_absent(keys::GGMP_STREAMING_MEMORY, STREAMING_MEMORY, Origin::Endpoints);
    table.define_if_absent(keys::GGMP_PREMIUM_ENABLED, PREMIUM_ENABLED, Origin::Endpoints);

    Ok(())
}

/// Reads a defined URL constant, rejecting non-string values
fn url_value(table: &DefineTable, key: &str) -> Result<String> {
    match table.get(key).map(|d| &d.value) {
        Some(Value::Str(url)) => Ok(url.clone()),
        Some(other) => Err(GgmpError::InvalidDefine {
            key: key.to_string(),
            reason: format!("expected a URL string, got {other}"),
        }),
        None => Err(GgmpError::UndefinedConstant(key.to_string())),
    }
}
