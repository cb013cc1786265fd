//! Effective configuration resolution
//!
//! Composes the external definitions, the branding table, and the
//! service-endpoint table into one effective constant table, in a single
//! pass at initialization. The result is an immutable [`PlatformConfig`]
//! passed explicitly to consumers; nothing is resolved twice and nothing
//! mutates afterwards.

use serde::Serialize;
use tracing::debug;

use crate::defines::{DefineTable, Origin};
use crate::error::{GgmpError, Result};
use crate::external::ExternalDefines;
use crate::{brand, endpoints, keys};

/// Resolves the effective constant table from external definitions.
///
/// Resolution order matches the conceptual inclusion order: externally
/// supplied values are seeded first (they override compiled-in defaults,
/// never the reverse), then the branding table, then the service-endpoint
/// table. The enable flag comes from an external `GGMP_ENABLED` definition
/// when present, otherwise GGMP mode defaults to enabled.
pub fn resolve_table(external: &ExternalDefines) -> Result<DefineTable> {
    let mut table = DefineTable::new();

    for (key, value) in external.iter() {
        table.define(key.clone(), value.clone(), Origin::External)?;
    }

    let enabled = match table.get(keys::GGMP_ENABLED) {
        Some(define) => define.value.as_bool().ok_or_else(|| GgmpError::InvalidDefine {
            key: keys::GGMP_ENABLED.to_string(),
            reason: format!("expected a flag, got {}", define.value),
        })?,
        None => endpoints::GGMP_ENABLED,
    };

    brand::apply(&mut table, enabled)?;
    endpoints::apply(&mut table, enabled)?;

    debug!(enabled, constants = table.len(), "resolved effective constant table");
    Ok(table)
}

/// Immutable, fully resolved GGMP platform configuration
///
/// Constructed exactly once from the effective constant table. The
/// `effective_*` fields are the platform constants the override layer
/// targets; they are `None` when GGMP mode is disabled and the surrounding
/// build defined no value of its own.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformConfig {
    // Branding
    pub product_name: String,
    pub product_full_name: String,
    pub product_version: String,
    pub window_title: String,
    pub server_title: String,
    pub client_title: String,
    pub website_url: String,
    pub documentation_url: String,
    pub support_url: String,

    // GGMP service endpoints
    pub keymaster_url: String,
    pub policy_url: String,
    pub nucleus_url: String,

    // Platform override targets
    pub effective_product_name: Option<String>,
    pub effective_keymaster_url: Option<String>,
    pub effective_policy_url: Option<String>,
    pub effective_nucleus_url: Option<String>,
    pub policy_live_endpoint: Option<String>,

    // Platform info
    pub platform_version: String,
    pub platform_name: String,
    pub platform_full_name: String,

    // Limits and flags
    pub max_players: u32,
    pub streaming_memory: u64,
    pub premium_enabled: bool,
    pub ggmp_enabled: bool,

    /// The full effective table, for introspection and export
    pub defines: DefineTable,
}

impl PlatformConfig {
    /// Resolves the platform configuration from external definitions
    pub fn resolve(external: &ExternalDefines) -> Result<Self> {
        let table = resolve_table(external)?;
        Self::from_table(table)
    }

    /// Resolves the platform configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::resolve(&ExternalDefines::from_env()?)
    }

    /// Serializes the resolved configuration as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_table(table: DefineTable) -> Result<Self> {
        let max_players = require_int(&table, keys::GGMP_MAX_PLAYERS)?;
        let max_players = u32::try_from(max_players).map_err(|_| GgmpError::InvalidDefine {
            key: keys::GGMP_MAX_PLAYERS.to_string(),
            reason: format!("{max_players} exceeds the player limit range"),
        })?;

        Ok(Self {
            product_name: require_str(&table, keys::GGMP_PRODUCT_NAME)?,
            product_full_name: require_str(&table, keys::GGMP_PRODUCT_FULL_NAME)?,
            product_version: require_str(&table, keys::GGMP_PRODUCT_VERSION)?,
            window_title: require_str(&table, keys::GGMP_WINDOW_TITLE)?,
            server_title: require_str(&table, keys::GGMP_SERVER_TITLE)?,
            client_title: require_str(&table, keys::GGMP_CLIENT_TITLE)?,
            website_url: require_str(&table, keys::GGMP_WEBSITE_URL)?,
            documentation_url: require_str(&table, keys::GGMP_DOCUMENTATION_URL)?,
            support_url: require_str(&table, keys::GGMP_SUPPORT_URL)?,

            keymaster_url: require_str(&table, keys::GGMP_KEYMASTER_URL)?,
            policy_url: require_str(&table, keys::GGMP_POLICY_URL)?,
            nucleus_url: require_str(&table, keys::GGMP_NUCLEUS_URL)?,

            effective_product_name: optional_str(&table, keys::PRODUCT_NAME),
            effective_keymaster_url: optional_str(&table, keys::CFX_KEYMASTER_URL),
            effective_policy_url: optional_str(&table, keys::CFX_POLICY_URL),
            effective_nucleus_url: optional_str(&table, keys::CFX_NUCLEUS_URL),
            policy_live_endpoint: optional_str(&table, keys::POLICY_LIVE_ENDPOINT),

            platform_version: require_str(&table, keys::GGMP_VERSION)?,
            platform_name: require_str(&table, keys::GGMP_PLATFORM_NAME)?,
            platform_full_name: require_str(&table, keys::GGMP_FULL_NAME)?,

            max_players,
            streaming_memory: require_int(&table, keys::GGMP_STREAMING_MEMORY)?,
            premium_enabled: require_bool(&table, keys::GGMP_PREMIUM_ENABLED)?,
            ggmp_enabled: require_bool(&table, keys::GGMP_ENABLED)?,

            defines: table,
        })
    }
}

fn require_str(table: &DefineTable, key: &str) -> Result<String> {
    match table.get(key) {
        Some(define) => define.value.as_str().map(str::to_string).ok_or_else(|| {
            GgmpError::InvalidDefine {
                key: key.to_string(),
                reason: format!("expected a string literal, got {}", define.value),
            }
        }),
        None => Err(GgmpError::UndefinedConstant(key.to_string())),
    }
}

fn require_int(table: &DefineTable, key: &str) -> Result<u64> {
    match table.get(key) {
        Some(define) => define.value.as_int().ok_or_else(|| GgmpError::InvalidDefine {
            key: key.to_string(),
            reason: format!("expected an integer literal, got {}", define.value),
        }),
        None => Err(GgmpError::UndefinedConstant(key.to_string())),
    }
}

fn require_bool(table: &DefineTable, key: &str) -> Result<bool> {
    match table.get(key) {
        Some(define) => define.value.as_bool().ok_or_else(|| GgmpError::InvalidDefine {
            key: key.to_string(),
            reason: format!("expected a flag, got {}", define.value),
        }),
        None => Err(GgmpError::UndefinedConstant(key.to_string())),
    }
}

fn optional_str(table: &DefineTable, key: &str) -> Option<String> {
    table.get_str(key).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let config = PlatformConfig::resolve(&ExternalDefines::new()).unwrap();

        assert!(config.ggmp_enabled);
        assert_eq!(config.product_name, "GGMP");
        assert_eq!(config.keymaster_url, "http://localhost:3001");
        assert_eq!(config.max_players, 2048);
        assert_eq!(config.streaming_memory, 0x120_0000);
        assert!(config.premium_enabled);
    }

    #[test]
    fn test_enable_flag_from_external_integer() {
        let external = ExternalDefines::new().with(keys::GGMP_ENABLED, 0u64);
        let config = PlatformConfig::resolve(&external).unwrap();

        assert!(!config.ggmp_enabled);
        assert!(config.policy_live_endpoint.is_none());
    }

    #[test]
    fn test_json_serialization() {
        let config = PlatformConfig::resolve(&ExternalDefines::new()).unwrap();
        let json = config.to_json().unwrap();

        assert!(json.contains("\"product_name\": \"GGMP\""));
        assert!(json.contains("\"max_players\": 2048"));
        assert!(json.contains("\"POLICY_LIVE_ENDPOINT\""));
    }

    #[test]
    fn test_invalid_enable_flag_rejected() {
        let external = ExternalDefines::new().with(keys::GGMP_ENABLED, "yes");
        let err = PlatformConfig::resolve(&external).unwrap_err();
        assert!(matches!(err, GgmpError::InvalidDefine { .. }));
    }
}
