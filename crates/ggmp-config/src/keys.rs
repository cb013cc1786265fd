//! Constant key names
//!
//! The identifiers under which the branding and service-endpoint tables
//! publish their values, plus the externally defined identifiers the enabled
//! override layer replaces.

// ─── Branding table keys ─────────────────────────────────────────

/// Product display name
pub const GGMP_PRODUCT_NAME: &str = "GGMP_PRODUCT_NAME";
/// Full product name
pub const GGMP_PRODUCT_FULL_NAME: &str = "GGMP_PRODUCT_FULL_NAME";
/// Product version string
pub const GGMP_PRODUCT_VERSION: &str = "GGMP_PRODUCT_VERSION";
/// Main window title
pub const GGMP_WINDOW_TITLE: &str = "GGMP_WINDOW_TITLE";
/// Server console title
pub const GGMP_SERVER_TITLE: &str = "GGMP_SERVER_TITLE";
/// Client window title
pub const GGMP_CLIENT_TITLE: &str = "GGMP_CLIENT_TITLE";
/// Project website
pub const GGMP_WEBSITE_URL: &str = "GGMP_WEBSITE_URL";
/// Platform documentation
pub const GGMP_DOCUMENTATION_URL: &str = "GGMP_DOCUMENTATION_URL";
/// Issue tracker / support link
pub const GGMP_SUPPORT_URL: &str = "GGMP_SUPPORT_URL";

// ─── Service-endpoint table keys ─────────────────────────────────

/// Keymaster service base URL
pub const GGMP_KEYMASTER_URL: &str = "GGMP_KEYMASTER_URL";
/// Policy service base URL
pub const GGMP_POLICY_URL: &str = "GGMP_POLICY_URL";
/// Nucleus service base URL
pub const GGMP_NUCLEUS_URL: &str = "GGMP_NUCLEUS_URL";
/// Platform version string
pub const GGMP_VERSION: &str = "GGMP_VERSION";
/// Short platform name
pub const GGMP_PLATFORM_NAME: &str = "GGMP_PLATFORM_NAME";
/// Full platform name
pub const GGMP_FULL_NAME: &str = "GGMP_FULL_NAME";
/// Maximum concurrent players
pub const GGMP_MAX_PLAYERS: &str = "GGMP_MAX_PLAYERS";
/// Streaming memory budget in bytes
pub const GGMP_STREAMING_MEMORY: &str = "GGMP_STREAMING_MEMORY";
/// Premium features flag
pub const GGMP_PREMIUM_ENABLED: &str = "GGMP_PREMIUM_ENABLED";
/// Master switch for the GGMP override layer
pub const GGMP_ENABLED: &str = "GGMP_ENABLED";

// ─── Externally defined override targets ─────────────────────────

/// Platform product name, replaced with the GGMP name when enabled
pub const PRODUCT_NAME: &str = "PRODUCT_NAME";
/// Live policy endpoint (policy URL with a trailing slash)
pub const POLICY_LIVE_ENDPOINT: &str = "POLICY_LIVE_ENDPOINT";
/// Platform keymaster endpoint, redirected when enabled
pub const CFX_KEYMASTER_URL: &str = "CFX_KEYMASTER_URL";
/// Platform nucleus endpoint, redirected when enabled
pub const CFX_NUCLEUS_URL: &str = "CFX_NUCLEUS_URL";
/// Platform policy endpoint, redirected when enabled
pub const CFX_POLICY_URL: &str = "CFX_POLICY_URL";

/// All key names collected from external sources.
///
/// Endpoint-table keys honor an external value over the compiled-in
/// default. Branding keys are fixed literals; they are still collected so
/// that a divergent external value is reported as a definition conflict
/// instead of being silently ignored.
pub const RECOGNIZED: &[&str] = &[
    GGMP_PRODUCT_NAME,
    GGMP_PRODUCT_FULL_NAME,
    GGMP_PRODUCT_VERSION,
    GGMP_WINDOW_TITLE,
    GGMP_SERVER_TITLE,
    GGMP_CLIENT_TITLE,
    GGMP_WEBSITE_URL,
    GGMP_DOCUMENTATION_URL,
    GGMP_SUPPORT_URL,
    GGMP_KEYMASTER_URL,
    GGMP_POLICY_URL,
    GGMP_NUCLEUS_URL,
    GGMP_VERSION,
    GGMP_PLATFORM_NAME,
    GGMP_FULL_NAME,
    GGMP_MAX_PLAYERS,
    GGMP_STREAMING_MEMORY,
    GGMP_PREMIUM_ENABLED,
    GGMP_ENABLED,
    PRODUCT_NAME,
    POLICY_LIVE_ENDPOINT,
    CFX_KEYMASTER_URL,
    CFX_NUCLEUS_URL,
    CFX_POLICY_URL,
];

/// Keys whose values are boolean flags (0/1/true/false)
pub const FLAG_KEYS: &[&str] = &[GGMP_ENABLED, GGMP_PREMIUM_ENABLED];

/// Keys whose values are integer limits
pub const INTEGER_KEYS: &[&str] = &[GGMP_MAX_PLAYERS, GGMP_STREAMING_MEMORY];
