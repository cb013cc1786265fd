//! GGMP Configuration Library
//!
//! Build-time configuration layer for GGMP (Game Global Multiplayer
//! Platform). Two constant tables compose into a single effective table:
//! - branding: product identity strings (names, titles, support links)
//! - service endpoints: keymaster/policy/nucleus URLs, platform info, limits
//!
//! Externally supplied definitions (environment variables, defines files)
//! take precedence over compiled-in defaults; when GGMP mode is enabled the
//! platform's own endpoint constants are redirected to the GGMP services.
//! Conflicting redefinitions fail resolution loudly. The result is an
//! immutable [`PlatformConfig`] resolved exactly once and handed to
//! consumers.

pub mod brand;
pub mod defines;
pub mod endpoints;
pub mod error;
pub mod external;
pub mod keys;
pub mod resolve;

pub use defines::{Define, DefineTable, Origin, Value};
pub use error::{GgmpError, Result};
pub use external::ExternalDefines;
pub use resolve::{PlatformConfig, resolve_table};
