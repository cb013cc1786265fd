//! Error types for the GGMP configuration layer
//!
//! Provides a unified error handling strategy using thiserror.

use thiserror::Error;

/// Result type alias for GGMP configuration operations
pub type Result<T> = std::result::Result<T, GgmpError>;

/// Unified error type for all GGMP configuration operations
#[derive(Error, Debug)]
pub enum GgmpError {
    // ─────────────────────────────────────────────────────────────
    // Definition Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Conflicting definition for {key}: already defined as {existing}, redefined as {incoming}")]
    DefineConflict {
        key: String,
        existing: String,
        incoming: String,
    },

    #[error("Invalid value for {key}: {reason}")]
    InvalidDefine { key: String, reason: String },

    #[error("Undefined constant: {0}")]
    UndefinedConstant(String),

    // ─────────────────────────────────────────────────────────────
    // Defines File Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse defines file: {0}")]
    DefinesParse(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ─────────────────────────────────────────────────────────────
    // IO Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GgmpError {
    fn from(err: serde_json::Error) -> Self {
        GgmpError::Serialization(err.to_string())
    }
}
