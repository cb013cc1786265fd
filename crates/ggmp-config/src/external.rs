//! Externally supplied constant definitions
//!
//! Values the surrounding build defines before the GGMP tables are
//! processed: process environment variables, a `KEY=VALUE` defines file, or
//! a TOML defines file. Externally supplied values override compiled-in
//! defaults, never the reverse.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::defines::Value;
use crate::error::{GgmpError, Result};
use crate::keys;

/// Externally defined constants, keyed by constant name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalDefines {
    #[serde(default)]
    defines: BTreeMap<String, Value>,
}

impl ExternalDefines {
    /// Creates an empty set of external definitions
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads recognized constant names from the process environment.
    ///
    /// Flag and limit keys are parsed into their typed literals; anything
    /// else is taken verbatim as a string.
    pub fn from_env() -> Result<Self> {
        Self::from_env_pairs(std::env::vars())
    }

    fn from_env_pairs(vars: impl Iterator<Item = (String, String)>) -> Result<Self> {
        let mut external = Self::new();
        for (key, raw) in vars {
            if keys::RECOGNIZED.contains(&key.as_str()) {
                let value = parse_typed(&key, &raw)?;
                external.defines.insert(key, value);
            }
        }
        debug!(count = external.len(), "collected external defines from environment");
        Ok(external)
    }

    /// Loads external definitions from a `KEY=VALUE` defines file.
    ///
    /// Blank lines and `#` comments are skipped; values may be single- or
    /// double-quoted. Malformed lines fail with the offending line number.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(GgmpError::DefinesParse(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_env_contents(&contents)
    }

    fn from_env_contents(contents: &str) -> Result<Self> {
        let mut external = Self::new();

        for (line_num, line) in contents.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = parse_quoted(value.trim());

                if key.is_empty() {
                    return Err(GgmpError::DefinesParse(format!(
                        "Empty key at line {}",
                        line_num + 1
                    )));
                }

                let value = parse_typed(&key, &value)?;
                external.defines.insert(key, value);
            } else {
                return Err(GgmpError::DefinesParse(format!(
                    "Invalid format at line {}: expected KEY=VALUE",
                    line_num + 1
                )));
            }
        }

        Ok(external)
    }

    /// Loads external definitions from a TOML file with a `[defines]` table
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents).map_err(|e| GgmpError::ConfigError(e.to_string()))
    }

    /// Saves external definitions to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| GgmpError::ConfigError(e.to_string()))?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default defines-file location
    pub fn default_defines_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ggmp")
            .join("defines.toml")
    }

    /// Defines a constant, replacing any earlier external definition
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.defines.insert(key.into(), value.into());
    }

    /// Builder pattern: define a constant
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Looks up an external definition
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.defines.get(key)
    }

    /// Merges another set of external definitions into this one.
    ///
    /// Two configuration units giving the same key different values is a
    /// build-configuration conflict and fails loudly.
    pub fn merge(&mut self, other: ExternalDefines) -> Result<()> {
        for (key, value) in other.defines {
            match self.defines.get(&key) {
                Some(existing) if *existing != value => {
                    return Err(GgmpError::DefineConflict {
                        key,
                        existing: existing.to_string(),
                        incoming: value.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    self.defines.insert(key, value);
                }
            }
        }
        Ok(())
    }

    /// Iterates over all external definitions in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.defines.iter()
    }

    /// Number of external definitions
    pub fn len(&self) -> usize {
        self.defines.len()
    }

    /// Whether no external definitions exist
    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }
}

/// Parses a raw external value into the literal type its key requires
fn parse_typed(key: &str, raw: &str) -> Result<Value> {
    if keys::FLAG_KEYS.contains(&key) {
        return match raw {
            "1" | "true" => Ok(Value::Bool(true)),
            "0" | "false" => Ok(Value::Bool(false)),
            other => Err(GgmpError::InvalidDefine {
                key: key.to_string(),
                reason: format!("expected 0/1/true/false, got {other:?}"),
            }),
        };
    }

    if keys::INTEGER_KEYS.contains(&key) {
        return parse_integer(raw).map(Value::Int).ok_or_else(|| {
            GgmpError::InvalidDefine {
                key: key.to_string(),
                reason: format!("expected an integer literal, got {raw:?}"),
            }
        });
    }

    Ok(Value::Str(raw.to_string()))
}

/// Parses a decimal or 0x-prefixed hexadecimal integer literal
fn parse_integer(raw: &str) -> Option<u64> {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        raw.parse().ok()
    }
}

/// Strips matching single or double quotes from a value
fn parse_quoted(value: &str) -> String {
    if (value.starts_with('"') && value.ends_with('"'))
        || (value.starts_with('\'') && value.ends_with('\''))
    {
        if value.len() >= 2 {
            return value[1..value.len() - 1].to_string();
        }
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defines_file_contents() {
        let contents = r#"
            # Surrounding build configuration
            CFX_POLICY_URL=https://example.com
            PRODUCT_NAME="Some Platform"
            GGMP_MAX_PLAYERS=512
            GGMP_STREAMING_MEMORY=0x1200000
            GGMP_ENABLED=0
        "#;

        let external = ExternalDefines::from_env_contents(contents).unwrap();

        assert_eq!(
            external.get(keys::CFX_POLICY_URL),
            Some(&Value::Str("https://example.com".into()))
        );
        assert_eq!(
            external.get(keys::PRODUCT_NAME),
            Some(&Value::Str("Some Platform".into()))
        );
        assert_eq!(external.get(keys::GGMP_MAX_PLAYERS), Some(&Value::Int(512)));
        assert_eq!(
            external.get(keys::GGMP_STREAMING_MEMORY),
            Some(&Value::Int(0x120_0000))
        );
        assert_eq!(external.get(keys::GGMP_ENABLED), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = ExternalDefines::from_env_contents("CFX_POLICY_URL\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_invalid_flag_value_rejected() {
        let err = ExternalDefines::from_env_contents("GGMP_ENABLED=maybe\n").unwrap_err();
        assert!(matches!(err, GgmpError::InvalidDefine { .. }));
    }

    #[test]
    fn test_env_pairs_ignore_unrecognized_names() {
        let vars = vec![
            ("GGMP_POLICY_URL".to_string(), "http://policy:3002".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
            ("GGMP_PREMIUM_ENABLED".to_string(), "1".to_string()),
        ];

        let external = ExternalDefines::from_env_pairs(vars.into_iter()).unwrap();

        assert_eq!(external.len(), 2);
        assert_eq!(
            external.get(keys::GGMP_POLICY_URL),
            Some(&Value::Str("http://policy:3002".into()))
        );
        assert_eq!(
            external.get(keys::GGMP_PREMIUM_ENABLED),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn test_merge_conflict_is_loud() {
        let mut a = ExternalDefines::new().with(keys::CFX_POLICY_URL, "https://a.example");
        let b = ExternalDefines::new().with(keys::CFX_POLICY_URL, "https://b.example");

        let err = a.merge(b).unwrap_err();
        assert!(matches!(err, GgmpError::DefineConflict { .. }));

        // Identical values merge cleanly
        let c = ExternalDefines::new().with(keys::CFX_POLICY_URL, "https://a.example");
        a.merge(c).unwrap();
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defines.toml");

        let external = ExternalDefines::new()
            .with(keys::GGMP_POLICY_URL, "http://policy.internal:8080")
            .with(keys::GGMP_MAX_PLAYERS, 4096u64)
            .with(keys::GGMP_ENABLED, true);
        external.save(&path).unwrap();

        let loaded = ExternalDefines::load(&path).unwrap();
        assert_eq!(
            loaded.get(keys::GGMP_POLICY_URL),
            Some(&Value::Str("http://policy.internal:8080".into()))
        );
        assert_eq!(loaded.get(keys::GGMP_MAX_PLAYERS), Some(&Value::Int(4096)));
        assert_eq!(loaded.get(keys::GGMP_ENABLED), Some(&Value::Bool(true)));
    }
}
