//! Named constant table
//!
//! The effective GGMP configuration is a flat table of named constants built
//! in a single resolution pass. Definition semantics mirror a build-time
//! constant layer: an unconditional define (a conflicting redefinition fails
//! resolution), define-if-absent, and an explicit override that replaces an
//! earlier definition and marks the entry as overridden.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GgmpError, Result};

/// A constant literal: string, integer, or boolean
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(u64),
    Bool(bool),
}

impl Value {
    /// Returns the string literal, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer literal, if this is an integer value
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value; integer 0/1 count as flags
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(0) => Some(false),
            Value::Int(1) => Some(true),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Which configuration unit produced a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Supplied by the surrounding build (environment or defines file)
    External,
    /// Defined by the branding table
    Branding,
    /// Defined by the service-endpoint table
    Endpoints,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::External => write!(f, "external"),
            Origin::Branding => write!(f, "branding"),
            Origin::Endpoints => write!(f, "endpoints"),
        }
    }
}

/// A single named constant in the effective table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Define {
    pub key: String,
    pub value: Value,
    pub origin: Origin,
    /// True if this definition replaced an earlier one of the same key
    pub overridden: bool,
}

/// Ordered table of named constants
///
/// Every key maps to exactly one value; once an override has been applied
/// the replaced value is unreachable for the remainder of resolution.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DefineTable {
    entries: BTreeMap<String, Define>,
}

impl DefineTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a constant unconditionally.
    ///
    /// Redefining an existing key with an identical value is benign and
    /// keeps the earlier entry. Redefining with a different value is a
    /// build-configuration conflict and fails resolution.
    pub fn define(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        origin: Origin,
    ) -> Result<()> {
        let key = key.into();
        let value = value.into();

        if let Some(existing) = self.entries.get(&key) {
            if existing.value == value {
                return Ok(());
            }
            return Err(GgmpError::DefineConflict {
                key,
                existing: existing.value.to_string(),
                incoming: value.to_string(),
            });
        }

        self.entries.insert(
            key.clone(),
            Define {
                key,
                value,
                origin,
                overridden: false,
            },
        );
        Ok(())
    }

    /// Defines a constant only when the key is not already defined.
    ///
    /// Returns true when the definition was inserted, false when a
    /// pre-existing definition took precedence.
    pub fn define_if_absent(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        origin: Origin,
    ) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            debug!(key = %key, "pre-existing definition takes precedence");
            return false;
        }
        self.entries.insert(
            key.clone(),
            Define {
                key,
                value: value.into(),
                origin,
                overridden: false,
            },
        );
        true
    }

    /// Replaces any existing definition of `key` with `value`.
    ///
    /// When a prior definition existed the new entry is marked overridden;
    /// otherwise this behaves like a plain definition.
    pub fn redefine(&mut self, key: impl Into<String>, value: impl Into<Value>, origin: Origin) {
        let key = key.into();
        let overridden = self.entries.contains_key(&key);
        if overridden {
            debug!(key = %key, "overriding earlier definition");
        }
        self.entries.insert(
            key.clone(),
            Define {
                key,
                value: value.into(),
                origin,
                overridden,
            },
        );
    }

    /// Looks up a constant by key
    pub fn get(&self, key: &str) -> Option<&Define> {
        self.entries.get(key)
    }

    /// Looks up a string constant by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|d| d.value.as_str())
    }

    /// Looks up an integer constant by key
    pub fn get_int(&self, key: &str) -> Option<u64> {
        self.entries.get(key).and_then(|d| d.value.as_int())
    }

    /// Looks up a boolean constant by key
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries.get(key).and_then(|d| d.value.as_bool())
    }

    /// Whether `key` is defined
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of defined constants
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all definitions in key order
    pub fn iter(&self) -> impl Iterator<Item = &Define> {
        self.entries.values()
    }

    /// Exports the table as sorted KEY=VALUE lines.
    ///
    /// Values containing spaces or quotes are double-quoted so the output
    /// can be fed back to build tooling unchanged.
    pub fn to_env_format(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len());

        for define in self.entries.values() {
            let value = define.value.to_string();
            if value.contains(' ') || value.contains('"') || value.contains('\'') {
                lines.push(format!("{}=\"{}\"", define.key, value.replace('"', "\\\"")));
            } else {
                lines.push(format!("{}={}", define.key, value));
            }
        }

        lines.join("\n")
    }
}
