// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for hydration.
//!
//! Only two things can fail loudly: building a field map from loose input
//! and looking up a target type by name. Everything that goes wrong while
//! reading source data (missing paths, values of the wrong shape, unknown
//! field names) is absorbed by the hydrator and leaves the field at its
//! static default.

use serde_json::Value;
use thiserror::Error;

/// Fatal hydration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HydrateError {
    /// A positional field-map entry carried something other than a path
    /// string.
    ///
    /// Positional entries double as field names, so an extractor (or a
    /// non-string JSON value) in that position has no name to bind to.
    #[error("field map entry #{position} must be a path string, found {found}")]
    InvalidMapEntry {
        /// Zero-based position of the offending entry.
        position: usize,
        /// Kind of value found instead of a path.
        found:    &'static str
    },

    /// The requested target type is not known to the registry.
    #[error("unknown hydration target type `{name}`")]
    UnknownTargetType {
        /// Name that was looked up.
        name: String
    }
}

impl HydrateError {
    /// Check if this error comes from field-map construction.
    pub const fn is_map_error(&self) -> bool {
        matches!(self, Self::InvalidMapEntry { .. })
    }
}

/// Describes why a source value could not become a field value.
///
/// Mismatches never escape a hydration run. They are logged and the field
/// keeps its static default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct Mismatch {
    /// What the field type accepts.
    pub expected: &'static str,
    /// What the source data held.
    pub found:    &'static str
}

impl Mismatch {
    /// Build a mismatch for `expected` against the kind of `found`.
    pub fn new(expected: &'static str, found: &Value) -> Self {
        Self {
            expected,
            found: kind_of(found)
        }
    }
}

/// Short name of a JSON value's kind, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object"
    }
}
