// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field maps: which source location feeds which DTO field.
//!
//! A [`FieldMap`] is an ordered mapping from target field name to a
//! [`Locator`]. It can be built three ways:
//!
//! | Constructor | Input | Fallible |
//! |-------------|-------|----------|
//! | [`FieldMap::builder`] | typed calls | no |
//! | [`FieldMap::normalize`] | `(MapKey, Locator)` pairs | yes |
//! | [`FieldMap::from_json`] | JSON array or object | yes |
//!
//! Positional entries use their path as the field name, so
//! `["id", "name"]` maps `id ← id` and `name ← name`. Explicit entries
//! name the field and point anywhere: `{"name": "owner.0.name"}`.
//!
//! # Example
//!
//! ```rust
//! use dto_core::FieldMap;
//! use serde_json::{Value, json};
//!
//! let map = FieldMap::builder()
//!     .field("id")
//!     .path("name", "owner.0.name")
//!     .extract("props", |data: &Value| data.get("props").cloned().unwrap_or(json!([])))
//!     .build();
//!
//! assert_eq!(map.names().collect::<Vec<_>>(), vec!["id", "name", "props"]);
//! ```

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{HydrateError, kind_of};

/// Custom extraction function, called with the whole source data.
pub type Extractor = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Where a field's value comes from.
#[derive(Clone)]
pub enum Locator {
    /// Dotted path into the source data.
    Path(String),

    /// Function computing the value from the source data.
    ///
    /// Whatever it returns, `null` included, counts as found.
    Extractor(Extractor)
}

impl Locator {
    /// Wrap a closure as an extractor locator.
    pub fn extractor<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static
    {
        Self::Extractor(Arc::new(f))
    }

    /// Path string, if this is a path locator.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            Self::Extractor(_) => None
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Path(_) => "path",
            Self::Extractor(_) => "extractor"
        }
    }
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Extractor(_) => f.write_str("Extractor(..)")
        }
    }
}

impl From<&str> for Locator {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for Locator {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

/// Key of a raw field-map entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapKey {
    /// Positional entry; the locator must be a path and names the field.
    Index(usize),

    /// Explicit target field name.
    Name(String)
}

impl From<usize> for MapKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for MapKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for MapKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Canonical field map: target field name → locator, in entry order.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: IndexMap<String, Locator>
}

impl FieldMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a typed builder.
    pub fn builder() -> FieldMapBuilder {
        FieldMapBuilder::default()
    }

    /// Map every name to the path of the same name.
    ///
    /// This is the default map of a DTO: its declared field names.
    pub fn from_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let entries = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), Locator::Path(crate::path::escape(name)))
            })
            .collect();
        Self {
            entries
        }
    }

    /// Normalize raw entries into a canonical map.
    ///
    /// Positional entries must carry a path, which becomes the field name.
    /// A later entry for the same field replaces the earlier locator and
    /// keeps the earlier position.
    ///
    /// # Errors
    ///
    /// [`HydrateError::InvalidMapEntry`] when a positional entry holds an
    /// extractor.
    pub fn normalize<I, K>(entries: I) -> Result<Self, HydrateError>
    where
        I: IntoIterator<Item = (K, Locator)>,
        K: Into<MapKey>
    {
        let mut map = Self::new();
        for (position, (key, locator)) in entries.into_iter().enumerate() {
            let name = match key.into() {
                MapKey::Name(name) => name,
                MapKey::Index(_) => match &locator {
                    Locator::Path(path) => path.clone(),
                    Locator::Extractor(_) => {
                        return Err(HydrateError::InvalidMapEntry {
                            position,
                            found: locator.kind()
                        });
                    }
                }
            };
            map.entries.insert(name, locator);
        }
        Ok(map)
    }

    /// Build a map from JSON: an array of paths or an object of
    /// `field → path`.
    ///
    /// # Errors
    ///
    /// [`HydrateError::InvalidMapEntry`] for any entry that is not a string,
    /// or when `value` is neither an array nor an object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dto_core::FieldMap;
    /// use serde_json::json;
    ///
    /// let map = FieldMap::from_json(&json!({"id": "guid", "name": "owner.name"})).unwrap();
    /// assert_eq!(map.get("id").and_then(|l| l.as_path()), Some("guid"));
    ///
    /// assert!(FieldMap::from_json(&json!(["id", 7])).is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, HydrateError> {
        match value {
            Value::Array(items) => {
                let entries = items
                    .iter()
                    .enumerate()
                    .map(|(position, item)| match item {
                        Value::String(path) => Ok((MapKey::Index(position), Locator::from(path.as_str()))),
                        other => Err(HydrateError::InvalidMapEntry {
                            position,
                            found: kind_of(other)
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::normalize(entries)
            }
            Value::Object(fields) => {
                let entries = fields
                    .iter()
                    .enumerate()
                    .map(|(position, (name, item))| match item {
                        Value::String(path) => Ok((MapKey::Name(name.clone()), Locator::from(path.as_str()))),
                        other => Err(HydrateError::InvalidMapEntry {
                            position,
                            found: kind_of(other)
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::normalize(entries)
            }
            other => Err(HydrateError::InvalidMapEntry {
                position: 0,
                found:    kind_of(other)
            })
        }
    }

    /// Locator for a field.
    pub fn get(&self, name: &str) -> Option<&Locator> {
        self.entries.get(name)
    }

    /// Target field names in map order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Locator)> {
        self.entries.iter().map(|(name, locator)| (name.as_str(), locator))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for FieldMap {
    /// Positional paths; never fails because every entry is a string.
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut map = Self::new();
        for path in iter {
            map.entries.insert(path.to_string(), Locator::from(path));
        }
        map
    }
}

/// Typed, infallible [`FieldMap`] builder.
#[derive(Debug, Default)]
pub struct FieldMapBuilder {
    map: FieldMap
}

impl FieldMapBuilder {
    /// Positional entry: field and path share the name.
    #[must_use]
    pub fn field(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.map.entries.insert(path.clone(), Locator::Path(path));
        self
    }

    /// Explicit entry reading `name` from `path`.
    #[must_use]
    pub fn path(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.map.entries.insert(name.into(), Locator::Path(path.into()));
        self
    }

    /// Explicit entry computed by `f` from the whole source data.
    #[must_use]
    pub fn extract<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static
    {
        self.map.entries.insert(name.into(), Locator::extractor(f));
        self
    }

    /// Finish the map.
    pub fn build(self) -> FieldMap {
        self.map
    }
}
