// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The hydration engine.
//!
//! A [`Hydrator`] pairs a [`FieldMap`] with [`HydratorOptions`] and turns
//! loosely-typed JSON into a typed [`Dto`].
//!
//! # Algorithm
//!
//! ```text
//! blank instance (static defaults)
//! for (field, locator) in map order:
//!     field not declared          → skip
//!     extractor                   → call it, value counts as found
//!     path                        → resolve; on miss retry snake_case path
//!     still missing               → keep default, not used
//!     found                       → mark used, FieldType::from_source
//!         nested object + DTO     → hydrate nested DTO (its own default map)
//!         array + collection      → hydrate one DTO per item
//!         shape mismatch          → keep default
//! install used-fields set
//! ```
//!
//! `hydrate` takes `&self` and keeps all per-run state on the stack, so a
//! single hydrator can serve any number of concurrent runs.
//!
//! # Example
//!
//! ```rust,ignore
//! let hydrator = Hydrator::new(
//!     FieldMap::builder()
//!         .path("id", "guid")
//!         .path("name", "owner.0._name")
//!         .path("parent_id", "parent.id")
//!         .extract("props", |data| data.get("props").cloned().unwrap_or(json!([])))
//!         .build()
//! );
//!
//! let item: ModelDto = hydrator.hydrate(&data);
//! ```

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::{
    collection::Collection,
    dto::{Dto, UsedFields},
    error::{HydrateError, Mismatch},
    field_map::{FieldMap, Locator, MapKey},
    path
};

/// Default nesting limit for auto-cast DTOs.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hydration settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydratorOptions {
    /// Retry a missed path in `snake_case` before giving up.
    ///
    /// Lets camelCase field names read snake_case payloads without an
    /// explicit map entry. Defaults to `true`.
    pub case_fallback: bool,

    /// Deepest nested DTO level that is still auto-cast.
    ///
    /// Deeper objects are left uncast. Defaults to [`DEFAULT_MAX_DEPTH`].
    pub max_depth: usize
}

impl HydratorOptions {
    /// Default settings.
    pub const fn new() -> Self {
        Self {
            case_fallback: true,
            max_depth:     DEFAULT_MAX_DEPTH
        }
    }

    /// Enable or disable the snake_case retry.
    #[must_use]
    pub const fn with_case_fallback(mut self, enabled: bool) -> Self {
        self.case_fallback = enabled;
        self
    }

    /// Set the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for HydratorOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one hydration run.
///
/// Passed to [`FieldType::from_source`](crate::FieldType::from_source) and
/// to the privileged [`Dto`] methods. It cannot be created outside this
/// crate.
#[derive(Debug)]
pub struct Hydration<'h> {
    options: &'h HydratorOptions,
    depth:   usize
}

impl<'h> Hydration<'h> {
    pub(crate) const fn new(options: &'h HydratorOptions, depth: usize) -> Self {
        Self {
            options,
            depth
        }
    }

    /// Nesting level of the DTO being hydrated; the root is `0`.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Settings of this run.
    pub const fn options(&self) -> &HydratorOptions {
        self.options
    }

    /// Hydrate a nested DTO from an associative object.
    ///
    /// Uses `D`'s own default map, not the parent's.
    ///
    /// # Errors
    ///
    /// [`Mismatch`] if `value` is not an associative object or the depth
    /// limit is reached.
    pub fn cast_record<D: Dto>(&mut self, value: Value) -> Result<D, Mismatch> {
        if !is_associative(&value) {
            return Err(Mismatch::new("object", &value));
        }
        self.descend(D::dto_name())?;
        Ok(run::<D>(&D::fields(), &value, self.options, self.depth + 1))
    }

    /// Hydrate a collection from an array (or object) of associative
    /// objects.
    ///
    /// All-or-nothing: one item that is not an associative object aborts
    /// the cast.
    ///
    /// # Errors
    ///
    /// [`Mismatch`] on a wrong container, a wrong item, or the depth limit.
    pub fn cast_collection<C: Collection>(&mut self, value: Value) -> Result<C, Mismatch> {
        let items: Vec<Value> = match value {
            Value::Array(items) => items,
            Value::Object(entries) => entries.into_iter().map(|(_, item)| item).collect(),
            other => return Err(Mismatch::new("array of objects", &other))
        };
        if let Some(item) = items.iter().find(|item| !is_associative(item)) {
            return Err(Mismatch::new("object", item));
        }
        self.descend(<C::Item as Dto>::dto_name())?;

        let map = <C::Item as Dto>::fields();
        let mut collection = C::default();
        for item in &items {
            collection.attach(run::<C::Item>(&map, item, self.options, self.depth + 1));
        }
        Ok(collection)
    }

    fn descend(&self, target: &'static str) -> Result<(), Mismatch> {
        if self.depth >= self.options.max_depth {
            warn!(
                target_type = target,
                max_depth = self.options.max_depth,
                "nesting limit reached, nested data left uncast"
            );
            return Err(Mismatch {
                expected: "object within the nesting limit",
                found:    "object"
            });
        }
        Ok(())
    }
}

/// Check whether `value` is an object-shaped map rather than a list.
///
/// Mirrors how decoded payloads distinguish records from arrays: the object
/// must be non-empty and its first key must not look like a list index.
pub fn is_associative(value: &Value) -> bool {
    match value {
        Value::Object(entries) => entries.keys().next().is_some_and(|key| !is_index_key(key)),
        _ => false
    }
}

fn is_index_key(key: &str) -> bool {
    let digits = key.strip_prefix('-').unwrap_or(key);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
        && !(key.starts_with('-') && digits == "0")
}

/// Populates DTOs from source data according to a field map.
#[derive(Debug, Clone, Default)]
pub struct Hydrator {
    map:     FieldMap,
    options: HydratorOptions
}

impl Hydrator {
    /// Hydrator for a normalized map.
    pub fn new(map: FieldMap) -> Self {
        Self {
            map,
            options: HydratorOptions::default()
        }
    }

    /// Hydrator for raw map entries.
    ///
    /// # Errors
    ///
    /// [`HydrateError::InvalidMapEntry`] if a positional entry is not a path.
    pub fn try_new<I, K>(entries: I) -> Result<Self, HydrateError>
    where
        I: IntoIterator<Item = (K, Locator)>,
        K: Into<MapKey>
    {
        FieldMap::normalize(entries).map(Self::new)
    }

    /// Hydrator for a JSON field map.
    ///
    /// # Errors
    ///
    /// [`HydrateError::InvalidMapEntry`] for non-string entries.
    pub fn from_json(map: &Value) -> Result<Self, HydrateError> {
        FieldMap::from_json(map).map(Self::new)
    }

    /// Replace the settings.
    #[must_use]
    pub fn with_options(mut self, options: HydratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Field map in use.
    pub fn map(&self) -> &FieldMap {
        &self.map
    }

    /// Settings in use.
    pub fn options(&self) -> &HydratorOptions {
        &self.options
    }

    /// Build a `T` from `data`.
    ///
    /// An empty map hydrates nothing: every field keeps its default and the
    /// used-fields set is empty.
    pub fn hydrate<T: Dto>(&self, data: &Value) -> T {
        run::<T>(&self.map, data, &self.options, 0)
    }
}

impl From<FieldMap> for Hydrator {
    fn from(map: FieldMap) -> Self {
        Self::new(map)
    }
}

/// One hydration run at a given nesting depth.
pub(crate) fn run<T: Dto>(map: &FieldMap, data: &Value, options: &HydratorOptions, depth: usize) -> T {
    let mut cx = Hydration::new(options, depth);
    let declared = T::declared_fields();
    let mut record = T::blank();
    let mut used: Vec<&'static str> = Vec::with_capacity(map.len());

    debug!(target_type = T::dto_name(), entries = map.len(), depth, "hydrating");

    for (name, locator) in map.iter() {
        let Some(field) = declared.iter().copied().find(|declared| *declared == name) else {
            trace!(field = name, "not declared, skipped");
            continue;
        };

        let value = match locator {
            Locator::Extractor(extract) => extract(data),
            Locator::Path(path) => match lookup(data, path, options) {
                Some(value) => value,
                None => {
                    trace!(field, path = path.as_str(), "not found, default kept");
                    continue;
                }
            }
        };

        if !used.contains(&field) {
            used.push(field);
        }
        if let Err(mismatch) = record.assign(field, value, &mut cx) {
            debug!(field, %mismatch, "value does not fit, default kept");
        }
    }

    debug!(target_type = T::dto_name(), used = used.len(), depth, "hydrated");
    record.set_used_fields(UsedFields::from_names(used), &cx);
    record
}

fn lookup(data: &Value, path: &str, options: &HydratorOptions) -> Option<Value> {
    let found = path::resolve(data, path).cloned();
    if found.is_some() || !options.case_fallback {
        return found;
    }

    let folded = path::snake_case(path)?;
    let found = path::resolve(data, &folded).cloned();
    if found.is_some() {
        trace!(path, folded = folded.as_str(), "found through snake_case fallback");
    }
    found
}
