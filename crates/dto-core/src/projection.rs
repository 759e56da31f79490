// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Array projections of DTOs.
//!
//! [`Dto::to_array`](crate::Dto::to_array) returns a [`Projection`]: an
//! ordered map from field name to [`FieldRef`]. Plain values are copied to
//! JSON; nested DTOs and collections are borrowed so callers can still reach
//! the typed values. [`Projection::to_data`] flattens everything to JSON.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{collection::Collection, dto::Dto};

/// Projected value of one field.
pub enum FieldRef<'a> {
    /// Plain data.
    Value(Value),

    /// Nested DTO.
    Record(&'a (dyn Dto + 'static)),

    /// Items of a DTO collection, in iteration order.
    Collection(Vec<&'a (dyn Dto + 'static)>),

    /// Projected items of a list field.
    List(Vec<FieldRef<'a>>)
}

impl<'a> FieldRef<'a> {
    /// Borrow the items of a collection.
    pub fn collection<C: Collection>(collection: &'a C) -> Self {
        Self::Collection(
            collection
                .iter()
                .map(|item| item as &'a (dyn Dto + 'static))
                .collect()
        )
    }

    /// Plain value, if this is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None
        }
    }

    /// Nested DTO of type `T`, if this is one.
    pub fn as_record<T: Dto>(&self) -> Option<&'a T> {
        match self {
            Self::Record(record) => {
                let record: &'a (dyn Dto + 'static) = *record;
                record.downcast_ref::<T>()
            }
            _ => None
        }
    }

    /// Items of a collection field, if this is one.
    pub fn as_collection(&self) -> Option<&[&'a (dyn Dto + 'static)]> {
        match self {
            Self::Collection(items) => Some(items),
            _ => None
        }
    }

    /// Check for a plain `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Convert to plain JSON.
    ///
    /// Nested DTOs become objects of their used fields; collections and
    /// lists become arrays of converted items.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Record(record) => Value::Object(record.to_array_recursive(&[])),
            Self::Collection(items) => Value::Array(
                items
                    .iter()
                    .map(|item| Value::Object(item.to_array_recursive(&[])))
                    .collect()
            ),
            Self::List(items) => Value::Array(items.iter().map(FieldRef::to_value).collect())
        }
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Record(_) => f.debug_tuple("Record").field(&self.to_value()).finish(),
            Self::Collection(_) => f.debug_tuple("Collection").field(&self.to_value()).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish()
        }
    }
}

impl From<Value> for FieldRef<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Ordered field-name → value projection of a DTO.
#[derive(Debug, Default)]
pub struct Projection<'a> {
    fields: IndexMap<String, FieldRef<'a>>
}

impl<'a> Projection<'a> {
    pub(crate) fn insert(&mut self, name: &str, value: FieldRef<'a>) {
        self.fields.insert(name.to_string(), value);
    }

    /// Value of a projected field.
    pub fn get(&self, name: &str) -> Option<&FieldRef<'a>> {
        self.fields.get(name)
    }

    /// Check whether `name` is projected.
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Projected names, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Projected entries, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRef<'a>)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of projected fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if nothing is projected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert every value to plain JSON.
    pub fn to_data(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_value()))
            .collect()
    }
}

impl<'a> IntoIterator for Projection<'a> {
    type Item = (String, FieldRef<'a>);
    type IntoIter = indexmap::map::IntoIter<String, FieldRef<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
