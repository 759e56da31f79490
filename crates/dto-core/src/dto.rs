// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The record contract shared by every DTO.
//!
//! [`Dto`] is normally implemented by `#[derive(Dto)]`. The generated code
//! provides the static part (declared fields, blank instance, typed field
//! assignment); this module provides hydration entry points and array
//! projections on top of it.
//!
//! # Used fields
//!
//! Every DTO carries a [`UsedFields`] set: the declared fields whose value
//! was actually found in the source data. [`Dto::to_array`] without
//! arguments projects exactly that set, so a DTO hydrated from a partial
//! payload serializes back to the same partial payload.
//!
//! ```rust,ignore
//! let dto = ModelDto::hydrate(&json!({"id": 6, "name": "Y", "unknown": 123}));
//! assert_eq!(Value::Object(dto.to_array_recursive(&[])), json!({"id": 6, "name": "Y"}));
//! ```

use std::any::Any;

use serde_json::{Map, Value};

use crate::{
    error::{HydrateError, Mismatch},
    field_map::{FieldMap, Locator, MapKey},
    hydrator::{Hydration, HydratorOptions, run},
    projection::{FieldRef, Projection}
};

/// Field list selecting every declared field in [`Dto::to_array`].
pub const WILDCARD: &str = "*";

/// Declared fields found in the source data during hydration.
///
/// Kept in the order they were found. There is no public way to add names:
/// the set is installed once by the hydrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UsedFields {
    names: Vec<&'static str>
}

impl UsedFields {
    pub(crate) fn from_names(names: Vec<&'static str>) -> Self {
        Self {
            names
        }
    }

    /// Check whether `name` was found in the source data.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|used| *used == name)
    }

    /// Names in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    /// Number of used fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no field was found.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Record contract: a value object with a fixed set of named fields.
///
/// Dyn compatible. Functions that construct a DTO are gated on
/// `Self: Sized`; projections work through `&dyn Dto`.
///
/// `assign` and `set_used_fields` take a [`Hydration`] context, which only
/// this crate can create, so they are unreachable outside a hydration run.
pub trait Dto: Any {
    /// Type name used by [`DtoRegistry`](crate::DtoRegistry).
    fn dto_name() -> &'static str
    where
        Self: Sized;

    /// Declared field names, in declaration order.
    fn declared_fields() -> &'static [&'static str]
    where
        Self: Sized;

    /// Default field map, used when hydrating without an explicit map.
    ///
    /// Maps every declared field to the path of the same name.
    fn fields() -> FieldMap
    where
        Self: Sized
    {
        FieldMap::from_fields(Self::declared_fields())
    }

    /// Instance holding every field's static default.
    fn blank() -> Self
    where
        Self: Sized;

    /// Write a source value into a declared field.
    #[doc(hidden)]
    fn assign(&mut self, field: &str, value: Value, cx: &mut Hydration<'_>) -> Result<(), Mismatch>;

    /// Install the used-fields set at the end of a hydration.
    #[doc(hidden)]
    fn set_used_fields(&mut self, used: UsedFields, cx: &Hydration<'_>);

    /// Declared field names of this instance's type.
    fn field_names(&self) -> &'static [&'static str];

    /// Projected value of a declared field.
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Fields found in the source data when this instance was hydrated.
    fn used_fields(&self) -> &UsedFields;

    /// Hydrate from `data` with the default field map.
    fn hydrate(data: &Value) -> Self
    where
        Self: Sized
    {
        run::<Self>(&Self::fields(), data, &HydratorOptions::default(), 0)
    }

    /// Hydrate from `data` with `map`; an empty map means the default map.
    fn hydrate_with(data: &Value, map: &FieldMap) -> Self
    where
        Self: Sized
    {
        if map.is_empty() {
            return Self::hydrate(data);
        }
        run::<Self>(map, data, &HydratorOptions::default(), 0)
    }

    /// Hydrate from `data` with raw, not yet normalized map entries.
    ///
    /// # Errors
    ///
    /// [`HydrateError::InvalidMapEntry`] if a positional entry is not a path.
    fn try_hydrate<I, K>(data: &Value, entries: I) -> Result<Self, HydrateError>
    where
        Self: Sized,
        I: IntoIterator<Item = (K, Locator)>,
        K: Into<MapKey>
    {
        let map = FieldMap::normalize(entries)?;
        Ok(Self::hydrate_with(data, &map))
    }

    /// Project fields into an ordered map.
    ///
    /// - `&[]`: the used fields, in declaration order
    /// - `&["*"]`: every declared field
    /// - anything else: exactly the named fields in the given order;
    ///   names the type does not declare project as `null`
    ///
    /// Nested DTOs and collections are borrowed, not converted. Use
    /// [`to_array_recursive`](Dto::to_array_recursive) for plain data.
    fn to_array(&self, fields: &[&str]) -> Projection<'_> {
        let mut projection = Projection::default();
        match fields {
            [] => {
                let used = self.used_fields();
                for name in self.field_names().iter().filter(|name| used.contains(name)) {
                    if let Some(value) = self.field(name) {
                        projection.insert(name, value);
                    }
                }
            }
            [WILDCARD] => {
                for name in self.field_names() {
                    if let Some(value) = self.field(name) {
                        projection.insert(name, value);
                    }
                }
            }
            names => {
                for name in names {
                    let value = self.field(name).unwrap_or(FieldRef::Value(Value::Null));
                    projection.insert(name, value);
                }
            }
        }
        projection
    }

    /// Like [`to_array`](Dto::to_array), with nested DTOs and collections
    /// converted to plain JSON through their own used-field projections.
    fn to_array_recursive(&self, fields: &[&str]) -> Map<String, Value> {
        self.to_array(fields).to_data()
    }
}

impl dyn Dto {
    /// Downcast a type-erased DTO.
    pub fn downcast_ref<T: Dto>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Types that can present themselves as a DTO.
///
/// # Example
///
/// ```rust,ignore
/// impl Dtoable for User {
///     type Dto = UserDto;
///
///     fn to_dto(&self) -> UserDto {
///         UserDto::hydrate(&json!({"id": self.id, "name": self.name}))
///     }
/// }
/// ```
pub trait Dtoable {
    /// DTO type produced.
    type Dto: Dto;

    /// Build the DTO view of `self`.
    fn to_dto(&self) -> Self::Dto;
}
