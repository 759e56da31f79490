// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DTO collections.
//!
//! A field whose type is a [`Collection`] of DTOs is auto-cast from an
//! array of objects: one DTO is hydrated per item and attached in order.
//!
//! [`DtoList`] covers the common positional case. Collections with their
//! own indexing implement [`Collection`] and register with
//! [`collection_field!`](crate::collection_field):
//!
//! ```rust,ignore
//! #[derive(Default)]
//! pub struct ModelDtoCollection {
//!     items: IndexMap<i64, ModelDto>
//! }
//!
//! impl Collection for ModelDtoCollection {
//!     type Item = ModelDto;
//!     type Key = i64;
//!
//!     fn attach(&mut self, item: ModelDto) {
//!         self.items.insert(item.id.unwrap_or_default(), item);
//!     }
//!
//!     fn get(&self, key: &i64) -> Option<&ModelDto> {
//!         self.items.get(key)
//!     }
//!
//!     fn iter(&self) -> impl Iterator<Item = &ModelDto> {
//!         self.items.values()
//!     }
//! }
//!
//! dto_core::collection_field!(ModelDtoCollection);
//! ```

use std::any::TypeId;

use serde_json::Value;

use crate::{
    dto::Dto, error::Mismatch, field::FieldType, hydrator::Hydration, projection::FieldRef
};

/// Ordered container of DTOs of one element type.
pub trait Collection: Default + 'static {
    /// Element type.
    type Item: Dto;

    /// Key accepted by [`get`](Collection::get).
    type Key;

    /// Append an element.
    fn attach(&mut self, item: Self::Item);

    /// Element stored under `key`.
    fn get(&self, key: &Self::Key) -> Option<&Self::Item>;

    /// Elements in order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// Number of elements.
    fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type of the elements.
    fn element_type(&self) -> TypeId {
        TypeId::of::<Self::Item>()
    }
}

/// Implement [`FieldType`](crate::FieldType) for collection types so they
/// auto-cast from arrays of objects.
#[macro_export]
macro_rules! collection_field {
    ($($collection:ty),+ $(,)?) => {
        $(
            impl $crate::FieldType for $collection {
                fn from_source(
                    value: $crate::serde_json::Value,
                    cx: &mut $crate::Hydration<'_>
                ) -> ::core::result::Result<Self, $crate::Mismatch> {
                    cx.cast_collection::<Self>(value)
                }

                fn project(&self) -> $crate::FieldRef<'_> {
                    $crate::FieldRef::collection(self)
                }
            }
        )+
    };
}

/// Positional DTO collection, indexed by insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DtoList<T> {
    items: Vec<T>
}

impl<T> DtoList<T> {
    /// Empty list.
    pub const fn new() -> Self {
        Self {
            items: Vec::new()
        }
    }

    /// Elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Take the elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for DtoList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Dto> Collection for DtoList<T> {
    type Item = T;
    type Key = usize;

    fn attach(&mut self, item: T) {
        self.items.push(item);
    }

    fn get(&self, key: &usize) -> Option<&T> {
        self.items.get(*key)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Dto> FieldType for DtoList<T> {
    fn from_source(value: Value, cx: &mut Hydration<'_>) -> Result<Self, Mismatch> {
        cx.cast_collection::<Self>(value)
    }

    fn project(&self) -> FieldRef<'_> {
        FieldRef::collection(self)
    }
}

impl<T> FromIterator<T> for DtoList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect()
        }
    }
}

impl<'a, T> IntoIterator for &'a DtoList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for DtoList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
