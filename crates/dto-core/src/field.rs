// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field type capability.
//!
//! Every DTO field type implements [`FieldType`], which decides how a raw
//! source value becomes a field value and how the field projects back out.
//! This is where auto-casting is chosen: the impl for a derived DTO asks the
//! hydrator for a nested record, the impl for a collection asks for a
//! collection, and scalars go through serde.
//!
//! | Type | Accepts | Projects as |
//! |------|---------|-------------|
//! | scalars, `String` | matching JSON scalar | [`FieldRef::Value`] |
//! | [`Value`] | anything | [`FieldRef::Value`] |
//! | `Option<T>` | `null` or what `T` accepts | `null` or `T`'s projection |
//! | `Box<T>` | what `T` accepts | `T`'s projection |
//! | `Vec<T>` | array of what `T` accepts | [`FieldRef::List`] |
//! | `#[derive(Dto)]` types | associative object | [`FieldRef::Record`] |
//! | [`Collection`](crate::Collection) types | array of objects | [`FieldRef::Collection`] |
//!
//! Types outside this table can be used with `#[dto(plain)]`, which routes
//! the field through [`plain`].

use serde_json::Value;

use crate::{error::Mismatch, hydrator::Hydration, projection::FieldRef};

/// How a field type is read from source data and projected back.
pub trait FieldType: Sized {
    /// Convert a value found in the source data.
    ///
    /// # Errors
    ///
    /// [`Mismatch`] when the value does not fit; the hydrator then keeps
    /// the field's static default.
    fn from_source(value: Value, cx: &mut Hydration<'_>) -> Result<Self, Mismatch>;

    /// Projected view of the field value.
    fn project(&self) -> FieldRef<'_>;
}

/// Serde-backed conversion for plain data types.
pub mod plain {
    use serde::{Serialize, de::DeserializeOwned};
    use serde_json::Value;

    use crate::{error::Mismatch, projection::FieldRef};

    /// Deserialize `T` from a source value without copying it.
    ///
    /// # Errors
    ///
    /// [`Mismatch`] naming `T` when deserialization fails.
    pub fn from_source<T: DeserializeOwned>(value: Value) -> Result<T, Mismatch> {
        T::deserialize(&value).map_err(|_| Mismatch::new(std::any::type_name::<T>(), &value))
    }

    /// Serialize `value` as a projected plain value.
    ///
    /// A value that fails to serialize projects as `null`.
    pub fn project<T: Serialize>(value: &T) -> FieldRef<'static> {
        match serde_json::to_value(value) {
            Ok(value) => FieldRef::Value(value),
            Err(err) => {
                tracing::debug!(error = %err, "field value did not serialize, projecting null");
                FieldRef::Value(Value::Null)
            }
        }
    }
}

macro_rules! scalar_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldType for $ty {
                fn from_source(value: Value, _cx: &mut Hydration<'_>) -> Result<Self, Mismatch> {
                    plain::from_source(value)
                }

                fn project(&self) -> FieldRef<'_> {
                    plain::project(self)
                }
            }
        )+
    };
}

scalar_field!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char, String
);

impl FieldType for Value {
    fn from_source(value: Value, _cx: &mut Hydration<'_>) -> Result<Self, Mismatch> {
        Ok(value)
    }

    fn project(&self) -> FieldRef<'_> {
        FieldRef::Value(self.clone())
    }
}

impl<T: FieldType> FieldType for Option<T> {
    fn from_source(value: Value, cx: &mut Hydration<'_>) -> Result<Self, Mismatch> {
        match value {
            Value::Null => Ok(None),
            value => T::from_source(value, cx).map(Some)
        }
    }

    fn project(&self) -> FieldRef<'_> {
        match self {
            Some(value) => value.project(),
            None => FieldRef::Value(Value::Null)
        }
    }
}

impl<T: FieldType> FieldType for Box<T> {
    fn from_source(value: Value, cx: &mut Hydration<'_>) -> Result<Self, Mismatch> {
        T::from_source(value, cx).map(Box::new)
    }

    fn project(&self) -> FieldRef<'_> {
        (**self).project()
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn from_source(value: Value, cx: &mut Hydration<'_>) -> Result<Self, Mismatch> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| T::from_source(item, cx))
                .collect(),
            other => Err(Mismatch::new("array", &other))
        }
    }

    fn project(&self) -> FieldRef<'_> {
        FieldRef::List(self.iter().map(FieldType::project).collect())
    }
}
