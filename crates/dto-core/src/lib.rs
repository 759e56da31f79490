// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for dto-derive.
//!
//! This crate is the runtime behind `#[derive(Dto)]`: it turns loosely-typed
//! JSON into typed DTOs and projects them back into (partial) JSON. It can
//! also be used standalone with hand-written [`Dto`] implementations.
//!
//! # Overview
//!
//! - [`FieldMap`]: which source path (or extractor) feeds which field
//! - [`Hydrator`]: resolves a field map against source data
//! - [`Dto`]: the record contract, hydration entry points and projections
//! - [`FieldType`]: per-type conversion, including nested auto-casting
//! - [`Collection`] / [`DtoList`]: containers of DTOs
//! - [`DtoRegistry`]: pick a target type by name at runtime
//! - [`prelude`]: convenient re-exports
//!
//! # Usage
//!
//! Most users should use `dto-derive`, which re-exports this crate:
//!
//! ```rust,ignore
//! use dto_derive::{Dto, FieldMap, UsedFields};
//!
//! #[derive(Dto)]
//! pub struct ModelDto {
//!     pub id: Option<i64>,
//!     pub name: Option<String>,
//!     used: UsedFields,
//! }
//!
//! let map = FieldMap::builder().field("id").path("name", "path.name").build();
//! let dto = ModelDto::hydrate_with(&json!({"id": 2, "path": {"name": "X"}}), &map);
//! assert_eq!(Value::Object(dto.to_array_recursive(&[])), json!({"id": 2, "name": "X"}));
//! ```

#![warn(missing_docs)]

pub mod collection;
pub mod dto;
pub mod error;
pub mod field;
pub mod field_map;
pub mod hydrator;
pub mod path;
pub mod prelude;
pub mod projection;
pub mod registry;

pub use collection::{Collection, DtoList};
pub use dto::{Dto, Dtoable, UsedFields, WILDCARD};
pub use error::{HydrateError, Mismatch};
pub use field::FieldType;
pub use field_map::{Extractor, FieldMap, FieldMapBuilder, Locator, MapKey};
pub use hydrator::{DEFAULT_MAX_DEPTH, Hydration, Hydrator, HydratorOptions, is_associative};
pub use projection::{FieldRef, Projection};
pub use registry::DtoRegistry;
/// Re-export for generated code.
#[doc(hidden)]
pub use serde_json;
