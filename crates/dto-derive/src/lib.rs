// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hydrate typed DTOs from loosely-typed JSON data.
//!
//! `#[derive(Dto)]` turns a plain struct into a data transfer object that
//! can be filled from a `serde_json::Value` through a field map of paths
//! and extractors, and projected back into (partial) JSON.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dto_derive::{Dto, FieldMap, UsedFields};
//! use serde_json::json;
//!
//! #[derive(Debug, Dto)]
//! pub struct ModelDto {
//!     pub id: Option<i64>,
//!     pub name: Option<String>,
//!     pub props: Vec<i64>,
//!     used: UsedFields,
//! }
//!
//! // Default map: every declared field reads the key of the same name.
//! let dto = ModelDto::hydrate(&json!({"id": 6, "name": "X", "unknown": 123}));
//! assert_eq!(dto.id, Some(6));
//!
//! // Only fields found in the data are projected by default.
//! assert_eq!(Value::Object(dto.to_array_recursive(&[])), json!({"id": 6, "name": "X"}));
//!
//! // Explicit map with dotted paths and extractors.
//! let map = FieldMap::builder()
//!     .field("id")
//!     .path("name", "path.sub.name")
//!     .extract("props", |data| data.get("props").cloned().unwrap_or(json!([])))
//!     .build();
//! let dto = ModelDto::hydrate_with(&data, &map);
//! ```
//!
//! # Nested DTOs and Collections
//!
//! Fields typed as another derived DTO are hydrated from nested objects,
//! and fields typed as a [`Collection`] from arrays of objects:
//!
//! ```rust,ignore
//! #[derive(Dto)]
//! #[dto(rename_all = "camelCase")]
//! pub struct ModelExtendedDto {
//!     pub id: Option<i64>,
//!     pub model_dto: Option<ModelDto>,
//!     pub model_extended_dto: Option<Box<ModelExtendedDto>>,
//!     pub items: Option<DtoList<ModelDto>>,
//!     used: UsedFields,
//! }
//! ```
//!
//! # Runtime Crate Path
//!
//! Generated code refers to `::dto_core`. Depend on `dto-core` next to
//! this crate, or point the macro at the re-export:
//!
//! ```rust,ignore
//! #[derive(Dto)]
//! #[dto(crate = "::dto_derive")]
//! pub struct ModelDto { /* ... */ }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub use dto_core::*;
pub use dto_derive_impl::Dto;
