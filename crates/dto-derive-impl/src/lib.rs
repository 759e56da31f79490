// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Proc-macro implementation behind `dto-derive`.
//!
//! Use the `dto-derive` crate instead; it re-exports this macro together
//! with the runtime it expands to.
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[dto(...)]`
//!
//! ```rust,ignore
//! #[derive(Dto)]
//! #[dto(
//!     map = "model_map",          // Optional: fn() -> FieldMap used as the default map
//!     rename_all = "camelCase",   // Optional: external naming of every field
//!     crate = "::dto_core"        // Optional: path of the runtime crate
//! )]
//! pub struct ModelDto { /* ... */ }
//! ```
//!
//! ## Field-Level `#[dto(...)]`
//!
//! ```rust,ignore
//! pub struct ModelDto {
//!     #[dto(rename = "guid")]         // External name
//!     pub id: Option<i64>,
//!
//!     #[dto(default = "vec![1]")]     // Static default other than Default::default()
//!     pub props: Vec<i64>,
//!
//!     #[dto(plain)]                   // Convert through serde instead of FieldType
//!     pub tags: BTreeSet<String>,
//!
//!     #[dto(skip)]                    // Not a declared field
//!     pub cache: Option<String>,
//!
//!     used: UsedFields,               // Used-fields slot, detected by type
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated | Description |
//! |-----------|-------------|
//! | `impl Dto` | Declared fields, blank instance, field assignment and projection |
//! | `impl FieldType` | Lets the type be auto-cast when nested in another DTO |
//! | getters | `fn name(&self) -> &T` for every non-`pub` declared field |

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod dto;

use proc_macro::TokenStream;

/// Derive macro implementing `Dto` and `FieldType` for a named struct.
///
/// # Example
///
/// ```rust,ignore
/// use dto_derive::{Dto, UsedFields};
///
/// #[derive(Dto)]
/// pub struct ModelDto {
///     pub id: Option<i64>,
///     pub name: Option<String>,
///     used: UsedFields,
/// }
///
/// let dto = ModelDto::hydrate(&json!({"id": 6, "unknown": 1}));
/// assert_eq!(dto.id, Some(6));
/// assert!(dto.used_fields().contains("id"));
/// ```
///
/// # Errors
///
/// Compile errors are reported for:
///
/// - enums, unions, tuple and unit structs
/// - a struct without a `UsedFields` field, or with more than one
/// - two fields sharing one external name
/// - unknown or malformed `#[dto(...)]` options
#[proc_macro_derive(Dto, attributes(dto))]
pub fn derive_dto(input: TokenStream) -> TokenStream {
    dto::derive(input)
}
