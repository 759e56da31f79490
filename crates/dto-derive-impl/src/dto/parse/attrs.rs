// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `map` | No | declared fields | `fn() -> FieldMap` used as the default map |
//! | `rename_all` | No | field names as written | External naming rule |
//! | `crate` | No | `::dto_core` | Path of the runtime crate |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

use super::RenameRule;

/// Runtime crate path used by generated code.
pub fn default_crate() -> syn::Path {
    syn::parse_quote!(::dto_core)
}

/// Struct-level attributes parsed from `#[dto(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[dto(map = "model_map", rename_all = "camelCase")]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(dto), supports(struct_named))]
pub struct DtoAttrs {
    /// Struct identifier (e.g., `ModelDto`).
    pub ident: Ident,

    /// Struct generics, forwarded to every generated impl.
    pub generics: Generics,

    /// Function returning the default field map.
    #[darling(default)]
    pub map: Option<syn::Path>,

    /// Naming rule applied to fields without `#[dto(rename)]`.
    #[darling(default)]
    pub rename_all: Option<RenameRule>,

    /// Runtime crate path.
    ///
    /// Needed when `dto-core` is reached through a re-export.
    #[darling(rename = "crate", default = "default_crate")]
    pub krate: syn::Path
}
