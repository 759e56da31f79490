// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dto derive macro implementation.
//!
//! Orchestrates parsing of the struct definition and delegates code
//! generation to the submodules.
//!
//! # Architecture
//!
//! ```text
//! dto.rs (orchestrator)
//! │
//! ├── parse/          → Attribute parsing (DtoDef, FieldDef, RenameRule)
//! │
//! ├── record.rs       → impl Dto
//! ├── field_type.rs   → impl FieldType (nested auto-cast)
//! └── accessors.rs    → getters for non-pub fields
//! ```
//!
//! # Generated Code
//!
//! For a DTO like:
//!
//! ```rust,ignore
//! #[derive(Dto)]
//! pub struct ModelDto {
//!     pub id: Option<i64>,
//!     name: Option<String>,
//!     used: UsedFields,
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl Dto for ModelDto` | Record contract used by the hydrator |
//! | `impl FieldType for ModelDto` | Auto-cast when nested in another DTO |
//! | `fn name(&self) -> &Option<String>` | Read access to the private field |

mod accessors;
mod field_type;
pub mod parse;
mod record;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::DtoDef;

/// Main entry point for the Dto derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match DtoDef::from_derive_input(&input) {
        Ok(dto) => generate(&dto).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(dto: &DtoDef) -> proc_macro2::TokenStream {
    let record = record::generate(dto);
    let field_type = field_type::generate(dto);
    let accessors = accessors::generate(dto);

    quote! {
        #record
        #field_type
        #accessors
    }
}
