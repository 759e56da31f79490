// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing of `#[derive(Dto)]` input.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── attrs.rs  : DtoAttrs (darling parsing struct)
//! ├── def.rs    : DtoDef and its constructor
//! ├── field.rs  : FieldDef, field-level `#[dto(...)]` options
//! ├── rename.rs : RenameRule for `rename_all`
//! └── tests.rs  : Unit tests
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::dto::parse::DtoDef;
//!
//! let dto = DtoDef::from_derive_input(&input)?;
//!
//! let used = dto.used_field();
//! for field in dto.declared_fields() {
//!     // field.name is the external name
//! }
//! ```

mod attrs;
mod def;
mod field;
mod rename;

pub use attrs::DtoAttrs;
pub use def::DtoDef;
pub use field::FieldDef;
pub use rename::RenameRule;
