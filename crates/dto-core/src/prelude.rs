// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dto_core::prelude::*;
//! ```

pub use crate::{
    Collection, Dto, DtoList, DtoRegistry, Dtoable, FieldMap, FieldRef, FieldType, HydrateError,
    Hydrator, HydratorOptions, Locator, MapKey, UsedFields
};
