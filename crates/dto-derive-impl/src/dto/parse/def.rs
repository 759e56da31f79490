// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DtoDef definition and constructor.

use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident};

use super::{DtoAttrs, FieldDef};

/// Complete parsed DTO definition.
///
/// Combines the struct-level `#[dto(...)]` attributes with every field.
#[derive(Debug)]
pub struct DtoDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Runtime crate path.
    pub krate: syn::Path,

    /// Custom default map function.
    pub map: Option<syn::Path>,

    /// All fields, in declaration order.
    pub fields: Vec<FieldDef>,

    /// Index of the `UsedFields` slot in `fields`.
    used_index: usize
}

impl DtoDef {
    /// Parse a DTO definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - applied to an enum, union, tuple or unit struct
    /// - no `UsedFields` field, or more than one
    /// - two declared fields with the same external name
    /// - invalid attribute values
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => &named.named,
                _ => {
                    return Err(darling::Error::custom("Dto requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom("Dto can only be derived for structs")
                    .with_span(&input.ident));
            }
        };

        let attrs = DtoAttrs::from_derive_input(input)?;
        let fields: Vec<FieldDef> = named
            .iter()
            .map(|field| FieldDef::from_field(field, attrs.rename_all))
            .collect::<darling::Result<Vec<_>>>()?;

        let used_index = match (used_slot(&fields, &input.ident), check_names(&fields)) {
            (Ok(index), Ok(())) => index,
            (used, names) => {
                let errors = used.err().into_iter().chain(names.err()).collect();
                return Err(darling::Error::multiple(errors));
            }
        };

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            krate: attrs.krate,
            map: attrs.map,
            fields,
            used_index
        })
    }

    /// Struct identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Runtime crate path for generated code.
    #[must_use]
    pub fn runtime(&self) -> &syn::Path {
        &self.krate
    }

    /// Custom default map function, if any.
    #[must_use]
    pub fn default_map(&self) -> Option<&syn::Path> {
        self.map.as_ref()
    }

    /// Declared fields, in declaration order.
    pub fn declared_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.is_declared())
    }

    /// The `UsedFields` slot.
    #[must_use]
    pub fn used_field(&self) -> &FieldDef {
        &self.fields[self.used_index]
    }
}

fn used_slot(fields: &[FieldDef], ident: &Ident) -> darling::Result<usize> {
    let mut slots = fields.iter().enumerate().filter(|(_, field)| field.used);
    let Some((index, _)) = slots.next() else {
        return Err(
            darling::Error::custom("Dto requires one field of type `UsedFields`").with_span(ident)
        );
    };

    let extra: Vec<darling::Error> = slots
        .map(|(_, field)| {
            darling::Error::custom("Dto allows only one `UsedFields` field")
                .with_span(&field.ident)
        })
        .collect();
    if extra.is_empty() {
        Ok(index)
    } else {
        Err(darling::Error::multiple(extra))
    }
}

fn check_names(fields: &[FieldDef]) -> darling::Result<()> {
    let mut seen: Vec<&str> = Vec::with_capacity(fields.len());
    let mut errors = Vec::new();

    for field in fields.iter().filter(|field| field.is_declared()) {
        if seen.contains(&field.name.as_str()) {
            errors.push(
                darling::Error::custom(format!("duplicate external field name `{}`", field.name))
                    .with_span(&field.ident)
            );
        } else {
            seen.push(&field.name);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(darling::Error::multiple(errors))
    }
}
