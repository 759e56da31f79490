// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `FieldType` implementation generation.
//!
//! Every derived DTO can be used as the type of another DTO's field. Found
//! associative objects are hydrated into it with its own default map.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::DtoDef;

/// Generates the `FieldType` implementation.
pub fn generate(dto: &DtoDef) -> TokenStream {
    let krate = dto.runtime();
    let ident = dto.name();
    let (impl_generics, ty_generics, where_clause) = dto.generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::FieldType for #ident #ty_generics #where_clause {
            fn from_source(
                value: #krate::serde_json::Value,
                cx: &mut #krate::Hydration<'_>
            ) -> ::core::result::Result<Self, #krate::Mismatch> {
                cx.cast_record::<Self>(value)
            }

            fn project(&self) -> #krate::FieldRef<'_> {
                #krate::FieldRef::Record(self)
            }
        }
    }
}
