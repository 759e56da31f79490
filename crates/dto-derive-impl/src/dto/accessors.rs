// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Getter generation for non-`pub` declared fields.
//!
//! ```rust,ignore
//! impl ModelDto {
//!     /// Value of the `name` field.
//!     #[must_use]
//!     pub fn name(&self) -> &Option<String> {
//!         &self.name
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::DtoDef;

/// Generates getters, or nothing when every declared field is `pub`.
pub fn generate(dto: &DtoDef) -> TokenStream {
    let getters: Vec<TokenStream> = dto
        .fields
        .iter()
        .filter(|field| field.needs_getter())
        .map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let doc = format!("Value of the `{}` field.", field.name);
            quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #ident(&self) -> &#ty {
                    &self.#ident
                }
            }
        })
        .collect();

    if getters.is_empty() {
        return TokenStream::new();
    }

    let ident = dto.name();
    let (impl_generics, ty_generics, where_clause) = dto.generics.split_for_impl();

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#getters)*
        }
    }
}
