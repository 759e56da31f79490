// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Dto` implementation generation.
//!
//! # Generated Code
//!
//! For a DTO `ModelDto { pub id: Option<i64>, used: UsedFields }`:
//!
//! ```rust,ignore
//! impl dto_core::Dto for ModelDto {
//!     fn dto_name() -> &'static str { "ModelDto" }
//!     fn declared_fields() -> &'static [&'static str] { &["id"] }
//!     fn blank() -> Self { Self { id: Default::default(), used: Default::default() } }
//!
//!     fn assign(&mut self, field: &str, value: Value, cx: &mut Hydration<'_>)
//!         -> Result<(), Mismatch>
//!     {
//!         match field {
//!             "id" => { self.id = <Option<i64> as FieldType>::from_source(value, cx)?; Ok(()) }
//!             _ => Err(Mismatch::new("declared field", &value))
//!         }
//!     }
//!
//!     fn set_used_fields(&mut self, used: UsedFields, _cx: &Hydration<'_>) { self.used = used; }
//!     fn field_names(&self) -> &'static [&'static str] { <Self as Dto>::declared_fields() }
//!     fn field(&self, name: &str) -> Option<FieldRef<'_>> { ... }
//!     fn used_fields(&self) -> &UsedFields { &self.used }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use super::parse::{DtoDef, FieldDef};

/// Generates the `Dto` implementation.
pub fn generate(dto: &DtoDef) -> TokenStream {
    let krate = dto.runtime();
    let ident = dto.name();
    let dto_name = ident.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = dto.generics.split_for_impl();

    let declared: Vec<&FieldDef> = dto.declared_fields().collect();
    let names = declared.iter().map(|field| field.name.as_str());
    let used = &dto.used_field().ident;

    let fields_fn = dto.default_map().map(|map| {
        quote! {
            fn fields() -> #krate::FieldMap {
                #map()
            }
        }
    });

    let inits = dto.fields.iter().map(|field| {
        let ident = &field.ident;
        match &field.default {
            Some(expr) => quote! { #ident: #expr },
            None => quote! { #ident: ::core::default::Default::default() }
        }
    });

    let assign_arms = declared.iter().map(|field| {
        let ident = &field.ident;
        let name = &field.name;
        let ty = &field.ty;
        let convert = if field.plain {
            quote! { #krate::field::plain::from_source(value)? }
        } else {
            quote! { <#ty as #krate::FieldType>::from_source(value, cx)? }
        };
        quote! {
            #name => {
                self.#ident = #convert;
                ::core::result::Result::Ok(())
            }
        }
    });

    let field_arms = declared.iter().map(|field| {
        let ident = &field.ident;
        let name = &field.name;
        let project = if field.plain {
            quote! { #krate::field::plain::project(&self.#ident) }
        } else {
            quote! { #krate::FieldType::project(&self.#ident) }
        };
        quote! { #name => ::core::option::Option::Some(#project), }
    });

    quote! {
        impl #impl_generics #krate::Dto for #ident #ty_generics #where_clause {
            fn dto_name() -> &'static str {
                #dto_name
            }

            fn declared_fields() -> &'static [&'static str] {
                &[#(#names),*]
            }

            #fields_fn

            fn blank() -> Self {
                Self {
                    #(#inits),*
                }
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                field: &str,
                value: #krate::serde_json::Value,
                cx: &mut #krate::Hydration<'_>
            ) -> ::core::result::Result<(), #krate::Mismatch> {
                match field {
                    #(#assign_arms)*
                    _ => ::core::result::Result::Err(#krate::Mismatch::new("declared field", &value))
                }
            }

            fn set_used_fields(&mut self, used: #krate::UsedFields, _cx: &#krate::Hydration<'_>) {
                self.#used = used;
            }

            fn field_names(&self) -> &'static [&'static str] {
                <Self as #krate::Dto>::declared_fields()
            }

            fn field(&self, name: &str) -> ::core::option::Option<#krate::FieldRef<'_>> {
                match name {
                    #(#field_arms)*
                    _ => ::core::option::Option::None
                }
            }

            fn used_fields(&self) -> &#krate::UsedFields {
                &self.#used
            }
        }
    }
}
