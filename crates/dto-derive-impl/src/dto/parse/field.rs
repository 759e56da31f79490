// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Supported Options
//!
//! | Option | Effect |
//! |--------|--------|
//! | `rename = "name"` | External name, overrides `rename_all` |
//! | `default = "expr"` | Static default instead of `Default::default()` |
//! | `plain` | Convert through serde instead of `FieldType` |
//! | `skip` | Not declared; never hydrated or projected |
//! | `used` | Marks the `UsedFields` slot |
//!
//! A field whose type is named `UsedFields` is the slot without `used`.

use syn::{Expr, Field, Ident, LitStr, Type, Visibility, ext::IdentExt};

use super::RenameRule;

/// Field definition with all parsed options.
///
/// # Example
///
/// ```rust,ignore
/// #[dto(rename = "guid")]       // name = "guid"
/// pub id: Option<i64>,
///
/// #[dto(default = "vec![1]")]   // default = Some(vec![1])
/// props: Vec<i64>,
///
/// used: UsedFields,             // used = true
/// ```
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Field visibility.
    pub vis: Visibility,

    /// External name used in field maps and projections.
    pub name: String,

    /// Static default expression.
    pub default: Option<Expr>,

    /// Convert through serde.
    pub plain: bool,

    /// Excluded from the declared fields.
    pub skip: bool,

    /// Holds the used-fields set.
    pub used: bool
}

impl FieldDef {
    /// Parse a field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - tuple struct field (no identifier)
    /// - unknown or malformed `#[dto(...)]` option
    /// - options combined with the used-fields slot
    pub fn from_field(field: &Field, rename_all: Option<RenameRule>) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Dto fields must be named").with_span(field)
        })?;

        let mut rename = None;
        let mut default = None;
        let mut plain = false;
        let mut skip = false;
        let mut used = is_used_fields_type(&field.ty);

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("dto")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    rename = Some(value.value());
                } else if meta.path.is_ident("default") {
                    let value: LitStr = meta.value()?.parse()?;
                    default = Some(value.parse::<Expr>()?);
                } else if meta.path.is_ident("plain") {
                    plain = true;
                } else if meta.path.is_ident("skip") {
                    skip = true;
                } else if meta.path.is_ident("used") {
                    used = true;
                } else {
                    return Err(meta.error("unknown dto field option"));
                }
                Ok(())
            })?;
        }

        if used && (rename.is_some() || default.is_some() || plain || skip) {
            return Err(darling::Error::custom(
                "the UsedFields field does not accept other dto options"
            )
            .with_span(&ident));
        }

        let name = match rename {
            Some(name) => name,
            None => {
                let raw = ident.unraw().to_string();
                match rename_all {
                    Some(rule) => rule.apply(&raw),
                    None => raw
                }
            }
        };

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            vis: field.vis.clone(),
            name,
            default,
            plain,
            skip,
            used
        })
    }

    /// Check if the field takes part in hydration and projection.
    #[must_use]
    pub fn is_declared(&self) -> bool {
        !self.skip && !self.used
    }

    /// Check if the field needs a generated getter.
    #[must_use]
    pub fn needs_getter(&self) -> bool {
        self.is_declared() && matches!(self.vis, Visibility::Inherited)
    }
}

/// Check if the type's last path segment is `UsedFields`.
fn is_used_fields_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
    {
        return segment.ident == "UsedFields";
    }
    false
}
