// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field renaming rules for `#[dto(rename_all = "...")]`.

use convert_case::{Case, Casing};
use darling::FromMeta;

/// External naming rule for declared fields.
///
/// # Variants
///
/// | Value | Rule | `created_at` becomes |
/// |-------|------|----------------------|
/// | `"camelCase"` | `Camel` | `createdAt` |
/// | `"PascalCase"` | `Pascal` | `CreatedAt` |
/// | `"snake_case"` | `Snake` | `created_at` |
/// | `"kebab-case"` | `Kebab` | `created-at` |
/// | `"SCREAMING_SNAKE_CASE"` | `ScreamingSnake` | `CREATED_AT` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    Snake,
    /// `kebab-case`
    Kebab,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake
}

impl RenameRule {
    /// Apply the rule to a Rust field name.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Camel => name.to_case(Case::Camel),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Snake => name.to_case(Case::Snake),
            Self::Kebab => name.to_case(Case::Kebab),
            Self::ScreamingSnake => name.to_case(Case::Constant)
        }
    }
}

impl FromMeta for RenameRule {
    /// Parse the rule from its serde-style spelling.
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            other => Err(darling::Error::unknown_value(other))
        }
    }
}
