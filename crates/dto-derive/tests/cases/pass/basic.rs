// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Test for a minimal DTO.

use dto_derive::{Dto, UsedFields};

#[derive(Debug, Dto)]
pub struct ModelDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub props: Vec<i64>,
    used: UsedFields,
}

fn main() {
    let _: fn(&serde_json::Value) -> ModelDto = ModelDto::hydrate;
    let _: &[&str] = ModelDto::declared_fields();
    assert_eq!(ModelDto::dto_name(), "ModelDto");
}
