// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Test for `#[dto(crate = "...")]` pointing at the facade re-export.

use dto_derive::{Dto, UsedFields};

#[derive(Debug, Dto)]
#[dto(crate = "::dto_derive")]
pub struct ModelDto {
    pub id: Option<i64>,
    used: UsedFields,
}

fn main() {
    let _ = ModelDto::fields();
}
