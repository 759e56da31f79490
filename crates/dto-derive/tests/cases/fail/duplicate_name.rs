// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_derive::{Dto, UsedFields};

#[derive(Dto)]
pub struct ModelDto {
    pub id: Option<i64>,
    #[dto(rename = "id")]
    pub guid: Option<i64>,
    used: UsedFields,
}

fn main() {}
