// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_derive::Dto;

#[derive(Dto)]
pub struct ModelDto {
    pub id: Option<i64>,
}

fn main() {}
