// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_derive::Dto;

#[derive(Dto)]
pub enum Status {
    Active,
    Inactive,
}

fn main() {}
