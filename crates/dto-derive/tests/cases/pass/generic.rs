// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Test for a generic DTO.

use dto_derive::{Dto, FieldType, UsedFields};

#[derive(Debug, Dto)]
pub struct Envelope<T>
where
    T: FieldType + Default + 'static
{
    pub payload: T,
    pub kind: Option<String>,
    used: UsedFields,
}

fn main() {
    let _: fn(&serde_json::Value) -> Envelope<i64> = Envelope::<i64>::hydrate;
}
