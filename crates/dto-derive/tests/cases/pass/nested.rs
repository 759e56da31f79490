// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Test for nested, recursive and collection fields.

use dto_derive::{Dto, DtoList, UsedFields};

#[derive(Debug, Dto)]
pub struct ModelDto {
    pub id: Option<i64>,
    used: UsedFields,
}

#[derive(Debug, Dto)]
#[dto(rename_all = "camelCase")]
pub struct TreeDto {
    pub id: Option<i64>,
    pub model_dto: Option<ModelDto>,
    pub parent: Option<Box<TreeDto>>,
    pub children: DtoList<TreeDto>,
    pub models: Vec<ModelDto>,
    used: UsedFields,
}

fn main() {
    fn _check_field_type<T: dto_derive::FieldType>() {}
    _check_field_type::<ModelDto>();
    _check_field_type::<Option<Box<TreeDto>>>();
}
