// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Test for every struct and field option.

use std::collections::BTreeSet;

use dto_derive::{Dto, FieldMap, UsedFields};

fn account_map() -> FieldMap {
    FieldMap::builder().path("id", "guid").field("userName").build()
}

#[derive(Debug, Dto)]
#[dto(map = "account_map", rename_all = "camelCase")]
pub struct AccountDto {
    id: Option<i64>,

    user_name: Option<String>,

    #[dto(rename = "labels", plain)]
    pub tags: BTreeSet<String>,

    #[dto(default = "vec![1]")]
    pub props: Vec<i64>,

    #[dto(skip)]
    pub cache: Option<String>,

    #[dto(used)]
    found: dto_derive::UsedFields,
}

fn main() {
    let _: fn(&AccountDto) -> &Option<i64> = AccountDto::id;
    let _: fn(&AccountDto) -> &Option<String> = AccountDto::user_name;
    let _ = UsedFields::default();
}
