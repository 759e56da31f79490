// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DTOs shared by the integration tests.

use dto_derive::{Collection, Dto, DtoList, UsedFields};
use indexmap::IndexMap;

#[derive(Debug, Dto)]
pub struct ModelDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub tree: Option<String>,
    #[dto(rename = "camelCase")]
    pub camel_case: Option<String>,
    pub props: Vec<i64>,
    used: UsedFields,
}

#[derive(Debug, Dto)]
#[dto(rename_all = "camelCase")]
pub struct ModelExtendedDto {
    pub id: Option<i64>,
    pub model_dto: Option<ModelDto>,
    pub model_second_dto: Option<ModelDto>,
    pub model_extended_dto: Option<Box<ModelExtendedDto>>,
    pub collection: Option<ModelDtoCollection>,
    pub extended_collection: Option<DtoList<ModelExtendedDto>>,
    used: UsedFields,
}

/// Model DTOs indexed by id.
#[derive(Debug, Default)]
pub struct ModelDtoCollection {
    items: IndexMap<i64, ModelDto>,
}

impl Collection for ModelDtoCollection {
    type Item = ModelDto;
    type Key = i64;

    fn attach(&mut self, item: ModelDto) {
        self.items.insert(item.id.unwrap_or_default(), item);
    }

    fn get(&self, key: &i64) -> Option<&ModelDto> {
        self.items.get(key)
    }

    fn iter(&self) -> impl Iterator<Item = &ModelDto> {
        self.items.values()
    }
}

dto_derive::collection_field!(ModelDtoCollection);
