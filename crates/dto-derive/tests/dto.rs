// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dto hydration and projection integration tests.

#[allow(dead_code)]
mod common;

use std::collections::BTreeSet;

use common::{ModelDto, ModelExtendedDto};
use dto_derive::{Dto, Dtoable, FieldMap, Locator, MapKey, UsedFields, WILDCARD};
use serde_json::{Value, json};

fn keys(dto: &impl Dto, fields: &[&str]) -> Vec<String> {
    dto.to_array(fields).keys().map(str::to_string).collect()
}

#[test]
fn hydrate_with_maps() {
    let cases = [
        (
            json!({"id": 1, "name": "NameHydrate", "props": [1, 2, 3]}),
            FieldMap::from_iter(["id", "name"]),
            json!({"id": 1, "name": "NameHydrate"})
        ),
        (
            json!({"id": 3, "name": "NameHydrate", "props": [1, 2, 3]}),
            FieldMap::from_iter(["id", "props"]),
            json!({"id": 3, "props": [1, 2, 3]})
        ),
        (
            json!({"id": 2, "path": {"name": "PathNameHydrate"}}),
            FieldMap::builder().field("id").path("name", "path.name").build(),
            json!({"id": 2, "name": "PathNameHydrate"})
        ),
        (
            json!({"id": 4, "path": {"sub": {"name": "PathSubNameHydrate"}}}),
            FieldMap::builder().field("id").path("name", "path.sub.name").build(),
            json!({"id": 4, "name": "PathSubNameHydrate"})
        ),
        (
            json!({"id": 6, "name": "NameHydrate", "unknown": 123}),
            FieldMap::new(),
            json!({"id": 6, "name": "NameHydrate"})
        ),
        (
            json!({"id": 7, "name": "NameHydrate", "props": [1, 2, 3]}),
            FieldMap::builder()
                .field("id")
                .field("name")
                .extract("props", |data| data.get("props").cloned().unwrap_or(json!([])))
                .build(),
            json!({"id": 7, "name": "NameHydrate", "props": [1, 2, 3]})
        ),
        (
            json!({"id": 8, "name": "NameHydrate", "props": [1, 2, 3]}),
            FieldMap::builder()
                .path("id", "id")
                .path("name", "name")
                .extract("props", |_| json!([]))
                .build(),
            json!({"id": 8, "name": "NameHydrate", "props": []})
        ),
        (
            json!({"id": 7, "name": null, "tree": null}),
            FieldMap::from_iter(["id", "name"]),
            json!({"id": 7, "name": null})
        )
    ];

    for (data, map, expected) in cases {
        let dto = ModelDto::hydrate_with(&data, &map);
        assert_eq!(Value::Object(dto.to_array_recursive(&[])), expected, "data: {data}");
    }
}

#[test]
fn default_projection_holds_found_fields_only() {
    let dto = ModelDto::hydrate(&json!({"id": 6, "name": "NameHydrate", "unknown": 123}));
    let data = dto.to_array(&[]);

    assert_eq!(data.len(), 2);
    assert!(data.contains_key("id"));
    assert!(data.contains_key("name"));
}

#[test]
fn projection_order() {
    let dto = ModelDto::hydrate(&json!({"tree": "tree", "name": "NameHydrate", "id": 6}));

    assert_eq!(keys(&dto, &["name", "id", "tree"]), vec!["name", "id", "tree"]);
    assert_eq!(keys(&dto, &[]), vec!["id", "name", "tree"]);
}

#[test]
fn explicit_fields_include_unset_ones() {
    let dto = ModelDto::hydrate(&json!({"id": 6, "name": "NameHydrate", "tree": "tree"}));
    let data = dto.to_array(&["id", "name", "camelCase"]);

    assert_eq!(data.keys().collect::<Vec<_>>(), vec!["id", "name", "camelCase"]);
    assert!(data.get("camelCase").unwrap().is_null());
}

#[test]
fn explicit_unknown_field_projects_null() {
    let dto = ModelDto::hydrate(&json!({"id": 6}));
    let data = dto.to_array_recursive(&["id", "missing"]);

    assert_eq!(Value::Object(data), json!({"id": 6, "missing": null}));
}

#[test]
fn wildcard_projects_every_declared_field() {
    let dto = ModelDto::hydrate(&json!({"id": 6}));

    assert_eq!(
        keys(&dto, &[WILDCARD]),
        vec!["id", "name", "tree", "camelCase", "props"]
    );
    assert_eq!(
        Value::Object(dto.to_array_recursive(&["*"])),
        json!({"id": 6, "name": null, "tree": null, "camelCase": null, "props": []})
    );
}

#[test]
fn unset_fields_keep_defaults() {
    let dto = ModelDto::hydrate(&json!({"id": 6, "name": "NameHydrate"}));

    assert!(dto.props.is_empty());
    assert_eq!(dto.tree, None);
}

#[test]
fn present_null_counts_as_found() {
    let dto = ModelDto::hydrate(&json!({"id": 6, "name": null}));
    let data = dto.to_array(&[]);

    assert_eq!(data.len(), 2);
    assert!(data.contains_key("id"));
    assert!(data.contains_key("name"));
    assert_eq!(dto.name, None);
}

#[test]
fn try_hydrate_rejects_positional_extractor() {
    let result = ModelDto::try_hydrate(
        &json!({"id": 1}),
        [(MapKey::Index(0), Locator::extractor(|_| Value::Null))]
    );

    assert!(result.is_err());
}

#[test]
fn try_hydrate_with_named_entries() {
    let dto = ModelDto::try_hydrate(
        &json!({"guid": 9}),
        [("id", Locator::from("guid"))]
    )
    .unwrap();

    assert_eq!(dto.id, Some(9));
}

#[test]
fn declared_fields_in_order() {
    assert_eq!(
        ModelDto::declared_fields(),
        &["id", "name", "tree", "camelCase", "props"]
    );
    assert_eq!(ModelDto::dto_name(), "ModelDto");
    assert_eq!(ModelDto::fields().len(), 5);
}

#[test]
fn blank_is_empty() {
    let dto = ModelDto::blank();

    assert_eq!(dto.id, None);
    assert!(dto.used_fields().is_empty());
    assert!(dto.to_array(&[]).is_empty());
}

#[test]
fn nested_dto_auto_cast() {
    let dto = ModelExtendedDto::hydrate(&json!({
        "id": 11,
        "modelDto": {"id": 112, "name": "nested dto"},
        "modelExtendedDto": {
            "id": 22,
            "modelDto": {"id": 222, "name": "nested dto 2"},
            "modelSecondDto": {"id": 233, "name": "Second DTO"}
        }
    }));

    let model = dto.model_dto.as_ref().unwrap();
    assert_eq!(model.id, Some(112));
    assert_eq!(model.name.as_deref(), Some("nested dto"));

    let nested = dto.model_extended_dto.as_deref().unwrap();
    assert_eq!(nested.id, Some(22));
    let nested_model = nested.model_dto.as_ref().unwrap();
    assert_eq!(nested_model.id, Some(222));
    assert_eq!(nested_model.name.as_deref(), Some("nested dto 2"));
    assert_eq!(
        nested.model_second_dto.as_ref().and_then(|second| second.id),
        Some(233)
    );
}

#[test]
fn nested_dto_projection() {
    let cases = [
        (
            json!({"id": 1, "modelDto": {"id": 11, "name": "test"}}),
            FieldMap::from_iter(["id", "modelDto"]),
            json!({"id": 1, "modelDto": {"id": 11, "name": "test"}})
        ),
        (
            json!({
                "id": 2,
                "modelDto": {"id": 22, "name": "test"},
                "modelExtendedDto": {
                    "id": 22,
                    "modelDto": {"id": 222, "name": "test222"}
                }
            }),
            FieldMap::from_iter(["id", "modelDto", "modelExtendedDto"]),
            json!({
                "id": 2,
                "modelDto": {"id": 22, "name": "test"},
                "modelExtendedDto": {
                    "id": 22,
                    "modelDto": {"id": 222, "name": "test222"}
                }
            })
        )
    ];

    for (data, map, expected) in cases {
        let dto = ModelExtendedDto::hydrate_with(&data, &map);
        let projected = dto.to_array_recursive(&[]);
        assert_eq!(projected.len(), map.len());
        assert_eq!(Value::Object(projected), expected);
    }
}

#[test]
fn nested_record_is_borrowed_in_projection() {
    let dto = ModelExtendedDto::hydrate(&json!({"id": 1, "modelDto": {"id": 11}}));
    let data = dto.to_array(&[]);

    let model = data.get("modelDto").and_then(|field| field.as_record::<ModelDto>());
    assert_eq!(model.and_then(|model| model.id), Some(11));
    assert!(data.get("id").and_then(|field| field.as_record::<ModelDto>()).is_none());
}

#[test]
fn list_instead_of_object_is_not_cast() {
    let dto = ModelExtendedDto::hydrate(&json!({"modelDto": [{"id": 1}], "modelSecondDto": {}}));

    assert!(dto.model_dto.is_none());
    assert!(dto.model_second_dto.is_none());
    assert!(dto.used_fields().contains("modelDto"));
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
    found: UsedFields,
}

fn account_map() -> FieldMap {
    FieldMap::builder()
        .path("id", "guid")
        .field("userName")
        .field("labels")
        .field("props")
        .path("cache", "cache")
        .build()
}

#[test]
fn attribute_options() {
    let dto = AccountDto::hydrate(&json!({
        "guid": 3,
        "user_name": "root",
        "labels": ["b", "a", "b"],
        "cache": "ignored"
    }));

    assert_eq!(dto.id(), &Some(3));
    assert_eq!(dto.user_name().as_deref(), Some("root"));
    assert_eq!(dto.tags.iter().map(String::as_str).collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(dto.props, vec![1]);
    assert_eq!(dto.cache, None);
    assert_eq!(
        dto.used_fields().iter().collect::<Vec<_>>(),
        vec!["id", "userName", "labels"]
    );
    assert_eq!(
        Value::Object(dto.to_array_recursive(&[])),
        json!({"id": 3, "userName": "root", "labels": ["a", "b"]})
    );
}

#[test]
fn plain_field_mismatch_keeps_default() {
    let dto = AccountDto::hydrate(&json!({"labels": "a"}));

    assert!(dto.tags.is_empty());
    assert!(dto.used_fields().contains("labels"));
}

#[test]
fn dyn_projection() {
    let erased: Box<dyn Dto> = Box::new(ModelDto::hydrate(&json!({"id": 1, "name": "X"})));

    assert_eq!(erased.field_names().len(), 5);
    assert_eq!(erased.field("id").map(|field| field.to_value()), Some(json!(1)));
    assert!(erased.field("unknown").is_none());
    assert_eq!(erased.downcast_ref::<ModelDto>().and_then(|dto| dto.id), Some(1));
    assert!(erased.downcast_ref::<AccountDto>().is_none());
}

struct User {
    id:   i64,
    name: String
}

impl Dtoable for User {
    type Dto = ModelDto;

    fn to_dto(&self) -> ModelDto {
        ModelDto::hydrate(&json!({"id": self.id, "name": self.name}))
    }
}

#[test]
fn dtoable_types() {
    let user = User {
        id:   5,
        name: "Ann".to_string()
    };
    let dto = user.to_dto();

    assert_eq!(
        Value::Object(dto.to_array_recursive(&[])),
        json!({"id": 5, "name": "Ann"})
    );
}
