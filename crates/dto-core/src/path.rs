// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dotted path lookups into nested JSON data.
//!
//! A path is a `.`-joined list of keys. Each key is looked up in the current
//! object, or parsed as an index when the current value is an array, so
//! `owner.0.name` walks `{"owner": [{"name": ...}]}`.
//!
//! A literal dot inside a key is written `\.`, a literal backslash `\\`.
//!
//! Lookups never fail: a missing key anywhere along the way yields
//! [`Lookup::Missing`], which is distinct from a present `null`.

use convert_case::{Boundary, Case, Casing};
use serde_json::Value;

/// Separator between path components.
pub const DELIMITER: char = '.';

const ESCAPE: char = '\\';

/// Word boundaries for the case fold: an underscore goes before an uppercase
/// letter that follows a lowercase letter or digit, and before the last
/// letter of an acronym. Digits never start a new word.
const FOLD_BOUNDARIES: [Boundary; 3] =
    [Boundary::LowerUpper, Boundary::DigitUpper, Boundary::Acronym];

/// Outcome of a path lookup.
///
/// Replaces an out-of-band "not found" sentinel: a present `null` and an
/// absent key are different variants, so no data value can be mistaken for
/// a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The path exists and holds a non-null value.
    Found(&'a Value),

    /// The path exists and holds `null`.
    Null,

    /// Some component of the path is absent.
    Missing
}

impl<'a> Lookup<'a> {
    /// Check whether the path was present in the data.
    pub const fn is_found(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Owned value for a present path (`null` included).
    pub fn cloned(&self) -> Option<Value> {
        match self {
            Self::Found(value) => Some((*value).clone()),
            Self::Null => Some(Value::Null),
            Self::Missing => None
        }
    }
}

/// Split a path into its components, honouring `\.` and `\\` escapes.
///
/// # Example
///
/// ```rust
/// use dto_core::path::split;
///
/// assert_eq!(split("owner.0.name"), vec!["owner", "0", "name"]);
/// assert_eq!(split(r"file\.ext.size"), vec!["file.ext", "size"]);
/// ```
pub fn split(path: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(next) if next == DELIMITER || next == ESCAPE => current.push(next),
                Some(next) => {
                    current.push(ESCAPE);
                    current.push(next);
                }
                None => current.push(ESCAPE)
            },
            DELIMITER => keys.push(std::mem::take(&mut current)),
            _ => current.push(c)
        }
    }
    keys.push(current);
    keys
}

/// Resolve `path` against `data`.
///
/// # Example
///
/// ```rust
/// use dto_core::path::{Lookup, resolve};
/// use serde_json::json;
///
/// let data = json!({"owner": [{"name": "Ann"}], "gone": null});
/// assert_eq!(resolve(&data, "owner.0.name"), Lookup::Found(&json!("Ann")));
/// assert_eq!(resolve(&data, "gone"), Lookup::Null);
/// assert_eq!(resolve(&data, "owner.1.name"), Lookup::Missing);
/// ```
pub fn resolve<'a>(data: &'a Value, path: &str) -> Lookup<'a> {
    let mut current = data;
    for key in split(path) {
        let next = match current {
            Value::Object(map) => map.get(&key),
            Value::Array(items) => array_index(&key).and_then(|index| items.get(index)),
            _ => None
        };
        match next {
            Some(value) => current = value,
            None => return Lookup::Missing
        }
    }

    match current {
        Value::Null => Lookup::Null,
        value => Lookup::Found(value)
    }
}

/// Case-folded variant of a path: every component containing an uppercase
/// letter is converted to `snake_case`.
///
/// Components that are already lowercase (including array indices and keys
/// with leading underscores) are kept verbatim. Returns `None` when nothing
/// changes, so callers can skip a redundant second lookup.
///
/// # Example
///
/// ```rust
/// use dto_core::path::snake_case;
///
/// assert_eq!(snake_case("camelCase").as_deref(), Some("camel_case"));
/// assert_eq!(snake_case("owner.0.FirstName").as_deref(), Some("owner.0.first_name"));
/// assert_eq!(snake_case("already_snake"), None);
/// ```
pub fn snake_case(path: &str) -> Option<String> {
    let keys = split(path);
    if !keys.iter().any(|key| key.chars().any(char::is_uppercase)) {
        return None;
    }

    let folded: Vec<String> = keys
        .into_iter()
        .map(|key| {
            let key = if key.chars().any(char::is_uppercase) {
                key.set_boundaries(&FOLD_BOUNDARIES).to_case(Case::Snake)
            } else {
                key
            };
            escape(&key)
        })
        .collect();

    Some(folded.join(&DELIMITER.to_string()))
}

/// Canonical decimal array index: digits only, no sign, no leading zero.
fn array_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical { key.parse().ok() } else { None }
}

/// Escape a single key so it survives [`split`] unchanged.
pub fn escape(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for c in key.chars() {
        if c == DELIMITER || c == ESCAPE {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn split_single_key() {
        assert_eq!(split("id"), vec!["id"]);
    }

    #[test]
    fn split_keeps_empty_components() {
        assert_eq!(split("a..b"), vec!["a", "", "b"]);
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn split_escapes() {
        assert_eq!(split(r"a\.b.c"), vec!["a.b", "c"]);
        assert_eq!(split(r"a\\.b"), vec![r"a\", "b"]);
        assert_eq!(split(r"a\x"), vec![r"a\x"]);
        assert_eq!(split("a\\"), vec!["a\\"]);
    }

    #[test]
    fn resolve_direct_key() {
        let data = json!({"id": 5});
        assert_eq!(resolve(&data, "id"), Lookup::Found(&json!(5)));
    }

    #[test]
    fn resolve_nested_objects() {
        let data = json!({"path": {"sub": {"name": "deep"}}});
        assert_eq!(resolve(&data, "path.sub.name"), Lookup::Found(&json!("deep")));
    }

    #[test]
    fn resolve_through_array_index() {
        let data = json!({"owner": [{"name": "first"}, {"name": "second"}]});
        assert_eq!(resolve(&data, "owner.1.name"), Lookup::Found(&json!("second")));
        assert_eq!(resolve(&data, "owner.x.name"), Lookup::Missing);
        assert_eq!(resolve(&data, "owner.-1.name"), Lookup::Missing);
    }

    #[test]
    fn resolve_rejects_non_canonical_index() {
        let data = json!({"owner": [{"name": "first"}, {"name": "second"}]});
        assert_eq!(resolve(&data, "owner.+1.name"), Lookup::Missing);
        assert_eq!(resolve(&data, "owner.01.name"), Lookup::Missing);
        assert_eq!(resolve(&data, "owner.0.name"), Lookup::Found(&json!("first")));
    }

    #[test]
    fn resolve_numeric_object_key() {
        let data = json!({"0": "zero"});
        assert_eq!(resolve(&data, "0"), Lookup::Found(&json!("zero")));
    }

    #[test]
    fn resolve_null_is_not_missing() {
        let data = json!({"gone": null});
        let lookup = resolve(&data, "gone");
        assert_eq!(lookup, Lookup::Null);
        assert!(lookup.is_found());
        assert_eq!(lookup.cloned(), Some(Value::Null));
    }

    #[test]
    fn resolve_through_scalar_is_missing() {
        let data = json!({"id": 5});
        assert_eq!(resolve(&data, "id.value"), Lookup::Missing);
        assert_eq!(resolve(&json!("scalar"), "id"), Lookup::Missing);
    }

    #[test]
    fn resolve_escaped_key() {
        let data = json!({"file.ext": {"size": 3}});
        assert_eq!(resolve(&data, r"file\.ext.size"), Lookup::Found(&json!(3)));
        assert_eq!(resolve(&data, "file.ext.size"), Lookup::Missing);
    }

    #[test]
    fn snake_case_whole_path() {
        assert_eq!(
            snake_case("ownerInfo.0.lastName").as_deref(),
            Some("owner_info.0.last_name")
        );
        assert_eq!(snake_case("PascalCase").as_deref(), Some("pascal_case"));
    }

    #[test]
    fn snake_case_keeps_digits_in_word() {
        assert_eq!(snake_case("address2Line").as_deref(), Some("address2_line"));
        assert_eq!(snake_case("Line2").as_deref(), Some("line2"));
        assert_eq!(snake_case("HTTPCode").as_deref(), Some("http_code"));

        let data = json!({"address2_line": "x"});
        let folded = snake_case("address2Line").unwrap_or_default();
        assert_eq!(resolve(&data, &folded), Lookup::Found(&json!("x")));
    }

    #[test]
    fn snake_case_noop_returns_none() {
        assert_eq!(snake_case("id"), None);
        assert_eq!(snake_case("owner.0._name"), None);
    }

    #[test]
    fn escape_round_trips_through_split() {
        let key = r"a.b\c";
        assert_eq!(split(&escape(key)), vec![key]);
    }

    proptest! {
        #[test]
        fn present_key_always_resolves(key in "[a-z_]{1,12}", value in any::<i64>()) {
            let data = json!({ key.clone(): value });
            prop_assert_eq!(resolve(&data, &key), Lookup::Found(&json!(value)));
        }

        #[test]
        fn absent_key_never_resolves(key in "[a-z]{1,12}", other in "[A-Z]{1,12}") {
            let data = json!({ key: 1 });
            prop_assert_eq!(resolve(&data, &other), Lookup::Missing);
        }

        #[test]
        fn escaped_keys_split_back(keys in proptest::collection::vec("[a-z.\\\\]{0,6}", 1..4)) {
            let path: Vec<String> = keys.iter().map(|k| escape(k)).collect();
            prop_assert_eq!(split(&path.join(".")), keys);
        }
    }
}
