//! # Link Parameters
//!
//! [`Params`] is the parameter mapping handed to the URL builder. It keeps
//! insertion order and holds [`ParamValue`]s, which model the three shapes a
//! query parameter can take: a scalar, a repeated key, or a bare flag.
//!
//! A key that is not present is *undefined*: it substitutes as the empty
//! string in a path and never appears in a query string.
//!
//! Typed call sites can go through serde:
//!
//! ```rust
//! use navlink::params::Params;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct UserParams {
//!     user_id: String,
//!     keyword: Option<String>,
//! }
//!
//! let params = Params::from_serialize(&UserParams {
//!     user_id: "dancerphil".into(),
//!     keyword: None,
//! })
//! .unwrap();
//! assert_eq!(params.len(), 1);
//! ```

use crate::error::ParamsError;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Scalar value; numbers and booleans are stored in their string form
    Text(String),
    /// Repeated query key (`a=1&a=2`)
    List(Vec<String>),
    /// Key without a value (`?debug`)
    Flag,
}

impl ParamValue {
    /// Text substituted for a path placeholder
    ///
    /// Lists are comma-joined and flags substitute as the empty string.
    #[must_use]
    pub fn as_path_segment(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Text(s) => Cow::Borrowed(s.as_str()),
            ParamValue::List(items) => Cow::Owned(items.join(",")),
            ParamValue::Flag => Cow::Borrowed(""),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Ordered parameter mapping
///
/// Inserting an existing key replaces its value in place, so iteration order
/// is the order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert any serializable value into parameters
    ///
    /// The value must serialize to a JSON object (or to `null`/unit, which
    /// gives empty parameters). `null` fields are treated as undefined and
    /// skipped, so `Option::None` fields never reach the query string.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ParamsError> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(map
                .into_iter()
                .filter_map(|(key, value)| json_to_param(value).map(|v| (key, v)))
                .collect()),
            Value::Null => Ok(Self::new()),
            other => Err(ParamsError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Whether `key` is defined
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Append a value under `key`, turning a repeated key into a [`ParamValue::List`]
    pub fn append(&mut self, key: impl Into<String>, value: ParamValue) {
        let key = key.into();
        let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) else {
            self.entries.push((key, value));
            return;
        };
        let mut items = match std::mem::replace(slot, ParamValue::Flag) {
            ParamValue::Text(s) => vec![s],
            ParamValue::List(items) => items,
            ParamValue::Flag => Vec::new(),
        };
        match value {
            ParamValue::Text(s) => items.push(s),
            ParamValue::List(more) => items.extend(more),
            ParamValue::Flag => {}
        }
        *slot = ParamValue::List(items);
    }

    /// Copy of these parameters without the given keys
    #[must_use]
    pub fn without<S: AsRef<str>>(&self, keys: &[S]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| !keys.iter().any(|omit| omit.as_ref() == k))
                .cloned()
                .collect(),
        }
    }

    /// Overlay `other` on top of `self`; `other` wins on key collision
    pub fn extend_from(&mut self, other: Params) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of defined keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn json_to_param(value: Value) -> Option<ParamValue> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(ParamValue::List(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(json_to_text)
                .collect(),
        )),
        other => Some(ParamValue::Text(json_to_text(other))),
    }
}

fn json_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        composite => composite.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SearchParams {
        user_id: String,
        page: u32,
        archived: bool,
        keyword: Option<String>,
        tags: Vec<&'static str>,
    }

    #[test]
    fn test_from_serialize_struct() {
        let params = Params::from_serialize(&SearchParams {
            user_id: "dancerphil".into(),
            page: 2,
            archived: false,
            keyword: None,
            tags: vec!["a", "b"],
        })
        .unwrap();

        assert_eq!(params.get("userId"), Some(&ParamValue::from("dancerphil")));
        assert_eq!(params.get("page"), Some(&ParamValue::from("2")));
        assert_eq!(params.get("archived"), Some(&ParamValue::from("false")));
        assert_eq!(params.get("keyword"), None);
        assert_eq!(params.get("tags"), Some(&ParamValue::from(vec!["a", "b"])));
    }

    #[test]
    fn test_from_serialize_unit_is_empty() {
        assert!(Params::from_serialize(&()).unwrap().is_empty());
    }

    #[test]
    fn test_from_serialize_rejects_scalars() {
        let err = Params::from_serialize("nope").unwrap_err();
        assert!(matches!(err, ParamsError::NotAnObject { found: "string" }));
    }

    #[test]
    fn test_from_serialize_rejects_non_string_keys() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "x");
        let err = Params::from_serialize(&map).unwrap_err();
        assert!(matches!(err, ParamsError::Serialize(_)));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::from([("a", "1"), ("b", "2")]);
        params.insert("a", "3");
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&ParamValue::from("3")));
    }

    #[test]
    fn test_append_builds_list() {
        let mut params = Params::new();
        params.append("tag", ParamValue::from("x"));
        params.append("tag", ParamValue::from("y"));
        assert_eq!(params.get("tag"), Some(&ParamValue::from(vec!["x", "y"])));
    }

    #[test]
    fn test_without_and_extend_from() {
        let params = Params::from([("userId", "1"), ("keyword", "dan")]);
        let mut rest = params.without(&["userId"]);
        assert_eq!(rest.len(), 1);
        rest.extend_from(Params::from([("keyword", "phil")]));
        assert_eq!(rest.get("keyword"), Some(&ParamValue::from("phil")));
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(ParamValue::from("x").as_path_segment(), "x");
        assert_eq!(ParamValue::from(vec!["1", "2"]).as_path_segment(), "1,2");
        assert_eq!(ParamValue::Flag.as_path_segment(), "");
    }
}
