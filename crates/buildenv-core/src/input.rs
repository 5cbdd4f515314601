//! Raw input handling for configuration aggregates
//!
//! Aggregates are built from a loosely-typed keyed mapping (a JSON object) or
//! accepted as already-built instances. This module provides the field
//! validator ([`RawMapping`]'s `take_*` accessors), the sum type over the two
//! accepted input shapes ([`Input`]) and the [`Aggregate`] trait that ties
//! them together.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{ModelError, ModelResult};

/// A raw, loosely-typed keyed mapping.
///
/// Values are consumed with the `take_*` accessors, so each key is read at
/// most once. Keys no accessor asks for are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMapping(Map<String, Value>);

impl RawMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key, returning the mapping for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove a key. An explicit `null` reads the same as an absent key.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        match self.0.remove(key) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    /// Take a required string field
    pub fn take_required_str(&mut self, shape: &'static str, field: &'static str) -> ModelResult<String> {
        self.take_str(shape, field)?
            .ok_or_else(|| ModelError::missing(shape, field))
    }

    /// Take an optional string field
    pub fn take_str(&mut self, shape: &'static str, field: &'static str) -> ModelResult<Option<String>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ModelError::invalid_type(shape, field, "a string")),
        }
    }

    /// Take an optional boolean field
    pub fn take_bool(&mut self, shape: &'static str, field: &'static str) -> ModelResult<Option<bool>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(_) => Err(ModelError::invalid_type(shape, field, "a boolean")),
        }
    }

    /// Take an optional integer field
    pub fn take_i64(&mut self, shape: &'static str, field: &'static str) -> ModelResult<Option<i64>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| ModelError::invalid_type(shape, field, "an integer")),
            Some(_) => Err(ModelError::invalid_type(shape, field, "an integer")),
        }
    }

    /// Take an optional list of strings
    pub fn take_str_list(
        &mut self,
        shape: &'static str,
        field: &'static str,
    ) -> ModelResult<Option<Vec<String>>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(ModelError::invalid_type(shape, field, "a list of strings")),
                })
                .collect::<ModelResult<Vec<_>>>()
                .map(Some),
            Some(_) => Err(ModelError::invalid_type(shape, field, "a list of strings")),
        }
    }

    /// Take an optional nested aggregate.
    ///
    /// Errors raised by the nested aggregate are returned as-is.
    pub fn take_nested<T: Aggregate>(
        &mut self,
        shape: &'static str,
        field: &'static str,
    ) -> ModelResult<Option<T>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::Object(map)) => T::from_mapping(RawMapping(map)).map(Some),
            Some(_) => Err(ModelError::invalid_type(shape, field, "an object")),
        }
    }

    /// Take an optional ordered sequence of nested aggregates
    pub fn take_nested_list<T: Aggregate>(
        &mut self,
        shape: &'static str,
        field: &'static str,
    ) -> ModelResult<Option<Vec<T>>> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => T::from_mapping(RawMapping(map)),
                    _ => Err(ModelError::invalid_type(shape, field, "a list of objects")),
                })
                .collect::<ModelResult<Vec<_>>>()
                .map(Some),
            Some(_) => Err(ModelError::invalid_type(shape, field, "a list of objects")),
        }
    }
}

impl From<Map<String, Value>> for RawMapping {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for RawMapping {
    type Error = ModelError;

    fn try_from(value: Value) -> ModelResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ModelError::serialization(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Either an already-built aggregate or a raw mapping to build one from
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    Built(T),
    Raw(RawMapping),
}

impl<T: Aggregate> From<T> for Input<T> {
    fn from(value: T) -> Self {
        Input::Built(value)
    }
}

impl<T> From<RawMapping> for Input<T> {
    fn from(raw: RawMapping) -> Self {
        Input::Raw(raw)
    }
}

/// A validated, immutable configuration value built from a raw mapping.
pub trait Aggregate: Sized {
    /// Name used in error messages
    const SHAPE: &'static str;

    /// Validate and normalize a raw mapping
    fn from_mapping(raw: RawMapping) -> ModelResult<Self>;

    /// Accept an already-built instance unchanged, or build one from a raw
    /// mapping.
    fn create<I: Into<Input<Self>>>(input: I) -> ModelResult<Self> {
        match input.into() {
            Input::Built(value) => {
                debug!(shape = Self::SHAPE, "accepting pre-built instance");
                Ok(value)
            }
            Input::Raw(raw) => {
                trace!(shape = Self::SHAPE, keys = raw.len(), "building from raw mapping");
                Self::from_mapping(raw)
            }
        }
    }

    /// Build from an arbitrary JSON value, which must be an object
    fn from_value(value: Value) -> ModelResult<Self> {
        Self::from_mapping(RawMapping::try_from(value)?)
    }
}

/// Resolve an optional builder input into an optional aggregate
pub fn normalize<T: Aggregate>(input: Option<Input<T>>) -> ModelResult<Option<T>> {
    input.map(T::create).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Pair {
        name: String,
        value: Option<i64>,
    }

    impl Aggregate for Pair {
        const SHAPE: &'static str = "Pair";

        fn from_mapping(mut raw: RawMapping) -> ModelResult<Self> {
            Ok(Self {
                name: raw.take_required_str(Self::SHAPE, "name")?,
                value: raw.take_i64(Self::SHAPE, "value")?,
            })
        }
    }

    fn raw(value: Value) -> RawMapping {
        RawMapping::try_from(value).unwrap()
    }

    #[test]
    fn test_null_is_missing() {
        let err = Pair::from_mapping(raw(json!({ "name": null }))).unwrap_err();
        assert_eq!(err, ModelError::missing("Pair", "name"));
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let err = Pair::from_mapping(raw(json!({ "name": 5 }))).unwrap_err();
        assert_eq!(err, ModelError::invalid_type("Pair", "name", "a string"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let pair = Pair::from_mapping(raw(json!({ "name": "a", "extra": [1, 2] }))).unwrap();
        assert_eq!(pair, Pair { name: "a".to_string(), value: None });
    }

    #[test]
    fn test_create_accepts_built() {
        let built = Pair { name: "a".to_string(), value: Some(1) };
        let same = Pair::create(built).unwrap();
        assert_eq!(same, Pair { name: "a".to_string(), value: Some(1) });
    }

    #[test]
    fn test_nested_list_preserves_order() {
        let mut outer = raw(json!({
            "pairs": [{ "name": "b" }, { "name": "a" }, { "name": "c" }]
        }));
        let pairs: Vec<Pair> = outer.take_nested_list("Outer", "pairs").unwrap().unwrap();
        let names: Vec<_> = pairs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_nested_error_is_not_rewrapped() {
        let mut outer = raw(json!({ "pairs": [{ "name": "b" }, { "value": 1 }] }));
        let err = outer.take_nested_list::<Pair>("Outer", "pairs").unwrap_err();
        assert_eq!(err, ModelError::missing("Pair", "name"));
    }

    #[test]
    fn test_non_object_value_rejected() {
        let err = RawMapping::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ModelError::Serialization(_)));
    }

    #[test]
    fn test_normalize_none() {
        assert_eq!(normalize::<Pair>(None).unwrap(), None);
    }
}
