// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Property bag backing every model
//!
//! A [`RawProps`] maps field keys to raw JSON values in the order they were
//! received. Nothing is decoded up front: the typed accessors below decode a
//! single value each time a field is read, so edits made through the raw
//! bag are always reflected and unknown keys survive a re-encode.
//!
//! The map lives behind an `Arc`. [`RawProps::freeze`] hands out a shared,
//! read-only snapshot in O(1); the next write through the bag copies the map
//! first, so a frozen view never observes later mutation.

use crate::error::ModelError;
use crate::model::Model;
use crate::options::{CodecOptions, DateFormat, UnknownFields};
use crate::union::Union;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Ordered map of field keys to raw JSON values.
#[derive(Clone, Default)]
pub struct RawProps {
    props: Arc<IndexMap<String, Value>>,
    options: CodecOptions,
}

/// Read-only snapshot of a [`RawProps`].
#[derive(Clone, PartialEq)]
pub struct FrozenProps(Arc<IndexMap<String, Value>>);

impl Deref for FrozenProps {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for FrozenProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl RawProps {
    /// Create an empty bag with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bag with the given options.
    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            props: Arc::default(),
            options,
        }
    }

    /// Wrap an already decoded map.
    pub fn from_map(map: IndexMap<String, Value>, options: CodecOptions) -> Self {
        Self {
            props: Arc::new(map),
            options,
        }
    }

    /// Build a bag from a JSON value, which must be an object.
    ///
    /// `key` names the value in the error raised for non-objects.
    pub fn from_value(key: &str, value: Value, options: CodecOptions) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map.into_iter().collect(), options)),
            other => Err(ModelError::ExpectedObject {
                key: key.to_string(),
                found: json_type(&other),
            }),
        }
    }

    /// Options this bag decodes with.
    pub fn options(&self) -> CodecOptions {
        self.options
    }

    /// Replace the options this bag decodes with.
    pub fn set_options(&mut self, options: CodecOptions) {
        self.options = options;
    }

    /// Raw value stored under `key`, without decoding.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Store `value` under `key`, replacing any previous value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        Arc::make_mut(&mut self.props).insert(key.into(), value.into());
    }

    /// Store an explicit JSON null under `key`.
    ///
    /// Unlike [`RawProps::remove`], the key stays in the encoded output.
    pub fn set_null(&mut self, key: impl Into<String>) {
        self.set(key, Value::Null);
    }

    /// Store a date-time as an RFC 3339 string in UTC.
    pub fn set_timestamp(&mut self, key: impl Into<String>, value: DateTime<Utc>) {
        self.set(key, value.to_rfc3339_opts(SecondsFormat::AutoSi, true));
    }

    /// Remove `key` entirely, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        if !self.props.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.props).shift_remove(key)
    }

    /// Read-only snapshot of the current contents.
    pub fn freeze(&self) -> FrozenProps {
        FrozenProps(Arc::clone(&self.props))
    }

    /// Unwrap into the underlying map.
    pub fn into_map(self) -> IndexMap<String, Value> {
        Arc::unwrap_or_clone(self.props)
    }

    /// Convert into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.into_map().into_iter().collect())
    }

    /// Fail with [`ModelError::UnknownField`] if the bag holds a key outside
    /// `declared` and the options reject unknown fields.
    pub fn check_declared(
        &self,
        model: &'static str,
        declared: &[&str],
    ) -> Result<(), ModelError> {
        if self.options.unknown_fields == UnknownFields::Preserve {
            return Ok(());
        }
        match self.keys().find(|key| !declared.contains(key)) {
            Some(key) => Err(ModelError::UnknownField {
                model,
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Typed accessors
    // ========================================================================

    /// Decode a required, non-nullable field.
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T, ModelError> {
        match self.get(key) {
            None => Err(ModelError::MissingRequiredField(key.to_string())),
            Some(Value::Null) => Err(ModelError::UnexpectedNullField(key.to_string())),
            Some(value) => self.decode(key, value),
        }
    }

    /// Decode a field that must be present but may be null.
    pub fn required_nullable<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ModelError> {
        match self.get(key) {
            None => Err(ModelError::MissingRequiredField(key.to_string())),
            Some(Value::Null) => Ok(None),
            Some(value) => self.decode(key, value).map(Some),
        }
    }

    /// Decode an optional field; absence and null both yield `None`.
    pub fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ModelError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.decode(key, value).map(Some),
        }
    }

    /// Decode a required nested model.
    pub fn model<M: Model>(&self, key: &str) -> Result<M, ModelError> {
        match self.get(key) {
            None => Err(ModelError::MissingRequiredField(key.to_string())),
            Some(Value::Null) => Err(ModelError::UnexpectedNullField(key.to_string())),
            Some(value) => self.nested(key, value),
        }
    }

    /// Decode an optional nested model; absence and null both yield `None`.
    pub fn optional_model<M: Model>(&self, key: &str) -> Result<Option<M>, ModelError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.nested(key, value).map(Some),
        }
    }

    /// Decode a required list of nested models.
    pub fn models<M: Model>(&self, key: &str) -> Result<Vec<M>, ModelError> {
        match self.get(key) {
            None => Err(ModelError::MissingRequiredField(key.to_string())),
            Some(Value::Null) => Err(ModelError::UnexpectedNullField(key.to_string())),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.nested(&format!("{}[{}]", key, i), item))
                .collect(),
            Some(other) => Err(ModelError::MalformedValue {
                key: key.to_string(),
                source: serde::de::Error::custom(format!(
                    "invalid type: {}, expected an array",
                    json_type(other)
                )),
            }),
        }
    }

    /// Decode a required union field.
    pub fn union<U: Union>(&self, key: &str) -> Result<U, ModelError> {
        match self.get(key) {
            None => Err(ModelError::MissingRequiredField(key.to_string())),
            Some(Value::Null) => Err(ModelError::UnexpectedNullField(key.to_string())),
            Some(value) => U::decode(value, self.options),
        }
    }

    /// Decode an optional union field; absence and null both yield `None`.
    pub fn optional_union<U: Union>(&self, key: &str) -> Result<Option<U>, ModelError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => U::decode(value, self.options).map(Some),
        }
    }

    fn nested<M: Model>(&self, key: &str, value: &Value) -> Result<M, ModelError> {
        Self::from_value(key, value.clone(), self.options).map(M::from_raw)
    }

    fn decode<T: DeserializeOwned>(&self, key: &str, value: &Value) -> Result<T, ModelError> {
        match T::deserialize(value) {
            Ok(decoded) => Ok(decoded),
            Err(source) => self
                .lenient_form(value)
                .and_then(|alt| T::deserialize(&alt).ok())
                .ok_or_else(|| ModelError::MalformedValue {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    /// Alternative reading of a string value allowed by the options, if any.
    fn lenient_form(&self, value: &Value) -> Option<Value> {
        let Value::String(s) = value else {
            return None;
        };
        if self.options.numbers_from_strings
            && let Ok(number) = s.trim().parse::<serde_json::Number>()
        {
            return Some(Value::Number(number));
        }
        if self.options.date_format == DateFormat::Rfc3339OrDate
            && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        {
            return Some(Value::String(format!("{}T00:00:00Z", s)));
        }
        None
    }
}

impl PartialEq for RawProps {
    fn eq(&self, other: &Self) -> bool {
        self.props == other.props
    }
}

impl fmt::Debug for RawProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.props.iter()).finish()
    }
}

impl Serialize for RawProps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.props.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawProps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::deserialize(deserializer).map(|map| Self::from_map(map, CodecOptions::default()))
    }
}

impl FromIterator<(String, Value)> for RawProps {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect(), CodecOptions::default())
    }
}
