// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Variant unions resolved by trial decoding
//!
//! Fields whose shape varies are modelled as Rust enums with one model per
//! alternative. Decoding tries each alternative in declaration order: the
//! payload is wrapped in the alternative's bag and validated, and the first
//! alternative that validates is selected. Each rejection is recorded, and if
//! no alternative fits the union fails with
//! [`ModelError::UnionDecodeFailure`] listing every rejection.
//!
//! Declaration order is the only priority. A payload that validates as more
//! than one alternative always resolves to the earliest one; strict
//! [`crate::UnknownFields::Reject`] decoding narrows overlapping shapes.

use crate::error::{ModelError, VariantFailure};
use crate::model::Model;
use crate::options::CodecOptions;
use crate::raw::RawProps;
use crate::validate::Validate;
use serde_json::Value;

/// A closed set of alternative models.
pub trait Union: Sized + Validate {
    /// Wire name of the union, used in diagnostics.
    const NAME: &'static str;

    /// Resolve `value` to the first alternative that accepts it.
    fn decode(value: &Value, options: CodecOptions) -> Result<Self, ModelError>;

    /// Encode the active alternative.
    fn to_value(&self) -> Value;
}

/// Ordered trial decoding of one payload against a union's alternatives.
pub struct TrialDecoder<'a, U> {
    union: &'static str,
    value: &'a Value,
    options: CodecOptions,
    selected: Option<U>,
    failures: Vec<VariantFailure>,
}

impl<'a, U> TrialDecoder<'a, U> {
    pub fn new(union: &'static str, value: &'a Value, options: CodecOptions) -> Self {
        Self {
            union,
            value,
            options,
            selected: None,
            failures: Vec::new(),
        }
    }

    /// Try alternative `M`, unless an earlier one already matched.
    pub fn attempt<M: Model>(mut self, wrap: impl FnOnce(M) -> U) -> Self {
        if self.selected.is_some() {
            return self;
        }
        match try_alternative::<M>(self.value, self.options) {
            Ok(model) => self.selected = Some(wrap(model)),
            Err(error) => {
                tracing::trace!(
                    union = self.union,
                    variant = M::NAME,
                    error = %error,
                    "Union alternative rejected"
                );
                self.failures.push(VariantFailure {
                    variant: M::NAME,
                    error: Box::new(error),
                });
            }
        }
        self
    }

    /// The selected alternative, or every recorded rejection.
    pub fn finish(self) -> Result<U, ModelError> {
        self.selected.ok_or(ModelError::UnionDecodeFailure {
            union: self.union,
            failures: self.failures,
        })
    }
}

fn try_alternative<M: Model>(value: &Value, options: CodecOptions) -> Result<M, ModelError> {
    let model = M::from_raw(RawProps::from_value(M::NAME, value.clone(), options)?);
    model.validate()?;
    Ok(model)
}

/// Implement serde for a [`Union`] through its `decode`/`to_value` pair.
macro_rules! union_serde {
    ($name:ident) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&$crate::Union::to_value(self), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::Union>::decode(&value, $crate::CodecOptions::default())
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use union_serde;
