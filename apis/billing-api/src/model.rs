// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! The model contract shared by every resource type

use crate::error::ModelError;
use crate::options::CodecOptions;
use crate::raw::RawProps;
use crate::validate::Validate;
use serde_json::Value;

/// A record backed by a [`RawProps`] bag.
///
/// Models never hold decoded fields. Each accessor decodes its value from the
/// bag on demand and each setter encodes into it.
pub trait Model: Sized + Validate {
    /// Wire name of the model, used in diagnostics.
    const NAME: &'static str;
    /// Keys declared by the model.
    const FIELDS: &'static [&'static str];

    /// Wrap a bag without decoding anything.
    fn from_raw(raw: RawProps) -> Self;

    /// Read-only access to the backing bag.
    fn raw(&self) -> &RawProps;

    /// Mutable access to the backing bag.
    fn raw_mut(&mut self) -> &mut RawProps;

    /// Unwrap into the backing bag.
    fn into_raw(self) -> RawProps;

    /// Convert into a JSON object value.
    fn into_value(self) -> Value {
        self.into_raw().into_value()
    }

    /// Remove `key` from the bag so it is absent from the encoded output.
    fn unset(&mut self, key: &str) {
        self.raw_mut().remove(key);
    }
}

/// Decode a model from JSON bytes with default options.
pub fn decode<M: Model>(bytes: &[u8]) -> Result<M, ModelError> {
    decode_with(bytes, CodecOptions::default())
}

/// Decode a model from JSON bytes.
///
/// Only the top-level object is parsed into a bag; fields are decoded when
/// read. Call [`Validate::validate`] to check the whole tree eagerly.
pub fn decode_with<M: Model>(bytes: &[u8], options: CodecOptions) -> Result<M, ModelError> {
    let value: Value = serde_json::from_slice(bytes)?;
    RawProps::from_value(M::NAME, value, options).map(M::from_raw)
}

/// Encode a model to JSON bytes.
pub fn encode<M: Model>(model: &M) -> Result<Vec<u8>, ModelError> {
    Ok(serde_json::to_vec(model.raw())?)
}

/// Declare a property-bag model.
///
/// Generates the struct, its [`Model`] impl and transparent serde impls.
/// Accessors and the [`Validate`] impl are written by hand next to it.
macro_rules! raw_model {
    (
        $(#[$meta:meta])*
        $name:ident, $wire:literal, [$($field:literal),* $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            raw: $crate::RawProps,
        }

        impl $crate::Model for $name {
            const NAME: &'static str = $wire;
            const FIELDS: &'static [&'static str] = &[$($field),*];

            fn from_raw(raw: $crate::RawProps) -> Self {
                Self { raw }
            }

            fn raw(&self) -> &$crate::RawProps {
                &self.raw
            }

            fn raw_mut(&mut self) -> &mut $crate::RawProps {
                &mut self.raw
            }

            fn into_raw(self) -> $crate::RawProps {
                self.raw
            }
        }
    };
}

pub(crate) use raw_model;
