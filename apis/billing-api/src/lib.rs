// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Billing API Models
//!
//! Data-transfer models for the subscription billing API. Every model wraps
//! a [`RawProps`] bag holding the JSON object exactly as the server sent it;
//! typed accessors decode one field at a time when it is read.
//!
//! - [`RawProps`]: ordered key to raw JSON value store, with typed accessors
//! - [`OpenEnum`]: enum values that round-trip unknown members
//! - [`Union`]: alternatives resolved by ordered trial decoding
//! - [`Validate`]: eager, fail-fast check of a whole model tree
//! - [`ListResponse`]: the list envelope, usable as a pagination response
//!
//! ```ignore
//! use billing_api::{decode, Model, Subscription, Validate};
//!
//! let subscription: Subscription = decode(&bytes)?;
//! subscription.validate()?;
//! println!("{} is {}", subscription.id()?, subscription.status()?);
//! ```

pub mod error;
pub mod model;
pub mod open_enum;
pub mod options;
pub mod raw;
pub mod types;
pub mod union;
pub mod validate;

pub use error::{ModelError, VariantFailure};
pub use model::{Model, decode, decode_with, encode};
pub use open_enum::OpenEnum;
pub use options::{CodecOptions, DateFormat, UnknownFields};
pub use raw::{FrozenProps, RawProps};
pub use types::*;
pub use union::{TrialDecoder, Union};
pub use validate::Validate;

/// RFC 3339 timestamp in UTC
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// String key-value metadata attached to a resource
pub type Metadata = indexmap::IndexMap<String, String>;

/// Encode metadata as a JSON object value.
pub(crate) fn metadata_value(metadata: Metadata) -> serde_json::Value {
    serde_json::Value::Object(
        metadata
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect(),
    )
}
