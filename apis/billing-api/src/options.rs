// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Codec options
//!
//! Options are carried by each property bag. They are set explicitly when a
//! payload is decoded (see [`crate::decode_with`]) and inherited by every
//! nested model or union decoded through the typed accessors.

/// Handling of keys a model does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFields {
    /// Keep undeclared keys and round-trip them untouched
    #[default]
    Preserve,
    /// Fail validation when an undeclared key is present
    Reject,
}

/// Accepted encodings for date-time fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// RFC 3339 date-times only
    #[default]
    Rfc3339,
    /// RFC 3339 date-times, or a bare `YYYY-MM-DD` read as midnight UTC
    Rfc3339OrDate,
}

/// Options threaded through model decoding and validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Handling of undeclared keys
    pub unknown_fields: UnknownFields,
    /// Accept numeric strings such as `"12.5"` for numeric fields
    pub numbers_from_strings: bool,
    /// Accepted date-time encodings
    pub date_format: DateFormat,
}

impl CodecOptions {
    /// Options that reject undeclared keys.
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFields::Reject,
            ..Self::default()
        }
    }

    /// Set the handling of undeclared keys.
    pub fn with_unknown_fields(mut self, unknown_fields: UnknownFields) -> Self {
        self.unknown_fields = unknown_fields;
        self
    }

    /// Accept numeric strings for numeric fields.
    pub fn with_numbers_from_strings(mut self, enabled: bool) -> Self {
        self.numbers_from_strings = enabled;
        self
    }

    /// Set the accepted date-time encodings.
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }
}
