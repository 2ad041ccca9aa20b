// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for billing-api

use std::fmt;
use thiserror::Error;

/// Errors raised while decoding or validating a model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A required field is absent from the property bag
    #[error("Missing required field: '{0}'")]
    MissingRequiredField(String),

    /// A required, non-nullable field holds JSON null
    #[error("Field '{0}' cannot be null")]
    UnexpectedNullField(String),

    /// A value is present but cannot be decoded to the declared type
    #[error("Malformed value for field '{key}': {source}")]
    MalformedValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A model was expected but the JSON value is not an object
    #[error("Expected a JSON object for '{key}', found {found}")]
    ExpectedObject { key: String, found: &'static str },

    /// Strict decoding found a key the model does not declare
    #[error("Unknown field '{key}' in {model}")]
    UnknownField { model: &'static str, key: String },

    /// No alternative of a union accepted the payload
    #[error("Data did not match any variant of {union}: {}", DisplayFailures(.failures))]
    UnionDecodeFailure {
        union: &'static str,
        failures: Vec<VariantFailure>,
    },

    /// The payload is not valid JSON
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why one union alternative rejected a payload.
#[derive(Debug)]
pub struct VariantFailure {
    /// Name of the rejected alternative
    pub variant: &'static str,
    /// Error raised while decoding or validating the alternative
    pub error: Box<ModelError>,
}

impl fmt::Display for VariantFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.variant, self.error)
    }
}

struct DisplayFailures<'a>(&'a [VariantFailure]);

impl fmt::Display for DisplayFailures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_failure_lists_every_variant() {
        let err = ModelError::UnionDecodeFailure {
            union: "discount",
            failures: vec![
                VariantFailure {
                    variant: "percentage_discount",
                    error: Box::new(ModelError::MissingRequiredField(
                        "percentage_discount".to_string(),
                    )),
                },
                VariantFailure {
                    variant: "amount_discount",
                    error: Box::new(ModelError::UnexpectedNullField(
                        "amount_discount".to_string(),
                    )),
                },
            ],
        };

        assert_eq!(
            err.to_string(),
            "Data did not match any variant of discount: \
             percentage_discount: Missing required field: 'percentage_discount'; \
             amount_discount: Field 'amount_discount' cannot be null"
        );
    }
}
