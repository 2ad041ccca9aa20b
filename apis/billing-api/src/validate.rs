// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Eager validation of lazily decoded models
//!
//! Decoding a payload only parses the top-level object. `validate()` forces
//! every declared accessor of a model, recursing into nested models, unions
//! and collections of them, and returns the first failure it meets. It never
//! mutates anything.

use crate::error::ModelError;
use indexmap::IndexMap;

/// Recursive, fail-fast structural check.
pub trait Validate {
    /// Decode every declared field, recursing into nested models.
    fn validate(&self) -> Result<(), ModelError>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ModelError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ModelError> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

impl<T: Validate> Validate for IndexMap<String, T> {
    fn validate(&self) -> Result<(), ModelError> {
        self.values().try_for_each(Validate::validate)
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ModelError> {
        (**self).validate()
    }
}
