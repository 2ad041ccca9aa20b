// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Types shared by every list endpoint

use crate::error::ModelError;
use crate::model::{Model, raw_model};
use crate::raw::RawProps;
use crate::validate::Validate;
use billing_pagination::PageResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

raw_model!(
    /// Cursor metadata of a list response
    PaginationMetadata,
    "pagination_metadata",
    ["has_more", "next_cursor"]
);

impl PaginationMetadata {
    pub fn has_more(&self) -> Result<bool, ModelError> {
        self.raw.required("has_more")
    }

    pub fn set_has_more(&mut self, has_more: bool) {
        self.raw.set("has_more", has_more);
    }

    /// Opaque token for the next page; null on the last page
    pub fn next_cursor(&self) -> Result<Option<String>, ModelError> {
        self.raw.required_nullable("next_cursor")
    }

    pub fn set_next_cursor(&mut self, next_cursor: Option<String>) {
        self.raw.set("next_cursor", next_cursor);
    }
}

impl Validate for PaginationMetadata {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.has_more()?;
        self.next_cursor()?;
        Ok(())
    }
}

/// Envelope of every list endpoint:
/// `{ "data": [...], "pagination_metadata": {...} }`
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct ListResponse<T> {
    raw: RawProps,
    #[serde(skip)]
    item: PhantomData<fn() -> T>,
}

impl<T: Model> ListResponse<T> {
    pub fn new() -> Self {
        Self::from_raw(RawProps::new())
    }

    /// Items of this page, in server-delivered order
    pub fn data(&self) -> Result<Vec<T>, ModelError> {
        self.raw.models("data")
    }

    pub fn set_data(&mut self, data: Vec<T>) {
        let items: Vec<Value> = data.into_iter().map(Model::into_value).collect();
        self.raw.set("data", items);
    }

    pub fn pagination_metadata(&self) -> Result<PaginationMetadata, ModelError> {
        self.raw.model("pagination_metadata")
    }

    pub fn set_pagination_metadata(&mut self, metadata: PaginationMetadata) {
        self.raw.set("pagination_metadata", metadata.into_value());
    }
}

impl<T: Model> Model for ListResponse<T> {
    const NAME: &'static str = "list_response";
    const FIELDS: &'static [&'static str] = &["data", "pagination_metadata"];

    fn from_raw(raw: RawProps) -> Self {
        Self {
            raw,
            item: PhantomData,
        }
    }

    fn raw(&self) -> &RawProps {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawProps {
        &mut self.raw
    }

    fn into_raw(self) -> RawProps {
        self.raw
    }
}

impl<T: Model> Validate for ListResponse<T> {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.data()?.validate()?;
        self.pagination_metadata()?.validate()?;
        Ok(())
    }
}

impl<T: Model + Send> PageResponse for ListResponse<T> {
    type Item = T;
    type Error = ModelError;

    fn items(&self) -> Result<Vec<T>, ModelError> {
        self.data()
    }

    fn next_cursor(&self) -> Result<Option<String>, ModelError> {
        self.pagination_metadata()?.next_cursor()
    }

    /// Length of the raw `data` array; items are not decoded.
    fn has_items(&self) -> Result<bool, ModelError> {
        match self.raw.get("data") {
            Some(Value::Array(items)) => Ok(!items.is_empty()),
            _ => self.data().map(|items| !items.is_empty()),
        }
    }
}

impl<T: Model> Default for ListResponse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ListResponse<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            item: PhantomData,
        }
    }
}

impl<T> PartialEq for ListResponse<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> fmt::Debug for ListResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListResponse").field(&self.raw).finish()
    }
}
