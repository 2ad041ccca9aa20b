// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Price operation parameters

use super::{ParamsBase, RawParams, segment};
use billing_api::ModelError;
use billing_pagination::PageRequest;
use reqwest::Method;

/// `GET /prices`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceListParams {
    raw: RawParams,
}

impl PriceListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.raw.query.set("cursor", cursor.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.raw.query.set("limit", limit);
        self
    }

    pub fn get_cursor(&self) -> Result<Option<String>, ModelError> {
        self.raw.query.optional("cursor")
    }

    pub fn get_limit(&self) -> Result<Option<i64>, ModelError> {
        self.raw.query.optional("limit")
    }
}

impl ParamsBase for PriceListParams {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/prices".to_string()
    }

    fn raw(&self) -> &RawParams {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawParams {
        &mut self.raw
    }
}

impl PageRequest for PriceListParams {
    fn with_cursor(&self, cursor: String) -> Self {
        self.clone().cursor(cursor)
    }
}

/// `GET /prices/{price_id}`
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFetchParams {
    price_id: String,
    raw: RawParams,
}

impl PriceFetchParams {
    pub fn new(price_id: impl Into<String>) -> Self {
        Self {
            price_id: price_id.into(),
            raw: RawParams::default(),
        }
    }

    pub fn price_id(&self) -> &str {
        &self.price_id
    }
}

impl ParamsBase for PriceFetchParams {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/prices/{}", segment(&self.price_id))
    }

    fn raw(&self) -> &RawParams {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawParams {
        &mut self.raw
    }
}
