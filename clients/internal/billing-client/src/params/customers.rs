// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Customer operation parameters

use super::{ParamsBase, RawParams, segment};
use billing_api::ModelError;
use billing_pagination::PageRequest;
use reqwest::Method;

/// `GET /customers`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerListParams {
    raw: RawParams,
}

impl CustomerListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume after the page that returned this cursor
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.raw.query.set("cursor", cursor.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.raw.query.set("limit", limit);
        self
    }

    /// Only customers with this exact email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.raw.query.set("email", email.into());
        self
    }

    pub fn get_cursor(&self) -> Result<Option<String>, ModelError> {
        self.raw.query.optional("cursor")
    }

    pub fn get_limit(&self) -> Result<Option<i64>, ModelError> {
        self.raw.query.optional("limit")
    }

    pub fn get_email(&self) -> Result<Option<String>, ModelError> {
        self.raw.query.optional("email")
    }
}

impl ParamsBase for CustomerListParams {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/customers".to_string()
    }

    fn raw(&self) -> &RawParams {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawParams {
        &mut self.raw
    }
}

impl PageRequest for CustomerListParams {
    fn with_cursor(&self, cursor: String) -> Self {
        self.clone().cursor(cursor)
    }
}

/// `GET /customers/{customer_id}`
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerFetchParams {
    customer_id: String,
    raw: RawParams,
}

impl CustomerFetchParams {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            raw: RawParams::default(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

impl ParamsBase for CustomerFetchParams {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/customers/{}", segment(&self.customer_id))
    }

    fn raw(&self) -> &RawParams {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawParams {
        &mut self.raw
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_with_cursor_leaves_original_untouched() {
        let first = CustomerListParams::new().email("a@acme.example").limit(10);
        let second = first.with_cursor("abc".to_string());

        assert_eq!(first.get_cursor().unwrap(), None);
        assert_eq!(second.get_cursor().unwrap().as_deref(), Some("abc"));
        assert_eq!(second.get_email().unwrap().as_deref(), Some("a@acme.example"));
        assert_eq!(second.get_limit().unwrap(), Some(10));
    }
}
