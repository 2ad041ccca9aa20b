// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request parameters
//!
//! Every operation has a params type holding its path parameters plus three
//! raw bags (headers, query, body). Builder methods consume and return the
//! params, so a modified copy never affects the original.
//!
//! ```ignore
//! let params = SubscriptionListParams::new()
//!     .customer_ids(vec!["cus_1".into()])
//!     .status(SubscriptionStatus::Active)
//!     .limit(50);
//! ```

mod customers;
mod prices;
mod subscriptions;

pub use customers::*;
pub use prices::*;
pub use subscriptions::*;

use crate::error::ClientError;
use crate::transport::HttpRequest;
use billing_api::{ModelError, RawProps};
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

/// Page size the server applies when `limit` is not sent
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Raw header, query and body values of a request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawParams {
    pub headers: RawProps,
    pub query: RawProps,
    pub body: RawProps,
}

/// Behaviour shared by all request parameter types.
pub trait ParamsBase: Clone + Send + Sync {
    /// HTTP method of the operation
    fn method(&self) -> Method;

    /// Request path, with path parameters percent-encoded
    fn path(&self) -> String;

    fn raw(&self) -> &RawParams;

    fn raw_mut(&mut self) -> &mut RawParams;

    /// Full URL: `base` joined with [`ParamsBase::path`], plus the encoded
    /// query.
    fn url(&self, base: &Url) -> Result<Url, ClientError> {
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        let mut url = base.clone();
        let path = format!("{}{}", base.path().trim_end_matches('/'), self.path());
        url.set_path(&path);
        url.set_query(None);

        let pairs = encode_query(&self.raw().query);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Extra headers of the request. Null values are skipped.
    fn headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.raw().headers.freeze().iter() {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// JSON body, or `None` for operations without one.
    fn body(&self) -> Result<Option<Vec<u8>>, ClientError> {
        if self.method() == Method::GET {
            return Ok(None);
        }
        let body = serde_json::to_vec(&self.raw().body).map_err(ModelError::from)?;
        Ok(Some(body))
    }

    /// Build the request issued for these parameters.
    fn to_request(&self, base: &Url) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest {
            method: self.method(),
            url: self.url(base)?,
            headers: self.headers()?,
            body: self.body()?,
        })
    }

    /// Send an additional header.
    fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.raw_mut().headers.set(name, value.into());
        self
    }

    /// Send an additional query parameter.
    fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.raw_mut().query.set(key, value);
        self
    }

    /// Send an additional body property. Ignored by operations without a
    /// body.
    fn body_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.raw_mut().body.set(key, value);
        self
    }
}

/// Flatten a query bag into `key=value` pairs.
///
/// Strings are sent verbatim and other scalars as their JSON text. Nulls are
/// skipped. Arrays repeat the key as `key[]`; objects nest as `key[sub]`.
pub fn encode_query(query: &RawProps) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query.freeze().iter() {
        push_pairs(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_pairs(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Bool(_) | Value::Number(_) => pairs.push((key, value.to_string())),
        Value::Array(items) => {
            let key = format!("{}[]", key);
            for item in items {
                push_pairs(pairs, key.clone(), item);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_pairs(pairs, format!("{}[{}]", key, sub), item);
            }
        }
    }
}

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
