// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration

use crate::error::ClientError;
use billing_api::CodecOptions;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const ENV_BASE_URL: &str = "BILLING_BASE_URL";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "BILLING_API_KEY";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "BILLING_TIMEOUT_SECS";

/// Default HTTP timeout (seconds)
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default `User-Agent` header
const DEFAULT_USER_AGENT: &str = concat!("billing-client/", env!("CARGO_PKG_VERSION"));

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub base_url: Url,
    /// Secret sent as a bearer token
    pub api_key: String,
    /// Timeout of a whole request
    pub timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Options used to decode responses
    pub codec: CodecOptions,
}

impl ClientConfig {
    /// Create a configuration with default timeout, user agent and codec
    /// options.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            codec: CodecOptions::default(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_codec(mut self, codec: CodecOptions) -> Self {
        self.codec = codec;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .ok_or_else(|| ClientError::Config(format!("{} is not set", ENV_BASE_URL)))?;
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ClientError::Config(format!("{} is not set", ENV_API_KEY)))?;

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(s) => s.trim().parse().map_err(|_| {
                ClientError::Config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, s))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(&base_url, api_key)?.with_timeout(Duration::from_secs(timeout_secs)))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("codec", &self.codec)
            .finish()
    }
}
