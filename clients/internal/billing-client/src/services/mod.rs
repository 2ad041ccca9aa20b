// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Per-resource services
//!
//! A service is a cheap handle onto the shared [`BillingClient`]. List
//! operations return a [`billing_pagination::Page`] bound to the service, so
//! the page can fetch its successors itself.

mod customers;
mod prices;
mod subscriptions;

pub use customers::{CustomerPage, CustomerService};
pub use prices::{PricePage, PriceService};
pub use subscriptions::{SubscriptionPage, SubscriptionService};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::params::ParamsBase;
use crate::transport::{HttpTransport, Transport};
use billing_api::{Model, Union, decode_with};
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;

/// Billing API client
#[derive(Clone)]
pub struct BillingClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl BillingClient {
    /// Create a client that sends requests with reqwest.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from `BILLING_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn customers(&self) -> CustomerService {
        CustomerService::new(self.clone())
    }

    pub fn prices(&self) -> PriceService {
        PriceService::new(self.clone())
    }

    pub fn subscriptions(&self) -> SubscriptionService {
        SubscriptionService::new(self.clone())
    }

    /// Issue the request for `params` and return the body of a successful
    /// response.
    async fn send<P: ParamsBase>(&self, params: &P) -> Result<Bytes, ClientError> {
        let request = params.to_request(&self.config.base_url)?;
        let method = request.method.clone();
        let url = request.url.clone();

        let response = self.transport.issue(request).await?;
        tracing::debug!(
            method = %method,
            url = %url,
            status = response.status.as_u16(),
            "Billing API request"
        );

        if !response.status.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }
        Ok(response.body)
    }

    /// Issue a request whose response is a model.
    pub(crate) async fn request_model<P, M>(&self, params: &P) -> Result<M, ClientError>
    where
        P: ParamsBase,
        M: Model,
    {
        let body = self.send(params).await?;
        Ok(decode_with(&body, self.config.codec)?)
    }

    /// Issue a request whose response is a union.
    pub(crate) async fn request_union<P, U>(&self, params: &P) -> Result<U, ClientError>
    where
        P: ParamsBase,
        U: Union,
    {
        let body = self.send(params).await?;
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(billing_api::ModelError::from)?;
        Ok(U::decode(&value, self.config.codec)?)
    }
}

impl fmt::Debug for BillingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BillingClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
