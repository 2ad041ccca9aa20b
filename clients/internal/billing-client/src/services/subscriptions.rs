// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Subscription operations

use super::BillingClient;
use crate::error::ClientError;
use crate::params::{
    SubscriptionCancelParams, SubscriptionFetchParams, SubscriptionFetchUsageParams,
    SubscriptionListParams,
};
use async_trait::async_trait;
use billing_api::{ListResponse, Subscription, SubscriptionUsage};
use billing_pagination::{Page, PageService};

/// One page of `GET /subscriptions`
pub type SubscriptionPage = Page<SubscriptionListParams, SubscriptionService>;

#[derive(Debug, Clone)]
pub struct SubscriptionService {
    client: BillingClient,
}

impl SubscriptionService {
    pub(crate) fn new(client: BillingClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: SubscriptionListParams,
    ) -> Result<SubscriptionPage, ClientError> {
        let response = self.fetch_page(params.clone()).await?;
        Ok(Page::new(params, self.clone(), response))
    }

    pub async fn fetch(&self, params: SubscriptionFetchParams) -> Result<Subscription, ClientError> {
        self.client.request_model(&params).await
    }

    /// Cancel a subscription; returns the updated subscription.
    pub async fn cancel(
        &self,
        params: SubscriptionCancelParams,
    ) -> Result<Subscription, ClientError> {
        tracing::info!(
            subscription_id = params.subscription_id(),
            "Cancelling subscription"
        );
        self.client.request_model(&params).await
    }

    /// Usage of a subscription, grouped or ungrouped depending on `group_by`.
    pub async fn fetch_usage(
        &self,
        params: SubscriptionFetchUsageParams,
    ) -> Result<SubscriptionUsage, ClientError> {
        self.client.request_union(&params).await
    }
}

#[async_trait]
impl PageService<SubscriptionListParams> for SubscriptionService {
    type Response = ListResponse<Subscription>;
    type Error = ClientError;

    async fn fetch_page(
        &self,
        params: SubscriptionListParams,
    ) -> Result<ListResponse<Subscription>, ClientError> {
        self.client.request_model(&params).await
    }
}
