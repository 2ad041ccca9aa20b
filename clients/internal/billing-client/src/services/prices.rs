// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Price operations

use super::BillingClient;
use crate::error::ClientError;
use crate::params::{PriceFetchParams, PriceListParams};
use async_trait::async_trait;
use billing_api::{ListResponse, Price};
use billing_pagination::{Page, PageService};

/// One page of `GET /prices`
pub type PricePage = Page<PriceListParams, PriceService>;

#[derive(Debug, Clone)]
pub struct PriceService {
    client: BillingClient,
}

impl PriceService {
    pub(crate) fn new(client: BillingClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: PriceListParams) -> Result<PricePage, ClientError> {
        let response = self.fetch_page(params.clone()).await?;
        Ok(Page::new(params, self.clone(), response))
    }

    pub async fn fetch(&self, params: PriceFetchParams) -> Result<Price, ClientError> {
        self.client.request_model(&params).await
    }
}

#[async_trait]
impl PageService<PriceListParams> for PriceService {
    type Response = ListResponse<Price>;
    type Error = ClientError;

    async fn fetch_page(&self, params: PriceListParams) -> Result<ListResponse<Price>, ClientError> {
        self.client.request_model(&params).await
    }
}
