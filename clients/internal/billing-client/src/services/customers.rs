// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Customer operations

use super::BillingClient;
use crate::error::ClientError;
use crate::params::{CustomerFetchParams, CustomerListParams};
use async_trait::async_trait;
use billing_api::{Customer, ListResponse};
use billing_pagination::{Page, PageService};

/// One page of `GET /customers`
pub type CustomerPage = Page<CustomerListParams, CustomerService>;

#[derive(Debug, Clone)]
pub struct CustomerService {
    client: BillingClient,
}

impl CustomerService {
    pub(crate) fn new(client: BillingClient) -> Self {
        Self { client }
    }

    /// List customers, starting at the page `params` selects.
    pub async fn list(&self, params: CustomerListParams) -> Result<CustomerPage, ClientError> {
        let response = self.fetch_page(params.clone()).await?;
        Ok(Page::new(params, self.clone(), response))
    }

    pub async fn fetch(&self, params: CustomerFetchParams) -> Result<Customer, ClientError> {
        self.client.request_model(&params).await
    }
}

#[async_trait]
impl PageService<CustomerListParams> for CustomerService {
    type Response = ListResponse<Customer>;
    type Error = ClientError;

    async fn fetch_page(
        &self,
        params: CustomerListParams,
    ) -> Result<ListResponse<Customer>, ClientError> {
        self.client.request_model(&params).await
    }
}
