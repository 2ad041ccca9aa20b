// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Billing API Client Library
//!
//! Typed access to the subscription billing API. Responses decode into the
//! lazily validated models of [`billing_api`]; list operations return
//! [`billing_pagination::Page`] values that fetch their own successors.
//!
//! ## Usage
//!
//! ```ignore
//! use billing_client::{BillingClient, ClientConfig, SubscriptionListParams};
//! use billing_client::billing_api::SubscriptionStatus;
//!
//! let client = BillingClient::new(ClientConfig::new("https://billing.example/v1", api_key)?)?;
//!
//! let mut page = client
//!     .subscriptions()
//!     .list(SubscriptionListParams::new().status(SubscriptionStatus::Active))
//!     .await?;
//! loop {
//!     for subscription in page.items()? {
//!         println!("{}", subscription.id()?);
//!     }
//!     if !page.has_next() {
//!         break;
//!     }
//!     page = page.next().await?;
//! }
//! ```
//!
//! ### Streaming every item
//!
//! ```ignore
//! use futures_util::TryStreamExt;
//!
//! let customers: Vec<_> = client
//!     .customers()
//!     .list(CustomerListParams::new())
//!     .await?
//!     .into_item_stream()
//!     .try_collect()
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod services;
pub mod transport;

pub use config::ClientConfig;
pub use error::ClientError;
pub use params::{
    CustomerFetchParams, CustomerListParams, DEFAULT_PAGE_LIMIT, ParamsBase, PriceFetchParams,
    PriceListParams, RawParams, SubscriptionCancelParams, SubscriptionFetchParams,
    SubscriptionFetchUsageParams, SubscriptionListParams,
};
pub use services::{
    BillingClient, CustomerPage, CustomerService, PricePage, PriceService, SubscriptionPage,
    SubscriptionService,
};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};

// Re-export the model and pagination crates for convenience
pub use billing_api;
pub use billing_pagination::{NEXT_PAGE_UNAVAILABLE, Page, PaginationError};
pub use tokio_util::sync::CancellationToken;
