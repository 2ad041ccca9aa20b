// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Generic cursor pagination for billing list endpoints.
//!
//! List endpoints return a page of items together with pagination metadata
//! carrying an opaque `next_cursor`. A [`Page`] binds one decoded response to
//! the request parameters that produced it and to the service that can fetch
//! the page after it.
//!
//! A page is in one of two states:
//!
//! - **has more**: the response carries at least one item *and* a non-null
//!   cursor. [`Page::next`] clones the request parameters with that cursor
//!   and issues them through the service.
//! - **exhausted**: anything else. [`Page::next`] fails with
//!   [`PaginationError::InvalidState`].
//!
//! Pages are immutable. Advancing always builds a new `Page`; the source page
//! is never touched, so concurrent `next()` calls on the same page are
//! independent of each other.
//!
//! ```ignore
//! let mut page = client.subscriptions().list(params).await?;
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

use async_trait::async_trait;
use futures_util::stream::{self, Stream, TryStreamExt};
use std::fmt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Message carried by [`PaginationError::InvalidState`] when `next()` is
/// called on an exhausted page.
pub const NEXT_PAGE_UNAVAILABLE: &str = "Cannot request next page";

/// Errors raised by the pagination protocol itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// `next()` was called on a page with no further pages available
    #[error("Invalid pagination state: {0}")]
    InvalidState(&'static str),

    /// The caller cancelled the in-flight page request
    #[error("Page request was cancelled")]
    Cancelled,
}

/// Request parameters of a list operation.
pub trait PageRequest: Clone + Send + Sync {
    /// Return a copy of these parameters with the cursor replaced.
    fn with_cursor(&self, cursor: String) -> Self;
}

/// A decoded list response.
pub trait PageResponse: Send + Sync {
    /// Element type of the page.
    type Item: Send;
    /// Decode failure raised while reading items or metadata.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Items of this page, in server-delivered order.
    fn items(&self) -> Result<Vec<Self::Item>, Self::Error>;

    /// Opaque cursor identifying the next page, if any.
    fn next_cursor(&self) -> Result<Option<String>, Self::Error>;

    /// Whether this page carries any items.
    fn has_items(&self) -> Result<bool, Self::Error> {
        self.items().map(|items| !items.is_empty())
    }
}

/// Handle able to invoke one list endpoint.
#[async_trait]
pub trait PageService<P: PageRequest + 'static>: Clone + Send + Sync + 'static {
    /// Decoded response of the endpoint.
    type Response: PageResponse + 'static;
    /// Error returned to callers of [`Page`] operations.
    type Error: From<PaginationError>
        + From<<Self::Response as PageResponse>::Error>
        + Send
        + 'static;

    /// Issue the request described by `params` and decode the response.
    async fn fetch_page(&self, params: P) -> Result<Self::Response, Self::Error>;
}

/// One page of a list endpoint.
pub struct Page<P, S>
where
    P: PageRequest + 'static,
    S: PageService<P>,
{
    params: P,
    service: S,
    response: S::Response,
}

type ItemOf<P, S> = <<S as PageService<P>>::Response as PageResponse>::Item;

impl<P, S> Page<P, S>
where
    P: PageRequest + 'static,
    S: PageService<P>,
{
    /// Bind a decoded response to the parameters and service that produced it.
    pub fn new(params: P, service: S, response: S::Response) -> Self {
        Self {
            params,
            service,
            response,
        }
    }

    /// Parameters of the request that produced this page.
    pub fn params(&self) -> &P {
        &self.params
    }

    /// The decoded response backing this page.
    pub fn response(&self) -> &S::Response {
        &self.response
    }

    /// Items of this page, in server-delivered order.
    pub fn items(&self) -> Result<Vec<ItemOf<P, S>>, S::Error> {
        Ok(self.response.items()?)
    }

    /// Whether another page can be requested.
    ///
    /// A decode failure while reading the items or the pagination metadata
    /// ends pagination instead of surfacing the error.
    pub fn has_next(&self) -> bool {
        self.next_cursor().is_some()
    }

    fn next_cursor(&self) -> Option<String> {
        let has_items = match self.response.has_items() {
            Ok(has_items) => has_items,
            Err(e) => {
                tracing::warn!(error = %e, "Unable to read page items, ending pagination");
                return None;
            }
        };
        if !has_items {
            return None;
        }
        match self.response.next_cursor() {
            Ok(cursor) => cursor,
            Err(e) => {
                tracing::warn!(error = %e, "Unable to read pagination metadata, ending pagination");
                None
            }
        }
    }

    /// Fetch the page following this one.
    ///
    /// # Errors
    /// Returns [`PaginationError::InvalidState`] (converted into the service
    /// error) when this page is exhausted, or whatever the service returns
    /// while fetching.
    pub async fn next(&self) -> Result<Self, S::Error> {
        let Some(cursor) = self.next_cursor() else {
            return Err(PaginationError::InvalidState(NEXT_PAGE_UNAVAILABLE).into());
        };

        tracing::debug!(cursor = %cursor, "Fetching next page");
        let params = self.params.with_cursor(cursor);
        let response = self.service.fetch_page(params.clone()).await?;

        Ok(Self::new(params, self.service.clone(), response))
    }

    /// Fetch the next page unless `token` is cancelled first.
    ///
    /// Cancellation drops the in-flight request and fails with
    /// [`PaginationError::Cancelled`].
    pub async fn next_with_cancel(&self, token: &CancellationToken) -> Result<Self, S::Error> {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!("Next page request cancelled");
                Err(PaginationError::Cancelled.into())
            }
            page = self.next() => page,
        }
    }

    /// Stream every item of this page and all pages after it.
    ///
    /// Items of a page are yielded before the following page is requested.
    /// The stream stops after the first exhausted page and ends early with
    /// the first error encountered.
    pub fn into_item_stream(self) -> impl Stream<Item = Result<ItemOf<P, S>, S::Error>> + Send {
        stream::try_unfold((Some(self), false), |(state, advance)| async move {
            let Some(page) = state else {
                return Ok::<_, S::Error>(None);
            };
            let page = if advance { page.next().await? } else { page };
            let items = page.items()?;
            let state = if page.has_next() {
                (Some(page), true)
            } else {
                (None, false)
            };
            Ok(Some((stream::iter(items.into_iter().map(Ok::<_, S::Error>)), state)))
        })
        .try_flatten()
    }
}

impl<P, S> fmt::Debug for Page<P, S>
where
    P: PageRequest + fmt::Debug + 'static,
    S: PageService<P>,
    S::Response: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("params", &self.params)
            .field("response", &self.response)
            .finish_non_exhaustive()
    }
}
