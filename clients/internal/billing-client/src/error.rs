// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for billing-client

use billing_api::ModelError;
use billing_pagination::PaginationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A response or request payload could not be decoded or encoded
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// A page operation was invalid for the page's state
    #[error(transparent)]
    Pagination(PaginationError),

    /// The transport failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected response status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Client configuration is incomplete or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller cancelled the request
    #[error("Request was cancelled")]
    Cancelled,
}

impl From<PaginationError> for ClientError {
    fn from(e: PaginationError) -> Self {
        match e {
            PaginationError::Cancelled => Self::Cancelled,
            other => Self::Pagination(other),
        }
    }
}

impl ClientError {
    /// Whether this is `next()` being called on an exhausted page.
    pub fn is_invalid_pagination_state(&self) -> bool {
        matches!(self, Self::Pagination(PaginationError::InvalidState(_)))
    }

    /// HTTP status of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_cancel_maps_to_cancelled() {
        let e = ClientError::from(PaginationError::Cancelled);
        assert!(matches!(e, ClientError::Cancelled));
        assert!(!e.is_invalid_pagination_state());
    }

    #[test]
    fn test_invalid_state_keeps_message() {
        let e = ClientError::from(PaginationError::InvalidState(
            billing_pagination::NEXT_PAGE_UNAVAILABLE,
        ));
        assert!(e.is_invalid_pagination_state());
        assert_eq!(
            e.to_string(),
            "Invalid pagination state: Cannot request next page"
        );
    }

    #[test]
    fn test_status_error_display() {
        let e = ClientError::Status {
            status: StatusCode::NOT_FOUND,
            body: r#"{"title":"not found"}"#.to_string(),
        };
        assert_eq!(e.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            e.to_string(),
            r#"Unexpected response status 404 Not Found: {"title":"not found"}"#
        );
    }
}
