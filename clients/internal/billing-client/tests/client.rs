// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! End-to-end tests of the client against a mock billing server.

use std::time::Duration;

use billing_client::billing_api::{CancelOption, SubscriptionStatus, Validate};
use billing_client::{
    BillingClient, CancellationToken, ClientConfig, ClientError, CustomerListParams,
    SubscriptionCancelParams, SubscriptionListParams,
};
use futures_util::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Infrastructure
// ============================================================================

const API_KEY: &str = "sk_test_123";

async fn setup() -> (MockServer, BillingClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(&format!("{}/v1", server.uri()), API_KEY)
        .expect("valid base url")
        .with_timeout(Duration::from_secs(5))
        .with_user_agent("billing-client-tests");
    let client = BillingClient::new(config).expect("failed to build client");
    (server, client)
}

fn customer(id: &str) -> Value {
    json!({
        "id": id,
        "external_customer_id": null,
        "name": format!("Customer {}", id),
        "email": format!("{}@example.com", id),
        "currency": "USD",
        "balance": "0.00",
        "metadata": {},
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn subscription(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "customer": customer("cus_1"),
        "status": status,
        "start_date": "2024-01-01T00:00:00Z",
        "end_date": null,
        "net_terms": 30,
        "auto_collection": null,
        "metadata": {},
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn list(data: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "data": data,
        "pagination_metadata": {
            "has_more": next_cursor.is_some(),
            "next_cursor": next_cursor
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn list_customers_follows_cursor() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param_is_missing("cursor"))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .and(header("user-agent", "billing-client-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![customer("cus_1"), customer("cus_2")],
            Some("abc"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param("cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(vec![customer("cus_3")], None)))
        .expect(1)
        .mount(&server)
        .await;

    let first = client
        .customers()
        .list(CustomerListParams::new())
        .await
        .expect("first page");
    let ids: Vec<String> = first
        .items()
        .unwrap()
        .iter()
        .map(|c| c.id().unwrap())
        .collect();
    assert_eq!(ids, vec!["cus_1", "cus_2"]);
    assert!(first.has_next());

    let second = first.next().await.expect("second page");
    assert_eq!(second.items().unwrap().len(), 1);
    assert!(!second.has_next());

    let err = second.next().await.unwrap_err();
    assert!(err.is_invalid_pagination_state());
}

#[tokio::test]
async fn item_stream_walks_every_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/subscriptions"))
        .and(query_param("status", "active"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![subscription("sub_1", "active"), subscription("sub_2", "active")],
            Some("page2"),
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/subscriptions"))
        .and(query_param("status", "active"))
        .and(query_param("cursor", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![subscription("sub_3", "active")],
            Some("page3"),
        )))
        .mount(&server)
        .await;

    // A non-empty cursor with no items still ends pagination.
    Mock::given(method("GET"))
        .and(path("/v1/subscriptions"))
        .and(query_param("cursor", "page3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(vec![], Some("page4"))))
        .mount(&server)
        .await;

    let page = client
        .subscriptions()
        .list(SubscriptionListParams::new().status(SubscriptionStatus::Active))
        .await
        .expect("first page");

    let subscriptions: Vec<_> = page.into_item_stream().try_collect().await.expect("stream");
    let ids: Vec<String> = subscriptions.iter().map(|s| s.id().unwrap()).collect();
    assert_eq!(ids, vec!["sub_1", "sub_2", "sub_3"]);
    for s in &subscriptions {
        s.validate().expect("valid subscription");
    }

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 3);
}

#[tokio::test]
async fn cancel_posts_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/subscriptions/sub_1/cancel"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "cancel_option": "end_of_subscription_term",
            "allow_invoice_credit_or_void": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscription("sub_1", "ended")))
        .expect(1)
        .mount(&server)
        .await;

    let params = SubscriptionCancelParams::new("sub_1", CancelOption::EndOfSubscriptionTerm)
        .allow_invoice_credit_or_void(Some(false));
    let cancelled = client.subscriptions().cancel(params).await.expect("cancel");

    assert_eq!(
        cancelled.status().unwrap().known(),
        Some(&SubscriptionStatus::Ended)
    );
}

#[tokio::test]
async fn error_status_is_not_retried() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .customers()
        .list(CustomerListParams::new())
        .await
        .unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected status error, got {}", other),
    }
}

#[tokio::test]
async fn connection_failure_is_passed_through() {
    // Bind then release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = ClientConfig::new(&format!("http://127.0.0.1:{}/v1", port), API_KEY)
        .unwrap()
        .with_timeout(Duration::from_secs(5));
    let client = BillingClient::new(config).unwrap();

    let err = client
        .customers()
        .list(CustomerListParams::new())
        .await
        .unwrap_err();
    match err {
        ClientError::Http(e) => assert!(e.is_connect(), "unexpected transport error: {}", e),
        other => panic!("expected transport error, got {}", other),
    }
}

#[tokio::test]
async fn next_page_timeout_is_passed_through() {
    let server = MockServer::start().await;
    let config = ClientConfig::new(&format!("{}/v1", server.uri()), API_KEY)
        .unwrap()
        .with_timeout(Duration::from_millis(500));
    let client = BillingClient::new(config).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![customer("cus_1")],
            Some("stalled"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param("cursor", "stalled"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list(vec![customer("cus_2")], None))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .customers()
        .list(CustomerListParams::new())
        .await
        .expect("first page");

    let err = page.next().await.unwrap_err();
    match err {
        ClientError::Http(e) => assert!(e.is_timeout(), "unexpected transport error: {}", e),
        other => panic!("expected transport error, got {}", other),
    }

    // One attempt per page; the failed request is not retried.
    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 2);
}

#[tokio::test]
async fn next_page_can_be_cancelled() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![customer("cus_1")],
            Some("slow"),
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param("cursor", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list(vec![customer("cus_2")], None))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let page = client
        .customers()
        .list(CustomerListParams::new())
        .await
        .expect("first page");

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = page.next_with_cancel(&token).await.unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
    // The source page is untouched and can still advance.
    assert!(page.has_next());
}
