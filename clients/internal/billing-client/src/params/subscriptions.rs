// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Subscription operation parameters

use super::{ParamsBase, RawParams, segment};
use billing_api::{
    CancelOption, Granularity, ModelError, OpenEnum, SubscriptionStatus, Timestamp, ViewMode,
};
use billing_pagination::PageRequest;
use reqwest::Method;

/// `GET /subscriptions`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionListParams {
    raw: RawParams,
}

impl SubscriptionListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.raw.query.set("cursor", cursor.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.raw.query.set("limit", limit);
        self
    }

    /// Only subscriptions of these customers, sent as `customer_id[]`
    pub fn customer_ids(mut self, customer_ids: Vec<String>) -> Self {
        self.raw.query.set("customer_id", customer_ids);
        self
    }

    pub fn status(mut self, status: impl Into<OpenEnum<SubscriptionStatus>>) -> Self {
        self.raw.query.set("status", status.into());
        self
    }

    pub fn get_cursor(&self) -> Result<Option<String>, ModelError> {
        self.raw.query.optional("cursor")
    }

    pub fn get_limit(&self) -> Result<Option<i64>, ModelError> {
        self.raw.query.optional("limit")
    }

    pub fn get_customer_ids(&self) -> Result<Option<Vec<String>>, ModelError> {
        self.raw.query.optional("customer_id")
    }

    pub fn get_status(&self) -> Result<Option<OpenEnum<SubscriptionStatus>>, ModelError> {
        self.raw.query.optional("status")
    }
}

impl ParamsBase for SubscriptionListParams {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/subscriptions".to_string()
    }

    fn raw(&self) -> &RawParams {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawParams {
        &mut self.raw
    }
}

impl PageRequest for SubscriptionListParams {
    fn with_cursor(&self, cursor: String) -> Self {
        self.clone().cursor(cursor)
    }
}

/// `GET /subscriptions/{subscription_id}`
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionFetchParams {
    subscription_id: String,
    raw: RawParams,
}

impl SubscriptionFetchParams {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            raw: RawParams::default(),
        }
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }
}

impl ParamsBase for SubscriptionFetchParams {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/subscriptions/{}", segment(&self.subscription_id))
    }

    fn raw(&self) -> &RawParams {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawParams {
        &mut self.raw
    }
}

/// `POST /subscriptions/{subscription_id}/cancel`
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionCancelParams {
    subscription_id: String,
    raw: RawParams,
}

impl SubscriptionCancelParams {
    pub fn new(
        subscription_id: impl Into<String>,
        cancel_option: impl Into<OpenEnum<CancelOption>>,
    ) -> Self {
        let mut raw = RawParams::default();
        raw.body.set("cancel_option", cancel_option.into());
        Self {
            subscription_id: subscription_id.into(),
            raw,
        }
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Effective date, for [`CancelOption::RequestedDate`]
    pub fn cancellation_date(mut self, date: Timestamp) -> Self {
        self.raw.body.set_timestamp("cancellation_date", date);
        self
    }

    /// `None` sends an explicit null, deferring to the account default
    pub fn allow_invoice_credit_or_void(mut self, allow: Option<bool>) -> Self {
        self.raw.body.set("allow_invoice_credit_or_void", allow);
        self
    }

    pub fn get_cancel_option(&self) -> Result<OpenEnum<CancelOption>, ModelError> {
        self.raw.body.required("cancel_option")
    }

    pub fn get_cancellation_date(&self) -> Result<Option<Timestamp>, ModelError> {
        self.raw.body.optional("cancellation_date")
    }

    pub fn get_allow_invoice_credit_or_void(&self) -> Result<Option<bool>, ModelError> {
        self.raw.body.optional("allow_invoice_credit_or_void")
    }
}

impl ParamsBase for SubscriptionCancelParams {
    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/subscriptions/{}/cancel", segment(&self.subscription_id))
    }

    fn raw(&self) -> &RawParams {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawParams {
        &mut self.raw
    }
}

/// `GET /subscriptions/{subscription_id}/usage`
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionFetchUsageParams {
    subscription_id: String,
    raw: RawParams,
}

impl SubscriptionFetchUsageParams {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            raw: RawParams::default(),
        }
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn timeframe_start(mut self, start: Timestamp) -> Self {
        self.raw.query.set_timestamp("timeframe_start", start);
        self
    }

    pub fn timeframe_end(mut self, end: Timestamp) -> Self {
        self.raw.query.set_timestamp("timeframe_end", end);
        self
    }

    pub fn granularity(mut self, granularity: impl Into<OpenEnum<Granularity>>) -> Self {
        self.raw.query.set("granularity", granularity.into());
        self
    }

    /// Event property key to group usage by; grouped responses are paginated
    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        self.raw.query.set("group_by", group_by.into());
        self
    }

    pub fn view_mode(mut self, view_mode: impl Into<OpenEnum<ViewMode>>) -> Self {
        self.raw.query.set("view_mode", view_mode.into());
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.raw.query.set("cursor", cursor.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.raw.query.set("limit", limit);
        self
    }

    pub fn get_timeframe_start(&self) -> Result<Option<Timestamp>, ModelError> {
        self.raw.query.optional("timeframe_start")
    }

    pub fn get_timeframe_end(&self) -> Result<Option<Timestamp>, ModelError> {
        self.raw.query.optional("timeframe_end")
    }

    pub fn get_granularity(&self) -> Result<Option<OpenEnum<Granularity>>, ModelError> {
        self.raw.query.optional("granularity")
    }

    pub fn get_group_by(&self) -> Result<Option<String>, ModelError> {
        self.raw.query.optional("group_by")
    }

    pub fn get_view_mode(&self) -> Result<Option<OpenEnum<ViewMode>>, ModelError> {
        self.raw.query.optional("view_mode")
    }

    pub fn get_cursor(&self) -> Result<Option<String>, ModelError> {
        self.raw.query.optional("cursor")
    }

    pub fn get_limit(&self) -> Result<Option<i64>, ModelError> {
        self.raw.query.optional("limit")
    }
}

impl ParamsBase for SubscriptionFetchUsageParams {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/subscriptions/{}/usage", segment(&self.subscription_id))
    }

    fn raw(&self) -> &RawParams {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawParams {
        &mut self.raw
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use url::Url;

    fn base() -> Url {
        Url::parse("https://billing.example/v1").unwrap()
    }

    #[test]
    fn test_list_query_encoding() {
        let params = SubscriptionListParams::new()
            .customer_ids(vec!["cus_1".to_string(), "cus_2".to_string()])
            .status(SubscriptionStatus::Active)
            .limit(50);
        let url = params.url(&base()).unwrap();

        assert_eq!(url.path(), "/v1/subscriptions");
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("customer_id[]".to_string(), "cus_1".to_string()),
                ("customer_id[]".to_string(), "cus_2".to_string()),
                ("status".to_string(), "active".to_string()),
                ("limit".to_string(), "50".to_string()),
            ]
        );
        assert_eq!(
            params.get_status().unwrap().unwrap().known(),
            Some(&SubscriptionStatus::Active)
        );
    }

    #[test]
    fn test_cancel_body() {
        let date = chrono::Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let params = SubscriptionCancelParams::new("sub 1", CancelOption::RequestedDate)
            .cancellation_date(date)
            .allow_invoice_credit_or_void(None);

        assert_eq!(params.method(), Method::POST);
        assert_eq!(params.path(), "/subscriptions/sub%201/cancel");
        assert_eq!(params.get_cancellation_date().unwrap(), Some(date));
        assert_eq!(params.get_allow_invoice_credit_or_void().unwrap(), None);

        let body: Value = serde_json::from_slice(&params.body().unwrap().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "cancel_option": "requested_date",
                "cancellation_date": "2024-07-01T00:00:00Z",
                "allow_invoice_credit_or_void": null
            })
        );
    }

    #[test]
    fn test_usage_query() {
        let start = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let params = SubscriptionFetchUsageParams::new("sub_1")
            .timeframe_start(start)
            .granularity(Granularity::Day)
            .group_by("region")
            .view_mode(ViewMode::Cumulative);
        let url = params.url(&base()).unwrap();

        assert_eq!(url.path(), "/v1/subscriptions/sub_1/usage");
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("timeframe_start".to_string(), "2024-01-01T00:00:00Z".to_string()),
                ("granularity".to_string(), "day".to_string()),
                ("group_by".to_string(), "region".to_string()),
                ("view_mode".to_string(), "cumulative".to_string()),
            ]
        );
        assert_eq!(params.get_timeframe_start().unwrap(), Some(start));
        assert_eq!(params.body().unwrap(), None);
    }
}
