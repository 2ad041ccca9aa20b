// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Subscription types

use super::customer::Customer;
use super::discount::Discount;
use crate::error::ModelError;
use crate::model::{Model, raw_model};
use crate::open_enum::OpenEnum;
use crate::union::Union;
use crate::validate::Validate;
use crate::{Metadata, Timestamp, metadata_value};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Lifecycle state of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Ended,
    Upcoming,
}

/// When a cancellation takes effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CancelOption {
    EndOfSubscriptionTerm,
    Immediate,
    RequestedDate,
}

raw_model!(
    /// A customer's subscription to a plan
    Subscription,
    "subscription",
    [
        "id",
        "customer",
        "status",
        "start_date",
        "end_date",
        "net_terms",
        "auto_collection",
        "discount",
        "metadata",
        "created_at",
    ]
);

impl Subscription {
    /// Unique subscription identifier
    pub fn id(&self) -> Result<String, ModelError> {
        self.raw.required("id")
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.raw.set("id", id.into());
    }

    /// Customer being billed
    pub fn customer(&self) -> Result<Customer, ModelError> {
        self.raw.model("customer")
    }

    pub fn set_customer(&mut self, customer: Customer) {
        self.raw.set("customer", customer.into_value());
    }

    /// Lifecycle state
    pub fn status(&self) -> Result<OpenEnum<SubscriptionStatus>, ModelError> {
        self.raw.required("status")
    }

    pub fn set_status(&mut self, status: impl Into<OpenEnum<SubscriptionStatus>>) {
        self.raw.set("status", status.into());
    }

    /// When billing starts
    pub fn start_date(&self) -> Result<Timestamp, ModelError> {
        self.raw.required("start_date")
    }

    pub fn set_start_date(&mut self, start_date: Timestamp) {
        self.raw.set_timestamp("start_date", start_date);
    }

    /// Null while the subscription runs indefinitely
    pub fn end_date(&self) -> Result<Option<Timestamp>, ModelError> {
        self.raw.required_nullable("end_date")
    }

    pub fn set_end_date(&mut self, end_date: Option<Timestamp>) {
        match end_date {
            Some(end_date) => self.raw.set_timestamp("end_date", end_date),
            None => self.raw.set_null("end_date"),
        }
    }

    /// Days until an issued invoice is due
    pub fn net_terms(&self) -> Result<i64, ModelError> {
        self.raw.required("net_terms")
    }

    pub fn set_net_terms(&mut self, net_terms: i64) {
        self.raw.set("net_terms", net_terms);
    }

    /// Null when inherited from the customer
    pub fn auto_collection(&self) -> Result<Option<bool>, ModelError> {
        self.raw.required_nullable("auto_collection")
    }

    pub fn set_auto_collection(&mut self, auto_collection: Option<bool>) {
        self.raw.set("auto_collection", auto_collection);
    }

    /// Discount applied to the subscription, if any
    pub fn discount(&self) -> Result<Option<Discount>, ModelError> {
        self.raw.optional_union("discount")
    }

    /// `None` writes an explicit null; use [`Model::unset`] to drop the key.
    pub fn set_discount(&mut self, discount: Option<Discount>) {
        match discount {
            Some(discount) => self.raw.set("discount", discount.to_value()),
            None => self.raw.set_null("discount"),
        }
    }

    /// Caller-defined key/value metadata
    pub fn metadata(&self) -> Result<Metadata, ModelError> {
        self.raw.required("metadata")
    }

    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.raw.set("metadata", metadata_value(metadata));
    }

    /// When the subscription was created
    pub fn created_at(&self) -> Result<Timestamp, ModelError> {
        self.raw.required("created_at")
    }

    pub fn set_created_at(&mut self, created_at: Timestamp) {
        self.raw.set_timestamp("created_at", created_at);
    }
}

impl Validate for Subscription {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.id()?;
        self.customer()?.validate()?;
        self.status()?.validate()?;
        self.start_date()?;
        self.end_date()?;
        self.net_terms()?;
        self.auto_collection()?;
        self.discount()?.validate()?;
        self.metadata()?;
        self.created_at()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::model::{decode, decode_with, encode};
    use crate::options::{CodecOptions, DateFormat};
    use crate::types::AmountDiscount;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn subscription_json() -> Value {
        json!({
            "id": "sub_1",
            "customer": {
                "id": "cus_1",
                "external_customer_id": null,
                "name": "Acme",
                "email": "billing@acme.example",
                "currency": "USD",
                "balance": "0.00",
                "metadata": {},
                "created_at": "2024-01-01T00:00:00Z"
            },
            "status": "active",
            "start_date": "2024-01-01T00:00:00Z",
            "end_date": null,
            "net_terms": 30,
            "auto_collection": true,
            "discount": {
                "discount_type": "percentage",
                "applies_to_price_ids": ["price_1"],
                "percentage_discount": 0.15
            },
            "metadata": {"plan": "pro"},
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    fn subscription(value: Value) -> Subscription {
        decode(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_full_subscription_validates() {
        let sub = subscription(subscription_json());

        assert!(sub.validate().is_ok());
        assert_eq!(sub.status().unwrap().known(), Some(&SubscriptionStatus::Active));
        assert_eq!(sub.end_date().unwrap(), None);
        assert_eq!(sub.net_terms().unwrap(), 30);
        assert_eq!(sub.customer().unwrap().email().unwrap(), "billing@acme.example");

        let discount = sub.discount().unwrap().unwrap();
        assert_eq!(
            discount.try_percentage().unwrap().percentage_discount().unwrap(),
            0.15
        );
    }

    #[test]
    fn test_validation_descends_into_nested_models() {
        let mut value = subscription_json();
        value["customer"]["name"] = json!(null);
        let sub = subscription(value);

        // The subscription's own fields are fine; the nested customer is not.
        assert_eq!(sub.id().unwrap(), "sub_1");
        assert!(matches!(
            sub.validate(),
            Err(ModelError::UnexpectedNullField(k)) if k == "name"
        ));
    }

    #[test]
    fn test_nested_decode_inherits_options() {
        let mut value = subscription_json();
        value["customer"]["portal_url"] = json!("https://portal.example");
        let sub: Subscription =
            decode_with(value.to_string().as_bytes(), CodecOptions::strict()).unwrap();

        assert!(matches!(
            sub.validate(),
            Err(ModelError::UnknownField { model: "customer", key }) if key == "portal_url"
        ));
    }

    #[test]
    fn test_unmatched_discount_fails_validation() {
        let mut value = subscription_json();
        value["discount"] = json!({"discount_type": "percentage"});
        let sub = subscription(value);

        assert!(matches!(
            sub.validate(),
            Err(ModelError::UnionDecodeFailure { union: "discount", .. })
        ));
    }

    #[test]
    fn test_null_and_unset_are_distinct() {
        let mut sub = subscription(subscription_json());

        sub.set_discount(None);
        let encoded: Value = serde_json::from_slice(&encode(&sub).unwrap()).unwrap();
        assert_eq!(encoded["discount"], Value::Null);
        assert!(encoded.as_object().unwrap().contains_key("discount"));
        assert_eq!(sub.discount().unwrap(), None);

        sub.unset("discount");
        let encoded: Value = serde_json::from_slice(&encode(&sub).unwrap()).unwrap();
        assert!(!encoded.as_object().unwrap().contains_key("discount"));
        assert_eq!(sub.discount().unwrap(), None);
    }

    #[test]
    fn test_frozen_snapshot_is_isolated_from_later_writes() {
        let mut sub = subscription(subscription_json());
        let snapshot = sub.raw().freeze();

        sub.set_status(SubscriptionStatus::Ended);
        sub.set_end_date(Some(chrono::Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()));

        assert_eq!(snapshot["status"], json!("active"));
        assert_eq!(snapshot["end_date"], Value::Null);
        assert_eq!(sub.status().unwrap().known(), Some(&SubscriptionStatus::Ended));
    }

    #[test]
    fn test_date_only_values_accepted_when_enabled() {
        let mut value = subscription_json();
        value["start_date"] = json!("2024-03-01");

        let sub = subscription(value.clone());
        assert!(matches!(
            sub.start_date(),
            Err(ModelError::MalformedValue { key, .. }) if key == "start_date"
        ));

        let options = CodecOptions::default().with_date_format(DateFormat::Rfc3339OrDate);
        let sub: Subscription = decode_with(value.to_string().as_bytes(), options).unwrap();
        assert_eq!(
            sub.start_date().unwrap(),
            chrono::Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_built_subscription_round_trips() {
        let mut customer = Customer::default();
        customer.set_id("cus_2");
        customer.set_external_customer_id(None);
        customer.set_name("Globex");
        customer.set_email("ap@globex.example");
        customer.set_currency(Some("EUR".to_string()));
        customer.set_balance("10.00");
        customer.set_metadata(Metadata::new());
        customer.set_created_at(chrono::Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());

        let mut amount = AmountDiscount::default();
        amount.set_discount_type(crate::types::DiscountType::Amount);
        amount.set_applies_to_price_ids(vec![]);
        amount.set_amount_discount("25.00");

        let start = chrono::Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let mut sub = Subscription::default();
        sub.set_id("sub_2");
        sub.set_customer(customer.clone());
        sub.set_status(SubscriptionStatus::Upcoming);
        sub.set_start_date(start);
        sub.set_end_date(None);
        sub.set_net_terms(0);
        sub.set_auto_collection(None);
        sub.set_discount(Some(amount.into()));
        sub.set_metadata(Metadata::new());
        sub.set_created_at(start);
        assert!(sub.validate().is_ok());

        let decoded: Subscription = decode(&encode(&sub).unwrap()).unwrap();
        assert_eq!(decoded, sub);
        assert_eq!(decoded.customer().unwrap(), customer);
        assert_eq!(decoded.start_date().unwrap(), start);
        assert_eq!(decoded.auto_collection().unwrap(), None);
        assert_eq!(
            decoded.discount().unwrap().unwrap().try_amount().unwrap().amount_discount().unwrap(),
            "25.00"
        );
    }
}
