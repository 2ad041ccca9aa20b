// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Subscription usage types
//!
//! The usage endpoint answers with one of two shapes depending on whether a
//! `group_by` key was requested. Grouped data is a superset of ungrouped data,
//! so lenient decoding resolves both to [`SubscriptionUsage::Ungrouped`];
//! decode with [`crate::CodecOptions::strict`] to tell them apart.

use super::common::PaginationMetadata;
use crate::Timestamp;
use crate::error::ModelError;
use crate::model::{Model, raw_model};
use crate::open_enum::OpenEnum;
use crate::options::CodecOptions;
use crate::union::{TrialDecoder, Union, union_serde};
use crate::validate::Validate;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Whether usage quantities accumulate across the timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ViewMode {
    Periodic,
    Cumulative,
}

/// Bucket size of usage records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Granularity {
    Day,
}

raw_model!(BillableMetric, "billable_metric", ["id", "name"]);

impl BillableMetric {
    /// Metric identifier
    pub fn id(&self) -> Result<String, ModelError> {
        self.raw.required("id")
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.raw.set("id", id.into());
    }

    /// Display name
    pub fn name(&self) -> Result<String, ModelError> {
        self.raw.required("name")
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.raw.set("name", name.into());
    }
}

impl Validate for BillableMetric {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.id()?;
        self.name()?;
        Ok(())
    }
}

raw_model!(
    /// Quantity consumed within one timeframe bucket
    UsageRecord,
    "usage_record",
    ["quantity", "timeframe_start", "timeframe_end"]
);

impl UsageRecord {
    /// Amount consumed in the bucket
    pub fn quantity(&self) -> Result<f64, ModelError> {
        self.raw.required("quantity")
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.raw.set("quantity", quantity);
    }

    /// Start of the bucket
    pub fn timeframe_start(&self) -> Result<Timestamp, ModelError> {
        self.raw.required("timeframe_start")
    }

    pub fn set_timeframe_start(&mut self, timeframe_start: Timestamp) {
        self.raw.set_timestamp("timeframe_start", timeframe_start);
    }

    /// End of the bucket
    pub fn timeframe_end(&self) -> Result<Timestamp, ModelError> {
        self.raw.required("timeframe_end")
    }

    pub fn set_timeframe_end(&mut self, timeframe_end: Timestamp) {
        self.raw.set_timestamp("timeframe_end", timeframe_end);
    }
}

impl Validate for UsageRecord {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.quantity()?;
        self.timeframe_start()?;
        self.timeframe_end()?;
        Ok(())
    }
}

raw_model!(
    /// Event property value a group of usage was bucketed by
    MetricGroup,
    "metric_group",
    ["property_key", "property_value"]
);

impl MetricGroup {
    /// Event property grouped by
    pub fn property_key(&self) -> Result<String, ModelError> {
        self.raw.required("property_key")
    }

    pub fn set_property_key(&mut self, property_key: impl Into<String>) {
        self.raw.set("property_key", property_key.into());
    }

    /// Value of the grouped property
    pub fn property_value(&self) -> Result<String, ModelError> {
        self.raw.required("property_value")
    }

    pub fn set_property_value(&mut self, property_value: impl Into<String>) {
        self.raw.set("property_value", property_value.into());
    }
}

impl Validate for MetricGroup {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.property_key()?;
        self.property_value()?;
        Ok(())
    }
}

/// Accessors shared by grouped and ungrouped usage data.
macro_rules! usage_data_common {
    ($name:ident) => {
        impl $name {
            /// Metric the usage was measured for
            pub fn billable_metric(&self) -> Result<BillableMetric, ModelError> {
                self.raw.model("billable_metric")
            }

            pub fn set_billable_metric(&mut self, billable_metric: BillableMetric) {
                self.raw.set("billable_metric", billable_metric.into_value());
            }

            /// One record per timeframe bucket
            pub fn usage(&self) -> Result<Vec<UsageRecord>, ModelError> {
                self.raw.models("usage")
            }

            pub fn set_usage(&mut self, usage: Vec<UsageRecord>) {
                let records: Vec<Value> = usage.into_iter().map(Model::into_value).collect();
                self.raw.set("usage", records);
            }

            /// Periodic or cumulative quantities
            pub fn view_mode(&self) -> Result<OpenEnum<ViewMode>, ModelError> {
                self.raw.required("view_mode")
            }

            pub fn set_view_mode(&mut self, view_mode: impl Into<OpenEnum<ViewMode>>) {
                self.raw.set("view_mode", view_mode.into());
            }

            fn validate_common(&self) -> Result<(), ModelError> {
                self.raw.check_declared(Self::NAME, Self::FIELDS)?;
                self.billable_metric()?.validate()?;
                self.usage()?.validate()?;
                self.view_mode()?.validate()?;
                Ok(())
            }
        }
    };
}

raw_model!(
    UngroupedUsageData,
    "ungrouped_usage_data",
    ["billable_metric", "usage", "view_mode"]
);
usage_data_common!(UngroupedUsageData);

impl Validate for UngroupedUsageData {
    fn validate(&self) -> Result<(), ModelError> {
        self.validate_common()
    }
}

raw_model!(
    GroupedUsageData,
    "grouped_usage_data",
    ["billable_metric", "usage", "view_mode", "metric_group"]
);
usage_data_common!(GroupedUsageData);

impl GroupedUsageData {
    /// Property value this usage belongs to
    pub fn metric_group(&self) -> Result<MetricGroup, ModelError> {
        self.raw.model("metric_group")
    }

    pub fn set_metric_group(&mut self, metric_group: MetricGroup) {
        self.raw.set("metric_group", metric_group.into_value());
    }
}

impl Validate for GroupedUsageData {
    fn validate(&self) -> Result<(), ModelError> {
        self.validate_common()?;
        self.metric_group()?.validate()?;
        Ok(())
    }
}

raw_model!(
    /// Usage per billable metric
    UngroupedSubscriptionUsage,
    "ungrouped_subscription_usage",
    ["data"]
);

impl UngroupedSubscriptionUsage {
    /// Usage per billable metric
    pub fn data(&self) -> Result<Vec<UngroupedUsageData>, ModelError> {
        self.raw.models("data")
    }

    pub fn set_data(&mut self, data: Vec<UngroupedUsageData>) {
        let items: Vec<Value> = data.into_iter().map(Model::into_value).collect();
        self.raw.set("data", items);
    }
}

impl Validate for UngroupedSubscriptionUsage {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.data()?.validate()?;
        Ok(())
    }
}

raw_model!(
    /// Usage per billable metric and metric group, paginated
    GroupedSubscriptionUsage,
    "grouped_subscription_usage",
    ["data", "pagination_metadata"]
);

impl GroupedSubscriptionUsage {
    /// Usage per billable metric and group
    pub fn data(&self) -> Result<Vec<GroupedUsageData>, ModelError> {
        self.raw.models("data")
    }

    pub fn set_data(&mut self, data: Vec<GroupedUsageData>) {
        let items: Vec<Value> = data.into_iter().map(Model::into_value).collect();
        self.raw.set("data", items);
    }

    /// Cursor metadata; absent when unpaginated
    pub fn pagination_metadata(&self) -> Result<Option<PaginationMetadata>, ModelError> {
        self.raw.optional_model("pagination_metadata")
    }

    pub fn set_pagination_metadata(&mut self, metadata: Option<PaginationMetadata>) {
        match metadata {
            Some(metadata) => self.raw.set("pagination_metadata", metadata.into_value()),
            None => self.raw.set_null("pagination_metadata"),
        }
    }
}

impl Validate for GroupedSubscriptionUsage {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.data()?.validate()?;
        self.pagination_metadata()?.validate()?;
        Ok(())
    }
}

/// Response of the subscription usage endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionUsage {
    Ungrouped(UngroupedSubscriptionUsage),
    Grouped(GroupedSubscriptionUsage),
}

impl SubscriptionUsage {
    pub fn try_ungrouped(&self) -> Option<&UngroupedSubscriptionUsage> {
        match self {
            Self::Ungrouped(u) => Some(u),
            Self::Grouped(_) => None,
        }
    }

    pub fn try_grouped(&self) -> Option<&GroupedSubscriptionUsage> {
        match self {
            Self::Grouped(g) => Some(g),
            Self::Ungrouped(_) => None,
        }
    }
}

impl Union for SubscriptionUsage {
    const NAME: &'static str = "subscription_usage";

    fn decode(value: &Value, options: CodecOptions) -> Result<Self, ModelError> {
        TrialDecoder::new(Self::NAME, value, options)
            .attempt(Self::Ungrouped)
            .attempt(Self::Grouped)
            .finish()
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Ungrouped(u) => u.raw().clone().into_value(),
            Self::Grouped(g) => g.raw().clone().into_value(),
        }
    }
}

impl Validate for SubscriptionUsage {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Ungrouped(u) => u.validate(),
            Self::Grouped(g) => g.validate(),
        }
    }
}

union_serde!(SubscriptionUsage);

impl From<UngroupedSubscriptionUsage> for SubscriptionUsage {
    fn from(u: UngroupedSubscriptionUsage) -> Self {
        Self::Ungrouped(u)
    }
}

impl From<GroupedSubscriptionUsage> for SubscriptionUsage {
    fn from(g: GroupedSubscriptionUsage) -> Self {
        Self::Grouped(g)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    fn grouped_payload() -> Value {
        json!({
            "data": [{
                "billable_metric": {"id": "bm_1", "name": "API calls"},
                "usage": [{
                    "quantity": 120.0,
                    "timeframe_start": "2024-01-01T00:00:00Z",
                    "timeframe_end": "2024-01-02T00:00:00Z"
                }],
                "view_mode": "periodic",
                "metric_group": {"property_key": "region", "property_value": "us-east"}
            }],
            "pagination_metadata": {"has_more": false, "next_cursor": null}
        })
    }

    #[test]
    fn test_empty_data_is_ungrouped() {
        let usage = SubscriptionUsage::decode(&json!({"data": []}), CodecOptions::default()).unwrap();
        assert!(usage.try_ungrouped().is_some());
        assert!(usage.try_grouped().is_none());
        assert!(usage.try_ungrouped().unwrap().data().unwrap().is_empty());
    }

    #[test]
    fn test_grouped_payload_is_ungrouped_when_lenient() {
        let usage = SubscriptionUsage::decode(&grouped_payload(), CodecOptions::default()).unwrap();
        assert!(matches!(usage, SubscriptionUsage::Ungrouped(_)));
    }

    #[test]
    fn test_grouped_payload_is_grouped_when_strict() {
        let usage = SubscriptionUsage::decode(&grouped_payload(), CodecOptions::strict()).unwrap();
        let grouped = usage.try_grouped().unwrap();

        let data = grouped.data().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].metric_group().unwrap().property_value().unwrap(), "us-east");
        assert_eq!(data[0].usage().unwrap()[0].quantity().unwrap(), 120.0);
        assert_eq!(data[0].view_mode().unwrap().known(), Some(&ViewMode::Periodic));
        assert!(!grouped.pagination_metadata().unwrap().unwrap().has_more().unwrap());
    }

    #[test]
    fn test_malformed_record_rejects_both_shapes() {
        let mut payload = grouped_payload();
        payload["data"][0]["usage"][0]["quantity"] = json!("lots");

        let err = SubscriptionUsage::decode(&payload, CodecOptions::default()).unwrap_err();
        match err {
            ModelError::UnionDecodeFailure { union, failures } => {
                assert_eq!(union, "subscription_usage");
                assert_eq!(failures.len(), 2);
                assert!(failures.iter().all(|f| matches!(
                    *f.error,
                    ModelError::MalformedValue { ref key, .. } if key == "quantity"
                )));
            }
            other => panic!("expected union failure, got {other}"),
        }
    }

    #[test]
    fn test_unknown_view_mode_survives() {
        let mut payload = grouped_payload();
        payload["data"][0]["view_mode"] = json!("rolling");

        let usage = SubscriptionUsage::decode(&payload, CodecOptions::strict()).unwrap();
        let data = usage.try_grouped().unwrap().data().unwrap();
        assert_eq!(data[0].view_mode().unwrap().raw(), "rolling");
        assert_eq!(serde_json::to_value(&usage).unwrap(), payload);
    }
}
