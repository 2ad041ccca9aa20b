// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Price types

use crate::Timestamp;
use crate::error::ModelError;
use crate::model::{Model, raw_model};
use crate::open_enum::OpenEnum;
use crate::validate::Validate;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// How often a price is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Cadence {
    OneTime,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
    Custom,
}

/// Pricing model of a price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum PriceModelType {
    Unit,
    Package,
    Matrix,
    Tiered,
    Bulk,
    Bps,
}

raw_model!(
    /// A price attached to a plan
    Price,
    "price",
    [
        "id",
        "external_price_id",
        "name",
        "cadence",
        "currency",
        "model_type",
        "unit_amount",
        "fixed_price_quantity",
        "created_at",
    ]
);

impl Price {
    /// Unique price identifier
    pub fn id(&self) -> Result<String, ModelError> {
        self.raw.required("id")
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.raw.set("id", id.into());
    }

    /// Caller-assigned alias
    pub fn external_price_id(&self) -> Result<Option<String>, ModelError> {
        self.raw.optional("external_price_id")
    }

    pub fn set_external_price_id(&mut self, external_price_id: Option<String>) {
        self.raw.set("external_price_id", external_price_id);
    }

    /// Display name
    pub fn name(&self) -> Result<String, ModelError> {
        self.raw.required("name")
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.raw.set("name", name.into());
    }

    /// Billing interval
    pub fn cadence(&self) -> Result<OpenEnum<Cadence>, ModelError> {
        self.raw.required("cadence")
    }

    pub fn set_cadence(&mut self, cadence: impl Into<OpenEnum<Cadence>>) {
        self.raw.set("cadence", cadence.into());
    }

    /// ISO 4217 currency code
    pub fn currency(&self) -> Result<String, ModelError> {
        self.raw.required("currency")
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.raw.set("currency", currency.into());
    }

    /// Pricing model
    pub fn model_type(&self) -> Result<OpenEnum<PriceModelType>, ModelError> {
        self.raw.required("model_type")
    }

    pub fn set_model_type(&mut self, model_type: impl Into<OpenEnum<PriceModelType>>) {
        self.raw.set("model_type", model_type.into());
    }

    /// Per-unit amount as a decimal string, for unit prices
    pub fn unit_amount(&self) -> Result<Option<String>, ModelError> {
        self.raw.optional("unit_amount")
    }

    pub fn set_unit_amount(&mut self, unit_amount: Option<String>) {
        self.raw.set("unit_amount", unit_amount);
    }

    /// Quantity billed for a fixed fee
    pub fn fixed_price_quantity(&self) -> Result<Option<f64>, ModelError> {
        self.raw.optional("fixed_price_quantity")
    }

    pub fn set_fixed_price_quantity(&mut self, fixed_price_quantity: Option<f64>) {
        self.raw.set("fixed_price_quantity", fixed_price_quantity);
    }

    /// When the price was created
    pub fn created_at(&self) -> Result<Timestamp, ModelError> {
        self.raw.required("created_at")
    }

    pub fn set_created_at(&mut self, created_at: Timestamp) {
        self.raw.set_timestamp("created_at", created_at);
    }
}

impl Validate for Price {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.id()?;
        self.external_price_id()?;
        self.name()?;
        self.cadence()?.validate()?;
        self.currency()?;
        self.model_type()?.validate()?;
        self.unit_amount()?;
        self.fixed_price_quantity()?;
        self.created_at()?;
        Ok(())
    }
}
