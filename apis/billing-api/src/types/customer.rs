// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Customer types

use crate::error::ModelError;
use crate::model::{Model, raw_model};
use crate::validate::Validate;
use crate::{Metadata, Timestamp, metadata_value};

raw_model!(
    /// A billed customer
    Customer,
    "customer",
    [
        "id",
        "external_customer_id",
        "name",
        "email",
        "currency",
        "balance",
        "metadata",
        "created_at",
    ]
);

impl Customer {
    /// Unique customer identifier
    pub fn id(&self) -> Result<String, ModelError> {
        self.raw.required("id")
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.raw.set("id", id.into());
    }

    /// Caller-assigned alias for the customer
    pub fn external_customer_id(&self) -> Result<Option<String>, ModelError> {
        self.raw.required_nullable("external_customer_id")
    }

    pub fn set_external_customer_id(&mut self, external_customer_id: Option<String>) {
        self.raw.set("external_customer_id", external_customer_id);
    }

    /// Display name
    pub fn name(&self) -> Result<String, ModelError> {
        self.raw.required("name")
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.raw.set("name", name.into());
    }

    /// Billing contact email
    pub fn email(&self) -> Result<String, ModelError> {
        self.raw.required("email")
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.raw.set("email", email.into());
    }

    /// ISO 4217 currency code; null until the first price is attached
    pub fn currency(&self) -> Result<Option<String>, ModelError> {
        self.raw.required_nullable("currency")
    }

    pub fn set_currency(&mut self, currency: Option<String>) {
        self.raw.set("currency", currency);
    }

    /// Credit balance, as a decimal string
    pub fn balance(&self) -> Result<String, ModelError> {
        self.raw.required("balance")
    }

    pub fn set_balance(&mut self, balance: impl Into<String>) {
        self.raw.set("balance", balance.into());
    }

    /// Caller-defined key/value metadata
    pub fn metadata(&self) -> Result<Metadata, ModelError> {
        self.raw.required("metadata")
    }

    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.raw.set("metadata", metadata_value(metadata));
    }

    /// When the customer was created
    pub fn created_at(&self) -> Result<Timestamp, ModelError> {
        self.raw.required("created_at")
    }

    pub fn set_created_at(&mut self, created_at: Timestamp) {
        self.raw.set_timestamp("created_at", created_at);
    }
}

impl Validate for Customer {
    fn validate(&self) -> Result<(), ModelError> {
        self.raw.check_declared(Self::NAME, Self::FIELDS)?;
        self.id()?;
        self.external_customer_id()?;
        self.name()?;
        self.email()?;
        self.currency()?;
        self.balance()?;
        self.metadata()?;
        self.created_at()?;
        Ok(())
    }
}
