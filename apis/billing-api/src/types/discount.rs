// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Discount types
//!
//! A discount is one of four shapes. They all carry `discount_type`, but the
//! field is an open enum, so the shapes are told apart by their required
//! fields rather than by the tag.

use crate::error::ModelError;
use crate::model::{Model, raw_model};
use crate::open_enum::OpenEnum;
use crate::options::CodecOptions;
use crate::union::{TrialDecoder, Union, union_serde};
use crate::validate::Validate;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

/// Kind of discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Trial,
    Usage,
    Amount,
}

/// Accessors shared by every discount shape.
macro_rules! discount_common {
    ($name:ident) => {
        impl $name {
            /// Kind of discount
            pub fn discount_type(&self) -> Result<OpenEnum<DiscountType>, ModelError> {
                self.raw.required("discount_type")
            }

            pub fn set_discount_type(&mut self, discount_type: impl Into<OpenEnum<DiscountType>>) {
                self.raw.set("discount_type", discount_type.into());
            }

            /// Prices this discount applies to
            pub fn applies_to_price_ids(&self) -> Result<Vec<String>, ModelError> {
                self.raw.required("applies_to_price_ids")
            }

            pub fn set_applies_to_price_ids(&mut self, price_ids: Vec<String>) {
                self.raw.set("applies_to_price_ids", price_ids);
            }

            /// Why the discount was applied
            pub fn reason(&self) -> Result<Option<String>, ModelError> {
                self.raw.optional("reason")
            }

            pub fn set_reason(&mut self, reason: Option<String>) {
                self.raw.set("reason", reason);
            }

            fn validate_common(&self) -> Result<(), ModelError> {
                self.raw.check_declared(Self::NAME, Self::FIELDS)?;
                self.discount_type()?.validate()?;
                self.applies_to_price_ids()?;
                self.reason()?;
                Ok(())
            }
        }
    };
}

raw_model!(
    /// Percentage off the discounted prices
    PercentageDiscount,
    "percentage_discount",
    ["discount_type", "applies_to_price_ids", "reason", "percentage_discount"]
);
discount_common!(PercentageDiscount);

impl PercentageDiscount {
    /// Fraction between 0 and 1
    pub fn percentage_discount(&self) -> Result<f64, ModelError> {
        self.raw.required("percentage_discount")
    }

    pub fn set_percentage_discount(&mut self, percentage_discount: f64) {
        self.raw.set("percentage_discount", percentage_discount);
    }
}

impl Validate for PercentageDiscount {
    fn validate(&self) -> Result<(), ModelError> {
        self.validate_common()?;
        self.percentage_discount()?;
        Ok(())
    }
}

raw_model!(
    /// Free units of usage
    UsageDiscount,
    "usage_discount",
    ["discount_type", "applies_to_price_ids", "reason", "usage_discount"]
);
discount_common!(UsageDiscount);

impl UsageDiscount {
    /// Number of usage units discounted
    pub fn usage_discount(&self) -> Result<f64, ModelError> {
        self.raw.required("usage_discount")
    }

    pub fn set_usage_discount(&mut self, usage_discount: f64) {
        self.raw.set("usage_discount", usage_discount);
    }
}

impl Validate for UsageDiscount {
    fn validate(&self) -> Result<(), ModelError> {
        self.validate_common()?;
        self.usage_discount()?;
        Ok(())
    }
}

raw_model!(
    /// Fixed amount off
    AmountDiscount,
    "amount_discount",
    ["discount_type", "applies_to_price_ids", "reason", "amount_discount"]
);
discount_common!(AmountDiscount);

impl AmountDiscount {
    /// Amount as a decimal string
    pub fn amount_discount(&self) -> Result<String, ModelError> {
        self.raw.required("amount_discount")
    }

    pub fn set_amount_discount(&mut self, amount_discount: impl Into<String>) {
        self.raw.set("amount_discount", amount_discount.into());
    }
}

impl Validate for AmountDiscount {
    fn validate(&self) -> Result<(), ModelError> {
        self.validate_common()?;
        self.amount_discount()?;
        Ok(())
    }
}

raw_model!(
    /// Trial period discount, capped by amount or percentage
    TrialDiscount,
    "trial_discount",
    [
        "discount_type",
        "applies_to_price_ids",
        "reason",
        "trial_amount_discount",
        "trial_percentage_discount",
    ]
);
discount_common!(TrialDiscount);

impl TrialDiscount {
    /// Fixed amount off during the trial
    pub fn trial_amount_discount(&self) -> Result<Option<String>, ModelError> {
        self.raw.optional("trial_amount_discount")
    }

    pub fn set_trial_amount_discount(&mut self, amount: Option<String>) {
        self.raw.set("trial_amount_discount", amount);
    }

    /// Fraction off during the trial
    pub fn trial_percentage_discount(&self) -> Result<Option<f64>, ModelError> {
        self.raw.optional("trial_percentage_discount")
    }

    pub fn set_trial_percentage_discount(&mut self, percentage: Option<f64>) {
        self.raw.set("trial_percentage_discount", percentage);
    }
}

impl Validate for TrialDiscount {
    fn validate(&self) -> Result<(), ModelError> {
        self.validate_common()?;
        self.trial_amount_discount()?;
        self.trial_percentage_discount()?;
        Ok(())
    }
}

/// A discount of any shape.
///
/// Alternatives are tried in declaration order. `TrialDiscount` has no
/// required field of its own and must stay last.
#[derive(Debug, Clone, PartialEq)]
pub enum Discount {
    Percentage(PercentageDiscount),
    Usage(UsageDiscount),
    Amount(AmountDiscount),
    Trial(TrialDiscount),
}

impl Discount {
    pub fn try_percentage(&self) -> Option<&PercentageDiscount> {
        match self {
            Self::Percentage(d) => Some(d),
            _ => None,
        }
    }

    pub fn try_usage(&self) -> Option<&UsageDiscount> {
        match self {
            Self::Usage(d) => Some(d),
            _ => None,
        }
    }

    pub fn try_amount(&self) -> Option<&AmountDiscount> {
        match self {
            Self::Amount(d) => Some(d),
            _ => None,
        }
    }

    pub fn try_trial(&self) -> Option<&TrialDiscount> {
        match self {
            Self::Trial(d) => Some(d),
            _ => None,
        }
    }

    /// `discount_type` of the active alternative
    pub fn discount_type(&self) -> Result<OpenEnum<DiscountType>, ModelError> {
        match self {
            Self::Percentage(d) => d.discount_type(),
            Self::Usage(d) => d.discount_type(),
            Self::Amount(d) => d.discount_type(),
            Self::Trial(d) => d.discount_type(),
        }
    }
}

impl Union for Discount {
    const NAME: &'static str = "discount";

    fn decode(value: &Value, options: CodecOptions) -> Result<Self, ModelError> {
        TrialDecoder::new(Self::NAME, value, options)
            .attempt(Self::Percentage)
            .attempt(Self::Usage)
            .attempt(Self::Amount)
            .attempt(Self::Trial)
            .finish()
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Percentage(d) => d.raw().clone().into_value(),
            Self::Usage(d) => d.raw().clone().into_value(),
            Self::Amount(d) => d.raw().clone().into_value(),
            Self::Trial(d) => d.raw().clone().into_value(),
        }
    }
}

impl Validate for Discount {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Percentage(d) => d.validate(),
            Self::Usage(d) => d.validate(),
            Self::Amount(d) => d.validate(),
            Self::Trial(d) => d.validate(),
        }
    }
}

union_serde!(Discount);

impl From<PercentageDiscount> for Discount {
    fn from(d: PercentageDiscount) -> Self {
        Self::Percentage(d)
    }
}

impl From<UsageDiscount> for Discount {
    fn from(d: UsageDiscount) -> Self {
        Self::Usage(d)
    }
}

impl From<AmountDiscount> for Discount {
    fn from(d: AmountDiscount) -> Self {
        Self::Amount(d)
    }
}

impl From<TrialDiscount> for Discount {
    fn from(d: TrialDiscount) -> Self {
        Self::Trial(d)
    }
}
