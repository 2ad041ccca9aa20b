// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Billing API resource models

pub mod common;
pub mod customer;
pub mod discount;
pub mod price;
pub mod subscription;
pub mod usage;

pub use common::*;
pub use customer::*;
pub use discount::*;
pub use price::*;
pub use subscription::*;
pub use usage::*;
