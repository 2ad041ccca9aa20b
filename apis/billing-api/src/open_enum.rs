// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Enumerations that tolerate values added by the server later
//!
//! The API may grow new enum members at any time. An [`OpenEnum`] keeps the
//! raw string it was built from and resolves it against the known literals of
//! `E` (case-sensitively). Unrecognized values decode, validate and re-encode
//! without loss.
//!
//! Known-value enums derive `strum::EnumString` and `strum::AsRefStr` with
//! snake_case literals:
//!
//! ```ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
//! #[strum(serialize_all = "snake_case")]
//! pub enum Cadence { OneTime, Monthly }
//!
//! let cadence: OpenEnum<Cadence> = OpenEnum::new("weekly");
//! assert_eq!(cadence.known(), None);
//! assert_eq!(cadence.raw(), "weekly");
//! ```

use crate::error::ModelError;
use crate::validate::Validate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A known enum member, or the raw string of an unknown one.
#[derive(Clone)]
pub struct OpenEnum<E> {
    raw: String,
    known: Option<E>,
}

impl<E: FromStr> OpenEnum<E> {
    /// Build from a raw wire value. Never fails.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let known = raw.parse().ok();
        Self { raw, known }
    }
}

impl<E> OpenEnum<E> {
    /// The value exactly as received or set.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The resolved member, if the raw value is a known literal.
    pub fn known(&self) -> Option<&E> {
        self.known.as_ref()
    }

    pub fn is_known(&self) -> bool {
        self.known.is_some()
    }

    pub fn into_raw(self) -> String {
        self.raw
    }
}

impl<E: AsRef<str>> From<E> for OpenEnum<E> {
    fn from(known: E) -> Self {
        Self {
            raw: known.as_ref().to_string(),
            known: Some(known),
        }
    }
}

impl<E> From<OpenEnum<E>> for Value {
    fn from(value: OpenEnum<E>) -> Self {
        Value::String(value.raw)
    }
}

impl<E> PartialEq for OpenEnum<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E> Eq for OpenEnum<E> {}

impl<E> Hash for OpenEnum<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<E: fmt::Debug> fmt::Debug for OpenEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.known {
            Some(known) => write!(f, "{:?}", known),
            None => write!(f, "Unknown({:?})", self.raw),
        }
    }
}

impl<E> fmt::Display for OpenEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<E> Serialize for OpenEnum<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de, E: FromStr> Deserialize<'de> for OpenEnum<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Unknown members are not validation errors.
impl<E> Validate for OpenEnum<E> {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use strum::{AsRefStr, Display, EnumString};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
    #[strum(serialize_all = "snake_case")]
    enum Color {
        Red,
        DarkBlue,
    }

    #[test]
    fn test_known_value_resolves() {
        let color: OpenEnum<Color> = OpenEnum::new("dark_blue");
        assert_eq!(color.known(), Some(&Color::DarkBlue));
        assert_eq!(color.raw(), "dark_blue");
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        let color: OpenEnum<Color> = OpenEnum::new("Red");
        assert!(!color.is_known());
        assert_eq!(color.raw(), "Red");
    }

    #[test]
    fn test_unknown_value_round_trips() {
        let color: OpenEnum<Color> = serde_json::from_str(r#""ultraviolet""#).unwrap();
        assert_eq!(color.known(), None);
        assert!(color.validate().is_ok());
        assert_eq!(serde_json::to_string(&color).unwrap(), r#""ultraviolet""#);
        assert_eq!(format!("{:?}", color), r#"Unknown("ultraviolet")"#);
    }

    #[test]
    fn test_from_known_member() {
        let color = OpenEnum::from(Color::DarkBlue);
        assert_eq!(color, OpenEnum::new("dark_blue"));
        assert_eq!(Value::from(color), Value::String("dark_blue".to_string()));
    }

    #[test]
    fn test_non_string_is_rejected() {
        assert!(serde_json::from_str::<OpenEnum<Color>>("42").is_err());
    }
}
