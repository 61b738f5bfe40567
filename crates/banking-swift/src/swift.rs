//! # The `Swift` Value
//!
//! A validated SWIFT/BIC code. It can only be built through a validating
//! constructor, and its type is derived purely from its length.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use banking_core::{Countries, CountryRegistry, SwiftError};

use crate::validate;

/// Branch code ISO 9362 reserves for a primary office.
pub const PRIMARY_OFFICE_BRANCH: &str = "XXX";

/// Form of a SWIFT/BIC code, derived from its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwiftType {
    /// Eight characters, no branch code.
    Swift8,
    /// Eleven characters, with a branch code.
    Swift11,
}

impl std::fmt::Display for SwiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Swift8 => "swift8",
            Self::Swift11 => "swift11",
        };
        f.write_str(s)
    }
}

/// A validated SWIFT/BIC code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Swift {
    value: String,
}

impl Swift {
    /// Validate `value` against the built-in country registry.
    ///
    /// # Errors
    ///
    /// Returns the [`SwiftError`] of the first failing check.
    pub fn parse(value: impl Into<String>) -> Result<Self, SwiftError> {
        Self::parse_with(value, Countries::global())
    }

    /// Validate `value` against `registry`.
    ///
    /// # Errors
    ///
    /// Returns the [`SwiftError`] of the first failing check.
    pub fn parse_with<R>(value: impl Into<String>, registry: &R) -> Result<Self, SwiftError>
    where
        R: CountryRegistry + ?Sized,
    {
        let value = value.into();
        if let Err(e) = validate::validate_with(&value, registry) {
            tracing::debug!(error = %e, "rejected swift code");
            return Err(e);
        }
        tracing::trace!(swift = %value, "parsed swift code");
        Ok(Self { value })
    }

    /// Parse a trusted literal, panicking if it is invalid.
    ///
    /// Intended for compile-time-known constants only.
    ///
    /// # Panics
    ///
    /// Panics with the validation error if `value` is not a valid code.
    pub fn must_parse(value: &str) -> Self {
        match Self::parse(value) {
            Ok(swift) => swift,
            Err(e) => panic!("invalid SWIFT literal {value:?}: {e}"),
        }
    }

    /// Four-letter institution code.
    pub fn bank_code(&self) -> &str {
        validate::bank_code(&self.value)
    }

    /// Two-letter country code.
    pub fn country_code(&self) -> &str {
        validate::country_code(&self.value)
    }

    /// Two-character location code.
    pub fn location_code(&self) -> &str {
        validate::location_code(&self.value)
    }

    /// Three-character branch code, or `""` for 8-character codes.
    pub fn branch_code(&self) -> &str {
        if validate::has_branch_code(&self.value) {
            return validate::branch_code(&self.value);
        }
        ""
    }

    /// Code form, from its length.
    pub fn swift_type(&self) -> SwiftType {
        if validate::has_branch_code(&self.value) {
            SwiftType::Swift11
        } else {
            SwiftType::Swift8
        }
    }

    /// Whether the code addresses a primary office: no branch, or `XXX`.
    pub fn is_primary_office(&self) -> bool {
        matches!(self.branch_code(), "" | PRIMARY_OFFICE_BRANCH)
    }

    /// The raw code, unchanged.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Swift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Swift {
    type Err = SwiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Swift {
    type Error = SwiftError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Swift {
    type Error = SwiftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Swift {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for Swift {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Swift {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every accepted code round-trips and its type follows its length.
        #[test]
        fn roundtrip(raw in "[A-Z]{4}(DE|GB|SK|FR)[A-Z0-9]{2}([A-Z0-9]{3})?") {
            let swift = Swift::parse(raw.as_str()).unwrap();
            prop_assert_eq!(swift.to_string(), raw.clone());
            let expected = if raw.len() == 11 { SwiftType::Swift11 } else { SwiftType::Swift8 };
            prop_assert_eq!(swift.swift_type(), expected);
        }

        /// Any length other than 8 or 11 is rejected first.
        #[test]
        fn wrong_length(raw in "\\PC{0,20}") {
            let n = raw.chars().count();
            prop_assume!(n != 8 && n != 11);
            prop_assert_eq!(Swift::parse(raw), Err(SwiftError::InvalidLength));
        }

        /// Validation is deterministic.
        #[test]
        fn idempotent(raw in "[A-Za-z0-9-]{8}|[A-Za-z0-9-]{11}") {
            prop_assert_eq!(Swift::parse(raw.as_str()), Swift::parse(raw.as_str()));
        }
    }
}
