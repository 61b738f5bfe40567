//! # The `Iban` Value
//!
//! An [`Iban`] can only be obtained through the validating constructors
//! [`Iban::parse`] and [`Iban::parse_with`]. A value either passes every
//! check and is returned whole, or no value is returned at all.
//!
//! Field accessors slice the BBAN according to the country's
//! [`Structure`]. Requesting a field the country does not define returns
//! the empty string.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use banking_core::checksum;
use banking_core::{Countries, Country, CountryRegistry, EntryType, IbanError, Structure};

use crate::validate;

/// A validated International Bank Account Number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban {
    value: String,
    country: Country,
}

impl Iban {
    /// Validate `value` against the built-in country registry.
    ///
    /// # Errors
    ///
    /// Returns the [`IbanError`] of the first failing check.
    pub fn parse(value: impl Into<String>) -> Result<Self, IbanError> {
        Self::parse_with(value, Countries::global())
    }

    /// Validate `value` against `registry`.
    ///
    /// The matched [`Country`] record is kept, so [`Iban::country`] and
    /// [`Iban::structure`] reflect `registry` rather than the built-in table.
    ///
    /// # Errors
    ///
    /// Returns the [`IbanError`] of the first failing check.
    pub fn parse_with<R>(value: impl Into<String>, registry: &R) -> Result<Self, IbanError>
    where
        R: CountryRegistry + ?Sized,
    {
        let value = value.into();
        match validate::validate_with(&value, registry) {
            Ok(country) => {
                tracing::trace!(iban = %value, "parsed iban");
                let country = country.clone();
                Ok(Self { value, country })
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected iban");
                Err(e)
            }
        }
    }

    /// Parse a trusted literal, panicking if it is invalid.
    ///
    /// Intended for compile-time-known constants only. Never call this on
    /// untrusted input; use [`Iban::parse`] instead.
    ///
    /// # Panics
    ///
    /// Panics with the validation error if `value` is not a valid IBAN.
    pub fn must_parse(value: &str) -> Self {
        match Self::parse(value) {
            Ok(iban) => iban,
            Err(e) => panic!("invalid IBAN literal {value:?}: {e}"),
        }
    }

    /// The two-letter country code.
    pub fn country_code(&self) -> &str {
        validate::country_code(&self.value)
    }

    /// The two IBAN check digits.
    pub fn check_digit(&self) -> &str {
        validate::check_digits(&self.value)
    }

    /// Everything after the check digits.
    pub fn bban(&self) -> &str {
        validate::bban(&self.value)
    }

    /// Bank code, or `""` if the country defines none.
    pub fn bank_code(&self) -> &str {
        self.bban_part(EntryType::BankCode)
    }

    /// Branch code, or `""` if the country defines none.
    pub fn branch_code(&self) -> &str {
        self.bban_part(EntryType::BranchCode)
    }

    /// Account number, or `""` if the country defines none.
    pub fn account_number(&self) -> &str {
        self.bban_part(EntryType::AccountNumber)
    }

    /// National check digit, or `""` if the country defines none.
    pub fn national_check_digit(&self) -> &str {
        self.bban_part(EntryType::NationalCheckDigit)
    }

    /// Account type, or `""` if the country defines none.
    pub fn account_type(&self) -> &str {
        self.bban_part(EntryType::AccountType)
    }

    /// Owner account type, or `""` if the country defines none.
    pub fn owner_account_type(&self) -> &str {
        self.bban_part(EntryType::OwnerAccountType)
    }

    /// Identification number, or `""` if the country defines none.
    pub fn identification_number(&self) -> &str {
        self.bban_part(EntryType::IdentificationNumber)
    }

    /// Currency, or `""` if the country defines none.
    pub fn currency(&self) -> &str {
        self.bban_part(EntryType::Currency)
    }

    /// The BBAN slice for the first segment of `entry_type`, or `""`.
    pub fn bban_part(&self, entry_type: EntryType) -> &str {
        self.country
            .structure
            .find(entry_type, self.bban())
            .unwrap_or_default()
    }

    /// The BBAN structure the IBAN was validated against.
    pub fn structure(&self) -> &Structure {
        &self.country.structure
    }

    /// The country record the IBAN was validated against.
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// The MOD 97-10 remainder of the IBAN as stored; always 1.
    pub fn remainder(&self) -> u32 {
        checksum::iban_remainder(self.country_code(), self.check_digit(), self.bban())
            .unwrap_or_default()
    }

    /// The raw IBAN string, unchanged.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iban {
    type Error = IbanError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for Iban {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

/// Deserializes as a plain string, then routes through [`Iban::parse`] so
/// that invalid values are rejected at deserialization time.
impl<'de> Deserialize<'de> for Iban {
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
    use banking_core::CharacterClass;
    use proptest::prelude::*;
    use proptest::sample::select;

    fn class_pattern(class: CharacterClass) -> &'static str {
        match class {
            CharacterClass::Numeric => "[0-9]",
            CharacterClass::AllZero => "0",
            CharacterClass::UpperAlpha => "[A-Z]",
            CharacterClass::AlphaNumeric => "[0-9A-Z]",
        }
    }

    /// A syntactically valid BBAN for `structure`.
    fn bban_for(structure: &Structure) -> impl Strategy<Value = String> {
        let pattern: String = structure
            .parts()
            .iter()
            .map(|p| format!("{}{{{}}}", class_pattern(p.char_class()), p.length()))
            .collect();
        proptest::string::string_regex(&pattern).expect("valid regex")
    }

    /// A fully valid IBAN for a random registry country.
    fn valid_iban() -> impl Strategy<Value = String> {
        let codes: Vec<&'static str> = Countries::global()
            .iter()
            .map(|c| c.alpha2_code.as_str())
            .collect();
        select(codes).prop_flat_map(|code| {
            let structure = Countries::global().structure_for(code).unwrap();
            bban_for(structure).prop_map(move |bban| {
                let digits = checksum::iban_check_digits(code, &bban).unwrap();
                format!("{code}{digits}{bban}")
            })
        })
    }

    proptest! {
        /// Every accepted string round-trips through `to_string`.
        #[test]
        fn roundtrip(raw in valid_iban()) {
            let iban = Iban::parse(raw.as_str()).unwrap();
            prop_assert_eq!(iban.to_string(), raw);
        }

        /// The unmodified IBAN folds to remainder 1.
        #[test]
        fn self_check(raw in valid_iban()) {
            let iban = Iban::parse(raw.as_str()).unwrap();
            prop_assert_eq!(iban.remainder(), 1);
        }

        /// The BBAN of any valid IBAN has the structure's total length.
        #[test]
        fn bban_length_matches_structure(raw in valid_iban()) {
            let iban = Iban::parse(raw.as_str()).unwrap();
            prop_assert_eq!(iban.bban().len(), iban.structure().total_length());
        }

        /// Anything shorter than 15 characters is too short.
        #[test]
        fn short_input_is_too_short(raw in "\\PC{0,14}") {
            prop_assert_eq!(Iban::parse(raw), Err(IbanError::TooShort));
        }

        /// Validation is deterministic.
        #[test]
        fn idempotent(raw in "[A-Za-z0-9]{0,34}") {
            prop_assert_eq!(Iban::parse(raw.as_str()), Iban::parse(raw.as_str()));
        }
    }
}
