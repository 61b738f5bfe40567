#![deny(missing_docs)]

//! # banking-iban — IBAN Validation and Parsing
//!
//! Validates International Bank Account Numbers (ISO 13616) and decomposes
//! them into their BBAN fields.
//!
//! ## Pipeline
//!
//! A raw string flows one way: length, country code format, registry
//! lookup, BBAN length, BBAN segment classes, then the ISO 7064 MOD 97-10
//! check digits. The first failing step decides the [`IbanError`].
//!
//! ```
//! use banking_iban::Iban;
//!
//! let iban = Iban::parse("BE68539007547034").unwrap();
//! assert_eq!(iban.bank_code(), "539");
//! assert_eq!(iban.account_number(), "0075470");
//!
//! assert!(banking_iban::validate("BE68539007547034").is_ok());
//! ```

pub mod iban;
pub mod validate;

pub use banking_core::IbanError;
pub use iban::Iban;
pub use validate::MIN_LENGTH;

use banking_core::CountryRegistry;

/// Validate `value` against the built-in country registry.
///
/// # Errors
///
/// Returns the [`IbanError`] of the first failing check.
pub fn validate(value: &str) -> Result<(), IbanError> {
    validate_with(value, banking_core::Countries::global())
}

/// Validate `value` against `registry`.
///
/// # Errors
///
/// Returns the [`IbanError`] of the first failing check.
pub fn validate_with<R>(value: &str, registry: &R) -> Result<(), IbanError>
where
    R: CountryRegistry + ?Sized,
{
    validate::validate_with(value, registry).map(|_| ())
}

/// Parse `value` against the built-in country registry.
///
/// # Errors
///
/// Returns the [`IbanError`] of the first failing check.
pub fn parse(value: impl Into<String>) -> Result<Iban, IbanError> {
    Iban::parse(value)
}

/// Parse a trusted literal, panicking if it is invalid. See [`Iban::must_parse`].
pub fn must_parse(value: &str) -> Iban {
    Iban::must_parse(value)
}
