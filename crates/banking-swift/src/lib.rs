#![deny(missing_docs)]

//! # banking-swift — SWIFT/BIC Validation and Parsing
//!
//! Validates Business Identifier Codes (ISO 9362) of 8 or 11 characters
//! and exposes their fixed-offset fields. The country code is checked
//! against the same registry the IBAN validator uses.
//!
//! ```
//! use banking_swift::{Swift, SwiftType};
//!
//! let swift = Swift::parse("DEUTDEFF500").unwrap();
//! assert_eq!(swift.bank_code(), "DEUT");
//! assert_eq!(swift.swift_type(), SwiftType::Swift11);
//! ```

pub mod swift;
pub mod validate;

pub use banking_core::SwiftError;
pub use swift::{Swift, SwiftType, PRIMARY_OFFICE_BRANCH};
pub use validate::{LENGTH_LONG, LENGTH_SHORT};

use banking_core::CountryRegistry;

/// Validate `value` against the built-in country registry.
///
/// # Errors
///
/// Returns the [`SwiftError`] of the first failing check.
pub fn validate(value: &str) -> Result<(), SwiftError> {
    validate_with(value, banking_core::Countries::global())
}

/// Validate `value` against `registry`.
///
/// # Errors
///
/// Returns the [`SwiftError`] of the first failing check.
pub fn validate_with<R>(value: &str, registry: &R) -> Result<(), SwiftError>
where
    R: CountryRegistry + ?Sized,
{
    validate::validate_with(value, registry)
}

/// Parse `value` against the built-in country registry.
///
/// # Errors
///
/// Returns the [`SwiftError`] of the first failing check.
pub fn parse(value: impl Into<String>) -> Result<Swift, SwiftError> {
    Swift::parse(value)
}

/// Parse a trusted literal, panicking if it is invalid. See [`Swift::must_parse`].
pub fn must_parse(value: &str) -> Swift {
    Swift::must_parse(value)
}
