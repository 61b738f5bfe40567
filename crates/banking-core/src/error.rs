//! # Error Hierarchy
//!
//! Structured error types for IBAN and SWIFT/BIC validation, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every validation failure is a closed, unit-like kind. Errors carry no
//! free-text payload and no recovery expectation: a failed parse is terminal
//! for that input, and the first failing check wins.

use thiserror::Error;

/// Umbrella error for callers handling both code families uniformly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankingError {
    /// IBAN validation failure.
    #[error(transparent)]
    Iban(#[from] IbanError),

    /// SWIFT/BIC validation failure.
    #[error(transparent)]
    Swift(#[from] SwiftError),

    /// Checksum computation failure.
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
}

/// Reasons an IBAN is rejected, in pipeline order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IbanError {
    /// Fewer than 15 characters.
    #[error("iban: iban too short")]
    TooShort,

    /// The country code contains a lowercase letter.
    #[error("iban: country code contains lowercase letters")]
    CountryCodeNotUpper,

    /// The country code contains a non-alphabetic character.
    #[error("iban: country code contains non alphabetic letters")]
    CountryCodeNotAlpha,

    /// The country code is not in the registry.
    #[error("iban: country code does not exist")]
    CountryCodeNotPresent,

    /// The stored check digits differ from the computed ones.
    #[error("iban: invalid check digit")]
    InvalidCheckDigit,

    /// A character outside `[0-9A-Z]` was met while folding the checksum.
    #[error("iban: invalid modulo")]
    InvalidModulo,

    /// The BBAN length differs from the country's structure length.
    #[error("iban: invalid bban length")]
    InvalidBbanLength,

    /// A BBAN segment violates its character class.
    #[error("iban: invalid bban part")]
    InvalidBbanPart,
}

/// Reasons a SWIFT/BIC code is rejected, in pipeline order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwiftError {
    /// Length is neither 8 nor 11.
    #[error("swift: invalid length")]
    InvalidLength,

    /// The code contains a lowercase letter.
    #[error("swift: invalid case")]
    InvalidCase,

    /// The bank code is not four uppercase letters.
    #[error("swift: invalid bank code")]
    InvalidBankCode,

    /// The country code is not two uppercase letters.
    #[error("swift: invalid country code")]
    InvalidCountryCode,

    /// The country code is not in the registry.
    #[error("swift: country code does not exist")]
    CountryCodeNotPresent,

    /// The location code is not uppercase alphanumeric.
    #[error("swift: invalid location code")]
    InvalidLocationCode,

    /// The branch code is not uppercase alphanumeric.
    #[error("swift: invalid branch code")]
    InvalidBranchCode,
}

/// Errors raised by the MOD 97-10 checksum engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumError {
    /// A character has no numeral value (only `0-9` and `A-Z` do).
    #[error("checksum: character {character:?} at position {position} is not alphanumeric")]
    NonAlphanumeric {
        /// The offending character.
        character: char,
        /// Zero-based position within the rearranged input.
        position: usize,
    },
}

impl From<ChecksumError> for IbanError {
    fn from(_: ChecksumError) -> Self {
        IbanError::InvalidModulo
    }
}
