#![deny(missing_docs)]

//! # banking-core — Foundational Types for Bank Code Validation
//!
//! This crate defines the building blocks shared by the IBAN and SWIFT/BIC
//! validators. It has no internal crate dependencies, only `serde` and
//! `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Segment descriptors, not per-country code.** Every BBAN layout is a
//!    [`Structure`] of typed, fixed-length [`Part`]s. Validation and field
//!    extraction walk the same ordered [`Structure::segments`] traversal.
//!
//! 2. **Closed variants.** [`EntryType`] and [`CharacterClass`] are enums
//!    matched exhaustively. Adding a variant forces every consumer to
//!    handle it.
//!
//! 3. **Immutable registry.** The built-in country table is an immutable
//!    singleton ([`Countries::global()`]); validators reach it only through
//!    the [`CountryRegistry`] trait, so tests and callers can inject their own.
//!
//! 4. **Bounded checksum arithmetic.** The MOD 97-10 engine in [`checksum`]
//!    folds numerals into a running total reduced modulo 97, so input length
//!    never threatens overflow.
//!
//! 5. **Structured errors.** Every failure is a closed `thiserror` kind. No
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod bban;
pub mod charclass;
pub mod checksum;
pub mod country;
mod country_data;
pub mod error;
pub mod text;

// Re-export primary types at crate root for ergonomic imports.
pub use bban::{EntryType, Part, Segments, Structure};
pub use charclass::CharacterClass;
pub use country::{Countries, Country, CountryRegistry};
pub use error::{BankingError, ChecksumError, IbanError, SwiftError};
