//! # banking-cli — Command-Line Interface
//!
//! Provides the `banking` binary.
//!
//! ## Subcommands
//!
//! - `banking iban <CODE>...` — validate IBANs and print their BBAN fields.
//! - `banking swift <CODE>...` — validate SWIFT/BIC codes and print their fields.
//! - `banking countries [CODE]` — list the country registry or show one layout.
//!
//! ## Exit Codes
//!
//! 0 when every code is valid, 1 when any code is invalid or a country is
//! unknown, 2 on operational error (for example, output serialization).
//!
//! ```bash
//! banking iban BE68539007547034 GB29NWBK60161331926819
//! banking --format json swift DEUTDEFF500
//! banking countries MU
//! ```

pub mod countries;
pub mod iban;
pub mod swift;

use anyhow::{Context, Result};
use serde::Serialize;

/// How results are written to stdout.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Exit code when every input was valid.
pub const EXIT_OK: u8 = 0;

/// Exit code when at least one input was invalid.
pub const EXIT_INVALID: u8 = 1;

/// Render `value` as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output as JSON")
}

/// Exit code for a batch of per-input outcomes.
pub fn exit_code(all_valid: bool) -> u8 {
    if all_valid {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}
