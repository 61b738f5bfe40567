//! # ISO 7064 MOD 97-10
//!
//! Checksum engine for IBAN check digits. Characters map to numerals
//! (`0-9` to 0-9, `A-Z` to 10-35) and the decimal expansion of those
//! numerals is folded left to right into a bounded running total, so
//! inputs of any length are handled without big-integer arithmetic.
//!
//! The IBAN is rearranged before folding: `bban + country_code + check_digits`.

use crate::error::ChecksumError;

/// Modulus of the scheme.
pub const MODULUS: u32 = 97;

/// Check digits are `CHECK_BASE - remainder`.
const CHECK_BASE: u32 = 98;

/// Running total is reduced once it exceeds this bound.
const FOLD_MAX: u64 = 999_999_999;

/// Placeholder check digits used when computing the expected value.
pub const PLACEHOLDER_CHECK_DIGITS: &str = "00";

/// Map a character to its MOD 97-10 numeral, if it has one.
pub fn numeral(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Fold `chars` into their remainder modulo 97.
///
/// # Errors
///
/// Returns [`ChecksumError::NonAlphanumeric`] for the first character
/// outside `[0-9A-Z]`.
pub fn mod97(chars: impl IntoIterator<Item = char>) -> Result<u32, ChecksumError> {
    let mut total: u64 = 0;

    for (position, character) in chars.into_iter().enumerate() {
        let n = numeral(character)
            .ok_or(ChecksumError::NonAlphanumeric { character, position })?;

        total = if n > 9 {
            total * 100 + u64::from(n)
        } else {
            total * 10 + u64::from(n)
        };

        if total > FOLD_MAX {
            total %= u64::from(MODULUS);
        }
    }

    Ok((total % u64::from(MODULUS)) as u32)
}

/// Remainder of the rearranged IBAN `bban + country_code + check_digits`.
///
/// A valid IBAN yields exactly 1.
pub fn iban_remainder(
    country_code: &str,
    check_digits: &str,
    bban: &str,
) -> Result<u32, ChecksumError> {
    mod97(bban.chars().chain(country_code.chars()).chain(check_digits.chars()))
}

/// Compute the two check digits for `bban` in `country_code`.
///
/// The rearranged string is folded with `"00"` in place of the check
/// digits, and the result is `98 - remainder`, left-padded to two digits.
pub fn iban_check_digits(country_code: &str, bban: &str) -> Result<String, ChecksumError> {
    let remainder = iban_remainder(country_code, PLACEHOLDER_CHECK_DIGITS, bban)?;
    Ok(format!("{:02}", CHECK_BASE - remainder))
}
