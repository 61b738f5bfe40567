//! # IBAN Validation Pipeline
//!
//! Each step short-circuits on the first failure; errors are never
//! accumulated. Order:
//!
//! 1. length (at least [`MIN_LENGTH`] characters)
//! 2. country code format
//! 3. country code present in the registry
//! 4. BBAN length equals the structure length
//! 5. every BBAN segment matches its character class
//! 6. MOD 97-10 check digits

use banking_core::checksum;
use banking_core::text::{char_len, char_slice};
use banking_core::{Country, CountryRegistry, IbanError, Structure};

/// Minimum IBAN length in characters.
pub const MIN_LENGTH: usize = 15;

/// Run the full pipeline, returning the matched country on success.
pub(crate) fn validate_with<'r, R>(value: &str, registry: &'r R) -> Result<&'r Country, IbanError>
where
    R: CountryRegistry + ?Sized,
{
    validate_min_length(value)?;

    let code = validate_country_code(value)?;

    let country = registry
        .get(code)
        .ok_or(IbanError::CountryCodeNotPresent)?;
    let structure = &country.structure;

    validate_bban_length(value, structure)?;
    validate_bban_structure(value, structure)?;
    validate_check_digit(value, code)?;

    Ok(country)
}

fn validate_min_length(value: &str) -> Result<(), IbanError> {
    if char_len(value) < MIN_LENGTH {
        return Err(IbanError::TooShort);
    }
    Ok(())
}

/// Check the country code format character by character.
///
/// A lowercase letter is reported before a non-letter at the same or a
/// later position: `"sL"` is `CountryCodeNotUpper`, `"S4"` is
/// `CountryCodeNotAlpha`.
fn validate_country_code(value: &str) -> Result<&str, IbanError> {
    for c in value.chars().take(2) {
        if c.is_ascii_lowercase() {
            return Err(IbanError::CountryCodeNotUpper);
        }
        if !c.is_ascii_alphabetic() {
            return Err(IbanError::CountryCodeNotAlpha);
        }
    }
    Ok(country_code(value))
}

fn validate_bban_length(value: &str, structure: &Structure) -> Result<(), IbanError> {
    if char_len(bban(value)) != structure.total_length() {
        return Err(IbanError::InvalidBbanLength);
    }
    Ok(())
}

fn validate_bban_structure(value: &str, structure: &Structure) -> Result<(), IbanError> {
    if structure.first_invalid(bban(value)).is_some() {
        return Err(IbanError::InvalidBbanPart);
    }
    Ok(())
}

fn validate_check_digit(value: &str, code: &str) -> Result<(), IbanError> {
    let expected = checksum::iban_check_digits(code, bban(value))?;
    if check_digits(value) != expected {
        return Err(IbanError::InvalidCheckDigit);
    }
    Ok(())
}

pub(crate) fn country_code(value: &str) -> &str {
    char_slice(value, 0, 2)
}

pub(crate) fn check_digits(value: &str) -> &str {
    char_slice(value, 2, 4)
}

pub(crate) fn bban(value: &str) -> &str {
    char_slice(value, 4, usize::MAX)
}
