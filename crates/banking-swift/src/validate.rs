//! # SWIFT/BIC Validation Pipeline
//!
//! Fixed-offset field checks, first failure wins:
//!
//! | Field | Positions | Constraint |
//! |-------|-----------|------------|
//! | bank code | `0..4` | uppercase letters |
//! | country code | `4..6` | uppercase letters, present in the registry |
//! | location code | `6..8` | uppercase letters or digits |
//! | branch code | `8..11` | uppercase letters or digits, 11-character codes only |
//!
//! Length (8 or 11) and the absence of lowercase letters are checked first.

use banking_core::text::{char_len, char_slice};
use banking_core::{CharacterClass, CountryRegistry, SwiftError};

/// Length of a code without a branch.
pub const LENGTH_SHORT: usize = 8;

/// Length of a code with a branch.
pub const LENGTH_LONG: usize = 11;

/// Run the full pipeline.
pub(crate) fn validate_with<R>(value: &str, registry: &R) -> Result<(), SwiftError>
where
    R: CountryRegistry + ?Sized,
{
    validate_length(value)?;
    validate_case(value)?;
    validate_bank_code(value)?;
    validate_country_code(value, registry)?;
    validate_location_code(value)?;
    validate_branch_code(value)
}

fn validate_length(value: &str) -> Result<(), SwiftError> {
    match char_len(value) {
        LENGTH_SHORT | LENGTH_LONG => Ok(()),
        _ => Err(SwiftError::InvalidLength),
    }
}

fn validate_case(value: &str) -> Result<(), SwiftError> {
    if value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(SwiftError::InvalidCase);
    }
    Ok(())
}

fn validate_bank_code(value: &str) -> Result<(), SwiftError> {
    if !CharacterClass::UpperAlpha.validate(bank_code(value)) {
        return Err(SwiftError::InvalidBankCode);
    }
    Ok(())
}

fn validate_country_code<R>(value: &str, registry: &R) -> Result<(), SwiftError>
where
    R: CountryRegistry + ?Sized,
{
    let code = country_code(value);
    if !CharacterClass::UpperAlpha.validate(code) {
        return Err(SwiftError::InvalidCountryCode);
    }
    if !registry.exists(code) {
        return Err(SwiftError::CountryCodeNotPresent);
    }
    Ok(())
}

fn validate_location_code(value: &str) -> Result<(), SwiftError> {
    if !CharacterClass::AlphaNumeric.validate(location_code(value)) {
        return Err(SwiftError::InvalidLocationCode);
    }
    Ok(())
}

fn validate_branch_code(value: &str) -> Result<(), SwiftError> {
    if !has_branch_code(value) {
        return Ok(());
    }
    if !CharacterClass::AlphaNumeric.validate(branch_code(value)) {
        return Err(SwiftError::InvalidBranchCode);
    }
    Ok(())
}

pub(crate) fn bank_code(value: &str) -> &str {
    char_slice(value, 0, 4)
}

pub(crate) fn country_code(value: &str) -> &str {
    char_slice(value, 4, 6)
}

pub(crate) fn location_code(value: &str) -> &str {
    char_slice(value, 6, 8)
}

pub(crate) fn branch_code(value: &str) -> &str {
    char_slice(value, 8, 11)
}

pub(crate) fn has_branch_code(value: &str) -> bool {
    char_len(value) == LENGTH_LONG
}

#[cfg(test)]
mod tests {
    use super::*;
    use banking_core::Countries;

    const VALID: &[&str] = &["TATRSKBX", "GIBASKBX", "DEUTDEFF500"];

    #[test]
    fn valid_codes_pass_each_step() {
        for code in VALID {
            validate_length(code).unwrap();
            validate_case(code).unwrap();
            validate_bank_code(code).unwrap();
            validate_country_code(code, Countries::global()).unwrap();
            validate_location_code(code).unwrap();
            validate_branch_code(code).unwrap();
        }
    }

    #[test]
    fn length() {
        assert_eq!(validate_length(""), Err(SwiftError::InvalidLength));
        assert_eq!(validate_length("KU78N78"), Err(SwiftError::InvalidLength));
        assert_eq!(validate_length("KU78N78K4"), Err(SwiftError::InvalidLength));
        assert_eq!(validate_length("KU78N78K43KL"), Err(SwiftError::InvalidLength));
    }

    #[test]
    fn case_scans_whole_code() {
        assert_eq!(validate_case("MK23MjK2"), Err(SwiftError::InvalidCase));
        assert_eq!(validate_case("MK23MJK2D2x"), Err(SwiftError::InvalidCase));
        assert_eq!(validate_case("MK23MJK2"), Ok(()));
    }

    #[test]
    fn fields_by_offset() {
        assert_eq!(bank_code("DEUTDEFF500"), "DEUT");
        assert_eq!(country_code("DEUTDEFF500"), "DE");
        assert_eq!(location_code("DEUTDEFF500"), "FF");
        assert_eq!(branch_code("DEUTDEFF500"), "500");
        assert!(has_branch_code("DEUTDEFF500"));
        assert!(!has_branch_code("DEUTDEFF"));
    }

    #[test]
    fn country_code_format_before_presence() {
        let registry = Countries::global();
        assert_eq!(
            validate_country_code("JMKM3KDL", registry),
            Err(SwiftError::InvalidCountryCode)
        );
        assert_eq!(
            validate_country_code("JMKMXXDL", registry),
            Err(SwiftError::CountryCodeNotPresent)
        );
    }

    #[test]
    fn branch_code_only_checked_for_long_codes() {
        assert_eq!(validate_branch_code("JMKMSKLD"), Ok(()));
        assert_eq!(
            validate_branch_code("JMKMSKLDDS-"),
            Err(SwiftError::InvalidBranchCode)
        );
    }
}
