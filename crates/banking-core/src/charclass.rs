//! # Character Classes
//!
//! The closed set of character constraints a BBAN segment can impose.
//! Only ASCII letters and digits are ever accepted; anything else fails
//! every class.

use serde::{Deserialize, Serialize};

/// Constraint on which characters may appear in a segment.
///
/// The empty string is rejected by every class: no class licenses a
/// zero-length value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// ASCII digits `0-9`.
    Numeric,
    /// The digit `0` only.
    AllZero,
    /// ASCII uppercase letters `A-Z`.
    UpperAlpha,
    /// ASCII uppercase letters and digits.
    AlphaNumeric,
}

impl CharacterClass {
    /// Return all character classes.
    pub fn all() -> &'static [CharacterClass] {
        &[
            Self::Numeric,
            Self::AllZero,
            Self::UpperAlpha,
            Self::AlphaNumeric,
        ]
    }

    /// Check whether every character of `value` belongs to this class.
    pub fn validate(self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        value.bytes().all(|b| self.accepts(b))
    }

    /// Check a single byte against this class.
    pub fn accepts(self, b: u8) -> bool {
        match self {
            Self::Numeric => b.is_ascii_digit(),
            Self::AllZero => b == b'0',
            Self::UpperAlpha => b.is_ascii_uppercase(),
            Self::AlphaNumeric => b.is_ascii_uppercase() || b.is_ascii_digit(),
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Numeric => "n",
            Self::AllZero => "0",
            Self::UpperAlpha => "a",
            Self::AlphaNumeric => "c",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric() {
        assert!(CharacterClass::Numeric.validate("0123"));
        assert!(!CharacterClass::Numeric.validate("AB23"));
        assert!(!CharacterClass::Numeric.validate("AB"));
    }

    #[test]
    fn all_zero() {
        assert!(CharacterClass::AllZero.validate("0"));
        assert!(CharacterClass::AllZero.validate("000"));
        assert!(!CharacterClass::AllZero.validate("001"));
    }

    #[test]
    fn upper_alpha() {
        assert!(CharacterClass::UpperAlpha.validate("DSA"));
        assert!(!CharacterClass::UpperAlpha.validate("dsa"));
        assert!(!CharacterClass::UpperAlpha.validate("32"));
    }

    #[test]
    fn alpha_numeric() {
        assert!(CharacterClass::AlphaNumeric.validate("AB2"));
        assert!(CharacterClass::AlphaNumeric.validate("AB"));
        assert!(!CharacterClass::AlphaNumeric.validate("ab2"));
        assert!(!CharacterClass::AlphaNumeric.validate("AB-2"));
    }

    #[test]
    fn empty_is_rejected_by_every_class() {
        for class in CharacterClass::all() {
            assert!(!class.validate(""), "{class:?} accepted empty input");
        }
    }

    #[test]
    fn non_ascii_is_rejected_by_every_class() {
        for class in CharacterClass::all() {
            assert!(!class.validate("Ä0"), "{class:?} accepted non-ASCII");
        }
    }

    #[test]
    fn display_uses_registry_notation() {
        assert_eq!(CharacterClass::Numeric.to_string(), "n");
        assert_eq!(CharacterClass::AlphaNumeric.to_string(), "c");
    }
}
