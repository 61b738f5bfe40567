//! # BBAN Structure Descriptors
//!
//! A country's Basic Bank Account Number layout is an ordered list of
//! fixed-length [`Part`]s. Each part carries an [`EntryType`] naming its
//! role and a [`CharacterClass`] constraining its content.
//!
//! A [`Structure`] is built once and never mutated afterwards, so it can be
//! shared across threads without synchronization.

use serde::{Deserialize, Serialize};

use crate::charclass::CharacterClass;

/// Semantic role of a BBAN segment.
///
/// Every `match` on this enum must be exhaustive; adding a role forces
/// every accessor to address it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// Bank identifier.
    BankCode,
    /// Branch identifier.
    BranchCode,
    /// Account number.
    AccountNumber,
    /// National check digit(s), distinct from the IBAN check digits.
    NationalCheckDigit,
    /// Account type.
    AccountType,
    /// Owner account type.
    OwnerAccountType,
    /// Account holder identification number.
    IdentificationNumber,
    /// Currency code.
    Currency,
    /// Fixed filler.
    Padding,
}

impl EntryType {
    /// Return all entry types.
    pub fn all() -> &'static [EntryType] {
        &[
            Self::BankCode,
            Self::BranchCode,
            Self::AccountNumber,
            Self::NationalCheckDigit,
            Self::AccountType,
            Self::OwnerAccountType,
            Self::IdentificationNumber,
            Self::Currency,
            Self::Padding,
        ]
    }

    /// The entry type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BankCode => "BankCode",
            Self::BranchCode => "BranchCode",
            Self::AccountNumber => "AccountNumber",
            Self::NationalCheckDigit => "NationalCheckDigit",
            Self::AccountType => "AccountType",
            Self::OwnerAccountType => "OwnerAccountType",
            Self::IdentificationNumber => "IdentificationNumber",
            Self::Currency => "Currency",
            Self::Padding => "Padding",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-length, typed BBAN segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    length: usize,
    entry_type: EntryType,
    char_class: CharacterClass,
}

impl Part {
    /// Create a part.
    pub const fn new(length: usize, entry_type: EntryType, char_class: CharacterClass) -> Self {
        Self {
            length,
            entry_type,
            char_class,
        }
    }

    /// A [`EntryType::BankCode`] part.
    pub const fn bank_code(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::BankCode, char_class)
    }

    /// A [`EntryType::BranchCode`] part.
    pub const fn branch_code(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::BranchCode, char_class)
    }

    /// A [`EntryType::AccountNumber`] part.
    pub const fn account_number(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::AccountNumber, char_class)
    }

    /// A [`EntryType::NationalCheckDigit`] part.
    pub const fn national_check_digit(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::NationalCheckDigit, char_class)
    }

    /// A [`EntryType::AccountType`] part.
    pub const fn account_type(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::AccountType, char_class)
    }

    /// A [`EntryType::OwnerAccountType`] part.
    pub const fn owner_account_type(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::OwnerAccountType, char_class)
    }

    /// A [`EntryType::IdentificationNumber`] part.
    pub const fn identification_number(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::IdentificationNumber, char_class)
    }

    /// A [`EntryType::Currency`] part.
    pub const fn currency(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::Currency, char_class)
    }

    /// A [`EntryType::Padding`] part.
    pub const fn padding(length: usize, char_class: CharacterClass) -> Self {
        Self::new(length, EntryType::Padding, char_class)
    }

    /// Segment length in characters.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Semantic role of the segment.
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Character constraint of the segment.
    pub fn char_class(&self) -> CharacterClass {
        self.char_class
    }

    /// Validate `value` against this part's character class.
    pub fn validate(&self, value: &str) -> bool {
        self.char_class.validate(value)
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.entry_type, f)
    }
}

/// Ordered, immutable sequence of [`Part`]s describing a BBAN layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Structure {
    parts: Vec<Part>,
}

impl Structure {
    /// Create a structure from parts in declaration order.
    pub fn new(parts: impl Into<Vec<Part>>) -> Self {
        Self {
            parts: parts.into(),
        }
    }

    /// The parts in declaration order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Total BBAN length: the sum of all part lengths.
    pub fn total_length(&self) -> usize {
        self.parts.iter().map(Part::length).sum()
    }

    /// Slice `bban` into contiguous runs matching each part, in order.
    ///
    /// Offsets run from 0. A run that falls outside `bban` or splits a
    /// multi-byte character yields an empty slice, which no character
    /// class accepts.
    pub fn segments<'a>(&'a self, bban: &'a str) -> Segments<'a> {
        Segments {
            parts: self.parts.iter(),
            bban,
            offset: 0,
        }
    }

    /// The slice of `bban` for the first part with `entry_type`, if any.
    pub fn find<'a>(&'a self, entry_type: EntryType, bban: &'a str) -> Option<&'a str> {
        self.segments(bban)
            .find(|(part, _)| part.entry_type() == entry_type)
            .map(|(_, value)| value)
    }

    /// Validate every segment of `bban`, returning the first failing part.
    pub fn first_invalid<'a>(&'a self, bban: &'a str) -> Option<&'a Part> {
        self.segments(bban)
            .find(|(part, value)| !part.validate(value))
            .map(|(part, _)| part)
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}!{}", part.length, part.char_class)?;
        }
        Ok(())
    }
}

/// Iterator over `(part, slice)` pairs produced by [`Structure::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    parts: std::slice::Iter<'a, Part>,
    bban: &'a str,
    offset: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (&'a Part, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let part = self.parts.next()?;
        let start = self.offset;
        self.offset += part.length;
        let value = self.bban.get(start..self.offset).unwrap_or_default();
        Some((part, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.parts.size_hint()
    }
}

impl ExactSizeIterator for Segments<'_> {}
