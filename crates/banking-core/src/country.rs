//! # Country Registry
//!
//! Maps ISO 3166-1 alpha-2 codes to display metadata and BBAN [`Structure`]s.
//!
//! Validators consume the registry through the [`CountryRegistry`] trait so
//! callers can inject their own table. The built-in table is exposed as
//! [`Countries::global()`], an immutable singleton built on first use and
//! never mutated afterwards; concurrent readers need no locking.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::bban::Structure;
use crate::country_data::ENTRIES;

/// Banking-relevant information about a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    /// English short name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code, also the IBAN country prefix.
    pub alpha2_code: String,
    /// ISO 3166-1 alpha-3 code.
    pub alpha3_code: String,
    /// BBAN layout.
    pub structure: Structure,
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Read-only lookup of countries by alpha-2 code.
///
/// Lookups for unknown codes return `None`/`false`; they never fail.
pub trait CountryRegistry {
    /// The country registered under `code`.
    fn get(&self, code: &str) -> Option<&Country>;

    /// Whether `code` is registered.
    fn exists(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// The BBAN structure registered under `code`.
    fn structure_for(&self, code: &str) -> Option<&Structure> {
        self.get(code).map(|country| &country.structure)
    }
}

/// An immutable set of countries keyed by alpha-2 code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countries {
    by_code: BTreeMap<String, Country>,
}

static BUILT_IN: OnceLock<Countries> = OnceLock::new();

impl Countries {
    /// The built-in registry of every country using IBAN.
    pub fn global() -> &'static Countries {
        BUILT_IN.get_or_init(Self::built_in)
    }

    fn built_in() -> Self {
        ENTRIES
            .iter()
            .map(|entry| Country {
                name: entry.name.to_string(),
                alpha2_code: entry.alpha2.to_string(),
                alpha3_code: entry.alpha3.to_string(),
                structure: Structure::new(entry.parts),
            })
            .collect()
    }

    /// Number of registered countries.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// All countries, ordered by alpha-2 code.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.by_code.values()
    }
}

impl FromIterator<Country> for Countries {
    /// Later entries replace earlier ones with the same alpha-2 code.
    fn from_iter<I: IntoIterator<Item = Country>>(iter: I) -> Self {
        let by_code = iter
            .into_iter()
            .map(|country| (country.alpha2_code.clone(), country))
            .collect();
        Self { by_code }
    }
}

impl CountryRegistry for Countries {
    fn get(&self, code: &str) -> Option<&Country> {
        self.by_code.get(code)
    }
}

impl<R: CountryRegistry + ?Sized> CountryRegistry for &R {
    fn get(&self, code: &str) -> Option<&Country> {
        (**self).get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bban::Part;
    use crate::charclass::CharacterClass;

    #[test]
    fn built_in_has_every_table_row() {
        assert_eq!(Countries::global().len(), ENTRIES.len());
        assert_eq!(Countries::global().len(), 75);
    }

    #[test]
    fn country_exists() {
        assert!(Countries::global().exists("GB"));
        assert!(Countries::global().exists("DE"));
    }

    #[test]
    fn country_not_present() {
        assert!(!Countries::global().exists("XX"));
        assert!(!Countries::global().exists(""));
        assert!(!Countries::global().exists("gb"));
        assert!(Countries::global().get("XX").is_none());
    }

    #[test]
    fn valid_country_metadata() {
        let gb = Countries::global().get("GB").unwrap();
        assert_eq!(gb.alpha2_code, "GB");
        assert_eq!(gb.alpha3_code, "GBR");
        assert_eq!(gb.name, "United Kingdom");
        assert_eq!(gb.to_string(), gb.name);
    }

    #[test]
    fn structure_for_known_and_unknown() {
        let gb = Countries::global().structure_for("GB").unwrap();
        assert_eq!(gb.total_length(), 18);
        assert!(Countries::global().structure_for("XX").is_none());
    }

    #[test]
    fn table_rows_are_consistent() {
        for country in Countries::global().iter() {
            assert_eq!(country.alpha2_code.len(), 2, "{country}");
            assert_eq!(country.alpha3_code.len(), 3, "{country}");
            assert!(
                country.alpha2_code.bytes().all(|b| b.is_ascii_uppercase()),
                "{country}"
            );
            assert!(!country.structure.parts().is_empty(), "{country}");
            let sum: usize = country.structure.parts().iter().map(Part::length).sum();
            assert_eq!(sum, country.structure.total_length(), "{country}");
            assert!(country.structure.parts().iter().all(|p| p.length() > 0));
        }
    }

    #[test]
    fn iteration_is_ordered_by_code() {
        let codes: Vec<&str> = Countries::global()
            .iter()
            .map(|c| c.alpha2_code.as_str())
            .collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn injected_registry() {
        let registry: Countries = [Country {
            name: "Testland".to_string(),
            alpha2_code: "QZ".to_string(),
            alpha3_code: "QZZ".to_string(),
            structure: Structure::new([Part::bank_code(4, CharacterClass::Numeric)]),
        }]
        .into_iter()
        .collect();

        assert_eq!(registry.len(), 1);
        assert!(registry.exists("QZ"));
        assert!(!registry.exists("GB"));
        assert_eq!(registry.structure_for("QZ").unwrap().total_length(), 4);
        assert!((&registry).exists("QZ"));
    }
}
