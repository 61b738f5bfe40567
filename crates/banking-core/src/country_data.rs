//! Built-in country table: alpha-2 code, alpha-3 code, name, BBAN layout.

use crate::bban::Part;
use crate::charclass::CharacterClass::{AllZero, AlphaNumeric, Numeric, UpperAlpha};

/// One row of the built-in table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) alpha2: &'static str,
    pub(crate) alpha3: &'static str,
    pub(crate) name: &'static str,
    pub(crate) parts: &'static [Part],
}

/// Countries using IBAN, ordered by alpha-2 code.
#[rustfmt::skip]
pub(crate) static ENTRIES: &[Entry] = &[
    Entry { alpha2: "AD", alpha3: "AND", name: "Andorra", parts: &[
        Part::bank_code(4, Numeric),
        Part::branch_code(4, Numeric),
        Part::account_number(12, AlphaNumeric),
    ] },
    Entry { alpha2: "AE", alpha3: "ARE", name: "United Arab Emirates", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(16, AlphaNumeric),
    ] },
    Entry { alpha2: "AL", alpha3: "ALB", name: "Albania", parts: &[
        Part::bank_code(3, Numeric),
        Part::branch_code(4, Numeric),
        Part::national_check_digit(1, Numeric),
        Part::account_number(16, AlphaNumeric),
    ] },
    Entry { alpha2: "AT", alpha3: "AUT", name: "Austria", parts: &[
        Part::bank_code(5, Numeric),
        Part::account_number(11, Numeric),
    ] },
    Entry { alpha2: "AZ", alpha3: "AZE", name: "Azerbaijan", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(20, AlphaNumeric),
    ] },
    Entry { alpha2: "BA", alpha3: "BIH", name: "Bosnia and Herzegovina", parts: &[
        Part::bank_code(3, Numeric),
        Part::branch_code(3, Numeric),
        Part::account_number(8, Numeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "BE", alpha3: "BEL", name: "Belgium", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(7, Numeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "BG", alpha3: "BGR", name: "Bulgaria", parts: &[
        Part::bank_code(4, AlphaNumeric),
        Part::branch_code(4, Numeric),
        Part::account_type(2, Numeric),
        Part::account_number(8, AlphaNumeric),
    ] },
    Entry { alpha2: "BH", alpha3: "BHR", name: "Bahrain", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(14, Numeric),
    ] },
    Entry { alpha2: "BR", alpha3: "BRA", name: "Brazil", parts: &[
        Part::bank_code(8, Numeric),
        Part::branch_code(5, Numeric),
        Part::account_number(10, Numeric),
        Part::account_type(1, UpperAlpha),
        Part::owner_account_type(1, AlphaNumeric),
    ] },
    Entry { alpha2: "BY", alpha3: "BLR", name: "Belarus", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::branch_code(4, Numeric),
        Part::account_number(16, AlphaNumeric),
    ] },
    Entry { alpha2: "CH", alpha3: "CHE", name: "Switzerland", parts: &[
        Part::bank_code(5, Numeric),
        Part::account_number(12, AlphaNumeric),
    ] },
    Entry { alpha2: "CR", alpha3: "CRI", name: "Costa Rica", parts: &[
        Part::padding(1, AllZero),
        Part::bank_code(3, Numeric),
        Part::account_number(14, Numeric),
    ] },
    Entry { alpha2: "CY", alpha3: "CYP", name: "Cyprus", parts: &[
        Part::bank_code(3, Numeric),
        Part::branch_code(5, Numeric),
        Part::account_number(16, AlphaNumeric),
    ] },
    Entry { alpha2: "CZ", alpha3: "CZE", name: "Czech Republic", parts: &[
        Part::bank_code(4, Numeric),
        Part::account_number(16, Numeric),
    ] },
    Entry { alpha2: "DE", alpha3: "DEU", name: "Germany", parts: &[
        Part::bank_code(8, Numeric),
        Part::account_number(10, Numeric),
    ] },
    Entry { alpha2: "DK", alpha3: "DNK", name: "Denmark", parts: &[
        Part::bank_code(4, Numeric),
        Part::account_number(10, Numeric),
    ] },
    Entry { alpha2: "DO", alpha3: "DOM", name: "Dominican Republic", parts: &[
        Part::bank_code(4, AlphaNumeric),
        Part::account_number(20, Numeric),
    ] },
    Entry { alpha2: "EE", alpha3: "EST", name: "Estonia", parts: &[
        Part::bank_code(2, Numeric),
        Part::branch_code(2, Numeric),
        Part::account_number(11, Numeric),
        Part::national_check_digit(1, Numeric),
    ] },
    Entry { alpha2: "EG", alpha3: "EGY", name: "Egypt", parts: &[
        Part::bank_code(4, Numeric),
        Part::branch_code(4, Numeric),
        Part::account_number(17, Numeric),
    ] },
    Entry { alpha2: "ES", alpha3: "ESP", name: "Spain", parts: &[
        Part::bank_code(4, Numeric),
        Part::branch_code(4, Numeric),
        Part::national_check_digit(2, Numeric),
        Part::account_number(10, Numeric),
    ] },
    Entry { alpha2: "FI", alpha3: "FIN", name: "Finland", parts: &[
        Part::bank_code(6, Numeric),
        Part::account_number(7, Numeric),
        Part::national_check_digit(1, Numeric),
    ] },
    Entry { alpha2: "FO", alpha3: "FRO", name: "Faroe Islands", parts: &[
        Part::bank_code(4, Numeric),
        Part::account_number(9, Numeric),
        Part::national_check_digit(1, Numeric),
    ] },
    Entry { alpha2: "FR", alpha3: "FRA", name: "France", parts: &[
        Part::bank_code(5, Numeric),
        Part::branch_code(5, Numeric),
        Part::account_number(11, AlphaNumeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "GB", alpha3: "GBR", name: "United Kingdom", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::branch_code(6, Numeric),
        Part::account_number(8, Numeric),
    ] },
    Entry { alpha2: "GE", alpha3: "GEO", name: "Georgia", parts: &[
        Part::bank_code(2, UpperAlpha),
        Part::account_number(16, Numeric),
    ] },
    Entry { alpha2: "GI", alpha3: "GIB", name: "Gibraltar", parts: &[
        Part::bank_code(4, AlphaNumeric),
        Part::account_number(15, AlphaNumeric),
    ] },
    Entry { alpha2: "GL", alpha3: "GRL", name: "Greenland", parts: &[
        Part::bank_code(4, Numeric),
        Part::account_number(10, Numeric),
    ] },
    Entry { alpha2: "GR", alpha3: "GRC", name: "Greece", parts: &[
        Part::bank_code(3, Numeric),
        Part::branch_code(4, Numeric),
        Part::account_number(16, AlphaNumeric),
    ] },
    Entry { alpha2: "GT", alpha3: "GTM", name: "Guatemala", parts: &[
        Part::bank_code(4, AlphaNumeric),
        Part::account_number(20, AlphaNumeric),
    ] },
    Entry { alpha2: "HR", alpha3: "HRV", name: "Croatia", parts: &[
        Part::bank_code(7, Numeric),
        Part::account_number(10, Numeric),
    ] },
    Entry { alpha2: "HU", alpha3: "HUN", name: "Hungary", parts: &[
        Part::bank_code(3, Numeric),
        Part::branch_code(4, Numeric),
        Part::account_number(16, Numeric),
        Part::national_check_digit(1, Numeric),
    ] },
    Entry { alpha2: "IE", alpha3: "IRL", name: "Ireland", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::branch_code(6, Numeric),
        Part::account_number(8, Numeric),
    ] },
    Entry { alpha2: "IL", alpha3: "ISR", name: "Israel", parts: &[
        Part::bank_code(3, Numeric),
        Part::branch_code(3, Numeric),
        Part::account_number(13, Numeric),
    ] },
    Entry { alpha2: "IQ", alpha3: "IRQ", name: "Iraq", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::branch_code(3, Numeric),
        Part::account_number(12, Numeric),
    ] },
    Entry { alpha2: "IS", alpha3: "ISL", name: "Iceland", parts: &[
        Part::bank_code(4, Numeric),
        Part::branch_code(2, Numeric),
        Part::account_number(6, Numeric),
        Part::identification_number(10, Numeric),
    ] },
    Entry { alpha2: "IT", alpha3: "ITA", name: "Italy", parts: &[
        Part::national_check_digit(1, UpperAlpha),
        Part::bank_code(5, Numeric),
        Part::branch_code(5, Numeric),
        Part::account_number(12, AlphaNumeric),
    ] },
    Entry { alpha2: "JO", alpha3: "JOR", name: "Jordan", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::branch_code(4, Numeric),
        Part::account_number(18, AlphaNumeric),
    ] },
    Entry { alpha2: "KW", alpha3: "KWT", name: "Kuwait", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(22, AlphaNumeric),
    ] },
    Entry { alpha2: "KZ", alpha3: "KAZ", name: "Kazakhstan", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(13, AlphaNumeric),
    ] },
    Entry { alpha2: "LB", alpha3: "LBN", name: "Lebanon", parts: &[
        Part::bank_code(4, Numeric),
        Part::account_number(20, AlphaNumeric),
    ] },
    Entry { alpha2: "LC", alpha3: "LCA", name: "Saint Lucia", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(24, Numeric),
    ] },
    Entry { alpha2: "LI", alpha3: "LIE", name: "Liechtenstein", parts: &[
        Part::bank_code(5, Numeric),
        Part::account_number(12, AlphaNumeric),
    ] },
    Entry { alpha2: "LT", alpha3: "LTU", name: "Lithuania", parts: &[
        Part::bank_code(5, Numeric),
        Part::account_number(11, Numeric),
    ] },
    Entry { alpha2: "LU", alpha3: "LUX", name: "Luxembourg", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(13, AlphaNumeric),
    ] },
    Entry { alpha2: "LV", alpha3: "LVA", name: "Latvia", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(13, AlphaNumeric),
    ] },
    Entry { alpha2: "MC", alpha3: "MCO", name: "Monaco", parts: &[
        Part::bank_code(5, Numeric),
        Part::branch_code(5, Numeric),
        Part::account_number(11, AlphaNumeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "MD", alpha3: "MDA", name: "Moldova", parts: &[
        Part::bank_code(2, AlphaNumeric),
        Part::account_number(18, AlphaNumeric),
    ] },
    Entry { alpha2: "ME", alpha3: "MNE", name: "Montenegro", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(13, Numeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "MK", alpha3: "MKD", name: "Macedonia", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(10, AlphaNumeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "MR", alpha3: "MRT", name: "Mauritania", parts: &[
        Part::bank_code(5, Numeric),
        Part::branch_code(5, Numeric),
        Part::account_number(11, Numeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "MT", alpha3: "MLT", name: "Malta", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::branch_code(5, Numeric),
        Part::account_number(18, AlphaNumeric),
    ] },
    Entry { alpha2: "MU", alpha3: "MUS", name: "Mauritius", parts: &[
        Part::bank_code(6, AlphaNumeric),
        Part::branch_code(2, Numeric),
        Part::account_number(12, AlphaNumeric),
        Part::padding(3, AllZero),
        Part::currency(3, UpperAlpha),
    ] },
    Entry { alpha2: "NL", alpha3: "NLD", name: "Netherlands", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(10, Numeric),
    ] },
    Entry { alpha2: "NO", alpha3: "NOR", name: "Norway", parts: &[
        Part::bank_code(4, Numeric),
        Part::account_number(6, Numeric),
        Part::national_check_digit(1, Numeric),
    ] },
    Entry { alpha2: "PK", alpha3: "PAK", name: "Pakistan", parts: &[
        Part::bank_code(4, AlphaNumeric),
        Part::account_number(16, Numeric),
    ] },
    Entry { alpha2: "PL", alpha3: "POL", name: "Poland", parts: &[
        Part::bank_code(3, Numeric),
        Part::branch_code(4, Numeric),
        Part::national_check_digit(1, Numeric),
        Part::account_number(16, Numeric),
    ] },
    Entry { alpha2: "PS", alpha3: "PSE", name: "Palestine", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(21, AlphaNumeric),
    ] },
    Entry { alpha2: "PT", alpha3: "PRT", name: "Portugal", parts: &[
        Part::bank_code(4, Numeric),
        Part::branch_code(4, Numeric),
        Part::account_number(11, Numeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "QA", alpha3: "QAT", name: "Qatar", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(21, AlphaNumeric),
    ] },
    Entry { alpha2: "RO", alpha3: "ROU", name: "Romania", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::account_number(16, AlphaNumeric),
    ] },
    Entry { alpha2: "RS", alpha3: "SRB", name: "Serbia", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(13, Numeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "SA", alpha3: "SAU", name: "Saudi Arabia", parts: &[
        Part::bank_code(2, Numeric),
        Part::account_number(18, AlphaNumeric),
    ] },
    Entry { alpha2: "SC", alpha3: "SYC", name: "Seychelles", parts: &[
        Part::bank_code(4, UpperAlpha),
        Part::branch_code(4, Numeric),
        Part::account_number(16, Numeric),
        Part::currency(3, UpperAlpha),
    ] },
    Entry { alpha2: "SE", alpha3: "SWE", name: "Sweden", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(17, Numeric),
    ] },
    Entry { alpha2: "SI", alpha3: "SVN", name: "Slovenia", parts: &[
        Part::bank_code(2, Numeric),
        Part::branch_code(3, Numeric),
        Part::account_number(8, Numeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "SK", alpha3: "SVK", name: "Slovakia", parts: &[
        Part::bank_code(4, Numeric),
        Part::account_number(16, Numeric),
    ] },
    Entry { alpha2: "SM", alpha3: "SMR", name: "San Marino", parts: &[
        Part::national_check_digit(1, UpperAlpha),
        Part::bank_code(5, Numeric),
        Part::branch_code(5, Numeric),
        Part::account_number(12, AlphaNumeric),
    ] },
    Entry { alpha2: "TL", alpha3: "TLS", name: "East Timor", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(14, Numeric),
        Part::national_check_digit(2, Numeric),
    ] },
    Entry { alpha2: "TN", alpha3: "TUN", name: "Tunisia", parts: &[
        Part::bank_code(2, Numeric),
        Part::branch_code(3, Numeric),
        Part::account_number(15, AlphaNumeric),
    ] },
    Entry { alpha2: "TR", alpha3: "TUR", name: "Turkey", parts: &[
        Part::bank_code(5, Numeric),
        Part::national_check_digit(1, AlphaNumeric),
        Part::account_number(16, AlphaNumeric),
    ] },
    Entry { alpha2: "UA", alpha3: "UKR", name: "Ukraine", parts: &[
        Part::bank_code(6, Numeric),
        Part::account_number(19, AlphaNumeric),
    ] },
    Entry { alpha2: "VA", alpha3: "VAT", name: "Vatican City", parts: &[
        Part::bank_code(3, Numeric),
        Part::account_number(15, Numeric),
    ] },
    Entry { alpha2: "VG", alpha3: "VGB", name: "British Virgin Islands", parts: &[
        Part::bank_code(4, AlphaNumeric),
        Part::account_number(16, Numeric),
    ] },
    Entry { alpha2: "XK", alpha3: "RKS", name: "Kosovo", parts: &[
        Part::bank_code(4, Numeric),
        Part::account_number(12, Numeric),
    ] },
];
